//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] searchtabs_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] searchtabs_tabs::TabError),

    #[error("Theme error: {0}")]
    Theme(#[from] searchtabs_theme::ThemeError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] searchtabs_navigation::NavigationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
