//! Theme error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Unknown theme preference: {0}")]
    UnknownPreference(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("OS theme source unavailable: {0}")]
    Source(String),
}
