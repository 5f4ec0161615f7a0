//! Tab error types

use thiserror::Error;

use crate::session::SessionId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(SessionId),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("No tab is focused")]
    NoFocusedTab,

    #[error("Rendering engine error: {0}")]
    Engine(String),
}
