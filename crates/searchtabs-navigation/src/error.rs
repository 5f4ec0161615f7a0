//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Invalid key combination: {0}")]
    InvalidKeyCombo(String),

    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
}
