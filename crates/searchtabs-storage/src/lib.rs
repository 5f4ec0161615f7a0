//! SearchTabs Storage Layer
//!
//! Owns everything that touches disk:
//! - the SQLite settings store shared by every component
//! - the engine profile (`StorageContext`) and its on-disk location
//! - the two-phase profile reset protocol

mod context;
mod database;
mod error;
mod migrations;
mod reset;
mod settings;

pub use context::{StorageContext, StorageManager, CACHE_MAX_BYTES, PROFILE_DIR_NAME};
pub use database::Database;
pub use error::StorageError;
pub use reset::{ConfirmPrompt, Relauncher, ResetOutcome, ResetRequest, SystemRelauncher};
pub use settings::keys;

pub type Result<T> = std::result::Result<T, StorageError>;
