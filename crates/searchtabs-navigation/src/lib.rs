//! SearchTabs Navigation
//!
//! - `NavigationController`: home and reload for the focused tab
//! - `ShortcutMap`: key combos to shell actions
//!
//! Default bindings:
//! - `Ctrl+T` new tab
//! - `Ctrl+R` reload
//! - `Ctrl+W` close tab
//! - `Ctrl+Tab` next tab

mod controller;
mod error;
mod shortcuts;

pub use controller::NavigationController;
pub use error::NavigationError;
pub use shortcuts::{Action, KeyCombo, Modifiers, ShortcutMap};

pub type Result<T> = std::result::Result<T, NavigationError>;
