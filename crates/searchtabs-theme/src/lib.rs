//! SearchTabs Theme Coordinator
//!
//! Resolves the user's theme preference (`System`, `Light`, `Dark`) into one of
//! two fixed palettes and tells subscribers whenever it changes.
//!
//! OS theme changes are observed on a dedicated listener thread and handed to
//! the UI thread through a bounded channel; nothing else crosses threads.

mod coordinator;
mod error;
mod listener;
mod palette;
mod preference;
mod source;
mod stylesheet;

pub use coordinator::{ThemeChange, ThemeCoordinator};
pub use error::ThemeError;
pub use palette::{Color, ColorPalette};
pub use preference::{EffectiveTheme, ThemePreference};
pub use source::{SystemThemeSource, ThemeSource};
pub use stylesheet::Icon;

pub type Result<T> = std::result::Result<T, ThemeError>;
