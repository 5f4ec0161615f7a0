//! SearchTabs Core
//!
//! Startup order and input routing for the SearchTabs shell. The window
//! chrome and rendering engine sit outside this crate and talk to it through
//! `Shell`.

mod config;
mod error;
mod logging;
mod shell;

pub use config::{Config, CONFIG_FILE_NAME, DEFAULT_HOME_URL, SETTINGS_FILE_NAME};
pub use error::CoreError;
pub use logging::{init_logging, LogGuard, LOG_FILE_NAME};
pub use shell::Shell;

// Re-export core components
pub use searchtabs_navigation::{Action, KeyCombo, Modifiers, NavigationController, ShortcutMap};
pub use searchtabs_storage::{
    ConfirmPrompt, Database, Relauncher, ResetOutcome, ResetRequest, StorageContext,
    StorageManager, SystemRelauncher,
};
pub use searchtabs_tabs::{
    CloseOutcome, RenderSurface, SessionEvent, SessionId, SurfaceFactory, TabEvent, TabRegistry,
    TabState,
};
pub use searchtabs_theme::{
    Color, ColorPalette, EffectiveTheme, SystemThemeSource, ThemeChange, ThemeCoordinator,
    ThemePreference, ThemeSource,
};

pub type Result<T> = std::result::Result<T, CoreError>;
