//! Typed access to the persisted settings keys

use crate::database::Database;
use crate::Result;

/// Keys of the persisted settings table.
pub mod keys {
    /// `System` | `Light` | `Dark`
    pub const THEME: &str = "theme";
    pub const CONFIRM_CLOSE_TABS: &str = "confirm_close_tabs";
    /// Set by a confirmed reset request, consumed by the next startup.
    pub const RESET_PROFILE: &str = "reset_profile";
}

impl Database {
    /// Read a boolean setting. Anything other than `true`/`false` reads
    /// as `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        Ok(match self.get_setting(key)?.as_deref() {
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                tracing::warn!(key, value = other, "Unrecognized boolean setting, using default");
                default
            }
            None => default,
        })
    }

    pub fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set_setting(key, if value { "true" } else { "false" })
    }
}
