//! Where the OS theme comes from

use parking_lot::Mutex;
use std::time::Duration;

use crate::Result;

/// Reports the OS-level theme by name (`"Light"`, `"Dark"`, or anything else
/// the platform comes up with).
pub trait ThemeSource: Send + Sync {
    fn query(&self) -> Result<String>;

    /// Block until the OS theme changes and return the new name.
    ///
    /// Called repeatedly from the listener thread. An error ends the listener.
    fn wait_for_change(&self) -> Result<String>;
}

/// OS theme detection backed by `dark-light`.
pub struct SystemThemeSource {
    poll_interval: Duration,
    last_seen: Mutex<Option<String>>,
}

impl SystemThemeSource {
    pub fn new() -> Self {
        Self::with_poll_interval(Duration::from_secs(1))
    }

    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            last_seen: Mutex::new(None),
        }
    }

    fn detect() -> String {
        match dark_light::detect() {
            dark_light::Mode::Dark => "Dark".to_string(),
            dark_light::Mode::Light => "Light".to_string(),
            // No preference exposed by the desktop
            dark_light::Mode::Default => "Default".to_string(),
        }
    }
}

impl Default for SystemThemeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSource for SystemThemeSource {
    fn query(&self) -> Result<String> {
        Ok(Self::detect())
    }

    fn wait_for_change(&self) -> Result<String> {
        let baseline = self
            .last_seen
            .lock()
            .clone()
            .unwrap_or_else(Self::detect);

        loop {
            std::thread::sleep(self.poll_interval);

            let current = Self::detect();
            if current != baseline {
                *self.last_seen.lock() = Some(current.clone());
                return Ok(current);
            }
        }
    }
}
