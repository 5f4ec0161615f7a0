//! Shell configuration
//!
//! User preferences live in the settings database. This is the deployment
//! side: where things are stored and which page a tab opens on.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use searchtabs_storage::PROFILE_DIR_NAME;

use crate::Result;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const SETTINGS_FILE_NAME: &str = "settings.db";
pub const DEFAULT_HOME_URL: &str = "https://www.perplexity.ai";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Application data directory
    pub data_dir: PathBuf,
    /// Settings database, kept outside the profile so a reset spares it
    pub settings_path: PathBuf,
    /// Page every new tab and the home button load
    pub home_url: Url,
}

/// Overrides accepted from `config.json`. Missing fields keep defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    home_url: Option<Url>,
    settings_file: Option<String>,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            settings_path: data_dir.join(SETTINGS_FILE_NAME),
            home_url: default_home_url(),
            data_dir,
        }
    }

    /// Platform data dir for the app, `./.searchtabs` if there is none.
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("SearchTabs"))
            .unwrap_or_else(|| PathBuf::from(".searchtabs"))
    }

    /// Defaults for `data_dir`, overlaid with `config.json` if present.
    ///
    /// A missing or malformed file is not an error.
    pub fn load(data_dir: PathBuf) -> Self {
        let mut config = Self::new(data_dir);
        let path = config.config_path();

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
                return config;
            }
        };

        match serde_json::from_str::<ConfigFile>(&contents) {
            Ok(file) => {
                if let Some(home_url) = file.home_url {
                    config.home_url = home_url;
                }
                if let Some(settings_file) = file.settings_file {
                    config.settings_path = config.data_dir.join(settings_file);
                }
                tracing::info!(path = %path.display(), "Loaded config");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Malformed config, using defaults");
            }
        }

        config
    }

    /// Write the current overrides to `config.json`.
    pub fn save(&self) -> Result<()> {
        let settings_file = self
            .settings_path
            .strip_prefix(&self.data_dir)
            .ok()
            .map(|p| p.to_string_lossy().into_owned());
        let file = ConfigFile {
            home_url: Some(self.home_url.clone()),
            settings_file,
        };

        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(self.config_path(), serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_DIR_NAME)
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load(Self::data_dir())
    }
}

fn default_home_url() -> Url {
    Url::parse(DEFAULT_HOME_URL).expect("DEFAULT_HOME_URL is a valid URL")
}
