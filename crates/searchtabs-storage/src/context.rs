//! Engine storage context
//!
//! One `StorageContext` exists per process. Every tab's rendering surface is
//! bound to it, so all sessions share one cache and one cookie store.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::database::Database;

/// Directory under the app data dir holding the engine cache and cookies.
pub const PROFILE_DIR_NAME: &str = "searchtabs_profile";

/// HTTP cache limit handed to the engine (100 MB).
pub const CACHE_MAX_BYTES: u64 = 100 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageContext {
    name: String,
    path: PathBuf,
    cache_max_bytes: u64,
    /// Cookies are written to the profile directory and survive restarts
    persistent_cookies: bool,
}

impl StorageContext {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cache_max_bytes(&self) -> u64 {
        self.cache_max_bytes
    }

    pub fn persistent_cookies(&self) -> bool {
        self.persistent_cookies
    }
}

/// Owns the profile location and the reset protocol around it.
pub struct StorageManager {
    pub(crate) db: Database,
    pub(crate) profile_path: PathBuf,
}

impl StorageManager {
    pub fn new(db: Database, data_dir: &Path) -> Self {
        Self {
            db,
            profile_path: data_dir.join(PROFILE_DIR_NAME),
        }
    }

    pub fn profile_path(&self) -> &Path {
        &self.profile_path
    }

    /// Build the process-wide storage context.
    ///
    /// Must be called once per process, after `apply_pending_reset`. The
    /// directory itself is created lazily by the engine.
    pub fn setup_context(&self) -> StorageContext {
        let context = StorageContext {
            name: PROFILE_DIR_NAME.to_string(),
            path: self.profile_path.clone(),
            cache_max_bytes: CACHE_MAX_BYTES,
            persistent_cookies: true,
        };

        tracing::info!(
            path = %context.path.display(),
            cache_max_bytes = context.cache_max_bytes,
            "Storage context set up"
        );

        context
    }
}
