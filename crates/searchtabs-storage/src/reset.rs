//! Two-phase profile reset
//!
//! ```text
//! request_reset        (running process)
//!   confirm -> reset_profile = true -> flush -> relaunch -> exit
//!
//! apply_pending_reset  (next process, before any StorageContext exists)
//!   reset_profile? -> delete profile dir (best effort) -> reset_profile = false -> flush
//! ```
//!
//! The profile directory is only deleted by a process that has not yet
//! handed it to the engine, so no live handle can be holding it open.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::context::StorageManager;
use crate::settings::keys;

/// Asks the user whether all browsing data should be wiped.
pub trait ConfirmPrompt {
    fn confirm_reset(&self) -> bool;
}

/// Replaces the running process with a fresh instance of itself.
pub trait Relauncher {
    /// Only returns if the new instance could not be started.
    fn relaunch(&self) -> io::Result<()>;
}

/// Spawns the current executable with the original arguments and exits.
pub struct SystemRelauncher;

impl Relauncher for SystemRelauncher {
    fn relaunch(&self) -> io::Result<()> {
        let exe = std::env::current_exe()?;
        let args: Vec<OsString> = std::env::args_os().skip(1).collect();

        Command::new(&exe).args(&args).spawn()?;

        tracing::info!(exe = %exe.display(), "Spawned replacement process, exiting");
        std::process::exit(0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetRequest {
    /// The user declined; nothing was changed
    Cancelled,
    /// The flag is persisted; the reset runs on the next start
    Scheduled,
    /// The flag could not be persisted; no restart was attempted
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    NotRequested,
    Applied,
    /// The flag was consumed but the directory could not be fully removed
    DeletionFailed,
}

impl StorageManager {
    /// Phase 1: persist the reset request and restart.
    pub fn request_reset(
        &self,
        prompt: &dyn ConfirmPrompt,
        relauncher: &dyn Relauncher,
    ) -> ResetRequest {
        if !prompt.confirm_reset() {
            tracing::info!("Profile reset cancelled by user");
            return ResetRequest::Cancelled;
        }

        let persisted = self
            .db
            .set_bool(keys::RESET_PROFILE, true)
            .and_then(|()| self.db.flush());
        if let Err(e) = persisted {
            tracing::error!(error = %e, "Failed to persist profile reset request");
            return ResetRequest::Failed;
        }

        tracing::info!("Profile reset scheduled, restarting");

        if let Err(e) = relauncher.relaunch() {
            // The flag stays set, so the next manual launch still resets
            tracing::error!(error = %e, "Failed to restart for profile reset");
        }

        ResetRequest::Scheduled
    }

    /// Phase 2: consume a pending reset request.
    ///
    /// Must run before `setup_context`. Never fails: a profile that cannot be
    /// deleted is logged and startup carries on with the stale data.
    pub fn apply_pending_reset(&self) -> ResetOutcome {
        self.apply_pending_reset_with(|path| std::fs::remove_dir_all(path))
    }

    pub fn apply_pending_reset_with<F>(&self, remove: F) -> ResetOutcome
    where
        F: FnOnce(&Path) -> io::Result<()>,
    {
        let requested = match self.db.get_bool(keys::RESET_PROFILE, false) {
            Ok(requested) => requested,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read profile reset flag");
                return ResetOutcome::NotRequested;
            }
        };

        if !requested {
            return ResetOutcome::NotRequested;
        }

        tracing::info!(path = %self.profile_path.display(), "Applying pending profile reset");

        let outcome = match remove(&self.profile_path) {
            Ok(()) => ResetOutcome::Applied,
            Err(e) if e.kind() == io::ErrorKind::NotFound => ResetOutcome::Applied,
            Err(e) => {
                tracing::error!(
                    path = %self.profile_path.display(),
                    error = %e,
                    "Failed to delete profile directory, continuing startup"
                );
                ResetOutcome::DeletionFailed
            }
        };

        let cleared = self
            .db
            .set_bool(keys::RESET_PROFILE, false)
            .and_then(|()| self.db.flush());
        if let Err(e) = cleared {
            tracing::error!(error = %e, "Failed to clear profile reset flag");
        }

        outcome
    }
}
