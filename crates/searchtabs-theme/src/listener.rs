//! OS theme listener thread
//!
//! The thread only ever touches the channel sender and the running flag.
//! Everything else happens when the UI thread drains the channel.

use crossbeam_channel::{Sender, TrySendError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::source::ThemeSource;

/// Capacity of the listener-to-UI queue. One pending event is enough to
/// trigger a re-resolve, so overflow is dropped.
pub(crate) const EVENT_QUEUE_CAPACITY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OsThemeEvent {
    pub os_theme: String,
}

/// Clears the running flag however the thread exits.
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub(crate) fn spawn(
    source: Arc<dyn ThemeSource>,
    events: Sender<OsThemeEvent>,
    running: Arc<AtomicBool>,
) -> std::io::Result<()> {
    thread::Builder::new()
        .name("os-theme-listener".to_string())
        .spawn(move || {
            let _guard = RunningGuard(running);
            run(source.as_ref(), &events);
        })?;
    Ok(())
}

fn run(source: &dyn ThemeSource, events: &Sender<OsThemeEvent>) {
    tracing::debug!("OS theme listener started");

    loop {
        let os_theme = match source.wait_for_change() {
            Ok(os_theme) => os_theme,
            Err(e) => {
                tracing::warn!(error = %e, "OS theme listener stopped");
                return;
            }
        };

        match events.try_send(OsThemeEvent { os_theme }) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::debug!("OS theme event queue full, dropping event");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("Theme coordinator gone, OS theme listener exiting");
                return;
            }
        }
    }
}
