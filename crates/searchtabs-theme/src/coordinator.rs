//! Theme Coordinator
//!
//! Owns the theme preference, resolves it against the OS when it is
//! `System`, and notifies subscribers on the UI thread.

use crossbeam_channel::{Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use searchtabs_storage::{keys, Database};

use crate::listener::{self, OsThemeEvent, EVENT_QUEUE_CAPACITY};
use crate::palette::ColorPalette;
use crate::preference::{EffectiveTheme, ThemePreference};
use crate::source::ThemeSource;
use crate::stylesheet::{self, Icon, FALLBACK_ICON};

/// Delivered to subscribers on every theme change.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeChange {
    /// The nominal preference, `System` for OS-driven changes
    pub preference: ThemePreference,
    pub effective: EffectiveTheme,
    /// Palette resolved when the change was delivered
    pub palette: ColorPalette,
}

type Observer = Box<dyn FnMut(&ThemeChange)>;

pub struct ThemeCoordinator {
    db: Database,
    source: Arc<dyn ThemeSource>,
    preference: ThemePreference,
    events_tx: Sender<OsThemeEvent>,
    events_rx: Receiver<OsThemeEvent>,
    listener_running: Arc<AtomicBool>,
    listener_starts: usize,
    observers: Vec<Observer>,
}

impl ThemeCoordinator {
    /// Load the persisted preference and start the OS listener if needed.
    pub fn new(db: Database, source: Arc<dyn ThemeSource>) -> Self {
        let preference = load_preference(&db);
        let (events_tx, events_rx) = crossbeam_channel::bounded(EVENT_QUEUE_CAPACITY);

        let mut coordinator = Self {
            db,
            source,
            preference,
            events_tx,
            events_rx,
            listener_running: Arc::new(AtomicBool::new(false)),
            listener_starts: 0,
            observers: Vec::new(),
        };

        if preference == ThemePreference::System {
            coordinator.start_listener();
        }

        tracing::info!(preference = %preference, "Theme coordinator ready");

        coordinator
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Resolve the preference to `Light` or `Dark`.
    ///
    /// Only `System` consults the OS; an unrecognized or failed OS answer
    /// resolves to `Dark`.
    pub fn effective_theme(&self) -> EffectiveTheme {
        match self.preference {
            ThemePreference::Light => EffectiveTheme::Light,
            ThemePreference::Dark => EffectiveTheme::Dark,
            ThemePreference::System => self.resolve_system(),
        }
    }

    pub fn palette(&self) -> ColorPalette {
        ColorPalette::for_theme(self.effective_theme())
    }

    /// Persist a new preference and notify subscribers.
    pub fn set_preference(&mut self, preference: ThemePreference) -> ThemeChange {
        let previous = self.preference;
        self.preference = preference;

        if let Err(e) = self.db.set_setting(keys::THEME, preference.as_str()) {
            tracing::error!(error = %e, "Failed to persist theme preference");
        }

        if preference == ThemePreference::System && previous != ThemePreference::System {
            self.start_listener();
        }

        tracing::info!(from = %previous, to = %preference, "Theme preference changed");

        let change = self.current_change();
        self.notify(&change);
        change
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Drain OS theme events queued by the listener thread.
    ///
    /// Call from the UI thread's event loop. Any number of queued events
    /// collapse into at most one notification, and none is sent unless the
    /// preference is still `System`.
    pub fn pump(&mut self) -> Option<ThemeChange> {
        let mut latest = None;
        while let Ok(event) = self.events_rx.try_recv() {
            latest = Some(event);
        }

        let event = latest?;
        if self.preference != ThemePreference::System {
            tracing::debug!(os_theme = %event.os_theme, "Ignoring OS theme change, preference is explicit");
            return None;
        }

        tracing::info!(os_theme = %event.os_theme, "OS theme changed");

        let change = self.current_change();
        self.notify(&change);
        Some(change)
    }

    pub fn is_listening(&self) -> bool {
        self.listener_running.load(Ordering::SeqCst)
    }

    pub fn main_stylesheet(&self) -> String {
        stylesheet::main_window(&self.palette())
    }

    pub fn settings_stylesheet(&self) -> String {
        let theme = self.effective_theme();
        stylesheet::settings_dialog(theme, &ColorPalette::for_theme(theme))
    }

    pub fn message_box_stylesheet(&self) -> String {
        let theme = self.effective_theme();
        stylesheet::message_box(theme, &ColorPalette::for_theme(theme))
    }

    /// Themed icon for a toolbar button name (`home`, `add`, `settings`).
    pub fn icon_path(&self, name: &str) -> &'static str {
        Icon::from_name(name)
            .map(|icon| icon.path(self.effective_theme()))
            .unwrap_or(FALLBACK_ICON)
    }

    fn resolve_system(&self) -> EffectiveTheme {
        match self.source.query() {
            Ok(name) => EffectiveTheme::from_os_name(&name).unwrap_or_else(|| {
                tracing::debug!(os_theme = %name, "Unrecognized OS theme, using dark");
                EffectiveTheme::Dark
            }),
            Err(e) => {
                tracing::warn!(error = %e, "OS theme query failed, using dark");
                EffectiveTheme::Dark
            }
        }
    }

    fn current_change(&self) -> ThemeChange {
        let effective = self.effective_theme();
        ThemeChange {
            preference: self.preference,
            effective,
            palette: ColorPalette::for_theme(effective),
        }
    }

    fn notify(&mut self, change: &ThemeChange) {
        for observer in &mut self.observers {
            observer(change);
        }
    }

    fn start_listener(&mut self) {
        if self.listener_running.swap(true, Ordering::SeqCst) {
            tracing::debug!("OS theme listener already running");
            return;
        }

        match listener::spawn(
            Arc::clone(&self.source),
            self.events_tx.clone(),
            Arc::clone(&self.listener_running),
        ) {
            Ok(()) => {
                self.listener_starts += 1;
                tracing::info!("OS theme listener started");
            }
            Err(e) => {
                self.listener_running.store(false, Ordering::SeqCst);
                tracing::warn!(error = %e, "Failed to start OS theme listener");
            }
        }
    }
}

fn load_preference(db: &Database) -> ThemePreference {
    match db.get_setting(keys::THEME) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %value, "Unrecognized theme preference, using System");
            ThemePreference::System
        }),
        Ok(None) => ThemePreference::System,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read theme preference, using System");
            ThemePreference::System
        }
    }
}
