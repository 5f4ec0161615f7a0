//! The shell
//!
//! Wires the components together in startup order and routes UI input to
//! them. Everything here runs on the UI thread.

use std::io;
use std::path::Path;
use std::sync::Arc;

use searchtabs_navigation::{Action, KeyCombo, NavigationController, ShortcutMap};
use searchtabs_storage::{
    keys, ConfirmPrompt, Database, Relauncher, ResetOutcome, ResetRequest, StorageManager,
};
use searchtabs_tabs::{CloseOutcome, SessionEvent, SessionId, SurfaceFactory, TabRegistry};
use searchtabs_theme::{ThemeChange, ThemeCoordinator, ThemePreference, ThemeSource};

use crate::config::Config;
use crate::Result;

pub struct Shell {
    config: Config,
    db: Database,
    storage: StorageManager,
    theme: ThemeCoordinator,
    tabs: TabRegistry,
    navigation: NavigationController,
    shortcuts: ShortcutMap,
    reset_outcome: ResetOutcome,
}

impl Shell {
    /// Bring the shell up with one tab open on the home page.
    ///
    /// A pending profile reset is applied before the storage context exists.
    pub fn start(
        config: Config,
        engine: Box<dyn SurfaceFactory>,
        theme_source: Arc<dyn ThemeSource>,
    ) -> Result<Self> {
        Self::start_with_remover(config, engine, theme_source, |path| {
            std::fs::remove_dir_all(path)
        })
    }

    /// `start`, deleting the profile with `remove` if a reset is pending.
    pub fn start_with_remover<F>(
        config: Config,
        engine: Box<dyn SurfaceFactory>,
        theme_source: Arc<dyn ThemeSource>,
        remove: F,
    ) -> Result<Self>
    where
        F: FnOnce(&Path) -> io::Result<()>,
    {
        std::fs::create_dir_all(&config.data_dir)?;

        let db = Database::open(config.settings_path())?;

        let storage = StorageManager::new(db.clone(), &config.data_dir);
        let reset_outcome = storage.apply_pending_reset_with(remove);
        let context = storage.setup_context();

        let theme = ThemeCoordinator::new(db.clone(), theme_source);
        let tabs = TabRegistry::open(context, engine, config.home_url.clone(), &theme.palette())?;
        let navigation = NavigationController::new(config.home_url.clone());

        tracing::info!(
            data_dir = %config.data_dir.display(),
            theme = %theme.effective_theme(),
            reset = ?reset_outcome,
            "Shell started"
        );

        Ok(Self {
            config,
            db,
            storage,
            theme,
            tabs,
            navigation,
            shortcuts: ShortcutMap::default(),
            reset_outcome,
        })
    }

    /// Deliver queued OS theme changes. Call from the UI event loop.
    pub fn pump(&mut self) -> Option<ThemeChange> {
        let change = self.theme.pump()?;
        self.tabs.on_theme_changed(&change);
        Some(change)
    }

    pub fn set_theme(&mut self, preference: ThemePreference) -> ThemeChange {
        let change = self.theme.set_preference(preference);
        self.tabs.on_theme_changed(&change);
        change
    }

    /// Observe theme changes from the chrome. Open tabs are restyled on the
    /// same changes.
    pub fn subscribe_theme<F>(&mut self, observer: F)
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        self.theme.subscribe(observer);
    }

    /// Settings dialog entry point, takes the combo box text.
    pub fn set_theme_by_name(&mut self, name: &str) -> Result<ThemeChange> {
        let preference: ThemePreference = name.parse()?;
        Ok(self.set_theme(preference))
    }

    pub fn confirm_close_tabs(&self) -> bool {
        self.db
            .get_bool(keys::CONFIRM_CLOSE_TABS, true)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to read confirm_close_tabs, using default");
                true
            })
    }

    pub fn set_confirm_close_tabs(&self, enabled: bool) -> Result<()> {
        self.db.set_bool(keys::CONFIRM_CLOSE_TABS, enabled)?;
        tracing::info!(enabled, "Updated confirm_close_tabs");
        Ok(())
    }

    pub fn request_reset(
        &self,
        prompt: &dyn ConfirmPrompt,
        relauncher: &dyn Relauncher,
    ) -> ResetRequest {
        self.storage.request_reset(prompt, relauncher)
    }

    /// Run the action bound to `combo`. Returns false if nothing is bound.
    pub fn handle_key(&mut self, combo: &KeyCombo) -> bool {
        let Some(action) = self.shortcuts.resolve(combo) else {
            return false;
        };

        if let Err(e) = self.dispatch(action) {
            tracing::warn!(shortcut = %combo, action = %action, error = %e, "Shortcut failed");
        }
        true
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        tracing::debug!(action = %action, "Dispatching action");

        match action {
            Action::NewTab => {
                self.tabs.add_tab()?;
            }
            Action::Reload => {
                self.navigation.reload(&mut self.tabs);
            }
            Action::CloseTab => {
                self.tabs.close_focused_tab()?;
            }
            Action::NextTab => {
                self.tabs.focus_next();
            }
            Action::GoHome => {
                self.navigation.go_home(&mut self.tabs);
            }
        }

        Ok(())
    }

    /// Tab bar close button.
    pub fn close_tab(&mut self, id: SessionId) -> Result<CloseOutcome> {
        Ok(self.tabs.close_tab(id)?)
    }

    /// Bind a shortcut written as text, e.g. `Ctrl+H`.
    pub fn bind_shortcut(&mut self, combo: &str, action: Action) -> Result<()> {
        let combo = KeyCombo::parse(combo)?;
        tracing::info!(shortcut = %combo, action = %action, "Shortcut bound");
        self.shortcuts.bind(combo, action);
        Ok(())
    }

    /// Engine lifecycle notification for one tab.
    pub fn handle_session_event(&mut self, id: SessionId, event: SessionEvent) {
        self.tabs.handle_event(id, event);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &ThemeCoordinator {
        &self.theme
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabRegistry {
        &mut self.tabs
    }

    pub fn shortcuts(&self) -> &ShortcutMap {
        &self.shortcuts
    }

    /// What startup did about a pending profile reset.
    pub fn reset_outcome(&self) -> ResetOutcome {
        self.reset_outcome
    }
}
