//! Navigation Controller
//!
//! Issues commands to the focused tab's surface. Tab state is left alone:
//! the engine reports the resulting load through the lifecycle relay.

use url::Url;

use searchtabs_tabs::{SessionId, TabRegistry};

#[derive(Debug, Clone)]
pub struct NavigationController {
    home: Url,
}

impl NavigationController {
    pub fn new(home: Url) -> Self {
        Self { home }
    }

    pub fn home(&self) -> &Url {
        &self.home
    }

    /// Point the focused tab at the home page. No-op without a focused tab.
    pub fn go_home(&self, registry: &mut TabRegistry) -> Option<SessionId> {
        let session = registry.focused_session_mut()?;
        session.surface_mut().navigate(&self.home);

        tracing::info!(tab_id = %session.id(), url = %self.home, "Navigating home");
        Some(session.id())
    }

    /// Reload the focused tab. No-op without a focused tab.
    pub fn reload(&self, registry: &mut TabRegistry) -> Option<SessionId> {
        let session = registry.focused_session_mut()?;
        session.surface_mut().reload();

        tracing::info!(tab_id = %session.id(), "Reloading page");
        Some(session.id())
    }
}
