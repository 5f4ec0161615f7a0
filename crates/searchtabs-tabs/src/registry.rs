//! Tab Registry
//!
//! Ordered collection of open tabs plus the focused-tab pointer. Lives on the
//! UI thread; engine notifications arrive there already, so nothing here is
//! locked.

use url::Url;

use searchtabs_storage::StorageContext;
use searchtabs_theme::{Color, ColorPalette, ThemeChange};

use crate::error::TabError;
use crate::session::{SessionId, TabSession};
use crate::state::TabState;
use crate::surface::{SessionEvent, SurfaceFactory};
use crate::Result;

/// What observers (window chrome) hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    Added(SessionId),
    Closed(SessionId),
    /// Close was refused because it was the last tab
    CloseRejected(SessionId),
    Focused(SessionId),
    LoadStarted(SessionId),
    Progress { id: SessionId, percent: u8 },
    LoadFinished { id: SessionId, success: bool },
    TitleChanged { id: SessionId, title: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    /// The tab was the last one and is still open
    Rejected,
}

type Observer = Box<dyn FnMut(&TabEvent)>;

pub struct TabRegistry {
    context: StorageContext,
    factory: Box<dyn SurfaceFactory>,
    home: Url,
    background: Color,
    sessions: Vec<TabSession>,
    focused: Option<SessionId>,
    next_id: u64,
    observers: Vec<Observer>,
}

impl TabRegistry {
    /// Take ownership of the storage context and open the first tab.
    pub fn open(
        context: StorageContext,
        factory: Box<dyn SurfaceFactory>,
        home: Url,
        palette: &ColorPalette,
    ) -> Result<Self> {
        let mut registry = Self {
            context,
            factory,
            home,
            background: palette.background,
            sessions: Vec::new(),
            focused: None,
            next_id: 0,
            observers: Vec::new(),
        };

        registry.add_tab()?;

        Ok(registry)
    }

    /// Open a new tab on the home page and focus it.
    pub fn add_tab(&mut self) -> Result<SessionId> {
        let mut surface = self.factory.create_surface()?;
        surface.bind(&self.context);
        surface.set_background(self.background);

        let id = SessionId(self.next_id);
        self.next_id += 1;

        let mut session = TabSession::new(id, surface);
        session.surface_mut().navigate(&self.home);
        session.start_loading()?;

        self.sessions.push(session);
        self.focused = Some(id);

        tracing::info!(tab_id = %id, url = %self.home, tab_count = self.sessions.len(), "New tab added");

        self.emit(TabEvent::Added(id));
        self.emit(TabEvent::Focused(id));

        Ok(id)
    }

    /// Close a tab. The last remaining tab is never closed.
    pub fn close_tab(&mut self, id: SessionId) -> Result<CloseOutcome> {
        let index = self.index_of(id).ok_or(TabError::NotFound(id))?;

        if self.sessions.len() == 1 {
            tracing::info!(tab_id = %id, "Cannot close last tab");
            self.emit(TabEvent::CloseRejected(id));
            return Ok(CloseOutcome::Rejected);
        }

        let mut session = self.sessions.remove(index);
        if let Err(e) = session.transition_to(TabState::Closed) {
            tracing::warn!(tab_id = %id, error = %e, "Closing tab in unexpected state");
        }
        // Releases the rendering surface
        drop(session);

        tracing::info!(tab_id = %id, index, "Tab closed");
        self.emit(TabEvent::Closed(id));

        if self.focused == Some(id) {
            let next = index.min(self.sessions.len() - 1);
            let next_id = self.sessions[next].id();
            self.focused = Some(next_id);
            self.emit(TabEvent::Focused(next_id));
        }

        Ok(CloseOutcome::Closed)
    }

    pub fn close_focused_tab(&mut self) -> Result<CloseOutcome> {
        let id = self.focused.ok_or(TabError::NoFocusedTab)?;
        self.close_tab(id)
    }

    pub fn focus(&mut self, id: SessionId) -> Result<()> {
        if self.index_of(id).is_none() {
            return Err(TabError::NotFound(id));
        }

        if self.focused != Some(id) {
            self.focused = Some(id);
            self.emit(TabEvent::Focused(id));
        }

        Ok(())
    }

    /// Focus the tab after the focused one, wrapping around.
    pub fn focus_next(&mut self) -> Option<SessionId> {
        let current = self.focused.and_then(|id| self.index_of(id))?;
        let next_id = self.sessions[(current + 1) % self.sessions.len()].id();

        if self.focused != Some(next_id) {
            self.focused = Some(next_id);
            self.emit(TabEvent::Focused(next_id));
        }

        Some(next_id)
    }

    /// Relay an engine notification for one tab.
    ///
    /// Pure forwarding: failures become tab state, nothing is retried, and
    /// events for tabs that are already gone are dropped.
    pub fn handle_event(&mut self, id: SessionId, event: SessionEvent) {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id() == id) else {
            tracing::debug!(tab_id = %id, ?event, "Event for unknown tab ignored");
            return;
        };

        if let Err(e) = session.apply(&event) {
            tracing::warn!(tab_id = %id, ?event, error = %e, "Ignoring lifecycle event");
            return;
        }

        let tab_event = match event {
            SessionEvent::NavigationStarted => {
                tracing::info!(tab_id = %id, "Page load started");
                TabEvent::LoadStarted(id)
            }
            SessionEvent::Progress { .. } => TabEvent::Progress {
                id,
                percent: session.progress(),
            },
            SessionEvent::NavigationFinished { success } => {
                tracing::info!(tab_id = %id, success, "Page load finished");
                TabEvent::LoadFinished { id, success }
            }
            SessionEvent::TitleChanged { title } => {
                tracing::info!(tab_id = %id, title = %title, "Tab title updated");
                TabEvent::TitleChanged { id, title }
            }
        };

        self.emit(tab_event);
    }

    /// Restyle every live surface. Tab state is untouched.
    pub fn apply_palette(&mut self, palette: &ColorPalette) {
        self.background = palette.background;
        for session in &mut self.sessions {
            session.surface_mut().set_background(palette.background);
        }

        tracing::debug!(background = %palette.background, tab_count = self.sessions.len(), "Tabs restyled");
    }

    pub fn on_theme_changed(&mut self, change: &ThemeChange) {
        self.apply_palette(&change.palette);
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&TabEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Always false once `open` has returned.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn sessions(&self) -> &[TabSession] {
        &self.sessions
    }

    pub fn session(&self, id: SessionId) -> Option<&TabSession> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn focused(&self) -> Option<SessionId> {
        self.focused
    }

    pub fn focused_session_mut(&mut self) -> Option<&mut TabSession> {
        let id = self.focused?;
        self.sessions.iter_mut().find(|s| s.id() == id)
    }

    pub fn home(&self) -> &Url {
        &self.home
    }

    pub fn context(&self) -> &StorageContext {
        &self.context
    }

    fn index_of(&self, id: SessionId) -> Option<usize> {
        self.sessions.iter().position(|s| s.id() == id)
    }

    fn emit(&mut self, event: TabEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}
