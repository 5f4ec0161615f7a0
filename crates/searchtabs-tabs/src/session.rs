//! Tab session
//!
//! A tab shows:
//! - Title (`Loading...` until the page reports one)
//! - Load progress while a navigation is in flight

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::state::TabState;
use crate::surface::{RenderSurface, SessionEvent};
use crate::Result;

/// Title shown before the page reports its own.
pub const PLACEHOLDER_TITLE: &str = "Loading...";

/// Identifier of a tab, unique for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct TabSession {
    id: SessionId,
    title: String,
    /// 0..=100
    progress: u8,
    progress_visible: bool,
    state: TabState,
    surface: Box<dyn RenderSurface>,
}

impl TabSession {
    pub(crate) fn new(id: SessionId, surface: Box<dyn RenderSurface>) -> Self {
        Self {
            id,
            title: PLACEHOLDER_TITLE.to_string(),
            progress: 0,
            progress_visible: false,
            state: TabState::Created,
            surface,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn progress_visible(&self) -> bool {
        self.progress_visible
    }

    pub fn state(&self) -> TabState {
        self.state
    }

    pub fn surface_mut(&mut self) -> &mut dyn RenderSurface {
        self.surface.as_mut()
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&mut self, new_state: TabState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            tab_id = %self.id,
            from = %self.state,
            to = %new_state,
            "Tab state transition"
        );

        self.state = new_state;

        Ok(())
    }

    /// Enter `Loading` with the progress bar shown from zero.
    pub(crate) fn start_loading(&mut self) -> Result<()> {
        self.transition_to(TabState::Loading)?;
        self.progress = 0;
        self.progress_visible = true;
        Ok(())
    }

    /// Fold an engine notification into the session.
    pub(crate) fn apply(&mut self, event: &SessionEvent) -> Result<()> {
        match event {
            SessionEvent::NavigationStarted => self.start_loading()?,
            SessionEvent::Progress { percent } => {
                self.progress = (*percent).min(100);
            }
            SessionEvent::NavigationFinished { success } => {
                let target = if *success {
                    TabState::Loaded
                } else {
                    TabState::Errored
                };
                self.transition_to(target)?;
                self.progress_visible = false;
            }
            SessionEvent::TitleChanged { title } => {
                self.title = title.clone();
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for TabSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabSession")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("progress", &self.progress)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
