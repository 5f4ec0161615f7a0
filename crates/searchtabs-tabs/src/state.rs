//! Tab State Machine
//!
//! ```text
//! Created
//!   ↓ navigate
//! Loading  ←──────────┐
//!   ↓ finished        │ navigation started
//! Loaded | Errored ───┘
//!
//! any live state ──finished──→ Loaded | Errored
//! any state ──close──→ Closed
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Surface exists but has not been asked to load anything
    Created,
    /// A navigation is in flight
    Loading,
    /// The last navigation succeeded
    Loaded,
    /// The last navigation failed
    Errored,
    /// Removed from the registry, surface released
    Closed,
}

impl TabState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: TabState) -> bool {
        match (self, target) {
            (TabState::Closed, _) => false,
            (_, TabState::Closed) => true,
            (TabState::Created, TabState::Loading) => true,
            // The engine reports every finished load, started or not
            (_, TabState::Loaded | TabState::Errored) => true,
            // A new navigation starts from a finished page
            (TabState::Loaded, TabState::Loading) => true,
            (TabState::Errored, TabState::Loading) => true,
            // Same state is always valid (no-op)
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Created => "created",
            TabState::Loading => "loading",
            TabState::Loaded => "loaded",
            TabState::Errored => "errored",
            TabState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(TabState::Created.can_transition_to(TabState::Loading));
        assert!(TabState::Loading.can_transition_to(TabState::Loaded));
        assert!(TabState::Loading.can_transition_to(TabState::Errored));
        assert!(TabState::Loaded.can_transition_to(TabState::Loading));
        assert!(TabState::Errored.can_transition_to(TabState::Loading));
        assert!(TabState::Loading.can_transition_to(TabState::Loading));
        // Finish events outside a tracked load
        assert!(TabState::Loaded.can_transition_to(TabState::Errored));
        assert!(TabState::Errored.can_transition_to(TabState::Loaded));
        assert!(TabState::Created.can_transition_to(TabState::Loaded));

        for state in [
            TabState::Created,
            TabState::Loading,
            TabState::Loaded,
            TabState::Errored,
        ] {
            assert!(state.can_transition_to(TabState::Closed));
        }
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!TabState::Loaded.can_transition_to(TabState::Created));
        assert!(!TabState::Loading.can_transition_to(TabState::Created));
        // Closed is terminal
        assert!(!TabState::Closed.can_transition_to(TabState::Loading));
        assert!(!TabState::Closed.can_transition_to(TabState::Errored));
        assert!(!TabState::Closed.can_transition_to(TabState::Closed));
    }
}
