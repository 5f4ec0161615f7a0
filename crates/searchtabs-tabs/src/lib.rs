//! SearchTabs Tab Registry
//!
//! Owns the ordered set of open tabs. Every tab is a `TabSession` bound to the
//! process-wide storage context, and the registry never lets the last one
//! close.

mod error;
mod registry;
mod session;
mod state;
mod surface;

pub use error::TabError;
pub use registry::{CloseOutcome, TabEvent, TabRegistry};
pub use session::{SessionId, TabSession};
pub use state::TabState;
pub use surface::{RenderSurface, SessionEvent, SurfaceFactory};

pub type Result<T> = std::result::Result<T, TabError>;
