//! Rendering engine seam
//!
//! The engine is a black box: it gets a storage context and URLs, and reports
//! back through `SessionEvent`s delivered on the UI thread.

use serde::{Deserialize, Serialize};
use url::Url;

use searchtabs_storage::StorageContext;
use searchtabs_theme::Color;

use crate::Result;

/// One tab's rendering surface.
pub trait RenderSurface {
    fn bind(&mut self, context: &StorageContext);

    fn navigate(&mut self, url: &Url);

    fn reload(&mut self);

    /// Color shown behind the page while it paints.
    fn set_background(&mut self, color: Color);
}

/// Creates rendering surfaces for new tabs.
pub trait SurfaceFactory {
    fn create_surface(&mut self) -> Result<Box<dyn RenderSurface>>;
}

/// Lifecycle notifications emitted by the engine for one surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    NavigationStarted,
    Progress { percent: u8 },
    NavigationFinished { success: bool },
    TitleChanged { title: String },
}
