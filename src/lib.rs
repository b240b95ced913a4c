//! Folio - a minimal desktop PDF viewer
//!
//! A single window that opens a PDF file, renders one page at a time through
//! PDFium, and lets the user navigate pages and zoom. All document parsing
//! and rasterization is delegated to the rendering library; this crate is the
//! event-driven GUI shell around it.

pub mod engine;
pub mod input;
pub mod nav;
pub mod pdf;
pub mod ui;

pub use input::Command;
pub use nav::NavState;
pub use pdf::{Document, PdfError, RenderedPage};
pub use ui::{Message, ViewerApp};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::input::Command;
    pub use crate::nav::NavState;
    pub use crate::pdf::{Document, PdfError};
    pub use crate::ui::{Message, ViewerApp};
}
