//! Document handle over the PDFium rendering library.

use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine;
use crate::nav;

/// Errors surfaced by the document layer.
#[derive(Debug, Error)]
pub enum PdfError {
    /// The PDFium dynamic library could not be bound.
    #[error("failed to load the PDFium library: {0}")]
    Init(String),

    /// The file is missing, unreadable, or not a valid PDF.
    #[error("failed to open {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    /// Page index outside the document. Unreachable through the UI, which
    /// disables navigation past either end.
    #[error("page index {index} out of range (document has {count} pages)")]
    PageIndex { index: u16, count: u16 },

    /// PDFium failed to rasterize the page.
    #[error("failed to render page {index}: {reason}")]
    Render { index: u16, reason: String },
}

/// A page rasterized to RGBA pixels at a fixed scale.
pub struct RenderedPage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// A loaded PDF document.
///
/// Owns the underlying PDFium document for the lifetime of the handle; the
/// viewer replaces the whole handle when a new file is opened.
#[derive(Debug)]
pub struct Document {
    document: PdfDocument<'static>,
    uri: String,
    file_name: String,
}

impl Document {
    /// Load a PDF from a local path.
    ///
    /// Relative paths are resolved to their canonical absolute form first and
    /// kept as a `file://` location string for display. On failure the
    /// caller's previous document is untouched.
    pub fn open(path: &Path) -> Result<Self, PdfError> {
        let canonical = path.canonicalize().map_err(|e| PdfError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let uri = format!("file://{}", canonical.display());
        let file_name = canonical
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| canonical.display().to_string());

        let pdfium = Box::leak(Box::new(engine::init_pdfium()?));

        let document = pdfium
            .load_pdf_from_file(&canonical, None)
            .map_err(|e| PdfError::Load {
                path: canonical.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            document,
            uri,
            file_name,
        })
    }

    /// Location the document was opened from, as a `file://` URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn page_count(&self) -> u16 {
        self.document.pages().len()
    }

    /// Intrinsic size of a page in points.
    pub fn page_size(&self, index: u16) -> Result<(f32, f32), PdfError> {
        let page = self.page(index)?;
        Ok((page.width().value, page.height().value))
    }

    /// Rasterize a page, pre-scaled uniformly by `scale`.
    ///
    /// The buffer covers exactly the canvas dimensions for the page at that
    /// scale: white background, page content drawn by PDFium in its own
    /// unscaled coordinate space.
    pub fn render_page(&self, index: u16, scale: f32) -> Result<RenderedPage, PdfError> {
        let (page_width, page_height) = self.page_size(index)?;
        let (width, height) = nav::canvas_size(page_width, page_height, scale);

        let page = self.page(index)?;

        let config = PdfRenderConfig::new()
            .set_target_width(width as i32)
            .set_target_height(height as i32);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| PdfError::Render {
                index,
                reason: e.to_string(),
            })?;

        let rgba = bitmap.as_image().to_rgba8();
        let width = rgba.width();
        let height = rgba.height();
        let pixels = rgba.into_raw();

        Ok(RenderedPage {
            pixels,
            width,
            height,
        })
    }

    fn page(&self, index: u16) -> Result<PdfPage<'_>, PdfError> {
        self.document
            .pages()
            .get(index)
            .map_err(|_| PdfError::PageIndex {
                index,
                count: self.page_count(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_missing_file_is_a_load_error() {
        let err = Document::open(Path::new("/no/such/file.pdf")).unwrap_err();
        assert!(matches!(err, PdfError::Load { .. }));
    }

    #[test]
    fn open_relative_missing_file_is_a_load_error() {
        let err = Document::open(Path::new("does-not-exist.pdf")).unwrap_err();
        assert!(matches!(err, PdfError::Load { .. }));
    }

    #[test]
    fn open_garbage_file_fails() {
        // Fails at document load when PDFium is present, at library binding
        // when it is not; either way the open reports an error.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not a pdf").unwrap();

        assert!(Document::open(file.path()).is_err());
    }
}
