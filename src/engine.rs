//! PDFium dynamic library binding.

use pdfium_render::prelude::*;
use std::path::PathBuf;

use crate::pdf::PdfError;

/// Bind the PDFium dynamic library.
///
/// Search order: alongside the executable, the current working directory,
/// `/usr/lib`, then whatever the platform linker resolves.
pub fn init_pdfium() -> Result<Pdfium, PdfError> {
    for dir in search_dirs() {
        let name = Pdfium::pdfium_platform_library_name_at_path(&dir);
        if let Ok(bindings) = Pdfium::bind_to_library(name) {
            return Ok(Pdfium::new(bindings));
        }
    }

    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|e| PdfError::Init(e.to_string()))
}

fn search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    dirs.push(PathBuf::from("./"));
    dirs.push(PathBuf::from("/usr/lib/"));

    dirs
}
