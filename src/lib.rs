//! fretlib — fretboard scale diagram layout and rendering library.
//!
//! Translates an (instrument, tuning, capo, key, scale, accidental) tuple
//! into a scale diagram on a stringed-instrument fretboard: correctly
//! spelled note names per degree, pitch-to-fret mapping across arbitrary
//! tunings, octave-banded marker colors and fretting-position highlights.
//! Rendering goes through pluggable drawing backends: SVG markup for
//! screens and a paginated PDF document for print.
//!
//! # Example
//! ```no_run
//! use fretlib::{render_to_svg, RenderParams};
//!
//! let params = RenderParams::default();
//! let svg = render_to_svg(&params).unwrap();
//! println!("{} bytes of SVG", svg.len());
//! ```

pub mod data;
pub mod diagram;
pub mod model;
pub mod painter;
pub mod theory;
pub mod utils;

#[cfg(target_os = "android")]
pub mod android;

use std::path::{Path, PathBuf};

pub use diagram::{match_pattern, DiagramInfo, FretboardDiagram};
pub use model::*;
pub use painter::{LineCap, MarkerData, Painter, PdfPainter, SvgPainter};

/// Render a scale diagram to an SVG string.
pub fn render_to_svg(params: &RenderParams) -> Result<String, String> {
    params.validate()?;
    let mut diagram = FretboardDiagram::new(params.clone());
    let mut painter = SvgPainter::new();
    diagram.render(&mut painter);
    Ok(painter.into_svg())
}

/// Render a scale diagram to a PDF document.
pub fn render_to_pdf(params: &RenderParams) -> Result<Vec<u8>, String> {
    params.validate()?;
    let mut diagram = FretboardDiagram::new(params.clone());
    let mut painter = PdfPainter::new();
    diagram.render(&mut painter);
    Ok(painter.into_bytes())
}

/// Render a scale diagram into `dir`, named after the diagram's file-safe
/// title, and return the written path.
pub fn render_svg_file(params: &RenderParams, dir: &Path) -> Result<PathBuf, String> {
    params.validate()?;
    let mut diagram = FretboardDiagram::new(params.clone());
    let mut painter = SvgPainter::new();
    let info = diagram.render(&mut painter);
    let path = dir.join(format!("{}.svg", info.file_title));
    painter.save(&path)?;
    Ok(path)
}

/// Parse rendering parameters from JSON, the FFI exchange format.
pub fn params_from_json(json: &str) -> Result<RenderParams, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid parameter JSON: {e}"))
}

/// Serialize rendering parameters to JSON.
pub fn params_to_json(params: &RenderParams) -> Result<String, String> {
    serde_json::to_string(params).map_err(|e| format!("JSON serialization error: {e}"))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and desktop embedding
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render the diagram described by a JSON parameter object to SVG and
/// return it as a C string, or null on failure. The caller must free the
/// returned string with `fretlib_free_string`.
///
/// # Safety
/// `params_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_svg(params_json: *const c_char) -> *mut c_char {
    if params_json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(params_json) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match params_from_json(json).and_then(|p| render_to_svg(&p)) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(e) => {
            log::error!("fretlib_render_svg: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render the diagram described by a JSON parameter object to a PDF file
/// at `path`. Returns false on failure.
///
/// # Safety
/// `params_json` and `path` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_pdf_file(
    params_json: *const c_char,
    path: *const c_char,
) -> bool {
    if params_json.is_null() || path.is_null() {
        return false;
    }
    let json = match unsafe { CStr::from_ptr(params_json) }.to_str() {
        Ok(s) => s,
        Err(_) => return false,
    };
    let path_str = match unsafe { CStr::from_ptr(path) }.to_str() {
        Ok(s) => s,
        Err(_) => return false,
    };

    let result = params_from_json(json)
        .and_then(|p| render_to_pdf(&p))
        .and_then(|bytes| {
            std::fs::write(path_str, bytes).map_err(|e| format!("Failed to write '{path_str}': {e}"))
        });

    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("fretlib_render_pdf_file: {e}");
            false
        }
    }
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
