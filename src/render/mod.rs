//! External layout engine collaborator (Graphviz).
//!
//! The core always produces the DOT artifact on its own; this module
//! only turns DOT text into image/PDF bytes by shelling out to the
//! locally installed `dot` binary. When the binary is missing, callers
//! degrade to DOT-only export instead of failing the whole pipeline.

use crate::error::{ConceptMapError, Result};
use std::process::Command;

/// Output formats supported by the renderer.
pub const SUPPORTED_FORMATS: &[&str] = &["png", "svg", "pdf"];

/// Hint shown when the Graphviz binary cannot be found.
const INSTALL_HINT: &str =
    "Graphviz 'dot' binary not found. Install it from https://graphviz.org/download/ and make sure it is on PATH";

/// Check whether the Graphviz `dot` binary is available.
pub fn engine_available() -> bool {
    Command::new("dot")
        .arg("-V")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Render DOT text to the given format with the given layout engine.
///
/// The DOT source is written to a scoped temporary directory which is
/// removed on every exit path, including failures. Returns the rendered
/// bytes; the caller decides where they go.
pub fn render(dot_source: &str, format: &str, engine: &str) -> Result<Vec<u8>> {
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(ConceptMapError::InvalidInput(format!(
            "unsupported render format '{}' (expected one of: {})",
            format,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    if !engine_available() {
        return Err(ConceptMapError::Render(INSTALL_HINT.to_string()));
    }

    // TempDir removes itself when dropped, so cleanup happens on every
    // exit path below.
    let dir = tempfile::tempdir()?;
    let dot_path = dir.path().join("graph.dot");
    let out_path = dir.path().join(format!("graph.{}", format));

    std::fs::write(&dot_path, dot_source)?;

    let output = Command::new("dot")
        .arg(format!("-T{}", format))
        .arg(format!("-K{}", engine))
        .arg("-o")
        .arg(&out_path)
        .arg(&dot_path)
        .output()
        .map_err(|e| ConceptMapError::Render(format!("failed to run dot: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ConceptMapError::Render(format!(
            "dot exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let bytes = std::fs::read(&out_path)?;
    log::debug!("Rendered {} bytes of {} output", bytes.len(), format);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_rejected() {
        let err = render("digraph {}", "docx", "dot").unwrap_err();
        assert!(err.to_string().contains("unsupported render format"));
    }

    #[test]
    fn test_missing_engine_degrades_with_hint() {
        // Only meaningful on hosts without Graphviz; with it installed,
        // rendering a trivial graph must succeed instead.
        if engine_available() {
            let bytes = render("digraph { a -> b }", "svg", "dot").unwrap();
            assert!(!bytes.is_empty());
        } else {
            let err = render("digraph { a -> b }", "svg", "dot").unwrap_err();
            assert!(err.to_string().contains("graphviz.org"));
        }
    }
}
