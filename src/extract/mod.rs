//! Document text extraction collaborator.
//!
//! Best-effort by contract: unsupported or unreadable input degrades to
//! an empty string with a warning, never an error into the core.

mod markdown;
mod plaintext;
mod walker;

pub use walker::discover_files;

use std::path::Path;

/// Trait for file-type specific text extractors
pub trait Extractor {
    /// Check if this extractor can handle the given file extension
    fn can_extract(&self, extension: &str) -> bool;

    /// Extract plain text from file content
    fn extract(&self, content: &str) -> String;
}

/// Extractor registry that selects the appropriate extractor by extension
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with all built-in extractors
    pub fn new() -> Self {
        let mut registry = Self {
            extractors: Vec::new(),
        };

        registry.register(Box::new(markdown::MarkdownExtractor));
        registry.register(Box::new(plaintext::PlainTextExtractor));

        registry
    }

    /// Register an extractor
    pub fn register(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors.push(extractor);
    }

    /// Extract text from a file on disk.
    ///
    /// Returns an empty string when the extension is unsupported or the
    /// file cannot be read as text (e.g. binary PDF/DOCX content), after
    /// logging a warning. Callers never need to handle a failure.
    pub fn extract_file(&self, path: &Path) -> String {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let extractor = match self
            .extractors
            .iter()
            .find(|e| e.can_extract(&extension))
        {
            Some(e) => e,
            None => {
                log::warn!(
                    "Unsupported file type '{}' for {}, skipping",
                    extension,
                    path.display()
                );
                return String::new();
            }
        };

        match std::fs::read_to_string(path) {
            Ok(content) => extractor.extract(&content),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                String::new()
            }
        }
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
