use thiserror::Error;

/// Main error type for Conceptmap
#[derive(Error, Debug)]
pub enum ConceptMapError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Knowledge base loading or validation errors
    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    /// AI completion API errors
    #[error("Completion API error: {0}")]
    Completion(String),

    /// External layout engine (Graphviz) errors
    #[error("Render error: {0}")]
    Render(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using ConceptMapError
pub type Result<T> = std::result::Result<T, ConceptMapError>;
