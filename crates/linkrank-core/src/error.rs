//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Corpus not found: {0}")]
    CorpusNotFound(String),

    #[error("Corpus contains no pages: {0}")]
    EmptyCorpus(String),

    #[error("Graph contains no pages")]
    EmptyGraph,

    #[error("Page not found in graph: {0}")]
    PageNotFound(String),

    #[error("Damping factor must be in (0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LinkRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CorpusNotFound(_) | Self::PageNotFound(_) => exit_codes::NOT_FOUND,
            Self::EmptyCorpus(_) | Self::EmptyGraph => exit_codes::INVALID_INPUT,
            Self::InvalidDamping(_) | Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
