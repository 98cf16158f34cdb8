use thiserror::Error;

/// Errors surfaced by construction and loading APIs
#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("A fetch source needs a running tokio runtime")]
    NoRuntime,

    #[error("Invalid suggestion items: {0}")]
    InvalidItems(String),
}

/// User-visible error state of the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error("Failed to fetch suggestions")]
    FetchFailed,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
