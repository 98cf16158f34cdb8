use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;
use thiserror::Error;

use crate::item::SuggestionItem;

/// Errors a suggestion source can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or completed
    #[error("Network error: {0}")]
    Network(String),

    /// Source answered with a non-success status
    #[error("Unexpected status {0}")]
    Status(u16),

    /// Response body was not a suggestion list
    #[error("Decode error: {0}")]
    Decode(String),

    /// Any other source-specific failure
    #[error("{0}")]
    Source(String),
}

pub type FetchFuture = BoxFuture<'static, Result<Vec<SuggestionItem>, FetchError>>;

/// Asynchronous suggestion lookup for a query
pub trait SuggestionSource: Send + Sync {
    fn fetch(&self, query: &str) -> FetchFuture;
}

/// Adapter turning an async closure into a [`SuggestionSource`]
pub struct FnSource<F>(F);

/// Wrap `f(query)` as a suggestion source
pub fn source_fn<F, Fut>(f: F) -> FnSource<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<SuggestionItem>, FetchError>> + Send + 'static,
{
    FnSource(f)
}

impl<F, Fut> SuggestionSource for FnSource<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<SuggestionItem>, FetchError>> + Send + 'static,
{
    fn fetch(&self, query: &str) -> FetchFuture {
        (self.0)(query.to_string()).boxed()
    }
}
