mod cache;
mod gate;
mod http;
mod source;

pub use cache::ResultCache;
pub use gate::{FetchGate, FetchResult};
pub use http::{HttpSuggestionSource, parse_response};
pub use source::{FetchError, FetchFuture, FnSource, SuggestionSource, source_fn};
