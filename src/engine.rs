mod builder;
mod nav;
mod pipeline;
mod state;
mod suggestion_engine;

pub use builder::{EngineBuilder, EngineOptions};
pub use nav::NavKey;
pub use pipeline::{CandidateOrigin, MergeInput, merge_candidates};
pub use state::EngineState;
pub use suggestion_engine::SuggestionEngine;
