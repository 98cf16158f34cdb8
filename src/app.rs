//! Terminal front end for the suggestion engine

mod events;
mod render;
mod state;

pub use state::App;
