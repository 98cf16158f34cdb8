//! Command line surface and engine assembly for the binary

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::runtime::Handle;

use crate::config::{Config, MatcherKind};
use crate::engine::{EngineBuilder, EngineOptions, SuggestionEngine};
use crate::error::TypeaheadError;
use crate::fetch::HttpSuggestionSource;
use crate::history::{FileHistoryStore, HistoryStore, MemoryHistoryStore};
use crate::item::{SuggestionItem, load_items};
use crate::matcher::{FuzzyFilter, SubstringFilter};

#[derive(Debug, Parser)]
#[command(name = "typeahead", version, about = "Interactive typeahead search with history")]
pub struct Cli {
    /// Config file (defaults to ~/.config/typeahead/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON array of suggestion items to search
    #[arg(long, value_name = "FILE")]
    pub suggestions: Option<PathBuf>,

    /// JSON array of items shown on an empty query
    #[arg(long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    /// Remote suggestion endpoint; overrides [source].url
    #[arg(long)]
    pub url: Option<String>,

    /// History namespace; overrides [history].key
    #[arg(long, value_name = "KEY")]
    pub history_key: Option<String>,

    /// Directory for history records; overrides [history].dir
    #[arg(long, value_name = "DIR")]
    pub history_dir: Option<PathBuf>,

    /// Use fuzzy matching instead of substring matching
    #[arg(long)]
    pub fuzzy: bool,

    /// Write logs here instead of stderr (enable with RUST_LOG)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the candidates for a query and exit
    Query { text: String },

    /// Inspect or edit stored history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// List entries, most recent first
    List,
    /// Remove the entry with this id
    Remove { id: String },
    /// Remove every entry
    Clear,
}

impl Cli {
    /// Fold command line overrides into the loaded config
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = &self.url {
            config.source.url = Some(url.clone());
        }
        if let Some(key) = &self.history_key {
            config.history.key = key.clone();
        }
        if let Some(dir) = &self.history_dir {
            config.history.dir = Some(dir.clone());
        }
        if self.fuzzy {
            config.suggest.matcher = MatcherKind::Fuzzy;
        }
        config
    }
}

/// File-backed history at the configured or default directory, falling back
/// to memory when there is no home directory
pub fn history_store(config: &Config) -> Arc<dyn HistoryStore> {
    let store = match &config.history.dir {
        Some(dir) => Some(FileHistoryStore::new(dir)),
        None => FileHistoryStore::default_location(),
    };

    match store {
        Some(store) => Arc::new(store),
        None => {
            log::warn!("No home directory; history will not persist");
            Arc::new(MemoryHistoryStore::new())
        }
    }
}

fn load_optional(path: Option<&Path>) -> Result<Vec<SuggestionItem>, TypeaheadError> {
    path.map(load_items).transpose().map(Option::unwrap_or_default)
}

/// Build an engine from config and the item files named on the command line
pub fn build_engine(
    cli: &Cli,
    config: &Config,
    runtime: Handle,
) -> Result<SuggestionEngine, TypeaheadError> {
    let mut builder = EngineBuilder::new()
        .options(EngineOptions::from(config))
        .suggestions(load_optional(cli.suggestions.as_deref())?)
        .default_suggestions(load_optional(cli.defaults.as_deref())?)
        .history_store(history_store(config))
        .runtime(runtime);

    builder = match config.suggest.matcher {
        MatcherKind::Substring => builder.filter(SubstringFilter),
        MatcherKind::Fuzzy => builder.filter(FuzzyFilter::new()),
    };

    if let Some(url) = &config.source.url {
        log::info!("Fetching suggestions from {}", url);
        let source = HttpSuggestionSource::new(
            url.clone(),
            config.source.query_param.clone(),
            Duration::from_millis(config.source.timeout_ms),
        )?;
        builder = builder.fetch_source(source);
    }

    builder.build()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
