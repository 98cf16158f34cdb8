//! Durable per-key history records
//!
//! Persistence is best effort: unreadable or corrupt records load as an
//! empty history and failed writes are logged and dropped.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::list::{deduplicate, remove_item, upsert};
use crate::item::{ItemId, SuggestionItem};

const CONFIG_DIR: &str = "typeahead";
const HISTORY_DIR: &str = "history";
const RECORD_PREFIX: &str = "autosuggestion_history_";

/// Storage for most-recent-first history lists, namespaced by key
pub trait HistoryStore: Send + Sync {
    fn load(&self, key: &str) -> Vec<SuggestionItem>;

    fn save(&self, key: &str, items: &[SuggestionItem]);

    /// Record a selection and return the updated list
    fn add(&self, key: &str, item: SuggestionItem, max_items: usize) -> Vec<SuggestionItem> {
        let updated = upsert(&self.load(key), item, max_items);
        self.save(key, &updated);
        updated
    }

    fn remove(&self, key: &str, id: &ItemId) -> Vec<SuggestionItem> {
        let updated = remove_item(&self.load(key), id);
        self.save(key, &updated);
        updated
    }

    fn clear(&self, key: &str) {
        self.save(key, &[]);
    }
}

/// Default history directory: `~/.config/typeahead/history`
pub fn history_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(HISTORY_DIR))
}

/// One JSON file per history key
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    dir: PathBuf,
}

impl FileHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at [`history_dir`], if a home directory exists
    pub fn default_location() -> Option<Self> {
        history_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn record_path(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}.json", RECORD_PREFIX, encode_key(key)))
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self, key: &str) -> Vec<SuggestionItem> {
        let path = self.record_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read history {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        parse_history(&content)
    }

    fn save(&self, key: &str, items: &[SuggestionItem]) {
        let path = self.record_path(key);
        if let Err(e) = write_record(&self.dir, &path, items) {
            log::warn!("Failed to save history {}: {}", path.display(), e);
        } else {
            log::debug!("Saved {} history items to {}", items.len(), path.display());
        }
    }
}

/// Parse a stored record; corrupt content yields an empty history
pub fn parse_history(content: &str) -> Vec<SuggestionItem> {
    match serde_json::from_str::<Vec<SuggestionItem>>(content) {
        Ok(items) => deduplicate(items),
        Err(e) => {
            log::warn!("Ignoring corrupt history record: {}", e);
            Vec::new()
        }
    }
}

fn write_record(dir: &Path, path: &Path, items: &[SuggestionItem]) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(items)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)
}

/// Keys become file names: `[A-Za-z0-9-]` is kept and every other byte,
/// `_` included, becomes `_` plus two hex digits, so distinct keys never
/// share a file
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("_{:02x}", byte));
        }
    }
    encoded
}

/// In-process store, used for ephemeral sessions and tests
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    records: Mutex<HashMap<String, Vec<SuggestionItem>>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(key: &str, items: Vec<SuggestionItem>) -> Self {
        let store = Self::new();
        store.save(key, &items);
        store
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self, key: &str) -> Vec<SuggestionItem> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.get(key).cloned().unwrap_or_default()
    }

    fn save(&self, key: &str, items: &[SuggestionItem]) {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.insert(key.to_string(), items.to_vec());
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
