mod list;
mod storage;

pub use list::{deduplicate, remove_item, trim_to_max, upsert};
pub use storage::{FileHistoryStore, HistoryStore, MemoryHistoryStore, history_dir};
