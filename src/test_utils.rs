#[cfg(test)]
pub mod test_helpers {
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use futures::FutureExt;

    use crate::app::App;
    use crate::engine::EngineBuilder;
    use crate::fetch::{FetchError, FetchFuture, SuggestionSource};
    use crate::history::MemoryHistoryStore;
    use crate::item::SuggestionItem;

    pub fn item(id: i64, label: &str) -> SuggestionItem {
        SuggestionItem::new(id, label)
    }

    pub fn labels(items: &[SuggestionItem]) -> Vec<String> {
        items.iter().map(|i| i.label.clone()).collect()
    }

    /// App over a static list with in-memory history and no blur delay
    pub fn test_app(suggestions: Vec<SuggestionItem>) -> App {
        test_app_with_history(suggestions, Vec::new())
    }

    pub fn test_app_with_history(
        suggestions: Vec<SuggestionItem>,
        history: Vec<SuggestionItem>,
    ) -> App {
        let engine = EngineBuilder::new()
            .suggestions(suggestions)
            .history_store(Arc::new(MemoryHistoryStore::with_history("default", history)))
            .blur_close_delay(Duration::ZERO)
            .build()
            .unwrap();
        App::new(engine)
    }

    /// Two results per query, both labelled with the query so filters keep them
    pub fn results_for(query: &str) -> Vec<SuggestionItem> {
        vec![
            SuggestionItem::new(format!("{}-1", query), format!("{} one", query)),
            SuggestionItem::new(format!("{}-2", query), format!("{} two", query)),
        ]
    }

    /// Source with per-query latency and failures that records every call
    #[derive(Clone, Default)]
    pub struct ScriptedSource {
        calls: Arc<Mutex<Vec<String>>>,
        delays: HashMap<String, Duration>,
        failures: HashSet<String>,
    }

    impl ScriptedSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
            self.delays.insert(query.to_string(), delay);
            self
        }

        pub fn failing(mut self, query: &str) -> Self {
            self.failures.insert(query.to_string());
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SuggestionSource for ScriptedSource {
        fn fetch(&self, query: &str) -> FetchFuture {
            self.calls.lock().unwrap().push(query.to_string());
            let delay = self.delays.get(query).copied().unwrap_or_default();
            let fail = self.failures.contains(query);
            let query = query.to_string();

            async move {
                tokio::time::sleep(delay).await;
                if fail {
                    Err(FetchError::Network("connection reset".to_string()))
                } else {
                    Ok(results_for(&query))
                }
            }
            .boxed()
        }
    }
}
