//! Tests for the debounced fetch gate

use std::time::Duration;

use super::*;
use crate::test_utils::test_helpers::{ScriptedSource, results_for};

const DEBOUNCE: Duration = Duration::from_millis(300);

fn gate(source: &ScriptedSource) -> FetchGate {
    FetchGate::new(Arc::new(source.clone()), DEBOUNCE, Handle::current())
}

#[tokio::test(start_paused = true)]
async fn test_rapid_schedules_collapse_to_last_query() {
    let source = ScriptedSource::new();
    let mut gate = gate(&source);

    gate.schedule("a".to_string());
    gate.schedule("ap".to_string());
    gate.schedule("app".to_string());

    let result = gate.next().await;
    assert_eq!(
        result,
        Some(FetchResult::Loaded {
            query: "app".to_string(),
            items: results_for("app"),
        })
    );
    assert_eq!(source.calls(), vec!["app"]);
}

#[tokio::test(start_paused = true)]
async fn test_nothing_fetched_before_debounce_elapses() {
    let source = ScriptedSource::new();
    let mut gate = gate(&source);

    gate.schedule("app".to_string());
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(source.calls().is_empty());
    assert!(gate.try_next().is_none());
    assert!(gate.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_in_flight_fetch_is_superseded() {
    let source = ScriptedSource::new().with_delay("slow", Duration::from_millis(500));
    let mut gate = gate(&source);

    gate.schedule("slow".to_string());
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(source.calls(), vec!["slow"]);

    gate.schedule("fast".to_string());
    let result = gate.next().await;
    assert!(matches!(result, Some(FetchResult::Loaded { ref query, .. }) if query == "fast"));

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(gate.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_failure_is_reported() {
    let source = ScriptedSource::new().failing("bad");
    let mut gate = gate(&source);

    gate.schedule("bad".to_string());

    match gate.next().await {
        Some(FetchResult::Failed { query, error }) => {
            assert_eq!(query, "bad");
            assert!(matches!(error, FetchError::Network(_)));
        }
        other => panic!("Expected failure, got {:?}", other),
    }
    assert!(!gate.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_discards_pending_work() {
    let source = ScriptedSource::new();
    let mut gate = gate(&source);

    gate.schedule("app".to_string());
    assert!(gate.cancel());
    assert!(!gate.cancel());

    assert!(gate.next().await.is_none());
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(gate.try_next().is_none());
    assert!(source.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_generation_increments_per_schedule() {
    let source = ScriptedSource::new();
    let mut gate = gate(&source);

    assert_eq!(gate.current_generation(), 0);
    assert_eq!(gate.schedule("a".to_string()), 1);
    assert_eq!(gate.schedule("b".to_string()), 2);
    assert_eq!(gate.current_generation(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_gate_cancels_fetch() {
    let source = ScriptedSource::new();
    let mut gate = gate(&source);

    gate.schedule("app".to_string());
    drop(gate);
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(source.calls().is_empty());
}
