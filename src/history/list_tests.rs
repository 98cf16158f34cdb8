//! Tests for history/list

use super::*;

fn item(id: i64, label: &str) -> SuggestionItem {
    SuggestionItem::new(id, label)
}

fn ids(items: &[SuggestionItem]) -> Vec<ItemId> {
    items.iter().map(|i| i.id.clone()).collect()
}

#[test]
fn test_upsert_into_empty() {
    let history = upsert(&[], item(1, "A"), 10);
    assert_eq!(ids(&history), vec![ItemId::from(1)]);
}

#[test]
fn test_upsert_moves_existing_to_front() {
    let history = vec![item(1, "A"), item(2, "B"), item(3, "C")];
    let updated = upsert(&history, item(3, "C"), 10);
    assert_eq!(
        ids(&updated),
        vec![ItemId::from(3), ItemId::from(1), ItemId::from(2)]
    );
}

#[test]
fn test_upsert_replaces_stale_label() {
    let history = vec![item(1, "Old")];
    let updated = upsert(&history, item(1, "New"), 10);
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].label, "New");
}

#[test]
fn test_upsert_evicts_oldest() {
    let mut history = Vec::new();
    for (id, label) in [(1, "A"), (2, "B"), (3, "C")] {
        history = upsert(&history, item(id, label), 2);
    }
    assert_eq!(ids(&history), vec![ItemId::from(3), ItemId::from(2)]);
}

#[test]
fn test_remove_item() {
    let history = vec![item(1, "A"), item(2, "B")];
    let updated = remove_item(&history, &ItemId::from(1));
    assert_eq!(ids(&updated), vec![ItemId::from(2)]);
}

#[test]
fn test_remove_missing_item_is_noop() {
    let history = vec![item(1, "A")];
    assert_eq!(remove_item(&history, &ItemId::from(9)), history);
}

#[test]
fn test_deduplicate_keeps_first_occurrence() {
    let entries = vec![item(1, "a"), item(2, "b"), item(1, "a2"), item(3, "c")];
    let result = deduplicate(entries);
    assert_eq!(
        ids(&result),
        vec![ItemId::from(1), ItemId::from(2), ItemId::from(3)]
    );
    assert_eq!(result[0].label, "a");
}

#[test]
fn test_trim_to_max() {
    let entries: Vec<SuggestionItem> = (0..15).map(|i| item(i, "x")).collect();
    let trimmed = trim_to_max(entries, 10);
    assert_eq!(trimmed.len(), 10);
    assert_eq!(trimmed[0].id, ItemId::from(0));
}
