//! SampleStore 单元测试

use crate::data::{DataSetError, LoadState, Sample, SampleStore};

fn store_with(n: usize) -> SampleStore {
    let mut store = SampleStore::new();
    for i in 0..n {
        store.push(Sample::new(i.to_string())).unwrap();
    }
    store
}

#[test]
fn test_push_appends_in_order() {
    let store = store_with(3);
    assert_eq!(store.len(), 3);
    let ids: Vec<_> = store.samples().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
}

#[test]
fn test_push_rejects_empty_id() {
    let mut store = SampleStore::new();
    let result = store.push(Sample::default());
    assert!(matches!(result, Err(DataSetError::InvalidSample(_))));
    assert!(store.is_empty());
}

#[test]
fn test_push_resets_loaded_state() {
    let mut store = store_with(1);
    store.mark_loaded();
    assert_eq!(store.state(), LoadState::Loaded);
    assert!(store.ensure_loaded("文本").is_ok());

    store.push(Sample::new("new")).unwrap();
    assert_eq!(store.state(), LoadState::Unloaded);
    assert!(matches!(
        store.ensure_loaded("文本"),
        Err(DataSetError::NotLoaded(_))
    ));
}

#[test]
fn test_remove_indices_keeps_remaining_order() {
    let mut store = store_with(5);
    store.remove_indices(&[1, 3]);
    let ids: Vec<_> = store.samples().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "2", "4"]);
}

#[test]
fn test_remove_indices_unsorted_and_duplicated() {
    let mut store = store_with(6);
    store.remove_indices(&[5, 0, 3, 3, 42]);
    let ids: Vec<_> = store.samples().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
}
