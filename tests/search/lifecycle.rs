//! Index build, refresh and lazy-build behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::common::*;
use planner_search::{
    search, search_snapshot, EngineConfig, EntityKind, Index, Record, SearchIndexes, SearchOptions, SharedSource,
};

#[test]
fn test_refresh_replaces_searchable_records() {
    let mut index = task_index(grocery_tasks());
    assert_eq!(index.version(), 1);
    assert_eq!(search_snapshot(&index, "dog", &SearchOptions::default()).len(), 1);

    index.refresh(vec![make_task(9, "Feed the cat")]);
    assert_eq!(index.version(), 2);
    assert!(search_snapshot(&index, "dog", &SearchOptions::default()).is_empty());
    assert_eq!(ids(&search_snapshot(&index, "cat", &SearchOptions::default())), vec!["9"]);
}

#[test]
fn test_snapshot_of_unbuilt_index_is_empty() {
    let index = Index::new(EntityKind::Task, EngineConfig::default().task_fields);
    assert!(search_snapshot(&index, "anything", &SearchOptions::default()).is_empty());
}

#[test]
fn test_lazy_build_from_last_source() {
    let store: Arc<Mutex<Vec<Record>>> = Arc::new(Mutex::new(grocery_tasks()));
    let pulls = Arc::new(AtomicUsize::new(0));

    let source: SharedSource = {
        let store = store.clone();
        let pulls = pulls.clone();
        Arc::new(move |_: EntityKind| {
            pulls.fetch_add(1, Ordering::SeqCst);
            store.lock().unwrap().clone()
        })
    };

    let mut indexes = SearchIndexes::from_source(&EngineConfig::default(), source);
    assert!(!indexes.tasks.is_built());

    let results = search(&mut indexes.tasks, "buy", &SearchOptions::default());
    assert_eq!(results.len(), 2);
    assert_eq!(pulls.load(Ordering::SeqCst), 1);

    // Later mutations are invisible until an explicit rebuild
    store.lock().unwrap().push(make_task(4, "Buy stamps"));
    assert_eq!(search(&mut indexes.tasks, "buy", &SearchOptions::default()).len(), 2);
    assert_eq!(pulls.load(Ordering::SeqCst), 1);

    assert!(indexes.tasks.rebuild_from_source());
    assert_eq!(search(&mut indexes.tasks, "buy", &SearchOptions::default()).len(), 3);
    assert_eq!(indexes.tasks.version(), 2);
}

#[test]
fn test_empty_query_does_not_trigger_build() {
    let pulls = Arc::new(AtomicUsize::new(0));
    let counter = pulls.clone();
    let source: SharedSource = Arc::new(move |_: EntityKind| {
        counter.fetch_add(1, Ordering::SeqCst);
        Vec::new()
    });
    let mut indexes = SearchIndexes::from_source(&EngineConfig::default(), source);
    let combined = indexes.search_all("   ", &SearchOptions::default());
    assert!(combined.is_empty());
    assert_eq!(pulls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_search_all_lazily_builds_every_category() {
    let source: SharedSource = Arc::new(|kind: EntityKind| match kind {
        EntityKind::Task => vec![make_task(1, "Plan garden")],
        EntityKind::List => vec![make_list(2, "Garden")],
        EntityKind::Label => vec![make_label(3, "garden")],
    });
    let mut indexes = SearchIndexes::from_source(&EngineConfig::default(), source);
    let combined = indexes.search_all("garden", &SearchOptions::default());
    assert_eq!(combined.total_matches, 3);
    for kind in EntityKind::ALL {
        assert_eq!(indexes.index(kind).version(), 1);
    }
}

#[test]
fn test_results_share_records_with_index() {
    let index = task_index(grocery_tasks());
    let results = search_snapshot(&index, "flowers", &SearchOptions::default());
    assert!(Arc::ptr_eq(&results[0].record, &index.records()[2]));
}
