//! Cross-category search, quick search and suggestions.

use crate::common::*;
use planner_search::{EngineConfig, Scope, SearchIndexes, SearchOptions, MAX_SUGGESTIONS};

#[test]
fn test_all_scope_searches_every_category() {
    let mut indexes = sample_planner();
    let combined = indexes.search_all("groceries", &SearchOptions::default());
    assert_eq!(names(&combined.tasks), vec!["Buy groceries"]);
    assert_eq!(names(&combined.lists), vec!["Groceries"]);
    assert!(combined.labels.is_empty());
    assert_eq!(combined.total_matches, 2);
    assert_combined_well_formed(&combined);
}

#[test]
fn test_single_scope_leaves_others_empty() {
    let mut indexes = sample_planner();
    for (scope, expected) in [
        (Scope::TasksOnly, (1, 0, 0)),
        (Scope::ListsOnly, (0, 1, 0)),
        (Scope::LabelsOnly, (0, 0, 0)),
    ] {
        let combined = indexes.search_all("groceries", &SearchOptions::default().with_scope(scope));
        assert_eq!(
            (combined.tasks.len(), combined.lists.len(), combined.labels.len()),
            expected,
            "{:?}",
            scope
        );
        assert_combined_well_formed(&combined);
    }
}

#[test]
fn test_include_completed_only_affects_tasks() {
    let mut indexes = sample_planner();
    let open_only = indexes.search_all("pay", &SearchOptions::default());
    assert_eq!(names(&open_only.tasks), vec!["Pay electricity bill"]);

    // "Renew passport" is one substitution away ("pas")
    let all = indexes.search_all("pay", &SearchOptions::default().with_include_completed(true));
    assert_eq!(names(&all.tasks), vec!["Pay rent", "Pay electricity bill", "Renew passport"]);
}

#[test]
fn test_limit_is_per_category() {
    let mut indexes = SearchIndexes::build_all(
        &EngineConfig::default(),
        (0..10).map(|i| make_task(i, "Home chores")).collect(),
        (0..10).map(|i| make_list(i, "Home")).collect(),
        (0..10).map(|i| make_label(i, "home")).collect(),
    );
    let combined = indexes.search_all("home", &SearchOptions::default().with_limit(4));
    assert_eq!(combined.tasks.len(), 4);
    assert_eq!(combined.lists.len(), 4);
    assert_eq!(combined.labels.len(), 4);
    assert_eq!(combined.total_matches, 12);
}

#[test]
fn test_out_of_range_options_are_clamped() {
    let mut indexes = sample_planner();
    let options = SearchOptions::default().with_limit(0).with_threshold(-3.0);
    let combined = indexes.search_all("inbox", &options);
    // threshold 0: exact only; limit 1
    assert_eq!(names(&combined.lists), vec!["Inbox"]);

    let options = SearchOptions::default().with_threshold(f64::NAN);
    let combined = indexes.search_all("inbx", &options);
    assert_eq!(names(&combined.lists), vec!["Inbox"]);
}

#[test]
fn test_quick_search_is_tighter() {
    let mut indexes = sample_planner();
    // "meting" is 1 edit from "meeting": 1/6 passes both thresholds
    assert_eq!(indexes.quick_search("meting").tasks.len(), 1);

    // "reprot" is 2 edits from "report": 2/6 passes 0.4 but not 0.3
    let default = indexes.search_all("reprot", &SearchOptions::default());
    assert_eq!(names(&default.tasks), vec!["Quarterly report"]);
    assert!(indexes.quick_search("reprot").tasks.is_empty());
}

#[test]
fn test_suggestions_across_categories() {
    let mut indexes = sample_planner();
    let suggestions = indexes.suggestions("trip");
    assert_eq!(suggestions[0], "Plan trip");
    assert!(suggestions.contains(&"Travel".to_string()));
    assert!(suggestions.len() <= MAX_SUGGESTIONS);
}

#[test]
fn test_suggestions_preserve_stored_case() {
    let mut indexes = SearchIndexes::build_all(
        &EngineConfig::default(),
        vec![make_task(1, "URGENT: call bank")],
        vec![],
        vec![make_label(2, "urgent")],
    );
    assert_eq!(indexes.suggestions("urgent"), vec!["URGENT: call bank", "urgent"]);
}
