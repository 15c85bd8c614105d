//! The reference scenarios for the search engine.

use crate::common::*;
use planner_search::{search_snapshot, CombinedResults, SearchOptions};

#[test]
fn test_buy_matches_two_of_three_tasks() {
    let index = task_index(grocery_tasks());
    let options = SearchOptions::default().with_threshold(0.4).with_limit(20);
    let results = search_snapshot(&index, "buy", &options);

    let mut found = ids(&results);
    found.sort();
    assert_eq!(found, vec!["1", "3"]);
    assert!(!ids(&results).contains(&"2".to_string()));
    assert_results_well_formed(&results);
}

#[test]
fn test_empty_query_across_all_categories() {
    let mut indexes = sample_planner();
    let combined = indexes.search_all("", &SearchOptions::default());
    assert_eq!(combined, CombinedResults::empty());
    assert!(combined.tasks.is_empty());
    assert!(combined.lists.is_empty());
    assert!(combined.labels.is_empty());
    assert_eq!(combined.total_matches, 0);
}

#[test]
fn test_description_match_alone_is_enough() {
    let index = task_index(vec![
        make_task_with_description(1, "Meeting", "Important meeting notes"),
        make_task_with_description(2, "Random", "thoughts"),
    ]);
    let results = search_snapshot(&index, "meeting", &SearchOptions::default());
    assert_eq!(ids(&results), vec!["1"]);

    // Both fields matched exactly
    assert_eq!(results[0].per_field.len(), 2);
    assert_eq!(results[0].score, 0.0);
}

#[test]
fn test_suggestions_for_bu() {
    let mut indexes = grocery_indexes();
    let suggestions = indexes.suggestions("bu");
    assert_eq!(suggestions, vec!["Buy groceries", "Buy flowers"]);
    assert!(!suggestions.contains(&"Walk the dog".to_string()));
}
