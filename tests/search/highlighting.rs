//! Highlighting search results.

use crate::common::*;
use planner_search::{highlight, highlight_field, search_snapshot, MatchRange, SearchOptions, Segment};

#[test]
fn test_highlight_result_name() {
    let index = task_index(grocery_tasks());
    let results = search_snapshot(&index, "buy", &SearchOptions::default());
    let segments = highlight_field(&results[0], "name");
    assert_eq!(joined(&segments), "Buy groceries");
    assert_eq!(matched_text(&segments), vec!["Buy"]);
}

#[test]
fn test_highlight_typo_covers_whole_word() {
    let index = task_index(grocery_tasks());
    let results = search_snapshot(&index, "grocries", &SearchOptions::default());
    let segments = highlight_field(&results[0], "name");
    assert_eq!(matched_text(&segments), vec!["groceries"]);
}

#[test]
fn test_highlight_every_occurrence() {
    let index = task_index(vec![make_task_with_description(1, "Plan the plan", "plan b")]);
    let results = search_snapshot(&index, "plan", &SearchOptions::default());
    assert_eq!(matched_text(&highlight_field(&results[0], "name")), vec!["Plan", "plan"]);
    assert_eq!(matched_text(&highlight_field(&results[0], "description")), vec!["plan"]);
}

#[test]
fn test_unmatched_field_is_plain() {
    let index = task_index(vec![make_task_with_description(1, "Meeting", "Bring laptop")]);
    let results = search_snapshot(&index, "meeting", &SearchOptions::default());
    assert_eq!(
        highlight_field(&results[0], "description"),
        vec![Segment {
            text: "Bring laptop".to_string(),
            matched: false
        }]
    );
    assert!(highlight_field(&results[0], "notes").is_empty());
}

#[test]
fn test_highlight_non_ascii_text() {
    let index = task_index(vec![make_task(1, "Pão de açúcar")]);
    let results = search_snapshot(&index, "açúcar", &SearchOptions::default());
    let segments = highlight_field(&results[0], "name");
    assert_eq!(matched_text(&segments), vec!["açúcar"]);
    assert_eq!(joined(&segments), "Pão de açúcar");
}

#[test]
fn test_highlight_repairs_bad_ranges() {
    let text = "Quarterly report";
    let segments = highlight(
        text,
        &[MatchRange::new(10, 40), MatchRange::new(0, 3), MatchRange::new(2, 8)],
    );
    assert_eq!(joined(&segments), text);
    assert_eq!(matched_text(&segments), vec!["Quarterly", "report"]);
}
