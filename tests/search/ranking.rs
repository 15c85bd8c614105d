//! Ranking order and determinism.

use crate::common::*;
use planner_search::{search_snapshot, EngineConfig, EntityKind, FieldSpec, Index, Record, SearchOptions};

#[test]
fn test_exact_before_fuzzy() {
    let index = task_index(vec![
        make_task(1, "Draft reprot"),
        make_task(2, "Send report"),
        make_task(3, "Report review"),
    ]);
    let results = search_snapshot(&index, "report", &SearchOptions::default());
    assert_eq!(ids(&results), vec!["2", "3", "1"]);
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[1].score, 0.0);
    assert!(results[2].score > 0.0);
}

#[test]
fn test_equal_scores_keep_insertion_order() {
    let index = task_index((0..6).map(|i| make_task(i, "Water plants")).collect());
    let results = search_snapshot(&index, "plants", &SearchOptions::default());
    let positions: Vec<usize> = results.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_repeat_queries_are_identical() {
    let indexes = sample_planner();
    let options = SearchOptions::default();
    for query in ["buy", "reprt", "trip", "pay", "meting"] {
        let first = search_snapshot(&indexes.tasks, query, &options);
        let second = search_snapshot(&indexes.tasks, query, &options);
        assert_eq!(first, second, "query {:?}", query);
    }
}

#[test]
fn test_name_match_beats_description_match() {
    // Same typo, once in the name and once in the description
    let index = task_index(vec![
        make_task_with_description(1, "Notes", "Budget reviw"),
        make_task_with_description(2, "Budget reviw", "Notes"),
    ]);
    let results = search_snapshot(&index, "review", &SearchOptions::default());
    assert_eq!(results.len(), 2);
    assert!(results[1].score >= results[0].score);
}

#[test]
fn test_weights_shape_the_score() {
    let fields = vec![FieldSpec::new("name", 0.9), FieldSpec::new("description", 0.1)];
    let index = Index::build(
        EntityKind::Task,
        fields,
        vec![Record::new(1u64)
            .with_field("name", "Renew lease")
            .with_field("description", "Renw car insurance")],
    )
    .with_matcher(EngineConfig::default().matcher);

    let results = search_snapshot(&index, "renew", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    // name: 0 errors, description: 1 of 5 -> 0.9 * 0 + 0.1 * 0.2
    assert!((results[0].score - 0.02).abs() < 1e-9);
}

#[test]
fn test_limit_applies_after_ranking() {
    let index = task_index(vec![
        make_task(1, "Fix the sink"),
        make_task(2, "Fix the fence"),
        make_task(3, "Fx lamp"),
    ]);
    let results = search_snapshot(&index, "fix", &SearchOptions::default().with_limit(2));
    assert_eq!(ids(&results), vec!["1", "2"]);
}
