//! Matcher options as seen through a search.

use planner_search::{
    search_snapshot, EngineConfig, EntityKind, Index, MatcherConfig, Record, SearchIndexes, SearchOptions,
};

use crate::common::*;

fn index_with(matcher: MatcherConfig, records: Vec<Record>) -> Index {
    let config = EngineConfig {
        matcher,
        ..EngineConfig::default()
    };
    SearchIndexes::build_all(&config, records, vec![], vec![]).tasks
}

#[test]
fn test_case_insensitive_by_default() {
    let index = task_index(vec![make_task(1, "CALL THE BANK")]);
    let results = search_snapshot(&index, "call the bank", &SearchOptions::default());
    assert_eq!(results[0].score, 0.0);
}

#[test]
fn test_case_sensitive_option() {
    let matcher = MatcherConfig {
        case_sensitive: true,
        ..MatcherConfig::default()
    };
    let index = index_with(matcher, vec![make_task(1, "Update API docs"), make_task(2, "update api docs")]);
    let options = SearchOptions::default().with_threshold(0.0);
    assert_eq!(ids(&search_snapshot(&index, "API", &options)), vec!["1"]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_ignore_diacritics_option() {
    let records = vec![make_task(1, "Café run"), make_task(2, "Cafe run")];
    let options = SearchOptions::default().with_threshold(0.0);

    let strict = task_index(records.clone());
    assert_eq!(ids(&search_snapshot(&strict, "cafe", &options)), vec!["2"]);

    let matcher = MatcherConfig {
        ignore_diacritics: true,
        ..MatcherConfig::default()
    };
    let relaxed = index_with(matcher, records);
    assert_eq!(ids(&search_snapshot(&relaxed, "cafe", &options)), vec!["1", "2"]);
}

#[test]
fn test_min_match_char_length_option() {
    let matcher = MatcherConfig {
        min_match_char_length: 4,
        ..MatcherConfig::default()
    };
    let index = index_with(matcher, vec![make_task(1, "Go to gym"), make_task(2, "Gym membership")]);
    // Every "gym" window is shorter than 4 characters
    assert!(search_snapshot(&index, "gym", &SearchOptions::default()).is_empty());
}

#[test]
fn test_long_query_matches() {
    let name = "Prepare the slides for the quarterly planning review with the product and design teams";
    let index = task_index(vec![make_task(1, name), make_task(2, "Prepare slides")]);
    let query = "prepare the slides for the quarterly planning review with the product and design";
    assert!(query.chars().count() > 64);

    let results = search_snapshot(&index, query, &SearchOptions::default());
    assert_eq!(ids(&results), vec!["1"]);
    assert_eq!(results[0].score, 0.0);
}

#[test]
fn test_completed_flag_on_lists_is_ignored() {
    let mut indexes = SearchIndexes::build_all(
        &EngineConfig::default(),
        vec![],
        vec![make_list(1, "Archive").with_completed(true)],
        vec![],
    );
    let combined = indexes.search_all("archive", &SearchOptions::default());
    assert_eq!(combined.lists.len(), 1);
    assert_eq!(indexes.index(EntityKind::List).len(), 1);
}
