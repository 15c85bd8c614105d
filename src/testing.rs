//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::config::EngineConfig;
use crate::index::{Index, SearchIndexes};
use crate::types::{EntityKind, Record};

/// Create a task with just a name.
pub fn make_task(id: u64, name: &str) -> Record {
    Record::new(id).with_field("name", name)
}

/// Create a task with a name and description.
pub fn make_task_with_description(id: u64, name: &str, description: &str) -> Record {
    make_task(id, name).with_field("description", description)
}

/// Create a completed task.
pub fn make_completed_task(id: u64, name: &str) -> Record {
    make_task(id, name).with_completed(true)
}

/// Create a list with just a name.
pub fn make_list(id: u64, name: &str) -> Record {
    Record::new(id).with_field("name", name)
}

/// Create a label.
pub fn make_label(id: u64, name: &str) -> Record {
    Record::new(id).with_field("name", name)
}

/// Build a task index with the default task field weights.
pub fn task_index(records: Vec<Record>) -> Index {
    let config = EngineConfig::default();
    Index::build(EntityKind::Task, config.task_fields, records)
}

/// The three-task grocery fixture: "Buy groceries", "Walk the dog", "Buy flowers".
pub fn grocery_tasks() -> Vec<Record> {
    vec![
        make_task(1, "Buy groceries"),
        make_task(2, "Walk the dog"),
        make_task(3, "Buy flowers"),
    ]
}

/// Built indexes over the grocery tasks, with empty lists and labels.
pub fn grocery_indexes() -> SearchIndexes {
    SearchIndexes::build_all(&EngineConfig::default(), grocery_tasks(), Vec::new(), Vec::new())
}

/// A small but realistic planner: a dozen tasks, a few lists and labels.
pub fn sample_planner() -> SearchIndexes {
    let tasks = vec![
        make_task_with_description(1, "Buy groceries", "Milk, eggs, bread and coffee"),
        make_task(2, "Walk the dog"),
        make_task(3, "Buy flowers"),
        make_task_with_description(4, "Meeting", "Important meeting notes"),
        make_task_with_description(5, "Random", "thoughts"),
        make_task_with_description(6, "Quarterly report", "Draft the Q3 report for finance"),
        make_completed_task(7, "Renew passport"),
        make_task_with_description(8, "Call mom", "Weekend afternoon"),
        make_task(9, "Book dentist appointment"),
        make_task_with_description(10, "Plan trip", "Flights and hotel for the Lisbon trip"),
        make_completed_task(11, "Pay rent"),
        make_task(12, "Pay electricity bill"),
    ];
    let lists = vec![
        make_list(100, "Inbox"),
        make_list(101, "Groceries").with_field("description", "Weekly shopping"),
        make_list(102, "Work"),
        make_list(103, "Travel").with_field("description", "Trip planning"),
    ];
    let labels = vec![
        make_label(200, "urgent"),
        make_label(201, "errands"),
        make_label(202, "finance"),
        make_label(203, "family"),
    ];
    SearchIndexes::build_all(&EngineConfig::default(), tasks, lists, labels)
}

/// A deterministic corpus of `n` tasks for benchmarks.
pub fn generated_tasks(n: usize) -> Vec<Record> {
    const VERBS: [&str; 8] = ["Buy", "Call", "Email", "Review", "Plan", "Fix", "Book", "Clean"];
    const NOUNS: [&str; 8] = [
        "groceries",
        "the dentist",
        "quarterly report",
        "garage door",
        "team offsite",
        "flight tickets",
        "kitchen",
        "insurance claim",
    ];
    (0..n)
        .map(|i| {
            let name = format!("{} {} #{}", VERBS[i % VERBS.len()], NOUNS[(i / VERBS.len()) % NOUNS.len()], i);
            let description = format!("Follow up on {} before week {}", NOUNS[i % NOUNS.len()], i % 52);
            make_task_with_description(i as u64, &name, &description).with_completed(i % 7 == 0)
        })
        .collect()
}
