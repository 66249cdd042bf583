use std::collections::BTreeMap;

use super::Task;
use crate::constants::Algorithm;

/// A task snapshot taken at the moment `algorithm` finished it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedEntry {
    pub algorithm: Algorithm,
    pub task: Task,
}

/// Completed tasks grouped by ledger label, each group in append order.
pub type GroupedReport = BTreeMap<&'static str, Vec<Task>>;

/// Append-only record of every completion across all runs.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    entries: Vec<CompletedEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, algorithm: Algorithm, task: Task) {
        self.entries.push(CompletedEntry { algorithm, task });
    }

    pub fn entries(&self) -> &[CompletedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries recorded under one algorithm, in append order.
    pub fn entries_for(&self, algorithm: Algorithm) -> impl Iterator<Item = &Task> {
        self.entries
            .iter()
            .filter(move |entry| entry.algorithm == algorithm)
            .map(|entry| &entry.task)
    }

    /// Groups by label; repeated runs of one algorithm merge into a single group.
    pub fn grouped_by_algorithm(&self) -> GroupedReport {
        let mut grouped = GroupedReport::new();
        for entry in &self.entries {
            grouped
                .entry(entry.algorithm.label())
                .or_default()
                .push(entry.task.clone());
        }
        grouped
    }
}
