//! Per-field prefix matching used by search, edit and delete.
//!
//! A criterion is a literal prefix, compared case-insensitively. Fields left
//! blank impose no constraint, so all-blank criteria match everything.

use crate::model::{Field, ListedRecord, Record};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    // Lowercased, non-empty prefixes only.
    prefixes: Vec<(Field, String)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix for `field`, replacing any earlier one. An empty
    /// prefix clears the constraint.
    pub fn set(&mut self, field: Field, prefix: &str) {
        self.prefixes.retain(|(f, _)| *f != field);
        if !prefix.is_empty() {
            self.prefixes.push((field, prefix.to_lowercase()));
        }
    }

    pub fn with(mut self, field: Field, prefix: &str) -> Self {
        self.set(field, prefix);
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.prefixes
            .iter()
            .all(|(field, prefix)| record.get(*field).to_lowercase().starts_with(prefix.as_str()))
    }
}

/// Matching records, in their original relative order.
pub fn filter(records: &[Record], criteria: &Criteria) -> Vec<Record> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

/// Like [`filter`], but each hit remembers its position in `records`.
pub fn filter_listed(records: Vec<Record>, criteria: &Criteria) -> Vec<ListedRecord> {
    records
        .into_iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(position, record)| ListedRecord { position, record })
        .collect()
}
