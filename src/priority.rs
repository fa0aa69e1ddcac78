//! Priority re-ordering: a stable three-way partition applied after
//! sorting and before pagination.
//!
//! Some record types pin a distinguished "needs attention" status to the
//! front of every page and a settled status to the back, regardless of
//! the active sort. The rule is per-record-type configuration (see
//! [`TableRecord::priority_rule`](crate::record::TableRecord::priority_rule));
//! nothing in this module knows any concrete status string.

use crate::record::{FieldValue, TableRecord};

// ---------------------------------------------------------------------------
// PriorityRule
// ---------------------------------------------------------------------------

/// Which status values a record type pins to the front and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityRule {
    /// The field holding the enumerated status.
    pub status_field: &'static str,
    /// Status moved to the front of the collection.
    pub urgent: &'static str,
    /// Status moved to the back of the collection.
    pub settled: &'static str,
}

impl PriorityRule {
    pub fn new(status_field: &'static str, urgent: &'static str, settled: &'static str) -> Self {
        Self {
            status_field,
            urgent,
            settled,
        }
    }
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

/// Partition `records` into urgent / other / settled, preserving the
/// incoming relative order within each partition.
///
/// This is not a sort: records whose status matches neither distinguished
/// value keep their positions relative to each other, which is what keeps
/// re-rendering idempotent after the sort stage.
pub fn apply<R: TableRecord + Clone>(records: &[R], rule: &PriorityRule) -> Vec<R> {
    let mut front: Vec<R> = Vec::new();
    let mut middle: Vec<R> = Vec::new();
    let mut back: Vec<R> = Vec::new();

    for record in records {
        match record.field(rule.status_field) {
            Some(FieldValue::Text(status)) if status == rule.urgent => {
                front.push(record.clone())
            }
            Some(FieldValue::Text(status)) if status == rule.settled => {
                back.push(record.clone())
            }
            _ => middle.push(record.clone()),
        }
    }

    front.extend(middle);
    front.extend(back);
    front
}
