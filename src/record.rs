//! Record field access for the view model engines.
//!
//! Every record type exposes a closed set of named fields through
//! [`TableRecord::field`], returning typed [`FieldValue`]s. The filter,
//! sort, and aggregation engines only ever see records through this
//! accessor, so dimension keys and sort fields stay a known, exhaustive
//! set per record type rather than arbitrary string indexing.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::priority::PriorityRule;

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A single typed field value extracted from a record.
///
/// Covers the primitive field types the console records carry: strings
/// (identifiers, names, enumerated statuses), signed numbers (totals,
/// credit memo amounts), and calendar dates.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl FieldValue {
    /// Total ordering across field values.
    ///
    /// Same-type pairs compare naturally: numeric for numbers, lexicographic
    /// for text, chronological for dates. Mixed-type pairs fall back to a
    /// fixed type rank so the order stays total. NaN compares equal.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }

    /// Display form used for equality filters, multi-select membership,
    /// free-text search, and filter badges.
    ///
    /// Dates render as ISO `YYYY-MM-DD`.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Text(_) => 1,
            FieldValue::Date(_) => 2,
        }
    }
}

// ---------------------------------------------------------------------------
// TableRecord
// ---------------------------------------------------------------------------

/// A uniform record that can flow through the table view model.
///
/// Implementations declare their closed field set, which fields the
/// free-text search scans, which numeric field the footer aggregation
/// sums (grouped by the currency field), and an optional post-sort
/// priority rule. The accessor returns `None` for fields the record
/// does not carry, which the engines treat per their fail-open rules.
pub trait TableRecord {
    /// The closed set of field names this record type exposes.
    ///
    /// Filter dimensions and sort fields outside this set are ignored
    /// as unrecognized (no-op, never an error).
    fn fields() -> &'static [&'static str];

    /// Extract a single field by name.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Fields scanned by the free-text search dimension.
    fn searchable_fields() -> &'static [&'static str] {
        &[]
    }

    /// The numeric field summed by the footer aggregation, if any.
    fn amount_field() -> Option<&'static str> {
        None
    }

    /// The field the footer aggregation groups sums by (e.g. currency).
    fn currency_field() -> Option<&'static str> {
        None
    }

    /// Business-rule re-ordering applied after sorting, if this record
    /// type has one.
    fn priority_rule() -> Option<PriorityRule> {
        None
    }
}
