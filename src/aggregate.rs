//! Footer aggregation over the filtered collection.
//!
//! Summaries always cover all matching records, not just the visible
//! page: the view model computes this before pagination. Sums are
//! grouped by the record type's currency field so mixed-currency
//! collections never collapse into one meaningless total.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::{FieldValue, TableRecord};

/// Group used for records that carry an amount but no currency field.
pub const DEFAULT_CURRENCY: &str = "USD";

// ---------------------------------------------------------------------------
// AggregateResult
// ---------------------------------------------------------------------------

/// Record count plus per-currency sums of the designated amount field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub count: usize,
    /// Currency code to summed amount, in stable key order.
    pub totals: BTreeMap<String, f64>,
}

impl AggregateResult {
    /// The summed amount for one currency, zero when absent.
    pub fn total(&self, currency: &str) -> f64 {
        self.totals.get(currency).copied().unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// summarize
// ---------------------------------------------------------------------------

/// Summarize a collection: count every record, and for record types with
/// an amount field, sum it grouped by currency.
///
/// Records whose amount field is missing or non-numeric still count but
/// contribute nothing to the sums.
pub fn summarize<R: TableRecord>(records: &[R]) -> AggregateResult {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    if let Some(amount_field) = R::amount_field() {
        for record in records {
            let Some(FieldValue::Number(amount)) = record.field(amount_field) else {
                continue;
            };
            let currency = R::currency_field()
                .and_then(|field| record.field(field))
                .map(|v| v.display())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
            *totals.entry(currency).or_insert(0.0) += amount;
        }
    }

    AggregateResult {
        count: records.len(),
        totals,
    }
}
