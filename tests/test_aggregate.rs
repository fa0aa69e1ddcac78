//! Unit tests for footer aggregation: counts, currency-grouped sums, and
//! the default-currency fallback for record types without one.

mod common;

use common::invoice;
use finops_view::aggregate::{self, DEFAULT_CURRENCY};
use finops_view::{FieldValue, TableRecord};

// ---------------------------------------------------------------------------
// Currency-grouped sums
// ---------------------------------------------------------------------------

#[test]
fn sums_group_by_currency() {
    let mut invoices = vec![
        invoice("inv-1", "Approved", 100.0),
        invoice("inv-2", "Approved", 200.0),
        invoice("inv-3", "Approved", 50.0),
    ];
    invoices[2].currency = "EUR".to_string();

    let result = aggregate::summarize(&invoices);
    assert_eq!(result.count, 3);
    assert_eq!(result.total("USD"), 300.0);
    assert_eq!(result.total("EUR"), 50.0);
    assert_eq!(result.totals.len(), 2);
}

#[test]
fn signed_amounts_sum_arithmetically() {
    let invoices = vec![
        invoice("inv-1", "Approved", 1000.0),
        invoice("inv-2", "Approved", -250.0), // credit memo
    ];

    let result = aggregate::summarize(&invoices);
    assert_eq!(result.total("USD"), 750.0);
}

#[test]
fn empty_collection_summarizes_to_zero() {
    let result = aggregate::summarize::<finops_view::models::Invoice>(&[]);
    assert_eq!(result.count, 0);
    assert!(result.totals.is_empty());
    assert_eq!(result.total("USD"), 0.0);
}

// ---------------------------------------------------------------------------
// Record types without currency or amount
// ---------------------------------------------------------------------------

/// A record with an amount but no currency dimension.
struct Timesheet {
    id: String,
    hours: Option<f64>,
}

impl TableRecord for Timesheet {
    fn fields() -> &'static [&'static str] {
        &["id", "hours"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "hours" => self.hours.map(FieldValue::Number),
            _ => None,
        }
    }

    fn amount_field() -> Option<&'static str> {
        Some("hours")
    }
}

#[test]
fn missing_currency_field_groups_under_default_unit() {
    let rows = vec![
        Timesheet {
            id: "ts-1".to_string(),
            hours: Some(8.0),
        },
        Timesheet {
            id: "ts-2".to_string(),
            hours: Some(6.5),
        },
    ];

    let result = aggregate::summarize(&rows);
    assert_eq!(result.count, 2);
    assert_eq!(result.total(DEFAULT_CURRENCY), 14.5);
}

#[test]
fn rows_without_an_amount_still_count() {
    let rows = vec![
        Timesheet {
            id: "ts-1".to_string(),
            hours: Some(8.0),
        },
        Timesheet {
            id: "ts-2".to_string(),
            hours: None,
        },
    ];

    let result = aggregate::summarize(&rows);
    assert_eq!(result.count, 2);
    assert_eq!(result.total(DEFAULT_CURRENCY), 8.0);
}
