//! Shared test fixtures for the finops-view integration tests.
//!
//! Provides small invoice builders with sensible defaults; tests adjust
//! the fields they care about on the returned value.

#![allow(dead_code)]

use chrono::NaiveDate;
use finops_view::models::Invoice;

/// Parse an ISO `YYYY-MM-DD` date, panicking on fixture typos.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// An invoice with the given id, status, and total, and fixed defaults
/// everywhere else.
pub fn invoice(id: &str, status: &str, total: f64) -> Invoice {
    Invoice {
        id: id.to_string(),
        invoice_number: format!("INV-{}", id),
        buyer: "Acme Corp".to_string(),
        supplier: "Initech".to_string(),
        status: status.to_string(),
        owner: Some("dana".to_string()),
        po_number: None,
        issue_date: date("2024-03-01"),
        due_date: date("2024-03-31"),
        total,
        currency: "USD".to_string(),
    }
}

/// `count` approved invoices with ids `inv-1..` and totals `100, 200, ...`.
pub fn sample_invoices(count: usize) -> Vec<Invoice> {
    (1..=count)
        .map(|i| invoice(&format!("inv-{}", i), "Approved", (i as f64) * 100.0))
        .collect()
}
