//! Unit tests for priority re-ordering: the stable three-way partition
//! and its per-record-type configuration.

mod common;

use common::invoice;
use finops_view::models::Invoice;
use finops_view::{priority, PriorityRule, TableRecord};

fn ids(invoices: &[Invoice]) -> Vec<&str> {
    invoices.iter().map(|i| i.id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Partition behavior
// ---------------------------------------------------------------------------

#[test]
fn urgent_first_settled_last_others_in_between() {
    let invoices = vec![
        invoice("inv-1", "Approved", 100.0),
        invoice("inv-2", "Pending Action", 100.0),
        invoice("inv-3", "In Review", 100.0),
        invoice("inv-4", "Paid", 100.0),
        invoice("inv-5", "Pending Action", 100.0),
    ];

    let rule = Invoice::priority_rule().unwrap();
    let reordered = priority::apply(&invoices, &rule);

    // Urgent records lead in original relative order, settled trail,
    // everything else keeps its order in the middle.
    assert_eq!(
        ids(&reordered),
        vec!["inv-2", "inv-5", "inv-1", "inv-3", "inv-4"]
    );
}

#[test]
fn partition_preserves_order_within_each_group() {
    let invoices = vec![
        invoice("inv-1", "Paid", 100.0),
        invoice("inv-2", "Paid", 100.0),
        invoice("inv-3", "Pending Action", 100.0),
        invoice("inv-4", "Pending Action", 100.0),
    ];

    let rule = Invoice::priority_rule().unwrap();
    let reordered = priority::apply(&invoices, &rule);
    assert_eq!(ids(&reordered), vec!["inv-3", "inv-4", "inv-1", "inv-2"]);
}

#[test]
fn no_distinguished_statuses_is_a_noop() {
    let invoices = vec![
        invoice("inv-1", "Approved", 100.0),
        invoice("inv-2", "In Review", 100.0),
    ];

    let rule = Invoice::priority_rule().unwrap();
    assert_eq!(priority::apply(&invoices, &rule), invoices);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn rule_statuses_are_configuration_not_constants() {
    let invoices = vec![
        invoice("inv-1", "Disputed", 100.0),
        invoice("inv-2", "Approved", 100.0),
        invoice("inv-3", "Archived", 100.0),
    ];

    // A custom rule over the same status field pins different values.
    let rule = PriorityRule::new("status", "Archived", "Disputed");
    let reordered = priority::apply(&invoices, &rule);
    assert_eq!(ids(&reordered), vec!["inv-3", "inv-2", "inv-1"]);
}

#[test]
fn rule_on_a_missing_field_leaves_order_alone() {
    let invoices = vec![
        invoice("inv-1", "Paid", 100.0),
        invoice("inv-2", "Pending Action", 100.0),
    ];

    let rule = PriorityRule::new("flavor", "Pending Action", "Paid");
    assert_eq!(priority::apply(&invoices, &rule), invoices);
}
