//! Tests for the per-record-type table descriptors: parameter objects
//! compiling into filter specs, and views over the non-invoice models.

mod common;

use common::{date, sample_invoices};
use finops_view::models::{PortalRecord, PurchaseOrder};
use finops_view::tables::{
    InvoiceFilterParams, PortalRecordFilterParams, PurchaseOrderFilterParams, PurchaseOrderView,
};
use finops_view::{filter, FilterSpec};

// ---------------------------------------------------------------------------
// Parameter objects compile to specs
// ---------------------------------------------------------------------------

#[test]
fn invoice_params_translate_field_by_field() {
    let params = InvoiceFilterParams {
        status: Some("Approved".to_string()),
        buyers: Some(vec!["Acme Corp".to_string(), "Globex".to_string()]),
        due_from: Some("2024-01-01".to_string()),
        amount_under: Some(1000.0),
        search: Some("INV".to_string()),
        ..Default::default()
    };

    let expected = FilterSpec::new()
        .select("status", "Approved")
        .any_of("buyer", ["Acme Corp", "Globex"])
        .between("dueDate", Some("2024-01-01"), None)
        .amount_between("total", None, Some(1000.0))
        .search("INV");

    assert_eq!(params.into_spec(), expected);
}

#[test]
fn default_params_compile_to_the_identity_spec() {
    assert!(InvoiceFilterParams::default().into_spec().is_identity());
    assert!(PurchaseOrderFilterParams::default()
        .into_spec()
        .is_identity());
    assert!(PortalRecordFilterParams::default().into_spec().is_identity());
}

#[test]
fn invoice_params_filter_the_collection() {
    let mut invoices = sample_invoices(6);
    invoices[1].buyer = "Globex".to_string();
    invoices[3].buyer = "Globex".to_string();

    let spec = InvoiceFilterParams {
        buyers: Some(vec!["Globex".to_string()]),
        ..Default::default()
    }
    .into_spec();

    let filtered = filter::apply(&invoices, &spec);
    let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["inv-2", "inv-4"]);
}

// ---------------------------------------------------------------------------
// Purchase order view
// ---------------------------------------------------------------------------

fn purchase_order(id: &str, status: &str, total: f64) -> PurchaseOrder {
    PurchaseOrder {
        id: id.to_string(),
        po_number: format!("PO-{}", id),
        vendor: "Initech".to_string(),
        status: status.to_string(),
        requester: Some("kim".to_string()),
        order_date: date("2024-02-01"),
        expected_date: None,
        total,
        currency: "USD".to_string(),
    }
}

#[test]
fn purchase_orders_have_no_priority_stage() {
    // "Open" and "Closed" are ordinary statuses for POs; the sorted
    // order must come through untouched.
    let orders = vec![
        purchase_order("po-1", "Closed", 300.0),
        purchase_order("po-2", "Open", 100.0),
        purchase_order("po-3", "Sent", 200.0),
    ];

    let mut view = PurchaseOrderView::new(20);
    view.set_sort("total");
    let snapshot = view.render(&orders);

    let ids: Vec<&str> = snapshot
        .visible_records
        .iter()
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(ids, vec!["po-2", "po-3", "po-1"]);
}

#[test]
fn purchase_order_params_constrain_vendor_and_date() {
    let mut orders = vec![
        purchase_order("po-1", "Open", 100.0),
        purchase_order("po-2", "Open", 200.0),
    ];
    orders[1].vendor = "Globex".to_string();
    orders[1].order_date = date("2024-05-01");

    let spec = PurchaseOrderFilterParams {
        vendors: Some(vec!["Globex".to_string()]),
        ordered_from: Some("2024-04-01".to_string()),
        ..Default::default()
    }
    .into_spec();

    let filtered = filter::apply(&orders, &spec);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "po-2");
}

// ---------------------------------------------------------------------------
// Portal record params
// ---------------------------------------------------------------------------

#[test]
fn portal_record_params_bucket_by_absolute_amount() {
    let records = vec![
        PortalRecord {
            id: "pr-1".to_string(),
            portal: "SupplierHub".to_string(),
            document_type: "Invoice".to_string(),
            status: "New".to_string(),
            agent: Some("agent-7".to_string()),
            captured_date: date("2024-04-02"),
            amount: 2500.0,
            currency: "USD".to_string(),
        },
        PortalRecord {
            id: "pr-2".to_string(),
            portal: "SupplierHub".to_string(),
            document_type: "Credit Memo".to_string(),
            status: "New".to_string(),
            agent: Some("agent-7".to_string()),
            captured_date: date("2024-04-03"),
            amount: -400.0,
            currency: "USD".to_string(),
        },
    ];

    let spec = PortalRecordFilterParams {
        amount_under: Some(1000.0),
        ..Default::default()
    }
    .into_spec();

    let filtered = filter::apply(&records, &spec);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "pr-2");
}
