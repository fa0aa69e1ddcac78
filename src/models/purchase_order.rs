use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, TableRecord};

// ---------------------------------------------------------------------------
// PurchaseOrder — outbound PO as shown in the purchase orders table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub po_number: String,
    pub vendor: String,
    /// Enumerated status string, e.g. "Open", "Sent", "Closed".
    pub status: String,
    pub requester: Option<String>,
    pub order_date: NaiveDate,
    pub expected_date: Option<NaiveDate>,
    pub total: f64,
    pub currency: String,
}

impl TableRecord for PurchaseOrder {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "poNumber",
            "vendor",
            "status",
            "requester",
            "orderDate",
            "expectedDate",
            "total",
            "currency",
        ]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "poNumber" => Some(FieldValue::Text(self.po_number.clone())),
            "vendor" => Some(FieldValue::Text(self.vendor.clone())),
            "status" => Some(FieldValue::Text(self.status.clone())),
            "requester" => self.requester.clone().map(FieldValue::Text),
            "orderDate" => Some(FieldValue::Date(self.order_date)),
            "expectedDate" => self.expected_date.map(FieldValue::Date),
            "total" => Some(FieldValue::Number(self.total)),
            "currency" => Some(FieldValue::Text(self.currency.clone())),
            _ => None,
        }
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["poNumber", "vendor", "requester"]
    }

    fn amount_field() -> Option<&'static str> {
        Some("total")
    }

    fn currency_field() -> Option<&'static str> {
        Some("currency")
    }
}
