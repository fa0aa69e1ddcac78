use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::priority::PriorityRule;
use crate::record::{FieldValue, TableRecord};

// ---------------------------------------------------------------------------
// Invoice — supplier invoice as shown in the invoices table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub buyer: String,
    pub supplier: String,
    /// Enumerated status string, e.g. "Pending Action", "Approved", "Paid".
    pub status: String,
    pub owner: Option<String>,
    pub po_number: Option<String>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Signed amount: credit memos are negative.
    pub total: f64,
    pub currency: String,
}

impl Invoice {
    /// Status pinned to the front of every invoice table.
    pub const STATUS_PENDING_ACTION: &'static str = "Pending Action";
    /// Status pinned to the back of every invoice table.
    pub const STATUS_PAID: &'static str = "Paid";
}

impl TableRecord for Invoice {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "invoiceNumber",
            "buyer",
            "supplier",
            "status",
            "owner",
            "poNumber",
            "issueDate",
            "dueDate",
            "total",
            "currency",
        ]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "invoiceNumber" => Some(FieldValue::Text(self.invoice_number.clone())),
            "buyer" => Some(FieldValue::Text(self.buyer.clone())),
            "supplier" => Some(FieldValue::Text(self.supplier.clone())),
            "status" => Some(FieldValue::Text(self.status.clone())),
            "owner" => self.owner.clone().map(FieldValue::Text),
            "poNumber" => self.po_number.clone().map(FieldValue::Text),
            "issueDate" => Some(FieldValue::Date(self.issue_date)),
            "dueDate" => Some(FieldValue::Date(self.due_date)),
            "total" => Some(FieldValue::Number(self.total)),
            "currency" => Some(FieldValue::Text(self.currency.clone())),
            _ => None,
        }
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["invoiceNumber", "buyer", "supplier", "owner"]
    }

    fn amount_field() -> Option<&'static str> {
        Some("total")
    }

    fn currency_field() -> Option<&'static str> {
        Some("currency")
    }

    fn priority_rule() -> Option<PriorityRule> {
        Some(PriorityRule::new(
            "status",
            Self::STATUS_PENDING_ACTION,
            Self::STATUS_PAID,
        ))
    }
}
