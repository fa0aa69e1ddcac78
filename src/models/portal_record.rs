use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, TableRecord};

// ---------------------------------------------------------------------------
// PortalRecord — document retrieved from a supplier portal by a scan agent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalRecord {
    pub id: String,
    pub portal: String,
    /// Kind of retrieved document, e.g. "Invoice", "Credit Memo", "Statement".
    pub document_type: String,
    /// Enumerated status string, e.g. "New", "Matched", "Excluded".
    pub status: String,
    /// Scan agent that captured the document, when known.
    pub agent: Option<String>,
    pub captured_date: NaiveDate,
    pub amount: f64,
    pub currency: String,
}

impl TableRecord for PortalRecord {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "portal",
            "documentType",
            "status",
            "agent",
            "capturedDate",
            "amount",
            "currency",
        ]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "portal" => Some(FieldValue::Text(self.portal.clone())),
            "documentType" => Some(FieldValue::Text(self.document_type.clone())),
            "status" => Some(FieldValue::Text(self.status.clone())),
            "agent" => self.agent.clone().map(FieldValue::Text),
            "capturedDate" => Some(FieldValue::Date(self.captured_date)),
            "amount" => Some(FieldValue::Number(self.amount)),
            "currency" => Some(FieldValue::Text(self.currency.clone())),
            _ => None,
        }
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["id", "portal", "agent"]
    }

    fn amount_field() -> Option<&'static str> {
        Some("amount")
    }

    fn currency_field() -> Option<&'static str> {
        Some("currency")
    }
}
