//! Portal record table descriptor.

use crate::filter::FilterSpec;
use crate::models::PortalRecord;
use crate::view::TableView;

/// The portal records table view.
pub type PortalRecordView = TableView<PortalRecord>;

pub const DIM_STATUS: &str = "status";
pub const DIM_PORTAL: &str = "portal";
pub const DIM_DOCUMENT_TYPE: &str = "documentType";
pub const DIM_AGENT: &str = "agent";
pub const DIM_CAPTURED_DATE: &str = "capturedDate";
pub const DIM_AMOUNT: &str = "amount";

// ---------------------------------------------------------------------------
// PortalRecordFilterParams
// ---------------------------------------------------------------------------

/// Parameters for filtering the portal records table.
///
/// All fields are optional; `None` leaves the dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct PortalRecordFilterParams {
    pub status: Option<String>,
    pub portals: Option<Vec<String>>,
    pub document_type: Option<String>,
    pub agents: Option<Vec<String>>,
    pub captured_from: Option<String>,
    pub captured_to: Option<String>,
    pub amount_under: Option<f64>,
    pub search: Option<String>,
}

impl PortalRecordFilterParams {
    pub fn into_spec(self) -> FilterSpec {
        let mut spec = FilterSpec::new();

        if let Some(status) = self.status {
            spec = spec.select(DIM_STATUS, status);
        }
        if let Some(portals) = self.portals {
            spec = spec.any_of(DIM_PORTAL, portals);
        }
        if let Some(document_type) = self.document_type {
            spec = spec.select(DIM_DOCUMENT_TYPE, document_type);
        }
        if let Some(agents) = self.agents {
            spec = spec.any_of(DIM_AGENT, agents);
        }
        if self.captured_from.is_some() || self.captured_to.is_some() {
            spec = spec.between(
                DIM_CAPTURED_DATE,
                self.captured_from.as_deref(),
                self.captured_to.as_deref(),
            );
        }
        if let Some(under) = self.amount_under {
            spec = spec.amount_between(DIM_AMOUNT, None, Some(under));
        }
        if let Some(search) = self.search {
            spec = spec.search(search);
        }

        spec
    }
}
