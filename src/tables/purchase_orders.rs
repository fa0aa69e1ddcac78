//! Purchase order table descriptor.

use crate::filter::FilterSpec;
use crate::models::PurchaseOrder;
use crate::view::TableView;

/// The purchase orders table view.
pub type PurchaseOrderView = TableView<PurchaseOrder>;

pub const DIM_STATUS: &str = "status";
pub const DIM_VENDOR: &str = "vendor";
pub const DIM_REQUESTER: &str = "requester";
pub const DIM_ORDER_DATE: &str = "orderDate";
pub const DIM_CURRENCY: &str = "currency";
pub const DIM_TOTAL: &str = "total";

// ---------------------------------------------------------------------------
// PurchaseOrderFilterParams
// ---------------------------------------------------------------------------

/// Parameters for filtering the purchase orders table.
///
/// All fields are optional; `None` leaves the dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct PurchaseOrderFilterParams {
    pub status: Option<String>,
    pub vendors: Option<Vec<String>>,
    pub requesters: Option<Vec<String>>,
    pub currency: Option<String>,
    pub ordered_from: Option<String>,
    pub ordered_to: Option<String>,
    pub amount_over: Option<f64>,
    pub amount_under: Option<f64>,
    pub search: Option<String>,
}

impl PurchaseOrderFilterParams {
    pub fn into_spec(self) -> FilterSpec {
        let mut spec = FilterSpec::new();

        if let Some(status) = self.status {
            spec = spec.select(DIM_STATUS, status);
        }
        if let Some(vendors) = self.vendors {
            spec = spec.any_of(DIM_VENDOR, vendors);
        }
        if let Some(requesters) = self.requesters {
            spec = spec.any_of(DIM_REQUESTER, requesters);
        }
        if let Some(currency) = self.currency {
            spec = spec.select(DIM_CURRENCY, currency);
        }
        if self.ordered_from.is_some() || self.ordered_to.is_some() {
            spec = spec.between(
                DIM_ORDER_DATE,
                self.ordered_from.as_deref(),
                self.ordered_to.as_deref(),
            );
        }
        if self.amount_over.is_some() || self.amount_under.is_some() {
            spec = spec.amount_between(DIM_TOTAL, self.amount_over, self.amount_under);
        }
        if let Some(search) = self.search {
            spec = spec.search(search);
        }

        spec
    }
}
