//! Invoice table descriptor: dimension names, filter parameter object,
//! and the view alias for the invoices console.

use crate::filter::FilterSpec;
use crate::models::Invoice;
use crate::view::TableView;

/// The invoices table view.
pub type InvoiceView = TableView<Invoice>;

pub const DIM_STATUS: &str = "status";
pub const DIM_BUYER: &str = "buyer";
pub const DIM_SUPPLIER: &str = "supplier";
pub const DIM_OWNER: &str = "owner";
pub const DIM_DUE_DATE: &str = "dueDate";
pub const DIM_CURRENCY: &str = "currency";
pub const DIM_TOTAL: &str = "total";

// ---------------------------------------------------------------------------
// InvoiceFilterParams
// ---------------------------------------------------------------------------

/// Parameters for filtering the invoices table.
///
/// All fields are optional. When `None`, the corresponding dimension is
/// left unconstrained.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilterParams {
    pub status: Option<String>,
    pub buyers: Option<Vec<String>>,
    pub suppliers: Option<Vec<String>>,
    pub owners: Option<Vec<String>>,
    pub currency: Option<String>,
    pub due_from: Option<String>,
    pub due_to: Option<String>,
    /// Lower bound on `|total|`, inclusive.
    pub amount_over: Option<f64>,
    /// Upper bound on `|total|`, inclusive ("Under $1000" style buckets).
    pub amount_under: Option<f64>,
    pub search: Option<String>,
}

impl InvoiceFilterParams {
    /// Translate each present parameter into its dimension constraint.
    pub fn into_spec(self) -> FilterSpec {
        let mut spec = FilterSpec::new();

        if let Some(status) = self.status {
            spec = spec.select(DIM_STATUS, status);
        }
        if let Some(buyers) = self.buyers {
            spec = spec.any_of(DIM_BUYER, buyers);
        }
        if let Some(suppliers) = self.suppliers {
            spec = spec.any_of(DIM_SUPPLIER, suppliers);
        }
        if let Some(owners) = self.owners {
            spec = spec.any_of(DIM_OWNER, owners);
        }
        if let Some(currency) = self.currency {
            spec = spec.select(DIM_CURRENCY, currency);
        }
        if self.due_from.is_some() || self.due_to.is_some() {
            spec = spec.between(DIM_DUE_DATE, self.due_from.as_deref(), self.due_to.as_deref());
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
