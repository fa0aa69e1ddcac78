//! Per-record-type table descriptors.
//!
//! Each module pairs a record type with its dimension names, its
//! optional-filter parameter struct (translated field by field into a
//! [`FilterSpec`](crate::filter::FilterSpec)), and a [`TableView`](crate::view::TableView)
//! alias, so call sites never re-implement filtering logic per table.

pub mod invoices;
pub mod portal_records;
pub mod purchase_orders;

pub use invoices::{InvoiceFilterParams, InvoiceView};
pub use portal_records::{PortalRecordFilterParams, PortalRecordView};
pub use purchase_orders::{PurchaseOrderFilterParams, PurchaseOrderView};
