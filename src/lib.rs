//! In-memory table view model for finance operations consoles.
//!
//! Provides the filtering, sorting, priority re-ordering, pagination, and
//! footer aggregation behind record tables (invoices, purchase orders,
//! portal records). The view model owns only declarative state; record
//! collections stay owned by the caller and are passed in per render, so
//! there is no persistence, network, or async surface anywhere in this
//! crate.
//!
//! # Quick start
//!
//! ```rust
//! use finops_view::models::Invoice;
//! use finops_view::{dataset, TableView};
//!
//! let invoices: Vec<Invoice> = dataset::from_json_str(
//!     r#"[{
//!         "id": "inv-1",
//!         "invoiceNumber": "INV-1001",
//!         "buyer": "Acme Corp",
//!         "supplier": "Initech",
//!         "status": "Approved",
//!         "owner": "dana",
//!         "poNumber": null,
//!         "issueDate": "2024-03-01",
//!         "dueDate": "2024-03-31",
//!         "total": 1250.0,
//!         "currency": "USD"
//!     }]"#,
//! )
//! .unwrap();
//!
//! let mut view = TableView::<Invoice>::builder().page_size(20).build();
//! view.select("status", "Approved");
//! view.set_sort("total");
//!
//! let snapshot = view.render(&invoices);
//! assert_eq!(snapshot.total_records, 1);
//! assert_eq!(snapshot.aggregate.total("USD"), 1250.0);
//! ```

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod models;
pub mod paginate;
pub mod priority;
pub mod record;
pub mod sort;
pub mod tables;
pub mod view;

pub use aggregate::AggregateResult;
pub use error::{FinopsError, Result};
pub use filter::{DimensionFilter, FilterBadge, FilterSpec};
pub use paginate::{PageState, PageView};
pub use priority::PriorityRule;
pub use record::{FieldValue, TableRecord};
pub use sort::{Direction, SortSpec};
pub use view::{TableView, TableViewBuilder, ViewSnapshot};
