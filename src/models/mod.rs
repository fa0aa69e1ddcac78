pub mod invoice;
pub mod portal_record;
pub mod purchase_order;

pub use invoice::*;
pub use portal_record::*;
pub use purchase_order::*;
