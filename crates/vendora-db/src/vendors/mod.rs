//! Database operations for the `vendors` table.

mod read;
mod types;
mod write;

pub use read::{count_active_vendors, query_vendors};
pub use types::{NewVendor, VendorRow};
pub use write::upsert_vendors;
