//! ESPN core API access for building season snapshots
//!
//! - `http`: JSON client with an injectable base URL
//! - `parse`: payload → record conversion
//! - `fetch`: walks standings and leaders into a [`Snapshot`](crate::dataset::Snapshot)

pub mod fetch;
pub mod http;
pub mod parse;

pub use fetch::fetch_snapshot;
pub use http::{EspnClient, CORE_BASE_URL};
