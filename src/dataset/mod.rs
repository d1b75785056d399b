//! Dataset layer for the NFL stats CLI
//!
//! - `models`: record types and the exportable `Record` trait
//! - `store`: the validated, read-only store loaded at startup

pub mod models;
pub mod store;


pub use models::*;
pub use store::{validate, DatasetStore};
