//! Core utilities for the NFL stats CLI
//!
//! - `cache`: snapshot paths and file system helpers

pub mod cache;

pub use cache::{is_fresh, snapshot_path, write_string, SNAPSHOT_MAX_AGE};
