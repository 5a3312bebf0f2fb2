//! praxis-storage
//!
//! S3 operations: a thin wrapper around the AWS S3 SDK plus the report
//! content store, which turns lifecycle transitions into single conditional
//! writes.

pub mod client;
pub mod error;
pub mod objects;
pub mod reports;
pub mod state;
