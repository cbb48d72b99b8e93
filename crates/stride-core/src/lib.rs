//! stride-core
//!
//! Pure domain types, Tantivy schema, S3 key conventions, and the record
//! store contract. No AWS SDK dependency — this is the shared vocabulary of
//! the Stride system.

pub mod keys;
pub mod models;
pub mod schema;
pub mod store;
