//! stride-search
//!
//! Tantivy index lifecycle: download from S3, query, mutate, flush back with
//! ETag locking. Also hosts the S3-backed `RecordStore` implementation the
//! duplicate-merge flow runs against.

pub mod docs;
pub mod error;
pub mod flush;
pub mod index;
pub mod mutate;
pub mod query;
pub mod store;
