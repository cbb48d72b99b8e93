//! stride-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK, plus domain accessors
//! for episodes, leads, and merge audit entries.

pub mod client;
pub mod error;
pub mod objects;
pub mod records;
pub mod state;
