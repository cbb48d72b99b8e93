//! stride-dedupe
//!
//! Fuzzy patient-duplicate detection and consolidation: a name-similarity
//! scorer, a grouping engine over episode identity buckets, and the merge
//! executor that rewrites identity fields and records the audit trail.

pub mod error;
pub mod grouping;
pub mod merge;
pub mod similarity;
