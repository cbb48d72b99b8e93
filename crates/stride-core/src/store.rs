//! The storage contract the dedupe flow is written against.
//!
//! The production implementation lives in `stride-search` (S3 objects plus
//! the Tantivy index); tests supply in-memory implementations. Keeping the
//! trait here means `stride-dedupe` never depends on AWS.

use std::future::Future;

use uuid::Uuid;

use crate::models::audit::MergeAuditEntry;
use crate::models::episode::Episode;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("search failed: {0}")]
    Search(String),

    #[error("identity update failed: {0}")]
    Update(String),

    #[error("audit append failed: {0}")]
    Audit(String),
}

/// Generic query/update access to the episode store.
pub trait RecordStore: Send + Sync {
    /// Case-insensitive substring match on patient name, ordered by
    /// date of service descending.
    fn search_episodes_by_name_fragment(
        &self,
        fragment: &str,
    ) -> impl Future<Output = Result<Vec<Episode>, StoreError>> + Send;

    /// Rewrite the identity fields (`patient_name`, `date_of_birth`) on the
    /// given episodes. Touches nothing else — not even `updated_at`.
    ///
    /// Atomicity is at the store's discretion: callers treat this as one
    /// opaque call and surface failure as all-or-nothing.
    fn update_patient_identity(
        &self,
        episode_ids: &[Uuid],
        patient_name: &str,
        date_of_birth: jiff::civil::Date,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Append a merge audit entry. Best-effort from the caller's point of
    /// view — merge success never depends on this succeeding.
    fn append_audit_entry(
        &self,
        entry: &MergeAuditEntry,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
