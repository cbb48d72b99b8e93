use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::identity::PatientIdentity;

/// The acting user, threaded explicitly into any operation that writes an
/// audit trail. Resolved by API middleware from the authenticated session —
/// never read from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActorContext {
    pub user_id: String,
    pub clinic_id: String,
    pub user_agent: Option<String>,
}

/// Pre-merge snapshot of one identity that was folded into the primary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MergedIdentitySnapshot {
    pub identity: PatientIdentity,
    pub episode_ids: Vec<Uuid>,
}

/// Immutable record of one patient-merge action.
///
/// Write-once, append-only. A failed write of this entry never rolls back
/// the merge it describes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MergeAuditEntry {
    pub id: Uuid,
    pub action: String,
    pub actor_id: String,
    pub clinic_id: String,
    pub occurred_at: jiff::Timestamp,
    /// All identities that were members of the group, primary included.
    pub merged_identities: Vec<MergedIdentitySnapshot>,
    /// The identity every episode carries after the merge.
    pub surviving_identity: PatientIdentity,
    /// Total episodes in the group after consolidation.
    pub episode_count: usize,
    /// The episodes whose identity fields were rewritten (non-primary only).
    pub rewritten_episode_ids: Vec<Uuid>,
    pub user_agent: Option<String>,
}

/// Action kind recorded on every merge audit entry.
pub const ACTION_PATIENT_MERGE: &str = "patient_merge";
