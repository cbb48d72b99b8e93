//! The merge executor: consolidate a duplicate group onto a chosen primary
//! identity and record the audit trail.

use serde::Serialize;
use tracing::warn;
use ts_rs::TS;
use uuid::Uuid;

use stride_audit::events::AuditEvent;
use stride_core::models::audit::{
    ActorContext, MergeAuditEntry, MergedIdentitySnapshot, ACTION_PATIENT_MERGE,
};
use stride_core::models::identity::{DuplicateGroup, PatientIdentity};
use stride_core::store::RecordStore;

use crate::error::MergeError;

/// What a completed merge did.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct MergeOutcome {
    pub surviving_identity: PatientIdentity,
    pub episode_count: usize,
    pub rewritten_episode_ids: Vec<Uuid>,
    /// False when the audit append failed; the merge itself still stands.
    pub audit_recorded: bool,
}

/// Consolidate every non-primary member of `group` onto `primary`.
///
/// Rewrites only the identity fields (`patient_name`, `date_of_birth`) of
/// the non-primary episodes, in one store call. The audit append that
/// follows is best-effort: its failure is logged and reported via
/// [`MergeOutcome::audit_recorded`], never propagated — a clinical
/// consolidation must not be lost to a logging fault.
pub async fn merge_group<S: RecordStore>(
    store: &S,
    actor: &ActorContext,
    group: &DuplicateGroup,
    primary: &PatientIdentity,
) -> Result<MergeOutcome, MergeError> {
    if group.members.len() < 2 {
        return Err(MergeError::GroupTooSmall);
    }
    if !group
        .members
        .iter()
        .any(|m| m.identity.same_patient(primary))
    {
        return Err(MergeError::PrimaryNotInGroup);
    }

    let rewritten_episode_ids: Vec<Uuid> = group
        .members
        .iter()
        .filter(|m| !m.identity.same_patient(primary))
        .flat_map(|m| m.episodes.iter().map(|e| e.id))
        .collect();

    store
        .update_patient_identity(
            &rewritten_episode_ids,
            &primary.patient_name,
            primary.date_of_birth,
        )
        .await?;

    let entry = MergeAuditEntry {
        id: Uuid::new_v4(),
        action: ACTION_PATIENT_MERGE.to_string(),
        actor_id: actor.user_id.clone(),
        clinic_id: actor.clinic_id.clone(),
        occurred_at: jiff::Timestamp::now(),
        merged_identities: group
            .members
            .iter()
            .map(|m| MergedIdentitySnapshot {
                identity: m.identity.clone(),
                episode_ids: m.episodes.iter().map(|e| e.id).collect(),
            })
            .collect(),
        surviving_identity: primary.clone(),
        episode_count: group.episode_count(),
        rewritten_episode_ids: rewritten_episode_ids.clone(),
        user_agent: actor.user_agent.clone(),
    };

    let audit_recorded = match store.append_audit_entry(&entry).await {
        Ok(()) => true,
        Err(e) => {
            warn!("merge audit append failed (merge stands): {e}");
            false
        }
    };

    AuditEvent::new(
        ACTION_PATIENT_MERGE,
        "duplicate_group",
        entry.id.to_string(),
        actor.user_id.as_str(),
    )
    .with_clinic(actor.clinic_id.as_str())
    .with_details(serde_json::json!({
        "surviving_name": primary.patient_name,
        "rewritten_episodes": rewritten_episode_ids.len(),
    }))
    .emit();

    Ok(MergeOutcome {
        surviving_identity: primary.clone(),
        episode_count: group.episode_count(),
        rewritten_episode_ids,
        audit_recorded,
    })
}
