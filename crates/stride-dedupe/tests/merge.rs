use std::sync::Mutex;

use jiff::civil::{date, Date};
use uuid::Uuid;

use stride_core::models::audit::{ActorContext, MergeAuditEntry, ACTION_PATIENT_MERGE};
use stride_core::models::episode::Episode;
use stride_core::models::identity::PatientIdentity;
use stride_core::store::{RecordStore, StoreError};
use stride_dedupe::error::MergeError;
use stride_dedupe::grouping::group_duplicates;
use stride_dedupe::merge::merge_group;

/// In-memory store. The identity rewrite is applied row-by-row under one
/// lock, standing in for the single batched update the production store
/// issues — callers see it as one all-or-nothing call either way.
#[derive(Default)]
struct MemStore {
    episodes: Mutex<Vec<Episode>>,
    audit: Mutex<Vec<MergeAuditEntry>>,
    fail_update: bool,
    fail_audit: bool,
}

impl RecordStore for MemStore {
    async fn search_episodes_by_name_fragment(
        &self,
        fragment: &str,
    ) -> Result<Vec<Episode>, StoreError> {
        let needle = fragment.to_lowercase();
        let mut hits: Vec<Episode> = self
            .episodes
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.patient_name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.date_of_service.cmp(&a.date_of_service));
        Ok(hits)
    }

    async fn update_patient_identity(
        &self,
        episode_ids: &[Uuid],
        patient_name: &str,
        date_of_birth: Date,
    ) -> Result<(), StoreError> {
        if self.fail_update {
            return Err(StoreError::Update("store unavailable".to_string()));
        }
        let mut episodes = self.episodes.lock().unwrap();
        for episode in episodes.iter_mut() {
            if episode_ids.contains(&episode.id) {
                episode.patient_name = patient_name.to_string();
                episode.date_of_birth = date_of_birth;
            }
        }
        Ok(())
    }

    async fn append_audit_entry(&self, entry: &MergeAuditEntry) -> Result<(), StoreError> {
        if self.fail_audit {
            return Err(StoreError::Audit("audit log unavailable".to_string()));
        }
        self.audit.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

fn episode(name: &str, dob: Date, service: Date) -> Episode {
    let now = jiff::Timestamp::UNIX_EPOCH;
    Episode {
        id: Uuid::new_v4(),
        patient_name: name.to_string(),
        date_of_birth: dob,
        body_region: "lumbar".to_string(),
        diagnosis: "low back pain".to_string(),
        date_of_service: service,
        insurance: Some("Acme Health".to_string()),
        emergency_contact: None,
        referring_physician: Some("Dr. Okafor".to_string()),
        medications: None,
        history: None,
        created_at: now,
        updated_at: now,
    }
}

fn actor() -> ActorContext {
    ActorContext {
        user_id: "user-41".to_string(),
        clinic_id: "clinic-1".to_string(),
        user_agent: Some("stride-web/2.3".to_string()),
    }
}

fn smith_store() -> (MemStore, PatientIdentity) {
    let dob = date(1980, 1, 1);
    let store = MemStore {
        episodes: Mutex::new(vec![
            episode("John Smith", dob, date(2024, 1, 10)),
            episode("John Smith", dob, date(2024, 2, 14)),
            episode("Jon Smith", dob, date(2024, 3, 2)),
        ]),
        ..MemStore::default()
    };
    let primary = PatientIdentity {
        patient_name: "John Smith".to_string(),
        date_of_birth: dob,
    };
    (store, primary)
}

#[tokio::test]
async fn merge_rewrites_only_identity_fields() {
    let (store, primary) = smith_store();
    let candidates = store.search_episodes_by_name_fragment("smith").await.unwrap();
    let before = store.episodes.lock().unwrap().clone();

    let groups = group_duplicates(candidates);
    assert_eq!(groups.len(), 1);

    let outcome = merge_group(&store, &actor(), &groups[0], &primary)
        .await
        .unwrap();

    assert_eq!(outcome.episode_count, 3);
    assert_eq!(outcome.rewritten_episode_ids.len(), 1);
    assert!(outcome.audit_recorded);

    let after = store.episodes.lock().unwrap().clone();
    for (old, new) in before.iter().zip(after.iter()) {
        assert_eq!(new.patient_name, "John Smith");
        assert_eq!(new.date_of_birth, date(1980, 1, 1));
        // Everything else untouched, including updated_at.
        assert_eq!(old.id, new.id);
        assert_eq!(old.diagnosis, new.diagnosis);
        assert_eq!(old.date_of_service, new.date_of_service);
        assert_eq!(old.insurance, new.insurance);
        assert_eq!(old.referring_physician, new.referring_physician);
        assert_eq!(old.updated_at, new.updated_at);
    }

    // A follow-up search now returns one unified identity.
    let unified = store.search_episodes_by_name_fragment("john smith").await.unwrap();
    assert_eq!(unified.len(), 3);
}

#[tokio::test]
async fn merge_writes_exactly_one_complete_audit_entry() {
    let (store, primary) = smith_store();
    let candidates = store.search_episodes_by_name_fragment("smith").await.unwrap();
    let groups = group_duplicates(candidates);

    let outcome = merge_group(&store, &actor(), &groups[0], &primary)
        .await
        .unwrap();

    let audit = store.audit.lock().unwrap();
    assert_eq!(audit.len(), 1);
    let entry = &audit[0];
    assert_eq!(entry.action, ACTION_PATIENT_MERGE);
    assert_eq!(entry.actor_id, "user-41");
    assert_eq!(entry.clinic_id, "clinic-1");
    assert_eq!(entry.user_agent.as_deref(), Some("stride-web/2.3"));
    assert_eq!(entry.merged_identities.len(), 2);
    assert!(entry.surviving_identity.same_patient(&primary));
    assert_eq!(entry.episode_count, 3);
    assert_eq!(entry.rewritten_episode_ids, outcome.rewritten_episode_ids);
}

#[tokio::test]
async fn audit_failure_does_not_undo_the_merge() {
    let (base, primary) = smith_store();
    let store = MemStore {
        episodes: Mutex::new(base.episodes.lock().unwrap().clone()),
        fail_audit: true,
        ..MemStore::default()
    };

    let candidates = store.search_episodes_by_name_fragment("smith").await.unwrap();
    let groups = group_duplicates(candidates);

    let outcome = merge_group(&store, &actor(), &groups[0], &primary)
        .await
        .unwrap();

    assert!(!outcome.audit_recorded);
    assert!(store.audit.lock().unwrap().is_empty());
    // The rewrite still happened.
    for e in store.episodes.lock().unwrap().iter() {
        assert_eq!(e.patient_name, "John Smith");
    }
}

#[tokio::test]
async fn update_failure_surfaces_as_merge_failure() {
    let (base, primary) = smith_store();
    let store = MemStore {
        episodes: Mutex::new(base.episodes.lock().unwrap().clone()),
        fail_update: true,
        ..MemStore::default()
    };

    let candidates = store.search_episodes_by_name_fragment("smith").await.unwrap();
    let groups = group_duplicates(candidates);

    let err = merge_group(&store, &actor(), &groups[0], &primary)
        .await
        .unwrap_err();
    assert!(matches!(err, MergeError::Store(StoreError::Update(_))));
    // No audit entry for a failed merge.
    assert!(store.audit.lock().unwrap().is_empty());
}

#[tokio::test]
async fn primary_must_be_a_group_member() {
    let (store, _) = smith_store();
    let candidates = store.search_episodes_by_name_fragment("smith").await.unwrap();
    let groups = group_duplicates(candidates);

    let outsider = PatientIdentity {
        patient_name: "Alice Jones".to_string(),
        date_of_birth: date(1975, 5, 5),
    };
    let err = merge_group(&store, &actor(), &groups[0], &outsider)
        .await
        .unwrap_err();
    assert!(matches!(err, MergeError::PrimaryNotInGroup));
}

#[tokio::test]
async fn group_must_have_two_members() {
    let (store, primary) = smith_store();
    let candidates = store.search_episodes_by_name_fragment("smith").await.unwrap();
    let mut groups = group_duplicates(candidates);
    groups[0].members.truncate(1);

    let err = merge_group(&store, &actor(), &groups[0], &primary)
        .await
        .unwrap_err();
    assert!(matches!(err, MergeError::GroupTooSmall));
}
