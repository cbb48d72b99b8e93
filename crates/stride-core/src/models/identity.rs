use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::episode::Episode;

/// The (name, date-of-birth) pair that stands in for patient identity.
///
/// Not stored on its own — computed over the current episode set at query
/// time. Name comparison is always case-insensitive; `patient_name` keeps the
/// casing of the first episode encountered, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientIdentity {
    pub patient_name: String,
    pub date_of_birth: jiff::civil::Date,
}

impl PatientIdentity {
    /// The exact bucketing key: lower-cased name plus DOB.
    pub fn key(&self) -> (String, jiff::civil::Date) {
        (self.patient_name.to_lowercase(), self.date_of_birth)
    }

    /// Case-insensitive identity equality (same key).
    pub fn same_patient(&self, other: &PatientIdentity) -> bool {
        self.key() == other.key()
    }
}

/// One identity plus every episode currently carrying it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IdentityBucket {
    pub identity: PatientIdentity,
    pub episodes: Vec<Episode>,
}

impl IdentityBucket {
    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }
}

/// Two or more identity buckets judged to be the same real patient.
///
/// Ephemeral and request-scoped: computed fresh on every duplicate search,
/// discarded when the search is cleared or a merge completes. The grouping
/// engine never emits a group with fewer than two members.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DuplicateGroup {
    pub members: Vec<IdentityBucket>,
}

impl DuplicateGroup {
    /// Total episodes across all member buckets.
    pub fn episode_count(&self) -> usize {
        self.members.iter().map(IdentityBucket::episode_count).sum()
    }
}
