//! Duplicate grouping over episode identity buckets.

use std::collections::HashMap;

use stride_core::models::episode::Episode;
use stride_core::models::identity::{DuplicateGroup, IdentityBucket, PatientIdentity};

use crate::similarity::exceeds_threshold;

/// Partition episodes into identity buckets, then cluster buckets whose
/// lower-cased names are similar (> [`crate::similarity::SIMILARITY_THRESHOLD`]) and whose
/// dates of birth match exactly. Groups with a single member are discarded.
///
/// Grouping is single-pass and greedy: a bucket claimed into a group is
/// never reconsidered as the anchor of another, so transitive chains
/// A~B~C where A and C fall below the threshold stay split by iteration
/// order. That approximation is intentional and pinned by tests.
pub fn group_duplicates(episodes: Vec<Episode>) -> Vec<DuplicateGroup> {
    let buckets = bucket_by_identity(episodes);

    let mut claimed = vec![false; buckets.len()];
    let mut groups = Vec::new();

    for anchor in 0..buckets.len() {
        if claimed[anchor] {
            continue;
        }

        let mut members = vec![anchor];
        for candidate in (anchor + 1)..buckets.len() {
            if claimed[candidate] {
                continue;
            }
            if is_probable_match(&buckets[anchor].identity, &buckets[candidate].identity) {
                claimed[candidate] = true;
                members.push(candidate);
            }
        }

        if members.len() < 2 {
            continue;
        }
        claimed[anchor] = true;
        groups.push(DuplicateGroup {
            members: members.iter().map(|&i| buckets[i].clone()).collect(),
        });
    }

    groups
}

/// Exact-key bucketing: lower-cased name + DOB, insertion-ordered.
/// The bucket keeps the first-encountered casing for display.
fn bucket_by_identity(episodes: Vec<Episode>) -> Vec<IdentityBucket> {
    let mut order: Vec<IdentityBucket> = Vec::new();
    let mut index: HashMap<(String, jiff::civil::Date), usize> = HashMap::new();

    for episode in episodes {
        let key = (episode.patient_name.to_lowercase(), episode.date_of_birth);
        match index.get(&key) {
            Some(&i) => order[i].episodes.push(episode),
            None => {
                index.insert(key, order.len());
                order.push(IdentityBucket {
                    identity: PatientIdentity {
                        patient_name: episode.patient_name.clone(),
                        date_of_birth: episode.date_of_birth,
                    },
                    episodes: vec![episode],
                });
            }
        }
    }

    order
}

fn is_probable_match(a: &PatientIdentity, b: &PatientIdentity) -> bool {
    if a.date_of_birth != b.date_of_birth {
        return false;
    }
    exceeds_threshold(
        &a.patient_name.to_lowercase(),
        &b.patient_name.to_lowercase(),
    )
}
