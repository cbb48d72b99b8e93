use jiff::civil::{date, Date};
use uuid::Uuid;

use stride_core::models::episode::Episode;
use stride_dedupe::grouping::group_duplicates;

fn episode(name: &str, dob: Date) -> Episode {
    let now = jiff::Timestamp::UNIX_EPOCH;
    Episode {
        id: Uuid::new_v4(),
        patient_name: name.to_string(),
        date_of_birth: dob,
        body_region: "cervical".to_string(),
        diagnosis: "cervicalgia".to_string(),
        date_of_service: date(2024, 3, 1),
        insurance: None,
        emergency_contact: None,
        referring_physician: None,
        medications: None,
        history: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn john_and_jon_smith_form_one_group() {
    let dob = date(1980, 1, 1);
    let episodes = vec![
        episode("John Smith", dob),
        episode("John Smith", dob),
        episode("Jon Smith", dob),
        episode("Alice Jones", date(1975, 5, 5)),
    ];

    let groups = group_duplicates(episodes);

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.members.len(), 2);
    assert_eq!(group.episode_count(), 3);

    let names: Vec<&str> = group
        .members
        .iter()
        .map(|m| m.identity.patient_name.as_str())
        .collect();
    assert!(names.contains(&"John Smith"));
    assert!(names.contains(&"Jon Smith"));
}

#[test]
fn identical_names_with_different_dob_never_group() {
    let episodes = vec![
        episode("Bob Lee", date(1990, 3, 3)),
        episode("Bob Lee", date(1991, 3, 3)),
    ];

    assert!(group_duplicates(episodes).is_empty());
}

#[test]
fn threshold_is_exclusive_at_exactly_point_seven() {
    let dob = date(1985, 6, 15);
    // 10 characters, edit distance 3: similarity exactly 0.7 — must not group.
    let at_bound = vec![episode("abcdefghij", dob), episode("abcdefgxyz", dob)];
    assert!(group_duplicates(at_bound).is_empty());

    // 10 characters, edit distance 2: similarity 0.8 — must group.
    let above_bound = vec![episode("abcdefghij", dob), episode("abcdefghxy", dob)];
    assert_eq!(group_duplicates(above_bound).len(), 1);
}

#[test]
fn empty_input_yields_no_groups() {
    assert!(group_duplicates(Vec::new()).is_empty());
}

#[test]
fn all_unique_names_yield_no_groups() {
    let episodes = vec![
        episode("Alice Jones", date(1975, 5, 5)),
        episode("Bob Lee", date(1990, 3, 3)),
        episode("Carla Mendez", date(1982, 9, 20)),
    ];
    assert!(group_duplicates(episodes).is_empty());
}

#[test]
fn name_casing_lands_in_the_same_bucket() {
    let dob = date(1980, 1, 1);
    // Same identity spelled with different casing plus a near-duplicate:
    // casing differences collapse into one bucket, not a two-bucket group.
    let episodes = vec![
        episode("John Smith", dob),
        episode("john smith", dob),
        episode("Jon Smith", dob),
    ];

    let groups = group_duplicates(episodes);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].members.len(), 2);
    assert_eq!(groups[0].members[0].episodes.len(), 2);
}

#[test]
fn no_episode_is_lost_or_duplicated() {
    let dob = date(1980, 1, 1);
    let episodes = vec![
        episode("John Smith", dob),
        episode("John Smith", dob),
        episode("Jon Smith", dob),
        episode("Alice Jones", date(1975, 5, 5)),
        episode("Bob Lee", date(1990, 3, 3)),
    ];
    let mut input_ids: Vec<Uuid> = episodes.iter().map(|e| e.id).collect();

    let groups = group_duplicates(episodes.clone());

    // Episodes in emitted groups.
    let mut grouped_ids: Vec<Uuid> = groups
        .iter()
        .flat_map(|g| g.members.iter())
        .flat_map(|m| m.episodes.iter().map(|e| e.id))
        .collect();

    // Episodes in discarded singleton buckets are exactly the rest.
    let singleton_ids: Vec<Uuid> = episodes
        .iter()
        .map(|e| e.id)
        .filter(|id| !grouped_ids.contains(id))
        .collect();

    let mut all_ids = grouped_ids.clone();
    all_ids.extend(&singleton_ids);
    all_ids.sort();
    input_ids.sort();
    assert_eq!(all_ids, input_ids);

    // No id appears in two groups.
    grouped_ids.sort();
    grouped_ids.dedup();
    assert_eq!(
        grouped_ids.len(),
        groups.iter().map(|g| g.episode_count()).sum::<usize>()
    );
}

#[test]
fn grouping_is_greedy_not_transitive() {
    let dob = date(1988, 2, 2);
    // B is similar to both A and C, but A and C are too far apart.
    // The anchor pass claims B into A's group; C stays a singleton and is
    // discarded. Pinned behavior, not a bug.
    let a = "aaaaaaaaaa"; // 10 chars
    let b = "aaaaaaaabb"; // distance 2 from a (0.8), distance 4 from c
    let c = "aaaaaabbbb"; // distance 4 from a (0.6)

    assert_eq!(strsim::levenshtein(a, b), 2);
    assert_eq!(strsim::levenshtein(b, c), 2);
    assert_eq!(strsim::levenshtein(a, c), 4);

    let episodes = vec![episode(a, dob), episode(c, dob), episode(b, dob)];
    let groups = group_duplicates(episodes);

    // Anchor order: a first. a~c fails (0.6), a~b groups. c is left alone.
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].members.len(), 2);
}
