use jiff::Timestamp;
use jiff::civil::date;
use tantivy::IndexWriter;
use uuid::Uuid;

use stride_core::models::episode::Episode;
use stride_search::{index, mutate, query};

fn episode(name: &str, diagnosis: &str) -> Episode {
    Episode {
        id: Uuid::new_v4(),
        patient_name: name.to_string(),
        date_of_birth: date(1980, 4, 12),
        body_region: "cervical".to_string(),
        diagnosis: diagnosis.to_string(),
        date_of_service: date(2024, 6, 3),
        insurance: None,
        emergency_contact: None,
        referring_physician: None,
        medications: None,
        history: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn indexed_episodes_are_searchable_by_name_and_diagnosis() {
    let dir = tempfile::tempdir().unwrap();
    let idx = index::create_empty_index(dir.path()).unwrap();

    let smith = episode("John Smith", "cervical radiculopathy");
    let reyes = episode("Dana Reyes", "lumbar strain");

    let mut writer: IndexWriter = idx.writer(15_000_000).unwrap();
    mutate::update_episode(&idx, &writer, &smith).unwrap();
    mutate::update_episode(&idx, &writer, &reyes).unwrap();
    mutate::commit(&mut writer).unwrap();

    let by_name = query::search(&idx, "smith", 10).unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, smith.id.to_string());
    assert_eq!(by_name[0].patient_name, "John Smith");

    let by_diagnosis = query::search(&idx, "lumbar", 10).unwrap();
    assert_eq!(by_diagnosis.len(), 1);
    assert_eq!(by_diagnosis[0].id, reyes.id.to_string());
}

#[test]
fn reindexing_an_episode_replaces_its_document() {
    let dir = tempfile::tempdir().unwrap();
    let idx = index::create_empty_index(dir.path()).unwrap();

    let mut smith = episode("John Smith", "cervical radiculopathy");

    let mut writer: IndexWriter = idx.writer(15_000_000).unwrap();
    mutate::update_episode(&idx, &writer, &smith).unwrap();
    mutate::commit(&mut writer).unwrap();

    smith.patient_name = "Jon Smith".to_string();
    mutate::update_episode(&idx, &writer, &smith).unwrap();
    mutate::commit(&mut writer).unwrap();

    let results = query::search(&idx, "smith", 10).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].patient_name, "Jon Smith");
}

#[test]
fn deleted_episodes_drop_out_of_search() {
    let dir = tempfile::tempdir().unwrap();
    let idx = index::create_empty_index(dir.path()).unwrap();

    let smith = episode("John Smith", "cervical radiculopathy");

    let mut writer: IndexWriter = idx.writer(15_000_000).unwrap();
    mutate::update_episode(&idx, &writer, &smith).unwrap();
    mutate::commit(&mut writer).unwrap();

    mutate::delete_episode(&idx, &writer, &smith.id.to_string()).unwrap();
    mutate::commit(&mut writer).unwrap();

    assert!(query::search(&idx, "smith", 10).unwrap().is_empty());
}
