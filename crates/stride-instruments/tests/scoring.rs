use stride_instruments::error::InstrumentError;
use stride_instruments::scoring::{ChangeClassification, ScoreEntry};
use stride_instruments::{all_instruments, get_instrument};

fn entries(pairs: &[(&str, f64)]) -> Vec<ScoreEntry> {
    pairs
        .iter()
        .map(|(id, value)| ScoreEntry {
            subscale_id: id.to_string(),
            value: *value,
        })
        .collect()
}

#[test]
fn every_registered_instrument_has_a_unique_id() {
    let instruments = all_instruments();
    let mut ids: Vec<String> = instruments.iter().map(|i| i.id().to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), instruments.len());
}

#[test]
fn ndi_scores_as_percentage_of_answered_items() {
    let ndi = get_instrument("ndi").unwrap();
    let scores = entries(&[
        ("pain_intensity", 3.0),
        ("personal_care", 2.0),
        ("lifting", 4.0),
        ("reading", 1.0),
        ("headaches", 2.0),
        ("concentration", 3.0),
        ("work", 4.0),
        ("driving", 2.0),
        ("sleeping", 1.0),
        ("recreation", 3.0),
    ]);

    let outcome = ndi.score(&scores).unwrap();
    assert_eq!(outcome.items_answered, 10);
    assert_eq!(outcome.raw_total, 25.0);
    assert_eq!(outcome.max_possible, 50.0);
    assert!((outcome.value - 50.0).abs() < 1e-9);
}

#[test]
fn ndi_percentage_adjusts_for_skipped_items() {
    let ndi = get_instrument("ndi").unwrap();
    // Driving skipped (patient does not drive): denominator is 9 items.
    let scores = entries(&[
        ("pain_intensity", 5.0),
        ("personal_care", 5.0),
        ("lifting", 5.0),
        ("reading", 5.0),
        ("headaches", 5.0),
        ("concentration", 5.0),
        ("work", 5.0),
        ("sleeping", 5.0),
        ("recreation", 5.0),
    ]);

    let outcome = ndi.score(&scores).unwrap();
    assert_eq!(outcome.items_answered, 9);
    assert!((outcome.value - 100.0).abs() < 1e-9);
}

#[test]
fn odi_rejects_out_of_range_item() {
    let odi = get_instrument("odi").unwrap();
    let scores = entries(&[("pain_intensity", 6.0)]);
    assert!(matches!(
        odi.score(&scores),
        Err(InstrumentError::Validation(_))
    ));
}

#[test]
fn unknown_item_id_is_rejected() {
    let odi = get_instrument("odi").unwrap();
    let scores = entries(&[("grip_strength", 2.0)]);
    assert!(matches!(
        odi.score(&scores),
        Err(InstrumentError::UnknownSubscale { .. })
    ));
}

#[test]
fn quickdash_uses_mean_minus_one_times_twenty_five() {
    let quickdash = get_instrument("quickdash").unwrap();
    // All 11 items rated 3: score = (3 - 1) × 25 = 50.
    let scores = entries(&[
        ("open_jar", 3.0),
        ("heavy_chores", 3.0),
        ("carry_bag", 3.0),
        ("wash_back", 3.0),
        ("cut_food", 3.0),
        ("recreation_impact", 3.0),
        ("social_activities", 3.0),
        ("work_limitation", 3.0),
        ("pain", 3.0),
        ("tingling", 3.0),
        ("sleep_difficulty", 3.0),
    ]);

    let outcome = quickdash.score(&scores).unwrap();
    assert!((outcome.value - 50.0).abs() < 1e-9);
}

#[test]
fn quickdash_requires_at_least_ten_items() {
    let quickdash = get_instrument("quickdash").unwrap();
    let scores = entries(&[
        ("open_jar", 3.0),
        ("heavy_chores", 3.0),
        ("carry_bag", 3.0),
        ("wash_back", 3.0),
        ("cut_food", 3.0),
    ]);
    assert!(matches!(
        quickdash.score(&scores),
        Err(InstrumentError::InsufficientItems {
            required: 10,
            answered: 5,
            ..
        })
    ));
}

#[test]
fn lefs_reports_raw_total() {
    let lefs = get_instrument("lefs").unwrap();
    let scores: Vec<ScoreEntry> = lefs.domains()[0]
        .subscales
        .iter()
        .map(|s| ScoreEntry {
            subscale_id: s.id.clone(),
            value: 4.0,
        })
        .collect();

    let outcome = lefs.score(&scores).unwrap();
    assert_eq!(outcome.items_answered, 20);
    assert_eq!(outcome.value, 80.0);
    assert_eq!(outcome.max_possible, 80.0);
}

#[test]
fn rpq_counts_rating_one_as_zero() {
    let rpq = get_instrument("rpq").unwrap();
    let scores = entries(&[
        ("headaches", 1.0),
        ("dizziness", 2.0),
        ("nausea", 0.0),
        ("fatigue", 1.0),
        ("poor_concentration", 3.0),
    ]);

    let outcome = rpq.score(&scores).unwrap();
    // 1-ratings contribute nothing: 2 + 0 + 3.
    assert_eq!(outcome.value, 5.0);
    assert_eq!(outcome.items_answered, 5);
}

#[test]
fn mcid_classification_honors_direction() {
    // NDI: lower is better, threshold 10 percentage points.
    let ndi = get_instrument("ndi").unwrap().mcid();
    assert_eq!(
        ndi.classify(42.0, 30.0),
        ChangeClassification::MeaningfulImprovement
    );
    assert_eq!(
        ndi.classify(30.0, 42.0),
        ChangeClassification::MeaningfulWorsening
    );
    assert_eq!(
        ndi.classify(42.0, 38.0),
        ChangeClassification::WithinMeasurementError
    );

    // LEFS: higher is better, threshold 9 points.
    let lefs = get_instrument("lefs").unwrap().mcid();
    assert_eq!(
        lefs.classify(40.0, 52.0),
        ChangeClassification::MeaningfulImprovement
    );
    assert_eq!(
        lefs.classify(52.0, 40.0),
        ChangeClassification::MeaningfulWorsening
    );
}

#[test]
fn mcid_threshold_is_inclusive() {
    let quickdash = get_instrument("quickdash").unwrap().mcid();
    assert_eq!(
        quickdash.classify(50.0, 42.0),
        ChangeClassification::MeaningfulImprovement
    );
    assert_eq!(
        quickdash.classify(50.0, 42.5),
        ChangeClassification::WithinMeasurementError
    );
}
