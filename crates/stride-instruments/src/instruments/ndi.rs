use crate::error::InstrumentError;
use crate::scoring::{
    Domain, McidPolicy, OutcomeScore, ScoreDirection, ScoreEntry, ScoreRange, ScoreType, Subscale,
};
use crate::Instrument;

/// NDI: Neck Disability Index.
/// 10 items rated 0–5; reported as a 0–100 disability percentage over the
/// answered items. Higher = more disability.
pub struct Ndi;

impl Instrument for Ndi {
    fn id(&self) -> &str {
        "ndi"
    }

    fn name(&self) -> &str {
        "NDI"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![Domain {
                id: "items".to_string(),
                name: "Items".to_string(),
                subscales: vec![
                    item("pain_intensity", "Pain Intensity"),
                    item("personal_care", "Personal Care"),
                    item("lifting", "Lifting"),
                    item("reading", "Reading"),
                    item("headaches", "Headaches"),
                    item("concentration", "Concentration"),
                    item("work", "Work"),
                    item("driving", "Driving"),
                    item("sleeping", "Sleeping"),
                    item("recreation", "Recreation"),
                ],
                composite_score_type: Some(ScoreType::Percentage),
                composite_range: Some(ScoreRange {
                    min: 0.0,
                    max: 100.0,
                    step: None,
                }),
                description: Some("Higher percentage indicates greater disability".to_string()),
            }]
        });
        &DOMAINS
    }

    fn score(&self, scores: &[ScoreEntry]) -> Result<OutcomeScore, InstrumentError> {
        self.check_entries(scores)?;
        percent_of_answered(self, scores, 5.0, 1)
    }

    fn mcid(&self) -> McidPolicy {
        McidPolicy {
            threshold: 10.0,
            direction: ScoreDirection::LowerIsBetter,
        }
    }
}

fn item(id: &str, name: &str) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        score_type: ScoreType::Rating,
        range: ScoreRange {
            min: 0.0,
            max: 5.0,
            step: Some(1.0),
        },
        description: None,
    }
}

/// Shared NDI/ODI formula: sum over answered items, expressed as a
/// percentage of the maximum possible for those items.
pub(super) fn percent_of_answered(
    instrument: &dyn Instrument,
    scores: &[ScoreEntry],
    item_max: f64,
    min_answered: usize,
) -> Result<OutcomeScore, InstrumentError> {
    let answered = scores.len();
    if answered < min_answered {
        return Err(InstrumentError::InsufficientItems {
            instrument_id: instrument.id().to_string(),
            required: min_answered,
            answered,
        });
    }

    let raw_total: f64 = scores.iter().map(|e| e.value).sum();
    let max_possible = item_max * answered as f64;
    Ok(OutcomeScore {
        value: raw_total / max_possible * 100.0,
        raw_total,
        max_possible,
        items_answered: answered,
    })
}
