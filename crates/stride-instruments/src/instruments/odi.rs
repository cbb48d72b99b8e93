use crate::error::InstrumentError;
use crate::scoring::{
    Domain, McidPolicy, OutcomeScore, ScoreDirection, ScoreEntry, ScoreRange, ScoreType, Subscale,
};
use crate::Instrument;

use super::ndi::percent_of_answered;

/// ODI: Oswestry Disability Index (low back).
/// 10 items rated 0–5; reported as a 0–100 disability percentage over the
/// answered items. Higher = more disability.
pub struct Odi;

impl Instrument for Odi {
    fn id(&self) -> &str {
        "odi"
    }

    fn name(&self) -> &str {
        "ODI"
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
                    item("walking", "Walking"),
                    item("sitting", "Sitting"),
                    item("standing", "Standing"),
                    item("sleeping", "Sleeping"),
                    item("social_life", "Social Life"),
                    item("traveling", "Traveling"),
                    item("employment_homemaking", "Employment/Homemaking"),
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
