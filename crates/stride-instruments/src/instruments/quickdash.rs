use crate::error::InstrumentError;
use crate::scoring::{
    Domain, McidPolicy, OutcomeScore, ScoreDirection, ScoreEntry, ScoreRange, ScoreType, Subscale,
};
use crate::Instrument;

/// QuickDASH: shortened Disabilities of the Arm, Shoulder and Hand.
/// 11 items rated 1–5; score = (mean − 1) × 25, on a 0–100 scale.
/// At least 10 of 11 items must be answered. Higher = more disability.
pub struct QuickDash;

const MIN_ANSWERED: usize = 10;

impl Instrument for QuickDash {
    fn id(&self) -> &str {
        "quickdash"
    }

    fn name(&self) -> &str {
        "QuickDASH"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![Domain {
                id: "items".to_string(),
                name: "Items".to_string(),
                subscales: vec![
                    item("open_jar", "Open a tight or new jar"),
                    item("heavy_chores", "Do heavy household chores"),
                    item("carry_bag", "Carry a shopping bag or briefcase"),
                    item("wash_back", "Wash your back"),
                    item("cut_food", "Use a knife to cut food"),
                    item("recreation_impact", "Recreational activities with force or impact"),
                    item("social_activities", "Interference with social activities"),
                    item("work_limitation", "Limitation in work or daily activities"),
                    item("pain", "Arm, shoulder or hand pain"),
                    item("tingling", "Tingling in arm, shoulder or hand"),
                    item("sleep_difficulty", "Difficulty sleeping"),
                ],
                composite_score_type: Some(ScoreType::Percentage),
                composite_range: Some(ScoreRange {
                    min: 0.0,
                    max: 100.0,
                    step: None,
                }),
                description: Some("Higher score indicates greater disability".to_string()),
            }]
        });
        &DOMAINS
    }

    fn score(&self, scores: &[ScoreEntry]) -> Result<OutcomeScore, InstrumentError> {
        self.check_entries(scores)?;

        let answered = scores.len();
        if answered < MIN_ANSWERED {
            return Err(InstrumentError::InsufficientItems {
                instrument_id: self.id().to_string(),
                required: MIN_ANSWERED,
                answered,
            });
        }

        let raw_total: f64 = scores.iter().map(|e| e.value).sum();
        let mean = raw_total / answered as f64;
        Ok(OutcomeScore {
            value: (mean - 1.0) * 25.0,
            raw_total,
            max_possible: 5.0 * answered as f64,
            items_answered: answered,
        })
    }

    fn mcid(&self) -> McidPolicy {
        McidPolicy {
            threshold: 8.0,
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
            min: 1.0,
            max: 5.0,
            step: Some(1.0),
        },
        description: None,
    }
}
