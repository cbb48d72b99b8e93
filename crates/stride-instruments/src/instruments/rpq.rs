use crate::error::InstrumentError;
use crate::scoring::{
    Domain, McidPolicy, OutcomeScore, ScoreDirection, ScoreEntry, ScoreRange, ScoreType, Subscale,
};
use crate::Instrument;

/// RPQ: Rivermead Post-Concussion Symptoms Questionnaire.
/// 16 symptoms rated 0–4 against pre-injury baseline. A rating of 1 means
/// "no more of a problem than before" and contributes 0 to the total, per
/// standard RPQ scoring. Split into RPQ-3 (early) and RPQ-13 (late) domains.
/// Lower = fewer symptoms.
pub struct Rpq;

impl Instrument for Rpq {
    fn id(&self) -> &str {
        "rpq"
    }

    fn name(&self) -> &str {
        "RPQ"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                Domain {
                    id: "rpq3".to_string(),
                    name: "RPQ-3 (early symptoms)".to_string(),
                    subscales: vec![
                        item("headaches", "Headaches"),
                        item("dizziness", "Feelings of dizziness"),
                        item("nausea", "Nausea and/or vomiting"),
                    ],
                    composite_score_type: Some(ScoreType::Raw),
                    composite_range: Some(ScoreRange {
                        min: 0.0,
                        max: 12.0,
                        step: Some(1.0),
                    }),
                    description: None,
                },
                Domain {
                    id: "rpq13".to_string(),
                    name: "RPQ-13 (later symptoms)".to_string(),
                    subscales: vec![
                        item("noise_sensitivity", "Noise sensitivity"),
                        item("sleep_disturbance", "Sleep disturbance"),
                        item("fatigue", "Fatigue, tiring more easily"),
                        item("irritability", "Being irritable, easily angered"),
                        item("depression", "Feeling depressed or tearful"),
                        item("frustration", "Feeling frustrated or impatient"),
                        item("forgetfulness", "Forgetfulness, poor memory"),
                        item("poor_concentration", "Poor concentration"),
                        item("slowed_thinking", "Taking longer to think"),
                        item("blurred_vision", "Blurred vision"),
                        item("light_sensitivity", "Light sensitivity"),
                        item("double_vision", "Double vision"),
                        item("restlessness", "Restlessness"),
                    ],
                    composite_score_type: Some(ScoreType::Raw),
                    composite_range: Some(ScoreRange {
                        min: 0.0,
                        max: 52.0,
                        step: Some(1.0),
                    }),
                    description: None,
                },
            ]
        });
        &DOMAINS
    }

    fn score(&self, scores: &[ScoreEntry]) -> Result<OutcomeScore, InstrumentError> {
        self.check_entries(scores)?;

        let answered = scores.len();
        if answered == 0 {
            return Err(InstrumentError::InsufficientItems {
                instrument_id: self.id().to_string(),
                required: 1,
                answered,
            });
        }

        // Ratings of 1 ("no more of a problem") count as 0.
        let raw_total: f64 = scores
            .iter()
            .map(|e| if e.value == 1.0 { 0.0 } else { e.value })
            .sum();

        Ok(OutcomeScore {
            value: raw_total,
            raw_total,
            max_possible: 4.0 * answered as f64,
            items_answered: answered,
        })
    }

    fn mcid(&self) -> McidPolicy {
        // No consensus MCID exists for the RPQ; 4 points matches the
        // change threshold the clinic dashboards already use.
        McidPolicy {
            threshold: 4.0,
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
            max: 4.0,
            step: Some(1.0),
        },
        description: None,
    }
}
