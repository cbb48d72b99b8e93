use crate::error::InstrumentError;
use crate::scoring::{
    Domain, McidPolicy, OutcomeScore, ScoreDirection, ScoreEntry, ScoreRange, ScoreType, Subscale,
};
use crate::Instrument;

/// LEFS: Lower Extremity Functional Scale.
/// 20 items rated 0–4; reported as the raw total (0–80).
/// Unlike the disability indices, **higher = better function**.
pub struct Lefs;

impl Instrument for Lefs {
    fn id(&self) -> &str {
        "lefs"
    }

    fn name(&self) -> &str {
        "LEFS"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![Domain {
                id: "items".to_string(),
                name: "Items".to_string(),
                subscales: vec![
                    item("usual_work", "Usual work, housework or school activities"),
                    item("hobbies", "Usual hobbies or recreational activities"),
                    item("bath_shower", "Getting into or out of the bath"),
                    item("walking_rooms", "Walking between rooms"),
                    item("shoes_socks", "Putting on shoes or socks"),
                    item("squatting", "Squatting"),
                    item("lifting_object", "Lifting an object from the floor"),
                    item("light_activities", "Performing light activities around home"),
                    item("heavy_activities", "Performing heavy activities around home"),
                    item("car", "Getting into or out of a car"),
                    item("walking_two_blocks", "Walking two blocks"),
                    item("walking_mile", "Walking a mile"),
                    item("stairs", "Going up or down ten stairs"),
                    item("standing_hour", "Standing for one hour"),
                    item("sitting_hour", "Sitting for one hour"),
                    item("running_even", "Running on even ground"),
                    item("running_uneven", "Running on uneven ground"),
                    item("sharp_turns", "Making sharp turns while running fast"),
                    item("hopping", "Hopping"),
                    item("rolling_in_bed", "Rolling over in bed"),
                ],
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange {
                    min: 0.0,
                    max: 80.0,
                    step: Some(1.0),
                }),
                description: Some("Higher total indicates better function".to_string()),
            }]
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

        let raw_total: f64 = scores.iter().map(|e| e.value).sum();
        Ok(OutcomeScore {
            value: raw_total,
            raw_total,
            max_possible: 4.0 * answered as f64,
            items_answered: answered,
        })
    }

    fn mcid(&self) -> McidPolicy {
        McidPolicy {
            threshold: 9.0,
            direction: ScoreDirection::HigherIsBetter,
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
