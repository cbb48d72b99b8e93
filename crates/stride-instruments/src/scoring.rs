use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The type of score a subscale or composite produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Unscaled count or sum.
    Raw,
    /// 0–100 disability/function percentage.
    Percentage,
    /// Likert-style item rating (e.g., 0–5).
    Rating,
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// An item or subscale definition within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A section of an instrument, containing its items.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// A score entry provided by the user for validation and scoring.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub subscale_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub subscale_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}

/// The computed result of administering an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeScore {
    /// The instrument's primary reported value (percentage or raw total,
    /// per instrument convention).
    pub value: f64,
    pub raw_total: f64,
    pub max_possible: f64,
    pub items_answered: usize,
}

/// Which direction of score movement means the patient is doing better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreDirection {
    LowerIsBetter,
    HigherIsBetter,
}

/// Minimal Clinically Important Difference policy for an instrument.
///
/// `threshold` is in the units of [`OutcomeScore::value`]. A change equal to
/// the threshold counts as meaningful (inclusive bound).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct McidPolicy {
    pub threshold: f64,
    pub direction: ScoreDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChangeClassification {
    MeaningfulImprovement,
    MeaningfulWorsening,
    WithinMeasurementError,
}

impl McidPolicy {
    /// Classify the change from a baseline score to a follow-up score.
    pub fn classify(&self, baseline: f64, current: f64) -> ChangeClassification {
        let delta = current - baseline;
        let improvement = match self.direction {
            ScoreDirection::LowerIsBetter => -delta,
            ScoreDirection::HigherIsBetter => delta,
        };

        if improvement >= self.threshold {
            ChangeClassification::MeaningfulImprovement
        } else if improvement <= -self.threshold {
            ChangeClassification::MeaningfulWorsening
        } else {
            ChangeClassification::WithinMeasurementError
        }
    }
}
