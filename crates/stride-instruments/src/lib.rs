//! stride-instruments
//!
//! Patient-reported outcome measure definitions. Pure data and arithmetic —
//! no AWS dependency. Defines the items, scoring rules, and MCID (Minimal
//! Clinically Important Difference) policy for each supported instrument.

pub mod error;
pub mod instruments;
pub mod scoring;

use error::InstrumentError;
use scoring::{Domain, McidPolicy, OutcomeScore, ScoreEntry, ValidationError};

/// Trait implemented by each outcome-measure instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "ndi", "quickdash").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "NDI", "QuickDASH").
    fn name(&self) -> &str;

    /// The sections and items this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Compute the instrument's reported score from a set of item entries.
    fn score(&self, scores: &[ScoreEntry]) -> Result<OutcomeScore, InstrumentError>;

    /// The MCID policy for classifying baseline-to-follow-up change.
    fn mcid(&self) -> McidPolicy;

    /// Validate a set of score entries against this instrument's rules.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(subscale) = all_subscales.iter().find(|s| s.id == entry.subscale_id)
                && !subscale.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        entry.value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Reject unknown item ids and out-of-range values before scoring.
    fn check_entries(&self, scores: &[ScoreEntry]) -> Result<(), InstrumentError> {
        for entry in scores {
            let known = self
                .domains()
                .iter()
                .flat_map(|d| &d.subscales)
                .any(|s| s.id == entry.subscale_id);
            if !known {
                return Err(InstrumentError::UnknownSubscale {
                    instrument_id: self.id().to_string(),
                    subscale_id: entry.subscale_id.clone(),
                });
            }
        }
        if let Some(error) = self.validate_scores(scores).into_iter().next() {
            return Err(error.into());
        }
        Ok(())
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::ndi::Ndi),
        Box::new(instruments::odi::Odi),
        Box::new(instruments::quickdash::QuickDash),
        Box::new(instruments::lefs::Lefs),
        Box::new(instruments::rpq::Rpq),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
