use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};

use stride_instruments::scoring::{
    ChangeClassification, Domain, McidPolicy, OutcomeScore, ScoreEntry,
};
use stride_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
    mcid: McidPolicy,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
        mcid: instrument.mcid(),
    }))
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub entries: Vec<ScoreEntry>,
}

pub async fn score_instrument(
    Path(id): Path<String>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<OutcomeScore>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    let outcome = instrument.score(&req.entries)?;
    Ok(Json(outcome))
}

#[derive(Deserialize)]
pub struct ChangeRequest {
    pub baseline: f64,
    pub current: f64,
}

#[derive(Serialize)]
pub struct ChangeResponse {
    pub classification: ChangeClassification,
    pub mcid: McidPolicy,
}

/// Classify a baseline-to-follow-up change against the instrument's MCID.
pub async fn classify_change(
    Path(id): Path<String>,
    Json(req): Json<ChangeRequest>,
) -> Result<Json<ChangeResponse>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    let mcid = instrument.mcid();
    Ok(Json(ChangeResponse {
        classification: mcid.classify(req.baseline, req.current),
        mcid,
    }))
}
