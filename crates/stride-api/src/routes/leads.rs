use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stride_core::models::lead::{
    AttemptDisposition, ContactAttempt, ContactChannel, Lead, LeadStatus,
};
use stride_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, ApiError> {
    let leads = records::list_leads(&state.store.s3, &state.store.bucket).await?;
    Ok(Json(leads))
}

pub async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Lead>, ApiError> {
    let lead = records::load_lead(&state.store.s3, &state.store.bucket, id).await?;
    Ok(Json(lead))
}

#[derive(Deserialize)]
pub struct CreateLeadRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub source: Option<String>,
}

pub async fn create_lead(
    State(state): State<AppState>,
    Json(req): Json<CreateLeadRequest>,
) -> Result<Json<Lead>, ApiError> {
    let now = jiff::Timestamp::now();
    let lead = Lead {
        id: Uuid::new_v4(),
        name: req.name,
        phone: req.phone,
        email: req.email,
        source: req.source,
        status: LeadStatus::New,
        attempts: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    records::save_lead(&state.store.s3, &state.store.bucket, &lead).await?;
    Ok(Json(lead))
}

#[derive(Deserialize)]
pub struct AttemptRequest {
    pub channel: ContactChannel,
    pub disposition: AttemptDisposition,
    pub note: Option<String>,
}

#[derive(Serialize)]
pub struct AttemptResponse {
    pub lead: Lead,
    pub next_follow_up_due: Option<jiff::Timestamp>,
}

/// Log a contact attempt against a lead and advance its follow-up state.
pub async fn record_attempt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AttemptRequest>,
) -> Result<Json<AttemptResponse>, ApiError> {
    let mut lead = records::load_lead(&state.store.s3, &state.store.bucket, id).await?;

    lead.record_attempt(ContactAttempt {
        attempted_at: jiff::Timestamp::now(),
        channel: req.channel,
        disposition: req.disposition,
        note: req.note,
    });

    records::save_lead(&state.store.s3, &state.store.bucket, &lead).await?;

    let next_follow_up_due = lead.next_follow_up_due();
    Ok(Json(AttemptResponse {
        lead,
        next_follow_up_due,
    }))
}
