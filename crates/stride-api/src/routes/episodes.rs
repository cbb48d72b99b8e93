use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stride_core::models::episode::Episode;
use stride_search::query;
use stride_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_episodes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Episode>>, ApiError> {
    let episodes = records::list_episodes(&state.store.s3, &state.store.bucket).await?;
    Ok(Json(episodes))
}

pub async fn get_episode(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Episode>, ApiError> {
    let episode = records::load_episode(&state.store.s3, &state.store.bucket, id).await?;
    Ok(Json(episode))
}

pub async fn create_episode(
    State(state): State<AppState>,
    Json(episode): Json<Episode>,
) -> Result<Json<Episode>, ApiError> {
    records::save_episode(&state.store.s3, &state.store.bucket, &episode).await?;
    state.store.reindex_episodes(std::slice::from_ref(&episode)).await;
    Ok(Json(episode))
}

pub async fn update_episode(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut episode): Json<Episode>,
) -> Result<Json<Episode>, ApiError> {
    episode.id = id;
    records::save_episode(&state.store.s3, &state.store.bucket, &episode).await?;
    state.store.reindex_episodes(std::slice::from_ref(&episode)).await;
    Ok(Json(episode))
}

pub async fn delete_episode(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    records::delete_episode(&state.store.s3, &state.store.bucket, id).await?;
    state.store.deindex_episode(id).await;
    Ok(Json(()))
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct EpisodeHit {
    pub id: String,
    pub patient_name: String,
    pub diagnosis: String,
    pub body_region: String,
    pub date_of_service: String,
    pub score: f32,
}

/// Full-text search over patient name and diagnosis, index-backed.
pub async fn search_episodes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<EpisodeHit>>, ApiError> {
    let loaded = state.store.index.lock().await;
    let results = query::search(&loaded.index, &params.q, 50)?;

    Ok(Json(
        results
            .into_iter()
            .map(|r| EpisodeHit {
                id: r.id,
                patient_name: r.patient_name,
                diagnosis: r.diagnosis,
                body_region: r.body_region,
                date_of_service: r.date_of_service,
                score: r.score,
            })
            .collect(),
    ))
}
