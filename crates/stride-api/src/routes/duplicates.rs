use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::Deserialize;

use stride_core::models::audit::ActorContext;
use stride_core::models::identity::{DuplicateGroup, PatientIdentity};
use stride_core::store::RecordStore;
use stride_dedupe::grouping::group_duplicates;
use stride_dedupe::merge::{merge_group, MergeOutcome};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DuplicateParams {
    pub name: String,
}

/// Fetch candidate episodes by name fragment and cluster them into
/// duplicate groups. Zero or one match means no duplicates — an empty
/// list, not an error.
pub async fn search_duplicates(
    State(state): State<AppState>,
    Query(params): Query<DuplicateParams>,
) -> Result<Json<Vec<DuplicateGroup>>, ApiError> {
    let fragment = params.name.trim();
    if fragment.is_empty() {
        return Err(ApiError::BadRequest("name fragment must not be empty".to_string()));
    }

    let episodes = state
        .store
        .search_episodes_by_name_fragment(fragment)
        .await?;
    if episodes.len() < 2 {
        return Ok(Json(Vec::new()));
    }

    Ok(Json(group_duplicates(episodes)))
}

#[derive(Deserialize)]
pub struct MergeRequest {
    pub group: DuplicateGroup,
    pub primary: PatientIdentity,
}

/// Consolidate a duplicate group onto the chosen primary identity.
///
/// Requires a resolved actor (audit trail attribution); the selection state
/// lives client-side, so a failed merge can be retried without re-searching.
pub async fn merge_duplicates(
    State(state): State<AppState>,
    actor: Option<Extension<ActorContext>>,
    Json(req): Json<MergeRequest>,
) -> Result<Json<MergeOutcome>, ApiError> {
    let Some(Extension(actor)) = actor else {
        return Err(ApiError::Unauthorized("merge requires a resolved user".to_string()));
    };

    let outcome = merge_group(&state.store, &actor, &req.group, &req.primary).await?;
    Ok(Json(outcome))
}
