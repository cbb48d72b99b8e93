use std::env;
use std::path::Path;
use std::sync::Arc;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;
use stride_search::store::IndexedStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("STRIDE_BUCKET").unwrap_or_else(|_| "stride".to_string());

    let s3 = stride_storage::client::build_client().await;

    // Try to download the Tantivy index; create empty if not found.
    let index_dir = Path::new("/tmp/tantivy");
    let loaded_index =
        match stride_search::index::download_index(&s3, &bucket, index_dir).await {
            Ok(idx) => idx,
            Err(stride_search::error::SearchError::IndexNotFound) => {
                tracing::info!("no existing index found, creating empty index");
                std::fs::create_dir_all(index_dir)?;
                let index = stride_search::index::create_empty_index(index_dir)?;
                // Seed S3 so later flushes have an ETag to lock against.
                let etag =
                    stride_search::flush::flush_index_unconditional(&s3, &bucket, index_dir)
                        .await?;
                stride_search::index::LoadedIndex {
                    index,
                    index_dir: index_dir.to_path_buf(),
                    etag,
                }
            }
            Err(e) => return Err(e.into()),
        };

    let state = AppState {
        store: IndexedStore::new(s3, bucket, Arc::new(Mutex::new(loaded_index))),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Instruments (no auth — public schema data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/score",
            post(routes::instruments::score_instrument),
        )
        .route(
            "/instruments/{id}/change",
            post(routes::instruments::classify_change),
        )
        // Episodes
        .route("/episodes", get(routes::episodes::list_episodes))
        .route("/episodes", post(routes::episodes::create_episode))
        .route("/episodes/search", get(routes::episodes::search_episodes))
        .route("/episodes/{id}", get(routes::episodes::get_episode))
        .route("/episodes/{id}", put(routes::episodes::update_episode))
        .route("/episodes/{id}", delete(routes::episodes::delete_episode))
        // Duplicate detection & merge
        .route("/duplicates", get(routes::duplicates::search_duplicates))
        .route("/duplicates/merge", post(routes::duplicates::merge_duplicates))
        // Leads & contact attempts
        .route("/leads", get(routes::leads::list_leads))
        .route("/leads", post(routes::leads::create_lead))
        .route("/leads/{id}", get(routes::leads::get_lead))
        .route("/leads/{id}/attempts", post(routes::leads::record_attempt))
        .layer(axum_mw::from_fn(middleware::actor::resolve_actor))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
