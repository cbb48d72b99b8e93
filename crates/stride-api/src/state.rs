use stride_search::store::IndexedStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The `IndexedStore` carries the S3 client, bucket name, and the loaded
/// Tantivy index; routes reach S3 through it.
#[derive(Clone)]
pub struct AppState {
    pub store: IndexedStore,
}
