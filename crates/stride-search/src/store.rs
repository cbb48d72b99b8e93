//! The production `RecordStore`: episode objects in S3, kept in step with
//! the in-process Tantivy index.

use std::sync::Arc;

use aws_sdk_s3::Client;
use tantivy::IndexWriter;
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use stride_core::models::audit::MergeAuditEntry;
use stride_core::models::episode::Episode;
use stride_core::store::{RecordStore, StoreError};
use stride_storage::records;

use crate::flush;
use crate::index::LoadedIndex;
use crate::mutate;

const WRITER_HEAP_BYTES: usize = 15_000_000;

#[derive(Clone)]
pub struct IndexedStore {
    pub s3: Client,
    pub bucket: String,
    pub index: Arc<Mutex<LoadedIndex>>,
}

impl IndexedStore {
    pub fn new(s3: Client, bucket: String, index: Arc<Mutex<LoadedIndex>>) -> Self {
        Self { s3, bucket, index }
    }

    /// Re-index the given episodes and flush the index back to S3.
    ///
    /// The index is derived data — rebuildable from the episode objects — so
    /// a failure here is logged and swallowed rather than failing the write
    /// that triggered it.
    pub async fn reindex_episodes(&self, episodes: &[Episode]) {
        let mut loaded = self.index.lock().await;
        let result = (|| -> Result<(), crate::error::SearchError> {
            let mut writer: IndexWriter = loaded.index.writer(WRITER_HEAP_BYTES)?;
            for episode in episodes {
                mutate::update_episode(&loaded.index, &writer, episode)?;
            }
            mutate::commit(&mut writer)?;
            Ok(())
        })();

        match result {
            Ok(()) => {
                match flush::flush_index(&self.s3, &self.bucket, &loaded.index_dir, &loaded.etag)
                    .await
                {
                    Ok(new_etag) => loaded.etag = new_etag,
                    Err(e) => warn!("index flush failed after identity rewrite: {e}"),
                }
            }
            Err(e) => warn!("re-index failed after identity rewrite: {e}"),
        }
    }

    /// Remove an episode's document from the index and flush. Same
    /// logged-and-swallowed failure policy as [`Self::reindex_episodes`].
    pub async fn deindex_episode(&self, id: Uuid) {
        let mut loaded = self.index.lock().await;
        let result = (|| -> Result<(), crate::error::SearchError> {
            let mut writer: IndexWriter = loaded.index.writer(WRITER_HEAP_BYTES)?;
            mutate::delete_episode(&loaded.index, &writer, &id.to_string())?;
            mutate::commit(&mut writer)?;
            Ok(())
        })();

        match result {
            Ok(()) => {
                match flush::flush_index(&self.s3, &self.bucket, &loaded.index_dir, &loaded.etag)
                    .await
                {
                    Ok(new_etag) => loaded.etag = new_etag,
                    Err(e) => warn!("index flush failed after episode delete: {e}"),
                }
            }
            Err(e) => warn!("de-index failed for episode {id}: {e}"),
        }
    }
}

impl RecordStore for IndexedStore {
    /// Case-insensitive substring scan over the episode set, newest service
    /// date first. Mirrors the `ilike '%fragment%'` the frontend issues.
    async fn search_episodes_by_name_fragment(
        &self,
        fragment: &str,
    ) -> Result<Vec<Episode>, StoreError> {
        let needle = fragment.to_lowercase();
        let mut episodes = records::list_episodes(&self.s3, &self.bucket)
            .await
            .map_err(|e| StoreError::Search(e.to_string()))?;

        episodes.retain(|e| e.patient_name.to_lowercase().contains(&needle));
        episodes.sort_by(|a, b| b.date_of_service.cmp(&a.date_of_service));
        Ok(episodes)
    }

    async fn update_patient_identity(
        &self,
        episode_ids: &[Uuid],
        patient_name: &str,
        date_of_birth: jiff::civil::Date,
    ) -> Result<(), StoreError> {
        let mut rewritten = Vec::with_capacity(episode_ids.len());
        for &id in episode_ids {
            let mut episode = records::load_episode(&self.s3, &self.bucket, id)
                .await
                .map_err(|e| StoreError::Update(e.to_string()))?;

            episode.patient_name = patient_name.to_string();
            episode.date_of_birth = date_of_birth;

            records::save_episode(&self.s3, &self.bucket, &episode)
                .await
                .map_err(|e| StoreError::Update(e.to_string()))?;
            rewritten.push(episode);
        }

        self.reindex_episodes(&rewritten).await;
        Ok(())
    }

    async fn append_audit_entry(&self, entry: &MergeAuditEntry) -> Result<(), StoreError> {
        records::append_audit_entry(&self.s3, &self.bucket, entry)
            .await
            .map_err(|e| StoreError::Audit(e.to_string()))
    }
}
