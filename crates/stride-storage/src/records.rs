//! Domain accessors: episodes, leads, and merge audit entries as JSON
//! objects under the key conventions in `stride_core::keys`.

use aws_sdk_s3::Client;
use uuid::Uuid;

use stride_core::keys;
use stride_core::models::audit::MergeAuditEntry;
use stride_core::models::episode::Episode;
use stride_core::models::lead::Lead;

use crate::error::StorageError;
use crate::objects;
use crate::state;

pub async fn load_episode(
    client: &Client,
    bucket: &str,
    id: Uuid,
) -> Result<Episode, StorageError> {
    let (episode, _etag) = state::load_json(client, bucket, &keys::episode(id)).await?;
    Ok(episode)
}

pub async fn save_episode(
    client: &Client,
    bucket: &str,
    episode: &Episode,
) -> Result<(), StorageError> {
    state::save_json(client, bucket, &keys::episode(episode.id), episode).await?;
    Ok(())
}

pub async fn delete_episode(
    client: &Client,
    bucket: &str,
    id: Uuid,
) -> Result<(), StorageError> {
    objects::delete_object(client, bucket, &keys::episode(id)).await
}

/// Load every episode in the bucket.
///
/// Clinic datasets are small (thousands of episodes, not millions); a full
/// listing is how the duplicate scan gets its candidate set.
pub async fn list_episodes(client: &Client, bucket: &str) -> Result<Vec<Episode>, StorageError> {
    let keys = objects::list_objects(client, bucket, keys::EPISODES_PREFIX).await?;

    let mut episodes = Vec::with_capacity(keys.len());
    for key in &keys {
        let output = objects::get_object(client, bucket, key).await?;
        let episode: Episode = serde_json::from_slice(&output.body)?;
        episodes.push(episode);
    }
    Ok(episodes)
}

pub async fn load_lead(client: &Client, bucket: &str, id: Uuid) -> Result<Lead, StorageError> {
    let (lead, _etag) = state::load_json(client, bucket, &keys::lead(id)).await?;
    Ok(lead)
}

pub async fn save_lead(client: &Client, bucket: &str, lead: &Lead) -> Result<(), StorageError> {
    state::save_json(client, bucket, &keys::lead(lead.id), lead).await?;
    Ok(())
}

pub async fn list_leads(client: &Client, bucket: &str) -> Result<Vec<Lead>, StorageError> {
    let keys = objects::list_objects(client, bucket, keys::LEADS_PREFIX).await?;

    let mut leads = Vec::with_capacity(keys.len());
    for key in &keys {
        let output = objects::get_object(client, bucket, key).await?;
        let lead: Lead = serde_json::from_slice(&output.body)?;
        leads.push(lead);
    }
    Ok(leads)
}

/// Append a merge audit entry. Entries are write-once; the key is derived
/// from the entry's own id so a retry can only overwrite itself.
pub async fn append_audit_entry(
    client: &Client,
    bucket: &str,
    entry: &MergeAuditEntry,
) -> Result<(), StorageError> {
    state::save_json(client, bucket, &keys::audit_entry(entry.id), entry).await?;
    Ok(())
}
