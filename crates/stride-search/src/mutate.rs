use tantivy::{Index, IndexWriter, Term};

use stride_core::models::episode::Episode;
use stride_core::schema::{field, get_field};

use crate::docs;
use crate::error::SearchError;

/// Delete the episode's document by ID (a no-op for a fresh episode), then
/// insert the replacement. This is the standard "upsert" pattern in Tantivy.
pub fn update_episode(
    index: &Index,
    writer: &IndexWriter,
    episode: &Episode,
) -> Result<(), SearchError> {
    let schema = index.schema();
    let id_field = get_field(&schema, field::ID);
    let term = Term::from_field_text(id_field, &episode.id.to_string());

    writer.delete_term(term);
    writer.add_document(docs::episode_doc(&schema, episode))?;
    Ok(())
}

/// Delete an episode's document by ID.
pub fn delete_episode(index: &Index, writer: &IndexWriter, id: &str) -> Result<(), SearchError> {
    let schema = index.schema();
    let id_field = get_field(&schema, field::ID);
    let term = Term::from_field_text(id_field, id);

    writer.delete_term(term);
    Ok(())
}

/// Commit all pending changes to the index.
pub fn commit(writer: &mut IndexWriter) -> Result<(), SearchError> {
    writer.commit()?;
    Ok(())
}
