//! Episode → Tantivy document conversion.

use tantivy::schema::Schema;
use tantivy::TantivyDocument;

use stride_core::models::episode::Episode;
use stride_core::schema::{doc_type, field, get_field};

/// Build the index document for an episode.
pub fn episode_doc(schema: &Schema, episode: &Episode) -> TantivyDocument {
    let mut doc = TantivyDocument::new();

    doc.add_text(get_field(schema, field::ID), episode.id.to_string());
    doc.add_text(get_field(schema, field::DOC_TYPE), doc_type::EPISODE);
    doc.add_text(get_field(schema, field::PATIENT_NAME), &episode.patient_name);
    doc.add_text(get_field(schema, field::DIAGNOSIS), &episode.diagnosis);
    doc.add_text(
        get_field(schema, field::DATE_OF_BIRTH),
        episode.date_of_birth.to_string(),
    );
    doc.add_text(get_field(schema, field::BODY_REGION), &episode.body_region);
    doc.add_text(
        get_field(schema, field::DATE_OF_SERVICE),
        episode.date_of_service.to_string(),
    );
    doc.add_i64(
        get_field(schema, field::CREATED_AT),
        episode.created_at.as_second(),
    );
    doc.add_i64(
        get_field(schema, field::UPDATED_AT),
        episode.updated_at.as_second(),
    );

    doc
}
