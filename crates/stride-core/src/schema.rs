use tantivy::schema::{self, Schema, FAST, INDEXED, STORED, STRING, TEXT};

/// Field names used in the Tantivy index.
pub mod field {
    pub const ID: &str = "id";
    pub const DOC_TYPE: &str = "doc_type";
    pub const PATIENT_NAME: &str = "patient_name";
    pub const DATE_OF_BIRTH: &str = "date_of_birth";
    pub const BODY_REGION: &str = "body_region";
    pub const DIAGNOSIS: &str = "diagnosis";
    pub const DATE_OF_SERVICE: &str = "date_of_service";
    pub const CREATED_AT: &str = "created_at";
    pub const UPDATED_AT: &str = "updated_at";
}

/// Document types stored in the Tantivy index.
pub mod doc_type {
    pub const EPISODE: &str = "episode";
}

/// Build the Tantivy schema used by the Stride index.
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    // Identifiers — stored and indexed as exact strings
    builder.add_text_field(field::ID, STRING | STORED);
    builder.add_text_field(field::DOC_TYPE, STRING | STORED);

    // Full-text searchable fields
    builder.add_text_field(field::PATIENT_NAME, TEXT | STORED);
    builder.add_text_field(field::DIAGNOSIS, TEXT | STORED);

    // Exact-match filters; civil dates as ISO-8601 strings (sortable as text)
    builder.add_text_field(field::DATE_OF_BIRTH, STRING | STORED);
    builder.add_text_field(field::BODY_REGION, STRING | STORED);
    builder.add_text_field(field::DATE_OF_SERVICE, STRING | STORED);

    // Timestamps as i64 (Unix seconds) — indexed for range queries, fast for sorting
    builder.add_i64_field(field::CREATED_AT, INDEXED | STORED | FAST);
    builder.add_i64_field(field::UPDATED_AT, INDEXED | STORED | FAST);

    builder.build()
}

/// Resolve a field by name from the schema, returning the Tantivy `Field` handle.
///
/// # Panics
///
/// Panics if the field name does not exist in the schema. This is only called
/// with compile-time field name constants, so a panic indicates a schema
/// definition bug.
pub fn get_field(schema: &Schema, name: &str) -> schema::Field {
    schema
        .get_field(name)
        .unwrap_or_else(|_| panic!("field '{name}' not found in schema"))
}
