use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::Value;
use tantivy::Index;

use stride_core::schema::{field, get_field};

use crate::error::SearchError;

/// A retrieved episode document from the index.
pub struct SearchResult {
    pub id: String,
    pub patient_name: String,
    pub diagnosis: String,
    pub body_region: String,
    pub date_of_service: String,
    pub score: f32,
}

/// Full-text search across patient name and diagnosis.
pub fn search(
    index: &Index,
    query_text: &str,
    limit: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let reader = index.reader()?;
    let searcher = reader.searcher();
    let schema = index.schema();

    let name_field = get_field(&schema, field::PATIENT_NAME);
    let diagnosis_field = get_field(&schema, field::DIAGNOSIS);

    let query_parser = QueryParser::for_index(index, vec![name_field, diagnosis_field]);
    let query = query_parser
        .parse_query(query_text)
        .map_err(|e| SearchError::QueryParse(e.to_string()))?;

    let top_docs = searcher.search(&query, &TopDocs::with_limit(limit))?;

    let id_field = get_field(&schema, field::ID);
    let body_region_field = get_field(&schema, field::BODY_REGION);
    let date_of_service_field = get_field(&schema, field::DATE_OF_SERVICE);

    let mut results = Vec::new();
    for (score, doc_address) in top_docs {
        let doc = searcher.doc::<tantivy::TantivyDocument>(doc_address)?;

        let text = |f| {
            doc.get_first(f)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };

        results.push(SearchResult {
            id: text(id_field),
            patient_name: text(name_field),
            diagnosis: text(diagnosis_field),
            body_region: text(body_region_field),
            date_of_service: text(date_of_service_field),
            score,
        });
    }

    Ok(results)
}
