//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the Stride clinic bucket.

use uuid::Uuid;

pub fn episode(id: Uuid) -> String {
    format!("episodes/{id}.json")
}

pub const EPISODES_PREFIX: &str = "episodes/";

pub fn lead(id: Uuid) -> String {
    format!("leads/{id}.json")
}

pub const LEADS_PREFIX: &str = "leads/";

pub fn audit_entry(id: Uuid) -> String {
    format!("audit/{id}.json")
}

pub const AUDIT_PREFIX: &str = "audit/";

pub const INDEX: &str = "_index/tantivy.tar.zst";
