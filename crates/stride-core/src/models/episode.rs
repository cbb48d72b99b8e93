use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A treatment episode — one course of care for one patient.
///
/// Patient identity is carried on the episode itself (`patient_name` +
/// `date_of_birth`), not as a foreign key. The duplicate-merge flow rewrites
/// exactly those two fields and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Episode {
    pub id: Uuid,
    pub patient_name: String,
    pub date_of_birth: jiff::civil::Date,
    pub body_region: String,
    pub diagnosis: String,
    pub date_of_service: jiff::civil::Date,
    pub insurance: Option<String>,
    pub emergency_contact: Option<String>,
    pub referring_physician: Option<String>,
    pub medications: Option<String>,
    pub history: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
