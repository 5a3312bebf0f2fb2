use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A clinician who assigns assessments and signs finalized reports.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Clinician {
    pub id: Uuid,
    pub full_name: String,
    /// Credential line rendered under the signature, e.g. "PhD, LP".
    pub credentials: Option<String>,
    /// S3 key of the uploaded signature image, if one exists.
    pub signature_s3_key: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
