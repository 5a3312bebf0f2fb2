use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One client's instance of completing one assessment template.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentAssignment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub template_id: Uuid,
    /// The assigning clinician; default signer for the finalized report.
    pub assigned_by_id: Uuid,
    /// `None` while the client is still filling the assessment in.
    pub completed_at: Option<jiff::Timestamp>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl AssessmentAssignment {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}
