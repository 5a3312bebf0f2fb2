use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One answer to one question within a completed assignment.
///
/// Exactly one of `response_text`, `rating_value`, `selected_options` is
/// meaningfully populated, determined by the question type. Unpopulated
/// fields are `None` — never an empty stand-in for "no answer".
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionResponse {
    pub assignment_id: Uuid,
    pub question_id: Uuid,
    #[serde(default)]
    pub response_text: Option<String>,
    #[serde(default)]
    pub rating_value: Option<i32>,
    /// Ordered indices into the question's resolved option list.
    #[serde(default)]
    pub selected_options: Option<Vec<usize>>,
}

/// The ordered set of responses one client submitted for one assignment.
/// Stored as a single document so a submission is one write.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet {
    pub assignment_id: Uuid,
    pub responses: Vec<QuestionResponse>,
    pub updated_at: jiff::Timestamp,
}
