use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentTemplate {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Sections in display order. Question order within a section is also
    /// display order.
    pub sections: Vec<Section>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: Uuid,
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub question_type: QuestionType,
    /// Persisted answer options for choice questions. Older templates were
    /// created without these; consumers fall back to the canonical
    /// keyword-matched option table when this is `None`.
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub rating_min: Option<i32>,
    #[serde(default)]
    pub rating_max: Option<i32>,
    #[serde(default)]
    pub rating_labels: Option<Vec<String>>,
    #[serde(default)]
    pub is_required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionType {
    ShortText,
    LongText,
    MultipleChoice,
    RatingScale,
    Checkbox,
    /// Question types added after this build was cut deserialize here.
    #[serde(other)]
    Unknown,
}

impl QuestionType {
    /// Whether answers to this question are indices into an option list.
    pub fn uses_options(&self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::Checkbox)
    }
}
