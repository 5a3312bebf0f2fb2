//! Submission-time validation of question responses.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use praxis_core::models::response::QuestionResponse;
use praxis_core::models::template::{Question, QuestionType, Section};

/// A response that violates the population invariant or a question rule.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ResponseValidationError {
    pub question_id: Uuid,
    pub message: String,
}

/// Validate a response set against its template.
///
/// Enforces the invariant that exactly the answer field matching the
/// question type is populated — the other fields must be `None`, never an
/// empty substitute for "no answer" — and that rating values fall inside the
/// question's declared range.
pub fn validate_responses(
    responses: &[QuestionResponse],
    sections: &[Section],
) -> Vec<ResponseValidationError> {
    let all_questions: Vec<&Question> = sections
        .iter()
        .flat_map(|section| &section.questions)
        .collect();

    let mut errors = Vec::new();
    for response in responses {
        let Some(question) = all_questions
            .iter()
            .find(|q| q.id == response.question_id)
        else {
            errors.push(ResponseValidationError {
                question_id: response.question_id,
                message: format!(
                    "question {} does not exist in this template",
                    response.question_id
                ),
            });
            continue;
        };

        match question.question_type {
            QuestionType::ShortText | QuestionType::LongText => {
                if response.rating_value.is_some() || response.selected_options.is_some() {
                    errors.push(populated_wrong_field(question, "free text"));
                }
            }
            QuestionType::MultipleChoice | QuestionType::Checkbox => {
                if response.response_text.is_some() || response.rating_value.is_some() {
                    errors.push(populated_wrong_field(question, "option selection"));
                }
            }
            QuestionType::RatingScale => {
                if response.response_text.is_some() || response.selected_options.is_some() {
                    errors.push(populated_wrong_field(question, "rating"));
                }
                if let Some(value) = response.rating_value {
                    let min = question.rating_min.unwrap_or(1);
                    let max = question.rating_max.unwrap_or(5);
                    if value < min || value > max {
                        errors.push(ResponseValidationError {
                            question_id: question.id,
                            message: format!(
                                "{}: rating {} is outside range [{}, {}]",
                                question.text, value, min, max
                            ),
                        });
                    }
                }
            }
            QuestionType::Unknown => {}
        }
    }
    errors
}

fn populated_wrong_field(question: &Question, expected: &str) -> ResponseValidationError {
    ResponseValidationError {
        question_id: question.id,
        message: format!(
            "{}: answer fields other than {} are populated",
            question.text, expected
        ),
    }
}
