//! Human-readable display strings for individual responses.

use praxis_core::models::response::QuestionResponse;
use praxis_core::models::template::{Question, QuestionType};

use crate::fallback::fallback_options;

/// Resolve an option index against the question's persisted options, falling
/// back to the canonical keyword table when none were persisted.
pub fn resolve_option(question: &Question, index: usize) -> Option<&str> {
    match &question.options {
        Some(options) => options.get(index).map(String::as_str),
        None => fallback_options(&question.text).get(index).copied(),
    }
}

/// Format one response for display.
///
/// Missing or unresolvable answers render as fixed sentinel strings rather
/// than empty cells; an empty checkbox selection ("No options selected") and
/// a fully out-of-range one ("Invalid selections") are distinct.
pub fn display_value(response: &QuestionResponse, question: &Question) -> String {
    match question.question_type {
        QuestionType::ShortText | QuestionType::LongText => {
            match response.response_text.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => "No response provided".to_string(),
            }
        }
        QuestionType::MultipleChoice => {
            let Some(&index) = response
                .selected_options
                .as_ref()
                .and_then(|selected| selected.first())
            else {
                return "No response provided".to_string();
            };
            match resolve_option(question, index) {
                Some(option) => option.to_string(),
                None => "Invalid selection".to_string(),
            }
        }
        QuestionType::Checkbox => {
            let selected = response.selected_options.as_deref().unwrap_or_default();
            if selected.is_empty() {
                return "No options selected".to_string();
            }
            let resolved: Vec<&str> = selected
                .iter()
                .filter_map(|&index| resolve_option(question, index))
                .collect();
            if resolved.is_empty() {
                return "Invalid selections".to_string();
            }
            resolved.join(", ")
        }
        QuestionType::RatingScale => {
            let Some(value) = response.rating_value else {
                return "No rating provided".to_string();
            };
            let min = question.rating_min.unwrap_or(1);
            let max = question.rating_max.unwrap_or(5);
            let label = question.rating_labels.as_ref().and_then(|labels| {
                usize::try_from(value - min)
                    .ok()
                    .and_then(|index| labels.get(index))
            });
            match label {
                Some(label) => format!("{label} ({value}/{max})"),
                None => format!("{value}/{max}"),
            }
        }
        QuestionType::Unknown => "Unknown response type".to_string(),
    }
}
