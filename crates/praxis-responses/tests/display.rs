use uuid::Uuid;

use praxis_core::models::response::QuestionResponse;
use praxis_core::models::template::{Question, QuestionType};
use praxis_responses::display::display_value;

fn question(text: &str, question_type: QuestionType) -> Question {
    Question {
        id: Uuid::new_v4(),
        text: text.to_string(),
        question_type,
        options: None,
        rating_min: None,
        rating_max: None,
        rating_labels: None,
        is_required: false,
    }
}

fn response_for(question: &Question) -> QuestionResponse {
    QuestionResponse {
        assignment_id: Uuid::new_v4(),
        question_id: question.id,
        response_text: None,
        rating_value: None,
        selected_options: None,
    }
}

#[test]
fn free_text_is_trimmed() {
    let q = question("Describe your week.", QuestionType::LongText);
    let mut r = response_for(&q);
    r.response_text = Some("  It was difficult.  ".to_string());

    assert_eq!(display_value(&r, &q), "It was difficult.");
}

#[test]
fn empty_free_text_renders_sentinel() {
    let q = question("Describe your week.", QuestionType::ShortText);
    let mut r = response_for(&q);
    r.response_text = Some("   ".to_string());

    assert_eq!(display_value(&r, &q), "No response provided");

    r.response_text = None;
    assert_eq!(display_value(&r, &q), "No response provided");
}

#[test]
fn multiple_choice_resolves_persisted_option() {
    let mut q = question("Preferred contact method?", QuestionType::MultipleChoice);
    q.options = Some(vec!["Email".to_string(), "Phone call".to_string()]);
    let mut r = response_for(&q);
    r.selected_options = Some(vec![1]);

    assert_eq!(display_value(&r, &q), "Phone call");
}

#[test]
fn multiple_choice_out_of_range_index_is_invalid_selection() {
    let mut q = question("Preferred contact method?", QuestionType::MultipleChoice);
    q.options = Some(vec!["Email".to_string(), "Phone call".to_string()]);
    let mut r = response_for(&q);
    r.selected_options = Some(vec![5]);

    assert_eq!(display_value(&r, &q), "Invalid selection");
}

#[test]
fn multiple_choice_without_selection_is_no_response() {
    let q = question("Preferred contact method?", QuestionType::MultipleChoice);
    let mut r = response_for(&q);

    assert_eq!(display_value(&r, &q), "No response provided");

    r.selected_options = Some(vec![]);
    assert_eq!(display_value(&r, &q), "No response provided");
}

#[test]
fn multiple_choice_falls_back_to_keyword_options() {
    let q = question(
        "What session format do you prefer?",
        QuestionType::MultipleChoice,
    );
    let mut r = response_for(&q);
    r.selected_options = Some(vec![2]);

    assert_eq!(display_value(&r, &q), "Phone");
}

#[test]
fn checkbox_joins_resolved_fallback_options() {
    let q = question(
        "Which physical symptoms have you experienced?",
        QuestionType::Checkbox,
    );
    let mut r = response_for(&q);
    r.selected_options = Some(vec![0, 2]);

    // Fallback list is ["Headaches", "Sleep problems", "Fatigue"].
    assert_eq!(display_value(&r, &q), "Headaches, Fatigue");
}

#[test]
fn checkbox_drops_unresolved_indices() {
    let mut q = question("Select all that apply.", QuestionType::Checkbox);
    q.options = Some(vec!["A".to_string(), "B".to_string()]);
    let mut r = response_for(&q);
    r.selected_options = Some(vec![0, 7]);

    assert_eq!(display_value(&r, &q), "A");
}

#[test]
fn checkbox_empty_and_all_invalid_sentinels_are_distinct() {
    let mut q = question("Select all that apply.", QuestionType::Checkbox);
    q.options = Some(vec!["A".to_string(), "B".to_string()]);

    let mut empty = response_for(&q);
    empty.selected_options = Some(vec![]);
    assert_eq!(display_value(&empty, &q), "No options selected");

    let mut invalid = response_for(&q);
    invalid.selected_options = Some(vec![4, 9]);
    assert_eq!(display_value(&invalid, &q), "Invalid selections");
}

#[test]
fn rating_with_label_formats_label_and_scale() {
    let mut q = question("How often do you feel anxious?", QuestionType::RatingScale);
    q.rating_min = Some(1);
    q.rating_max = Some(5);
    q.rating_labels = Some(vec![
        "Never".to_string(),
        "Rarely".to_string(),
        "Sometimes".to_string(),
        "Often".to_string(),
        "Always".to_string(),
    ]);
    let mut r = response_for(&q);
    r.rating_value = Some(3);

    assert_eq!(display_value(&r, &q), "Sometimes (3/5)");
}

#[test]
fn rating_without_label_entry_formats_scale_only() {
    let mut q = question("Rate your mood.", QuestionType::RatingScale);
    q.rating_max = Some(10);
    let mut r = response_for(&q);
    r.rating_value = Some(7);

    assert_eq!(display_value(&r, &q), "7/10");
}

#[test]
fn rating_defaults_min_one_max_five() {
    let mut q = question("Rate your mood.", QuestionType::RatingScale);
    q.rating_labels = Some(vec!["Low".to_string(), "Medium".to_string()]);
    let mut r = response_for(&q);
    r.rating_value = Some(2);

    assert_eq!(display_value(&r, &q), "Medium (2/5)");
}

#[test]
fn rating_absent_renders_sentinel() {
    let q = question("Rate your mood.", QuestionType::RatingScale);
    let r = response_for(&q);

    assert_eq!(display_value(&r, &q), "No rating provided");
}

#[test]
fn unknown_question_type_renders_sentinel() {
    let q = question("Anything else?", QuestionType::Unknown);
    let mut r = response_for(&q);
    r.response_text = Some("text".to_string());

    assert_eq!(display_value(&r, &q), "Unknown response type");
}
