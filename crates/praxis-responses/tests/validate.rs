use uuid::Uuid;

use praxis_core::models::response::QuestionResponse;
use praxis_core::models::template::{Question, QuestionType, Section};
use praxis_responses::validate::validate_responses;

fn question(text: &str, question_type: QuestionType) -> Question {
    Question {
        id: Uuid::new_v4(),
        text: text.to_string(),
        question_type,
        options: None,
        rating_min: Some(1),
        rating_max: Some(5),
        rating_labels: None,
        is_required: false,
    }
}

fn section(questions: Vec<Question>) -> Section {
    Section {
        id: Uuid::new_v4(),
        title: "Intake".to_string(),
        questions,
    }
}

fn blank_response(question: &Question) -> QuestionResponse {
    QuestionResponse {
        assignment_id: Uuid::new_v4(),
        question_id: question.id,
        response_text: None,
        rating_value: None,
        selected_options: None,
    }
}

#[test]
fn well_formed_responses_pass() {
    let q_text = question("Describe your week.", QuestionType::LongText);
    let q_rating = question("Rate your mood.", QuestionType::RatingScale);
    let sections = vec![section(vec![q_text.clone(), q_rating.clone()])];

    let mut r1 = blank_response(&q_text);
    r1.response_text = Some("Stressful.".to_string());
    let mut r2 = blank_response(&q_rating);
    r2.rating_value = Some(4);

    assert!(validate_responses(&[r1, r2], &sections).is_empty());
}

#[test]
fn text_question_with_rating_populated_fails() {
    let q = question("Describe your week.", QuestionType::ShortText);
    let sections = vec![section(vec![q.clone()])];

    let mut r = blank_response(&q);
    r.response_text = Some("Fine.".to_string());
    r.rating_value = Some(3);

    let errors = validate_responses(&[r], &sections);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].question_id, q.id);
}

#[test]
fn rating_outside_declared_range_fails() {
    let q = question("Rate your mood.", QuestionType::RatingScale);
    let sections = vec![section(vec![q.clone()])];

    let mut r = blank_response(&q);
    r.rating_value = Some(9);

    let errors = validate_responses(&[r], &sections);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("outside range"));
}

#[test]
fn checkbox_with_text_populated_fails() {
    let q = question("Select all that apply.", QuestionType::Checkbox);
    let sections = vec![section(vec![q.clone()])];

    let mut r = blank_response(&q);
    r.selected_options = Some(vec![0]);
    r.response_text = Some("also text".to_string());

    assert_eq!(validate_responses(&[r], &sections).len(), 1);
}

#[test]
fn response_to_unknown_question_fails() {
    let q = question("Describe your week.", QuestionType::ShortText);
    let sections = vec![section(vec![q])];

    let stray = QuestionResponse {
        assignment_id: Uuid::new_v4(),
        question_id: Uuid::new_v4(),
        response_text: Some("answer".to_string()),
        rating_value: None,
        selected_options: None,
    };

    let errors = validate_responses(&[stray], &sections);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("does not exist"));
}
