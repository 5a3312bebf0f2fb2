use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use praxis_core::models::assignment::AssessmentAssignment;
use praxis_core::models::response::{QuestionResponse, ResponseSet};
use praxis_core::models::template::AssessmentTemplate;
use praxis_core::s3_keys;
use praxis_responses::group::{GroupedResponses, group_by_section};
use praxis_responses::validate::validate_responses;
use praxis_storage::{objects, state as storage_state};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssessmentAssignment>>, ApiError> {
    let keys =
        objects::list_objects(&state.s3, &state.bucket, s3_keys::ASSIGNMENTS_PREFIX).await?;

    // Assignment folders also hold responses and the report; only the
    // assignment record itself is listed here.
    let mut assignments = Vec::new();
    for key in keys.iter().filter(|k| k.ends_with("/assignment.json")) {
        let output = objects::get_object(&state.s3, &state.bucket, key).await?;
        let assignment: AssessmentAssignment = serde_json::from_slice(&output.body)?;
        assignments.push(assignment);
    }

    Ok(Json(assignments))
}

pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentAssignment>, ApiError> {
    let key = s3_keys::assignment(id);
    let output = objects::get_object(&state.s3, &state.bucket, &key).await?;
    let assignment: AssessmentAssignment = serde_json::from_slice(&output.body)?;
    Ok(Json(assignment))
}

#[derive(Deserialize)]
pub struct CreateAssignmentRequest {
    pub client_id: Uuid,
    pub template_id: Uuid,
    pub assigned_by_id: Uuid,
}

pub async fn create_assignment(
    State(state): State<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<Json<AssessmentAssignment>, ApiError> {
    let now = jiff::Timestamp::now();
    let assignment = AssessmentAssignment {
        id: Uuid::new_v4(),
        client_id: req.client_id,
        template_id: req.template_id,
        assigned_by_id: req.assigned_by_id,
        completed_at: None,
        created_at: now,
        updated_at: now,
    };

    let key = s3_keys::assignment(assignment.id);
    storage_state::save_state_if_none_match(&state.s3, &state.bucket, &key, &assignment).await?;
    Ok(Json(assignment))
}

/// Mark the assignment completed. Completion is one-way: responses freeze
/// and report generation becomes available.
pub async fn complete_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentAssignment>, ApiError> {
    let key = s3_keys::assignment(id);
    let (mut assignment, etag) =
        storage_state::load_state::<AssessmentAssignment>(&state.s3, &state.bucket, &key).await?;

    if assignment.is_completed() {
        return Err(ApiError::InvalidState(
            "assignment is already completed".to_string(),
        ));
    }

    let now = jiff::Timestamp::now();
    assignment.completed_at = Some(now);
    assignment.updated_at = now;
    storage_state::save_state_if_match(&state.s3, &state.bucket, &key, &assignment, &etag).await?;

    Ok(Json(assignment))
}

pub async fn get_responses(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResponseSet>, ApiError> {
    let key = s3_keys::assignment_responses(id);
    let output = objects::get_object(&state.s3, &state.bucket, &key).await?;
    let responses: ResponseSet = serde_json::from_slice(&output.body)?;
    Ok(Json(responses))
}

/// Replace the assignment's response set.
///
/// Rejected once the assignment is completed — a completed assignment is
/// immutable apart from its report. Responses are validated against the
/// template's question types before anything is written.
pub async fn put_responses(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(responses): Json<Vec<QuestionResponse>>,
) -> Result<Json<ResponseSet>, ApiError> {
    let assignment = load_assignment(&state, id).await?;
    if assignment.is_completed() {
        return Err(ApiError::InvalidState(
            "assignment is completed; responses are frozen".to_string(),
        ));
    }

    let template = load_template(&state, assignment.template_id).await?;
    let errors = validate_responses(&responses, &template.sections);
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(ApiError::BadRequest(messages.join("; ")));
    }

    let set = ResponseSet {
        assignment_id: id,
        responses,
        updated_at: jiff::Timestamp::now(),
    };
    let key = s3_keys::assignment_responses(id);
    storage_state::save_state(&state.s3, &state.bucket, &key, &set).await?;

    Ok(Json(set))
}

/// The grouped answer-display model the report screens render.
pub async fn get_answers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GroupedResponses>, ApiError> {
    let assignment = load_assignment(&state, id).await?;
    let template = load_template(&state, assignment.template_id).await?;

    let responses_key = s3_keys::assignment_responses(id);
    let output = objects::get_object(&state.s3, &state.bucket, &responses_key).await?;
    let set: ResponseSet = serde_json::from_slice(&output.body)?;

    let grouped = group_by_section(&set.responses, &template.sections);
    if grouped.orphaned_count() > 0 {
        warn!(
            assignment_id = %id,
            orphaned = grouped.orphaned_count(),
            "responses reference questions missing from the template"
        );
    }

    Ok(Json(grouped))
}

pub(crate) async fn load_assignment(
    state: &AppState,
    id: Uuid,
) -> Result<AssessmentAssignment, ApiError> {
    let key = s3_keys::assignment(id);
    let output = objects::get_object(&state.s3, &state.bucket, &key).await?;
    Ok(serde_json::from_slice(&output.body)?)
}

pub(crate) async fn load_template(
    state: &AppState,
    id: Uuid,
) -> Result<AssessmentTemplate, ApiError> {
    let key = s3_keys::template(id);
    let output = objects::get_object(&state.s3, &state.bucket, &key).await?;
    Ok(serde_json::from_slice(&output.body)?)
}
