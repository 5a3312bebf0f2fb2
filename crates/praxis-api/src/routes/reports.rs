use std::time::Duration;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use praxis_audit::events::AuditEvent;
use praxis_bedrock::draft::generate_report_draft;
use praxis_bedrock::prompt::{DEFAULT_SYSTEM_PROMPT, build_report_input};
use praxis_core::models::client::Client;
use praxis_core::models::clinician::Clinician;
use praxis_core::models::practice::PracticeSettings;
use praxis_core::models::report::{AssessmentReport, ReportCapabilities, ReportPhase};
use praxis_core::models::response::ResponseSet;
use praxis_core::s3_keys;
use praxis_export::context::build_export_context;
use praxis_export::render::{render_html, render_markdown};
use praxis_export::styles::DocumentStyles;
use praxis_responses::group::{group_by_section, render_summary};
use praxis_storage::error::StorageError;
use praxis_storage::{objects, reports as report_store};

use crate::error::ApiError;
use crate::routes::assignments::{load_assignment, load_template};
use crate::state::AppState;

const SIGNATURE_URL_EXPIRY: Duration = Duration::from_secs(900);

/// The report payload every report endpoint returns: the record plus its
/// resolved phase, capabilities, and active content, so the browser renders
/// exactly what the server would export.
#[derive(Serialize)]
pub struct ReportView {
    pub report: AssessmentReport,
    pub phase: ReportPhase,
    pub capabilities: ReportCapabilities,
    pub active_content: String,
}

impl From<AssessmentReport> for ReportView {
    fn from(report: AssessmentReport) -> Self {
        ReportView {
            phase: report.phase(),
            capabilities: report.capabilities(),
            active_content: report.active_content().to_string(),
            report,
        }
    }
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportView>, ApiError> {
    let (report, _etag) = report_store::load_report(&state.s3, &state.bucket, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no report exists for assignment {id}")))?;

    Ok(Json(ReportView::from(report)))
}

#[derive(Deserialize, Default)]
pub struct GenerateRequest {
    /// Also copy the new generated content over the working draft,
    /// discarding the clinician's edits. Off by default.
    #[serde(default)]
    pub reset_draft: bool,
}

/// Generate (or regenerate) report content from the assignment's responses.
pub async fn generate_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<GenerateRequest>>,
) -> Result<Json<ReportView>, ApiError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let assignment = load_assignment(&state, id).await?;
    if !assignment.is_completed() {
        return Err(ApiError::InvalidState(
            "assignment is not completed; a report can only be generated from submitted responses"
                .to_string(),
        ));
    }

    // Cheap pre-check so a locked report fails before the model is invoked;
    // the store re-checks under its conditional write.
    if let Some((existing, _)) = report_store::load_report(&state.s3, &state.bucket, id).await?
        && existing.is_finalized
    {
        return Err(ApiError::InvalidState(
            "report is finalized; reopen it before regenerating".to_string(),
        ));
    }

    let template = load_template(&state, assignment.template_id).await?;
    let client = load_client(&state, assignment.client_id).await?;

    let responses_key = s3_keys::assignment_responses(id);
    let output = objects::get_object(&state.s3, &state.bucket, &responses_key).await?;
    let set: ResponseSet = serde_json::from_slice(&output.body)?;

    let grouped = group_by_section(&set.responses, &template.sections);
    if grouped.orphaned_count() > 0 {
        warn!(
            assignment_id = %id,
            orphaned = grouped.orphaned_count(),
            "orphaned responses excluded from report generation"
        );
    }

    let system_prompt = load_system_prompt(&state).await?;
    let input = build_report_input(
        &client.full_name(),
        &template.name,
        &render_summary(&grouped),
    );

    let draft =
        generate_report_draft(&state.bedrock, &state.model_id, &system_prompt, &input).await?;

    let report = report_store::create_or_regenerate(
        &state.s3,
        &state.bucket,
        &assignment,
        draft.content,
        req.reset_draft,
        jiff::Timestamp::now(),
    )
    .await?;

    AuditEvent::new("report.generate", "report", id.to_string())
        .with_details(serde_json::json!({
            "model_id": draft.model_id,
            "reset_draft": req.reset_draft,
            "input_tokens": draft.usage.input,
            "output_tokens": draft.usage.output,
        }))
        .emit();

    Ok(Json(ReportView::from(report)))
}

#[derive(Deserialize)]
pub struct SaveDraftRequest {
    pub draft_content: String,
}

pub async fn save_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveDraftRequest>,
) -> Result<Json<ReportView>, ApiError> {
    let report = report_store::save_draft(
        &state.s3,
        &state.bucket,
        id,
        req.draft_content,
        jiff::Timestamp::now(),
    )
    .await?;

    AuditEvent::new("report.draft_save", "report", id.to_string()).emit();

    Ok(Json(ReportView::from(report)))
}

#[derive(Deserialize)]
pub struct FinalizeRequest {
    /// The clinician signing off on the report.
    pub actor_id: Uuid,
}

pub async fn finalize_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FinalizeRequest>,
) -> Result<Json<ReportView>, ApiError> {
    let report = report_store::finalize(
        &state.s3,
        &state.bucket,
        id,
        req.actor_id,
        jiff::Timestamp::now(),
    )
    .await?;

    AuditEvent::new("report.finalize", "report", id.to_string())
        .with_actor(req.actor_id.to_string())
        .emit();

    Ok(Json(ReportView::from(report)))
}

pub async fn unfinalize_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportView>, ApiError> {
    let report =
        report_store::reopen(&state.s3, &state.bucket, id, jiff::Timestamp::now()).await?;

    AuditEvent::new("report.reopen", "report", id.to_string()).emit();

    Ok(Json(ReportView::from(report)))
}

#[derive(Deserialize)]
pub struct ExportQuery {
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Html,
    Pdf,
    Docx,
}

/// Export the report in the requested format.
///
/// All formats render from one export context, so the content precedence
/// and the finalized-only signature block cannot differ between them. A copy
/// of the rendered document is kept next to the report record.
pub async fn export_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (report, _etag) = report_store::load_report(&state.s3, &state.bucket, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no report exists for assignment {id}")))?;

    let assignment = load_assignment(&state, id).await?;
    let client = load_client(&state, assignment.client_id).await?;

    // The signer is whoever finalized the report; an unfinalized preview
    // falls back to the assigning clinician (whose identity the context
    // builder withholds anyway).
    let signer_id = report.finalized_by_id.unwrap_or(assignment.assigned_by_id);
    let clinician = load_clinician(&state, signer_id).await?;
    let practice = load_practice_settings(&state).await?;

    let signature_image_url = match (report.is_finalized, &clinician.signature_s3_key) {
        (true, Some(key)) => Some(
            objects::presign_get(&state.s3, &state.bucket, key, SIGNATURE_URL_EXPIRY).await?,
        ),
        _ => None,
    };

    let ctx = build_export_context(&report, &client, &clinician, &practice, signature_image_url);

    let (bytes, s3_dest, content_type) = match query.format {
        ExportFormat::Html => {
            let html = render_html(&ctx)?;
            (
                html.into_bytes(),
                s3_keys::report_html(id),
                "text/html; charset=utf-8",
            )
        }
        ExportFormat::Pdf => {
            let rendered = render_markdown(&ctx)?;
            let pdf = praxis_export::pdf::generate_pdf(&rendered, "Clinical Assessment Report")?;
            (pdf, s3_keys::report_pdf(id), "application/pdf")
        }
        ExportFormat::Docx => {
            let rendered = render_markdown(&ctx)?;
            let docx = praxis_export::docx::generate_docx(&rendered, &DocumentStyles::default())?;
            (
                docx,
                s3_keys::report_docx(id),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            )
        }
    };

    objects::put_object(
        &state.s3,
        &state.bucket,
        &s3_dest,
        bytes.clone(),
        Some(content_type),
    )
    .await?;

    AuditEvent::new("report.export", "report", id.to_string())
        .with_details(serde_json::json!({ "format": format!("{:?}", query.format) }))
        .emit();

    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}

async fn load_client(state: &AppState, id: Uuid) -> Result<Client, ApiError> {
    let key = s3_keys::client(id);
    let output = objects::get_object(&state.s3, &state.bucket, &key).await?;
    Ok(serde_json::from_slice(&output.body)?)
}

async fn load_clinician(state: &AppState, id: Uuid) -> Result<Clinician, ApiError> {
    let key = s3_keys::clinician(id);
    let output = objects::get_object(&state.s3, &state.bucket, &key).await?;
    Ok(serde_json::from_slice(&output.body)?)
}

async fn load_practice_settings(state: &AppState) -> Result<PracticeSettings, ApiError> {
    match objects::get_object(&state.s3, &state.bucket, s3_keys::PRACTICE_SETTINGS).await {
        Ok(output) => Ok(serde_json::from_slice(&output.body)?),
        Err(StorageError::NotFound { .. }) => Ok(PracticeSettings::default()),
        Err(e) => Err(e.into()),
    }
}

async fn load_system_prompt(state: &AppState) -> Result<String, ApiError> {
    match objects::get_object(&state.s3, &state.bucket, s3_keys::SYSTEM_PROMPT).await {
        Ok(output) => String::from_utf8(output.body)
            .map_err(|e| ApiError::Internal(format!("system prompt is not valid UTF-8: {e}"))),
        Err(StorageError::NotFound { .. }) => Ok(DEFAULT_SYSTEM_PROMPT.to_string()),
        Err(e) => Err(e.into()),
    }
}
