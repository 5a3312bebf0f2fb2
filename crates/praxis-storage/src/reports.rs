//! The report content store.
//!
//! One JSON record per assignment at `assignments/{id}/report.json`. Every
//! mutation is load → pure lifecycle transition → ETag-conditional write, so
//! two writers racing on the same assignment degrade to one of them failing
//! with `StorageError::PreconditionFailed` instead of corrupting the
//! finalized snapshot. No operation has partial effects: either the full
//! successor record lands or nothing does.

use aws_sdk_s3::Client;
use jiff::Timestamp;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use praxis_core::error::LifecycleError;
use praxis_core::lifecycle;
use praxis_core::models::assignment::AssessmentAssignment;
use praxis_core::models::report::AssessmentReport;
use praxis_core::s3_keys;

use crate::error::StorageError;
use crate::state;

/// Errors from report store operations: storage failures (including lost
/// conditional-write races) or rejected lifecycle transitions.
#[derive(Debug, Error)]
pub enum ReportStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

/// Load the report for an assignment, if one has been generated yet.
/// Returns the record together with its ETag.
pub async fn load_report(
    client: &Client,
    bucket: &str,
    assignment_id: Uuid,
) -> Result<Option<(AssessmentReport, String)>, StorageError> {
    let key = s3_keys::assignment_report(assignment_id);
    match state::load_state::<AssessmentReport>(client, bucket, &key).await {
        Ok((report, etag)) => Ok(Some((report, etag))),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

async fn require_report(
    client: &Client,
    bucket: &str,
    assignment_id: Uuid,
) -> Result<(AssessmentReport, String), StorageError> {
    load_report(client, bucket, assignment_id)
        .await?
        .ok_or_else(|| StorageError::NotFound {
            key: s3_keys::assignment_report(assignment_id),
        })
}

/// Store newly generated content, creating the report record on first
/// generation. `generated_content` is overwritten; the draft survives unless
/// `reset_draft` is set.
pub async fn create_or_regenerate(
    client: &Client,
    bucket: &str,
    assignment: &AssessmentAssignment,
    content: String,
    reset_draft: bool,
    now: Timestamp,
) -> Result<AssessmentReport, ReportStoreError> {
    let key = s3_keys::assignment_report(assignment.id);

    match load_report(client, bucket, assignment.id).await? {
        Some((report, etag)) => {
            let next =
                lifecycle::record_generation(Some(report), assignment, content, reset_draft, now)?;
            state::save_state_if_match(client, bucket, &key, &next, &etag).await?;
            info!(assignment_id = %assignment.id, "report content regenerated");
            Ok(next)
        }
        None => {
            let next = lifecycle::record_generation(None, assignment, content, reset_draft, now)?;
            state::save_state_if_none_match(client, bucket, &key, &next).await?;
            info!(assignment_id = %assignment.id, "report record created");
            Ok(next)
        }
    }
}

/// Persist an edited working draft.
pub async fn save_draft(
    client: &Client,
    bucket: &str,
    assignment_id: Uuid,
    content: String,
    now: Timestamp,
) -> Result<AssessmentReport, ReportStoreError> {
    let key = s3_keys::assignment_report(assignment_id);
    let (report, etag) = require_report(client, bucket, assignment_id).await?;

    let next = lifecycle::save_draft(report, content, now)?;
    state::save_state_if_match(client, bucket, &key, &next, &etag).await?;
    Ok(next)
}

/// Finalize the report: snapshot the active content and stamp the signer.
pub async fn finalize(
    client: &Client,
    bucket: &str,
    assignment_id: Uuid,
    actor_id: Uuid,
    now: Timestamp,
) -> Result<AssessmentReport, ReportStoreError> {
    let key = s3_keys::assignment_report(assignment_id);
    let (report, etag) = require_report(client, bucket, assignment_id).await?;

    let next = lifecycle::finalize(report, actor_id, now)?;
    state::save_state_if_match(client, bucket, &key, &next, &etag).await?;
    info!(assignment_id = %assignment_id, actor_id = %actor_id, "report finalized");
    Ok(next)
}

/// Reopen a finalized report for editing.
pub async fn reopen(
    client: &Client,
    bucket: &str,
    assignment_id: Uuid,
    now: Timestamp,
) -> Result<AssessmentReport, ReportStoreError> {
    let key = s3_keys::assignment_report(assignment_id);
    let (report, etag) = require_report(client, bucket, assignment_id).await?;

    let next = lifecycle::reopen(report, now)?;
    state::save_state_if_match(client, bucket, &key, &next, &etag).await?;
    info!(assignment_id = %assignment_id, "report reopened");
    Ok(next)
}
