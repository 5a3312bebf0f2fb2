//! Report lifecycle transitions.
//!
//! The lifecycle is a closed state machine: no report → draft → finalized,
//! with reopen as the only backward edge. Every mutation of a report record
//! goes through exactly one of the functions below; each validates its guard,
//! then returns the complete successor record so the store can persist it as
//! a single conditional write. There are no partial effects — a guard failure
//! leaves the caller's record untouched.

use jiff::Timestamp;
use uuid::Uuid;

use crate::error::LifecycleError;
use crate::models::assignment::AssessmentAssignment;
use crate::models::report::AssessmentReport;

/// Record a generation (or regeneration) of report content.
///
/// Overwrites `generated_content` and `generated_at`. The working draft is
/// left alone unless `reset_draft` is set — regeneration replacing the
/// clinician's edits is an explicit caller decision, never a side effect.
///
/// Guards: the assignment must be completed, and the report (if one exists)
/// must not be finalized.
pub fn record_generation(
    report: Option<AssessmentReport>,
    assignment: &AssessmentAssignment,
    content: String,
    reset_draft: bool,
    now: Timestamp,
) -> Result<AssessmentReport, LifecycleError> {
    if !assignment.is_completed() {
        return Err(LifecycleError::InvalidState(
            "assignment is not completed; a report can only be generated from submitted responses"
                .to_string(),
        ));
    }

    let mut report = match report {
        Some(r) if r.is_finalized => {
            return Err(LifecycleError::InvalidState(
                "report is finalized; reopen it before regenerating".to_string(),
            ));
        }
        Some(r) => r,
        None => AssessmentReport {
            assignment_id: assignment.id,
            generated_content: None,
            draft_content: None,
            final_content: None,
            generated_at: None,
            is_finalized: false,
            finalized_at: None,
            finalized_by_id: None,
            created_at: now,
            updated_at: now,
        },
    };

    report.generated_content = Some(content);
    report.generated_at = Some(now);
    if reset_draft {
        report.draft_content = report.generated_content.clone();
    }
    report.updated_at = now;
    Ok(report)
}

/// Persist an edited working draft. Fails while the report is finalized.
pub fn save_draft(
    mut report: AssessmentReport,
    content: String,
    now: Timestamp,
) -> Result<AssessmentReport, LifecycleError> {
    if report.is_finalized {
        return Err(LifecycleError::InvalidState(
            "report is finalized; edits are locked until it is reopened".to_string(),
        ));
    }

    report.draft_content = Some(content);
    report.updated_at = now;
    Ok(report)
}

/// Lock the report: snapshot the resolved active content into
/// `final_content` and stamp the signing actor and time.
///
/// A repeated finalize fails with `InvalidState` and never re-stamps the
/// original timestamp. Finalizing with no content anywhere fails with
/// `PreconditionFailed` and has no side effects.
pub fn finalize(
    mut report: AssessmentReport,
    actor_id: Uuid,
    now: Timestamp,
) -> Result<AssessmentReport, LifecycleError> {
    if report.is_finalized {
        return Err(LifecycleError::InvalidState(
            "report is already finalized".to_string(),
        ));
    }
    if report.active_content().trim().is_empty() {
        return Err(LifecycleError::PreconditionFailed(
            "report content is empty; there is nothing to finalize".to_string(),
        ));
    }

    let snapshot = report.active_content().to_string();
    report.final_content = Some(snapshot);
    report.is_finalized = true;
    report.finalized_at = Some(now);
    report.finalized_by_id = Some(actor_id);
    report.updated_at = now;
    Ok(report)
}

/// Unlock a finalized report for further editing.
///
/// `final_content` and the finalize stamps stay in place as the audit trail;
/// they simply stop participating in active-content resolution until the
/// next finalize overwrites them.
pub fn reopen(
    mut report: AssessmentReport,
    now: Timestamp,
) -> Result<AssessmentReport, LifecycleError> {
    if !report.is_finalized {
        return Err(LifecycleError::InvalidState(
            "report is not finalized".to_string(),
        ));
    }

    report.is_finalized = false;
    report.updated_at = now;
    Ok(report)
}
