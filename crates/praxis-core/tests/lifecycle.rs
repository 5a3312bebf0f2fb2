use jiff::Timestamp;
use uuid::Uuid;

use praxis_core::error::LifecycleError;
use praxis_core::lifecycle;
use praxis_core::models::assignment::AssessmentAssignment;
use praxis_core::models::report::{AssessmentReport, ReportPhase};

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn completed_assignment() -> AssessmentAssignment {
    AssessmentAssignment {
        id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        template_id: Uuid::new_v4(),
        assigned_by_id: Uuid::new_v4(),
        completed_at: Some(ts("2026-02-01T09:00:00Z")),
        created_at: ts("2026-01-15T09:00:00Z"),
        updated_at: ts("2026-02-01T09:00:00Z"),
    }
}

fn draft_report(assignment_id: Uuid) -> AssessmentReport {
    AssessmentReport {
        assignment_id,
        generated_content: Some("Generated clinical summary.".to_string()),
        draft_content: None,
        final_content: None,
        generated_at: Some(ts("2026-02-02T10:00:00Z")),
        is_finalized: false,
        finalized_at: None,
        finalized_by_id: None,
        created_at: ts("2026-02-02T10:00:00Z"),
        updated_at: ts("2026-02-02T10:00:00Z"),
    }
}

#[test]
fn generation_requires_completed_assignment() {
    let mut assignment = completed_assignment();
    assignment.completed_at = None;

    let result = lifecycle::record_generation(
        None,
        &assignment,
        "content".to_string(),
        false,
        ts("2026-02-02T10:00:00Z"),
    );

    assert!(matches!(result, Err(LifecycleError::InvalidState(_))));
}

#[test]
fn generation_creates_report_record() {
    let assignment = completed_assignment();
    let now = ts("2026-02-02T10:00:00Z");

    let report =
        lifecycle::record_generation(None, &assignment, "First draft.".to_string(), false, now)
            .unwrap();

    assert_eq!(report.assignment_id, assignment.id);
    assert_eq!(report.generated_content.as_deref(), Some("First draft."));
    assert_eq!(report.generated_at, Some(now));
    assert!(!report.is_finalized);
    assert_eq!(report.phase(), ReportPhase::Draft);
    assert!(report.draft_content.is_none());
}

#[test]
fn regeneration_overwrites_generated_and_preserves_draft() {
    let assignment = completed_assignment();
    let mut report = draft_report(assignment.id);
    report.draft_content = Some("Clinician edits.".to_string());

    let report = lifecycle::record_generation(
        Some(report),
        &assignment,
        "Second generation.".to_string(),
        false,
        ts("2026-02-03T10:00:00Z"),
    )
    .unwrap();

    assert_eq!(
        report.generated_content.as_deref(),
        Some("Second generation.")
    );
    assert_eq!(report.draft_content.as_deref(), Some("Clinician edits."));
}

#[test]
fn regeneration_with_reset_draft_replaces_working_copy() {
    let assignment = completed_assignment();
    let mut report = draft_report(assignment.id);
    report.draft_content = Some("Clinician edits.".to_string());

    let report = lifecycle::record_generation(
        Some(report),
        &assignment,
        "Second generation.".to_string(),
        true,
        ts("2026-02-03T10:00:00Z"),
    )
    .unwrap();

    assert_eq!(report.draft_content.as_deref(), Some("Second generation."));
}

#[test]
fn regeneration_fails_when_finalized() {
    let assignment = completed_assignment();
    let report = lifecycle::finalize(
        draft_report(assignment.id),
        Uuid::new_v4(),
        ts("2026-02-04T10:00:00Z"),
    )
    .unwrap();

    let result = lifecycle::record_generation(
        Some(report),
        &assignment,
        "too late".to_string(),
        false,
        ts("2026-02-05T10:00:00Z"),
    );

    assert!(matches!(result, Err(LifecycleError::InvalidState(_))));
}

#[test]
fn save_draft_while_finalized_fails_and_leaves_draft_unchanged() {
    let assignment = completed_assignment();
    let mut report = draft_report(assignment.id);
    report.draft_content = Some("Signed-off text.".to_string());
    let report =
        lifecycle::finalize(report, Uuid::new_v4(), ts("2026-02-04T10:00:00Z")).unwrap();

    let before = report.clone();
    let result = lifecycle::save_draft(
        report,
        "sneaky edit".to_string(),
        ts("2026-02-05T10:00:00Z"),
    );

    assert!(matches!(result, Err(LifecycleError::InvalidState(_))));
    // The caller's record is the one that survives a failed transition.
    assert_eq!(before.draft_content.as_deref(), Some("Signed-off text."));
}

#[test]
fn finalize_snapshots_draft_over_generated() {
    let assignment = completed_assignment();
    let mut report = draft_report(assignment.id);
    report.draft_content = Some("Edited version.".to_string());
    let actor = Uuid::new_v4();
    let now = ts("2026-02-04T10:00:00Z");

    let report = lifecycle::finalize(report, actor, now).unwrap();

    assert!(report.is_finalized);
    assert_eq!(report.final_content.as_deref(), Some("Edited version."));
    assert_eq!(report.finalized_at, Some(now));
    assert_eq!(report.finalized_by_id, Some(actor));
    assert_eq!(report.active_content(), "Edited version.");
}

#[test]
fn finalize_falls_back_to_generated_when_no_draft() {
    let assignment = completed_assignment();
    let report = lifecycle::finalize(
        draft_report(assignment.id),
        Uuid::new_v4(),
        ts("2026-02-04T10:00:00Z"),
    )
    .unwrap();

    assert_eq!(
        report.final_content.as_deref(),
        Some("Generated clinical summary.")
    );
}

#[test]
fn finalize_with_empty_content_fails_with_no_side_effects() {
    let assignment = completed_assignment();
    let mut report = draft_report(assignment.id);
    report.generated_content = None;

    let before = report.clone();
    let result = lifecycle::finalize(report, Uuid::new_v4(), ts("2026-02-04T10:00:00Z"));

    assert!(matches!(result, Err(LifecycleError::PreconditionFailed(_))));
    assert!(!before.is_finalized);
    assert!(before.final_content.is_none());
    assert!(before.finalized_at.is_none());
}

#[test]
fn double_finalize_fails_and_keeps_first_timestamp() {
    let assignment = completed_assignment();
    let first_time = ts("2026-02-04T10:00:00Z");
    let report = lifecycle::finalize(draft_report(assignment.id), Uuid::new_v4(), first_time)
        .unwrap();

    let before = report.clone();
    let result = lifecycle::finalize(report, Uuid::new_v4(), ts("2026-02-09T10:00:00Z"));

    assert!(matches!(result, Err(LifecycleError::InvalidState(_))));
    assert_eq!(before.finalized_at, Some(first_time));
}

#[test]
fn reopen_then_finalize_restamps_actor_and_time() {
    let assignment = completed_assignment();
    let first_actor = Uuid::new_v4();
    let report = lifecycle::finalize(
        draft_report(assignment.id),
        first_actor,
        ts("2026-02-04T10:00:00Z"),
    )
    .unwrap();

    let report = lifecycle::reopen(report, ts("2026-02-05T10:00:00Z")).unwrap();
    assert_eq!(report.phase(), ReportPhase::Draft);

    let second_actor = Uuid::new_v4();
    let second_time = ts("2026-02-06T10:00:00Z");
    let report = lifecycle::finalize(report, second_actor, second_time).unwrap();

    assert_eq!(report.finalized_at, Some(second_time));
    assert_eq!(report.finalized_by_id, Some(second_actor));
}

#[test]
fn reopen_requires_finalized() {
    let assignment = completed_assignment();
    let result = lifecycle::reopen(draft_report(assignment.id), ts("2026-02-05T10:00:00Z"));

    assert!(matches!(result, Err(LifecycleError::InvalidState(_))));
}

#[test]
fn stale_final_content_is_ignored_after_reopen() {
    let assignment = completed_assignment();
    let mut report = draft_report(assignment.id);
    report.draft_content = Some("Draft at finalize time.".to_string());
    let report =
        lifecycle::finalize(report, Uuid::new_v4(), ts("2026-02-04T10:00:00Z")).unwrap();
    let mut report = lifecycle::reopen(report, ts("2026-02-05T10:00:00Z")).unwrap();

    // The audit snapshot is still stored...
    assert_eq!(
        report.final_content.as_deref(),
        Some("Draft at finalize time.")
    );
    // ...but resolution goes back to the draft, even after further edits.
    report.draft_content = Some("Post-reopen edits.".to_string());
    assert_eq!(report.active_content(), "Post-reopen edits.");
}

#[test]
fn active_content_precedence_without_any_content_is_empty() {
    let assignment = completed_assignment();
    let mut report = draft_report(assignment.id);
    report.generated_content = None;

    assert_eq!(report.active_content(), "");
}

#[test]
fn capabilities_follow_the_edit_lock() {
    let assignment = completed_assignment();
    let report = draft_report(assignment.id);

    let caps = report.capabilities();
    assert!(caps.can_edit);
    assert!(caps.can_regenerate);
    assert!(caps.can_finalize);
    assert!(!caps.can_reopen);

    let report =
        lifecycle::finalize(report, Uuid::new_v4(), ts("2026-02-04T10:00:00Z")).unwrap();
    let caps = report.capabilities();
    assert!(!caps.can_edit);
    assert!(!caps.can_regenerate);
    assert!(!caps.can_finalize);
    assert!(caps.can_reopen);
}

#[test]
fn empty_report_cannot_be_finalized_per_capabilities() {
    let assignment = completed_assignment();
    let mut report = draft_report(assignment.id);
    report.generated_content = None;

    assert!(!report.capabilities().can_finalize);
}
