use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The per-assignment report record. One-to-one with an assignment, keyed by
/// `assignment_id`.
///
/// Three content fields track the report's history: `generated_content` is
/// the last model output (overwritten on regeneration), `draft_content` is
/// the clinician's working copy, and `final_content` is the snapshot taken at
/// finalize time. `final_content` survives a reopen for audit purposes but is
/// only authoritative while `is_finalized` is set — see [`active_content`].
///
/// [`active_content`]: AssessmentReport::active_content
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentReport {
    pub assignment_id: Uuid,
    pub generated_content: Option<String>,
    pub draft_content: Option<String>,
    pub final_content: Option<String>,
    pub generated_at: Option<jiff::Timestamp>,
    pub is_finalized: bool,
    pub finalized_at: Option<jiff::Timestamp>,
    pub finalized_by_id: Option<Uuid>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// The two phases a stored report can be in. "No report" is the absence of a
/// record, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportPhase {
    Draft,
    Finalized,
}

/// Which report actions the current phase permits.
///
/// Served with every report payload so the browser editor and the server
/// enforce the same edit lock independently — a direct API caller gets the
/// same refusals the UI greys out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportCapabilities {
    pub can_edit: bool,
    pub can_regenerate: bool,
    pub can_finalize: bool,
    pub can_reopen: bool,
}

impl AssessmentReport {
    pub fn phase(&self) -> ReportPhase {
        if self.is_finalized {
            ReportPhase::Finalized
        } else {
            ReportPhase::Draft
        }
    }

    /// Resolve the currently-authoritative content: the finalized snapshot
    /// while finalized, otherwise the working draft, otherwise the last
    /// generated text, otherwise empty.
    ///
    /// Every reader goes through this one function — the editor payload,
    /// print HTML, PDF, and DOCX. A reopened report's `final_content` is
    /// still stored but never resolved here.
    pub fn active_content(&self) -> &str {
        if self.is_finalized {
            return self.final_content.as_deref().unwrap_or_default();
        }
        self.draft_content
            .as_deref()
            .or(self.generated_content.as_deref())
            .unwrap_or_default()
    }

    pub fn capabilities(&self) -> ReportCapabilities {
        let finalized = self.is_finalized;
        ReportCapabilities {
            can_edit: !finalized,
            can_regenerate: !finalized,
            can_finalize: !finalized && !self.active_content().trim().is_empty(),
            can_reopen: finalized,
        }
    }
}
