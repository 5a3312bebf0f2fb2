//! The export context: everything a renderer may show.
//!
//! Built exclusively through [`build_export_context`], which applies the
//! active-content precedence and the finalized-only signature rule once for
//! all output formats. Renderers consume the resolved fields and never look
//! at the report record directly.

use serde::{Deserialize, Serialize};

use praxis_core::models::client::Client;
use praxis_core::models::clinician::Clinician;
use praxis_core::models::practice::PracticeSettings;
use praxis_core::models::report::AssessmentReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExportContext {
    // Letterhead
    pub practice_name: String,
    pub practice_address_line1: Option<String>,
    pub practice_address_line2: Option<String>,
    pub practice_phone: Option<String>,
    pub practice_email: Option<String>,

    // Client demographics
    pub client_name: String,
    pub client_date_of_birth: Option<String>,

    /// The resolved active content — the one body every format renders.
    pub content: String,

    // Signature block. All of these are `None`/false unless the report is
    // finalized; an unfinalized export carries no signature and no
    // finalization timestamp.
    pub finalized: bool,
    pub finalized_at: Option<String>,
    pub clinician_name: Option<String>,
    pub clinician_credentials: Option<String>,
    pub signature_image_url: Option<String>,
}

/// Resolve a report and its surrounding records into an export context.
///
/// `signature_image_url` is a presigned URL for the clinician's signature
/// image, when one exists; it is dropped here unless the report is
/// finalized.
pub fn build_export_context(
    report: &AssessmentReport,
    client: &Client,
    clinician: &Clinician,
    practice: &PracticeSettings,
    signature_image_url: Option<String>,
) -> ReportExportContext {
    let finalized = report.is_finalized;

    ReportExportContext {
        practice_name: practice.practice_name.clone(),
        practice_address_line1: practice.address_line1.clone(),
        practice_address_line2: practice.address_line2.clone(),
        practice_phone: practice.phone.clone(),
        practice_email: practice.email.clone(),
        client_name: client.full_name(),
        client_date_of_birth: client.date_of_birth.map(|d| d.to_string()),
        content: report.active_content().to_string(),
        finalized,
        finalized_at: if finalized {
            report.finalized_at.map(|t| t.to_string())
        } else {
            None
        },
        clinician_name: finalized.then(|| clinician.full_name.clone()),
        clinician_credentials: if finalized {
            clinician.credentials.clone()
        } else {
            None
        },
        signature_image_url: if finalized { signature_image_url } else { None },
    }
}
