//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the Praxis S3 bucket.

use uuid::Uuid;

pub fn client(id: Uuid) -> String {
    format!("clients/{id}.json")
}

pub const CLIENTS_PREFIX: &str = "clients/";

pub fn clinician(id: Uuid) -> String {
    format!("clinicians/{id}.json")
}

pub const CLINICIANS_PREFIX: &str = "clinicians/";

pub fn template(id: Uuid) -> String {
    format!("templates/{id}.json")
}

pub const TEMPLATES_PREFIX: &str = "templates/";

pub fn assignment(id: Uuid) -> String {
    format!("assignments/{id}/assignment.json")
}

pub const ASSIGNMENTS_PREFIX: &str = "assignments/";

pub fn assignment_responses(id: Uuid) -> String {
    format!("assignments/{id}/responses.json")
}

pub fn assignment_report(id: Uuid) -> String {
    format!("assignments/{id}/report.json")
}

pub fn report_html(id: Uuid) -> String {
    format!("assignments/{id}/report.html")
}

pub fn report_pdf(id: Uuid) -> String {
    format!("assignments/{id}/report.pdf")
}

pub fn report_docx(id: Uuid) -> String {
    format!("assignments/{id}/report.docx")
}

pub fn signature(clinician_id: Uuid, filename: &str) -> String {
    format!("signatures/{clinician_id}/{filename}")
}

pub const PRACTICE_SETTINGS: &str = "_settings/practice.json";

pub const SYSTEM_PROMPT: &str = "system-prompt.md";
