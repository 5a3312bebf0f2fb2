//! praxis-export
//!
//! Report export: print HTML, PDF, and DOCX. Every format renders from one
//! [`context::ReportExportContext`], so content selection (the active-content
//! precedence) and the finalized-only signature block cannot diverge between
//! renderers.

pub mod context;
pub mod docx;
pub mod error;
pub mod pdf;
pub mod render;
pub mod styles;
