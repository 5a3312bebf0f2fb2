use praxis_export::context::ReportExportContext;
use praxis_export::docx::generate_docx;
use praxis_export::pdf::generate_pdf;
use praxis_export::render::{render_html, render_markdown};
use praxis_export::styles::DocumentStyles;

fn ctx(finalized: bool) -> ReportExportContext {
    ReportExportContext {
        practice_name: "Riverside Therapy".to_string(),
        practice_address_line1: Some("12 Main St".to_string()),
        practice_address_line2: None,
        practice_phone: None,
        practice_email: Some("hello@riverside.test".to_string()),
        client_name: "Jordan Rivers".to_string(),
        client_date_of_birth: Some("1990-06-15".to_string()),
        content: "## Summary\n\nThe client reports **reduced** anxiety.\n\n- Sleep improved"
            .to_string(),
        finalized,
        finalized_at: finalized.then(|| "2026-02-02T00:00:00Z".to_string()),
        clinician_name: finalized.then(|| "Dr. Casey Moore".to_string()),
        clinician_credentials: finalized.then(|| "PhD, LP".to_string()),
        signature_image_url: finalized.then(|| "https://example.test/sig.png".to_string()),
    }
}

#[test]
fn html_includes_signature_block_only_when_finalized() {
    let finalized = render_html(&ctx(true)).unwrap();
    assert!(finalized.contains("Electronically signed by"));
    assert!(finalized.contains("Dr. Casey Moore"));
    assert!(finalized.contains("https://example.test/sig.png"));

    let draft = render_html(&ctx(false)).unwrap();
    assert!(!draft.contains("Electronically signed by"));
    assert!(!draft.contains("sig.png"));
}

#[test]
fn html_carries_letterhead_and_demographics() {
    let html = render_html(&ctx(false)).unwrap();
    assert!(html.contains("Riverside Therapy"));
    assert!(html.contains("12 Main St"));
    assert!(html.contains("Jordan Rivers"));
    assert!(html.contains("1990-06-15"));
}

#[test]
fn markdown_includes_signature_block_only_when_finalized() {
    let finalized = render_markdown(&ctx(true)).unwrap();
    assert!(finalized.contains("Electronically signed by"));
    assert!(finalized.contains("Finalized:"));

    let draft = render_markdown(&ctx(false)).unwrap();
    assert!(!draft.contains("Electronically signed by"));
    assert!(!draft.contains("Finalized:"));
}

#[test]
fn markdown_carries_content_verbatim() {
    let markdown = render_markdown(&ctx(false)).unwrap();
    assert!(markdown.contains("The client reports **reduced** anxiety."));
    assert!(markdown.contains("- Sleep improved"));
}

#[test]
fn docx_generation_produces_a_document() {
    let rendered = render_markdown(&ctx(true)).unwrap();
    let bytes = generate_docx(&rendered, &DocumentStyles::default()).unwrap();

    // DOCX is a ZIP container; check the magic bytes.
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn pdf_generation_produces_a_document() {
    let rendered = render_markdown(&ctx(true)).unwrap();
    let bytes = generate_pdf(&rendered, "Clinical Assessment Report").unwrap();

    assert!(bytes.len() > 5);
    assert_eq!(&bytes[..5], b"%PDF-");
}
