//! PDF generation from the rendered markdown layout.
//!
//! Built-in Helvetica with a simple top-down line flow: greedy word
//! wrapping, heading sizes, bullets, page breaks on `---`/`***` and when a
//! page runs out of room. The export contract is about content selection,
//! not typography.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::error::ExportError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const TOP_Y_MM: f32 = 280.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
const WRAP_COLUMNS: usize = 90;

/// Generate a PDF from the rendered markdown layout. Returns PDF bytes.
pub fn generate_pdf(rendered: &str, title: &str) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = Mm(TOP_Y_MM);

    for raw_line in rendered.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            y -= Mm(3.0);
            continue;
        }

        if line == "---" || line == "***" {
            layer = add_page(&doc);
            y = Mm(TOP_Y_MM);
            continue;
        }

        let (text, size, font, indent) = classify_line(line, &body_font, &bold_font);
        let is_bullet = line.starts_with("- ");
        let text = text.replace("**", "");

        for (index, wrapped) in wrap_text(&text, WRAP_COLUMNS).into_iter().enumerate() {
            if y.0 < BOTTOM_MARGIN_MM {
                layer = add_page(&doc);
                y = Mm(TOP_Y_MM);
            }
            let display = if is_bullet && index == 0 {
                format!("\u{2022} {wrapped}")
            } else {
                wrapped
            };
            layer.use_text(&display, size, Mm(indent), y, font);
            y -= Mm(size * 0.45);
        }
        y -= Mm(2.0);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn classify_line<'a>(
    line: &'a str,
    body_font: &'a IndirectFontRef,
    bold_font: &'a IndirectFontRef,
) -> (&'a str, f32, &'a IndirectFontRef, f32) {
    if let Some(text) = line.strip_prefix("### ") {
        (text, 11.0, bold_font, 20.0)
    } else if let Some(text) = line.strip_prefix("## ") {
        (text, 12.0, bold_font, 20.0)
    } else if let Some(text) = line.strip_prefix("# ") {
        (text, 14.0, bold_font, 20.0)
    } else if let Some(text) = line.strip_prefix("- ") {
        (text, 10.0, body_font, 25.0)
    } else {
        (line, 10.0, body_font, 20.0)
    }
}

fn add_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    doc.get_page(page).get_layer(layer)
}

/// Greedy word wrap at a character limit.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
