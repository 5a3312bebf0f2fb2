//! Prompt assembly for report drafting.
//!
//! Builds the user message from the aggregated response summary produced by
//! `praxis-responses`. The summary arrives pre-rendered so this crate stays
//! independent of the aggregation types.

/// System prompt used when the bucket carries no custom `system-prompt.md`.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a clinical writing assistant for a therapy practice. You are given a \
client's responses to an intake or progress assessment, grouped by section. \
Write a professional clinical report draft in flowing prose: summarize the \
presenting concerns, notable responses, and patterns across sections. Use \
neutral, person-first language. Do not invent facts that are not supported \
by the responses. Output plain prose with markdown section headings — no \
preamble, no closing remarks.";

/// Build the drafting input block from assessment metadata and the rendered
/// response summary.
///
/// Returns an XML-style block followed by the drafting instruction, in the
/// shape the system prompt describes.
pub fn build_report_input(
    client_name: &str,
    template_name: &str,
    responses_summary: &str,
) -> String {
    let mut block = String::from("<assessment_responses>\n");
    block.push_str(&format!("Client: {client_name}\n"));
    block.push_str(&format!("Assessment: {template_name}\n\n"));
    block.push_str(responses_summary);
    if !block.ends_with('\n') {
        block.push('\n');
    }
    block.push_str("</assessment_responses>\n\n");
    block.push_str("Write the clinical report draft from these responses.");
    block
}
