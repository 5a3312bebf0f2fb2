use tera::{Context, Tera};

use crate::context::ReportExportContext;
use crate::error::ExportError;

/// Built-in markdown layout consumed by the DOCX and PDF generators.
const MARKDOWN_TEMPLATE: &str = "\
# {{ practice_name }}
{% if practice_address_line1 %}{{ practice_address_line1 }}
{% endif %}{% if practice_address_line2 %}{{ practice_address_line2 }}
{% endif %}{% if practice_phone %}{{ practice_phone }}
{% endif %}{% if practice_email %}{{ practice_email }}
{% endif %}
## Clinical Assessment Report

**Client:** {{ client_name }}
{% if client_date_of_birth %}**Date of birth:** {{ client_date_of_birth }}
{% endif %}
{{ content }}

{% if finalized %}
**Electronically signed by:** {{ clinician_name }}{% if clinician_credentials %}, {{ clinician_credentials }}{% endif %}

**Finalized:** {{ finalized_at }}
{% endif %}";

/// Built-in print/preview HTML layout.
const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Clinical Assessment Report — {{ client_name }}</title>
<style>
body { font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; color: #1a1a1a; }
header { border-bottom: 1px solid #999; margin-bottom: 1.5rem; padding-bottom: 0.75rem; }
header p { margin: 0.1rem 0; font-size: 0.85rem; color: #444; }
.content { white-space: pre-wrap; line-height: 1.5; }
.signature { margin-top: 3rem; border-top: 1px solid #999; padding-top: 1rem; font-size: 0.9rem; }
.signature img { max-height: 4rem; display: block; margin-bottom: 0.5rem; }
@media print { body { margin: 0; } }
</style>
</head>
<body>
<header>
<h1>{{ practice_name }}</h1>
{% if practice_address_line1 %}<p>{{ practice_address_line1 }}</p>{% endif %}
{% if practice_address_line2 %}<p>{{ practice_address_line2 }}</p>{% endif %}
{% if practice_phone %}<p>{{ practice_phone }}</p>{% endif %}
{% if practice_email %}<p>{{ practice_email }}</p>{% endif %}
</header>
<h2>Clinical Assessment Report</h2>
<p><strong>Client:</strong> {{ client_name }}</p>
{% if client_date_of_birth %}<p><strong>Date of birth:</strong> {{ client_date_of_birth }}</p>{% endif %}
<div class="content">{{ content }}</div>
{% if finalized %}
<div class="signature">
{% if signature_image_url %}<img src="{{ signature_image_url }}" alt="Signature">{% endif %}
<p><strong>Electronically signed by:</strong> {{ clinician_name }}{% if clinician_credentials %}, {{ clinician_credentials }}{% endif %}</p>
<p><strong>Finalized:</strong> {{ finalized_at }}</p>
</div>
{% endif %}
</body>
</html>
"#;

fn render_template(
    template_name: &str,
    template_content: &str,
    ctx: &ReportExportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the context to Tera variables via serde_json
    let value = serde_json::to_value(ctx)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the markdown layout fed to the DOCX and PDF generators.
pub fn render_markdown(ctx: &ReportExportContext) -> Result<String, ExportError> {
    render_template("report.md", MARKDOWN_TEMPLATE, ctx)
}

/// Render the self-contained print/preview HTML document.
pub fn render_html(ctx: &ReportExportContext) -> Result<String, ExportError> {
    render_template("report.html", HTML_TEMPLATE, ctx)
}
