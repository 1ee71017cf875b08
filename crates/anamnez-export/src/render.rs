use std::collections::HashMap;

use tera::{Context, Tera, Value};

use anamnez_core::models::transcript::Transcript;

use crate::blocks::literal_line;
use crate::error::ExportError;

/// Default transcript layout: cover page, then one heading per question
/// followed by its answer, then the scale results when there are any.
///
/// Answers go through the `literal` filter so nothing a patient typed is
/// read as layout markup.
pub const TRANSCRIPT_TEMPLATE: &str = r#"# {{ title }}

Tarih: {{ generated_at }}

---
{% for entry in entries %}
## {{ entry.question }}
{{ entry.answer | literal }}

{% endfor %}
{%- if scores %}
---
# Ölçek Sonuçları
{% for score in scores %}
- **{{ score.name }}**: toplam {{ score.total }}, ortalama {{ score.mean | round(precision=2) }} ({{ score.band }})
{%- endfor %}
{% endif %}
"#;

const TEMPLATE_NAME: &str = "transcript";

/// Render a Tera template with a Transcript.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// transcript fields become the template context variables. Line breaks
/// inside questions and answers are flattened so free text cannot inject
/// headings or page breaks into the layout; templates should still pass
/// free text through the `literal` filter to keep it out of the markup.
pub fn render_transcript(
    template_content: &str,
    transcript: &Transcript,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.register_filter("literal", literal_filter);
    tera.add_raw_template(TEMPLATE_NAME, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut flattened = transcript.clone();
    for entry in &mut flattened.entries {
        entry.question = flatten(&entry.question);
        entry.answer = flatten(&entry.answer);
    }

    let value = serde_json::to_value(&flattened)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    tracing::debug!(
        entries = transcript.entries.len(),
        scores = transcript.scores.len(),
        "transcript rendered"
    );
    Ok(rendered)
}

fn literal_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(Value::String(literal_line(&text)))
}

fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
