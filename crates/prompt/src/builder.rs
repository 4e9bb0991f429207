//! Prompt builder.
//!
//! Renders the fixed MamaBot prompt template with the user's question and
//! short excerpts from the first few gathered sources. Deterministic for
//! identical inputs.

use std::collections::HashMap;

use handlebars::Handlebars;
use mamabot_core::text::clip_chars;
use mamabot_core::{AppError, AppResult, Limits};
use mamabot_sources::SourceRecord;

/// The fixed prompt template. `sources` and `question` are filled in at
/// build time; everything else is literal.
const PROMPT_TEMPLATE: &str = "You are MamaBot, an assistant for new parents. \
Use the provided sources to answer the question. \
Be concise (3-6 sentences), mention if the evidence is uncertain, and list 2-3 short citations.\n\
\nSOURCES:\n{{sources}}\n\nQUESTION: \n{{question}}\n\nAnswer:";

/// Build the completion prompt from a question and gathered sources.
///
/// Embeds the first `limits.max_prompt_sources` records in gathered order,
/// clipping each record's text to `limits.excerpt_cap` characters. Records
/// past the cap are omitted entirely. An empty record list yields a
/// well-formed prompt with an empty `SOURCES:` section.
pub fn build_prompt(
    question: &str,
    records: &[SourceRecord],
    limits: &Limits,
) -> AppResult<String> {
    let excerpts: Vec<String> = records
        .iter()
        .take(limits.max_prompt_sources)
        .map(|record| {
            let text = record.text();
            format!(
                "Source: {} ({})\n{}\n",
                record.name,
                record.url,
                clip_chars(&text, limits.excerpt_cap)
            )
        })
        .collect();

    let mut variables = HashMap::new();
    variables.insert("sources".to_string(), excerpts.join("\n---\n"));
    variables.insert("question".to_string(), question.to_string());

    let prompt = render_template(PROMPT_TEMPLATE, &variables)?;

    tracing::debug!(
        "Built prompt: {} chars, {} of {} sources embedded",
        prompt.len(),
        excerpts.len(),
        records.len()
    );

    Ok(prompt)
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<String, String>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // The prompt is plain text, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("prompt", &variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

    Ok(rendered)
}
