//! Ask command handler.
//!
//! Runs the whole pipeline for one question: gather sources, build the
//! prompt, obtain an answer, print it with citations. Also backs the
//! no-subcommand walkthrough (snapshot + preview enabled, example
//! question).

use clap::Args;
use mamabot_core::{config::AppConfig, text::clip_chars, AppError, AppResult};
use mamabot_llm::{create_client, Answerer, LlmError};
use mamabot_prompt::{build_prompt, format_citations};
use mamabot_sources::{gather, PageFetcher, SourceRecord};

use crate::render::{detect_renderer, BANNER_TEXT, BANNER_TITLE};

/// Question used when none is given on the command line.
pub const EXAMPLE_QUESTION: &str = "My 3-week-old baby is spitting up a lot \
— when is this normal and when should I worry?";

/// Fixed message shown when no API credential is set.
const MISSING_KEY_MESSAGE: &str =
    "OPENAI_API_KEY not set in environment. Set it before using the LLM wrapper.";

/// Ask a question against the configured sources
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask (defaults to a built-in example question)
    pub question: Option<String>,

    /// Maximum tokens in the response (overrides configured limit)
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Print a per-source snapshot (title and text length) before asking
    #[arg(long)]
    pub snapshot: bool,

    /// Print a truncated preview of the constructed prompt
    #[arg(long)]
    pub preview: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// The configuration for the no-subcommand walkthrough.
    pub fn walkthrough() -> Self {
        Self {
            question: None,
            max_tokens: None,
            snapshot: true,
            preview: true,
            json: false,
        }
    }

    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let question = self
            .question
            .clone()
            .unwrap_or_else(|| EXAMPLE_QUESTION.to_string());

        // 1. Gather all configured sources, sequentially.
        let fetcher = PageFetcher::new(
            config.limits.fetch_timeout_secs,
            config.limits.page_text_cap,
        )
        .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        if self.snapshot && !self.json {
            println!("Gathering a quick snapshot of configured reliable sources...\n");
        }

        let records = gather(&fetcher, &config.sources).await;

        if self.snapshot && !self.json {
            print_snapshot(&records);
            println!();
        }

        // 2. Banner always precedes the answer.
        if !self.json {
            let renderer = detect_renderer(config.no_color);
            println!("{}", renderer.banner(BANNER_TITLE, BANNER_TEXT));
            println!("Question:\n{}", question);
        }

        // 3. Build the prompt.
        let prompt = build_prompt(&question, &records, &config.limits)?;

        if self.preview && !self.json {
            println!(
                "\nConstructed prompt preview (truncated):\n{}\n...\n",
                clip_chars(&prompt, config.limits.preview_cap)
            );
        }

        // 4. Obtain an answer. The credential is resolved here, at call
        //    time, through the single config boundary.
        let api_key = config.resolve_api_key();
        let client = create_client(&config.provider, config.endpoint.as_deref(), api_key.as_deref())
            .map_err(AppError::Llm)?;

        let max_tokens = self.max_tokens.unwrap_or(config.limits.max_tokens);
        let answerer = Answerer::new(client, &config.model, max_tokens);

        let answer = match answerer.answer(&prompt).await {
            Ok(text) => text,
            Err(LlmError::MissingCredential) => {
                tracing::warn!("No API credential set; skipping completion call");
                MISSING_KEY_MESSAGE.to_string()
            }
            Err(err) => {
                tracing::error!("Completion failed: {}", err);
                format!("LLM_ERROR: {}", err)
            }
        };

        // 5. Present answer and citations.
        let citations = format_citations(&records, config.limits.max_prompt_sources);

        if self.json {
            let output = serde_json::json!({
                "question": question,
                "answer": answer,
                "warning": BANNER_TEXT,
                "model": config.model,
                "provider": config.provider,
                "citations": records
                    .iter()
                    .take(config.limits.max_prompt_sources)
                    .map(|r| serde_json::json!({ "name": r.name, "url": r.url }))
                    .collect::<Vec<_>>(),
            });

            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("\nMamaBot answer:\n{}", answer);
            println!("\nCitations:\n{}", citations);
        }

        Ok(())
    }
}

/// Print one line per gathered source: name, title, text length.
pub fn print_snapshot(records: &[SourceRecord]) {
    for record in records {
        println!(
            "- {}: {} (len={})",
            record.name,
            record.title,
            record.text_len()
        );
    }
}
