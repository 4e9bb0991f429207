//! Sources command handler.
//!
//! Gathers the configured sources and prints the snapshot (per-source
//! title and text length) without asking a question.

use clap::Args;
use mamabot_core::{config::AppConfig, AppError, AppResult};
use mamabot_sources::{gather, PageFetcher};

use crate::commands::ask::print_snapshot;

/// Show a snapshot of the configured sources
#[derive(Args, Debug)]
pub struct SourcesCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SourcesCommand {
    /// Execute the sources command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing sources command");

        let fetcher = PageFetcher::new(
            config.limits.fetch_timeout_secs,
            config.limits.page_text_cap,
        )
        .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let records = gather(&fetcher, &config.sources).await;

        if self.json {
            let output: Vec<_> = records
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "name": r.name,
                        "url": r.url,
                        "title": r.title,
                        "textLength": r.text_len(),
                        "fetchFailed": r.is_fetch_failed(),
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_snapshot(&records);
        }

        Ok(())
    }
}
