//! Configuration management for the MamaBot CLI.
//!
//! This module handles loading and merging configuration from multiple
//! sources:
//! - Built-in defaults (the trusted source list, limits, LLM settings)
//! - An optional YAML config file (mamabot.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! The resulting `AppConfig` is built once at startup and passed by
//! reference into each component; no component reads process-wide state on
//! its own. The single exception is the API credential, which is resolved
//! through `AppConfig::resolve_api_key` at command execution time so that a
//! key exported after process start is still picked up.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Environment variable holding the completion-service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Identifying User-Agent sent with every outbound page fetch.
pub const USER_AGENT: &str =
    "MamaBot/1.0 (+https://example.org/mamabot - contact: you@example.org)";

/// One configured source: a human-readable name and its base URL.
///
/// Sources are kept in a `Vec` rather than a map so that the configured
/// order survives into gathering, prompt embedding, and citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub name: String,
    pub url: String,
}

impl SourceEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Size and timing limits for the pipeline.
///
/// The caps carry no deeper rationale than "keep payloads small"; they are
/// configuration rather than constants so deployments can tune them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum characters of visible text kept per fetched page
    pub page_text_cap: usize,

    /// Maximum characters of each source excerpt embedded in the prompt
    pub excerpt_cap: usize,

    /// Maximum number of sources embedded in the prompt (and cited)
    pub max_prompt_sources: usize,

    /// Maximum characters of the prompt preview printed by the CLI
    pub preview_cap: usize,

    /// Per-request fetch timeout in seconds
    pub fetch_timeout_secs: u64,

    /// Token budget for the completion request
    pub max_tokens: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            page_text_cap: 3000,
            excerpt_cap: 800,
            max_prompt_sources: 3,
            preview_cap: 1000,
            fetch_timeout_secs: 10,
            max_tokens: 300,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// LLM provider (only "openai" is implemented)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Optional custom completion endpoint
    pub endpoint: Option<String>,

    /// Ordered list of trusted sources
    pub sources: Vec<SourceEntry>,

    /// Pipeline limits
    pub limits: Limits,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Config file structure (all sections optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    llm: Option<LlmSection>,
    sources: Option<Vec<SourceEntry>>,
    limits: Option<Limits>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LlmSection {
    provider: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            endpoint: None,
            sources: default_sources(),
            limits: Limits::default(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

/// The built-in trusted source list.
fn default_sources() -> Vec<SourceEntry> {
    vec![
        SourceEntry::new("CDC", "https://www.cdc.gov/"),
        SourceEntry::new("AAP (HealthyChildren.org)", "https://www.healthychildren.org/"),
        SourceEntry::new("WHO", "https://www.who.int/"),
    ]
}

impl AppConfig {
    /// Load configuration from defaults, config file, and environment.
    ///
    /// `cli_config_file` is the `--config` flag and takes precedence over
    /// the `MAMABOT_CONFIG` environment variable; both take precedence over
    /// the implicit `mamabot.yaml` in the working directory.
    ///
    /// Environment variables:
    /// - `MAMABOT_CONFIG`: Path to config file
    /// - `MAMABOT_MODEL`: Model identifier
    /// - `MAMABOT_PROVIDER`: LLM provider
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load(cli_config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        config.config_file = cli_config_file;
        if config.config_file.is_none() {
            if let Ok(config_file) = std::env::var("MAMABOT_CONFIG") {
                config.config_file = Some(PathBuf::from(config_file));
            }
        }

        // Load from YAML config file if one was named and exists
        if let Some(path) = config.config_file.clone() {
            if path.exists() {
                config = config.merge_yaml(&path)?;
            } else {
                return Err(AppError::Config(format!(
                    "Config file does not exist: {:?}",
                    path
                )));
            }
        } else {
            let default_path = PathBuf::from("mamabot.yaml");
            if default_path.exists() {
                config = config.merge_yaml(&default_path)?;
            }
        }

        // Environment variables override YAML config
        if let Ok(provider) = std::env::var("MAMABOT_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("MAMABOT_MODEL") {
            config.model = model;
        }

        config.log_level = std::env::var("RUST_LOG").ok();

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file over this config, returning the
    /// merged result.
    fn merge_yaml(&self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(llm) = config_file.llm {
            if let Some(provider) = llm.provider {
                result.provider = provider;
            }
            if let Some(model) = llm.model {
                result.model = model;
            }
            if llm.endpoint.is_some() {
                result.endpoint = llm.endpoint;
            }
        }

        if let Some(sources) = config_file.sources {
            if sources.is_empty() {
                return Err(AppError::Config(format!(
                    "Config file {:?} declares an empty source list",
                    path
                )));
            }
            result.sources = sources;
        }

        if let Some(limits) = config_file.limits {
            result.limits = limits;
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over both the config file and environment
    /// variables.
    pub fn with_overrides(
        mut self,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Resolve the completion-service credential from the environment.
    ///
    /// This is the single place the process reads the credential. Absence is
    /// recoverable: callers get `None` and must degrade without a network
    /// attempt.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider, "openai");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.sources.len(), 3);
        assert_eq!(config.sources[0].name, "CDC");
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.page_text_cap, 3000);
        assert_eq!(limits.excerpt_cap, 800);
        assert_eq!(limits.max_prompt_sources, 3);
        assert_eq!(limits.fetch_timeout_secs, 10);
        assert_eq!(limits.max_tokens, 300);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden =
            config.with_overrides(Some("gpt-4o".to_string()), None, true, false);

        assert_eq!(overridden.model, "gpt-4o");
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_merge_yaml_sources_and_limits() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
llm:
  model: gpt-4o
sources:
  - name: NHS
    url: https://www.nhs.uk/
limits:
  excerpt_cap: 500
"#
        )
        .unwrap();

        let config = AppConfig::default();
        let merged = config.merge_yaml(&file.path().to_path_buf()).unwrap();

        assert_eq!(merged.model, "gpt-4o");
        assert_eq!(merged.sources.len(), 1);
        assert_eq!(merged.sources[0].name, "NHS");
        assert_eq!(merged.limits.excerpt_cap, 500);
        // Unset limit fields keep their defaults
        assert_eq!(merged.limits.page_text_cap, 3000);
    }

    #[test]
    fn test_merge_yaml_rejects_empty_sources() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sources: []").unwrap();

        let config = AppConfig::default();
        assert!(config.merge_yaml(&file.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_source_order_preserved() {
        let config = AppConfig::default();
        let names: Vec<_> = config.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["CDC", "AAP (HealthyChildren.org)", "WHO"]);
    }
}
