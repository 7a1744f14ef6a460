//! Source configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use trivia_core::traits::QuestionSource;

use crate::bank::load_bank;
use crate::http::{HttpSource, DEFAULT_TIMEOUT_SECS};
use crate::memory::MemorySource;

/// Configuration for a single question source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    /// The trivia REST backend.
    Http {
        #[serde(default = "default_base_url")]
        base_url: String,
        #[serde(default = "default_timeout")]
        timeout_secs: u64,
    },
    /// A local TOML bank file or directory.
    Memory { bank: PathBuf },
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Top-level trivia configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Source configurations keyed by name.
    #[serde(default = "default_sources")]
    pub sources: HashMap<String, SourceConfig>,
    /// Source to play against when none is given.
    #[serde(default = "default_source")]
    pub default_source: String,
    /// Retries when a question fetch fails.
    #[serde(default = "default_retries")]
    pub max_retries: u32,
    /// Delay between retries in milliseconds.
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
    /// Where to write session transcripts, if anywhere.
    #[serde(default)]
    pub transcript_dir: Option<PathBuf>,
}

fn default_sources() -> HashMap<String, SourceConfig> {
    HashMap::from([(
        default_source(),
        SourceConfig::Http {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        },
    )])
}
fn default_source() -> String {
    "api".to_string()
}
fn default_retries() -> u32 {
    3
}
fn default_retry_delay() -> u64 {
    500
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            default_source: default_source(),
            max_retries: default_retries(),
            retry_delay_ms: default_retry_delay(),
            transcript_dir: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied through as is and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Resolve env vars in a source config.
fn resolve_source_config(config: &SourceConfig) -> SourceConfig {
    match config {
        SourceConfig::Http {
            base_url,
            timeout_secs,
        } => SourceConfig::Http {
            base_url: resolve_env_vars(base_url),
            timeout_secs: *timeout_secs,
        },
        SourceConfig::Memory { bank } => SourceConfig::Memory {
            bank: PathBuf::from(resolve_env_vars(&bank.to_string_lossy())),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `trivia.toml` in the current directory
/// 2. `~/.config/trivia/config.toml`
///
/// Environment variable override: `TRIVIA_API_URL`.
pub fn load_config() -> Result<TriviaConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<TriviaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("trivia.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TriviaConfig::default(),
    };

    // Apply env var overrides
    if let Ok(url) = std::env::var("TRIVIA_API_URL") {
        apply_api_url(&mut config, url);
    }

    Ok(config)
}

/// Parse a TOML config string and resolve `${VAR}` references.
pub fn parse_config_str(content: &str) -> Result<TriviaConfig> {
    let mut config: TriviaConfig = toml::from_str(content)?;
    config.sources = config
        .sources
        .iter()
        .map(|(k, v)| (k.clone(), resolve_source_config(v)))
        .collect();
    Ok(config)
}

fn apply_api_url(config: &mut TriviaConfig, url: String) {
    let entry = config
        .sources
        .entry("api".into())
        .or_insert(SourceConfig::Http {
            base_url: String::new(),
            timeout_secs: default_timeout(),
        });
    match entry {
        SourceConfig::Http { base_url, .. } => *base_url = url,
        SourceConfig::Memory { .. } => {
            tracing::warn!("TRIVIA_API_URL ignored: source 'api' is not an http source");
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("trivia"))
}

/// Create a source instance from its configuration.
pub fn create_source(name: &str, config: &SourceConfig) -> Result<Arc<dyn QuestionSource>> {
    match config {
        SourceConfig::Http {
            base_url,
            timeout_secs,
        } => {
            let source = HttpSource::new(base_url, *timeout_secs)
                .with_context(|| format!("failed to create source '{name}'"))?;
            Ok(Arc::new(source))
        }
        SourceConfig::Memory { bank } => {
            let bank = load_bank(bank)
                .with_context(|| format!("failed to load bank for source '{name}'"))?;
            tracing::debug!(
                source = name,
                questions = bank.questions.len(),
                "loaded question bank"
            );
            Ok(Arc::new(MemorySource::from_bank(bank)))
        }
    }
}
