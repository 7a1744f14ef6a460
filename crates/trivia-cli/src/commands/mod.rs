pub mod categories;
pub mod init;
pub mod play;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use trivia_core::traits::QuestionSource;
use trivia_sources::{create_source, load_bank, MemorySource, TriviaConfig};

/// Pick the question source for a command.
///
/// An explicit bank wins; otherwise the named source (or the configured
/// default) is looked up in the config.
pub(crate) fn open_source(
    config: &TriviaConfig,
    source: Option<&str>,
    bank: Option<&Path>,
) -> Result<Arc<dyn QuestionSource>> {
    if let Some(path) = bank {
        let bank = load_bank(path)
            .with_context(|| format!("failed to load bank: {}", path.display()))?;
        tracing::debug!(questions = bank.questions.len(), "playing from local bank");
        return Ok(Arc::new(MemorySource::from_bank(bank)));
    }

    let name = source.unwrap_or(&config.default_source);
    match config.sources.get(name) {
        Some(source_config) => create_source(name, source_config),
        None => {
            let mut available: Vec<&str> = config.sources.keys().map(String::as_str).collect();
            available.sort_unstable();
            anyhow::bail!(
                "source '{name}' not found in config. Available: {}",
                available.join(", ")
            )
        }
    }
}
