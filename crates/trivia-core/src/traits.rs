//! Core trait definitions for question sources.
//!
//! The quiz session never talks to a backend directly; it asks a
//! `QuestionSource`, implemented by the `trivia-sources` crate.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::{Category, Question, QuestionId, QuizCategory};

// ---------------------------------------------------------------------------
// Question source trait
// ---------------------------------------------------------------------------

/// Trait for backends that serve quiz questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable source name (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch the next question for `selector` that is not in `excluding`.
    ///
    /// Returns `Ok(None)` when no eligible question remains. Implementations
    /// must never return a question whose id is in `excluding`; which of the
    /// eligible questions is returned is up to the source.
    async fn fetch_next(
        &self,
        selector: &QuizCategory,
        excluding: &[QuestionId],
    ) -> Result<Option<Question>, SourceError>;

    /// List the categories a quiz can be played in.
    async fn categories(&self) -> Result<Vec<Category>, SourceError>;
}
