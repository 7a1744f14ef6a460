//! In-memory question source.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use trivia_core::error::SourceError;
use trivia_core::model::{Category, Question, QuestionId, QuizCategory};
use trivia_core::traits::QuestionSource;

use crate::bank::QuestionBank;

/// A question source backed by a list held in memory.
///
/// Serves the first eligible question in list order, which keeps play-throughs
/// reproducible. Used for local banks and as a test double.
pub struct MemorySource {
    categories: Vec<Category>,
    questions: Vec<Question>,
    /// Number of `fetch_next` calls made.
    call_count: AtomicU32,
    /// Number of upcoming fetches that should fail.
    failures: AtomicU32,
    /// Exclusion list of the last fetch.
    last_excluded: Mutex<Option<Vec<QuestionId>>>,
}

impl MemorySource {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        Self {
            categories,
            questions,
            call_count: AtomicU32::new(0),
            failures: AtomicU32::new(0),
            last_excluded: Mutex::new(None),
        }
    }

    pub fn from_bank(bank: QuestionBank) -> Self {
        Self::new(bank.categories, bank.questions)
    }

    /// Make the next `times` fetches fail with `SourceError::Unavailable`.
    pub fn fail_next(&self, times: u32) {
        self.failures.store(times, Ordering::Relaxed);
    }

    /// Get the number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the exclusion list passed to the last fetch.
    pub fn last_excluded(&self) -> Option<Vec<QuestionId>> {
        self.last_excluded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[async_trait]
impl QuestionSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_next(
        &self,
        selector: &QuizCategory,
        excluding: &[QuestionId],
    ) -> Result<Option<Question>, SourceError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self
            .last_excluded
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(excluding.to_vec());

        let failing = self
            .failures
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(SourceError::Unavailable("memory source set to fail".into()));
        }

        Ok(self
            .questions
            .iter()
            .find(|q| selector.matches(q) && !excluding.contains(&q.id))
            .cloned())
    }

    async fn categories(&self) -> Result<Vec<Category>, SourceError> {
        Ok(self.categories.clone())
    }
}
