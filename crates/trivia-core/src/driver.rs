//! Event-driven quiz driver.
//!
//! `QuizDriver` owns a session and a question source. Transitions that need
//! a question only dispatch the fetch; the presentation layer then awaits
//! `next_update` to apply results as they arrive. Results for a session that
//! was restarted in the meantime come back as `FetchOutcome::Discarded`.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::error::{SessionError, SourceError};
use crate::model::{Category, Question, QuizCategory};
use crate::session::{
    Advance, FetchOutcome, FetchTicket, GuessOutcome, QuizSession, SessionSnapshot,
};
use crate::traits::QuestionSource;

type PendingFetch = BoxFuture<'static, (FetchTicket, Result<Option<Question>, SourceError>)>;

/// Drives a [`QuizSession`] against a [`QuestionSource`].
pub struct QuizDriver {
    session: QuizSession,
    source: Arc<dyn QuestionSource>,
    pending: FuturesUnordered<PendingFetch>,
}

impl QuizDriver {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            session: QuizSession::new(),
            source,
            pending: FuturesUnordered::new(),
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Name of the underlying question source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Whether any fetch, current or stale, has not resolved yet.
    pub fn is_fetching(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Categories offered by the source.
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged.
    pub async fn categories(&self) -> Result<Vec<Category>, SourceError> {
        self.source.categories().await
    }

    /// Start a session for `selector`; the first question arrives through
    /// `next_update`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session cannot start in its current phase.
    pub fn select_category(&mut self, selector: QuizCategory) -> Result<(), SessionError> {
        let ticket = self.session.begin_select_category(selector)?;
        self.dispatch(ticket);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless a question is awaiting
    /// a guess.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, SessionError> {
        self.session.submit_guess(raw)
    }

    /// Move past the revealed question. Returns `true` if a fetch was
    /// dispatched, `false` if the session finished on the spot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session cannot advance in its current phase.
    pub fn advance(&mut self) -> Result<bool, SessionError> {
        match self.session.begin_advance()? {
            Advance::Finished => Ok(false),
            Advance::Fetch(ticket) => {
                self.dispatch(ticket);
                Ok(true)
            }
        }
    }

    /// Return the session to `Idle`. Fetches already dispatched keep running
    /// but their results will be discarded.
    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Wait for the next dispatched fetch to resolve and apply it.
    ///
    /// Returns `None` when nothing is pending.
    pub async fn next_update(&mut self) -> Option<Result<FetchOutcome, SessionError>> {
        let (ticket, result) = self.pending.next().await?;
        Some(self.session.complete_fetch(ticket, result))
    }

    /// Resolve pending fetches until the current session's fetch is applied
    /// or nothing is left.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while applying a fetch.
    pub async fn settle(&mut self) -> Result<Option<FetchOutcome>, SessionError> {
        let mut last = None;
        while let Some(update) = self.next_update().await {
            let outcome = update?;
            last = Some(outcome);
            if matches!(outcome, FetchOutcome::Applied(_)) {
                break;
            }
        }
        Ok(last)
    }

    fn dispatch(&mut self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        self.pending.push(Box::pin(async move {
            let result = source
                .fetch_next(ticket.selector(), ticket.excluding())
                .await;
            (ticket, result)
        }));
    }
}
