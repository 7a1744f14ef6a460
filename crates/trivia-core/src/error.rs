//! Error types for question sources and quiz sessions.
//!
//! `SourceError` is defined here rather than in `trivia-sources` so the
//! session can wrap it and callers can decide on retries without string
//! matching.

use thiserror::Error;

use crate::model::QuestionId;
use crate::session::SessionPhase;

/// Errors that can occur when a question source is asked for data.
///
/// Every variant means the source is unavailable for now; none of them
/// leave the session in a different state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceError {
    /// The backend could not be reached.
    #[error("question source unavailable: {0}")]
    Unavailable(String),

    /// The request timed out.
    #[error("question source timed out after {0}s")]
    Timeout(u64),

    /// The backend answered with an error status.
    #[error("question source error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The backend answered with something we could not use.
    #[error("invalid response from question source: {0}")]
    InvalidResponse(String),
}

impl SourceError {
    /// Returns `true` if retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            SourceError::Unavailable(_) | SourceError::Timeout(_) => true,
            SourceError::Api { status, .. } => *status >= 500,
            SourceError::InvalidResponse(_) => false,
        }
    }
}

/// Errors returned by quiz session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// Fetching the next question failed; the session is unchanged.
    #[error(transparent)]
    SourceUnavailable(#[from] SourceError),

    /// The transition is not valid in the current phase.
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: SessionPhase,
    },

    /// Another fetch for this session has not completed yet.
    #[error("a question fetch is already in flight")]
    FetchInFlight,

    /// The source served a question that was already asked this session.
    #[error("question source repeated question {0}")]
    RepeatedQuestion(QuestionId),
}

impl SessionError {
    /// Returns `true` if the caller may retry the same transition.
    pub fn is_retryable(&self) -> bool {
        match self {
            SessionError::SourceUnavailable(e) => e.is_transient(),
            SessionError::FetchInFlight => true,
            SessionError::InvalidTransition { .. } | SessionError::RepeatedQuestion(_) => false,
        }
    }
}
