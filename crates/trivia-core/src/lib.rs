//! trivia-core: Quiz session engine, answer evaluation, and source traits.
//!
//! This crate defines the data model, the `QuestionSource` trait, and the
//! state machine that the rest of trivia builds on.

pub mod answer;
pub mod driver;
pub mod error;
pub mod model;
pub mod session;
pub mod traits;

pub use driver::QuizDriver;
pub use error::{SessionError, SourceError};
pub use model::{Category, CategoryId, Difficulty, Question, QuestionId, QuizCategory, SESSION_LENGTH};
pub use session::{FetchOutcome, GuessOutcome, QuizSession, SessionPhase, SessionSnapshot};
pub use traits::QuestionSource;
