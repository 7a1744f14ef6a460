//! The quiz session state machine.
//!
//! A session moves `Idle -> AwaitingGuess -> ShowingResult` and then either
//! back to `AwaitingGuess` for the next question or on to `Finished`.
//!
//! Fetching a question is split in two so the fetch itself can run outside
//! the session: `begin_select_category` / `begin_advance` validate the phase
//! and hand out a [`FetchTicket`], and `complete_fetch` applies the result.
//! Only one ticket can be outstanding at a time, and every ticket carries the
//! generation it was issued under. `restart` bumps the generation, so a
//! response for a superseded session is discarded instead of applied.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answer::is_correct;
use crate::error::{SessionError, SourceError};
use crate::model::{Question, QuestionId, QuizCategory, SESSION_LENGTH};
use crate::traits::QuestionSource;

/// The externally visible phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    AwaitingGuess,
    ShowingResult,
    Finished,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Idle => write!(f, "idle"),
            SessionPhase::AwaitingGuess => write!(f, "awaiting a guess"),
            SessionPhase::ShowingResult => write!(f, "showing a result"),
            SessionPhase::Finished => write!(f, "finished"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Stage {
    #[default]
    Idle,
    AwaitingGuess(Question),
    ShowingResult {
        question: Question,
        guess: String,
        correct: bool,
    },
    Finished,
}

impl Stage {
    fn phase(&self) -> SessionPhase {
        match self {
            Stage::Idle => SessionPhase::Idle,
            Stage::AwaitingGuess(_) => SessionPhase::AwaitingGuess,
            Stage::ShowingResult { .. } => SessionPhase::ShowingResult,
            Stage::Finished => SessionPhase::Finished,
        }
    }
}

/// Everything that belongs to one play-through. Replaced wholesale on
/// start and restart.
#[derive(Debug, Clone, Default)]
struct SessionState {
    selector: Option<QuizCategory>,
    asked: Vec<QuestionId>,
    score: u32,
    stage: Stage,
}

impl SessionState {
    fn started(selector: QuizCategory) -> Self {
        Self {
            selector: Some(selector),
            ..Self::default()
        }
    }
}

/// Why a fetch was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPurpose {
    /// First question of a new session.
    Start,
    /// Question following the one currently shown.
    Next,
}

/// A claim on the session's single fetch slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    purpose: FetchPurpose,
    selector: QuizCategory,
    excluding: Vec<QuestionId>,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn purpose(&self) -> FetchPurpose {
        self.purpose
    }

    /// Selector to pass to `QuestionSource::fetch_next`.
    pub fn selector(&self) -> &QuizCategory {
        &self.selector
    }

    /// Question ids to pass to `QuestionSource::fetch_next`.
    pub fn excluding(&self) -> &[QuestionId] {
        &self.excluding
    }
}

/// Result of `begin_advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The session reached its length and finished without a fetch.
    Finished,
    /// A fetch is needed; run it and hand the result to `complete_fetch`.
    Fetch(FetchTicket),
}

/// Result of `complete_fetch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result was applied; the session is now in this phase.
    Applied(SessionPhase),
    /// The ticket belonged to a superseded session and was ignored.
    Discarded,
}

/// Result of a submitted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub correct: bool,
    /// The canonical answer, for display.
    pub answer: String,
    /// Score after this guess.
    pub score: u32,
}

/// Read-only view of a session for presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub selector: Option<QuizCategory>,
    /// The question being asked or revealed.
    pub current: Option<Question>,
    /// The last submitted guess, empty until one is made.
    pub guess: String,
    pub revealed: bool,
    pub last_correct: Option<bool>,
    pub score: u32,
    pub asked: Vec<QuestionId>,
    pub asked_count: usize,
    pub ended: bool,
    pub fetching: bool,
}

/// A single quiz play-through and the transitions that drive it.
#[derive(Debug, Default)]
pub struct QuizSession {
    generation: u64,
    in_flight: Option<u64>,
    state: SessionState,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.stage.phase()
    }

    /// Counter bumped on every new session and restart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selector(&self) -> Option<QuizCategory> {
        self.state.selector
    }

    /// The question awaiting a guess or currently revealed.
    pub fn current(&self) -> Option<&Question> {
        match &self.state.stage {
            Stage::AwaitingGuess(question) | Stage::ShowingResult { question, .. } => {
                Some(question)
            }
            Stage::Idle | Stage::Finished => None,
        }
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Ids of the questions already served and moved past, in serve order.
    pub fn asked(&self) -> &[QuestionId] {
        &self.state.asked
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == SessionPhase::Finished
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let (guess, revealed, last_correct) = match &self.state.stage {
            Stage::ShowingResult { guess, correct, .. } => (guess.clone(), true, Some(*correct)),
            _ => (String::new(), false, None),
        };
        SessionSnapshot {
            phase: self.phase(),
            selector: self.state.selector,
            current: self.current().cloned(),
            guess,
            revealed,
            last_correct,
            score: self.state.score,
            asked: self.state.asked.clone(),
            asked_count: self.state.asked.len(),
            ended: self.is_finished(),
            fetching: self.is_fetching(),
        }
    }

    /// Start a new session for `selector`.
    ///
    /// Valid from `Idle` or `Finished`. The current state is left alone until
    /// the returned ticket completes, so a failed fetch changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::FetchInFlight` or `SessionError::InvalidTransition`.
    pub fn begin_select_category(
        &mut self,
        selector: QuizCategory,
    ) -> Result<FetchTicket, SessionError> {
        self.ensure_slot_free()?;
        match self.phase() {
            SessionPhase::Idle | SessionPhase::Finished => {}
            _ => return Err(self.invalid("select a category")),
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        tracing::debug!(generation = self.generation, %selector, "starting quiz session");

        Ok(FetchTicket {
            generation: self.generation,
            purpose: FetchPurpose::Start,
            selector,
            excluding: Vec::new(),
        })
    }

    /// Score a guess against the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless a question is awaiting
    /// a guess.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, SessionError> {
        self.ensure_slot_free()?;
        let question = match &self.state.stage {
            Stage::AwaitingGuess(question) => question.clone(),
            _ => return Err(self.invalid("submit a guess")),
        };

        let correct = is_correct(raw, &question.answer);
        if correct {
            self.state.score += 1;
        }
        tracing::debug!(question = %question.id, correct, score = self.state.score, "guess scored");

        let answer = question.answer.clone();
        self.state.stage = Stage::ShowingResult {
            question,
            guess: raw.to_string(),
            correct,
        };

        Ok(GuessOutcome {
            correct,
            answer,
            score: self.state.score,
        })
    }

    /// Move past the revealed question.
    ///
    /// Finishes immediately once `SESSION_LENGTH` questions have been served;
    /// otherwise returns a ticket for the next fetch.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::FetchInFlight` or `SessionError::InvalidTransition`.
    pub fn begin_advance(&mut self) -> Result<Advance, SessionError> {
        self.ensure_slot_free()?;
        let current = match &self.state.stage {
            Stage::ShowingResult { question, .. } => question.id,
            _ => return Err(self.invalid("advance")),
        };
        let Some(selector) = self.state.selector else {
            return Err(self.invalid("advance"));
        };

        let mut excluding = self.state.asked.clone();
        if !excluding.contains(&current) {
            excluding.push(current);
        }

        if excluding.len() >= SESSION_LENGTH {
            self.state.asked = excluding;
            self.state.stage = Stage::Finished;
            tracing::info!(score = self.state.score, "quiz session complete");
            return Ok(Advance::Finished);
        }

        self.in_flight = Some(self.generation);
        Ok(Advance::Fetch(FetchTicket {
            generation: self.generation,
            purpose: FetchPurpose::Next,
            selector,
            excluding,
        }))
    }

    /// Apply the result of the fetch described by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SourceUnavailable` if the fetch failed and
    /// `SessionError::RepeatedQuestion` if the source served an excluded
    /// question. In both cases the session is unchanged and the transition
    /// may be retried.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Option<Question>, SourceError>,
    ) -> Result<FetchOutcome, SessionError> {
        if ticket.generation != self.generation || self.in_flight != Some(ticket.generation) {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding question fetch for superseded session"
            );
            return Ok(FetchOutcome::Discarded);
        }
        self.in_flight = None;

        let fetched = match result {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::warn!("question fetch failed: {e}");
                return Err(e.into());
            }
        };

        if let Some(question) = &fetched {
            if ticket.excluding.contains(&question.id) {
                tracing::warn!(question = %question.id, "source served an excluded question");
                return Err(SessionError::RepeatedQuestion(question.id));
            }
        }

        match ticket.purpose {
            FetchPurpose::Start => self.state = SessionState::started(ticket.selector),
            FetchPurpose::Next => self.state.asked = ticket.excluding,
        }

        self.state.stage = match fetched {
            Some(question) => Stage::AwaitingGuess(question),
            None => {
                tracing::info!(
                    score = self.state.score,
                    asked = self.state.asked.len(),
                    "no questions left, quiz session ended early"
                );
                Stage::Finished
            }
        };

        Ok(FetchOutcome::Applied(self.phase()))
    }

    /// Drop the current session and return to `Idle`.
    ///
    /// Any fetch still outstanding becomes stale.
    pub fn restart(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.state = SessionState::default();
        tracing::debug!(generation = self.generation, "quiz session restarted");
    }

    /// Start a session and fetch its first question from `source`.
    ///
    /// # Errors
    ///
    /// See `begin_select_category` and `complete_fetch`.
    pub async fn select_category(
        &mut self,
        source: &dyn QuestionSource,
        selector: QuizCategory,
    ) -> Result<SessionPhase, SessionError> {
        let ticket = self.begin_select_category(selector)?;
        self.fetch_with(source, ticket).await
    }

    /// Advance to the next question, fetching it from `source` if needed.
    ///
    /// # Errors
    ///
    /// See `begin_advance` and `complete_fetch`.
    pub async fn advance(
        &mut self,
        source: &dyn QuestionSource,
    ) -> Result<SessionPhase, SessionError> {
        match self.begin_advance()? {
            Advance::Finished => Ok(SessionPhase::Finished),
            Advance::Fetch(ticket) => self.fetch_with(source, ticket).await,
        }
    }

    async fn fetch_with(
        &mut self,
        source: &dyn QuestionSource,
        ticket: FetchTicket,
    ) -> Result<SessionPhase, SessionError> {
        let result = source
            .fetch_next(ticket.selector(), ticket.excluding())
            .await;
        self.complete_fetch(ticket, result)?;
        Ok(self.phase())
    }

    fn ensure_slot_free(&self) -> Result<(), SessionError> {
        if self.in_flight.is_some() {
            Err(SessionError::FetchInFlight)
        } else {
            Ok(())
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            action,
            phase: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::model::{Category, CategoryId, Difficulty};

    /// Serves the first eligible question in insertion order.
    struct FakeSource {
        questions: Vec<Question>,
        failures: Mutex<u32>,
    }

    impl FakeSource {
        fn new(questions: Vec<Question>) -> Self {
            Self {
                questions,
                failures: Mutex::new(0),
            }
        }

        fn fail_next(&self, times: u32) {
            *self.failures.lock().unwrap() = times;
        }
    }

    #[async_trait]
    impl QuestionSource for FakeSource {
        fn name(&self) -> &str {
            "fake"
        }

        async fn fetch_next(
            &self,
            selector: &QuizCategory,
            excluding: &[QuestionId],
        ) -> Result<Option<Question>, SourceError> {
            let mut failures = self.failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(SourceError::Unavailable("connection refused".into()));
            }
            Ok(self
                .questions
                .iter()
                .find(|q| selector.matches(q) && !excluding.contains(&q.id))
                .cloned())
        }

        async fn categories(&self) -> Result<Vec<Category>, SourceError> {
            Ok(vec![])
        }
    }

    fn question(id: u64, category: u64, answer: &str) -> Question {
        Question {
            id: QuestionId::new(id),
            question: format!("Question {id}?"),
            answer: answer.into(),
            difficulty: Difficulty::new(3).unwrap(),
            category: CategoryId::new(category),
        }
    }

    fn category(id: u64) -> QuizCategory {
        QuizCategory::Specific(CategoryId::new(id))
    }

    /// Seven questions in category 1, three in category 2, none in category 3.
    fn bank() -> FakeSource {
        let mut questions: Vec<Question> = (1..=7)
            .map(|id| question(id, 1, &format!("answer{id}")))
            .collect();
        questions.push(question(20, 2, "Muhammad Ali"));
        questions.push(question(21, 2, "Brazil"));
        questions.push(question(22, 2, "Uruguay"));
        FakeSource::new(questions)
    }

    #[tokio::test]
    async fn select_category_serves_first_question() {
        let source = bank();
        let mut session = QuizSession::new();

        let phase = session.select_category(&source, category(2)).await.unwrap();

        assert_eq!(phase, SessionPhase::AwaitingGuess);
        assert_eq!(session.current().unwrap().id, QuestionId::new(20));
        assert_eq!(session.selector(), Some(category(2)));
        assert_eq!(session.score(), 0);
        assert!(session.asked().is_empty());
    }

    #[tokio::test]
    async fn empty_category_finishes_immediately() {
        let source = bank();
        let mut session = QuizSession::new();

        let phase = session.select_category(&source, category(3)).await.unwrap();

        assert_eq!(phase, SessionPhase::Finished);
        assert_eq!(session.score(), 0);
        assert!(session.asked().is_empty());
        assert!(session.current().is_none());
    }

    #[tokio::test]
    async fn session_ends_after_five_questions() {
        let source = bank();
        let mut session = QuizSession::new();
        session.select_category(&source, category(1)).await.unwrap();

        let mut rounds = 0;
        while session.phase() == SessionPhase::AwaitingGuess {
            let answer = session.current().unwrap().answer.clone();
            session.submit_guess(&answer).unwrap();
            session.advance(&source).await.unwrap();
            rounds += 1;
            assert!(session.asked().len() <= SESSION_LENGTH);
        }

        assert_eq!(rounds, SESSION_LENGTH);
        assert!(session.is_finished());
        assert_eq!(session.score(), 5);
        assert_eq!(session.asked().len(), SESSION_LENGTH);
        let unique: HashSet<_> = session.asked().iter().collect();
        assert_eq!(unique.len(), SESSION_LENGTH);
    }

    #[tokio::test]
    async fn exhausted_category_ends_early() {
        let source = bank();
        let mut session = QuizSession::new();
        session.select_category(&source, category(2)).await.unwrap();

        let guesses = ["Ali!", "Argentina", "uruguay"];
        let mut phases = Vec::new();
        for guess in guesses {
            session.submit_guess(guess).unwrap();
            phases.push(session.advance(&source).await.unwrap());
        }

        assert_eq!(
            phases,
            vec![
                SessionPhase::AwaitingGuess,
                SessionPhase::AwaitingGuess,
                SessionPhase::Finished
            ]
        );
        assert_eq!(session.score(), 2);
        assert_eq!(
            session.asked(),
            &[QuestionId::new(20), QuestionId::new(21), QuestionId::new(22)]
        );
    }

    #[tokio::test]
    async fn second_guess_is_rejected() {
        let source = bank();
        let mut session = QuizSession::new();
        session.select_category(&source, category(2)).await.unwrap();

        let outcome = session.submit_guess("ali").unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.answer, "Muhammad Ali");

        let err = session.submit_guess("ali").unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                action: "submit a guess",
                phase: SessionPhase::ShowingResult,
            }
        );
        assert_eq!(session.score(), 1);
    }

    #[tokio::test]
    async fn transitions_are_validated_against_phase() {
        let source = bank();
        let mut session = QuizSession::new();

        assert!(matches!(
            session.submit_guess("x"),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            session.begin_advance(),
            Err(SessionError::InvalidTransition { .. })
        ));

        session.select_category(&source, category(1)).await.unwrap();
        assert!(matches!(
            session.begin_advance(),
            Err(SessionError::InvalidTransition {
                phase: SessionPhase::AwaitingGuess,
                ..
            })
        ));
        assert!(matches!(
            session.begin_select_category(category(2)),
            Err(SessionError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn source_failure_leaves_session_unchanged() {
        let source = bank();
        let mut session = QuizSession::new();
        session.select_category(&source, category(1)).await.unwrap();
        session.submit_guess("wrong").unwrap();
        let before = session.snapshot();

        source.fail_next(1);
        let err = session.advance(&source).await.unwrap_err();
        assert!(matches!(err, SessionError::SourceUnavailable(_)));
        assert_eq!(session.snapshot(), before);

        // Retrying the same transition works.
        let phase = session.advance(&source).await.unwrap();
        assert_eq!(phase, SessionPhase::AwaitingGuess);
        assert_eq!(session.asked(), &[QuestionId::new(1)]);
        assert_eq!(session.current().unwrap().id, QuestionId::new(2));
    }

    #[tokio::test]
    async fn failed_start_stays_idle() {
        let source = bank();
        source.fail_next(1);
        let mut session = QuizSession::new();

        let err = session
            .select_category(&source, QuizCategory::AllCategories)
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::SourceUnavailable(_)));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.selector().is_none());
        assert!(!session.is_fetching());
    }

    #[tokio::test]
    async fn stale_fetch_after_restart_is_discarded() {
        let source = bank();
        let mut session = QuizSession::new();

        let stale = session.begin_select_category(category(1)).unwrap();
        session.restart();
        session.select_category(&source, category(2)).await.unwrap();

        let outcome = session
            .complete_fetch(stale, Ok(Some(question(1, 1, "answer1"))))
            .unwrap();

        assert_eq!(outcome, FetchOutcome::Discarded);
        assert_eq!(session.current().unwrap().id, QuestionId::new(20));
        assert_eq!(session.selector(), Some(category(2)));
    }

    #[test]
    fn tickets_carry_generation_and_purpose() {
        let mut session = QuizSession::new();
        assert_eq!(session.generation(), 0);

        let start = session.begin_select_category(category(1)).unwrap();
        assert_eq!(start.generation(), 1);
        assert_eq!(start.purpose(), FetchPurpose::Start);
        assert!(start.excluding().is_empty());

        session.restart();
        assert_eq!(session.generation(), 2);

        let restarted = session.begin_select_category(category(1)).unwrap();
        assert_eq!(restarted.generation(), session.generation());
        assert_ne!(restarted.generation(), start.generation());
        session
            .complete_fetch(restarted, Ok(Some(question(1, 1, "answer1"))))
            .unwrap();
        session.submit_guess("answer1").unwrap();

        let Advance::Fetch(next) = session.begin_advance().unwrap() else {
            panic!("expected a fetch for the second question");
        };
        assert_eq!(next.purpose(), FetchPurpose::Next);
        assert_eq!(next.generation(), session.generation());
        assert_eq!(next.excluding(), &[QuestionId::new(1)]);
    }

    #[test]
    fn only_one_fetch_in_flight() {
        let mut session = QuizSession::new();
        let ticket = session.begin_select_category(category(1)).unwrap();

        assert_eq!(
            session.begin_select_category(category(2)),
            Err(SessionError::FetchInFlight)
        );
        assert_eq!(session.submit_guess("x"), Err(SessionError::FetchInFlight));
        assert!(session.snapshot().fetching);

        session
            .complete_fetch(ticket, Ok(Some(question(1, 1, "answer1"))))
            .unwrap();
        assert!(!session.is_fetching());
        assert_eq!(session.phase(), SessionPhase::AwaitingGuess);
    }

    #[test]
    fn repeated_question_is_rejected() {
        let mut session = QuizSession::new();
        let ticket = session.begin_select_category(category(1)).unwrap();
        session
            .complete_fetch(ticket, Ok(Some(question(1, 1, "answer1"))))
            .unwrap();
        session.submit_guess("answer1").unwrap();

        let Advance::Fetch(ticket) = session.begin_advance().unwrap() else {
            panic!("expected a fetch");
        };
        assert_eq!(ticket.excluding(), &[QuestionId::new(1)]);

        let err = session
            .complete_fetch(ticket, Ok(Some(question(1, 1, "answer1"))))
            .unwrap_err();
        assert_eq!(err, SessionError::RepeatedQuestion(QuestionId::new(1)));
        assert_eq!(session.phase(), SessionPhase::ShowingResult);
        assert!(session.asked().is_empty());
        assert!(!session.is_fetching());
    }

    #[tokio::test]
    async fn snapshot_tracks_reveal() {
        let source = bank();
        let mut session = QuizSession::new();
        session.select_category(&source, category(2)).await.unwrap();

        let snapshot = session.snapshot();
        assert!(!snapshot.revealed);
        assert!(snapshot.guess.is_empty());
        assert_eq!(snapshot.last_correct, None);

        session.submit_guess("Frazier").unwrap();
        let snapshot = session.snapshot();
        assert!(snapshot.revealed);
        assert_eq!(snapshot.guess, "Frazier");
        assert_eq!(snapshot.last_correct, Some(false));
        assert_eq!(snapshot.current.unwrap().id, QuestionId::new(20));

        session.advance(&source).await.unwrap();
        let snapshot = session.snapshot();
        assert!(!snapshot.revealed);
        assert!(snapshot.guess.is_empty());
        assert_eq!(snapshot.asked_count, 1);
    }

    #[tokio::test]
    async fn finished_session_can_restart_or_reselect() {
        let source = bank();
        let mut session = QuizSession::new();
        session.select_category(&source, category(3)).await.unwrap();
        assert!(session.is_finished());

        session.select_category(&source, category(2)).await.unwrap();
        assert_eq!(session.phase(), SessionPhase::AwaitingGuess);

        session.restart();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, SessionPhase::Idle);
        assert_eq!(snapshot.selector, None);
        assert_eq!(snapshot.score, 0);
        assert!(snapshot.current.is_none());
    }
}
