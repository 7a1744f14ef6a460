//! The `trivia play` command.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

use trivia_core::model::{Question, QuestionId, QuizCategory};
use trivia_core::{QuizDriver, SessionError, SessionPhase};
use trivia_sources::config::load_config_from;

use super::open_source;

/// How often and how patiently to retry failed question fetches.
struct RetryPolicy {
    max_retries: u32,
    delay: Duration,
}

/// One answered question.
#[derive(Debug, Serialize)]
struct Round {
    question_id: QuestionId,
    question: String,
    answer: String,
    guess: String,
    correct: bool,
    answered_at: DateTime<Utc>,
}

/// Record of a played session, written as JSON.
#[derive(Debug, Serialize)]
struct Transcript {
    id: Uuid,
    source: String,
    category: QuizCategory,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    completed: bool,
    score: u32,
    rounds: Vec<Round>,
}

impl Transcript {
    fn new(source: &str, category: QuizCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.to_string(),
            category,
            started_at: Utc::now(),
            finished_at: None,
            completed: false,
            score: 0,
            rounds: Vec::new(),
        }
    }

    fn record(&mut self, question: &Question, guess: &str, correct: bool) {
        self.rounds.push(Round {
            question_id: question.id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            guess: guess.to_string(),
            correct,
            answered_at: Utc::now(),
        });
    }

    fn write(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create transcript directory: {}", dir.display()))?;
        let path = dir.join(format!("{}.json", self.id));
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write transcript: {}", path.display()))?;
        Ok(path)
    }
}

pub async fn execute(
    category: String,
    source_name: Option<String>,
    bank: Option<PathBuf>,
    config_path: Option<PathBuf>,
    transcript_dir: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let source = open_source(&config, source_name.as_deref(), bank.as_deref())?;
    let retry = RetryPolicy {
        max_retries: config.max_retries,
        delay: Duration::from_millis(config.retry_delay_ms),
    };
    let transcript_dir = transcript_dir.or_else(|| config.transcript_dir.clone());

    let mut driver = QuizDriver::new(source);
    let selector = resolve_category(&driver, &category).await?;
    let mut transcript = Transcript::new(driver.source_name(), selector);

    println!("Starting quiz: category {selector} ({} source)", driver.source_name());
    dispatch_with_retry(&mut driver, &retry, |d| {
        d.select_category(selector).map(|()| true)
    })
    .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while driver.session().phase() == SessionPhase::AwaitingGuess {
        let Some(question) = driver.session().current().cloned() else {
            break;
        };
        println!("\nQuestion {}: {}", transcript.rounds.len() + 1, question.question);
        print!("> ");
        std::io::stdout().flush()?;

        let Some(guess) = lines.next_line().await? else {
            println!("\nInput closed, ending quiz early.");
            break;
        };

        let outcome = driver.submit_guess(&guess)?;
        if outcome.correct {
            println!("Correct!");
        } else {
            println!("Incorrect. The answer was: {}", outcome.answer);
        }
        transcript.record(&question, &guess, outcome.correct);

        dispatch_with_retry(&mut driver, &retry, QuizDriver::advance).await?;
    }

    let score = driver.session().score();
    transcript.score = score;
    transcript.completed = driver.session().is_finished();
    transcript.finished_at = Some(Utc::now());

    if transcript.rounds.is_empty() && transcript.completed {
        println!("No questions available for this category.");
    }
    println!(
        "\nFinal score: {score} out of {}",
        transcript.rounds.len()
    );

    if let Some(dir) = transcript_dir {
        let path = transcript.write(&dir)?;
        println!("Transcript written to {}", path.display());
    }

    Ok(())
}

/// Turn the `--category` argument into a selector.
///
/// Accepts "all", a numeric id, or a category name known to the source.
async fn resolve_category(driver: &QuizDriver, raw: &str) -> Result<QuizCategory> {
    if let Ok(selector) = raw.parse::<QuizCategory>() {
        return Ok(selector);
    }

    let wanted = raw.trim();
    let categories = driver
        .categories()
        .await
        .context("failed to list categories")?;

    match categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(wanted))
    {
        Some(category) => Ok(QuizCategory::Specific(category.id)),
        None => {
            let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
            anyhow::bail!(
                "unknown category '{wanted}'. Available: all, {}",
                names.join(", ")
            )
        }
    }
}

/// Run a transition that may dispatch a fetch, retrying transient failures.
///
/// `transition` returns whether it dispatched a fetch. A failed fetch leaves
/// the session unchanged, so the same transition can simply be issued again.
async fn dispatch_with_retry<F>(
    driver: &mut QuizDriver,
    retry: &RetryPolicy,
    mut transition: F,
) -> Result<()>
where
    F: FnMut(&mut QuizDriver) -> Result<bool, SessionError>,
{
    let mut attempt = 0;
    loop {
        if !transition(driver)? {
            return Ok(());
        }
        match driver.settle().await {
            Ok(_) => return Ok(()),
            Err(e) if e.is_retryable() && attempt < retry.max_retries => {
                attempt += 1;
                tracing::warn!(
                    attempt,
                    max_retries = retry.max_retries,
                    "question fetch failed, retrying: {e}"
                );
                tokio::time::sleep(retry.delay).await;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!(
                    "could not fetch a question from the {} source",
                    driver.source_name()
                )));
            }
        }
    }
}
