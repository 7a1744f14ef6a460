//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use trivia_core::model::{Category, CategoryId, Difficulty, Question, QuestionId, SESSION_LENGTH};

/// Categories and questions loaded from one or more bank files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionBank {
    /// Human-readable bank name.
    pub name: String,
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Combine several banks into one, keeping file order.
    pub fn merge(banks: impl IntoIterator<Item = QuestionBank>) -> QuestionBank {
        let mut merged = QuestionBank::default();
        let mut names = Vec::new();
        for bank in banks {
            if !bank.name.is_empty() {
                names.push(bank.name);
            }
            merged.categories.extend(bank.categories);
            merged.questions.extend(bank.questions);
        }
        merged.name = names.join(", ");
        merged
    }

    /// Number of questions per category id.
    pub fn questions_per_category(&self) -> HashMap<CategoryId, usize> {
        let mut counts = HashMap::new();
        for question in &self.questions {
            *counts.entry(question.category).or_insert(0) += 1;
        }
        counts
    }
}

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    categories: Vec<TomlCategory>,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlCategory {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u64,
    question: String,
    answer: String,
    #[serde(default = "default_difficulty")]
    difficulty: u8,
    category: u64,
}

fn default_difficulty() -> u8 {
    1
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let categories = parsed
        .categories
        .into_iter()
        .map(|c| Category::new(c.id, c.name))
        .collect();

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let difficulty = Difficulty::new(q.difficulty)
                .with_context(|| format!("question {} in {}", q.id, source_path.display()))?;
            Ok(Question {
                id: QuestionId::new(q.id),
                question: q.question,
                answer: q.answer,
                difficulty,
                category: CategoryId::new(q.category),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank {
        name: parsed.name,
        categories,
        questions,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// Load a bank from a file, or merge every bank in a directory.
pub fn load_bank(path: &Path) -> Result<QuestionBank> {
    if path.is_dir() {
        Ok(QuestionBank::merge(load_bank_directory(path)?))
    } else {
        parse_bank(path)
    }
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<QuestionId>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "bank contains no questions".into(),
        });
    }

    let mut seen_categories = HashSet::new();
    for category in &bank.categories {
        if !seen_categories.insert(category.id) {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("duplicate category ID: {}", category.id),
            });
        }
    }

    let mut seen_questions = HashSet::new();
    for question in &bank.questions {
        if !seen_questions.insert(question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: format!("duplicate question ID: {}", question.id),
            });
        }

        if !seen_categories.contains(&question.category) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: format!("unknown category: {}", question.category),
            });
        }

        // An empty answer can never be guessed.
        if question.answer.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: "answer is empty".into(),
            });
        }

        if question.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: "question text is empty".into(),
            });
        }
    }

    let counts = bank.questions_per_category();
    for category in &bank.categories {
        let count = counts.get(&category.id).copied().unwrap_or(0);
        if count < SESSION_LENGTH {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!(
                    "category '{}' has {count} question(s); quizzes will end before {SESSION_LENGTH}",
                    category.name
                ),
            });
        }
    }

    warnings
}
