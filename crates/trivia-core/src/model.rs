//! Core data model types for trivia.
//!
//! Categories and questions are owned by whatever backend serves them; the
//! quiz session only ever holds them by value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of questions served in one quiz session.
pub const SESSION_LENGTH: usize = 5;

/// Errors raised when constructing model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("difficulty must be between 1 and 5, got {0}")]
    DifficultyOutOfRange(u8),
}

/// Opaque category identifier, stable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name (e.g. "Science").
    pub name: String,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
        }
    }
}

/// Question difficulty on a 1 to 5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    ///
    /// Returns `ModelError::DifficultyOutOfRange` outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::DifficultyOutOfRange(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// The question text shown to the player.
    pub question: String,
    /// The canonical answer guesses are scored against.
    pub answer: String,
    pub difficulty: Difficulty,
    pub category: CategoryId,
}

/// Which questions a quiz session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizCategory {
    /// No category filter.
    AllCategories,
    /// Only questions from this category.
    Specific(CategoryId),
}

impl QuizCategory {
    /// Whether `question` is eligible under this selector.
    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            QuizCategory::AllCategories => true,
            QuizCategory::Specific(id) => question.category == *id,
        }
    }

    /// The category id this selector filters on, if any.
    #[must_use]
    pub fn category_id(&self) -> Option<CategoryId> {
        match self {
            QuizCategory::AllCategories => None,
            QuizCategory::Specific(id) => Some(*id),
        }
    }
}

impl fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizCategory::AllCategories => write!(f, "all"),
            QuizCategory::Specific(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for QuizCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(QuizCategory::AllCategories);
        }
        trimmed
            .parse::<u64>()
            .map(|id| QuizCategory::Specific(CategoryId::new(id)))
            .map_err(|_| format!("unknown category selector: {trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, category: u64) -> Question {
        Question {
            id: QuestionId::new(id),
            question: "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".into(),
            answer: "Maya Angelou".into(),
            difficulty: Difficulty::new(2).unwrap(),
            category: CategoryId::new(category),
        }
    }

    #[test]
    fn difficulty_range_is_enforced() {
        assert!(Difficulty::new(1).is_ok());
        assert!(Difficulty::new(5).is_ok());
        assert_eq!(
            Difficulty::new(0).unwrap_err(),
            ModelError::DifficultyOutOfRange(0)
        );
        assert!(Difficulty::try_from(6).is_err());
    }

    #[test]
    fn difficulty_rejected_during_deserialization() {
        let json = r#"{"id":1,"question":"q","answer":"a","difficulty":9,"category":1}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn selector_matches_category() {
        let q = question(1, 4);
        assert!(QuizCategory::AllCategories.matches(&q));
        assert!(QuizCategory::Specific(CategoryId::new(4)).matches(&q));
        assert!(!QuizCategory::Specific(CategoryId::new(5)).matches(&q));
    }

    #[test]
    fn selector_display_and_parse() {
        assert_eq!(QuizCategory::AllCategories.to_string(), "all");
        assert_eq!("ALL".parse::<QuizCategory>().unwrap(), QuizCategory::AllCategories);
        assert_eq!(
            "3".parse::<QuizCategory>().unwrap(),
            QuizCategory::Specific(CategoryId::new(3))
        );
        assert!("history".parse::<QuizCategory>().is_err());
    }

    #[test]
    fn question_serde_uses_plain_ids() {
        let json = serde_json::to_value(question(12, 3)).unwrap();
        assert_eq!(json["id"], 12);
        assert_eq!(json["category"], 3);
        assert_eq!(json["difficulty"], 2);
    }
}
