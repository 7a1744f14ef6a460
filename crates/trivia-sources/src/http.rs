//! HTTP question source for the trivia REST backend.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use trivia_core::error::SourceError;
use trivia_core::model::{Category, CategoryId, Difficulty, Question, QuestionId, QuizCategory};
use trivia_core::traits::QuestionSource;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Question source backed by the trivia backend's `/quizzes` and
/// `/categories` endpoints.
pub struct HttpSource {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpSource {
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SourceError> {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SourceError::Unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_send_error(&self, e: reqwest::Error) -> SourceError {
        if e.is_timeout() {
            SourceError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            SourceError::Unavailable(format!(
                "trivia backend not reachable at {}",
                self.base_url
            ))
        } else {
            SourceError::Unavailable(e.to_string())
        }
    }
}

#[derive(Serialize)]
struct QuizRequest {
    previous_questions: Vec<u64>,
    quiz_category: WireCategory,
}

/// The frontend's `{type, id}` selector, where id 0 means all categories.
#[derive(Serialize)]
struct WireCategory {
    #[serde(rename = "type")]
    kind: &'static str,
    id: u64,
}

impl From<&QuizCategory> for WireCategory {
    fn from(selector: &QuizCategory) -> Self {
        match selector {
            QuizCategory::AllCategories => WireCategory { kind: "all", id: 0 },
            QuizCategory::Specific(id) => WireCategory {
                kind: "category",
                id: id.get(),
            },
        }
    }
}

#[derive(Deserialize)]
struct QuizResponse {
    #[serde(default)]
    question: Option<WireQuestion>,
}

#[derive(Deserialize)]
struct WireQuestion {
    id: WireId,
    question: String,
    answer: String,
    difficulty: u8,
    category: WireId,
}

/// Ids arrive as numbers from the API but as strings from form posts.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(u64),
    Text(String),
}

impl WireId {
    fn value(&self) -> Result<u64, SourceError> {
        match self {
            WireId::Number(n) => Ok(*n),
            WireId::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| SourceError::InvalidResponse(format!("non-numeric id: {s:?}"))),
        }
    }
}

impl WireQuestion {
    fn into_question(self) -> Result<Question, SourceError> {
        let difficulty = Difficulty::new(self.difficulty)
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;
        Ok(Question {
            id: QuestionId::new(self.id.value()?),
            question: self.question,
            answer: self.answer,
            difficulty,
            category: CategoryId::new(self.category.value()?),
        })
    }
}

#[derive(Deserialize)]
struct CategoriesResponse {
    categories: WireCategories,
}

/// The backend returns a list of `{id, type}`; older builds return an
/// `{"<id>": "<name>"}` map.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireCategories {
    List(Vec<WireCategoryEntry>),
    Map(BTreeMap<String, String>),
}

#[derive(Deserialize)]
struct WireCategoryEntry {
    id: WireId,
    #[serde(rename = "type")]
    name: String,
}

impl WireCategories {
    fn into_categories(self) -> Result<Vec<Category>, SourceError> {
        match self {
            WireCategories::List(entries) => entries
                .into_iter()
                .map(|c| Ok(Category::new(c.id.value()?, c.name)))
                .collect(),
            WireCategories::Map(map) => {
                let mut categories = map
                    .into_iter()
                    .map(|(id, name)| Ok(Category::new(WireId::Text(id).value()?, name)))
                    .collect::<Result<Vec<_>, SourceError>>()?;
                categories.sort_by_key(|c| c.id);
                Ok(categories)
            }
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self, excluding), fields(selector = %selector, excluded = excluding.len()))]
    async fn fetch_next(
        &self,
        selector: &QuizCategory,
        excluding: &[QuestionId],
    ) -> Result<Option<Question>, SourceError> {
        let body = QuizRequest {
            previous_questions: excluding.iter().map(|id| id.get()).collect(),
            quiz_category: WireCategory::from(selector),
        };

        let response = self
            .client
            .post(format!("{}/quizzes", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Api { status, message });
        }

        // Only a successful response with no question means the pool is spent.
        let api_response: QuizResponse = response.json().await.map_err(|e| {
            SourceError::InvalidResponse(format!("failed to parse quiz response: {e}"))
        })?;

        let Some(wire) = api_response.question else {
            return Ok(None);
        };
        let question = wire.into_question()?;
        if excluding.contains(&question.id) {
            return Err(SourceError::InvalidResponse(format!(
                "backend returned excluded question {}",
                question.id
            )));
        }
        tracing::debug!(question = %question.id, "fetched question");
        Ok(Some(question))
    }

    #[instrument(skip(self))]
    async fn categories(&self) -> Result<Vec<Category>, SourceError> {
        let response = self
            .client
            .get(format!("{}/categories", self.base_url))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Api { status, message });
        }

        let parsed: CategoriesResponse = response.json().await.map_err(|e| {
            SourceError::InvalidResponse(format!("failed to parse categories response: {e}"))
        })?;
        parsed.categories.into_categories()
    }
}
