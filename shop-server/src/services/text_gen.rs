//! Text generation
//!
//! Best-effort copy for the storefront: product descriptions and a daily
//! market update. Nothing here can fail a request. Errors, timeouts and
//! empty answers all turn into fixed fallback text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::ErrorCode;
use shared::models::Product;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const SHOP_NAME: &str = "Triveni Renuka Wholesale Fruit Shop";
const SHOP_TOWN: &str = "Khammam";

const MARKET_UPDATE_ON_ERROR: &str =
    "Welcome to Triveni Renuka Fruit Shop! Check out our fresh arrivals today.";
const MARKET_UPDATE_ON_EMPTY: &str = "Fresh fruits available daily at best prices!";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("text generation is not configured")]
    Disabled,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl GenerationError {
    /// Code logged for a failed call; `None` when generation is switched off
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Disabled => None,
            Self::Request(_) | Self::Status { .. } => Some(ErrorCode::NetworkError),
            Self::Timeout(_) => Some(ErrorCode::TimeoutError),
        }
    }
}

fn log_fallback(task: &str, subject: &str, error: &GenerationError) {
    match error.code() {
        Some(code) => tracing::warn!(
            task,
            subject,
            code = code.code(),
            error = %error,
            "Text generation failed, using fallback"
        ),
        None => tracing::debug!(task, subject, "Text generation disabled, using fallback"),
    }
}

/// Anything that turns a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Used when no API key is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }
}

/// Gemini `generateContent` REST client
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.text())
    }
}

/// Wraps a [`TextGenerator`] with a deadline and fallback text
#[derive(Clone)]
pub struct Enrichment {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl std::fmt::Debug for Enrichment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enrichment")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Enrichment {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Enrichment that always answers with fallback text
    pub fn disabled() -> Self {
        Self::new(Arc::new(DisabledGenerator), Duration::from_secs(1))
    }

    /// One-sentence description for a product name
    pub async fn describe_product(&self, name: &str) -> String {
        let prompt = format!(
            "Write a 1-sentence mouth-watering description for \"{name}\" to be used on a \
             fruit shop website. Mention freshness and taste."
        );

        match self.run(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => format!("Fresh and delicious {name}."),
            Err(e) => {
                log_fallback("description", name, &e);
                format!("Fresh {name} available now.")
            }
        }
    }

    /// Short market update for the current catalog
    pub async fn market_update(&self, products: &[Product]) -> String {
        let prompt = market_prompt(products);

        match self.run(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => MARKET_UPDATE_ON_EMPTY.to_string(),
            Err(e) => {
                log_fallback("market_update", "catalog", &e);
                MARKET_UPDATE_ON_ERROR.to_string()
            }
        }
    }

    async fn run(&self, prompt: &str) -> Result<String, GenerationError> {
        tokio::time::timeout(self.timeout, self.generator.generate(prompt))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))?
    }
}

/// `name: Rs.price/unit, ...` per product, one per line
fn product_summary(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| {
            let prices: Vec<String> = p
                .variants
                .iter()
                .map(|v| format!("Rs.{}/{}", v.price, v.unit))
                .collect();
            format!("{}: {}", p.name, prices.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn market_prompt(products: &[Product]) -> String {
    format!(
        "You are an expert fruit market analyst for \"{SHOP_NAME}\" in {SHOP_TOWN}.\n\
         Based on the following product list and prices, generate a short, engaging daily \
         market update (max 100 words).\n\
         Highlight seasonal specials (like Mangoes or Apples) and mention that wholesale \
         prices are best in town.\n\
         Use an enthusiastic tone suitable for shopkeepers and retail customers.\n\n\
         Products:\n{}",
        product_summary(products)
    )
}
