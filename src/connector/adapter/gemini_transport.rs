use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatTransport;
use crate::domain::{ApiKey, ChatConfig, ChatTurn, DomainError};

const API_VERSION: &str = "v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini `generateContent` request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: SystemInstruction<'a>,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Minimal subset of the `generateContent` response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// HTTP transport for the Gemini `generateContent` REST API.
///
/// Implements [`ChatTransport`] so the send-message use case stays decoupled
/// from transport and serialization details. Turns are forwarded in the order
/// given; the system instruction travels in the dedicated `systemInstruction`
/// field rather than as a leading turn.
///
/// One request per call, 30-second timeout, no retry. The API key is sent in
/// the `x-goog-api-key` header and never appears in logs.
pub struct GeminiTransport {
    client: reqwest::Client,
    api_key: ApiKey,
    model: String,
    /// Full endpoint URL (base + versioned model path).
    url: String,
}

impl GeminiTransport {
    pub fn new(api_key: ApiKey, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let model: String = model.into();
        let base: String = base_url.into();
        let url = format!(
            "{}/{API_VERSION}/models/{model}:generateContent",
            base.trim_end_matches('/')
        );
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            model,
            url,
        }
    }

    /// Build a transport from a resolved [`ChatConfig`], or `None` when no
    /// credential is configured — the caller decides what demo mode looks
    /// like.
    pub fn from_config(config: &ChatConfig) -> Option<Self> {
        let key = config.api_key()?.clone();
        Some(Self::new(key, config.model(), config.base_url()))
    }

    /// Flatten a response into reply text: all text parts of the first
    /// candidate, concatenated. Missing candidates yield an empty string,
    /// which the use case classifies as an empty response.
    fn extract_text(response: ApiResponse) -> String {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatTransport for GeminiTransport {
    async fn generate(&self, system: &str, turns: &[ChatTurn]) -> Result<String, DomainError> {
        let request = ApiRequest {
            contents: turns
                .iter()
                .map(|turn| Content {
                    role: turn.role().as_str(),
                    parts: vec![Part { text: turn.text() }],
                })
                .collect(),
            system_instruction: SystemInstruction {
                parts: vec![Part { text: system }],
            },
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("GeminiTransport: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiTransport: API returned {status}: {body}");
            return Err(DomainError::transport(format!(
                "GeminiTransport: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::transport(format!("GeminiTransport: failed to parse response: {e}"))
        })?;

        let text = Self::extract_text(api_response);
        debug!("GeminiTransport: received {} bytes of reply text", text.len());
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
