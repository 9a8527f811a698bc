/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All LLM interactions MUST go through this module.
///
/// Calls are made once: no retries, no client timeout.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_tokens: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    pub candidate_tokens: u32,
}

impl LlmResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Thin wrapper over the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl LlmClient {
    pub fn new(api_key: String, model: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    /// Makes a single call to the model, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_tokens, usage.candidate_tokens
            );
        }

        Ok(llm_response)
    }

    /// Calls the model and returns its raw text, failing on an empty answer.
    pub async fn call_text(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        response.text().ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_joins_parts_of_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Rating: 7/10\n"}, {"text": "Strong Rust."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 40, "candidatesTokenCount": 12}
        }"#;
        let response: LlmResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().as_deref(), Some("Rating: 7/10\nStrong Rust."));
        assert_eq!(response.usage.unwrap().candidate_tokens, 12);
    }

    #[test]
    fn test_text_is_none_without_candidates() {
        let response: LlmResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());

        let blocked: LlmResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(blocked.text().is_none());
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = LlmClient::new(
            "key".to_string(),
            "gemini-pro".to_string(),
            "https://example.test/v1beta/".to_string(),
        );
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
    }
}
