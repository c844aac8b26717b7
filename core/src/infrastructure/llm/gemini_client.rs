use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, food_extraction::ports::LlmClient};

#[derive(Debug, Clone)]
pub struct GeminiLlmClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiLlmClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let response = self.client.post(&url).json(&request).send().await.map_err(|e| {
            tracing::error!("Gemini API request failed: {}", e);
            classify_provider_error(&e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(classify_status_error(status, &error_text));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

/// Classify a non-success provider status into the error taxonomy.
fn classify_status_error(status: StatusCode, detail: &str) -> CoreError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            CoreError::LlmThrottled(format!("LLM API returned {}: {}", status, detail))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CoreError::LlmUnauthorized(format!("LLM API returned {}: {}", status, detail))
        }
        _ => CoreError::ExternalServiceError(format!(
            "LLM API returned error: {} - {}",
            status, detail
        )),
    }
}

/// Fallback classification for failures that carry no HTTP status (transport
/// errors, provider messages relayed as text). Substring matching is fragile,
/// so the dispatch order is fixed: throttling markers win over auth markers,
/// anything else is a generic upstream failure.
fn classify_provider_error(message: &str) -> CoreError {
    const THROTTLE_MARKERS: [&str; 3] = ["429", "quota", "RESOURCE_EXHAUSTED"];
    const AUTH_MARKERS: [&str; 5] = [
        "401",
        "403",
        "API key",
        "PERMISSION_DENIED",
        "UNAUTHENTICATED",
    ];

    if THROTTLE_MARKERS.iter().any(|m| message.contains(m)) {
        CoreError::LlmThrottled(message.to_string())
    } else if AUTH_MARKERS.iter().any(|m| message.contains(m)) {
        CoreError::LlmUnauthorized(message.to_string())
    } else {
        CoreError::ExternalServiceError(message.to_string())
    }
}

impl LlmClient for GeminiLlmClient {
    async fn generate(&self, prompt: String) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        self.call_gemini_api(request).await
    }
}
