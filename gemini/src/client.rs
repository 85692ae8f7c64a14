use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::types::GenerateContentRequest;

/// Endpoint root for hosted generateContent models.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("generation request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

/// Client for the hosted generative-language API.
///
/// One network call per invocation; nothing is retried or cached, and no
/// deadline is imposed here. A caller that needs bounded latency wraps the
/// call in its own timeout.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, model)
    }

    /// Point the client at a different endpoint root (used by tests).
    pub fn with_base_url(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue one generateContent call and hand back the raw parsed JSON
    /// body. The API key travels as the `key` query parameter.
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<Value, ClientError> {
        let url = format!(
            "{base_url}/{model}:generateContent",
            base_url = self.base_url,
            model = self.model
        );
        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::RequestFailed(format!(
                "generateContent returned {status}: {body}"
            )));
        }

        tracing::debug!(model = %self.model, "generateContent call succeeded");
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
