use std::time::Duration;

use axum::http::{header, HeaderValue};
use bytes::Bytes;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

/// Bounds applied to every upstream fetch.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Deadline for the whole upstream request, connect through body.
    pub fetch_timeout: Duration,
    /// Largest declared `Content-Length` accepted.
    pub max_content_length: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            max_content_length: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or deadline hit. The in-flight request is dropped,
    /// releasing its connection.
    #[error("request failed: {0}")]
    Request(String),
    #[error("upstream returned status {0}")]
    Status(StatusCode),
    #[error("declared content length {length} exceeds the {limit} byte limit")]
    TooLarge { length: u64, limit: u64 },
    #[error("upstream content type is missing or not an image")]
    NotAnImage,
}

/// Upstream bytes plus the content type they were served with.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub content_type: HeaderValue,
    pub bytes: Bytes,
}

/// Fetch `url` on behalf of the browser client.
///
/// Redirects are followed. The fetch is abandoned when the deadline
/// passes, when the upstream declares a body larger than the limit, or
/// when its content type does not indicate an image; the size check runs
/// against the declared length, before the body is buffered.
pub async fn fetch_external_image(
    client: &Client,
    config: &RelayConfig,
    url: Url,
) -> Result<FetchedImage, FetchError> {
    let response = client
        .get(url)
        .timeout(config.fetch_timeout)
        .header(header::ACCEPT, "image/*")
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    if let Some(length) = response.content_length() {
        if length > config.max_content_length {
            return Err(FetchError::TooLarge {
                length,
                limit: config.max_content_length,
            });
        }
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .ok_or(FetchError::NotAnImage)?;
    let is_image = content_type
        .to_str()
        .map(|ct| ct.starts_with("image"))
        .unwrap_or(false);
    if !is_image {
        return Err(FetchError::NotAnImage);
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    Ok(FetchedImage {
        content_type,
        bytes,
    })
}
