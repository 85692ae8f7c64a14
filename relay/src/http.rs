//! HTTP surface of the relay.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::fetch::{fetch_external_image, FetchError, RelayConfig};

/// User agent presented to upstream image hosts.
pub const RELAY_USER_AGENT: &str = "carousel-relay";

const CACHE_CONTROL_VALUE: &str = "public, max-age=86400, stale-while-revalidate";

pub struct RelayState {
    client: reqwest::Client,
    config: RelayConfig,
}

impl RelayState {
    pub fn new(config: RelayConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(RELAY_USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, config }
    }
}

/// Create all relay routes.
pub fn routes() -> Router<Arc<RelayState>> {
    Router::new().route("/api/proxy", get(proxy_image))
}

/// Bind and serve the relay until the process exits.
pub async fn serve(addr: SocketAddr, config: RelayConfig) -> std::io::Result<()> {
    let state = Arc::new(RelayState::new(config));
    let router = routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    tracing::info!("image relay listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

#[derive(Deserialize)]
struct ProxyParams {
    url: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    details: String,
}

enum RelayError {
    MissingUrl,
    InvalidUrl(String),
    Fetch(FetchError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            RelayError::MissingUrl => (
                StatusCode::BAD_REQUEST,
                "No URL provided",
                "include an absolute image URL in the `url` query parameter".to_string(),
            ),
            RelayError::InvalidUrl(details) => (StatusCode::BAD_REQUEST, "Invalid URL", details),
            RelayError::Fetch(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch image",
                err.to_string(),
            ),
        };
        (status, Json(ErrorBody { error, details })).into_response()
    }
}

/// Fetch an externally hosted image and re-serve its bytes verbatim, with
/// cross-origin access permitted and a day-long cache hint attached.
async fn proxy_image(
    State(state): State<Arc<RelayState>>,
    Query(params): Query<ProxyParams>,
) -> Result<Response, RelayError> {
    let raw_url = params
        .url
        .filter(|u| !u.is_empty())
        .ok_or(RelayError::MissingUrl)?;
    let url = Url::parse(&raw_url).map_err(|e| RelayError::InvalidUrl(e.to_string()))?;

    let image = fetch_external_image(&state.client, &state.config, url)
        .await
        .map_err(|err| {
            tracing::warn!(url = %raw_url, error = %err, "image fetch failed");
            RelayError::Fetch(err)
        })?;

    tracing::debug!(url = %raw_url, bytes = image.bytes.len(), "image relayed");
    let headers = [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (header::CONTENT_TYPE, image.content_type),
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VALUE),
        ),
    ];
    Ok((headers, image.bytes).into_response())
}
