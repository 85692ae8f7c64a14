use serde_json::Value;

use carousel_gemini::{build_request, GeminiClient};
use carousel_schema::{into_styled, parse_unstyled_document, SchemaError, Slide};

use crate::error::Result;

/// Outcome of one generation attempt.
///
/// A response that fails the structural gate is reported here rather than
/// as an error, so callers can tell "no content produced" apart from a
/// transport failure.
#[derive(Debug)]
pub enum Generation {
    /// The validated, styled slide deck.
    Slides(Vec<Slide>),
    /// The response did not match the document contract.
    Rejected(Rejection),
}

impl Generation {
    /// Success-path value; rejection diagnostics are dropped.
    pub fn into_slides(self) -> Option<Vec<Slide>> {
        match self {
            Self::Slides(slides) => Some(slides),
            Self::Rejected(_) => None,
        }
    }
}

/// Why a response was refused. Kept off the success path and logged at the
/// point of rejection.
#[derive(Debug)]
pub struct Rejection {
    pub reason: SchemaError,
    /// The raw provider response, for diagnostics.
    pub raw: Value,
}

/// Prompt-to-validated-slides pipeline: build the request, call the
/// provider once, gate the raw response, reshape into styled slides.
///
/// Stateless across invocations; every call re-queries the provider.
pub struct Pipeline {
    client: GeminiClient,
}

impl Pipeline {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub async fn generate(&self, topic: &str) -> Result<Generation> {
        let request = build_request(topic);
        let raw = self.client.generate(&request).await?;

        match parse_unstyled_document(&raw) {
            Ok(document) => {
                let slides = into_styled(document);
                tracing::debug!(slides = slides.len(), "carousel generated");
                Ok(Generation::Slides(slides))
            }
            Err(reason) => {
                tracing::warn!(error = %reason, raw = %raw, "carousel response failed validation");
                Ok(Generation::Rejected(Rejection { reason, raw }))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{Json, Router};
    use serde_json::json;
    use std::net::SocketAddr;

    use crate::error::PipelineError;

    async fn spawn_stub(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn pipeline_against(addr: SocketAddr) -> Pipeline {
        Pipeline::new(GeminiClient::with_base_url(
            &format!("http://{addr}"),
            "test-key",
            "test-model",
        ))
    }

    fn document_response(slides: usize) -> Value {
        let slides: Vec<Value> = (0..slides)
            .map(|i| {
                json!({
                    "elements": [
                        { "type": "Title", "text": format!("Point {i} ✨"), "maxLength": 64 },
                        { "type": "Subtitle", "text": "Because reasons", "maxLength": 96 },
                        { "type": "Description", "text": "A short note.", "maxLength": 240 },
                    ]
                })
            })
            .collect();
        json!({ "slides": slides })
    }

    #[tokio::test]
    async fn well_formed_response_becomes_a_full_deck() {
        async fn stub() -> Json<Value> {
            Json(document_response(10))
        }
        let addr = spawn_stub(Router::new().fallback(stub)).await;

        let generation = pipeline_against(addr).generate("rust tips").await.unwrap();
        let slides = generation.into_slides().unwrap();
        assert_eq!(slides.len(), 10);
        assert!(slides.iter().all(|s| s.elements.len() == 3));
    }

    #[tokio::test]
    async fn response_without_slides_is_rejected_with_diagnostics() {
        async fn stub() -> Json<Value> {
            Json(json!({ "candidates": [{ "content": { "parts": [] } }] }))
        }
        let addr = spawn_stub(Router::new().fallback(stub)).await;

        let generation = pipeline_against(addr).generate("rust tips").await.unwrap();
        match generation {
            Generation::Rejected(rejection) => {
                assert!(rejection.raw.get("candidates").is_some());
            }
            Generation::Slides(_) => panic!("invalid response produced a deck"),
        }
    }

    #[tokio::test]
    async fn bad_element_tag_never_yields_a_partial_deck() {
        async fn stub() -> Json<Value> {
            let mut response = document_response(9);
            response["slides"][4]["elements"][0]["type"] = json!("Banner");
            Json(response)
        }
        let addr = spawn_stub(Router::new().fallback(stub)).await;

        let generation = pipeline_against(addr).generate("rust tips").await.unwrap();
        assert!(generation.into_slides().is_none());
    }

    #[tokio::test]
    async fn transport_failure_is_an_error_not_a_rejection() {
        async fn stub() -> (StatusCode, &'static str) {
            (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance")
        }
        let addr = spawn_stub(Router::new().fallback(stub)).await;

        let err = pipeline_against(addr).generate("rust tips").await.unwrap_err();
        assert!(matches!(err, PipelineError::Client(_)));
    }
}
