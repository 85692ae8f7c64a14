use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::element::{Element, UnstyledElement};

/// The portion of the provider response that is consumed: an object with a
/// `slides` field. Everything else in the response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnstyledDocument {
    pub slides: Vec<UnstyledSlide>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnstyledSlide {
    pub elements: Vec<UnstyledElement>,
}

/// Slide in the shape the editor consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub elements: Vec<Element>,
}

#[derive(Debug, Error)]
#[error("response does not match the document shape: {0}")]
pub struct SchemaError(#[from] serde_json::Error);

/// Structural gate over the raw, untrusted generation response.
///
/// Accepts any JSON object carrying a well-formed `slides` array; extra
/// fields are ignored and slide/element counts are not bounded here. The
/// target slide and element counts are advisory, communicated to the
/// generator in the prompt instructions only.
pub fn parse_unstyled_document(raw: &Value) -> Result<UnstyledDocument, SchemaError> {
    Ok(serde_json::from_value(raw.clone())?)
}

/// Reshape a validated document into the styled slides consumed
/// downstream, attaching each kind's presentation defaults.
///
/// Preserves slide and element counts exactly; nothing is filtered.
pub fn into_styled(document: UnstyledDocument) -> Vec<Slide> {
    document
        .slides
        .into_iter()
        .map(|slide| Slide {
            elements: slide
                .elements
                .into_iter()
                .map(UnstyledElement::into_styled)
                .collect(),
        })
        .collect()
}
