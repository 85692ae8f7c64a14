//! Outbound client for the hosted generative-language API: prompt
//! construction, request wire types, and the single generateContent call.

pub mod client;
pub mod prompt;
pub mod types;

pub use client::{ClientError, GeminiClient, DEFAULT_BASE_URL};
pub use prompt::build_request;
pub use types::{Content, GenerateContentRequest, Part};
