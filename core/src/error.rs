use thiserror::Error;

/// Transport-layer failures of the pipeline. A response that arrives but
/// fails validation is not an error; it surfaces as
/// [`crate::Generation::Rejected`].
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("generation call failed: {0}")]
    Client(#[from] carousel_gemini::ClientError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
