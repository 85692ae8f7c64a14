//! Pipeline orchestration: one topic prompt in, a validated slide deck or
//! an explicit rejection out.

pub mod error;
pub mod pipeline;

pub use error::{PipelineError, Result};
pub use pipeline::{Generation, Pipeline, Rejection};
