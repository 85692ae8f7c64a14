//! Data model for generated carousels.
//!
//! Two families of types live here: the unstyled shapes that gate raw
//! generator output, and the styled shapes the rest of the application
//! consumes. The conversion between them is a pure, count-preserving
//! reshape so either side can evolve independently.

pub mod document;
pub mod element;

pub use document::*;
pub use element::*;
