//! Shared types and errors for the lexvec similarity engine.
//!
//! This crate holds the pieces every other crate needs: the query result
//! type and the error taxonomy. Implementation logic (similarity math,
//! ranking, parsing) lives in `lexvec-engine` and `lexvec-loader`.

#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{VectorError, VectorResult};
pub use types::{SimilarityResult, NO_MATCH_NAME};
