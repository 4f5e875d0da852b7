//! Vector store and similarity query engine.
//!
//! The engine is an exact, brute-force similarity primitive over named
//! embeddings: every query is a synchronous O(n) scan of an in-memory
//! store. There is no index structure, no persistence, and no internal
//! locking; the store is built once and then read.
//!
//! - [`VectorStore`] — name → fixed-dimension vector mapping
//! - [`similarity`] — cosine similarity and normalization
//! - synonym threshold search ([`VectorStore::find_synonyms`])
//! - bounded top-k retrieval ([`VectorStore::find_similar`])
//! - analogical expressions ([`VectorStore::vector_from_expression`])

#![warn(missing_docs)]

pub mod expression;
pub mod similarity;
pub mod store;
pub mod synonyms;
pub mod topk;

pub use expression::EXPRESSION_BOUNDARY;
pub use similarity::{cosine_similarity, normalize};
pub use store::{VectorStore, DEFAULT_DIMENSION};
