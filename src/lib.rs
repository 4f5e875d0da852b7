//! # Lexvec
//!
//! Embedded named-vector similarity engine for word embeddings.
//!
//! Lexvec indexes named high-dimensional vectors and answers similarity
//! queries over them: threshold synonym search, bounded top-k retrieval,
//! and analogical vector arithmetic ("king - man + woman").
//!
//! ## Quick Start
//!
//! ```
//! use lexvecdb::prelude::*;
//!
//! let mut store = VectorStore::new(3);
//! store.add("money", vec![0.0, 0.0, 3.0])?;
//! store.add("cash", vec![0.2, 0.3, 2.5])?;
//!
//! // Threshold synonym search
//! let synonyms = store.find_synonyms_by_word("money", 0.9)?;
//! assert_eq!(synonyms[0].name, "cash");
//!
//! // Bounded top-k
//! let top = store.find_similar(&[0.0, 0.0, 1.0], 2)?;
//! assert_eq!(top[0].name, "money");
//! # Ok::<(), VectorError>(())
//! ```
//!
//! Stores are usually populated from a text embedding file via
//! [`load_path`]; see `lexvec-loader` for the format.
//!
//! ## Scope
//!
//! This is an embedded, single-process, exact (brute-force) primitive:
//! no persistence, no concurrent mutation, no approximate indexing, and
//! cosine similarity only.

#![warn(missing_docs)]

pub mod prelude;

pub use lexvec_core::{SimilarityResult, VectorError, VectorResult, NO_MATCH_NAME};
pub use lexvec_engine::{
    cosine_similarity, normalize, VectorStore, DEFAULT_DIMENSION, EXPRESSION_BOUNDARY,
};
pub use lexvec_loader::{cut_file_name, load_path, load_path_default, load_reader, truncate_to};
