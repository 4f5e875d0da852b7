//! Convenient imports for Lexvec.
//!
//! ```
//! use lexvecdb::prelude::*;
//!
//! let store = VectorStore::new(3);
//! assert!(store.is_empty());
//! ```

// Store and similarity math
pub use lexvec_engine::{cosine_similarity, normalize, VectorStore, DEFAULT_DIMENSION};

// Query result types and errors
pub use lexvec_core::{SimilarityResult, VectorError, VectorResult};

// Loading
pub use lexvec_loader::{load_path, load_path_default, load_reader};

// Re-export serde_json for convenience when serializing results
pub use serde_json::json;
