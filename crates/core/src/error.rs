//! Error types for vector operations
//!
//! One enum covers the whole engine surface. The core never prints or
//! swallows a structural failure; callers at the boundary (the CLI) decide
//! presentation.
//!
//! Two behaviours that look like missing error paths are deliberate and
//! documented where they live:
//! - `to_matrix` renders unknown names as all-zero rows (alignment over
//!   failure),
//! - `find_similar` pads short stores with sentinel entries.

use thiserror::Error;

/// Errors from vector storage, queries, and loading.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Vector length disagrees with the store's configured dimension.
    /// The insert (or query) is rejected; the store is unchanged.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension configured on the store
        expected: usize,
        /// Length of the offending vector
        actual: usize,
    },

    /// A name that must resolve to proceed has no entry.
    ///
    /// Plain lookups (`get`) report absence with `Option`; this error is for
    /// operations that cannot continue without the vector (expression
    /// evaluation, synonym-by-word).
    #[error("unknown name: {name}")]
    UnknownName {
        /// The name that failed to resolve
        name: String,
    },

    /// Malformed operator/operand sequence in an expression.
    #[error("invalid expression: {reason}")]
    InvalidExpression {
        /// What was wrong with the token sequence
        reason: String,
    },

    /// A zero-norm vector was supplied where a direction is required.
    ///
    /// Cosine similarity and normalization both divide by the norm; rather
    /// than produce NaN we surface this explicitly.
    #[error("degenerate vector: zero norm")]
    DegenerateVector,

    /// Loader-level parse failure (non-numeric component, wrong row width).
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the source file
        line: usize,
        /// Parse failure detail
        reason: String,
    },

    /// I/O failure while reading a vector file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for vector operations.
pub type VectorResult<T> = std::result::Result<T, VectorError>;

impl VectorError {
    /// True for the error kinds a loader caller can fix by editing the file.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            VectorError::MalformedRecord { .. } | VectorError::DimensionMismatch { .. }
        )
    }

    /// True when a requested name was simply absent.
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, VectorError::UnknownName { .. })
    }
}
