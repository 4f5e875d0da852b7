//! Cosine similarity and normalization
//!
//! Scores follow the "higher = more similar" contract: cosine similarity is
//! in [-1, 1] for non-degenerate inputs, 1 for parallel vectors, -1 for
//! opposed ones.
//!
//! Zero-norm policy: dividing by a zero norm would produce NaN, which then
//! poisons every comparison downstream. Both functions here surface
//! `DegenerateVector` instead. How scans treat degenerate *stored* entries
//! is decided by the scan (see `synonyms` and `topk`), not here.

use lexvec_core::{VectorError, VectorResult};

/// Cosine similarity: dot(a, b) / (‖a‖ · ‖b‖).
///
/// # Errors
/// - `DimensionMismatch` if the inputs differ in length.
/// - `DegenerateVector` if either input has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> VectorResult<f32> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return Err(VectorError::DegenerateVector);
    }
    Ok(dot(a, b) / denom)
}

/// Scale a vector to unit length: v / ‖v‖.
///
/// # Errors
/// `DegenerateVector` if `v` has zero norm.
pub fn normalize(v: &[f32]) -> VectorResult<Vec<f32>> {
    let n = norm(v);
    if n == 0.0 {
        return Err(VectorError::DegenerateVector);
    }
    Ok(v.iter().map(|x| x / n).collect())
}

/// Dot product of two equal-length vectors.
pub(crate) fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean (L2) norm.
pub(crate) fn norm(v: &[f32]) -> f32 {
    dot(v, v).sqrt()
}
