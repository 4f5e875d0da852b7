//! VectorStore: name → embedding association
//!
//! ## Design
//!
//! The store is a `BTreeMap<String, Vec<f32>>` with a dimension fixed at
//! construction. BTreeMap gives deterministic iteration order (name order),
//! which is what pins down the tie-break behaviour of every scan built on
//! top of it.
//!
//! ## Mutability
//!
//! `add` is the only mutating operation. The intended lifecycle is: populate
//! once (loader or direct inserts), then treat as read-only for query
//! traffic. Nothing prevents later inserts, but the store offers no snapshot
//! isolation; callers that need concurrent loading and querying must
//! synchronize externally.

use lexvec_core::{VectorError, VectorResult};
use std::collections::BTreeMap;

/// Dimension used when none is configured, matching the common 300-d
/// pre-trained embedding files.
pub const DEFAULT_DIMENSION: usize = 300;

/// In-memory mapping from name to fixed-dimension embedding.
///
/// Every stored vector has exactly `dimension` components; violating
/// inserts are rejected and leave the store unchanged.
///
/// # Example
///
/// ```
/// use lexvec_engine::VectorStore;
///
/// let mut store = VectorStore::new(3);
/// store.add("money", vec![0.0, 0.0, 3.0])?;
/// assert_eq!(store.get("money"), Some(&[0.0, 0.0, 3.0][..]));
/// assert_eq!(store.get("missing"), None);
/// # Ok::<(), lexvec_core::VectorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct VectorStore {
    /// CRITICAL: BTreeMap for deterministic iteration order
    entries: BTreeMap<String, Vec<f32>>,
    dimension: usize,
}

impl VectorStore {
    /// Create an empty store with a fixed dimension.
    pub fn new(dimension: usize) -> Self {
        VectorStore {
            entries: BTreeMap::new(),
            dimension,
        }
    }

    /// The dimension every stored vector must have.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Associate `name` with `vector`, overwriting any prior association.
    ///
    /// # Errors
    /// `DimensionMismatch` if `vector.len() != self.dimension()`; the store
    /// is left unchanged.
    pub fn add(&mut self, name: impl Into<String>, vector: Vec<f32>) -> VectorResult<()> {
        if vector.len() != self.dimension {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        self.entries.insert(name.into(), vector);
        Ok(())
    }

    /// Look up a vector by name. Absence is not an error.
    pub fn get(&self, name: &str) -> Option<&[f32]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Resolve a name that the caller cannot proceed without.
    ///
    /// # Errors
    /// `UnknownName` if `name` has no entry.
    pub fn resolve(&self, name: &str) -> VectorResult<&[f32]> {
        self.get(name).ok_or_else(|| VectorError::UnknownName {
            name: name.to_string(),
        })
    }

    /// Check whether a name is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over all entries in name order.
    ///
    /// The iterator is lazy, finite, and restartable; every scan-based query
    /// in this crate is built on it.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Build a matrix with one row per requested name, in the given order.
    ///
    /// Unknown names yield all-zero rows rather than failing the call. This
    /// keeps row alignment for downstream consumers that pair rows back up
    /// with the input names; it is a deliberate permissiveness policy, not a
    /// missing error path.
    pub fn to_matrix<S: AsRef<str>>(&self, names: &[S]) -> Vec<Vec<f32>> {
        names
            .iter()
            .map(|name| match self.get(name.as_ref()) {
                Some(v) => v.to_vec(),
                None => vec![0.0; self.dimension],
            })
            .collect()
    }
}

impl Default for VectorStore {
    fn default() -> Self {
        VectorStore::new(DEFAULT_DIMENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_retrieve() {
        let mut store = VectorStore::new(3);
        store.add("name", vec![0.0, 3.0, 1.0]).unwrap();

        assert_eq!(store.get("name"), Some(&[0.0, 3.0, 1.0][..]));
        assert_eq!(store.get("missing"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_overwrites_prior_association() {
        let mut store = VectorStore::new(2);
        store.add("w", vec![1.0, 0.0]).unwrap();
        store.add("w", vec![0.0, 1.0]).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("w"), Some(&[0.0, 1.0][..]));
    }

    #[test]
    fn wrong_dimension_rejected_store_unchanged() {
        let mut store = VectorStore::new(5);
        let result = store.add("name", vec![0.0, 3.0, 1.0]);

        assert!(matches!(
            result,
            Err(VectorError::DimensionMismatch {
                expected: 5,
                actual: 3
            })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn resolve_unknown_name_errors() {
        let store = VectorStore::new(2);
        let result = store.resolve("ghost");
        assert!(matches!(result, Err(VectorError::UnknownName { name }) if name == "ghost"));
    }

    #[test]
    fn iteration_is_name_ordered_and_restartable() {
        let mut store = VectorStore::new(1);
        store.add("b", vec![2.0]).unwrap();
        store.add("a", vec![1.0]).unwrap();
        store.add("c", vec![3.0]).unwrap();

        let names: Vec<&str> = store.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        // Restartable: a second pass sees the same sequence.
        let again: Vec<&str> = store.iter().map(|(n, _)| n).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn to_matrix_preserves_order_and_zero_fills() {
        let mut store = VectorStore::new(3);
        store.add("zero", vec![0.0, 0.0, 0.0]).unwrap();
        store.add("one", vec![1.0, 1.0, 1.0]).unwrap();
        store.add("two", vec![2.0, 2.0, 2.0]).unwrap();
        store.add("mixed", vec![7.0, 1.0, 7.0]).unwrap();

        let matrix = store.to_matrix(&["zero", "mixed", "two", "one"]);
        assert_eq!(
            matrix,
            vec![
                vec![0.0, 0.0, 0.0],
                vec![7.0, 1.0, 7.0],
                vec![2.0, 2.0, 2.0],
                vec![1.0, 1.0, 1.0],
            ]
        );

        let with_unknown = store.to_matrix(&["one", "nope"]);
        assert_eq!(with_unknown[0], vec![1.0, 1.0, 1.0]);
        assert_eq!(with_unknown[1], vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn default_dimension_is_300() {
        let store = VectorStore::default();
        assert_eq!(store.dimension(), 300);
    }
}
