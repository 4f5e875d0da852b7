//! Synonym threshold search
//!
//! A full scan of the store retaining entries whose similarity to the query
//! strictly exceeds a threshold. O(n) scan plus O(m log m) sort over the m
//! matches.
//!
//! Tie policy: the sort is stable over the store's name-ordered scan, so
//! entries with equal scores come out in lexicographic name order.

use crate::similarity::{cosine_similarity, norm};
use crate::store::VectorStore;
use lexvec_core::{SimilarityResult, VectorError, VectorResult};

impl VectorStore {
    /// Find all entries scoring strictly above `threshold` against `query`.
    ///
    /// If `exclude` is given, that exact name is skipped regardless of its
    /// score. Stored entries with zero norm cannot score and are skipped.
    /// Results are sorted by descending score.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the query length disagrees with the store.
    /// - `DegenerateVector` if the query itself has zero norm.
    pub fn find_synonyms(
        &self,
        query: &[f32],
        threshold: f32,
        exclude: Option<&str>,
    ) -> VectorResult<Vec<SimilarityResult>> {
        self.check_query(query)?;

        let mut matches = Vec::new();
        for (name, vector) in self.iter() {
            if exclude == Some(name) {
                continue;
            }
            let score = match cosine_similarity(query, vector) {
                Ok(s) => s,
                Err(VectorError::DegenerateVector) => {
                    tracing::debug!(name, "skipping zero-norm entry in synonym scan");
                    continue;
                }
                Err(e) => return Err(e),
            };
            if score > threshold {
                matches.push(SimilarityResult::new(name, score));
            }
        }

        // Stable sort: equal scores keep scan (name) order.
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(matches)
    }

    /// Resolve `name` and find its synonyms, excluding the word itself.
    ///
    /// # Errors
    /// `UnknownName` if `name` has no entry, plus everything
    /// [`find_synonyms`](VectorStore::find_synonyms) can return.
    pub fn find_synonyms_by_word(
        &self,
        name: &str,
        threshold: f32,
    ) -> VectorResult<Vec<SimilarityResult>> {
        let query = self.resolve(name)?.to_vec();
        self.find_synonyms(&query, threshold, Some(name))
    }

    /// Shared query validation for scan-based searches.
    pub(crate) fn check_query(&self, query: &[f32]) -> VectorResult<()> {
        if query.len() != self.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                actual: query.len(),
            });
        }
        if norm(query) == 0.0 {
            return Err(VectorError::DegenerateVector);
        }
        Ok(())
    }
}
