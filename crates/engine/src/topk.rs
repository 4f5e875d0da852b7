//! Bounded top-k selection
//!
//! `find_similar` returns exactly k entries, descending by score. The
//! selection behaves as if a buffer of k sentinel slots (name `"-"`, score
//! 0.0) were maintained and a scanned entry replaced the worst slot whenever
//! it scored strictly greater. Two consequences worth spelling out:
//!
//! - an entry must beat 0.0 to occupy even an empty slot, so zero and
//!   negative similarities never appear in the result;
//! - the strictly-greater trigger means a later entry never displaces a
//!   resident with an equal score — first seen (in name order, the store's
//!   scan order) wins a tie.
//!
//! The buffer is implemented as a bounded binary heap that pops the worst
//! resident (lowest score, latest-seen among equals), which keeps the
//! externally observable behaviour above at O(n log k) instead of the
//! naive re-sort-per-insert.

use crate::similarity::cosine_similarity;
use crate::store::VectorStore;
use lexvec_core::{SimilarityResult, VectorError, VectorResult};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap resident: scored entry plus its scan sequence number.
struct Slot {
    score: f32,
    seq: usize,
    name: String,
}

/// Ordered so the heap's maximum is the eviction candidate: lowest score
/// first, and among equal scores the latest-seen entry.
impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slot {}

impl VectorStore {
    /// Return the k entries most similar to `query`, descending by score.
    ///
    /// Always returns exactly `k` results; when fewer than `k` entries score
    /// above zero, the tail is padded with
    /// [`SimilarityResult::no_match`] sentinels. Zero-norm entries are
    /// skipped, as in the synonym scan.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the query length disagrees with the store.
    /// - `DegenerateVector` if the query itself has zero norm.
    pub fn find_similar(&self, query: &[f32], k: usize) -> VectorResult<Vec<SimilarityResult>> {
        self.check_query(query)?;

        let mut heap: BinaryHeap<Slot> = BinaryHeap::with_capacity(k + 1);
        for (seq, (name, vector)) in self.iter().enumerate() {
            let score = match cosine_similarity(query, vector) {
                Ok(s) => s,
                Err(VectorError::DegenerateVector) => {
                    tracing::debug!(name, "skipping zero-norm entry in top-k scan");
                    continue;
                }
                Err(e) => return Err(e),
            };
            // Worst slot is a 0.0 sentinel until k real entries are held.
            let worst = if heap.len() < k {
                0.0
            } else {
                match heap.peek() {
                    Some(slot) => slot.score,
                    None => break, // k == 0
                }
            };
            if score > worst {
                heap.push(Slot {
                    score,
                    seq,
                    name: name.to_string(),
                });
                if heap.len() > k {
                    heap.pop();
                }
            }
        }

        let mut slots: Vec<Slot> = heap.into_vec();
        slots.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.seq.cmp(&b.seq)));

        let mut results: Vec<SimilarityResult> = slots
            .into_iter()
            .map(|s| SimilarityResult::new(s.name, s.score))
            .collect();
        results.resize_with(k, SimilarityResult::no_match);
        Ok(results)
    }
}
