//! Result types for similarity queries
//!
//! These types define the shape of search results. The scoring and ranking
//! logic lives in the engine crate.

use serde::{Deserialize, Serialize};

/// Placeholder name for an unfilled top-k slot.
pub const NO_MATCH_NAME: &str = "-";

/// One scored entry from a similarity query.
///
/// Score is cosine similarity, "higher = more similar", in [-1, 1] for
/// non-degenerate inputs. Produced per query and not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Name of the matched entry
    pub name: String,

    /// Cosine similarity against the query vector
    pub score: f32,
}

impl SimilarityResult {
    /// Create a new scored result.
    pub fn new(name: impl Into<String>, score: f32) -> Self {
        SimilarityResult {
            name: name.into(),
            score,
        }
    }

    /// Sentinel entry for a top-k slot nothing qualified for.
    ///
    /// Carries the placeholder name and a score of zero, which is also the
    /// bar a real entry has to clear to occupy a slot.
    pub fn no_match() -> Self {
        SimilarityResult {
            name: NO_MATCH_NAME.to_string(),
            score: 0.0,
        }
    }

    /// True if this is the sentinel produced by [`SimilarityResult::no_match`].
    pub fn is_no_match(&self) -> bool {
        self.name == NO_MATCH_NAME && self.score == 0.0
    }
}

impl std::fmt::Display for SimilarityResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {:.2}", self.name, self.score)
    }
}
