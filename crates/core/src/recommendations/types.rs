use serde::{Deserialize, Serialize};

use crate::domain::StyleId;

/// One ranked, explained entry. `position` is 1-based and only meaningful within the list
/// it was ranked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationScore {
    pub style_id: StyleId,
    /// Relevance (0 - 100)
    pub relevance_score: f64,
    pub position: usize,
    pub explanation: String,
}
