//! Free/premium visibility. Always applied to an already-ranked list.

use serde::{Deserialize, Serialize};

use super::types::RecommendationScore;
use super::DEFAULT_FREE_LIMIT;

/// Free callers see the first [`DEFAULT_FREE_LIMIT`] entries; premium callers see everything.
pub fn apply_tier(ranked: &[RecommendationScore], is_premium: bool) -> Vec<RecommendationScore> {
    apply_tier_with_limit(ranked, is_premium, DEFAULT_FREE_LIMIT)
}

pub fn apply_tier_with_limit(
    ranked: &[RecommendationScore],
    is_premium: bool,
    free_limit: usize,
) -> Vec<RecommendationScore> {
    let visible = if is_premium { ranked.len() } else { free_limit.min(ranked.len()) };
    ranked[..visible].to_vec()
}

/// A tiered list plus the counts a caller needs to prompt for an upgrade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredRecommendations {
    pub recommendations: Vec<RecommendationScore>,
    pub total: usize,
    pub showing: usize,
    pub is_premium: bool,
    pub has_more: bool,
}

impl TieredRecommendations {
    pub fn new(ranked: Vec<RecommendationScore>, is_premium: bool, free_limit: usize) -> Self {
        let total = ranked.len();
        let mut recommendations = ranked;
        if !is_premium {
            recommendations.truncate(free_limit);
        }
        let showing = recommendations.len();

        Self { recommendations, total, showing, is_premium, has_more: total > showing }
    }
}
