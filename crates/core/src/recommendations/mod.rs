//! Hairstyle relevance scoring, ranking and visibility tiering.
//!
//! Scores are deterministic: base score plus one shape-fit bonus plus a maintenance
//! adjustment, capped at [`MAX_RELEVANCE_SCORE`]. Ranking is a stable sort, so catalog
//! order breaks ties.

mod engine;
mod explanation;
mod scoring;
mod tier;
mod types;

pub use engine::{generate_recommendations, RecommendationEngine};
pub use explanation::{explain, maintenance_note, shape_rationale, MaintenanceTier};
pub use scoring::{score_style, ScoreCalculator, ScoringWeights};
pub use tier::{apply_tier, apply_tier_with_limit, TieredRecommendations};
pub use types::RecommendationScore;

use crate::errors::RecommendationError;

/// Result type for recommendation operations
pub type RecommendationResult<T> = Result<T, RecommendationError>;

/// Default scoring weights
pub const DEFAULT_WEIGHTS: ScoringWeights =
    ScoringWeights { base: 70.0, shape_bonus: 10.0, length_bonus: 5.0, maintenance_step: 2.0 };

/// Upper bound of every relevance score
pub const MAX_RELEVANCE_SCORE: f64 = 100.0;

/// Entries visible to callers without premium access
pub const DEFAULT_FREE_LIMIT: usize = 3;
