//! Recommendation engine: filter, score, explain, rank

use tracing::{debug, info};

use super::explanation::explain;
use super::scoring::{ScoreCalculator, ScoringWeights};
use super::types::RecommendationScore;
use super::RecommendationResult;
use crate::domain::{FaceShape, HaircutStyle};
use crate::errors::RecommendationError;

/// Ranks a style catalog for one face shape.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    calculator: ScoreCalculator,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { calculator: ScoreCalculator::with_weights(weights) }
    }

    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    /// Every style listing `shape`, ordered by descending relevance.
    ///
    /// The sort is stable: equal scores keep their catalog order. Positions run `1..=N`.
    pub fn generate(
        &self,
        shape: FaceShape,
        catalog: &[HaircutStyle],
    ) -> RecommendationResult<Vec<RecommendationScore>> {
        let mut ranked: Vec<RecommendationScore> = catalog
            .iter()
            .filter(|style| style.suits(shape))
            .map(|style| RecommendationScore {
                style_id: style.id.clone(),
                relevance_score: self.calculator.score(style, shape),
                position: 0,
                explanation: explain(style, shape),
            })
            .collect();

        if ranked.is_empty() {
            debug!(
                event_name = "recommendations.no_suitable_styles",
                shape = shape.as_str(),
                catalog_size = catalog.len(),
                "catalog has no style for face shape"
            );
            return Err(RecommendationError::NoSuitableStyles { shape });
        }

        ranked.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

        for (index, recommendation) in ranked.iter_mut().enumerate() {
            recommendation.position = index + 1;
        }

        info!(
            event_name = "recommendations.ranked",
            shape = shape.as_str(),
            catalog_size = catalog.len(),
            ranked = ranked.len(),
            top_style = ranked[0].style_id.as_str(),
            "recommendations ranked"
        );

        Ok(ranked)
    }
}

/// Ranks with the default weights.
pub fn generate_recommendations(
    shape: FaceShape,
    catalog: &[HaircutStyle],
) -> RecommendationResult<Vec<RecommendationScore>> {
    RecommendationEngine::new().generate(shape, catalog)
}
