//! End-to-end analysis: resolve a face shape, rank the catalog for it, apply the tier.

use serde::Serialize;
use tracing::info;

use crate::catalog::StyleCatalog;
use crate::classifier::{resolve_shape, ClassificationResult, ShapeInput};
use crate::config::AppConfig;
use crate::domain::FaceShapeProfile;
use crate::errors::{ApplicationError, DomainError};
use crate::recommendations::{RecommendationEngine, ScoringWeights, TieredRecommendations};

/// Everything a caller shows after one analysis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub classification: ClassificationResult,
    pub profile: FaceShapeProfile,
    pub recommendations: TieredRecommendations,
}

#[derive(Clone, Debug)]
pub struct RecommendationPipeline {
    catalog: StyleCatalog,
    engine: RecommendationEngine,
    free_limit: usize,
}

impl RecommendationPipeline {
    pub fn new(catalog: StyleCatalog, weights: ScoringWeights, free_limit: usize) -> Self {
        Self { catalog, engine: RecommendationEngine::with_weights(weights), free_limit }
    }

    /// Builds the pipeline from validated config, loading the configured catalog file if any.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let catalog = StyleCatalog::load_or_builtin(config.catalog.path.as_deref())?;
        Ok(Self::new(catalog, config.scoring, config.tiering.free_limit))
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    pub fn free_limit(&self) -> usize {
        self.free_limit
    }

    pub fn run(&self, input: &ShapeInput, is_premium: bool) -> Result<AnalysisReport, DomainError> {
        let classification = resolve_shape(input)?;
        let ranked = self.engine.generate(classification.shape, self.catalog.styles())?;
        let recommendations = TieredRecommendations::new(ranked, is_premium, self.free_limit);

        info!(
            event_name = "pipeline.analysis_completed",
            shape = classification.shape.as_str(),
            confidence = classification.rounded_confidence(),
            total = recommendations.total,
            showing = recommendations.showing,
            is_premium,
            "analysis completed"
        );

        Ok(AnalysisReport {
            profile: classification.shape.profile(),
            classification,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassificationSource;
    use crate::domain::{FaceShape, LengthCategory};
    use crate::errors::{ClassificationError, RecommendationError};
    use crate::landmarks::tests::synthetic_landmarks;
    use crate::landmarks::LandmarkSet;
    use crate::recommendations::DEFAULT_FREE_LIMIT;

    fn builtin_pipeline() -> RecommendationPipeline {
        RecommendationPipeline::new(
            StyleCatalog::builtin().expect("builtin catalog"),
            ScoringWeights::default(),
            DEFAULT_FREE_LIMIT,
        )
    }

    #[test]
    fn landmarks_flow_through_to_a_free_tier_report() {
        let landmarks = synthetic_landmarks(60.0, 75.0, 72.0, 100.0);

        let report = builtin_pipeline()
            .run(&ShapeInput::Landmarks(landmarks), false)
            .expect("analysis should succeed");

        assert_eq!(report.classification.shape, FaceShape::Oval);
        assert_eq!(report.classification.rounded_confidence(), 75);
        assert_eq!(report.profile.shape, FaceShape::Oval);
        assert_eq!(report.recommendations.total, 10);
        assert_eq!(report.recommendations.showing, 3);
        assert!(report.recommendations.has_more);
    }

    #[test]
    fn premium_callers_see_every_match() {
        let report = builtin_pipeline()
            .run(&ShapeInput::Precomputed { shape: FaceShape::Diamond, confidence: 88.0 }, true)
            .expect("analysis should succeed");

        assert_eq!(report.classification.source, ClassificationSource::Precomputed);
        assert_eq!(report.recommendations.total, 3);
        assert_eq!(report.recommendations.showing, 3);
        assert!(!report.recommendations.has_more);
        assert_eq!(report.recommendations.recommendations[0].style_id.as_str(), "buzz-cut");
    }

    #[test]
    fn missing_input_falls_back_to_oval() {
        let report =
            builtin_pipeline().run(&ShapeInput::Unavailable, false).expect("fallback analysis");

        assert_eq!(report.classification.source, ClassificationSource::Fallback);
        assert_eq!(report.classification.shape, FaceShape::Oval);
    }

    #[test]
    fn classification_failures_surface_as_domain_errors() {
        let error = builtin_pipeline()
            .run(&ShapeInput::Landmarks(LandmarkSet::default()), false)
            .expect_err("empty landmarks should fail");

        assert!(matches!(
            error,
            DomainError::Classification(ClassificationError::MissingLandmarks { found: 0, .. })
        ));
    }

    #[test]
    fn catalog_without_the_shape_reports_no_suitable_styles() {
        let only_round = crate::domain::HaircutStyle::new("crop", "Crop", LengthCategory::Short, 2)
            .expect("valid maintenance level")
            .with_face_shapes([FaceShape::Round]);
        let pipeline = RecommendationPipeline::new(
            StyleCatalog::new(vec![only_round]).expect("valid catalog"),
            ScoringWeights::default(),
            DEFAULT_FREE_LIMIT,
        );

        let error = pipeline
            .run(&ShapeInput::Precomputed { shape: FaceShape::Diamond, confidence: 80.0 }, false)
            .expect_err("no diamond styles");

        assert_eq!(
            error,
            DomainError::Recommendation(RecommendationError::NoSuitableStyles {
                shape: FaceShape::Diamond
            })
        );
    }

    #[test]
    fn from_config_honours_free_limit() {
        let mut config = AppConfig::default();
        config.tiering.free_limit = 5;

        let pipeline = RecommendationPipeline::from_config(&config).expect("builtin catalog");
        let report = pipeline
            .run(&ShapeInput::Precomputed { shape: FaceShape::Oval, confidence: 90.0 }, false)
            .expect("analysis should succeed");

        assert_eq!(pipeline.free_limit(), 5);
        assert_eq!(report.recommendations.showing, 5);
    }

    #[test]
    fn from_config_reports_unreadable_catalog() {
        let mut config = AppConfig::default();
        config.catalog.path = Some("/definitely/not/a/catalog.json".into());

        assert!(matches!(
            RecommendationPipeline::from_config(&config),
            Err(ApplicationError::Catalog(message)) if message.contains("catalog.json")
        ));
    }
}
