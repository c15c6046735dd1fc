pub mod catalog;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod errors;
pub mod geometry;
pub mod landmarks;
pub mod pipeline;
pub mod recommendations;

pub use catalog::{CatalogError, PageRequest, StyleCatalog, StyleFilter, StyleOrder, StylePage};
pub use classifier::{
    classify, classify_landmarks, precomputed, resolve_shape, unclassified_fallback,
    ClassificationResult, ClassificationSource, ShapeInput,
};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::{
    FaceShape, FaceShapeProfile, Gender, HairType, HaircutStyle, LengthCategory,
    MaintenanceLevel, StyleAttributes, StyleId, StyleLevel,
};
pub use errors::{
    ApplicationError, ClassificationError, DomainError, InterfaceError, RecommendationError,
};
pub use landmarks::{extract_measurements, FaceMeasurements, FaceRatios, LandmarkSet};
pub use pipeline::{AnalysisReport, RecommendationPipeline};
pub use recommendations::{
    apply_tier, generate_recommendations, score_style, RecommendationEngine,
    RecommendationScore, ScoringWeights, TieredRecommendations,
};
