use std::path::PathBuf;

use facecut_core::config::{ConfigOverrides, LoadOptions};
use facecut_core::{FaceShape, RecommendationPipeline, ShapeInput};

use crate::commands::{
    application_failure, domain_failure, input_failure, load_config, read_landmarks,
    CommandResult,
};

/// Confidence assumed for a `--shape` given without `--confidence`.
pub const DEFAULT_SUPPLIED_CONFIDENCE: f64 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct RecommendArgs {
    pub landmarks: Option<PathBuf>,
    pub shape: Option<FaceShape>,
    pub confidence: Option<f64>,
    pub premium: bool,
    pub catalog: Option<PathBuf>,
}

pub fn run(args: RecommendArgs) -> CommandResult {
    let options = LoadOptions {
        overrides: ConfigOverrides { catalog_path: args.catalog, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    };
    let config = match load_config("recommend", options) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let input = match (args.landmarks, args.shape) {
        (Some(path), _) => match read_landmarks(&path) {
            Ok(landmarks) => ShapeInput::Landmarks(landmarks),
            Err(error) => return input_failure("recommend", error),
        },
        (None, Some(shape)) => ShapeInput::Precomputed {
            shape,
            confidence: args.confidence.unwrap_or(DEFAULT_SUPPLIED_CONFIDENCE),
        },
        (None, None) => ShapeInput::Unavailable,
    };

    let pipeline = match RecommendationPipeline::from_config(&config) {
        Ok(pipeline) => pipeline,
        Err(error) => return application_failure("recommend", error),
    };

    match pipeline.run(&input, args.premium) {
        Ok(report) => {
            let tiered = &report.recommendations;
            let message = if tiered.has_more {
                format!(
                    "showing {} of {} styles for a {} face; upgrade to premium to see the rest",
                    tiered.showing, tiered.total, report.classification.shape
                )
            } else {
                format!(
                    "showing {} of {} styles for a {} face",
                    tiered.showing, tiered.total, report.classification.shape
                )
            };
            CommandResult::success_with_data("recommend", message, &report)
        }
        Err(error) => domain_failure("recommend", error),
    }
}
