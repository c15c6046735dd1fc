use std::path::Path;

use facecut_core::classifier::classify;
use facecut_core::{
    extract_measurements, ClassificationResult, FaceMeasurements, FaceRatios, FaceShapeProfile,
};
use serde::Serialize;

use crate::commands::{application_failure, input_failure, read_landmarks, CommandResult};

#[derive(Debug, Serialize)]
struct ClassifyReport {
    classification: ClassificationResult,
    measurements: FaceMeasurements,
    ratios: FaceRatios,
    profile: FaceShapeProfile,
}

pub fn run(landmarks_path: &Path) -> CommandResult {
    let landmarks = match read_landmarks(landmarks_path) {
        Ok(landmarks) => landmarks,
        Err(error) => return input_failure("classify", error),
    };

    let measurements = match extract_measurements(&landmarks) {
        Ok(measurements) => measurements,
        Err(error) => return application_failure("classify", error.into()),
    };

    let classification = classify(&measurements);
    let report = ClassifyReport {
        classification,
        measurements,
        ratios: measurements.ratios(),
        profile: classification.shape.profile(),
    };

    CommandResult::success_with_data(
        "classify",
        format!(
            "{} face shape ({}% confidence)",
            classification.shape,
            classification.rounded_confidence()
        ),
        &report,
    )
}
