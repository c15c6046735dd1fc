//! Threshold decision tree mapping face ratios to a [`FaceShape`] with a confidence score.
//!
//! The rules are deliberately simple and auditable; they are not a trained model.

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::domain::FaceShape;
use crate::errors::ClassificationError;
use crate::landmarks::{extract_measurements, FaceMeasurements, LandmarkSet};

/// Above this width/height ratio the face reads as wide.
pub const WIDE_FACE_RATIO: f64 = 0.8;
/// Below this width/height ratio the face reads as long.
pub const LONG_FACE_RATIO: f64 = 0.7;
/// Jaw clearly wider than forehead.
pub const JAW_DOMINANT_RATIO: f64 = 1.1;
/// Forehead clearly wider than jaw.
pub const FOREHEAD_DOMINANT_RATIO: f64 = 0.9;
/// Cheekbones clearly wider than jaw.
pub const CHEEKBONE_DOMINANT_RATIO: f64 = 1.1;
/// Open interval in which jaw and forehead count as equal.
pub const BALANCED_RATIO_RANGE: (f64, f64) = (0.95, 1.05);

pub const CONFIDENCE_BASE: f64 = 70.0;
pub const CONFIDENCE_SLOPE: f64 = 10.0;
pub const CONFIDENCE_CAP: f64 = 95.0;
pub const ROUND_CONFIDENCE: f64 = 70.0;
pub const DEFAULT_OVAL_CONFIDENCE: f64 = 75.0;
pub const FALLBACK_CONFIDENCE: f64 = 70.0;

/// Where a classification came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    Landmarks,
    Precomputed,
    Fallback,
}

/// Confidence is kept at full precision; the serialized form is the rounded integer percentage,
/// so results are written out but never read back.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub shape: FaceShape,
    #[serde(serialize_with = "serialize_rounded")]
    pub confidence: f64,
    pub source: ClassificationSource,
}

impl ClassificationResult {
    pub fn rounded_confidence(&self) -> u8 {
        round_percentage(self.confidence)
    }
}

fn round_percentage(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(round_percentage(*value))
}

/// What the caller knows about the face before ranking.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeInput {
    /// Raw detector output to classify here.
    Landmarks(LandmarkSet),
    /// A shape already decided by a client-side detector.
    Precomputed { shape: FaceShape, confidence: f64 },
    /// No detector output at all.
    Unavailable,
}

pub fn classify(measurements: &FaceMeasurements) -> ClassificationResult {
    let ratios = measurements.ratios();
    let jaw_to_forehead = ratios.jaw_to_forehead;
    let (balanced_low, balanced_high) = BALANCED_RATIO_RANGE;
    let balanced = jaw_to_forehead > balanced_low && jaw_to_forehead < balanced_high;

    let (shape, confidence) = if ratios.width_to_height > WIDE_FACE_RATIO {
        if jaw_to_forehead > JAW_DOMINANT_RATIO {
            (FaceShape::Triangle, biased_confidence(jaw_to_forehead - JAW_DOMINANT_RATIO))
        } else if jaw_to_forehead < FOREHEAD_DOMINANT_RATIO {
            (FaceShape::Heart, biased_confidence(FOREHEAD_DOMINANT_RATIO - jaw_to_forehead))
        } else if ratios.cheekbone_to_jaw.is_finite()
            && ratios.cheekbone_to_jaw > CHEEKBONE_DOMINANT_RATIO
        {
            (
                FaceShape::Diamond,
                biased_confidence(ratios.cheekbone_to_jaw - CHEEKBONE_DOMINANT_RATIO),
            )
        } else {
            (FaceShape::Round, ROUND_CONFIDENCE)
        }
    } else if ratios.width_to_height < LONG_FACE_RATIO {
        if balanced {
            (FaceShape::Rectangle, biased_confidence(1.0 - (jaw_to_forehead - 1.0).abs()))
        } else {
            (FaceShape::Oval, DEFAULT_OVAL_CONFIDENCE)
        }
    } else if balanced {
        (FaceShape::Square, biased_confidence(1.0 - (jaw_to_forehead - 1.0).abs()))
    } else {
        (FaceShape::Oval, DEFAULT_OVAL_CONFIDENCE)
    };

    debug!(
        event_name = "classifier.decided",
        shape = shape.as_str(),
        confidence,
        width_to_height = ratios.width_to_height,
        jaw_to_forehead,
        cheekbone_to_jaw = ratios.cheekbone_to_jaw,
        "face shape classified"
    );

    ClassificationResult { shape, confidence, source: ClassificationSource::Landmarks }
}

pub fn classify_landmarks(
    landmarks: &LandmarkSet,
) -> Result<ClassificationResult, ClassificationError> {
    let measurements = extract_measurements(landmarks)?;
    Ok(classify(&measurements))
}

/// Accepts a shape decided elsewhere, checking only that its confidence is a percentage.
pub fn precomputed(
    shape: FaceShape,
    confidence: f64,
) -> Result<ClassificationResult, ClassificationError> {
    if !(0.0..=100.0).contains(&confidence) {
        return Err(ClassificationError::InvalidConfidence(confidence));
    }
    Ok(ClassificationResult { shape, confidence, source: ClassificationSource::Precomputed })
}

/// Result used when no classification is available at all: oval at 70%.
pub fn unclassified_fallback() -> ClassificationResult {
    ClassificationResult {
        shape: FaceShape::Oval,
        confidence: FALLBACK_CONFIDENCE,
        source: ClassificationSource::Fallback,
    }
}

pub fn resolve_shape(input: &ShapeInput) -> Result<ClassificationResult, ClassificationError> {
    match input {
        ShapeInput::Landmarks(landmarks) => classify_landmarks(landmarks),
        ShapeInput::Precomputed { shape, confidence } => precomputed(*shape, *confidence),
        ShapeInput::Unavailable => {
            debug!(event_name = "classifier.fallback", "no classification supplied, using fallback");
            Ok(unclassified_fallback())
        }
    }
}

fn biased_confidence(bonus: f64) -> f64 {
    (CONFIDENCE_BASE + CONFIDENCE_SLOPE * bonus).clamp(0.0, CONFIDENCE_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::tests::synthetic_landmarks;

    fn measurements(jaw: f64, forehead: f64, cheekbone: f64, height: f64) -> FaceMeasurements {
        FaceMeasurements::new(jaw, forehead, cheekbone, height).expect("valid measurements")
    }

    #[test]
    fn medium_face_with_unbalanced_jaw_is_default_oval() {
        let result = classify(&measurements(60.0, 75.0, 72.0, 100.0));

        assert_eq!(result.shape, FaceShape::Oval);
        assert_eq!(result.confidence, 75.0);
    }

    #[test]
    fn jaw_width_above_the_wide_threshold_is_not_medium() {
        // 95 / 100 reads as wide, and a 1.1875 jaw/forehead ratio makes it a triangle.
        let result = classify(&measurements(95.0, 80.0, 85.0, 100.0));

        assert_eq!(result.shape, FaceShape::Triangle);
        assert!((result.confidence - 70.875).abs() < 1e-9);
        assert_eq!(result.rounded_confidence(), 71);
    }

    #[test]
    fn width_ratio_of_exactly_point_seven_is_medium() {
        let result = classify(&measurements(70.0, 69.0, 65.0, 100.0));

        assert_eq!(result.shape, FaceShape::Square);
        let expected = 70.0 + 10.0 * (1.0 - (70.0_f64 / 69.0 - 1.0).abs());
        assert!((result.confidence - expected).abs() < 1e-9);
        assert!((result.confidence - 79.86).abs() < 0.01);
        assert_eq!(result.rounded_confidence(), 80);
    }

    #[test]
    fn wide_face_with_dominant_jaw_is_triangle() {
        let result = classify(&measurements(96.0, 80.0, 85.0, 100.0));

        assert_eq!(result.shape, FaceShape::Triangle);
        assert!((result.confidence - 71.0).abs() < 1e-9);
    }

    #[test]
    fn wide_face_with_dominant_forehead_is_heart() {
        let result = classify(&measurements(70.0, 90.0, 85.0, 100.0));

        assert_eq!(result.shape, FaceShape::Heart);
        let expected = 70.0 + 10.0 * (0.9 - 70.0 / 90.0);
        assert!((result.confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn wide_face_with_dominant_cheekbones_is_diamond() {
        let result = classify(&measurements(80.0, 80.0, 100.0, 100.0));

        assert_eq!(result.shape, FaceShape::Diamond);
        assert!((result.confidence - 71.5).abs() < 1e-9);
    }

    #[test]
    fn wide_balanced_face_is_round() {
        let result = classify(&measurements(85.0, 85.0, 88.0, 100.0));

        assert_eq!(result.shape, FaceShape::Round);
        assert_eq!(result.confidence, 70.0);
    }

    #[test]
    fn long_balanced_face_is_rectangle() {
        let result = classify(&measurements(60.0, 60.0, 62.0, 100.0));

        assert_eq!(result.shape, FaceShape::Rectangle);
        assert!((result.confidence - 80.0).abs() < 1e-9);
    }

    #[test]
    fn long_unbalanced_face_is_oval() {
        let result = classify(&measurements(50.0, 62.0, 64.0, 100.0));

        assert_eq!(result.shape, FaceShape::Oval);
        assert_eq!(result.confidence, 75.0);
    }

    #[test]
    fn extreme_ratios_are_capped() {
        let triangle = classify(&measurements(400.0, 80.0, 85.0, 100.0));
        assert_eq!(triangle.shape, FaceShape::Triangle);
        assert_eq!(triangle.confidence, CONFIDENCE_CAP);

        let heart = classify(&measurements(0.0, 90.0, 85.0, 100.0));
        assert_eq!(heart.shape, FaceShape::Heart);
        assert!((heart.confidence - 79.0).abs() < 1e-9);
    }

    #[test]
    fn landmark_input_runs_the_full_extraction() {
        let landmarks = synthetic_landmarks(0.30, 0.30, 0.31, 0.60);
        let result = classify_landmarks(&landmarks).expect("classification");

        assert_eq!(result.shape, FaceShape::Rectangle);
        assert_eq!(result.source, ClassificationSource::Landmarks);
    }

    #[test]
    fn fallback_is_oval_at_seventy() {
        let fallback = resolve_shape(&ShapeInput::Unavailable).expect("fallback never fails");

        assert_eq!(fallback.shape, FaceShape::Oval);
        assert_eq!(fallback.confidence, 70.0);
        assert_eq!(fallback.source, ClassificationSource::Fallback);
    }

    #[test]
    fn precomputed_input_skips_classification() {
        let result = resolve_shape(&ShapeInput::Precomputed {
            shape: FaceShape::Heart,
            confidence: 88.4,
        })
        .expect("valid precomputed input");

        assert_eq!(result.shape, FaceShape::Heart);
        assert_eq!(result.source, ClassificationSource::Precomputed);
        assert_eq!(result.rounded_confidence(), 88);

        assert_eq!(
            precomputed(FaceShape::Heart, 140.0),
            Err(ClassificationError::InvalidConfidence(140.0))
        );
    }

    #[test]
    fn missing_landmarks_are_not_silently_defaulted() {
        let result = resolve_shape(&ShapeInput::Landmarks(LandmarkSet::default()));

        assert!(matches!(result, Err(ClassificationError::MissingLandmarks { found: 0, .. })));
    }

    #[test]
    fn serialized_fractional_confidence_rounds_half_up() {
        let result = classify(&measurements(95.0, 80.0, 85.0, 100.0));
        let json = serde_json::to_value(result).expect("serialize");

        assert_eq!(json["confidence"], 71);
        assert_eq!(json["shape"], "triangle");
    }

    #[test]
    fn serialized_confidence_is_rounded() {
        let result = classify(&measurements(70.0, 69.0, 65.0, 100.0));
        let json = serde_json::to_value(result).expect("serialize");

        assert_eq!(json["shape"], "square");
        assert_eq!(json["confidence"], 80);
        assert!(json["confidence"].is_u64(), "confidence should be an integer: {json}");
        assert_eq!(json["source"], "landmarks");
    }
}
