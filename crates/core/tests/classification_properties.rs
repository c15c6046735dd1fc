use proptest::prelude::*;

use facecut_core::classifier::{
    classify, resolve_shape, ClassificationSource, ShapeInput, CONFIDENCE_CAP,
    DEFAULT_OVAL_CONFIDENCE, ROUND_CONFIDENCE,
};
use facecut_core::{FaceMeasurements, FaceShape};

proptest! {
    #[test]
    fn pt_confidence_stays_within_branch_bounds(
        jaw in 0.0_f64..2.0,
        forehead in 0.01_f64..2.0,
        cheekbone in 0.0_f64..2.0,
        height in 0.01_f64..2.0,
    ) {
        let measurements = FaceMeasurements::new(jaw, forehead, cheekbone, height).unwrap();
        let result = classify(&measurements);

        prop_assert!((0.0..=CONFIDENCE_CAP).contains(&result.confidence));
        prop_assert_eq!(result.source, ClassificationSource::Landmarks);
        if result.shape == FaceShape::Round {
            prop_assert_eq!(result.confidence, ROUND_CONFIDENCE);
        }
    }

    #[test]
    fn pt_triangle_confidence_grows_with_jaw_width(
        forehead in 0.1_f64..0.5,
        cheekbone in 0.1_f64..0.5,
        jaw in 0.9_f64..1.5,
        widening in 0.0_f64..1.0,
    ) {
        let narrow = classify(&FaceMeasurements::new(jaw, forehead, cheekbone, 1.0).unwrap());
        let wide =
            classify(&FaceMeasurements::new(jaw + widening, forehead, cheekbone, 1.0).unwrap());

        prop_assert_eq!(narrow.shape, FaceShape::Triangle);
        prop_assert_eq!(wide.shape, FaceShape::Triangle);
        prop_assert!(wide.confidence >= narrow.confidence);
        prop_assert!(wide.confidence <= CONFIDENCE_CAP);
    }

    #[test]
    fn pt_unbalanced_mid_width_faces_default_to_oval(
        forehead in 0.5_f64..0.7,
        height in 1.0_f64..1.1,
    ) {
        // jaw/forehead of 0.8 is outside the balanced band; width/height stays in [0.7, 0.8].
        let jaw = forehead * 0.8;
        let cheekbone = 0.75 * height;
        let result = classify(&FaceMeasurements::new(jaw, forehead, cheekbone, height).unwrap());

        prop_assert_eq!(result.shape, FaceShape::Oval);
        prop_assert_eq!(result.confidence, DEFAULT_OVAL_CONFIDENCE);
    }

    #[test]
    fn pt_precomputed_confidence_is_accepted_only_as_a_percentage(
        confidence in -50.0_f64..150.0,
    ) {
        let resolved =
            resolve_shape(&ShapeInput::Precomputed { shape: FaceShape::Heart, confidence });

        prop_assert_eq!(resolved.is_ok(), (0.0..=100.0).contains(&confidence));
    }
}

#[test]
fn wide_face_with_heavy_jaw_is_triangle() {
    let result = classify(&FaceMeasurements::new(95.0, 80.0, 85.0, 100.0).unwrap());

    assert_eq!(result.shape, FaceShape::Triangle);
    assert_eq!(result.rounded_confidence(), 71);
}

#[test]
fn medium_face_with_narrow_jaw_is_default_oval() {
    let result = classify(&FaceMeasurements::new(60.0, 75.0, 72.0, 100.0).unwrap());

    assert_eq!(result.shape, FaceShape::Oval);
    assert_eq!(result.confidence, DEFAULT_OVAL_CONFIDENCE);
}

#[test]
fn reference_square_face() {
    let result = classify(&FaceMeasurements::new(70.0, 69.0, 65.0, 100.0).unwrap());

    assert_eq!(result.shape, FaceShape::Square);
    assert!((result.confidence - 79.855).abs() < 0.01);
    assert_eq!(result.rounded_confidence(), 80);
}
