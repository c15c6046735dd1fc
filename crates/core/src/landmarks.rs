//! Turns a detector landmark sequence into the four face measurements the classifier reads.

use serde::{Deserialize, Serialize};

use crate::errors::ClassificationError;
use crate::geometry::{distance, ratio_or_infinite, LandmarkPoint, EPSILON};

/// Jaw corners.
pub const JAW_LEFT: usize = 134;
pub const JAW_RIGHT: usize = 365;
/// Forehead edges.
pub const FOREHEAD_LEFT: usize = 71;
pub const FOREHEAD_RIGHT: usize = 301;
/// Cheekbone edges.
pub const CHEEKBONE_LEFT: usize = 116;
pub const CHEEKBONE_RIGHT: usize = 345;
/// Top of forehead and bottom of chin.
pub const FOREHEAD_TOP: usize = 10;
pub const CHIN_BOTTOM: usize = 152;

/// Highest index read plus one.
pub const REQUIRED_LANDMARKS: usize = JAW_RIGHT + 1;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet(Vec<LandmarkPoint>);

impl LandmarkSet {
    pub fn new(points: Vec<LandmarkPoint>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LandmarkPoint> {
        self.0.get(index)
    }

    pub fn points(&self) -> &[LandmarkPoint] {
        &self.0
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn span(&self, from: usize, to: usize) -> f64 {
        distance(&self.0[from], &self.0[to])
    }
}

impl From<Vec<LandmarkPoint>> for LandmarkSet {
    fn from(points: Vec<LandmarkPoint>) -> Self {
        Self(points)
    }
}

impl FromIterator<LandmarkPoint> for LandmarkSet {
    fn from_iter<T: IntoIterator<Item = LandmarkPoint>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Widths and height of a face, in the same units as the landmarks.
///
/// Only constructed through [`FaceMeasurements::new`] or [`extract_measurements`], so a value
/// always has a positive forehead width and face height. Deserialization goes through the same
/// checks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurements")]
pub struct FaceMeasurements {
    jaw_width: f64,
    forehead_width: f64,
    cheekbone_width: f64,
    face_height: f64,
}

#[derive(Deserialize)]
struct RawMeasurements {
    jaw_width: f64,
    forehead_width: f64,
    cheekbone_width: f64,
    face_height: f64,
}

impl TryFrom<RawMeasurements> for FaceMeasurements {
    type Error = ClassificationError;

    fn try_from(raw: RawMeasurements) -> Result<Self, Self::Error> {
        Self::new(raw.jaw_width, raw.forehead_width, raw.cheekbone_width, raw.face_height)
    }
}

impl FaceMeasurements {
    pub fn new(
        jaw_width: f64,
        forehead_width: f64,
        cheekbone_width: f64,
        face_height: f64,
    ) -> Result<Self, ClassificationError> {
        let measurements = Self { jaw_width, forehead_width, cheekbone_width, face_height };
        measurements.validate()?;
        Ok(measurements)
    }

    pub fn jaw_width(&self) -> f64 {
        self.jaw_width
    }

    pub fn forehead_width(&self) -> f64 {
        self.forehead_width
    }

    pub fn cheekbone_width(&self) -> f64 {
        self.cheekbone_width
    }

    pub fn face_height(&self) -> f64 {
        self.face_height
    }

    fn validate(&self) -> Result<(), ClassificationError> {
        for (measurement, value) in [
            ("jaw_width", self.jaw_width),
            ("forehead_width", self.forehead_width),
            ("cheekbone_width", self.cheekbone_width),
            ("face_height", self.face_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ClassificationError::InvalidMeasurement { measurement, value });
            }
        }

        if self.forehead_width < EPSILON {
            return Err(ClassificationError::DegenerateGeometry {
                measurement: "forehead_width",
                value: self.forehead_width,
            });
        }
        if self.face_height < EPSILON {
            return Err(ClassificationError::DegenerateGeometry {
                measurement: "face_height",
                value: self.face_height,
            });
        }

        Ok(())
    }

    pub fn ratios(&self) -> FaceRatios {
        let widest = self.jaw_width.max(self.forehead_width).max(self.cheekbone_width);
        FaceRatios {
            width_to_height: widest / self.face_height,
            jaw_to_forehead: self.jaw_width / self.forehead_width,
            cheekbone_to_jaw: ratio_or_infinite(self.cheekbone_width, self.jaw_width),
        }
    }
}

/// Ratios the classifier decides on. `cheekbone_to_jaw` is `+inf` for a zero-width jaw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FaceRatios {
    pub width_to_height: f64,
    pub jaw_to_forehead: f64,
    pub cheekbone_to_jaw: f64,
}

pub fn extract_measurements(
    landmarks: &LandmarkSet,
) -> Result<FaceMeasurements, ClassificationError> {
    if landmarks.len() < REQUIRED_LANDMARKS {
        return Err(ClassificationError::MissingLandmarks {
            required: REQUIRED_LANDMARKS,
            found: landmarks.len(),
        });
    }

    FaceMeasurements::new(
        landmarks.span(JAW_LEFT, JAW_RIGHT),
        landmarks.span(FOREHEAD_LEFT, FOREHEAD_RIGHT),
        landmarks.span(CHEEKBONE_LEFT, CHEEKBONE_RIGHT),
        landmarks.span(FOREHEAD_TOP, CHIN_BOTTOM),
    )
}
