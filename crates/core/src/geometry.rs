//! Distance and ratio helpers over detector landmark points.

use serde::{Deserialize, Serialize};

/// Widths or heights below this value are treated as zero.
pub const EPSILON: f64 = 1e-6;

/// A single detector landmark in normalized image space.
///
/// Accepts `[x, y]`, `[x, y, z]` or `{"x": .., "y": .., "z": ..}` on input and
/// always serializes as an object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl LandmarkPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn with_depth(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Seq(Vec<f64>),
    Map {
        x: f64,
        y: f64,
        #[serde(default)]
        z: Option<f64>,
    },
}

impl TryFrom<RawPoint> for LandmarkPoint {
    type Error = String;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        match raw {
            RawPoint::Seq(values) => match values.as_slice() {
                [x, y] => Ok(Self::new(*x, *y)),
                [x, y, z] => Ok(Self::with_depth(*x, *y, *z)),
                other => Err(format!(
                    "landmark point must have 2 or 3 coordinates, got {}",
                    other.len()
                )),
            },
            RawPoint::Map { x, y, z } => Ok(Self { x, y, z }),
        }
    }
}

/// Planar Euclidean distance; depth is ignored.
pub fn distance(a: &LandmarkPoint, b: &LandmarkPoint) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Euclidean distance including depth. A missing `z` counts as zero.
pub fn distance_3d(a: &LandmarkPoint, b: &LandmarkPoint) -> f64 {
    let dz = b.z.unwrap_or(0.0) - a.z.unwrap_or(0.0);
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2) + dz.powi(2)).sqrt()
}

/// `numerator / denominator`, or `+inf` when the denominator is below [`EPSILON`].
pub fn ratio_or_infinite(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() < EPSILON {
        f64::INFINITY
    } else {
        numerator / denominator
    }
}
