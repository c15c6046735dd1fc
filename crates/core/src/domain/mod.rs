pub mod shape;
pub mod style;

use thiserror::Error;

pub use shape::{FaceShape, FaceShapeProfile};
pub use style::{
    Gender, HairType, HaircutStyle, LengthCategory, MaintenanceLevel, StyleAttributes, StyleError,
    StyleId, StyleLevel,
};

/// A string did not name any variant of one of the closed vocabularies.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}` (expected {expected})")]
pub struct ParseVariantError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self { kind, value: value.to_owned(), expected }
    }
}

pub(crate) fn normalize_token(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}
