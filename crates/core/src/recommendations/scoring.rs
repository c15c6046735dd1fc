//! Relevance scoring for a single (style, face shape) pair

use serde::{Deserialize, Serialize};

use super::MAX_RELEVANCE_SCORE;
use crate::domain::{FaceShape, HaircutStyle, LengthCategory, MaintenanceLevel, StyleLevel};

/// Constants of the relevance formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Score every eligible style starts from (default: 70)
    pub base: f64,
    /// Added when the style complements the shape (default: 10)
    pub shape_bonus: f64,
    /// Extra for medium/long cuts on round faces (default: 5)
    pub length_bonus: f64,
    /// Added per maintenance level below 5 (default: 2)
    pub maintenance_step: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

/// Score calculator for hairstyle recommendations
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    weights: ScoringWeights,
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self { weights: ScoringWeights::default() }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Relevance of `style` for `shape`. Eligibility (`style.suits(shape)`) is the caller's
    /// concern and is not re-checked here.
    pub fn score(&self, style: &HaircutStyle, shape: FaceShape) -> f64 {
        let total = self.weights.base
            + self.shape_bonus(style, shape)
            + self.maintenance_adjustment(style.maintenance_level);

        total.min(MAX_RELEVANCE_SCORE)
    }

    /// Shape-specific fit bonus; only round faces can collect two bonuses.
    pub fn shape_bonus(&self, style: &HaircutStyle, shape: FaceShape) -> f64 {
        let bonus = self.weights.shape_bonus;
        let volume = style.attributes.volume;
        let texture = style.attributes.texture;
        let length = style.length_category;

        match shape {
            FaceShape::Oval => bonus,
            FaceShape::Round => {
                let mut total = 0.0;
                if volume == Some(StyleLevel::High) {
                    total += bonus;
                }
                if matches!(length, LengthCategory::Medium | LengthCategory::Long) {
                    total += self.weights.length_bonus;
                }
                total
            }
            FaceShape::Square if texture == Some(StyleLevel::High) => bonus,
            FaceShape::Heart | FaceShape::Diamond if length == LengthCategory::Medium => bonus,
            FaceShape::Rectangle if volume == Some(StyleLevel::Medium) => bonus,
            FaceShape::Triangle if volume == Some(StyleLevel::High) => bonus,
            _ => 0.0,
        }
    }

    /// Easier styles earn more: +8 at level 1 down to 0 at level 5 with default weights.
    pub fn maintenance_adjustment(&self, level: MaintenanceLevel) -> f64 {
        f64::from(MaintenanceLevel::MAX - level.get()) * self.weights.maintenance_step
    }
}

/// Scores with the default weights.
pub fn score_style(style: &HaircutStyle, shape: FaceShape) -> f64 {
    ScoreCalculator::new().score(style, shape)
}
