//! Natural-language explanations attached to each recommendation

use serde::{Deserialize, Serialize};

use crate::domain::{FaceShape, HaircutStyle, MaintenanceLevel};

/// Effort bucket used to pick the maintenance sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceTier {
    /// Levels 1 and 2
    Low,
    /// Level 3
    Moderate,
    /// Levels 4 and 5
    High,
}

impl MaintenanceTier {
    pub fn from_level(level: MaintenanceLevel) -> Self {
        match level.get() {
            0..=2 => MaintenanceTier::Low,
            3 => MaintenanceTier::Moderate,
            _ => MaintenanceTier::High,
        }
    }
}

/// Lead sentence, shape rationale and maintenance note, space separated.
pub fn explain(style: &HaircutStyle, shape: FaceShape) -> String {
    format!(
        "This {} is well-suited for your {} face shape. {} {}",
        style.name,
        shape,
        shape_rationale(shape),
        maintenance_note(MaintenanceTier::from_level(style.maintenance_level))
    )
}

pub fn shape_rationale(shape: FaceShape) -> &'static str {
    match shape {
        FaceShape::Oval => {
            "Oval faces carry most cuts well, and this one keeps your balanced proportions in focus."
        }
        FaceShape::Round => {
            "It lengthens the face and adds the impression of sharper definition."
        }
        FaceShape::Square => {
            "It softens a strong jawline while keeping the structure of your face."
        }
        FaceShape::Heart => {
            "It offsets a wider forehead and cheekbones against a narrower chin."
        }
        FaceShape::Diamond => {
            "It balances prominent cheekbones and fills out the narrower forehead and chin."
        }
        FaceShape::Rectangle => "It adds width so the face reads as more evenly proportioned.",
        FaceShape::Triangle => {
            "It builds volume in the upper face to balance a wider jawline."
        }
    }
}

pub fn maintenance_note(tier: MaintenanceTier) -> &'static str {
    match tier {
        MaintenanceTier::Low => "It is low-maintenance and easy to manage day to day.",
        MaintenanceTier::Moderate => "It needs moderate upkeep to look its best.",
        MaintenanceTier::High => {
            "It takes more effort to maintain, and rewards it with a polished look."
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::LengthCategory;

    #[test]
    fn maintenance_tiers_follow_level_boundaries() {
        let tier = |level| MaintenanceTier::from_level(MaintenanceLevel::new(level).expect("valid"));

        assert_eq!(tier(1), MaintenanceTier::Low);
        assert_eq!(tier(2), MaintenanceTier::Low);
        assert_eq!(tier(3), MaintenanceTier::Moderate);
        assert_eq!(tier(4), MaintenanceTier::High);
        assert_eq!(tier(5), MaintenanceTier::High);
    }

    #[test]
    fn every_shape_has_its_own_rationale() {
        let rationales: HashSet<_> = FaceShape::ALL.iter().map(|shape| shape_rationale(*shape)).collect();
        assert_eq!(rationales.len(), FaceShape::ALL.len());
    }

    #[test]
    fn explanation_names_style_and_shape() {
        let style = HaircutStyle::new("classic-bob", "Classic Bob", LengthCategory::Medium, 3)
            .expect("valid maintenance level")
            .with_face_shapes([FaceShape::Heart]);

        let explanation = explain(&style, FaceShape::Heart);

        assert!(explanation.starts_with("This Classic Bob is well-suited for your heart face shape."));
        assert!(explanation.contains(shape_rationale(FaceShape::Heart)));
        assert!(explanation.ends_with(maintenance_note(MaintenanceTier::Moderate)));
    }
}
