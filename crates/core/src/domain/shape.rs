use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize_token, ParseVariantError};

/// The seven face-shape categories the classifier can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    Rectangle,
    Triangle,
}

impl FaceShape {
    pub const ALL: [FaceShape; 7] = [
        FaceShape::Oval,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Heart,
        FaceShape::Diamond,
        FaceShape::Rectangle,
        FaceShape::Triangle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceShape::Oval => "oval",
            FaceShape::Round => "round",
            FaceShape::Square => "square",
            FaceShape::Heart => "heart",
            FaceShape::Diamond => "diamond",
            FaceShape::Rectangle => "rectangle",
            FaceShape::Triangle => "triangle",
        }
    }

    /// Descriptive content shown next to an analysis result.
    pub fn profile(&self) -> FaceShapeProfile {
        match self {
            FaceShape::Oval => FaceShapeProfile {
                shape: *self,
                title: "Oval",
                description: "Balanced proportions with a forehead slightly wider than the chin and a face roughly one and a half times as long as it is wide.",
                characteristics: &[
                    "Balanced features",
                    "Forehead a little wider than the chin",
                    "Gently rounded jawline",
                    "Length proportional to width",
                ],
                styling_tips: &[
                    "Most cuts and lengths work",
                    "Free to experiment with texture",
                    "Symmetrical and asymmetrical shapes both suit",
                ],
            },
            FaceShape::Round => FaceShapeProfile {
                shape: *self,
                title: "Round",
                description: "Soft angles with width and length of about the same size, full cheeks and a chin without strong corners.",
                characteristics: &[
                    "Width close to length",
                    "Full cheeks",
                    "Rounded chin",
                    "Soft jawline",
                ],
                styling_tips: &[
                    "Layers that add height",
                    "Side-swept fringe",
                    "Volume on top",
                    "Longer lengths that elongate",
                ],
            },
            FaceShape::Square => FaceShapeProfile {
                shape: *self,
                title: "Square",
                description: "A strong jaw and a forehead of similar width, with angular corners at the jaw.",
                characteristics: &[
                    "Angular jawline",
                    "Flat chin line",
                    "Forehead and jaw of similar width",
                    "Defined jaw corners",
                ],
                styling_tips: &[
                    "Soft layers around the face",
                    "Side-swept shapes that soften angles",
                    "Textured cuts with movement",
                    "Wispy fringe",
                ],
            },
            FaceShape::Heart => FaceShapeProfile {
                shape: *self,
                title: "Heart",
                description: "A wide forehead and cheekbones narrowing down to a small, sometimes pointed chin.",
                characteristics: &[
                    "Wide forehead and cheekbones",
                    "Narrow chin",
                    "High cheekbones",
                    "Jaw tapering toward the chin",
                ],
                styling_tips: &[
                    "Volume around the chin",
                    "Side parts that offset the forehead",
                    "Layers adding width at the jaw",
                    "Chin-length bobs and lobs",
                ],
            },
            FaceShape::Diamond => FaceShapeProfile {
                shape: *self,
                title: "Diamond",
                description: "Narrow forehead and jaw with the cheekbones as the widest point of the face.",
                characteristics: &[
                    "Narrow forehead",
                    "Prominent cheekbones",
                    "Narrow chin",
                    "Angular features",
                ],
                styling_tips: &[
                    "Volume at the forehead",
                    "Side-swept fringe",
                    "Chin-length shapes",
                    "Textured layers",
                ],
            },
            FaceShape::Rectangle => FaceShapeProfile {
                shape: *self,
                title: "Rectangle",
                description: "Square-like structure stretched vertically: a long forehead, straight cheeks and a strong jaw.",
                characteristics: &[
                    "Length clearly greater than width",
                    "Straight cheek line",
                    "Strong jaw",
                    "Forehead, cheeks and jaw of similar width",
                ],
                styling_tips: &[
                    "Layers that add width",
                    "Rounded edges",
                    "Fringe to shorten the face",
                    "Volume at the sides",
                ],
            },
            FaceShape::Triangle => FaceShapeProfile {
                shape: *self,
                title: "Triangle",
                description: "A wide jaw narrowing toward the forehead, with cheekbones in line with the jaw.",
                characteristics: &[
                    "Wide jawline",
                    "Narrower forehead",
                    "Understated cheekbones",
                    "Jaw wider than cheekbones",
                ],
                styling_tips: &[
                    "Volume at the crown and temples",
                    "Short layers on top",
                    "Side-swept fringe",
                    "Fullness in the upper face",
                ],
            },
        }
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaceShape {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(value);
        FaceShape::ALL.into_iter().find(|shape| shape.as_str() == normalized).ok_or_else(|| {
            ParseVariantError::new(
                "face shape",
                value,
                "oval|round|square|heart|diamond|rectangle|triangle",
            )
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaceShapeProfile {
    pub shape: FaceShape,
    pub title: &'static str,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub styling_tips: &'static [&'static str],
}
