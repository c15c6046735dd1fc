use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{normalize_token, FaceShape, ParseVariantError};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(pub String);

impl StyleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StyleId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("maintenance level must be in 1..=5, got {0}")]
    InvalidMaintenanceLevel(u8),
    #[error("style `{style_id}` must list at least one suitable face shape")]
    EmptyFaceShapes { style_id: StyleId },
    #[error("style `{style_id}` has an empty {field}")]
    EmptyField { style_id: StyleId, field: &'static str },
}

macro_rules! closed_vocabulary {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $expected:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseVariantError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = normalize_token(value);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == normalized)
                    .ok_or_else(|| {
                        ParseVariantError::new($kind, value, $expected)
                    })
            }
        }
    };
}

closed_vocabulary!(
    LengthCategory, "length category", "short|medium|long" {
        Short => "short",
        Medium => "medium",
        Long => "long",
    }
);

closed_vocabulary!(
    HairType, "hair type", "straight|wavy|curly|coily" {
        Straight => "straight",
        Wavy => "wavy",
        Curly => "curly",
        Coily => "coily",
    }
);

closed_vocabulary!(
    Gender, "gender", "male|female|unisex" {
        Male => "male",
        Female => "female",
        Unisex => "unisex",
    }
);

closed_vocabulary!(
    /// Intensity scale shared by the `volume` and `texture` attributes.
    StyleLevel, "style level", "none|low|medium|high" {
        None => "none",
        Low => "low",
        Medium => "medium",
        High => "high",
    }
);

/// Upkeep effort from 1 (minimal) to 5 (demanding).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MaintenanceLevel(u8);

impl MaintenanceLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, StyleError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(StyleError::InvalidMaintenanceLevel(level))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MaintenanceLevel {
    type Error = StyleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaintenanceLevel> for u8 {
    fn from(value: MaintenanceLevel) -> Self {
        value.0
    }
}

impl fmt::Display for MaintenanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<StyleLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<StyleLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaircutStyle {
    pub id: StyleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub suitable_face_shapes: BTreeSet<FaceShape>,
    #[serde(default)]
    pub suitable_hair_types: BTreeSet<HairType>,
    #[serde(default)]
    pub suitable_genders: BTreeSet<Gender>,
    pub length_category: LengthCategory,
    pub maintenance_level: MaintenanceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub attributes: StyleAttributes,
}

impl HaircutStyle {
    /// Start a style with its required fields; shapes and attributes are added with the
    /// `with_*` builders and checked by [`HaircutStyle::validate`].
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        length_category: LengthCategory,
        maintenance_level: u8,
    ) -> Result<Self, StyleError> {
        Ok(Self {
            id: StyleId(id.into()),
            name: name.into(),
            description: String::new(),
            suitable_face_shapes: BTreeSet::new(),
            suitable_hair_types: BTreeSet::new(),
            suitable_genders: BTreeSet::new(),
            length_category,
            maintenance_level: MaintenanceLevel::new(maintenance_level)?,
            image_url: None,
            attributes: StyleAttributes::default(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_face_shapes(mut self, shapes: impl IntoIterator<Item = FaceShape>) -> Self {
        self.suitable_face_shapes.extend(shapes);
        self
    }

    pub fn with_hair_types(mut self, hair_types: impl IntoIterator<Item = HairType>) -> Self {
        self.suitable_hair_types.extend(hair_types);
        self
    }

    pub fn with_genders(mut self, genders: impl IntoIterator<Item = Gender>) -> Self {
        self.suitable_genders.extend(genders);
        self
    }

    pub fn with_volume(mut self, volume: StyleLevel) -> Self {
        self.attributes.volume = Some(volume);
        self
    }

    pub fn with_texture(mut self, texture: StyleLevel) -> Self {
        self.attributes.texture = Some(texture);
        self
    }

    pub fn with_formality(mut self, formality: impl Into<String>) -> Self {
        self.attributes.formality = Some(formality.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn suits(&self, shape: FaceShape) -> bool {
        self.suitable_face_shapes.contains(&shape)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if self.id.0.trim().is_empty() {
            return Err(StyleError::EmptyField { style_id: self.id.clone(), field: "id" });
        }
        if self.name.trim().is_empty() {
            return Err(StyleError::EmptyField { style_id: self.id.clone(), field: "name" });
        }
        if self.suitable_face_shapes.is_empty() {
            return Err(StyleError::EmptyFaceShapes { style_id: self.id.clone() });
        }
        Ok(())
    }
}
