//! Hairstyle catalog: the built-in reference styles, JSON loading and browse filters.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::{
    normalize_token, FaceShape, Gender, HairType, HaircutStyle, LengthCategory, ParseVariantError,
    StyleError, StyleId, StyleLevel,
};

/// Page size used when a browse request does not set one.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid style in catalog: {0}")]
    InvalidStyle(#[from] StyleError),
    #[error("duplicate style id `{0}` in catalog")]
    DuplicateId(StyleId),
    #[error("catalog contains no styles")]
    Empty,
}

/// Seed record for the built-in catalog.
#[derive(Debug, Clone, Copy)]
struct StyleSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    shapes: &'static [FaceShape],
    hair_types: &'static [HairType],
    genders: &'static [Gender],
    length: LengthCategory,
    maintenance: u8,
    volume: StyleLevel,
    texture: StyleLevel,
    formality: &'static str,
}

const STYLE_SEEDS: &[StyleSeed] = &[
    StyleSeed {
        id: "textured-crop",
        name: "Textured Crop",
        description: "Short sides with a longer textured top that styles several ways and adds definition.",
        shapes: &[FaceShape::Oval, FaceShape::Round, FaceShape::Square],
        hair_types: &[HairType::Straight, HairType::Wavy],
        genders: &[Gender::Male],
        length: LengthCategory::Short,
        maintenance: 2,
        volume: StyleLevel::Medium,
        texture: StyleLevel::High,
        formality: "casual",
    },
    StyleSeed {
        id: "classic-bob",
        name: "Classic Bob",
        description: "A chin-length bob with a clean straight line that frames the face.",
        shapes: &[FaceShape::Oval, FaceShape::Heart, FaceShape::Square],
        hair_types: &[HairType::Straight, HairType::Wavy],
        genders: &[Gender::Female],
        length: LengthCategory::Medium,
        maintenance: 3,
        volume: StyleLevel::Low,
        texture: StyleLevel::Low,
        formality: "versatile",
    },
    StyleSeed {
        id: "layered-mid-length",
        name: "Layered Mid-Length",
        description: "Shoulder-length hair layered throughout for movement and body.",
        shapes: &[FaceShape::Oval, FaceShape::Round, FaceShape::Heart],
        hair_types: &[HairType::Straight, HairType::Wavy, HairType::Curly],
        genders: &[Gender::Female],
        length: LengthCategory::Medium,
        maintenance: 3,
        volume: StyleLevel::Medium,
        texture: StyleLevel::Medium,
        formality: "versatile",
    },
    StyleSeed {
        id: "undercut-fade",
        name: "Undercut Fade",
        description: "Faded short sides under a longer top, worn slicked or textured.",
        shapes: &[FaceShape::Oval, FaceShape::Diamond, FaceShape::Triangle],
        hair_types: &[HairType::Straight, HairType::Wavy],
        genders: &[Gender::Male],
        length: LengthCategory::Short,
        maintenance: 4,
        volume: StyleLevel::High,
        texture: StyleLevel::Medium,
        formality: "trendy",
    },
    StyleSeed {
        id: "long-layers",
        name: "Long Layers",
        description: "Long hair with placed layers that remove bulk and soften the frame of the face.",
        shapes: &[FaceShape::Oval, FaceShape::Square, FaceShape::Rectangle],
        hair_types: &[HairType::Straight, HairType::Wavy, HairType::Curly],
        genders: &[Gender::Female],
        length: LengthCategory::Long,
        maintenance: 2,
        volume: StyleLevel::Medium,
        texture: StyleLevel::Medium,
        formality: "versatile",
    },
    StyleSeed {
        id: "side-swept-pixie",
        name: "Side-Swept Pixie",
        description: "A short cut with longer top layers swept to one side.",
        shapes: &[FaceShape::Oval, FaceShape::Heart, FaceShape::Diamond],
        hair_types: &[HairType::Straight, HairType::Wavy],
        genders: &[Gender::Female],
        length: LengthCategory::Short,
        maintenance: 3,
        volume: StyleLevel::Low,
        texture: StyleLevel::Medium,
        formality: "chic",
    },
    StyleSeed {
        id: "buzz-cut",
        name: "Buzz Cut",
        description: "A very short uniform length all over; bold and almost maintenance free.",
        shapes: &[FaceShape::Oval, FaceShape::Square, FaceShape::Diamond],
        hair_types: &[HairType::Straight, HairType::Wavy, HairType::Curly, HairType::Coily],
        genders: &[Gender::Male],
        length: LengthCategory::Short,
        maintenance: 1,
        volume: StyleLevel::None,
        texture: StyleLevel::None,
        formality: "casual",
    },
    StyleSeed {
        id: "soft-waves",
        name: "Soft Waves",
        description: "Medium to long hair set in loose flowing waves for movement and volume.",
        shapes: &[FaceShape::Oval, FaceShape::Square, FaceShape::Rectangle, FaceShape::Triangle],
        hair_types: &[HairType::Straight, HairType::Wavy],
        genders: &[Gender::Female],
        length: LengthCategory::Medium,
        maintenance: 4,
        volume: StyleLevel::High,
        texture: StyleLevel::Medium,
        formality: "elegant",
    },
    StyleSeed {
        id: "pompadour",
        name: "Pompadour",
        description: "Height and volume on top over shorter sides.",
        shapes: &[FaceShape::Oval, FaceShape::Round, FaceShape::Triangle],
        hair_types: &[HairType::Straight, HairType::Wavy],
        genders: &[Gender::Male],
        length: LengthCategory::Medium,
        maintenance: 4,
        volume: StyleLevel::High,
        texture: StyleLevel::Medium,
        formality: "dressy",
    },
    StyleSeed {
        id: "asymmetrical-bob",
        name: "Asymmetrical Bob",
        description: "A bob cut longer on one side for an edgy statement.",
        shapes: &[FaceShape::Oval, FaceShape::Heart, FaceShape::Square],
        hair_types: &[HairType::Straight, HairType::Wavy],
        genders: &[Gender::Female],
        length: LengthCategory::Medium,
        maintenance: 4,
        volume: StyleLevel::Medium,
        texture: StyleLevel::Low,
        formality: "trendy",
    },
];

impl StyleSeed {
    fn build(&self) -> Result<HaircutStyle, StyleError> {
        Ok(HaircutStyle::new(self.id, self.name, self.length, self.maintenance)?
            .with_description(self.description)
            .with_face_shapes(self.shapes.iter().copied())
            .with_hair_types(self.hair_types.iter().copied())
            .with_genders(self.genders.iter().copied())
            .with_volume(self.volume)
            .with_texture(self.texture)
            .with_formality(self.formality))
    }
}

/// An ordered, validated list of styles. Order matters: it breaks ranking ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleCatalog {
    styles: Vec<HaircutStyle>,
}

impl StyleCatalog {
    pub fn new(styles: Vec<HaircutStyle>) -> Result<Self, CatalogError> {
        if styles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for style in &styles {
            style.validate()?;
            if !seen.insert(style.id.clone()) {
                return Err(CatalogError::DuplicateId(style.id.clone()));
            }
        }

        Ok(Self { styles })
    }

    /// The ten reference styles, checked like any loaded catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_seeds(STYLE_SEEDS)
    }

    fn from_seeds(seeds: &[StyleSeed]) -> Result<Self, CatalogError> {
        let styles = seeds.iter().map(StyleSeed::build).collect::<Result<Vec<_>, _>>()?;
        Self::new(styles)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let styles: Vec<HaircutStyle> = serde_json::from_str(raw)?;
        Self::new(styles)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            event_name = "catalog.loaded",
            path = %path.display(),
            styles = catalog.len(),
            "style catalog loaded from file"
        );
        Ok(catalog)
    }

    /// Loads `path` when given, otherwise the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn styles(&self) -> &[HaircutStyle] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn get(&self, id: &StyleId) -> Option<&HaircutStyle> {
        self.styles.iter().find(|style| &style.id == id)
    }

    /// Styles matching every set criterion, in catalog order.
    pub fn filter(&self, filter: &StyleFilter) -> Vec<&HaircutStyle> {
        self.styles.iter().filter(|style| filter.matches(style)).collect()
    }

    /// One page of the matching styles. `total` counts every match, not just the page.
    pub fn browse(&self, filter: &StyleFilter, page: PageRequest) -> StylePage<'_> {
        let mut matching = self.filter(filter);
        if page.order == StyleOrder::Name {
            matching.sort_by(|left, right| {
                left.name.to_lowercase().cmp(&right.name.to_lowercase())
            });
        }

        let total = matching.len();
        let styles = matching.into_iter().skip(page.offset).take(page.limit).collect();
        StylePage { styles, total, limit: page.limit, offset: page.offset, order: page.order }
    }
}

/// Browse order. Catalog order is the order that breaks ranking ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleOrder {
    #[default]
    Name,
    Catalog,
}

impl StyleOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Catalog => "catalog",
        }
    }
}

impl fmt::Display for StyleOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleOrder {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "name" => Ok(Self::Name),
            "catalog" => Ok(Self::Catalog),
            _ => Err(ParseVariantError::new("style order", value, "name|catalog")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
    pub order: StyleOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { limit: DEFAULT_PAGE_LIMIT, offset: 0, order: StyleOrder::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylePage<'a> {
    pub styles: Vec<&'a HaircutStyle>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub order: StyleOrder,
}

/// Browse criteria, combined with AND. A list matches a style carrying any of its values and
/// an empty list matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleFilter {
    pub face_shapes: Vec<FaceShape>,
    pub hair_types: Vec<HairType>,
    pub genders: Vec<Gender>,
    pub lengths: Vec<LengthCategory>,
    pub min_maintenance: Option<u8>,
    pub max_maintenance: Option<u8>,
}

impl StyleFilter {
    pub fn for_shape(shape: FaceShape) -> Self {
        Self { face_shapes: vec![shape], ..Self::default() }
    }

    pub fn matches(&self, style: &HaircutStyle) -> bool {
        let level = style.maintenance_level.get();

        any_or_empty(&self.face_shapes, |shape| style.suits(*shape))
            && any_or_empty(&self.hair_types, |hair| style.suitable_hair_types.contains(hair))
            && any_or_empty(&self.genders, |gender| style.suitable_genders.contains(gender))
            && any_or_empty(&self.lengths, |length| style.length_category == *length)
            && self.min_maintenance.map_or(true, |min| level >= min)
            && self.max_maintenance.map_or(true, |max| level <= max)
    }
}

fn any_or_empty<T>(wanted: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    wanted.is_empty() || wanted.iter().any(predicate)
}
