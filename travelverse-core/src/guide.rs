//! Photo guides and their viral-potential annotation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subject matter of a photo guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideCategory {
    /// Landscapes and viewpoints.
    Scenic,
    /// Buildings and monuments.
    Architectural,
    /// People, customs and ceremonies.
    Cultural,
    /// Action and outdoor shots.
    Adventure,
    /// Dishes and markets.
    Food,
    /// Golden hour and dusk.
    Sunset,
}

impl GuideCategory {
    /// Return the category as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scenic => "scenic",
            Self::Architectural => "architectural",
            Self::Cultural => "cultural",
            Self::Adventure => "adventure",
            Self::Food => "food",
            Self::Sunset => "sunset",
        }
    }
}

impl fmt::Display for GuideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuideCategory {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scenic" => Ok(Self::Scenic),
            "architectural" => Ok(Self::Architectural),
            "cultural" => Ok(Self::Cultural),
            "adventure" => Ok(Self::Adventure),
            "food" => Ok(Self::Food),
            "sunset" => Ok(Self::Sunset),
            _ => Err(GuideError::UnknownCategory(s.to_owned())),
        }
    }
}

/// How hard it is to reach and shoot the spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Accessible to anyone.
    Easy,
    /// Some walking or timing required.
    Moderate,
    /// Long approach or tricky light.
    Challenging,
    /// Specialist equipment or permits.
    Expert,
}

impl Difficulty {
    /// Return the difficulty as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Challenging => "challenging",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "challenging" => Ok(Self::Challenging),
            "expert" => Ok(Self::Expert),
            _ => Err(GuideError::UnknownDifficulty(s.to_owned())),
        }
    }
}

/// Errors raised while validating a photo guide.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuideError {
    /// The category is not a recognised variant.
    #[error("unknown photo guide category '{0}'")]
    UnknownCategory(String),
    /// The difficulty is not a recognised variant.
    #[error("unknown photo guide difficulty '{0}'")]
    UnknownDifficulty(String),
}

/// A validated photo guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPhotoGuide")]
pub struct PhotoGuide {
    /// Stable identifier.
    pub id: String,
    /// Destination the guide belongs to.
    pub destination_id: String,
    /// Subject matter.
    pub category: GuideCategory,
    /// Access difficulty.
    pub difficulty: Difficulty,
    /// Number of sample images attached.
    pub image_count: u32,
}

/// Photo guide payload as decoded from JSON, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhotoGuide {
    /// Stable identifier.
    pub id: String,
    /// Destination the guide belongs to.
    pub destination_id: String,
    /// Category name.
    pub category: String,
    /// Difficulty name.
    pub difficulty: String,
    /// Number of sample images attached.
    #[serde(default)]
    pub image_count: u32,
}

impl TryFrom<RawPhotoGuide> for PhotoGuide {
    type Error = GuideError;

    fn try_from(raw: RawPhotoGuide) -> Result<Self, Self::Error> {
        Ok(Self {
            category: raw.category.parse()?,
            difficulty: raw.difficulty.parse()?,
            id: raw.id,
            destination_id: raw.destination_id,
            image_count: raw.image_count,
        })
    }
}

/// A photo guide annotated with its predicted shareability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPhotoGuide {
    /// The scored guide.
    #[serde(flatten)]
    pub guide: PhotoGuide,
    /// Viral potential in `0.0..=1.0`.
    pub viral_potential: f32,
}
