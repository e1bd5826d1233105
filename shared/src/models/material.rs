//! Material composition model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fabric material offered in the material picker
///
/// Serialized with the Bulgarian display name, which is also the value
/// the page and the printer see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "Памук")]
    Cotton,
    #[serde(rename = "Полиестер")]
    Polyester,
    #[serde(rename = "Еластан")]
    Elastane,
    #[serde(rename = "Вискоза")]
    Viscose,
    #[serde(rename = "Вълна")]
    Wool,
    #[serde(rename = "Найлон")]
    Nylon,
    #[serde(rename = "Коприна")]
    Silk,
    #[serde(rename = "Лен")]
    Linen,
    #[serde(rename = "Акрил")]
    Acrylic,
    #[serde(rename = "Металик")]
    Metallic,
    #[serde(rename = "Спандекс")]
    Spandex,
    #[serde(rename = "Полиамид")]
    Polyamide,
}

impl Material {
    /// Picker order
    pub const ALL: [Material; 12] = [
        Material::Cotton,
        Material::Polyester,
        Material::Elastane,
        Material::Viscose,
        Material::Wool,
        Material::Nylon,
        Material::Silk,
        Material::Linen,
        Material::Acrylic,
        Material::Metallic,
        Material::Spandex,
        Material::Polyamide,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Material::Cotton => "Памук",
            Material::Polyester => "Полиестер",
            Material::Elastane => "Еластан",
            Material::Viscose => "Вискоза",
            Material::Wool => "Вълна",
            Material::Nylon => "Найлон",
            Material::Silk => "Коприна",
            Material::Linen => "Лен",
            Material::Acrylic => "Акрил",
            Material::Metallic => "Металик",
            Material::Spandex => "Спандекс",
            Material::Polyamide => "Полиамид",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Material name not in the picker
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown material: {0}")]
pub struct UnknownMaterial(pub String);

impl FromStr for Material {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Material::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMaterial(s.to_string()))
    }
}

/// One complete material line of a submission
///
/// The percentage is signed and unbounded as entered; only the total is
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialEntry {
    #[serde(rename = "type")]
    pub material: Material,
    pub percentage: i32,
}

impl MaterialEntry {
    pub fn new(material: Material, percentage: i32) -> Self {
        Self {
            material,
            percentage,
        }
    }
}
