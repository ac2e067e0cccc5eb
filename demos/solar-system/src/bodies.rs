/// Body catalog: the sun and the eight planets, with their size, color,
/// orbital radius and initial angular speed.
///
/// Compiled into the binary from `data/catalog.json`.

use orrery_engine::Color;
use serde::{Deserialize, Deserializer};

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// The central body. Never moves.
#[derive(Debug, Clone, Deserialize)]
pub struct SunSpec {
    pub radius: f32,
    #[serde(deserialize_with = "hex_color")]
    pub color: Color,
}

/// One orbiting body.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetSpec {
    pub name: String,
    /// Sphere radius in world units.
    pub radius: f32,
    #[serde(deserialize_with = "hex_color")]
    pub color: Color,
    /// Orbital radius in world units.
    pub distance: f64,
    /// Initial angular increment per frame, radians.
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub sun: SunSpec,
    pub planets: Vec<PlanetSpec>,
}

impl Catalog {
    /// The embedded catalog.
    pub fn load() -> Self {
        Self::from_json(CATALOG_JSON).expect("embedded data/catalog.json is malformed")
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn hex_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    let text = String::deserialize(deserializer)?;
    Color::from_hex(&text)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid #rrggbb color {text:?}")))
}
