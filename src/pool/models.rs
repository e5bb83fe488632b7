//! Pool profile types.

use serde::{Deserialize, Serialize};

/// Pool outline used for volume estimation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolShape {
    #[default]
    Rectangular,
    /// Length is the diameter
    Round,
    Oval,
    Kidney,
    Custom,
}

impl PoolShape {
    pub fn as_str(self) -> &'static str {
        match self {
            PoolShape::Rectangular => "rectangular",
            PoolShape::Round => "round",
            PoolShape::Oval => "oval",
            PoolShape::Kidney => "kidney",
            PoolShape::Custom => "custom",
        }
    }
}

impl std::fmt::Display for PoolShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pool lining material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolMaterial {
    Vinyl,
    #[default]
    Concrete,
    Fiberglass,
    Tile,
    Other,
}

impl PoolMaterial {
    pub fn as_str(self) -> &'static str {
        match self {
            PoolMaterial::Vinyl => "vinyl",
            PoolMaterial::Concrete => "concrete",
            PoolMaterial::Fiberglass => "fiberglass",
            PoolMaterial::Tile => "tile",
            PoolMaterial::Other => "other",
        }
    }
}

impl std::fmt::Display for PoolMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dimension as typed into a form: either a JSON number or free text.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl Dimension {
    pub fn meters(&self) -> f64 {
        match self {
            Dimension::Number(v) => *v,
            Dimension::Text(s) => super::volume::parse_dimension(s),
        }
    }
}

/// Request payload for volume estimation.
#[derive(Debug, Deserialize, Serialize)]
pub struct VolumeRequest {
    #[serde(default)]
    pub shape: PoolShape,
    /// Length in meters (diameter for round pools)
    pub length: Dimension,
    /// Width in meters
    pub width: Dimension,
    /// Average depth in meters
    pub depth: Dimension,
}

/// Response payload from volume estimation.
#[derive(Debug, Deserialize, Serialize)]
pub struct VolumeResponse {
    pub shape: PoolShape,
    pub volume_liters: u64,
}
