//! Layout shapes, wall identifiers and corner joints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overall kitchen shape.
///
/// Serialized with the short codes used by saved projects (`"L"`, `"II"`,
/// `"island"`, ...). Long-form spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Three walls of cabinets
    #[serde(rename = "U", alias = "u-shape")]
    U,
    /// Two perpendicular walls
    #[serde(rename = "L", alias = "l-shape")]
    L,
    /// One or two walls plus a freestanding island
    #[serde(rename = "island", alias = "Island")]
    Island,
    /// All cabinets along one wall
    #[serde(rename = "I", alias = "single-wall")]
    SingleWall,
    /// Two parallel runs
    #[serde(rename = "II", alias = "galley")]
    Galley,
    /// U-shape with a peninsula extension
    #[serde(rename = "G", alias = "g-shape")]
    G,
    /// L-shape with an attached peninsula
    #[serde(rename = "peninsula", alias = "Peninsula")]
    Peninsula,
}

impl LayoutMode {
    /// Every layout mode, in menu order.
    pub fn all() -> &'static [LayoutMode] {
        &[
            LayoutMode::SingleWall,
            LayoutMode::Galley,
            LayoutMode::L,
            LayoutMode::U,
            LayoutMode::G,
            LayoutMode::Island,
            LayoutMode::Peninsula,
        ]
    }

    /// Short code used in saved projects.
    pub fn code(self) -> &'static str {
        match self {
            Self::U => "U",
            Self::L => "L",
            Self::Island => "island",
            Self::SingleWall => "I",
            Self::Galley => "II",
            Self::G => "G",
            Self::Peninsula => "peninsula",
        }
    }

    /// Whether the mode runs cabinets along a third wall.
    pub fn has_wall_c(self) -> bool {
        matches!(self, Self::U | Self::G)
    }

    /// Whether the mode carries an island or peninsula rectangle.
    pub fn has_island_footprint(self) -> bool {
        matches!(self, Self::Island | Self::Peninsula | Self::G)
    }

    /// Worktop joints that need a mitre cut for this shape.
    pub fn corner_joints(self) -> &'static [CornerJoint] {
        match self {
            Self::L | Self::Peninsula => &[CornerJoint::AtoB],
            Self::U | Self::G => &[CornerJoint::AtoB, CornerJoint::BtoC],
            Self::Island | Self::SingleWall | Self::Galley => &[],
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U => write!(f, "U-Shape"),
            Self::L => write!(f, "L-Shape"),
            Self::Island => write!(f, "Island"),
            Self::SingleWall => write!(f, "Single Wall"),
            Self::Galley => write!(f, "Galley"),
            Self::G => write!(f, "G-Shape"),
            Self::Peninsula => write!(f, "Peninsula"),
        }
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "u" | "u-shape" => Ok(Self::U),
            "l" | "l-shape" => Ok(Self::L),
            "island" => Ok(Self::Island),
            "i" | "single-wall" | "single" => Ok(Self::SingleWall),
            "ii" | "galley" => Ok(Self::Galley),
            "g" | "g-shape" => Ok(Self::G),
            "peninsula" | "p" => Ok(Self::Peninsula),
            _ => Err(format!("Unknown layout mode: {}", s)),
        }
    }
}

/// Wall a unit is assigned to.
///
/// The derived ordering is the lexical order of the identifiers, which is
/// the order wall runs are visited in when units are sorted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum WallId {
    #[default]
    #[serde(rename = "A", alias = "wall-back")]
    A,
    #[serde(rename = "B", alias = "wall-left", alias = "wall-front")]
    B,
    #[serde(rename = "C", alias = "wall-right")]
    C,
    #[serde(rename = "Island", alias = "island", alias = "wall-peninsula")]
    Island,
}

impl WallId {
    pub const ALL: [WallId; 4] = [WallId::A, WallId::B, WallId::C, WallId::Island];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Island => "Island",
        }
    }
}

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WallId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "wall-back" => Ok(Self::A),
            "b" | "wall-left" | "wall-front" => Ok(Self::B),
            "c" | "wall-right" => Ok(Self::C),
            "island" | "wall-peninsula" => Ok(Self::Island),
            _ => Err(format!("Unknown wall: {}", s)),
        }
    }
}

/// A junction between two wall runs where the worktop is mitred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerJoint {
    #[serde(rename = "A-B")]
    AtoB,
    #[serde(rename = "B-C")]
    BtoC,
}

impl CornerJoint {
    pub fn label(self) -> &'static str {
        match self {
            Self::AtoB => "A-B",
            Self::BtoC => "B-C",
        }
    }
}

impl fmt::Display for CornerJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point in scene space, used by rendering-facing placements.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
