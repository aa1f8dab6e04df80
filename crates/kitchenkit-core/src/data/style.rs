//! Finishes, hardware and global style presets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabinet door style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorStyle {
    /// Flat / slab
    Flat,
    #[default]
    Shaker,
    RaisedPanel,
    /// Glass front
    Glass,
    /// Open shelf, no door
    Open,
}

impl fmt::Display for DoorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "Flat / Slab"),
            Self::Shaker => write!(f, "Shaker"),
            Self::RaisedPanel => write!(f, "Raised Panel"),
            Self::Glass => write!(f, "Glass Front"),
            Self::Open => write!(f, "Open Shelf"),
        }
    }
}

/// Handle style, covering both catalog handle types and finish-level styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleStyle {
    Bar,
    Knob,
    Profile,
    Integrated,
    #[serde(alias = "pushToOpen")]
    PushToOpen,
    CupPull,
    Handleless,
    EdgePull,
}

impl HandleStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Knob => "knob",
            Self::Profile => "profile",
            Self::Integrated => "integrated",
            Self::PushToOpen => "push-to-open",
            Self::CupPull => "cup-pull",
            Self::Handleless => "handleless",
            Self::EdgePull => "edge-pull",
        }
    }
}

impl fmt::Display for HandleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlePlacement {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HingeSide {
    #[default]
    Left,
    Right,
}

/// Handle fitted to a unit's doors and drawer fronts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleSpec {
    /// `None` until a handle has been chosen
    #[serde(default, alias = "type")]
    pub style: Option<HandleStyle>,
    #[serde(default)]
    pub placement: HandlePlacement,
    /// Distance from the door edge (cm)
    #[serde(default)]
    pub offset: f64,
    #[serde(default)]
    pub color: String,
}

impl HandleSpec {
    /// Bar handle, vertical, 60cm offset.
    pub fn standard() -> Self {
        Self {
            style: Some(HandleStyle::Bar),
            placement: HandlePlacement::Vertical,
            offset: 60.0,
            color: DEFAULT_HANDLE_COLOR.to_string(),
        }
    }
}

/// Finish assignment for one unit.
///
/// `Default` is the unassigned state (all empty); use
/// [`MaterialAssignment::standard`] for the catalog preset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialAssignment {
    pub body: String,
    pub door: String,
    pub worktop: String,
    pub backsplash: String,
    pub panels: String,
    pub shelves: String,
    pub color_code: String,
    pub finish_type: String,
}

impl MaterialAssignment {
    pub fn standard() -> Self {
        Self {
            body: "Melamine White".to_string(),
            door: "Matte Sand".to_string(),
            worktop: "Quartz Grey".to_string(),
            backsplash: "Ceramic Warm White".to_string(),
            panels: "Melamine White".to_string(),
            shelves: "Melamine White".to_string(),
            color_code: "RAL-9003".to_string(),
            finish_type: "matte".to_string(),
        }
    }
}

/// Hinges, runners and lift mechanisms fitted to a unit.
///
/// `Default` is the unassigned state; an empty `brand` means no hardware has
/// been specified yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HardwareSet {
    pub hinges: u32,
    pub runners: u32,
    pub lifts: u32,
    pub series: String,
    pub brand: String,
    pub soft_close: bool,
}

impl HardwareSet {
    pub fn new(hinges: u32, runners: u32, lifts: u32, series: &str, brand: &str) -> Self {
        Self {
            hinges,
            runners,
            lifts,
            series: series.to_string(),
            brand: brand.to_string(),
            soft_close: true,
        }
    }
}

pub const DEFAULT_CABINET_COLOR: &str = "#FAFAFA";
pub const DEFAULT_HANDLE_COLOR: &str = "#2A2A2A";

/// Project-wide look applied to cabinets on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStyle {
    pub cabinet_door_style: DoorStyle,
    pub cabinet_body_color: String,
    pub cabinet_door_color: String,
    pub handle_style: HandleStyle,
    pub handle_color: String,
}

impl Default for GlobalStyle {
    fn default() -> Self {
        Self {
            cabinet_door_style: DoorStyle::Shaker,
            cabinet_body_color: DEFAULT_CABINET_COLOR.to_string(),
            cabinet_door_color: DEFAULT_CABINET_COLOR.to_string(),
            handle_style: HandleStyle::Bar,
            handle_color: DEFAULT_HANDLE_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountertopMaterial {
    Granite,
    Marble,
    Quartz,
    ButcherBlock,
    Laminate,
    Concrete,
    StainlessSteel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeProfile {
    Square,
    Beveled,
    Bullnose,
    Ogee,
    Waterfall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BacksplashHeight {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "10cm")]
    Cm10,
    #[serde(rename = "15cm")]
    Cm15,
    #[serde(rename = "full")]
    Full,
}

/// Worktop finish and overhangs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountertopConfig {
    pub material: CountertopMaterial,
    pub color: String,
    /// Slab thickness (cm)
    pub thickness: f64,
    pub edge_profile: EdgeProfile,
    pub overhang_front: f64,
    pub overhang_sides: f64,
    pub backsplash_height: BacksplashHeight,
}

impl Default for CountertopConfig {
    fn default() -> Self {
        Self {
            material: CountertopMaterial::Quartz,
            color: "#FEFEFE".to_string(),
            thickness: 3.0,
            edge_profile: EdgeProfile::Square,
            overhang_front: 3.0,
            overhang_sides: 2.0,
            backsplash_height: BacksplashHeight::Cm10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendantStyle {
    Modern,
    Industrial,
    Classic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LightingConfig {
    pub ambient_intensity: f64,
    pub under_cabinet_lights: bool,
    pub pendant_lights: u32,
    pub pendant_style: PendantStyle,
    pub recessed_lights: bool,
    pub in_cabinet_lights: bool,
    /// Hour of day used for the daylight preview (0-24)
    pub time_of_day: f64,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.6,
            under_cabinet_lights: true,
            pendant_lights: 0,
            pendant_style: PendantStyle::Modern,
            recessed_lights: true,
            in_cabinet_lights: false,
            time_of_day: 12.0,
        }
    }
}
