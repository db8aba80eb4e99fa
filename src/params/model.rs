use std::path::Path;

use crate::foundation::core::{Rgb, lerp_rgb};
use crate::foundation::error::{HaloError, HaloResult};
use crate::params::color::{kelvin_to_rgb, wavelength_to_rgb};

const HORIZON_TOP: Rgb = [0.95, 0.5, 0.2];
const HORIZON_BOTTOM: Rgb = [0.15, 0.08, 0.2];

pub(crate) const RING_COLORS: [Rgb; 5] = [
    [0.95, 0.55, 0.2],
    [0.75, 0.3, 0.15],
    [0.45, 0.2, 0.18],
    [0.25, 0.12, 0.15],
    [0.12, 0.06, 0.08],
];

pub(crate) const SECTOR_COLORS: [Rgb; 6] = [
    [0.9, 0.4, 0.15],
    [0.95, 0.5, 0.25],
    [0.85, 0.35, 0.2],
    [0.7, 0.28, 0.18],
    [0.5, 0.2, 0.15],
    [0.35, 0.15, 0.12],
];

pub(crate) const DEFAULT_FRINGE_RGB: Rgb = [0.4, 0.25, 0.6];

pub(crate) fn default_horizon_colors() -> Vec<Rgb> {
    vec![
        HORIZON_TOP,
        HORIZON_BOTTOM,
        lerp_rgb(HORIZON_TOP, HORIZON_BOTTOM, 0.5),
        lerp_rgb(HORIZON_TOP, HORIZON_BOTTOM, 0.75),
    ]
}

/// Default key light: warm 3000 K.
pub fn default_light_rgb() -> Rgb {
    kelvin_to_rgb(3000.0)
}

/// Default penumbra edge color: 630 nm red.
pub fn default_edge_rgb() -> Rgb {
    wavelength_to_rgb(630.0)
}

/// Complete parameter tree for one render call.
///
/// Every field is optional in JSON; missing values take the documented defaults. Field names
/// are camelCase (`beamAngle`, `gradientMode`, `movingLightIntensity`, ...).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HaloParams {
    /// Beam geometry.
    pub spot: SpotParams,
    /// Color distribution mode and its per-mode settings.
    pub color: ColorParams,
    /// Penumbra, fringe and edge animation settings.
    pub edge: EdgeParams,
    /// Wall, light colors and scene-wide overlays.
    pub scene: SceneParams,
}

/// Beam geometry parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpotParams {
    /// Beam half-angle in degrees, nominally `15..=45`.
    pub beam_angle: f64,
    /// Hotspot position in `[0, 1]`; `0.5` is centered, `0` pushes the focal point down.
    pub hotspot_offset: f64,
}

impl Default for SpotParams {
    fn default() -> Self {
        Self {
            beam_angle: 30.0,
            hotspot_offset: 0.5,
        }
    }
}

/// How color is distributed inside the spot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientMode {
    /// Light color at the hotspot fading through the edge color.
    #[default]
    Radial,
    /// Linear bands split by a (tilted) horizon line.
    Horizon,
    /// Concentric colored rings.
    MultiRing,
    /// Angular color sectors with a radial center overlay.
    Sector,
}

impl GradientMode {
    /// Wire name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radial => "radial",
            Self::Horizon => "horizon",
            Self::MultiRing => "multiRing",
            Self::Sector => "sector",
        }
    }

    /// Parse a wire name; unknown names fall back to [`GradientMode::Radial`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "horizon" => Self::Horizon,
            "multiRing" => Self::MultiRing,
            "sector" => Self::Sector,
            _ => Self::Radial,
        }
    }
}

impl serde::Serialize for GradientMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for GradientMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Color distribution parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorParams {
    /// Active color mode.
    pub gradient_mode: GradientMode,
    /// Shapes the radial falloff exponent, `[0, 1]`.
    pub transition_curve: f64,
    /// Horizon mode settings.
    pub horizon: HorizonParams,
    /// Multi-ring mode settings.
    pub multi_ring: MultiRingParams,
    /// Sector mode settings.
    pub sector: SectorParams,
}

impl Default for ColorParams {
    fn default() -> Self {
        Self {
            gradient_mode: GradientMode::Radial,
            transition_curve: 0.5,
            horizon: HorizonParams::default(),
            multi_ring: MultiRingParams::default(),
            sector: SectorParams::default(),
        }
    }
}

/// Horizon mode settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HorizonParams {
    /// Up to four band colors, top first.
    pub colors: Vec<Rgb>,
    /// Number of colors in use, `2..=4`.
    pub num_colors: u32,
    /// Horizon line position along the gradient axis, `[0, 1]`.
    pub horizon_y: f64,
    /// Width of the transition band, `[0, 1]`.
    pub softness: f64,
    /// Axis tilt in `[-1, 1]`, mapped to `±45°`.
    pub tilt: f64,
}

impl Default for HorizonParams {
    fn default() -> Self {
        Self {
            colors: default_horizon_colors(),
            num_colors: 2,
            horizon_y: 0.5,
            softness: 0.35,
            tilt: 0.0,
        }
    }
}

/// Multi-ring mode settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiRingParams {
    /// Number of rings in use, `3..=5`.
    pub num_rings: u32,
    /// Ring colors, innermost first.
    pub ring_colors: Vec<Rgb>,
    /// Relative ring widths; normalized to sum to 1 before use.
    pub ring_widths: Vec<f64>,
    /// Base blend width between rings, `[0, 1]`.
    pub smoothness: f64,
    /// Extra color mixing across ring boundaries, `[0, 1]`.
    pub ring_blend: f64,
}

impl Default for MultiRingParams {
    fn default() -> Self {
        Self {
            num_rings: 3,
            ring_colors: RING_COLORS.to_vec(),
            ring_widths: vec![0.35, 0.35, 0.3, 0.2, 0.2],
            smoothness: 0.4,
            ring_blend: 0.35,
        }
    }
}

/// Sector mode settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectorParams {
    /// Number of angular sectors, `3..=6`.
    pub num_sectors: u32,
    /// Sector colors, clockwise from the positive x axis.
    pub sector_colors: Vec<Rgb>,
    /// Color of the radial center overlay.
    pub center_rgb: Rgb,
    /// Strength of the radial center overlay, `[0, 1]`.
    pub radial_blend: f64,
}

impl Default for SectorParams {
    fn default() -> Self {
        Self {
            num_sectors: 4,
            sector_colors: SECTOR_COLORS.to_vec(),
            center_rgb: default_light_rgb(),
            radial_blend: 0.5,
        }
    }
}

/// Edge treatment and edge animations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeParams {
    /// Penumbra band width, `[0, 1]`.
    pub penumbra_width: f64,
    /// Draw a colored fringe at the outer penumbra.
    pub chromatic_fringe_enabled: bool,
    /// Fringe intensity, `[0.01, 1]`.
    pub chromatic_fringe: f64,
    /// Fringe color.
    pub chromatic_fringe_rgb: Rgb,
    /// Enable the breathing edge distortion.
    pub breathing_enabled: bool,
    /// Breathing amplitude, `[0, 0.06]`.
    pub wobble_amount: f64,
    /// Breathing lobe rotation speed, `[0, 0.6]`.
    pub wobble_speed: f64,
    /// Enable the circling secondary ring.
    pub trajectory_enabled: bool,
    /// Orbit radius as a fraction of the spot radius, `[0.1, 0.2]`.
    pub trajectory_diameter: f64,
    /// Ring edge hardness, `[0, 1]`.
    pub trajectory_edge_hardness: f64,
    /// Orbit speed, `[0, 1]`.
    pub trajectory_speed: f64,
    /// Trail strength, `[0, 1]`.
    pub trajectory_trail: f64,
    /// Ring color.
    pub trajectory_rgb: Rgb,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            penumbra_width: 0.4,
            chromatic_fringe_enabled: false,
            chromatic_fringe: 0.3,
            chromatic_fringe_rgb: DEFAULT_FRINGE_RGB,
            breathing_enabled: false,
            wobble_amount: 0.03,
            wobble_speed: 0.4,
            trajectory_enabled: false,
            trajectory_diameter: 0.15,
            trajectory_edge_hardness: 0.3,
            trajectory_speed: 0.4,
            trajectory_trail: 0.3,
            trajectory_rgb: [1.0, 0.5, 0.2],
        }
    }
}

/// Scene-wide settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneParams {
    /// Wall tint added to the dark wall base.
    pub wall_tint: Rgb,
    /// Hotspot light color.
    pub light_rgb: Rgb,
    /// Penumbra and bloom color.
    pub edge_rgb: Rgb,
    /// Bloom halo strength, `[0, 1]`.
    pub bloom: f64,
    /// Soft blur strength used while breathing, `[0.01, 1]`.
    pub soft_blur: f64,
    /// Whole-frame haze, `[0, 1]`.
    pub haze: f64,
    /// Enable the animated fog.
    pub moving_light_enabled: bool,
    /// Fog brightness, `[0, 1]`.
    pub moving_light_intensity: f64,
    /// Fog blob size, `[0, 1]`.
    pub moving_light_spread: f64,
    /// Fog color and flicker dynamics, `[0, 1]`.
    pub moving_light_dynamic: f64,
    /// Fog wander range, `[0, 1]`.
    pub moving_light_range: f64,
    /// Break fog blobs into six wandering anchors.
    pub moving_light_irregular: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            wall_tint: [0.08, 0.06, 0.05],
            light_rgb: default_light_rgb(),
            edge_rgb: default_edge_rgb(),
            bloom: 0.5,
            soft_blur: 0.35,
            haze: 0.0,
            moving_light_enabled: false,
            moving_light_intensity: 0.6,
            moving_light_spread: 0.25,
            moving_light_dynamic: 0.5,
            moving_light_range: 0.5,
            moving_light_irregular: false,
        }
    }
}

impl HaloParams {
    /// Parse parameters from JSON. Missing fields take defaults.
    pub fn from_reader<R: std::io::Read>(reader: R) -> HaloResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| HaloError::serde(format!("parameter JSON parse failed: {e}")))
    }

    /// Parse parameters from a JSON string.
    pub fn from_json_str(json: &str) -> HaloResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| HaloError::serde(format!("parameter JSON parse failed: {e}")))
    }

    /// Read parameters from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> HaloResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            HaloError::serde(format!("open parameters '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> HaloResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HaloError::serde(format!("parameter JSON encode failed: {e}")))
    }

    /// `true` when any time-driven effect is enabled and a driver should re-render per tick.
    pub fn needs_time(&self) -> bool {
        self.edge.breathing_enabled
            || self.edge.trajectory_enabled
            || self.scene.moving_light_enabled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
