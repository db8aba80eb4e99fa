//! Parameter tree, defaults, JSON I/O and the clamping validator.

pub(crate) mod clamp;
pub(crate) mod color;
pub(crate) mod model;

pub use clamp::normalize_ring_widths;
pub use color::{kelvin_to_rgb, wavelength_to_rgb};
pub use model::{
    ColorParams, EdgeParams, GradientMode, HaloParams, HorizonParams, MultiRingParams,
    SceneParams, SectorParams, SpotParams, default_edge_rgb, default_light_rgb,
};
