//! halolight renders a parametric, animated halo/spotlight glow onto a CPU raster.
//!
//! A light source against a dark wall: configurable beam geometry, four color distribution
//! modes, a soft penumbra, optional chromatic fringing and three time-driven effects (edge
//! breathing, an orbiting secondary ring and drifting colored fog).
//!
//! - Load or build a [`HaloParams`] tree
//! - Call [`render`] on a [`Surface`], or [`render_frame`] for a fresh one
//! - Stream a frame range into a [`FrameSink`] with [`render_sequence`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod effects;
pub mod encode;
pub mod geometry;
pub mod gradient;
pub mod params;
pub mod render;

pub use crate::foundation::core::{
    Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgb, Vec2, clamp_rgb, lerp_rgb,
};
pub use crate::foundation::error::{HaloError, HaloResult};

pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::geometry::{SpotGeometry, resolve_geometry};
pub use crate::params::{GradientMode, HaloParams};
pub use crate::render::{
    FramePlan, FrameRGBA, RenderStats, SpotPath, Surface, plan_frame, render, render_frame,
    render_sequence, render_thumbnail,
};

/// `true` when `params` enables a time-driven effect, so a driver should re-render every tick.
pub fn needs_time(params: &HaloParams) -> bool {
    params.needs_time()
}
