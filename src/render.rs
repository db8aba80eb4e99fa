//! CPU compositing of the halo frame.
//!
//! The compositor decides a [`FramePlan`] for the parameters and clock, then paints the wall,
//! the spot and the overlays onto a premultiplied RGBA8 [`Surface`]. Shapes are filled with
//! gradient and texture paints by `vello_cpu`; blending, blur and the breathing warp run on
//! the raw pixel buffers.

pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod compositor;
pub(crate) mod noise;
pub(crate) mod paint;
pub(crate) mod pipeline;
pub(crate) mod plan;
pub(crate) mod raster;
pub(crate) mod surface;

pub use compositor::render;
pub use pipeline::{RenderStats, THUMBNAIL_SIZE, render_frame, render_sequence, render_thumbnail};
pub use plan::{FramePlan, HazePass, SpotPath, plan_frame};
pub use surface::{FrameRGBA, Surface};
