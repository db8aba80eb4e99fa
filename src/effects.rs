//! Time-driven effects layered on top of the static spot.
//!
//! Each effect is split into a pure part (angles, offsets, blob layouts) that can be inspected
//! and tested without a surface, and a small raster step the compositor drives.

pub(crate) mod breathing;
pub(crate) mod fog;
pub(crate) mod trajectory;

pub use breathing::{BreathingWarp, wobble_offset};
pub use fog::{FogBlob, fog_blobs, fog_layer_count};
pub use trajectory::{RingPlacement, TrajectoryLayout, trajectory_angle, trajectory_layout};
