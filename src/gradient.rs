//! Color-stop synthesis for every visual layer, plus the stop sampler.
//!
//! All builders are pure. Their output is always ascending by `t`, starts at `t = 0` and keeps
//! every channel in `[0, 1]`.

pub(crate) mod builders;
pub(crate) mod stops;

pub use builders::{
    build_bloom_stops, build_chromatic_fringe_ring_stops, build_edge_falloff_stops,
    build_fog_blob_stops, build_horizon_stops, build_multi_ring_stops, build_penumbra_only_stops,
    build_radial_stops, build_sector_overlay_stops, build_sector_stops, build_vignette_stops,
    transition_t,
};
pub use stops::{GradientStop, sample_stops, stops_are_well_formed};
