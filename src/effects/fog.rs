use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Point, Rgb, clamp_unit, lerp_rgb};
use crate::geometry::SpotGeometry;
use crate::params::HaloParams;

/// One radial fog blob, positioned relative to the spot center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogBlob {
    /// Blob center offset from the spot center, in pixels.
    pub offset: Point,
    /// Blob radius in pixels.
    pub radius: f64,
    /// Blob color.
    pub rgb: Rgb,
    /// Alpha at the blob center.
    pub center_alpha: f64,
}

/// Number of fog layers: five when irregular, three otherwise.
pub fn fog_layer_count(params: &HaloParams) -> usize {
    if params.scene.moving_light_irregular { 5 } else { 3 }
}

/// Fog blobs for one frame, in draw order.
///
/// Every layer wanders along its own Lissajous-like path inside the spot and takes a color
/// that drifts between the edge color and a cosine rainbow palette. Irregular fog splits each
/// layer into six anchors orbiting the layer center.
pub fn fog_blobs(params: &HaloParams, geom: &SpotGeometry, time: f64) -> Vec<FogBlob> {
    let scene = &params.scene;
    let base = scene.edge_rgb;
    let intensity = scene.moving_light_intensity;
    let spread = scene.moving_light_spread;
    let dyn_ = scene.moving_light_dynamic;
    let range = scene.moving_light_range;
    let irregular = scene.moving_light_irregular;
    let r = geom.radius;
    let t = time;

    let layers = fog_layer_count(params);
    let anchors = if irregular { 6 } else { 1 };
    let mut blobs = Vec::with_capacity(layers * anchors);

    for i in 0..layers {
        let fi = i as f64;
        let li = fi / (layers.max(2) - 1) as f64;

        let f1 = 0.7 + 0.18 * fi;
        let f2 = 1.21 + 0.13 * fi;
        let f3 = 0.93 + 0.16 * fi;
        let ax = (t * f1).sin() + 0.6 * (t * f2 + 1.7 * fi).sin();
        let ay = (t * f3 + 0.9).cos() + 0.5 * (t * f1 * 0.8 + 2.3 * fi).sin();
        let wander = r * (0.25 + 0.6 * range) * 0.35;
        let layer_center = Point::new(ax * wander, ay * wander);

        let fog_radius = r * (0.6 + 0.4 * spread + 0.35 * range + 0.18 * li);

        let phase = (t * (0.06 + 0.03 * fi + 0.05 * dyn_) + li * 0.27).rem_euclid(1.0);
        let rainbow =
            [0.0, 0.33, 0.67].map(|shift| (0.5 + 0.5 * (TAU * (phase + shift)).cos()) as f32);
        let mix = clamp_unit(0.3 + 0.3 * li + dyn_ * 0.5);
        let rgb = lerp_rgb(base, rainbow, mix as f32);

        let jitter = 0.7 + (0.3 + 0.5 * dyn_) * (t * (1.3 + 0.4 * fi) + li * 3.1).sin();
        let center_alpha = intensity * (0.4 + 0.6 * li) * jitter;

        for a in 0..anchors {
            let fa = a as f64;
            let (offset, radius) = if irregular {
                let phase_a = fa * (PI / 3.0) + 1.1 * (t * (0.7 + 0.15 * fa) + fa * 1.3).sin();
                let reach = fog_radius * (0.25 + 0.35 * (t * 0.8 + fa * 0.9).sin());
                let offset = Point::new(
                    layer_center.x + phase_a.cos() * reach,
                    layer_center.y + phase_a.sin() * reach,
                );
                let radius =
                    fog_radius * (0.7 + 0.4 * (t * (1.1 + 0.3 * fa) + li * 2.1).sin().abs());
                (offset, radius)
            } else {
                (layer_center, fog_radius)
            };
            blobs.push(FogBlob {
                offset,
                radius,
                rgb,
                center_alpha,
            });
        }
    }
    blobs
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fog.rs"]
mod tests;
