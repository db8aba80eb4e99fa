use crate::params::HaloParams;

/// How the spot itself is drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotPath {
    /// Bloom and main spot, no animation.
    Static,
    /// Main spot warped by the breathing resampler, bloom on top.
    Breathing,
    /// Orbiting penumbra ring with trail under a stationary core.
    Trajectory,
}

/// Whole-frame haze pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazePass {
    /// Blur length in pixels.
    pub blur_px: u32,
    /// Opacity of the blurred copy.
    pub alpha: f32,
}

/// Decisions for one render call. Pure function of the parameters and the clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlan {
    /// Animation clock, `None` for a static frame.
    pub time: Option<f64>,
    /// Spot drawing path.
    pub spot: SpotPath,
    /// Draw the moving-light fog.
    pub fog: bool,
    /// Draw the grain over the lit area.
    pub light_noise: bool,
    /// Blur applied to the offscreen composite before it reaches the target. Set whenever
    /// breathing is enabled with `soft_blur > 0.02`, whatever the clock or spot path.
    pub soft_blur_px: Option<u32>,
    /// Haze pass over the finished frame.
    pub haze: Option<HazePass>,
    /// Draw into a full-size offscreen surface first.
    pub use_offscreen: bool,
}

/// Decide how to draw `params` at `time`.
///
/// Without a clock every time-driven effect falls back to the static frame, though the
/// breathing soft blur still applies. With one, trajectory takes precedence over breathing and
/// the fog runs independently. Non-finite times count as absent.
pub fn plan_frame(params: &HaloParams, time: Option<f64>) -> FramePlan {
    let time = time.filter(|t| t.is_finite());
    let animated = time.is_some();

    let spot = if animated && params.edge.trajectory_enabled {
        SpotPath::Trajectory
    } else if animated && params.edge.breathing_enabled {
        SpotPath::Breathing
    } else {
        SpotPath::Static
    };

    let soft_blur = params.scene.soft_blur;
    let soft_blur_px = (params.edge.breathing_enabled && soft_blur > 0.02)
        .then(|| ((50.0 * soft_blur).round() as u32).max(2));

    let haze = params.scene.haze;
    let haze = (haze > 0.01).then(|| HazePass {
        blur_px: ((18.0 + 32.0 * haze).round() as u32).max(4),
        alpha: (0.3 + 0.4 * haze) as f32,
    });

    let breathing_or_orbit =
        animated && (params.edge.breathing_enabled || params.edge.trajectory_enabled);

    FramePlan {
        time,
        spot,
        fog: animated && params.scene.moving_light_enabled,
        light_noise: !breathing_or_orbit,
        soft_blur_px,
        haze,
        use_offscreen: spot != SpotPath::Static || soft_blur_px.is_some(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
