use crate::foundation::core::Point;
use crate::geometry::SpotGeometry;
use crate::params::HaloParams;

/// Number of trailing ghost rings.
pub const TRAIL_STEPS: u32 = 8;
const TRAIL_SPACING: f64 = 0.12;

/// Angular position of the orbiting ring at `time`: `-time * (0.25 + 1.6 * speed)`.
///
/// The angle decreases over time in y-down space, starting on the positive x axis.
pub fn trajectory_angle(time: f64, speed: f64) -> f64 {
    -time * (0.25 + 1.6 * speed)
}

/// One ring to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPlacement {
    /// Ring center in pixels.
    pub center: Point,
    /// Layer opacity.
    pub alpha: f64,
}

/// Rings of the trajectory effect for one frame, in draw order (oldest trail step first, the
/// current ring last).
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryLayout {
    /// Orbit radius in pixels.
    pub path_radius: f64,
    /// Current angle in radians.
    pub angle: f64,
    /// Rings in draw order.
    pub rings: Vec<RingPlacement>,
}

impl TrajectoryLayout {
    /// The ring at the current angle.
    pub fn current(&self) -> Option<&RingPlacement> {
        self.rings.last()
    }
}

/// Lay out the orbiting ring and its trail around `center`.
pub fn trajectory_layout(
    params: &HaloParams,
    geom: &SpotGeometry,
    center: Point,
    time: f64,
) -> TrajectoryLayout {
    let edge = &params.edge;
    let path_radius = geom.radius * edge.trajectory_diameter;
    let angle = trajectory_angle(time, edge.trajectory_speed);
    let at = |a: f64| {
        Point::new(
            center.x + path_radius * a.cos(),
            center.y + path_radius * a.sin(),
        )
    };

    let mut rings = Vec::with_capacity(TRAIL_STEPS as usize + 1);
    let trail = edge.trajectory_trail;
    if trail > 0.02 {
        for k in (1..=TRAIL_STEPS).rev() {
            let k = f64::from(k);
            rings.push(RingPlacement {
                center: at(angle + k * TRAIL_SPACING),
                alpha: trail * 0.52 * (1.0 - k / f64::from(TRAIL_STEPS)),
            });
        }
    }
    rings.push(RingPlacement {
        center: at(angle),
        alpha: 1.0,
    });

    TrajectoryLayout {
        path_radius,
        angle,
        rings,
    }
}

/// Parameters for the orbiting ring: trajectory color as the edge color and a penumbra band
/// narrowed by the edge hardness.
pub(crate) fn ring_params(params: &HaloParams) -> HaloParams {
    let mut p = params.clone();
    p.scene.edge_rgb = params.edge.trajectory_rgb;
    let hardness = 0.35 + 0.65 * params.edge.trajectory_edge_hardness;
    p.edge.penumbra_width = (params.edge.penumbra_width * hardness).max(0.05);
    p
}

/// Parameters for the stationary core drawn over the ring: widest penumbra.
pub(crate) fn core_params(params: &HaloParams) -> HaloParams {
    let mut p = params.clone();
    p.edge.penumbra_width = 1.0;
    p
}

#[cfg(test)]
#[path = "../../tests/unit/effects/trajectory.rs"]
mod tests;
