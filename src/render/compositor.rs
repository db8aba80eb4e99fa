use std::f64::consts::FRAC_PI_4;

use crate::effects::breathing::BreathingWarp;
use crate::effects::fog::fog_blobs;
use crate::effects::trajectory::{core_params, ring_params, trajectory_layout};
use crate::foundation::core::{Point, Rgb, clamp_unit_f32};
use crate::foundation::error::HaloResult;
use crate::geometry::{SpotGeometry, resolve_geometry};
use crate::gradient::{
    build_bloom_stops, build_chromatic_fringe_ring_stops, build_edge_falloff_stops,
    build_fog_blob_stops, build_horizon_stops, build_multi_ring_stops,
    build_penumbra_only_stops, build_radial_stops, build_sector_overlay_stops,
    build_sector_stops, build_vignette_stops,
};
use crate::params::{GradientMode, HaloParams};
use crate::render::blur::blur_css_px;
use crate::render::composite::{BlendMode, composite_in_place};
use crate::render::noise::{GRAIN_NOISE_SIZE, NoiseKind, WALL_NOISE_SIZE, noise_texture};
use crate::render::paint::{
    GradientFill, GradientShape, TextureFill, blit, fill_gradient, fill_texture,
};
use crate::render::plan::{FramePlan, HazePass, SpotPath, plan_frame};
use crate::render::raster::FillRegion;
use crate::render::surface::Surface;

/// Offscreen side for non-radial modes, relative to the spot diameter.
const NON_RADIAL_MARGIN: f64 = 1.25;
const FRINGE_RING_SCALE: f64 = 1.08;
const WALL_NOISE_ALPHA: f32 = 0.45;
const LIGHT_NOISE_ALPHA: f32 = 0.35;
const LIGHT_NOISE_REACH: f64 = 1.15;
const FOG_NOISE_ALPHA: f32 = 0.22;
const VIGNETTE_REACH: f64 = 0.75;

/// Paint one frame of the halo onto `surface`.
///
/// `time` is the animation clock in seconds; `None` renders the static frame. The whole
/// surface is overwritten.
#[tracing::instrument(skip(surface, params))]
pub fn render(surface: &mut Surface, params: &HaloParams, time: Option<f64>) -> HaloResult<()> {
    let canvas = surface.canvas();
    let plan = plan_frame(params, time);
    let geom = resolve_geometry(params, f64::from(canvas.width), f64::from(canvas.height));
    tracing::debug!(?plan, radius = geom.radius, "frame plan");

    let spot = Spot {
        params,
        geom,
        center: canvas.center(),
    };

    if plan.use_offscreen {
        let mut off = Surface::for_canvas(canvas)?;
        spot.paint_scene(&mut off, &plan)?;
        match plan.soft_blur_px {
            Some(px) => {
                let blurred = blur_css_px(off.data(), canvas.width, canvas.height, px)?;
                surface.replace_data(&blurred)?;
            }
            None => surface.copy_from(&off)?,
        }
    } else {
        spot.paint_scene(surface, &plan)?;
    }

    if plan.light_noise {
        spot.draw_light_noise(surface)?;
    }
    if let Some(haze) = plan.haze {
        apply_haze(surface, haze)?;
    }
    Ok(())
}

/// Opaque wall color for a tint: `round(min(1, base + 0.15 * tint) * 255)` per channel.
pub(crate) fn wall_rgb8(tint: Rgb) -> [u8; 3] {
    let ch = |base: f32, t: f32| ((base + clamp_unit_f32(t) * 0.15).min(1.0) * 255.0).round() as u8;
    [ch(0.12, tint[0]), ch(0.115, tint[1]), ch(0.11, tint[2])]
}

fn draw_wall(target: &mut Surface, tint: Rgb) -> HaloResult<()> {
    let [r, g, b] = wall_rgb8(tint);
    target.fill([r, g, b, 255]);

    let canvas = target.canvas();
    let reach = f64::from(canvas.width.max(canvas.height)) * VIGNETTE_REACH;
    let vignette = build_vignette_stops();
    fill_gradient(
        target,
        &GradientFill::over(
            GradientShape::centered(canvas.center(), reach),
            &vignette,
            FillRegion::Full,
        ),
    )?;

    let wall = noise_texture(NoiseKind::Wall, WALL_NOISE_SIZE);
    fill_texture(
        target,
        &TextureFill {
            texture: &wall,
            anchor: Point::ZERO,
            region: FillRegion::Full,
            opacity: WALL_NOISE_ALPHA,
            blend: BlendMode::SourceOver,
        },
    )
}

fn apply_haze(surface: &mut Surface, haze: HazePass) -> HaloResult<()> {
    let blurred = blur_css_px(surface.data(), surface.width(), surface.height(), haze.blur_px)?;
    composite_in_place(surface.data_mut(), &blurred, haze.alpha, BlendMode::SourceOver)
}

/// A spot to draw: parameters, resolved geometry and center on the current target.
#[derive(Clone, Copy)]
struct Spot<'a> {
    params: &'a HaloParams,
    geom: SpotGeometry,
    center: Point,
}

impl Spot<'_> {
    fn gradient(&self, radius: f64) -> GradientShape {
        GradientShape::spot(self.center, radius, self.geom.hotspot_offset_y)
    }

    fn disc(&self, radius: f64) -> FillRegion {
        FillRegion::disc(self.center, radius)
    }

    fn paint_scene(&self, target: &mut Surface, plan: &FramePlan) -> HaloResult<()> {
        draw_wall(target, self.params.scene.wall_tint)?;

        match (plan.spot, plan.time) {
            (SpotPath::Trajectory, Some(t)) => self.draw_trajectory(target, t)?,
            (SpotPath::Breathing, Some(t)) => self.draw_breathing(target, t)?,
            _ => {
                self.draw_bloom(target)?;
                self.draw_main(target)?;
            }
        }

        if let (true, Some(t)) = (plan.fog, plan.time) {
            self.draw_fog(target, t)?;
        }
        Ok(())
    }

    fn draw_bloom(&self, target: &mut Surface) -> HaloResult<()> {
        let bloom = self.params.scene.bloom;
        if bloom <= 0.01 {
            return Ok(());
        }
        let radius = self.geom.radius * (1.7 + 0.8 * bloom);
        let stops = build_bloom_stops(self.params);
        fill_gradient(
            target,
            &GradientFill::over(self.gradient(radius), &stops, self.disc(radius)),
        )
    }

    fn draw_main(&self, target: &mut Surface) -> HaloResult<()> {
        match self.params.color.gradient_mode {
            GradientMode::Radial => self.draw_mode_content(target, GradientMode::Radial),
            mode => self.draw_non_radial(target, mode),
        }
    }

    /// Non-radial modes are drawn on their own surface so the destination-in edge mask does not
    /// erase what is already on the target.
    fn draw_non_radial(&self, target: &mut Surface, mode: GradientMode) -> HaloResult<()> {
        let r = self.geom.radius;
        let size = (r * 2.0 * NON_RADIAL_MARGIN).ceil().max(0.0) as u32 + 4;
        let half = f64::from(size) / 2.0;
        let origin_x = (self.center.x - half).floor();
        let origin_y = (self.center.y - half).floor();

        let mut off = Surface::new(size, size)?;
        let local = Spot {
            center: Point::new(self.center.x - origin_x, self.center.y - origin_y),
            ..*self
        };
        local.draw_mode_content(&mut off, mode)?;

        let falloff = build_edge_falloff_stops(&self.geom);
        fill_gradient(
            &mut off,
            &GradientFill {
                shape: local.gradient(r),
                stops: &falloff,
                region: local.disc(r),
                opacity: 1.0,
                blend: BlendMode::DestinationIn,
            },
        )?;

        let edge = &self.params.edge;
        if edge.chromatic_fringe_enabled && edge.chromatic_fringe > 0.005 {
            let ring_r = r * FRINGE_RING_SCALE;
            let stops = build_chromatic_fringe_ring_stops(self.params, &self.geom);
            fill_gradient(
                &mut off,
                &GradientFill::over(local.gradient(ring_r), &stops, local.disc(ring_r)),
            )?;
        }

        blit(target, &off, origin_x as i64, origin_y as i64);
        Ok(())
    }

    fn draw_mode_content(&self, target: &mut Surface, mode: GradientMode) -> HaloResult<()> {
        let r = self.geom.radius;
        let c = self.center;
        let area = self.disc(r);

        match mode {
            GradientMode::Radial => {
                let stops = build_radial_stops(self.params, &self.geom);
                fill_gradient(target, &GradientFill::over(self.gradient(r), &stops, area))
            }
            GradientMode::Horizon => {
                let angle = self.params.color.horizon.tilt * FRAC_PI_4;
                let (dx, dy) = (angle.sin() * r, angle.cos() * r);
                let shape = GradientShape::Linear {
                    start: Point::new(c.x - dx, c.y - dy),
                    end: Point::new(c.x + dx, c.y + dy),
                };
                let stops = build_horizon_stops(self.params);
                fill_gradient(target, &GradientFill::over(shape, &stops, area))
            }
            GradientMode::MultiRing => {
                let stops = build_multi_ring_stops(self.params);
                fill_gradient(target, &GradientFill::over(self.gradient(r), &stops, area))
            }
            GradientMode::Sector => {
                let sweep = GradientShape::Conic {
                    center: c,
                    start_angle: 0.0,
                };
                let stops = build_sector_stops(self.params);
                fill_gradient(target, &GradientFill::over(sweep, &stops, area))?;

                let overlay = GradientShape::Radial {
                    focal: Point::new(c.x, c.y + r * self.geom.hotspot_offset_y),
                    r0: r * 0.3,
                    center: c,
                    r1: r,
                };
                let stops = build_sector_overlay_stops(self.params);
                fill_gradient(target, &GradientFill::over(overlay, &stops, area))
            }
        }
    }

    fn draw_penumbra_ring(&self, target: &mut Surface, opacity: f64) -> HaloResult<()> {
        let r = self.geom.radius;
        let stops = build_penumbra_only_stops(self.params, &self.geom);
        fill_gradient(
            target,
            &GradientFill {
                shape: self.gradient(r),
                stops: &stops,
                region: self.disc(r),
                opacity: opacity as f32,
                blend: BlendMode::SourceOver,
            },
        )
    }

    fn draw_trajectory(&self, target: &mut Surface, time: f64) -> HaloResult<()> {
        let canvas = target.canvas();
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let layout = trajectory_layout(self.params, &self.geom, self.center, time);

        let ring = ring_params(self.params);
        let ring_geom = resolve_geometry(&ring, w, h);
        for placement in &layout.rings {
            Spot {
                params: &ring,
                geom: ring_geom,
                center: placement.center,
            }
            .draw_penumbra_ring(target, placement.alpha)?;
        }

        let core = core_params(self.params);
        let core_spot = Spot {
            params: &core,
            geom: resolve_geometry(&core, w, h),
            center: self.center,
        };
        core_spot.draw_bloom(target)?;
        core_spot.draw_main(target)
    }

    fn draw_breathing(&self, target: &mut Surface, time: f64) -> HaloResult<()> {
        self.draw_main(target)?;
        let [r, g, b] = wall_rgb8(self.params.scene.wall_tint);
        BreathingWarp {
            center: self.center,
            radius: self.geom.radius,
            time,
            amount: self.params.edge.wobble_amount,
            speed: self.params.edge.wobble_speed,
            fill: [r, g, b, 255],
        }
        .apply(target);
        self.draw_bloom(target)
    }

    fn draw_fog(&self, target: &mut Surface, time: f64) -> HaloResult<()> {
        let area = FillRegion::square(self.center, self.geom.radius * 2.0);
        for blob in fog_blobs(self.params, &self.geom, time) {
            let at = Point::new(self.center.x + blob.offset.x, self.center.y + blob.offset.y);
            let stops = build_fog_blob_stops(blob.rgb, blob.center_alpha);
            fill_gradient(
                target,
                &GradientFill {
                    shape: GradientShape::centered(at, blob.radius),
                    stops: &stops,
                    region: area,
                    opacity: 1.0,
                    blend: BlendMode::Screen,
                },
            )?;
        }

        let grain = noise_texture(NoiseKind::Grain, GRAIN_NOISE_SIZE);
        fill_texture(
            target,
            &TextureFill {
                texture: &grain,
                anchor: self.center,
                region: area,
                opacity: FOG_NOISE_ALPHA,
                blend: BlendMode::SoftLight,
            },
        )
    }

    fn draw_light_noise(&self, target: &mut Surface) -> HaloResult<()> {
        let grain = noise_texture(NoiseKind::Grain, GRAIN_NOISE_SIZE);
        fill_texture(
            target,
            &TextureFill {
                texture: &grain,
                anchor: self.center,
                region: self.disc(self.geom.radius * LIGHT_NOISE_REACH),
                opacity: LIGHT_NOISE_ALPHA,
                blend: BlendMode::SourceOver,
            },
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
