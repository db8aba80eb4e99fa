use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{HaloError, HaloResult};
use crate::params::HaloParams;
use crate::render::compositor::render;
use crate::render::surface::{FrameRGBA, Surface};

/// Side length of thumbnails.
pub const THUMBNAIL_SIZE: u32 = 80;

/// Render a single frame into a fresh surface and read it back.
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
pub fn render_frame(
    params: &HaloParams,
    canvas: Canvas,
    time: Option<f64>,
) -> HaloResult<FrameRGBA> {
    let mut surface = Surface::for_canvas(canvas)?;
    render(&mut surface, params, time)?;
    Ok(surface.to_frame())
}

/// Render an `80x80` preview of `params`, off any visible surface.
pub fn render_thumbnail(params: &HaloParams, time: Option<f64>) -> HaloResult<FrameRGBA> {
    render_frame(
        params,
        Canvas {
            width: THUMBNAIL_SIZE,
            height: THUMBNAIL_SIZE,
        },
        time,
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters reported by [`render_sequence`].
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames_rendered: u64,
    /// Frames whose pixels were copied from the previous frame because nothing animates.
    pub frames_reused: u64,
}

/// Render `range` at `fps` into `sink`, with `time = frame / fps`.
///
/// One surface is reused across the range. When `params` has no time-driven effect every frame
/// is identical, so the first one is rendered and the rest are reused.
#[tracing::instrument(skip(params, sink))]
pub fn render_sequence(
    params: &HaloParams,
    canvas: Canvas,
    fps: Fps,
    range: FrameRange,
    sink: &mut dyn FrameSink,
) -> HaloResult<RenderStats> {
    if range.is_empty() {
        return Err(HaloError::validation("render range must be non-empty"));
    }
    let fps = Fps::new(fps.num, fps.den)?;

    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps,
    })?;

    let animated = params.needs_time();
    let mut surface = Surface::for_canvas(canvas)?;
    let mut stats = RenderStats::default();
    let mut last: Option<FrameRGBA> = None;

    for f in range.start.0..range.end.0 {
        let idx = FrameIndex(f);
        let frame = match (&last, animated) {
            (Some(prev), false) => {
                stats.frames_reused += 1;
                prev.clone()
            }
            _ => {
                render(&mut surface, params, Some(fps.frame_time_secs(idx)))?;
                surface.to_frame()
            }
        };
        sink.push_frame(idx, &frame)?;
        stats.frames_rendered += 1;
        last = Some(frame);
    }

    sink.end()?;
    tracing::debug!(?stats, "sequence finished");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
