use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::foundation::core::premul_rgba8_from_unit;
use crate::foundation::math::hash_unit;

/// Side length of the wall texture tile.
pub(crate) const WALL_NOISE_SIZE: u16 = 128;
/// Side length of the light/fog grain tile.
pub(crate) const GRAIN_NOISE_SIZE: u16 = 64;

const WALL_SEED: u64 = 0x5741_4c4c;
const GRAIN_SEED: u64 = 0x4752_4149;

/// Which procedural texture to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum NoiseKind {
    /// Plaster texture: gray `128 ± 20`, alpha `6..=19`.
    Wall,
    /// Fine grain: gray `128 ± 20`, alpha `4..=16`.
    Grain,
}

/// Immutable square tile of premultiplied RGBA8 texels.
pub(crate) struct NoiseTexture {
    pub(crate) pixmap: Arc<vello_cpu::Pixmap>,
}

impl NoiseTexture {
    fn generate(kind: NoiseKind, size: u16) -> Self {
        let mut pixmap = vello_cpu::Pixmap::new(size, size);
        let n = u32::from(size);
        for (i, texel) in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4).enumerate() {
            let (x, y) = (i as u32 % n, i as u32 / n);
            let (gray, alpha) = match kind {
                NoiseKind::Wall => {
                    let v = (hash_unit(WALL_SEED, x, y, 0) - 0.5) * 25.0
                        + (hash_unit(WALL_SEED, x, y, 1) - 0.5) * 15.0;
                    let gray = (128.0 + v).clamp(0.0, 255.0).round();
                    let alpha = (hash_unit(WALL_SEED, x, y, 2) * 14.0 + 6.0).floor();
                    (gray, alpha)
                }
                NoiseKind::Grain => {
                    let gray = (128.0 + (hash_unit(GRAIN_SEED, x, y, 0) - 0.5) * 40.0).round();
                    let alpha = (hash_unit(GRAIN_SEED, x, y, 1) * 12.0 + 4.0).round();
                    (gray, alpha)
                }
            };
            let g = (gray / 255.0) as f32;
            texel.copy_from_slice(&premul_rgba8_from_unit([g, g, g], (alpha / 255.0) as f32));
        }
        Self {
            pixmap: Arc::new(pixmap),
        }
    }

    /// Repeating, nearest-sampled image paint of the tile with texel `(0, 0)` at the origin.
    pub(crate) fn paint(&self) -> vello_cpu::Image {
        vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::clone(&self.pixmap)),
            sampler: vello_cpu::peniko::ImageSampler {
                x_extend: vello_cpu::peniko::Extend::Repeat,
                y_extend: vello_cpu::peniko::Extend::Repeat,
                quality: vello_cpu::peniko::ImageQuality::Low,
                alpha: 1.0,
            },
        }
    }
}

type NoiseCache = Mutex<HashMap<(NoiseKind, u16), Arc<NoiseTexture>>>;

static NOISE_CACHE: OnceLock<NoiseCache> = OnceLock::new();

/// Process-wide texture of `kind` at `size`, generated on first request and shared afterwards.
pub(crate) fn noise_texture(kind: NoiseKind, size: u16) -> Arc<NoiseTexture> {
    let size = size.max(1);
    let cache = NOISE_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    map.entry((kind, size))
        .or_insert_with(|| {
            tracing::debug!(?kind, size, "generating noise texture");
            Arc::new(NoiseTexture::generate(kind, size))
        })
        .clone()
}

#[cfg(test)]
#[path = "../../tests/unit/render/noise.rs"]
mod tests;
