use crate::foundation::error::{HaloError, HaloResult};

const Q16_ONE: u32 = 1 << 16;

/// Normalized Gaussian weights in Q16 fixed point, `2 * radius + 1` taps summing to `1 << 16`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BlurKernel {
    weights: Vec<u32>,
}

impl BlurKernel {
    pub(crate) fn gaussian(radius: u32, sigma: f32) -> HaloResult<Self> {
        if radius == 0 {
            return Ok(Self {
                weights: vec![Q16_ONE],
            });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(HaloError::validation("blur sigma must be > 0"));
        }

        let r = radius as i64;
        let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
        let raw: Vec<f64> = (-r..=r).map(|i| (-(i * i) as f64 / denom).exp()).collect();
        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 {
            return Err(HaloError::render("gaussian kernel sum is zero"));
        }

        let mut weights: Vec<u32> = raw
            .iter()
            .map(|w| ((w / sum) * f64::from(Q16_ONE)).round().clamp(0.0, f64::from(Q16_ONE)) as u32)
            .collect();
        // Rounding drift goes into the center tap so the kernel preserves flat regions.
        let total: i64 = weights.iter().map(|&w| i64::from(w)).sum();
        let mid = weights.len() / 2;
        let fixed =
            (i64::from(weights[mid]) + i64::from(Q16_ONE) - total).clamp(0, i64::from(Q16_ONE));
        weights[mid] = fixed as u32;
        Ok(Self { weights })
    }

    pub(crate) fn radius(&self) -> usize {
        self.weights.len() / 2
    }
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Separable Gaussian blur of a premultiplied RGBA8 buffer with clamped edges.
pub(crate) fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> HaloResult<Vec<u8>> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| HaloError::render("blur buffer size overflow"))?;
    if src.len() != expected {
        return Err(HaloError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    let kernel = BlurKernel::gaussian(radius, sigma)?;
    if kernel.radius() == 0 {
        return Ok(src.to_vec());
    }

    let mut tmp = vec![0u8; expected];
    let mut out = vec![0u8; expected];
    convolve(src, &mut tmp, width as usize, height as usize, &kernel, Axis::X);
    convolve(&tmp, &mut out, width as usize, height as usize, &kernel, Axis::Y);
    Ok(out)
}

/// Blur with a CSS-style length: `sigma = blur_px`, kernel truncated at `2 * sigma`.
pub(crate) fn blur_css_px(
    src: &[u8],
    width: u32,
    height: u32,
    blur_px: u32,
) -> HaloResult<Vec<u8>> {
    if blur_px == 0 {
        return blur_rgba8_premul(src, width, height, 0, 1.0);
    }
    blur_rgba8_premul(src, width, height, blur_px * 2, blur_px as f32)
}

fn convolve(src: &[u8], dst: &mut [u8], w: usize, h: usize, kernel: &BlurKernel, axis: Axis) {
    let r = kernel.radius() as isize;
    let (len, lines) = match axis {
        Axis::X => (w, h),
        Axis::Y => (h, w),
    };
    let index = |line: usize, pos: usize| match axis {
        Axis::X => (line * w + pos) * 4,
        Axis::Y => (pos * w + line) * 4,
    };

    for line in 0..lines {
        for pos in 0..len {
            let mut acc = [0u64; 4];
            for (k, &weight) in kernel.weights.iter().enumerate() {
                let sp = (pos as isize + k as isize - r).clamp(0, len as isize - 1) as usize;
                let si = index(line, sp);
                for (a, &v) in acc.iter_mut().zip(&src[si..si + 4]) {
                    *a += u64::from(weight) * u64::from(v);
                }
            }
            let di = index(line, pos);
            for (d, a) in dst[di..di + 4].iter_mut().zip(acc) {
                *d = ((a + 32_768) >> 16).min(255) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
