//! Frame pair quality scoring.
//!
//! Both frames are resized to a fixed square canvas before scoring, so the
//! scores do not depend on source resolution. PSNR and SSIM always come back
//! as a pair: any failure yields `None` for both, never a partial result.

use image::{imageops::FilterType, DynamicImage, RgbImage};
use tracing::debug;

use vboost_models::{
    QualityScores, PSNR_IDENTICAL_DB, SAMPLE_MAX, SCORE_CANVAS, SSIM_K1, SSIM_K2, SSIM_WINDOW,
};

/// Resize a frame to the square scoring canvas (bilinear).
pub fn scale_to_canvas(frame: &DynamicImage) -> RgbImage {
    frame
        .resize_exact(SCORE_CANVAS, SCORE_CANVAS, FilterType::Triangle)
        .to_rgb8()
}

/// Score a frame pair.
///
/// Returns `None` when the scores cannot be computed; callers must treat the
/// pair as a unit.
pub fn score_frames(original: &DynamicImage, enhanced: &DynamicImage) -> Option<QualityScores> {
    let a = scale_to_canvas(original);
    let b = scale_to_canvas(enhanced);

    let psnr = psnr(&a, &b)?;
    let ssim = ssim(&a, &b)?;

    debug!(psnr, ssim, "Scored frame pair");
    Some(QualityScores::new(psnr, ssim))
}

/// Peak signal-to-noise ratio in decibels over all pixels and channels.
///
/// An identical pair has zero mean squared error; [`PSNR_IDENTICAL_DB`] is
/// reported in place of the divergent true value.
pub fn psnr(a: &RgbImage, b: &RgbImage) -> Option<f64> {
    if a.dimensions() != b.dimensions() {
        return None;
    }

    let ra = a.as_raw();
    let rb = b.as_raw();
    if ra.is_empty() {
        return None;
    }

    let mut sum = 0.0f64;
    for (&x, &y) in ra.iter().zip(rb.iter()) {
        let d = x as f64 - y as f64;
        sum += d * d;
    }
    let mse = sum / ra.len() as f64;

    if mse == 0.0 {
        return Some(PSNR_IDENTICAL_DB);
    }
    Some(10.0 * ((SAMPLE_MAX * SAMPLE_MAX) / mse).log10())
}

/// Structural similarity index in [-1, 1].
///
/// Sliding 7x7 window, stride 1, windows fully inside the canvas. Window
/// statistics pool the samples of all three color channels jointly rather
/// than averaging per-channel scores.
pub fn ssim(a: &RgbImage, b: &RgbImage) -> Option<f64> {
    let (w, h) = a.dimensions();
    if b.dimensions() != (w, h) || w < SSIM_WINDOW || h < SSIM_WINDOW {
        return None;
    }

    let ra = a.as_raw();
    let rb = b.as_raw();

    let win = SSIM_WINDOW as usize;
    let width = w as usize;
    let height = h as usize;

    let n = (win * win * 3) as f64;
    // Sample (n-1) normalization for variance and covariance
    let norm = n / (n - 1.0);
    let c1 = (SSIM_K1 * SAMPLE_MAX).powi(2);
    let c2 = (SSIM_K2 * SAMPLE_MAX).powi(2);

    let mut total = 0.0f64;
    let mut windows = 0u64;

    for y0 in 0..=(height - win) {
        for x0 in 0..=(width - win) {
            let (mut sa, mut sb, mut saa, mut sbb, mut sab) = (0.0f64, 0.0, 0.0, 0.0, 0.0);

            for y in y0..y0 + win {
                let row = 3 * (y * width + x0);
                for i in row..row + 3 * win {
                    let va = ra[i] as f64;
                    let vb = rb[i] as f64;
                    sa += va;
                    sb += vb;
                    saa += va * va;
                    sbb += vb * vb;
                    sab += va * vb;
                }
            }

            let ma = sa / n;
            let mb = sb / n;
            let var_a = (saa / n - ma * ma) * norm;
            let var_b = (sbb / n - mb * mb) * norm;
            let cov = (sab / n - ma * mb) * norm;

            let score = ((2.0 * ma * mb + c1) * (2.0 * cov + c2))
                / ((ma * ma + mb * mb + c1) * (var_a + var_b + c2));

            total += score;
            windows += 1;
        }
    }

    if windows == 0 {
        return None;
    }
    Some(total / windows as f64)
}
