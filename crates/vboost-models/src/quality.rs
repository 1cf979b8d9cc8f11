//! Quality score pair and scoring constants.

use serde::{Deserialize, Serialize};

/// Edge length of the square canvas both frames are resized to before scoring.
pub const SCORE_CANVAS: u32 = 256;

/// PSNR reported for a zero-MSE (identical) frame pair, in decibels.
///
/// The true value diverges to infinity, which does not survive JSON
/// serialization toward the host UI. Any nonzero MSE on the 8-bit canvas
/// yields well under 100 dB, so the sentinel cannot collide with a computed
/// score.
pub const PSNR_IDENTICAL_DB: f64 = 100.0;

/// Maximum representable per-channel sample value (8-bit).
pub const SAMPLE_MAX: f64 = 255.0;

/// SSIM sliding window edge length, in pixels.
pub const SSIM_WINDOW: u32 = 7;

/// SSIM luminance stabilization constant factor.
pub const SSIM_K1: f64 = 0.01;

/// SSIM contrast stabilization constant factor.
pub const SSIM_K2: f64 = 0.03;

/// Similarity scores for one frame pair.
///
/// Both values come from the same comparison: a report either carries the
/// full pair or no scores at all, never one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    /// Peak signal-to-noise ratio in decibels
    pub psnr: f64,
    /// Structural similarity index in [-1, 1]
    pub ssim: f64,
}

impl QualityScores {
    pub fn new(psnr: f64, ssim: f64) -> Self {
        Self { psnr, ssim }
    }

    /// Whether the pair describes an identical frame comparison.
    pub fn is_identical(&self) -> bool {
        self.psnr >= PSNR_IDENTICAL_DB && (self.ssim - 1.0).abs() < 1e-9
    }
}
