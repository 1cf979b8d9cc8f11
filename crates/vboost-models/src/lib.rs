//! Shared data models for the vboost pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Run identifiers and run reports
//! - Quality score pairs and scoring constants
//! - Remote artifact records

pub mod artifact;
pub mod quality;
pub mod run;

// Re-export common types
pub use artifact::RemoteArtifact;
pub use quality::{
    QualityScores, PSNR_IDENTICAL_DB, SAMPLE_MAX, SCORE_CANVAS, SSIM_K1, SSIM_K2, SSIM_WINDOW,
};
pub use run::{RunId, RunReport};
