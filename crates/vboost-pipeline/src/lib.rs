//! Enhancement pipeline orchestration.
//!
//! This crate provides:
//! - The `Enhancer` capability trait and the placeholder passthrough
//!   implementation
//! - Pipeline configuration
//! - Run orchestration: transform, frame scoring, fail-soft publish
//! - A tracing init helper for hosts

pub mod config;
pub mod enhancer;
pub mod error;
pub mod processor;
pub mod telemetry;

pub use config::PipelineConfig;
pub use enhancer::{Enhancer, PassthroughEnhancer};
pub use error::{PipelineError, PipelineResult};
pub use processor::Pipeline;
