//! Error types for shape generation and system configuration.
//!
//! Only misconfiguration is an error. Re-entrant transition requests, a
//! missing hand and degenerate geometry all degrade silently.

use thiserror::Error;

/// Everything that can be rejected at construction or generation time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MorphError {
    /// Shape radius must be finite and strictly positive.
    #[error("shape radius must be finite and > 0, got {0}")]
    InvalidRadius(f32),

    /// A particle system needs at least one particle.
    #[error("particle count must be > 0")]
    EmptyParticleSet,

    /// Morph speed must be finite and strictly positive.
    #[error("morph speed must be finite and > 0, got {0}")]
    InvalidMorphSpeed(f32),

    /// Gesture cooldown must be finite and non-negative.
    #[error("gesture cooldown must be finite and >= 0, got {0}")]
    InvalidCooldown(f32),

    /// Interaction radius must be finite and strictly positive.
    #[error("interaction radius must be finite and > 0, got {0}")]
    InvalidInteractionRadius(f32),

    /// Exponential smoothing factor must lie in (0, 1].
    #[error("smoothing factor must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),

    /// Camera parameters that would produce a degenerate projection.
    #[error("invalid camera: {0}")]
    InvalidCamera(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MorphError>;
