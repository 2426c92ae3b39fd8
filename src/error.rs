//! Error types for model construction and configuration.
//!
//! Stepping the simulation never fails. These errors only surface from the
//! opt-in checked entry points (`ModelConfig::validate`, `Model::try_add_spring`).

use core::fmt;

/// Errors reported by checked construction and configuration calls.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Restitution must be in [0, 1].
    InvalidRestitution,
    /// Surface friction must be in [0, 1].
    InvalidSurfaceFriction,
    /// A parameter was NaN or infinite.
    NonFiniteParameter(&'static str),
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A spring cannot join a particle to itself.
    SelfLoop { index: usize },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            ModelError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            ModelError::InvalidSurfaceFriction => write!(f, "surface friction must be in [0, 1]"),
            ModelError::NonFiniteParameter(name) => write!(f, "{} must be finite", name),
            ModelError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            ModelError::SelfLoop { index } => {
                write!(f, "spring would join particle {} to itself", index)
            }
        }
    }
}
