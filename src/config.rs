//! Model parameters and the simulation rectangle.

use crate::error::ModelError;
use crate::float::Float;
use crate::vec::Vec2;

/// Global parameters shared by every particle and spring in a model.
///
/// # Builder Pattern
/// ```
/// use sproing::config::ModelConfig;
/// use sproing::vec::Vec2;
///
/// let config: ModelConfig<f32> = ModelConfig::new()
///     .with_gravity(Vec2::new(0.0, 0.5))
///     .with_stiffness(0.2)
///     .with_restitution(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModelConfig<F: Float> {
    /// Added to every free particle's velocity each tick. Default: (0, 0.5).
    pub gravity: Vec2<F>,
    /// Scale on the position increment, in [0, 1]. Default: 1.0.
    pub damping: F,
    /// Spring constant shared by all springs. Default: 0.1.
    pub stiffness: F,
    /// Fraction of the wall-normal velocity kept on contact, in [0, 1]. Default: 0.75.
    pub restitution: F,
    /// Fraction of the wall-tangential velocity kept on contact. Default: 0.1.
    pub surface_friction: F,
}

impl<F: Float> ModelConfig<F> {
    /// Create a config with the default values.
    pub fn new() -> Self {
        ModelConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(0.5)),
            damping: F::one(),
            stiffness: F::from_f32(0.1),
            restitution: F::from_f32(0.75),
            surface_friction: F::from_f32(0.1),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_surface_friction(mut self, surface_friction: F) -> Self {
        self.surface_friction = surface_friction;
        self
    }

    /// Check ranges for hosts that take parameters from users.
    ///
    /// The model itself accepts any config; this is advisory.
    pub fn validate(&self) -> Result<(), ModelError> {
        let named = [
            ("gravity.x", self.gravity.x),
            ("gravity.y", self.gravity.y),
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("restitution", self.restitution),
            ("surface_friction", self.surface_friction),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteParameter(name));
            }
        }

        let unit = |v: F| v >= F::zero() && v <= F::one();
        if !unit(self.damping) {
            return Err(ModelError::InvalidDamping);
        }
        if !unit(self.restitution) {
            return Err(ModelError::InvalidRestitution);
        }
        if !unit(self.surface_friction) {
            return Err(ModelError::InvalidSurfaceFriction);
        }
        Ok(())
    }
}

impl<F: Float> Default for ModelConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Axis-aligned rectangle particles are confined to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub left: F,
    pub top: F,
    pub right: F,
    pub bottom: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(left: F, top: F, right: F, bottom: F) -> Self {
        Bounds { left, top, right, bottom }
    }

    /// A rectangle anchored at the origin.
    pub fn from_size(width: F, height: F) -> Self {
        Self::new(F::zero(), F::zero(), width, height)
    }

    pub fn width(&self) -> F { self.right - self.left }
    pub fn height(&self) -> F { self.bottom - self.top }

    pub fn center(&self) -> Vec2<F> {
        Vec2::new(
            (self.left + self.right) * F::half(),
            (self.top + self.bottom) * F::half(),
        )
    }
}
