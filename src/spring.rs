//! Linear Hookean springs between two particles.

use crate::float::Float;
use crate::vec::Vec2;

/// Handle of a spring inside a [`Model`](crate::model::Model)'s spring arena.
///
/// Both endpoints of an edge store the same handle, so two adjacency entries
/// referring to one spring compare equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpringId(pub(crate) usize);

impl SpringId {
    /// Position of the spring in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A linear spring: a rest length and a cosmetic line width.
///
/// The spring holds no state about the particles it joins. Stiffness is a
/// model-wide parameter passed into [`Spring::force`] on every tick, and
/// there is no internal damping term; the model's velocity scale stands in
/// for it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    rest_length: F,
    width: F,
}

impl<F: Float> Spring<F> {
    pub fn new(rest_length: F) -> Self {
        Spring { rest_length, width: F::one() }
    }

    /// A spring already at rest between the two given points.
    pub fn between(a: Vec2<F>, b: Vec2<F>) -> Self {
        Self::new(a.distance(b))
    }

    /// Set the drawn line width.
    pub fn with_width(mut self, width: F) -> Self {
        self.width = width;
        self
    }

    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn width(&self) -> F { self.width }

    /// Rest length minus the current length. Positive when compressed.
    pub fn extension(&self, pos_a: Vec2<F>, pos_b: Vec2<F>) -> F {
        self.rest_length - pos_a.distance(pos_b)
    }

    /// Force on the particle at `pos_a` from the particle at `pos_b`.
    ///
    /// Points away from `b` when the spring is compressed and towards `b` when
    /// stretched. Swapping the arguments negates the result, which is what
    /// lets each endpoint accumulate its own half of the pair. Coincident
    /// endpoints give zero force because the unit vector of zero is zero.
    pub fn force(&self, pos_a: Vec2<F>, pos_b: Vec2<F>, stiffness: F) -> Vec2<F> {
        let delta = pos_a - pos_b;
        let extension = self.rest_length - delta.length();
        delta.unit().scale(stiffness * extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretched_spring_pulls() {
        let s = Spring::new(10.0f32);
        let f = s.force(Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0), 0.5);
        assert!((f.x - 5.0).abs() < 1e-6);
        assert!(f.y.abs() < 1e-6);
    }

    #[test]
    fn compressed_spring_pushes() {
        let s = Spring::new(10.0f32);
        let f = s.force(Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0), 1.0);
        assert!((f.y + 6.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_endpoints_give_zero() {
        let s = Spring::new(10.0f64);
        let p = Vec2::new(3.0, 3.0);
        assert_eq!(s.force(p, p, 1.0), Vec2::zero());
    }

    #[test]
    fn between_is_at_rest() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0, 4.0);
        let s = Spring::between(a, b);
        assert!((s.rest_length() - 5.0).abs() < 1e-6);
        assert!(s.extension(a, b).abs() < 1e-6);
        assert_eq!(s.width(), 1.0);
    }
}
