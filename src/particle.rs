//! Point masses integrated with semi-implicit Euler.

use crate::float::Float;
use crate::spring::SpringId;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// One adjacency entry: the neighbouring particle and the spring joining them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub neighbor: usize,
    pub spring: SpringId,
}

/// A point mass with explicit velocity and a per-tick force accumulator.
///
/// Fixed particles are anchors and never move under dynamics. While
/// `drag_override` is set the interaction layer owns the position and the
/// integrator leaves the particle alone.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub force: Vec2<F>,
    pub radius: F,
    pub fixed: bool,
    pub drag_override: bool,
    pub(crate) links: AllocVec<Link>,
}

impl<F: Float> Particle<F> {
    /// A free particle.
    pub fn new(pos: Vec2<F>, vel: Vec2<F>, radius: F) -> Self {
        Particle {
            pos,
            vel,
            force: Vec2::zero(),
            radius,
            fixed: false,
            drag_override: false,
            links: AllocVec::new(),
        }
    }

    /// An anchor particle at rest.
    pub fn fixed(pos: Vec2<F>, radius: F) -> Self {
        let mut p = Self::new(pos, Vec2::zero(), radius);
        p.fixed = true;
        p
    }

    /// Neighbours and connecting springs, in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Whether dynamics apply to this particle this tick.
    pub fn is_dynamic(&self) -> bool {
        !self.fixed && !self.drag_override
    }

    /// Integrate one tick.
    ///
    /// The velocity takes the full accumulated force plus `external`; only the
    /// position increment is multiplied by `scale`.
    pub fn move_by(&mut self, external: Vec2<F>, scale: F) {
        if !self.is_dynamic() {
            return;
        }
        self.vel.add_assign_vec(self.force + external);
        self.pos.add_assign_vec(self.vel.scale(scale));
    }

    pub fn pin(&mut self) {
        self.fixed = true;
    }

    pub fn unpin(&mut self) {
        self.fixed = false;
    }

    /// Shift the particle directly and suspend dynamics until [`release`](Self::release).
    pub fn drag_by(&mut self, delta: Vec2<F>) {
        self.pos.add_assign_vec(delta);
        self.drag_override = true;
    }

    /// Place the particle directly and suspend dynamics until [`release`](Self::release).
    pub fn drag_to(&mut self, pos: Vec2<F>) {
        self.pos.replace_with(pos);
        self.drag_override = true;
    }

    /// Hand the particle back to the integrator.
    pub fn release(&mut self) {
        self.drag_override = false;
    }

    /// Half the squared speed; unit mass is implied.
    pub fn kinetic_energy(&self) -> F {
        F::half() * self.vel.length_sq()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_updates_before_position() {
        let mut p = Particle::new(Vec2::new(0.0f32, 0.0), Vec2::new(1.0, 0.0), 5.0);
        p.force = Vec2::new(1.0, 0.0);
        p.move_by(Vec2::new(0.0, 2.0), 0.5);
        assert_eq!(p.vel, Vec2::new(2.0, 2.0));
        assert_eq!(p.pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn fixed_particle_ignores_forces() {
        let mut p = Particle::fixed(Vec2::new(4.0f32, 4.0), 5.0);
        p.force = Vec2::new(3.0, 3.0);
        p.move_by(Vec2::new(0.0, 1.0), 1.0);
        assert_eq!(p.pos, Vec2::new(4.0, 4.0));
        assert_eq!(p.vel, Vec2::zero());
    }

    #[test]
    fn drag_suspends_until_release() {
        let mut p = Particle::new(Vec2::new(0.0f64, 0.0), Vec2::new(1.0, 1.0), 5.0);
        p.drag_by(Vec2::new(10.0, 0.0));
        p.move_by(Vec2::new(0.0, 1.0), 1.0);
        assert_eq!(p.pos, Vec2::new(10.0, 0.0));

        p.release();
        p.move_by(Vec2::zero(), 1.0);
        assert_eq!(p.pos, Vec2::new(11.0, 1.0));
    }
}
