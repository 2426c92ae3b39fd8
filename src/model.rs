//! The mass-spring model: particle arena, spring arena and the per-tick step.

use crate::config::{Bounds, ModelConfig};
use crate::error::ModelError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::{Link, Particle};
use crate::render::{Color, RenderSurface};
use crate::spring::{Spring, SpringId};
use crate::vec::Vec2;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Which side of the bounds a particle was clamped against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

/// An undirected edge of the spring graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub spring: SpringId,
}

/// Owns every particle and spring of a simulation.
///
/// Particles are addressed by their insertion index, which stays stable for
/// the life of the model. Springs live in their own arena; each edge `{a, b}`
/// is recorded once in `edges` and twice in the adjacency lists, once on each
/// endpoint, with the same [`SpringId`].
pub struct Model<F: Float> {
    config: ModelConfig<F>,
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<Spring<F>>,
    edges: AllocVec<Edge>,
}

impl<F: Float> Model<F> {
    pub fn new(config: ModelConfig<F>) -> Self {
        Model {
            config,
            particles: AllocVec::new(),
            springs: AllocVec::new(),
            edges: AllocVec::new(),
        }
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Join particles `a` and `b` with `spring`.
    ///
    /// Silently ignored (returns `None`) when `a == b` or either index is out
    /// of range. Use [`try_add_spring`](Self::try_add_spring) to learn why.
    pub fn add_spring(&mut self, a: usize, b: usize, spring: Spring<F>) -> Option<SpringId> {
        match self.try_add_spring(a, b, spring) {
            Ok(id) => Some(id),
            Err(err) => {
                log::debug!("ignoring spring {} -> {}: {}", a, b, err);
                None
            }
        }
    }

    /// Checked form of [`add_spring`](Self::add_spring).
    pub fn try_add_spring(&mut self, a: usize, b: usize, spring: Spring<F>) -> Result<SpringId, ModelError> {
        let count = self.particles.len();
        for index in [a, b] {
            if index >= count {
                return Err(ModelError::ParticleOutOfBounds { index, count });
            }
        }
        if a == b {
            return Err(ModelError::SelfLoop { index: a });
        }

        let id = SpringId(self.springs.len());
        self.springs.push(spring);
        self.edges.push(Edge { a, b, spring: id });
        self.particles[a].links.push(Link { neighbor: b, spring: id });
        self.particles[b].links.push(Link { neighbor: a, spring: id });
        Ok(id)
    }

    /// Advance the model by one tick inside `bounds`.
    ///
    /// Spring forces for every particle are accumulated first, against the
    /// positions at the start of the tick. Then each particle in turn is
    /// integrated, has its accumulator cleared and is clamped to the bounds.
    pub fn update<O: StepObserver>(&mut self, bounds: &Bounds<F>, observer: &mut O) {
        let k = self.config.stiffness;
        for i in 0..self.particles.len() {
            let pos = self.particles[i].pos;
            let mut total = Vec2::zero();
            for link in &self.particles[i].links {
                let spring = &self.springs[link.spring.0];
                total += spring.force(pos, self.particles[link.neighbor].pos, k);
            }
            self.particles[i].force += total;
        }
        observer.on_forces();

        let ModelConfig { gravity, damping, restitution, surface_friction, .. } = self.config;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.move_by(gravity, damping);
            p.force.clear();

            if p.pos.y + p.radius > bounds.bottom {
                p.pos.y = bounds.bottom - p.radius;
                p.vel.y *= -restitution;
                p.vel.x *= surface_friction;
                observer.on_contact(i, Wall::Bottom);
            } else if p.pos.y - p.radius < bounds.top {
                p.pos.y = bounds.top + p.radius;
                p.vel.y *= -restitution;
                p.vel.x *= surface_friction;
                observer.on_contact(i, Wall::Top);
            }

            if p.pos.x + p.radius > bounds.right {
                p.pos.x = bounds.right - p.radius;
                p.vel.x *= -restitution;
                p.vel.y *= surface_friction;
                observer.on_contact(i, Wall::Right);
            } else if p.pos.x - p.radius < bounds.left {
                p.pos.x = bounds.left + p.radius;
                p.vel.x *= -restitution;
                p.vel.y *= surface_friction;
                observer.on_contact(i, Wall::Left);
            }
        }

        observer.on_step_complete();
    }

    /// First particle, in insertion order, strictly within `radius` of `point`.
    pub fn locate(&self, point: Vec2<F>, radius: F) -> Option<usize> {
        self.particles.iter().position(|p| p.pos.is_near(point, radius))
    }

    /// Draw every spring once, then each particle after its own springs.
    ///
    /// Free particles are filled discs, fixed ones filled squares.
    pub fn draw<S: RenderSurface<F>>(&self, surface: &mut S) {
        let mut drawn = vec![false; self.springs.len()];
        for p in &self.particles {
            for link in &p.links {
                let seen = &mut drawn[link.spring.0];
                if *seen {
                    continue;
                }
                *seen = true;
                let spring = &self.springs[link.spring.0];
                let other = self.particles[link.neighbor].pos;
                surface.stroke_line(p.pos, other, spring.width(), Color::Black);
            }

            if p.fixed {
                surface.fill_square(p.pos, p.radius, Color::Black);
            } else {
                surface.fill_circle(p.pos, p.radius, Color::Black);
            }
        }
    }

    /// Sum of ½|v|² over particles that move under dynamics.
    pub fn kinetic_energy(&self) -> F {
        self.particles
            .iter()
            .filter(|p| !p.fixed)
            .fold(F::zero(), |acc, p| acc + p.kinetic_energy())
    }

    pub fn config(&self) -> &ModelConfig<F> { &self.config }
    pub fn config_mut(&mut self) -> &mut ModelConfig<F> { &mut self.config }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn edges(&self) -> &[Edge] { &self.edges }

    pub fn particle(&self, index: usize) -> Option<&Particle<F>> {
        self.particles.get(index)
    }

    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle<F>> {
        self.particles.get_mut(index)
    }

    /// `None` for a handle issued by a different model.
    pub fn spring(&self, id: SpringId) -> Option<&Spring<F>> {
        self.springs.get(id.0)
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }
}

impl<F: Float> Default for Model<F> {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}
