//! Ready-made spring structures built through the public construction API.

use crate::float::Float;
use crate::model::Model;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Speed of the initial spin given to the corners of [`square`].
const SPIN: f32 = 5.0;

/// A braced square centred on `center`, spinning.
///
/// Four corners (top-left first, clockwise) joined by four edge springs and
/// two diagonals, all at rest. Each corner starts with a velocity of
/// magnitude `5√2` tangent to the square. Returns the corner indices.
pub fn square<F: Float>(model: &mut Model<F>, center: Vec2<F>, side: F, radius: F) -> [usize; 4] {
    let h = side * F::half();
    let s = F::from_f32(SPIN);
    let corners = [
        (Vec2::new(center.x - h, center.y - h), Vec2::new(-s, s)),
        (Vec2::new(center.x + h, center.y - h), Vec2::new(-s, -s)),
        (Vec2::new(center.x + h, center.y + h), Vec2::new(s, -s)),
        (Vec2::new(center.x - h, center.y + h), Vec2::new(s, s)),
    ];
    let ids = corners.map(|(pos, vel)| model.add_particle(Particle::new(pos, vel, radius)));

    let diagonal = (side * side + side * side).sqrt();
    for i in 0..4 {
        model.add_spring(ids[i], ids[(i + 1) % 4], Spring::new(side));
    }
    model.add_spring(ids[0], ids[2], Spring::new(diagonal));
    model.add_spring(ids[1], ids[3], Spring::new(diagonal));
    ids
}

/// A rope of `segments` springs from `start` to `end`, hanging from a fixed
/// first particle. Returns the particle indices in order.
pub fn chain<F: Float>(
    model: &mut Model<F>,
    start: Vec2<F>,
    end: Vec2<F>,
    segments: usize,
    radius: F,
) -> AllocVec<usize> {
    let segments = segments.max(1);
    let n = F::from_f32(segments as f32);
    let mut ids = AllocVec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = F::from_f32(i as f32) / n;
        let pos = start + (end - start).scale(t);
        let particle = if i == 0 {
            Particle::fixed(pos, radius)
        } else {
            Particle::new(pos, Vec2::zero(), radius)
        };
        ids.push(model.add_particle(particle));
    }
    for pair in ids.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let spring = Spring::between(model.particles()[a].pos, model.particles()[b].pos);
        model.add_spring(a, b, spring);
    }
    ids
}

/// A `cols` x `rows` lattice with structural and shear springs.
///
/// Particle at (col, row) has index `first + row * cols + col`, where
/// `first` is the returned value. Structural springs join horizontal and
/// vertical neighbours, shear springs both diagonals of every cell.
pub fn lattice<F: Float>(
    model: &mut Model<F>,
    origin: Vec2<F>,
    cols: usize,
    rows: usize,
    spacing: F,
    radius: F,
) -> usize {
    let cols = cols.max(1);
    let rows = rows.max(1);
    let first = model.particle_count();
    for row in 0..rows {
        for col in 0..cols {
            let pos = Vec2::new(
                origin.x + spacing * F::from_f32(col as f32),
                origin.y + spacing * F::from_f32(row as f32),
            );
            model.add_particle(Particle::new(pos, Vec2::zero(), radius));
        }
    }

    let at = |col: usize, row: usize| first + row * cols + col;
    let diagonal = (spacing * spacing + spacing * spacing).sqrt();

    for row in 0..rows {
        for col in 0..cols {
            if col + 1 < cols {
                model.add_spring(at(col, row), at(col + 1, row), Spring::new(spacing));
            }
            if row + 1 < rows {
                model.add_spring(at(col, row), at(col, row + 1), Spring::new(spacing));
            }
            if col + 1 < cols && row + 1 < rows {
                model.add_spring(at(col, row), at(col + 1, row + 1), Spring::new(diagonal));
                model.add_spring(at(col + 1, row), at(col, row + 1), Spring::new(diagonal));
            }
        }
    }
    first
}
