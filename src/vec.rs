//! Planar vector type used for positions, velocities and forces.

use crate::float::Float;
use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 2D vector. A plain value type: copy it freely.
///
/// The named in-place mutators (`replace_with`, `clear`, `add_assign_vec`, ...)
/// are the only operations with side effects; everything else returns a new
/// value. Division by a zero scalar and normalisation of a zero vector both
/// produce the zero vector instead of infinities or NaN.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// The zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Overwrite both components.
    pub fn set(&mut self, x: F, y: F) {
        self.x = x;
        self.y = y;
    }

    /// Copy the components of `other` into self.
    pub fn replace_with(&mut self, other: Self) {
        self.x = other.x;
        self.y = other.y;
    }

    /// Reset to zero in place.
    pub fn clear(&mut self) {
        self.x = F::zero();
        self.y = F::zero();
    }

    pub fn add_assign_vec(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }

    pub fn sub_assign_vec(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }

    /// Component-wise in-place multiply.
    pub fn mul_assign_components(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
    }

    /// Component-wise in-place divide. A zero divisor component yields zero.
    pub fn div_assign_components(&mut self, other: Self) {
        self.x = if other.x == F::zero() { F::zero() } else { self.x / other.x };
        self.y = if other.y == F::zero() { F::zero() } else { self.y / other.y };
    }

    /// Scale by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Divide by a scalar; dividing by zero returns the zero vector.
    pub fn div(self, s: F) -> Self {
        if s == F::zero() {
            Self::zero()
        } else {
            Vec2 { x: self.x / s, y: self.y / s }
        }
    }

    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Length (magnitude).
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Unit vector in the same direction, or zero for the zero vector.
    pub fn unit(self) -> Self {
        let len = self.length();
        if len > F::zero() {
            self.div(len)
        } else {
            Self::zero()
        }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// True iff `point` lies strictly within `radius` of self.
    pub fn is_near(self, point: Self, radius: F) -> bool {
        self.distance(point) < radius
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { self.add_assign_vec(rhs); }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { self.sub_assign_vec(rhs); }
}

impl<F: Float> fmt::Display for Vec2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
