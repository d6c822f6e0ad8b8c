use super::{
    atan2, from_polar, polarize, rotate_vector, unit_vector, vector_length,
    Angle, Fixed,
};
use bytemuck::{Pod, Zeroable};
use core::ops::{Add, Neg, Sub};
use serde::{Deserialize, Serialize};

/// Planar vector with 16.16 fixed-point coordinates.
#[derive(
    Copy,
    Clone,
    Default,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Pod,
    Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Vector {
    pub x: Fixed,
    pub y: Fixed,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Unit vector `(cos(angle), sin(angle))`.
    pub fn unit(angle: Angle) -> Self {
        unit_vector(angle)
    }

    /// Vector of the given length and direction.
    pub fn from_polar(length: Fixed, angle: Angle) -> Self {
        from_polar(length, angle)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Rotate in place by `angle`.
    pub fn rotate(&mut self, angle: Angle) {
        *self = rotate_vector(*self, angle);
    }

    /// Rotated copy.
    pub fn rotated(self, angle: Angle) -> Self {
        rotate_vector(self, angle)
    }

    /// Euclidean length in the units of the coordinates.
    pub fn length(&self) -> Fixed {
        vector_length(*self)
    }

    /// Direction of the vector, zero for the zero vector.
    pub fn angle(&self) -> Angle {
        atan2(self.x, self.y)
    }

    /// Length and direction from a single polarization.
    pub fn polarize(&self) -> (Fixed, Angle) {
        polarize(*self)
    }
}

impl From<(Fixed, Fixed)> for Vector {
    fn from((x, y): (Fixed, Fixed)) -> Self {
        Self { x, y }
    }
}

impl From<Vector> for (Fixed, Fixed) {
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
