use super::{Angle, Fixed};
use core::f64::consts::PI;

pub fn isclose(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    (a - b).abs() <= a.abs().max(b.abs()) * rtol + atol
}

pub fn fixed_to_f64(x: Fixed) -> f64 {
    x as f64 / (1 << 16) as f64
}

pub fn angle_to_radians(angle: Angle) -> f64 {
    fixed_to_f64(angle) * PI / 180.
}
