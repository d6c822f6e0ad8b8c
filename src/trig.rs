use super::{
    apply_sign, div_fix, fold_angle, split_sign, Angle, Fixed, Vector,
    ANGLE_PI2,
};
use crate::cordic::{
    downscale, prenorm, pseudo_polarize, pseudo_rotate, TRIG_SCALE,
};

/// Gain compensated unit vector with 24 fractional bits.
const UNIT: Vector = Vector::new((TRIG_SCALE >> 8) as i32, 0);

/// Undo a negative (right) prenormalization shift, saturating.
#[inline]
fn unshift(v: i32, shift: i32) -> i32 {
    debug_assert!(shift <= 0);
    let (m, negative) = split_sign(v);
    apply_sign((m as u64) << -shift, negative)
}

/// Compute the cosine of an angle.
///
/// # Arguments
/// * `angle` - Angle in 16.16 degrees.
///
/// # Returns
/// The cosine as a 16.16 value.
pub fn cos(angle: Angle) -> Fixed {
    let mut v = UNIT;
    pseudo_rotate(&mut v, angle);
    (v.x + 0x80) >> 8
}

/// Compute the sine of an angle.
///
/// This is the cosine of the complementary angle. Use [`unit_vector`]
/// to obtain both sine and cosine from one rotation.
pub fn sin(angle: Angle) -> Fixed {
    cos(fold_angle(ANGLE_PI2 as i64 - angle as i64))
}

/// Compute the tangent of an angle.
///
/// The tangent saturates to `±i32::MAX` at odd multiples of 90 degrees.
pub fn tan(angle: Angle) -> Fixed {
    let mut v = UNIT;
    pseudo_rotate(&mut v, angle);
    div_fix(v.y, v.x)
}

/// 2-argument arctangent function.
///
/// Note the argument order: `x` first.
///
/// # Arguments
/// * `x` - X-axis component.
/// * `y` - Y-axis component.
///
/// # Returns
/// The angle between the x-axis and the ray to the point (x,y) in
/// `(-ANGLE_PI, ANGLE_PI]`. The zero vector has angle zero.
pub fn atan2(x: Fixed, y: Fixed) -> Angle {
    if x == 0 && y == 0 {
        return 0;
    }
    let mut v = Vector::new(x, y);
    prenorm(&mut v);
    pseudo_polarize(&mut v)
}

/// Unit vector for an angle: `x` is the cosine and `y` the sine.
pub fn unit_vector(angle: Angle) -> Vector {
    let mut v = UNIT;
    pseudo_rotate(&mut v, angle);
    Vector::new((v.x + 0x80) >> 8, (v.y + 0x80) >> 8)
}

/// Rotate a vector by an angle.
///
/// The vector keeps its length up to rounding. The zero vector is
/// returned unchanged.
pub fn rotate_vector(vec: Vector, angle: Angle) -> Vector {
    if vec.is_zero() {
        return vec;
    }

    let mut v = vec;
    let shift = prenorm(&mut v);
    pseudo_rotate(&mut v, angle);
    let (x, y) = (downscale(v.x), downscale(v.y));

    if shift > 0 {
        let half = 1 << (shift - 1);
        // Round half away from zero
        Vector::new(
            (x + half - (x < 0) as i32) >> shift,
            (y + half - (y < 0) as i32) >> shift,
        )
    } else {
        Vector::new(unshift(x, shift), unshift(y, shift))
    }
}

/// Length of a vector in the units of its coordinates.
///
/// Lengths beyond the 32-bit range saturate to `i32::MAX`.
pub fn vector_length(vec: Vector) -> Fixed {
    // Trivial cases
    if vec.x == 0 {
        return vec.y.saturating_abs();
    } else if vec.y == 0 {
        return vec.x.saturating_abs();
    }

    let mut v = vec;
    let shift = prenorm(&mut v);
    pseudo_polarize(&mut v);
    let x = downscale(v.x);

    if shift > 0 {
        (x + (1 << (shift - 1))) >> shift
    } else {
        unshift(x, shift)
    }
}

/// Length and angle of a vector from a single polarization.
///
/// # Returns
/// `(length, angle)` with the angle in `(-ANGLE_PI, ANGLE_PI]`. The zero
/// vector yields `(0, 0)`.
pub fn polarize(vec: Vector) -> (Fixed, Angle) {
    if vec.is_zero() {
        return (0, 0);
    }

    let mut v = vec;
    let shift = prenorm(&mut v);
    let angle = pseudo_polarize(&mut v);
    let x = downscale(v.x);

    let length = if shift >= 0 { x >> shift } else { unshift(x, shift) };
    (length, angle)
}

/// Vector from length and angle. The inverse of [`polarize`] up to
/// rounding.
pub fn from_polar(length: Fixed, angle: Angle) -> Vector {
    rotate_vector(Vector::new(length, 0), angle)
}
