// CORDIC pseudo-rotations in 16.16 degrees.
//
// Only vectors longer than 2^16*180/pi (about 22 bits) on a discrete
// grid resolve angles to 2^-16 degrees. Callers therefore prenormalize
// to `TRIG_SAFE_MSB` before iterating and undo the shift afterwards.

use super::{
    apply_sign, msb, pad_round, split_sign, Angle, Vector, ANGLE_2PI,
    ANGLE_PI, ANGLE_PI2, ANGLE_PI4,
};

include!(concat!(env!("OUT_DIR"), "/cordic_table.rs"));

/// Highest bit of overflow-safe vector components:
/// MSB of 0.858785336480436 * sqrt(0.5) * 2^30.
pub(crate) const TRIG_SAFE_MSB: i32 = 29;

/// Multiply by the CORDIC shrink factor `TRIG_SCALE / 2^32`.
pub(crate) fn downscale(val: i32) -> i32 {
    let (v, negative) = split_sign(val);
    let v = (v as u64 * TRIG_SCALE as u64 + (1 << 32)) >> 32;
    apply_sign(v, negative)
}

/// Scale a vector by a power of two so that the larger component has its
/// MSB at `TRIG_SAFE_MSB`.
///
/// # Returns
/// The applied shift: positive for a left shift, negative for a right
/// shift. Undefined for the zero vector.
pub(crate) fn prenorm(v: &mut Vector) -> i32 {
    let (x, _) = split_sign(v.x);
    let (y, _) = split_sign(v.y);
    let shift = msb(x | y);

    if shift <= TRIG_SAFE_MSB {
        let shift = TRIG_SAFE_MSB - shift;
        v.x <<= shift;
        v.y <<= shift;
        shift
    } else {
        let shift = shift - TRIG_SAFE_MSB;
        v.x >>= shift;
        v.y >>= shift;
        -shift
    }
}

/// Rotate `v` by `theta` using shift-and-add micro-rotations.
///
/// The result is scaled by the CORDIC gain (about 1.1644).
/// Component magnitudes must not exceed `2^30`.
pub(crate) fn pseudo_rotate(v: &mut Vector, mut theta: Angle) {
    let (mut x, mut y) = (v.x, v.y);

    // Exact quarter turns into [-PI/4, PI/4]
    while theta < -ANGLE_PI4 {
        (x, y) = (y, -x);
        theta += ANGLE_PI2;
    }
    while theta > ANGLE_PI4 {
        (x, y) = (-y, x);
        theta -= ANGLE_PI2;
    }

    for (i, &a) in TRIG_ARCTAN.iter().enumerate() {
        let i = i + 1;
        // Rounding bias for the shift
        let b = 1 << (i - 1);
        let (v1, v2) = ((y + b) >> i, (x + b) >> i);
        if theta < 0 {
            (x, y) = (x + v1, y - v2);
            theta += a;
        } else {
            (x, y) = (x - v1, y + v2);
            theta -= a;
        }
    }

    v.x = x;
    v.y = y;
}

/// Rotate `v` onto the positive x axis and return the traversed angle.
///
/// On return `v.x` holds the gain scaled magnitude. The angle is rounded
/// to a multiple of 32 and lies in `(-ANGLE_PI, ANGLE_PI]`.
pub(crate) fn pseudo_polarize(v: &mut Vector) -> Angle {
    let (mut x, mut y) = (v.x, v.y);

    // Octant reduction into [-PI/4, PI/4]
    let mut theta = if y > x {
        if y > -x {
            (x, y) = (y, -x);
            ANGLE_PI2
        } else {
            let theta = if y > 0 { ANGLE_PI } else { -ANGLE_PI };
            (x, y) = (-x, -y);
            theta
        }
    } else if y < -x {
        (x, y) = (-y, x);
        -ANGLE_PI2
    } else {
        0
    };

    for (i, &a) in TRIG_ARCTAN.iter().enumerate() {
        let i = i + 1;
        let b = 1 << (i - 1);
        let (v1, v2) = ((y + b) >> i, (x + b) >> i);
        if y > 0 {
            (x, y) = (x + v1, y - v2);
            theta += a;
        } else {
            (x, y) = (x - v1, y + v2);
            theta -= a;
        }
    }

    // Remove last iteration jitter
    theta = if theta >= 0 {
        pad_round(theta, 32)
    } else {
        -pad_round(-theta, 32)
    };

    if theta <= -ANGLE_PI {
        theta += ANGLE_2PI;
    } else if theta > ANGLE_PI {
        theta -= ANGLE_2PI;
    }

    v.x = x;
    v.y = y;
    theta
}
