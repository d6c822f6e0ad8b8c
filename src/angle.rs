/// Angle in degrees as a 16.16 fixed-point value.
///
/// The angular resolution is 2^-16 degrees.
pub type Angle = i32;

/// Half turn (180 degrees).
pub const ANGLE_PI: Angle = 180 << 16;

/// Full turn (360 degrees).
pub const ANGLE_2PI: Angle = ANGLE_PI * 2;

/// Quarter turn (90 degrees).
pub const ANGLE_PI2: Angle = ANGLE_PI / 2;

/// Eighth turn (45 degrees).
pub const ANGLE_PI4: Angle = ANGLE_PI / 4;

/// Reduce a wide angle into `(-ANGLE_PI, ANGLE_PI]`.
#[inline]
fn reduce(angle: i64) -> Angle {
    const PI: i64 = ANGLE_PI as i64;
    const TWO_PI: i64 = ANGLE_2PI as i64;
    // (angle + PI - 1) mod 2PI lands in [0, 2PI)
    ((angle + PI - 1).rem_euclid(TWO_PI) - PI + 1) as Angle
}

/// Fold the result of a wide angle computation back into an [`Angle`].
///
/// Representable values are returned unchanged. Others are reduced
/// into `(-ANGLE_PI, ANGLE_PI]`, which preserves the direction.
#[inline]
pub fn fold_angle(angle: i64) -> Angle {
    Angle::try_from(angle).unwrap_or_else(|_| reduce(angle))
}

/// Difference between two angles.
///
/// # Arguments
/// * `angle1` - First angle.
/// * `angle2` - Second angle.
///
/// # Returns
/// `angle2 - angle1` constrained to `(-ANGLE_PI, ANGLE_PI]`.
pub fn angle_diff(angle1: Angle, angle2: Angle) -> Angle {
    reduce(angle2 as i64 - angle1 as i64)
}
