/// Split a signed value into its magnitude and a negative flag.
///
/// The magnitude is exact for all inputs including `i32::MIN`.
#[inline]
pub fn split_sign(x: i32) -> (u32, bool) {
    (x.unsigned_abs(), x < 0)
}

/// Combine a magnitude and a negative flag into a signed value,
/// saturating the magnitude to `i32::MAX`.
///
/// Saturation is symmetric: the most negative result is `-i32::MAX`.
#[inline]
pub fn apply_sign(magnitude: u64, negative: bool) -> i32 {
    let m = if magnitude > i32::MAX as u64 {
        i32::MAX
    } else {
        magnitude as i32
    };
    if negative {
        -m
    } else {
        m
    }
}

/// Bit index of the most significant set bit.
///
/// `x` must be non-zero.
#[inline]
pub fn msb(x: u32) -> i32 {
    debug_assert!(x != 0);
    31 - x.leading_zeros() as i32
}

/// Round down to a multiple of `n`, a power of two.
#[inline]
pub fn pad_floor(x: i32, n: i32) -> i32 {
    debug_assert!(n > 0 && n & (n - 1) == 0);
    x & !(n - 1)
}

/// Round to the nearest multiple of `n`, a power of two.
/// Ties round up.
#[inline]
pub fn pad_round(x: i32, n: i32) -> i32 {
    pad_floor(x.saturating_add(n >> 1), n)
}

/// Round up to a multiple of `n`, a power of two.
#[inline]
pub fn pad_ceil(x: i32, n: i32) -> i32 {
    pad_floor(x.saturating_add(n - 1), n)
}

/// Approximate `sqrt(x*x + y*y)` using the "alpha max plus beta min"
/// algorithm with alpha = 1 and beta = 3/8.
///
/// The result is within 7% of the exact value and never smaller than
/// the larger component.
pub fn hypot_approx(x: i32, y: i32) -> i32 {
    let (x, _) = split_sign(x);
    let (y, _) = split_sign(y);
    let (max, min) = if x > y { (x, y) } else { (y, x) };
    apply_sign(max as u64 + ((3 * min as u64) >> 3), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign() {
        assert_eq!(split_sign(0), (0, false));
        assert_eq!(split_sign(-5), (5, true));
        assert_eq!(split_sign(i32::MIN), (1 << 31, true));
        assert_eq!(apply_sign(5, true), -5);
        assert_eq!(apply_sign(1 << 31, true), -i32::MAX);
        assert_eq!(apply_sign(u64::MAX, false), i32::MAX);
    }

    #[test]
    fn msb_bits() {
        assert_eq!(msb(1), 0);
        assert_eq!(msb(0x8000), 15);
        assert_eq!(msb(0xffff), 15);
        assert_eq!(msb(1 << 31), 31);
    }

    #[test]
    fn pad() {
        for (x, floor, round, ceil) in [
            (0, 0, 0, 0),
            (1, 0, 0, 32),
            (15, 0, 0, 32),
            (16, 0, 32, 32),
            (31, 0, 32, 32),
            (32, 32, 32, 32),
            (-1, -32, 0, 0),
            (-16, -32, 0, 0),
            (-17, -32, -32, 0),
        ] {
            assert_eq!(pad_floor(x, 32), floor, "pad_floor({x})");
            assert_eq!(pad_round(x, 32), round, "pad_round({x})");
            assert_eq!(pad_ceil(x, 32), ceil, "pad_ceil({x})");
        }
    }

    #[test]
    fn hypot_bounds() {
        let mut max_err = 0f64;
        for i in 0..=64 {
            let a = i as f64 / 64. * core::f64::consts::FRAC_PI_2;
            let (x, y) = ((a.cos() * 1e6) as i32, (-a.sin() * 1e6) as i32);
            let want = (x as f64).hypot(y as f64);
            let have = hypot_approx(x, y) as f64;
            assert!(have >= x.abs().max(y.abs()) as f64);
            max_err = max_err.max((have - want).abs() / want);
        }
        println!("max rel err: {:.2e}", max_err);
        assert!(max_err < 0.07);
        assert_eq!(hypot_approx(i32::MIN, i32::MIN), i32::MAX);
    }
}
