use super::{apply_sign, split_sign, Error};

/// Signed 16.16 fixed-point number.
pub type Fixed = i32;

/// 1.0 in 16.16.
pub const FIXED_ONE: Fixed = 1 << 16;

/// Largest representable magnitude. Also the saturation sentinel.
const SATURATED: u64 = i32::MAX as u64;

/// Rounded `|a*b| >> 16` and the sign of the product.
#[inline]
fn mul_fix_magnitude(a: Fixed, b: Fixed) -> (u64, bool) {
    let (a, sa) = split_sign(a);
    let (b, sb) = split_sign(b);
    // Round half up on the magnitude
    ((a as u64 * b as u64 + 0x8000) >> 16, sa ^ sb)
}

/// Rounded `|a*b/c|` (or `None` for `c == 0`) and the sign of the result.
#[inline]
fn mul_div_magnitude(a: i32, b: i32, c: i32) -> (Option<u64>, bool) {
    let (a, sa) = split_sign(a);
    let (b, sb) = split_sign(b);
    let (c, sc) = split_sign(c);
    let c = c as u64;
    let d = (c > 0).then(|| (a as u64 * b as u64 + (c >> 1)) / c);
    (d, sa ^ sb ^ sc)
}

/// Rounded `|a << 16 / b|` (or `None` for `b == 0`) and the sign of the
/// result.
#[inline]
fn div_fix_magnitude(a: Fixed, b: Fixed) -> (Option<u64>, bool) {
    let (a, sa) = split_sign(a);
    let (b, sb) = split_sign(b);
    let b = b as u64;
    let q = (b > 0).then(|| (((a as u64) << 16) + (b >> 1)) / b);
    (q, sa ^ sb)
}

/// Compute `(a*b)/0x10000` with maximum accuracy.
///
/// Typically scales a value by a 16.16 factor. The product is rounded
/// half up on its magnitude and the sign of the operands is reapplied.
///
/// # Returns
/// The rounded product. Results beyond the 16.16 range saturate to
/// `±i32::MAX`.
pub fn mul_fix(a: Fixed, b: Fixed) -> Fixed {
    let (m, negative) = mul_fix_magnitude(a, b);
    if m > SATURATED {
        log::trace!("mul_fix({a}, {b}) saturated");
    }
    apply_sign(m, negative)
}

/// Compute `(a*b)/c` with maximum accuracy using a 64-bit intermediate.
///
/// This never traps on a zero divisor. It returns the saturated
/// magnitude `0x7FFF_FFFF` with the sign of `a*b` instead. Callers that
/// need to tell saturation from a legitimately large result should use
/// [`checked_mul_div`].
pub fn mul_div(a: i32, b: i32, c: i32) -> i32 {
    let (d, negative) = mul_div_magnitude(a, b, c);
    let d = d.unwrap_or_else(|| {
        log::trace!("mul_div({a}, {b}, 0) saturated");
        SATURATED
    });
    apply_sign(d, negative)
}

/// Compute `(a*0x10000)/b` with maximum accuracy.
///
/// Typically divides a value by a 16.16 factor. A zero divisor returns
/// the saturated magnitude with the sign of `a`.
pub fn div_fix(a: Fixed, b: Fixed) -> Fixed {
    let (q, negative) = div_fix_magnitude(a, b);
    let q = q.unwrap_or_else(|| {
        log::trace!("div_fix({a}, 0) saturated");
        SATURATED
    });
    apply_sign(q, negative)
}

/// Like [`mul_fix`] but reports results beyond the 16.16 range.
pub fn checked_mul_fix(a: Fixed, b: Fixed) -> Result<Fixed, Error> {
    match mul_fix_magnitude(a, b) {
        (m, _) if m > SATURATED => Err(Error::Overflow),
        (m, negative) => Ok(apply_sign(m, negative)),
    }
}

/// Like [`mul_div`] but reports a zero divisor and results beyond the
/// 32-bit range instead of saturating.
pub fn checked_mul_div(a: i32, b: i32, c: i32) -> Result<i32, Error> {
    match mul_div_magnitude(a, b, c) {
        (None, _) => Err(Error::DivideByZero),
        (Some(d), _) if d > SATURATED => Err(Error::Overflow),
        (Some(d), negative) => Ok(apply_sign(d, negative)),
    }
}

/// Like [`div_fix`] but reports a zero divisor and results beyond the
/// 16.16 range instead of saturating.
pub fn checked_div_fix(a: Fixed, b: Fixed) -> Result<Fixed, Error> {
    match div_fix_magnitude(a, b) {
        (None, _) => Err(Error::DivideByZero),
        (Some(q), _) if q > SATURATED => Err(Error::Overflow),
        (Some(q), negative) => Ok(apply_sign(q, negative)),
    }
}
