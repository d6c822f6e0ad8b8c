/// Errors reported by the checked fixed-point primitives.
///
/// The default primitives never fail and saturate instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The divisor was zero.
    #[error("Division by zero")]
    DivideByZero,
    /// The result does not fit the 16.16 range.
    #[error("Result out of range")]
    Overflow,
}
