#![cfg_attr(not(test), no_std)]

//! Fixed-point CORDIC trigonometry for 2D vector graphics.
//!
//! Scalars are 16.16 fixed-point values ([`Fixed`]), angles are 16.16
//! fixed-point degrees ([`Angle`]). All operations are pure and
//! allocation free. Degenerate inputs saturate or return zero instead of
//! failing; see [`checked_div_fix`] and friends for the checked variants.

mod tools;
pub use tools::*;
mod error;
pub use error::*;
mod fixed;
pub use fixed::*;
mod angle;
pub use angle::*;
mod vector;
pub use vector::*;
mod cordic;
mod trig;
pub use trig::*;

#[cfg(test)]
pub mod testing;
