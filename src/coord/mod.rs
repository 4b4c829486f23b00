//! Coordinate substrates — the numeric vocabulary the frame transforms are
//! written against.
//!
//! The four frame conversions are defined once, generic over [`Coordinate`]:
//! a minimal capability set of arithmetic, sqrt/trig, elementwise hypot and
//! atan2, and a branch-select primitive. Two substrates satisfy it:
//!
//! - `f64` — one point, plain scalar math
//! - [`Batch`] — N points per axis, elementwise over an ndarray array
//!
//! Batch implementations apply every operation independently per index; there
//! is no cross-element coupling, so a batch call computes exactly what a loop
//! of scalar calls would.

pub mod batch;

pub use batch::Batch;

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Capability set for one coordinate value (scalar) or a column of N values
/// (batch).
///
/// Arithmetic between coordinates and with bare `f64` constants comes from
/// the standard operator traits; the methods below add the transcendental
/// pieces the transforms need. `select` is the branch primitive: the
/// predicate is applied to each underlying value of `self`, choosing
/// elementwise between the two alternatives. Both alternatives are evaluated
/// up front on every substrate, so scalar and batch runs produce identical
/// results.
pub trait Coordinate:
    Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + AddAssign<f64>
    + SubAssign<f64>
{
    /// A coordinate of the same shape as `self` holding `value` everywhere.
    fn fill(&self, value: f64) -> Self;

    fn sin(&self) -> Self;

    fn cos(&self) -> Self;

    fn atan(&self) -> Self;

    fn sqrt(&self) -> Self;

    fn recip(&self) -> Self;

    fn powi(&self, n: i32) -> Self;

    /// Elementwise `sqrt(self² + other²)`.
    fn hypot(&self, other: &Self) -> Self;

    /// Elementwise four-quadrant arctangent; `self` is the y operand.
    fn atan2(&self, x: &Self) -> Self;

    /// Elementwise branch select: where `predicate(self)` holds, take
    /// `if_true`, otherwise `if_false`.
    fn select<F>(&self, predicate: F, if_true: Self, if_false: Self) -> Self
    where
        F: Fn(f64) -> bool;
}

impl Coordinate for f64 {
    fn fill(&self, value: f64) -> Self {
        value
    }

    fn sin(&self) -> Self {
        f64::sin(*self)
    }

    fn cos(&self) -> Self {
        f64::cos(*self)
    }

    fn atan(&self) -> Self {
        f64::atan(*self)
    }

    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    fn recip(&self) -> Self {
        f64::recip(*self)
    }

    fn powi(&self, n: i32) -> Self {
        f64::powi(*self, n)
    }

    fn hypot(&self, other: &Self) -> Self {
        f64::hypot(*self, *other)
    }

    fn atan2(&self, x: &Self) -> Self {
        f64::atan2(*self, *x)
    }

    fn select<F>(&self, predicate: F, if_true: Self, if_false: Self) -> Self
    where
        F: Fn(f64) -> bool,
    {
        if predicate(*self) {
            if_true
        } else {
            if_false
        }
    }
}
