//! Algebraic structure traits.
//!
//! Polynomials only ever ask four things of their coefficients: an
//! additive identity, a multiplicative identity, and the ring operations.
//! Division is layered on top for the rings that support it.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use crate::coefficient::CoefficientType;

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// `Display` is the textual form used when rendering polynomials: a
/// negative element must print with a leading `-`.
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Runtime tag identifying this ring.
    const TYPE: CoefficientType;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The image of an integer under the canonical map Z -> R.
    fn from_i64(n: i64) -> Self;

    /// Computes `n * self` through the canonical image of `n`.
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }
        self.clone() * Self::from_i64(n)
    }

    /// Computes self^n by binary exponentiation.
    ///
    /// Takes a `u64` so any `i64` exponent magnitude (including that of
    /// `i64::MIN`) is representable.
    fn pow(&self, n: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }
        result
    }
}

/// A ring in which a quotient can be taken whenever it exists.
///
/// Synthetic division needs nothing more: each step divides by the
/// divisor's leading coefficient, which succeeds in every field and in
/// Z whenever that coefficient divides the working value.
pub trait ExactDivision: Ring {
    /// Returns `q` with `q * divisor == self`, or `None` if no such
    /// element exists (including when `divisor` is zero).
    fn exact_div(&self, divisor: &Self) -> Option<Self>;
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: ExactDivision {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element, returning `None` for a zero divisor.
    fn field_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}
