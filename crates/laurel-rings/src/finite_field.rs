//! Prime fields Z_p.

use std::fmt;
use std::num::ParseIntError;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::coefficient::CoefficientType;
use crate::traits::{ExactDivision, Field, Ring};

/// The finite field Z_p for a prime `P` that fits in a u64.
///
/// Elements are kept reduced to `0..P`. A modulus below 2 is rejected
/// when the type is used:
///
/// ```compile_fail
/// use laurel_rings::Fp;
///
/// let _ = Fp::<0>::new(1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Fp<const P: u64>(u64);

impl<const P: u64> Fp<P> {
    const VALID_MODULUS: () = assert!(P >= 2, "Fp<P> needs a modulus of at least 2");

    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        let () = Self::VALID_MODULUS;
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        Self::reduce(i128::from(value))
    }

    fn reduce(value: i128) -> Self {
        let () = Self::VALID_MODULUS;
        Self(value.rem_euclid(i128::from(P)) as u64)
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic (the prime p).
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }
}

impl<const P: u64> Ring for Fp<P> {
    const TYPE: CoefficientType = CoefficientType::Modular(P);

    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }

    fn from_i64(n: i64) -> Self {
        Self::from_signed(n)
    }
}

impl<const P: u64> ExactDivision for Fp<P> {
    fn exact_div(&self, divisor: &Self) -> Option<Self> {
        self.field_div(divisor)
    }
}

impl<const P: u64> Field for Fp<P> {
    /// Inverse by the extended Euclidean algorithm.
    fn inv(&self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(P);
        let mut new_r = i128::from(self.0);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        // P not prime and self shares a factor with it
        if r > 1 {
            return None;
        }

        Some(Self(t.rem_euclid(i128::from(P)) as u64))
    }
}

impl<const P: u64> Add for Fp<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) + u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Sub for Fp<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for Fp<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) * u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Neg for Fp<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> Default for Fp<P> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<const P: u64> From<u64> for Fp<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for Fp<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> FromStr for Fp<P> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i128 = s.parse()?;
        Ok(Self::reduce(value))
    }
}

impl<const P: u64> fmt::Display for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type alias for GF(2), the field with two elements.
pub type GF2 = Fp<2>;
