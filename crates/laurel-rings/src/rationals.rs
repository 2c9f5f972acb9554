//! The field of rational numbers Q.

use dashu::base::{Inverse, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

use crate::coefficient::CoefficientType;
use crate::integers::Z;
use crate::traits::{ExactDivision, Field, Ring};

/// Errors from parsing `a` or `a/b` into a rational.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseRationalError {
    /// One of the two integer parts is malformed.
    #[error("invalid integer part: {0}")]
    Integer(#[from] dashu::base::error::ParseError),

    /// The denominator parsed as zero.
    #[error("denominator cannot be zero")]
    ZeroDenominator,
}

/// The field of arbitrary precision rational numbers.
///
/// Values are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        Self::from_parts(IBig::from(num), IBig::from(den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    fn from_parts(num: IBig, den: IBig) -> Self {
        let (num, den) = if den < IBig::ZERO { (-num, -den) } else { (num, den) };
        Self(RBig::from_parts(num, den.unsigned_abs()))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Z {
        Z::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Z {
        Z::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator().is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Z> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Ring for Q {
    const TYPE: CoefficientType = CoefficientType::Rational;

    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }

    fn from_i64(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl ExactDivision for Q {
    fn exact_div(&self, divisor: &Self) -> Option<Self> {
        self.field_div(divisor)
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl num_traits::Zero for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }
}

impl num_traits::One for Q {
    fn one() -> Self {
        Self(RBig::ONE)
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Z> for Q {
    fn from(value: Z) -> Self {
        Self(RBig::from(value.into_inner()))
    }
}

impl FromStr for Q {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((num, den)) => {
                let num = IBig::from_str_radix(num, 10)?;
                let den = IBig::from_str_radix(den, 10)?;
                if den == IBig::ZERO {
                    return Err(ParseRationalError::ZeroDenominator);
                }
                Ok(Self::from_parts(num, den))
            }
            None => Ok(Self(RBig::from(IBig::from_str_radix(s, 10)?))),
        }
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({self})")
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}
