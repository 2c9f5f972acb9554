//! Tagged coefficient values for runtime-typed operations.

use std::fmt;

use crate::coefficient::CoefficientType;
use crate::integers::Z;
use crate::rationals::Q;

/// A single coefficient whose ring is only known at runtime.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Scalar {
    /// An element of Z.
    Integer(Z),
    /// An element of Q.
    Rational(Q),
}

impl Scalar {
    /// Returns the ring this value belongs to.
    #[must_use]
    pub fn coefficient_type(&self) -> CoefficientType {
        match self {
            Scalar::Integer(_) => CoefficientType::Integer,
            Scalar::Rational(_) => CoefficientType::Rational,
        }
    }

    /// Converts the value into `target`, if the conversion is lossless.
    ///
    /// Integers widen into the rationals; a rational narrows to an integer
    /// only when its denominator is one.
    #[must_use]
    pub fn convert(&self, target: CoefficientType) -> Option<Scalar> {
        match (self, target) {
            (Scalar::Integer(_), CoefficientType::Integer)
            | (Scalar::Rational(_), CoefficientType::Rational) => Some(self.clone()),
            (Scalar::Integer(z), CoefficientType::Rational) => Some(Scalar::Rational(Q::from(z.clone()))),
            (Scalar::Rational(q), CoefficientType::Integer) => q.to_integer().map(Scalar::Integer),
            (_, CoefficientType::Modular(_)) => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    #[must_use]
    pub fn as_integer(&self) -> Option<&Z> {
        match self {
            Scalar::Integer(z) => Some(z),
            Scalar::Rational(_) => None,
        }
    }

    /// Returns the rational value, if this is a rational.
    #[must_use]
    pub fn as_rational(&self) -> Option<&Q> {
        match self {
            Scalar::Rational(q) => Some(q),
            Scalar::Integer(_) => None,
        }
    }
}

impl From<Z> for Scalar {
    fn from(value: Z) -> Self {
        Scalar::Integer(value)
    }
}

impl From<Q> for Scalar {
    fn from(value: Q) -> Self {
        Scalar::Rational(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(Z::new(value))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(z) => write!(f, "{z}"),
            Scalar::Rational(q) => write!(f, "{q}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_type() {
        assert_eq!(Scalar::from(3).coefficient_type(), CoefficientType::Integer);
        assert_eq!(
            Scalar::from(Q::new(1, 2)).coefficient_type(),
            CoefficientType::Rational
        );
    }

    #[test]
    fn test_convert() {
        let three = Scalar::from(3);
        assert_eq!(
            three.convert(CoefficientType::Rational),
            Some(Scalar::Rational(Q::from_integer(3)))
        );
        assert_eq!(
            Scalar::from(Q::new(6, 2)).convert(CoefficientType::Integer),
            Some(Scalar::Integer(Z::new(3)))
        );
        assert_eq!(Scalar::from(Q::new(1, 2)).convert(CoefficientType::Integer), None);
        assert_eq!(three.convert(CoefficientType::Modular(7)), None);
    }
}
