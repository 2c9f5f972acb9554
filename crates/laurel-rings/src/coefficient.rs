//! Runtime coefficient-type tags.

use std::fmt;

/// Identifies which ring a polynomial's coefficients live in.
///
/// Every [`Ring`](crate::Ring) exposes its tag as `Ring::TYPE`. The tag is
/// what type-resolution policies reason about when operands disagree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CoefficientType {
    /// The integers Z.
    Integer,
    /// The rationals Q.
    Rational,
    /// The prime field Z/pZ.
    Modular(u64),
}

impl CoefficientType {
    /// Returns a short name for the type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            CoefficientType::Integer => "integer",
            CoefficientType::Rational => "rational",
            CoefficientType::Modular(_) => "modular",
        }
    }
}

impl fmt::Display for CoefficientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoefficientType::Modular(p) => write!(f, "Z/{p}Z"),
            other => write!(f, "{}", other.name()),
        }
    }
}
