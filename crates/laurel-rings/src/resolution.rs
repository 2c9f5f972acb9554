//! Type-resolution policies.
//!
//! When an operation sees operands from more than one coefficient ring, a
//! [`TypeResolver`] decides which ring the result lives in (the least type
//! able to represent every operand exactly), or refuses.

use crate::coefficient::CoefficientType;

/// Picks a single result coefficient type for a set of operand types.
pub trait TypeResolver {
    /// Returns the result type, or `None` when no rule covers `types`.
    ///
    /// An empty slice never resolves.
    fn resolve(&self, types: &[CoefficientType]) -> Option<CoefficientType>;

    /// Returns true if a value of type `from` may be promoted into `into`.
    fn can_coerce(&self, from: CoefficientType, into: CoefficientType) -> bool {
        self.resolve(&[into, from]) == Some(into)
    }
}

/// Accepts only operands that already share one type.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ExactMatch;

impl TypeResolver for ExactMatch {
    fn resolve(&self, types: &[CoefficientType]) -> Option<CoefficientType> {
        let (first, rest) = types.split_first()?;
        rest.iter().all(|t| t == first).then_some(*first)
    }
}

/// The numeric tower Z ⊂ Q.
///
/// Integers and rationals resolve to the wider of the two. A modular type
/// only resolves with itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NumericTower;

impl NumericTower {
    fn rank(t: CoefficientType) -> Option<u8> {
        match t {
            CoefficientType::Integer => Some(0),
            CoefficientType::Rational => Some(1),
            CoefficientType::Modular(_) => None,
        }
    }
}

impl TypeResolver for NumericTower {
    fn resolve(&self, types: &[CoefficientType]) -> Option<CoefficientType> {
        if let Some(exact) = ExactMatch.resolve(types) {
            return Some(exact);
        }

        let mut widest: Option<(u8, CoefficientType)> = None;
        for &t in types {
            let rank = Self::rank(t)?;
            if widest.map_or(true, |(best, _)| rank > best) {
                widest = Some((rank, t));
            }
        }
        widest.map(|(_, t)| t)
    }
}
