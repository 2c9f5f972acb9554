//! Sparse exponent to coefficient storage.
//!
//! A [`TermMap`] never stores a zero coefficient. Every constructor and
//! transformation filters zeros out, so two maps describing the same
//! polynomial are structurally equal.

use std::collections::btree_map;
use std::collections::BTreeMap;

use laurel_rings::Ring;

/// Map from (possibly negative) exponents to non-zero coefficients.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TermMap<R: Ring> {
    terms: BTreeMap<i64, R>,
}

impl<R: Ring> TermMap<R> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Builds a map from (exponent, coefficient) pairs.
    ///
    /// Repeated exponents are summed; zero results are dropped.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (i64, R)>,
    {
        let mut map: BTreeMap<i64, R> = BTreeMap::new();
        for (exp, coeff) in terms {
            match map.entry(exp) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(coeff);
                }
                btree_map::Entry::Occupied(mut slot) => {
                    let sum = slot.get().clone() + coeff;
                    slot.insert(sum);
                }
            }
        }
        map.retain(|_, c| !c.is_zero());
        Self { terms: map }
    }

    /// Builds a map from entries already known to have unique exponents.
    ///
    /// Zero coefficients are still dropped.
    pub(crate) fn from_unique<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (i64, R)>,
    {
        Self {
            terms: terms.into_iter().filter(|(_, c)| !c.is_zero()).collect(),
        }
    }

    /// Returns the coefficient stored at `exp`, if any.
    #[must_use]
    pub fn get(&self, exp: i64) -> Option<&R> {
        self.terms.get(&exp)
    }

    /// Iterates over the terms in ascending exponent order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (i64, &R)> + ExactSizeIterator + Clone {
        self.terms.iter().map(|(&e, c)| (e, c))
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no terms are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the smallest stored exponent.
    #[must_use]
    pub fn min_exponent(&self) -> Option<i64> {
        self.terms.keys().next().copied()
    }

    /// Returns the largest stored exponent.
    #[must_use]
    pub fn max_exponent(&self) -> Option<i64> {
        self.terms.keys().next_back().copied()
    }

    /// Returns the map of `c * x^shift * self`, or `None` if a shifted
    /// exponent leaves the `i64` range.
    #[must_use]
    pub fn shift_scale(&self, shift: i64, scale: &R) -> Option<Self> {
        let mut terms = self
            .terms
            .iter()
            .map(|(&e, c)| Some((e.checked_add(shift)?, c.clone() * scale.clone())))
            .collect::<Option<BTreeMap<i64, R>>>()?;
        terms.retain(|_, c| !c.is_zero());
        Some(Self { terms })
    }

    /// Returns the map with every coefficient negated.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(&e, c)| (e, -c.clone())).collect(),
        }
    }
}

impl<R: Ring> Default for TermMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Ring> FromIterator<(i64, R)> for TermMap<R> {
    fn from_iter<I: IntoIterator<Item = (i64, R)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}
