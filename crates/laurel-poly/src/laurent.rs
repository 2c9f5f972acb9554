//! Single-variable Laurent polynomials.
//!
//! A Laurent polynomial is a finite sum
//!
//! p(x) = Σ cᵢxⁱ,  i ∈ Z
//!
//! so terms like x⁻² are allowed. Polynomials whose exponents are all
//! non-negative are the ordinary ("standard") polynomials. Values are
//! immutable: every operation returns a new polynomial.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use laurel_rings::{CoefficientType, ExactDivision, Ring};

use crate::error::{PolyError, Result};
use crate::render::{self, PrintSpec, RenderMode};
use crate::terms::TermMap;

/// A Laurent polynomial over the ring `R`.
///
/// Stored sparsely; zero coefficients are never kept, so the derived
/// equality is structural equality of normalised term maps.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LaurentPolynomial<R: Ring> {
    terms: TermMap<R>,
}

impl<R: Ring> LaurentPolynomial<R> {
    /// Creates a polynomial from (exponent, coefficient) pairs.
    ///
    /// Repeated exponents are summed and zero coefficients dropped.
    pub fn new<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (i64, R)>,
    {
        Self {
            terms: TermMap::from_terms(terms),
        }
    }

    /// Wraps an existing term map.
    #[must_use]
    pub fn from_term_map(terms: TermMap<R>) -> Self {
        Self { terms }
    }

    /// Creates a standard polynomial from coefficients of x⁰, x¹, x², ...
    pub fn from_ascending<I>(coeffs: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        Self::from_term_map(TermMap::from_unique((0..).zip(coeffs)))
    }

    /// Creates a standard polynomial from coefficients of the highest
    /// power down to x⁰.
    pub fn from_descending<I>(coeffs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        I::IntoIter: DoubleEndedIterator,
    {
        Self::from_ascending(coeffs.into_iter().rev())
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: TermMap::new(),
        }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::monomial(0, c)
    }

    /// Creates the single term c·xⁿ for any integer n.
    #[must_use]
    pub fn monomial(exp: i64, coeff: R) -> Self {
        Self::from_term_map(TermMap::from_unique([(exp, coeff)]))
    }

    /// The polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1, R::one())
    }

    /// Returns the coefficient ring tag.
    #[must_use]
    pub fn coefficient_type(&self) -> CoefficientType {
        R::TYPE
    }

    /// Returns the underlying term map.
    #[must_use]
    pub fn term_map(&self) -> &TermMap<R> {
        &self.terms
    }

    /// Iterates over the non-zero terms in ascending exponent order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (i64, &R)> + ExactSizeIterator + Clone {
        self.terms.iter()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of non-zero terms.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Returns the highest exponent, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<i64> {
        self.terms.max_exponent()
    }

    /// Returns the lowest exponent, or `None` for the zero polynomial.
    #[must_use]
    pub fn lowest_exponent(&self) -> Option<i64> {
        self.terms.min_exponent()
    }

    /// Returns the coefficient of the highest power.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.iter().next_back().map(|(_, c)| c)
    }

    /// Returns the coefficient of xⁿ, zero if absent.
    #[must_use]
    pub fn coeff(&self, exp: i64) -> R {
        self.terms.get(exp).cloned().unwrap_or_else(R::zero)
    }

    /// Returns true if the only term is a non-zero constant.
    ///
    /// The zero polynomial is not constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.len() == 1 && self.terms.get(0).is_some()
    }

    /// Returns true if any exponent is negative.
    #[must_use]
    pub fn is_laurent(&self) -> bool {
        self.lowest_exponent().is_some_and(|e| e < 0)
    }

    /// Returns the dense coefficient list in ascending order.
    ///
    /// The list starts at x⁰, or at the lowest exponent when that is
    /// negative, and runs to the degree. The zero polynomial gives an
    /// empty list.
    #[must_use]
    pub fn coefficients(&self) -> Vec<R> {
        let (Some(low), Some(high)) = (self.lowest_exponent(), self.degree()) else {
            return Vec::new();
        };
        (low.min(0)..=high).map(|e| self.coeff(e)).collect()
    }

    /// Renders the polynomial under `spec`.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::Render` if a coefficient has no printable
    /// magnitude.
    pub fn render(&self, spec: &PrintSpec) -> Result<String> {
        render::render(self, spec)
    }

    /// Renders the polynomial in code mode.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::Render` if a coefficient has no printable
    /// magnitude.
    pub fn to_repr(&self) -> Result<String> {
        self.render(&PrintSpec::default().with_mode(RenderMode::Code))
    }
}

impl<R: ExactDivision> LaurentPolynomial<R> {
    /// Evaluates the polynomial at `x`.
    ///
    /// Negative powers are taken by exact division, so evaluating a
    /// Laurent polynomial at zero fails, as does an integer point whose
    /// inverse powers are not integral.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::DivisionByZero` when `x` is zero and a negative
    /// power is present, or `PolyError::InexactDivision` when a negative
    /// power of `x` is not representable in `R`.
    pub fn eval(&self, x: &R) -> Result<R> {
        let (Some(low), Some(high)) = (self.lowest_exponent(), self.degree()) else {
            return Ok(R::zero());
        };

        // Horner over the shifted polynomial x^-low * p, skipping gaps
        let mut acc = R::zero();
        let mut prev = high;
        for (exp, c) in self.terms.iter().rev() {
            acc = acc * x.pow(prev.abs_diff(exp)) + c.clone();
            prev = exp;
        }

        if low >= 0 {
            return Ok(acc * x.pow(low.unsigned_abs()));
        }
        if x.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        let denom = x.pow(low.unsigned_abs());
        acc.exact_div(&denom)
            .ok_or_else(|| PolyError::InexactDivision {
                coefficient: acc.to_string(),
                divisor: denom.to_string(),
            })
    }
}

impl<R: Ring> Default for LaurentPolynomial<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Ring> From<BTreeMap<i64, R>> for LaurentPolynomial<R> {
    fn from(map: BTreeMap<i64, R>) -> Self {
        Self::from_term_map(TermMap::from_unique(map))
    }
}

impl<R: Ring> From<HashMap<i64, R>> for LaurentPolynomial<R> {
    fn from(map: HashMap<i64, R>) -> Self {
        Self::from_term_map(TermMap::from_unique(map))
    }
}

impl<R: Ring> From<TermMap<R>> for LaurentPolynomial<R> {
    fn from(terms: TermMap<R>) -> Self {
        Self::from_term_map(terms)
    }
}

impl<R: Ring> FromIterator<(i64, R)> for LaurentPolynomial<R> {
    fn from_iter<I: IntoIterator<Item = (i64, R)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Renders under [`PrintSpec::default()`].
///
/// A [`PolyError::Render`] failure surfaces as `fmt::Error`, so
/// `to_string()` panics on it; call [`render`](LaurentPolynomial::render)
/// to handle the error instead.
impl<R: Ring> fmt::Display for LaurentPolynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(&PrintSpec::default()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laurel_rings::{Q, Z};

    fn z(n: i64) -> Z {
        Z::new(n)
    }

    #[test]
    fn test_construction_drops_zeros() {
        let p = LaurentPolynomial::new([(0, z(1)), (1, z(0)), (-2, z(4))]);
        assert_eq!(p.num_terms(), 2);
        assert_eq!(p.coeff(1), z(0));
        assert_eq!(p.coeff(-2), z(4));
        assert_eq!(p.coeff(17), z(0));
    }

    #[test]
    fn test_map_constructors_agree() {
        let pairs = [(3, z(2)), (-1, z(5))];
        let from_pairs = LaurentPolynomial::new(pairs.clone());
        let from_btree: LaurentPolynomial<Z> = pairs.iter().cloned().collect::<BTreeMap<_, _>>().into();
        let from_hash: LaurentPolynomial<Z> = pairs.iter().cloned().collect::<HashMap<_, _>>().into();
        assert_eq!(from_pairs, from_btree);
        assert_eq!(from_pairs, from_hash);
    }

    #[test]
    fn test_dense_constructors() {
        // 1 - 10x
        let asc = LaurentPolynomial::from_ascending([z(1), z(-10)]);
        let desc = LaurentPolynomial::from_descending([z(-10), z(1)]);
        assert_eq!(asc, desc);
        assert_eq!(asc.coeff(1), z(-10));

        let sparse = LaurentPolynomial::from_descending([z(1), z(0), z(0), z(-1)]);
        assert_eq!(sparse.num_terms(), 2);
        assert_eq!(sparse.degree(), Some(3));
    }

    #[test]
    fn test_queries() {
        let p = LaurentPolynomial::new([(-2, z(3)), (0, z(1)), (4, z(-7))]);
        assert_eq!(p.degree(), Some(4));
        assert_eq!(p.lowest_exponent(), Some(-2));
        assert_eq!(p.leading_coeff(), Some(&z(-7)));
        assert!(p.is_laurent());
        assert!(!p.is_constant());

        let zero = LaurentPolynomial::<Z>::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.degree(), None);
        assert_eq!(zero.leading_coeff(), None);
        assert!(!zero.is_constant());

        assert!(LaurentPolynomial::constant(z(5)).is_constant());
        assert!(LaurentPolynomial::constant(z(0)).is_zero());
        assert_eq!(LaurentPolynomial::<Z>::x().degree(), Some(1));
        assert_eq!(p.coefficient_type(), CoefficientType::Integer);
    }

    #[test]
    fn test_coefficients() {
        let p = LaurentPolynomial::new([(0, z(1)), (3, z(2))]);
        assert_eq!(p.coefficients(), vec![z(1), z(0), z(0), z(2)]);

        let laurent = LaurentPolynomial::new([(-1, z(4)), (1, z(1))]);
        assert_eq!(laurent.coefficients(), vec![z(4), z(0), z(1)]);

        let high = LaurentPolynomial::monomial(2, z(3));
        assert_eq!(high.coefficients(), vec![z(0), z(0), z(3)]);

        assert!(LaurentPolynomial::<Z>::zero().coefficients().is_empty());
    }

    #[test]
    fn test_eval() {
        // x^3 - 2x + 5 at 3 = 27 - 6 + 5
        let p = LaurentPolynomial::new([(3, z(1)), (1, z(-2)), (0, z(5))]);
        assert_eq!(p.eval(&z(3)), Ok(z(26)));
        assert_eq!(p.eval(&z(0)), Ok(z(5)));

        let shifted = LaurentPolynomial::new([(2, z(1)), (5, z(1))]);
        assert_eq!(shifted.eval(&z(2)), Ok(z(36)));

        assert_eq!(LaurentPolynomial::<Z>::zero().eval(&z(9)), Ok(z(0)));
    }

    #[test]
    fn test_eval_laurent() {
        // 2x^-1 + x at 1/2 = 4 + 1/2
        let p = LaurentPolynomial::new([(-1, Q::from_integer(2)), (1, Q::from_integer(1))]);
        assert_eq!(p.eval(&Q::new(1, 2)), Ok(Q::new(9, 2)));
        assert_eq!(p.eval(&Q::zero()), Err(PolyError::DivisionByZero));

        // x^-1 at 2 over Z has no integer value
        let inv = LaurentPolynomial::monomial(-1, z(1));
        assert!(matches!(
            inv.eval(&z(2)),
            Err(PolyError::InexactDivision { .. })
        ));
        assert_eq!(LaurentPolynomial::monomial(-2, z(3)).eval(&z(-1)), Ok(z(3)));
    }

    #[test]
    fn test_eval_extreme_exponents() {
        // x^MIN + x^MAX at -1: (-1)^MIN = 1, (-1)^MAX = -1
        let p = LaurentPolynomial::new([(i64::MIN, z(2)), (i64::MAX, z(5))]);
        assert_eq!(p.eval(&z(-1)), Ok(z(-3)));
        assert_eq!(p.eval(&z(1)), Ok(z(7)));
        assert_eq!(p.eval(&z(0)), Err(PolyError::DivisionByZero));

        let low = LaurentPolynomial::monomial(i64::MIN, Q::from_integer(4));
        assert_eq!(low.eval(&Q::from_integer(1)), Ok(Q::from_integer(4)));
    }

    #[test]
    fn test_display_default() {
        let p = LaurentPolynomial::new([(2, z(1)), (0, z(-1))]);
        assert_eq!(p.to_string(), "x²-1");
        assert_eq!(LaurentPolynomial::<Z>::zero().to_string(), "0");
        assert_eq!(p.to_repr(), Ok("x**2-1".to_string()));
    }
}
