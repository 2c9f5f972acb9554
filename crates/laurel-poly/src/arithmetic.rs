//! Ring arithmetic on Laurent polynomials.
//!
//! Everything here is driven by [`OrderedMerge`]: addition and
//! subtraction walk two term maps in lockstep with a zero fill, and
//! multiplication merges one shifted, scaled copy of the right operand
//! per term of the left one.

use std::ops::{Add, Mul, Neg, Sub};

use laurel_rings::Ring;

use crate::error::{Operation, PolyError, Result};
use crate::laurent::LaurentPolynomial;
use crate::merge::{filled_merge, OrderedMerge};
use crate::terms::TermMap;

impl<R: Ring> LaurentPolynomial<R> {
    fn zip_with<F>(&self, other: &Self, op: F) -> Self
    where
        F: Fn(R, R) -> R,
    {
        let zero = R::zero();
        let terms = filled_merge([self.term_map().iter(), other.term_map().iter()], &zero)
            .map(|(exp, row)| (exp, op(row[0].clone(), row[1].clone())));
        Self::from_term_map(TermMap::from_unique(terms))
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_term_map(self.term_map().negate())
    }

    /// Scales by a constant.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::from_term_map(TermMap::from_unique(
            self.terms().map(|(exp, a)| (exp, a.clone() * c.clone())),
        ))
    }

    /// Multiplies by x^n.
    ///
    /// # Panics
    ///
    /// Panics if a shifted exponent leaves the `i64` range; see
    /// [`checked_shift`](Self::checked_shift).
    #[must_use]
    pub fn shift(&self, n: i64) -> Self {
        or_overflow_panic(self.checked_shift(n))
    }

    /// Multiplies by x^n.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::ExponentOverflow` if a shifted exponent leaves
    /// the `i64` range.
    pub fn checked_shift(&self, n: i64) -> Result<Self> {
        self.checked_mul_monomial(n, &R::one(), Operation::Shift)
    }

    /// Multiplies by the single term c·x^n.
    ///
    /// # Panics
    ///
    /// Panics if a shifted exponent leaves the `i64` range.
    #[must_use]
    pub fn mul_monomial(&self, n: i64, c: &R) -> Self {
        or_overflow_panic(self.checked_mul_monomial(n, c, Operation::Mul))
    }

    fn checked_mul_monomial(&self, n: i64, c: &R, operation: Operation) -> Result<Self> {
        self.term_map()
            .shift_scale(n, c)
            .map(Self::from_term_map)
            .ok_or(PolyError::ExponentOverflow { operation })
    }

    /// Computes Σ wᵢ·Pᵢ.
    ///
    /// Weights pair up with polynomials by position; a polynomial without
    /// a weight (because `weights` is `None` or too short) is weighted by
    /// one. Surplus weights are ignored.
    #[must_use]
    pub fn weighted_sum(polys: &[&Self], weights: Option<&[R]>) -> Self {
        let weights = weights.unwrap_or(&[]);
        let terms = OrderedMerge::new(polys.iter().map(|p| p.term_map().iter())).map(|record| {
            let total = record
                .entries
                .into_iter()
                .fold(R::zero(), |acc, (index, c)| match weights.get(index) {
                    Some(w) => acc + w.clone() * c.clone(),
                    None => acc + c.clone(),
                });
            (record.key, total)
        });
        Self::from_term_map(TermMap::from_unique(terms))
    }

    /// Sums any number of polynomials.
    #[must_use]
    pub fn sum(polys: &[&Self]) -> Self {
        Self::weighted_sum(polys, None)
    }

    /// Multiplies two polynomials.
    ///
    /// Schoolbook convolution: one shifted copy of `other` per term of
    /// `self`, summed by a single k-way merge.
    ///
    /// # Panics
    ///
    /// Panics if a product exponent leaves the `i64` range; see
    /// [`checked_mul`](Self::checked_mul).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        or_overflow_panic(self.checked_mul(other))
    }

    /// Multiplies two polynomials.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::ExponentOverflow` if a product exponent leaves
    /// the `i64` range.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }

        let partials = self
            .terms()
            .map(|(exp, c)| other.checked_mul_monomial(exp, c, Operation::Mul))
            .collect::<Result<Vec<Self>>>()?;
        let refs: Vec<&Self> = partials.iter().collect();
        Ok(Self::sum(&refs))
    }

    /// Computes self^n by repeated squaring.
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the power leaves the `i64` range.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        or_overflow_panic(self.checked_pow(n))
    }

    /// Computes self^n by repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::ExponentOverflow` if an exponent of the power
    /// leaves the `i64` range.
    pub fn checked_pow(&self, n: u32) -> Result<Self> {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.checked_mul(&base)?;
            }
        }

        Ok(result)
    }

    /// Formal derivative with respect to the variable.
    ///
    /// Each term c·xⁿ becomes n·c·xⁿ⁻¹, negative n included. Constants
    /// vanish.
    ///
    /// # Panics
    ///
    /// Panics on a term in x^`i64::MIN`; see
    /// [`checked_derivative`](Self::checked_derivative).
    #[must_use]
    pub fn derivative(&self) -> Self {
        or_overflow_panic(self.checked_derivative())
    }

    /// Formal derivative with respect to the variable.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::ExponentOverflow` on a term in x^`i64::MIN`.
    pub fn checked_derivative(&self) -> Result<Self> {
        let terms = self
            .terms()
            .filter(|&(exp, _)| exp != 0)
            .map(|(exp, c)| match exp.checked_sub(1) {
                Some(lowered) => Ok((lowered, c.mul_by_scalar(exp))),
                None => Err(PolyError::ExponentOverflow {
                    operation: Operation::Derivative,
                }),
            })
            .collect::<Result<Vec<(i64, R)>>>()?;
        Ok(Self::from_term_map(TermMap::from_unique(terms)))
    }
}

/// Unwraps the result of a checked operation behind an infallible method.
fn or_overflow_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl<R: Ring> $trait for LaurentPolynomial<R> {
            type Output = LaurentPolynomial<R>;

            fn $method(self, rhs: Self) -> Self::Output {
                LaurentPolynomial::$method(&self, &rhs)
            }
        }

        impl<'a, R: Ring> $trait<&'a LaurentPolynomial<R>> for &'a LaurentPolynomial<R> {
            type Output = LaurentPolynomial<R>;

            fn $method(self, rhs: Self) -> Self::Output {
                LaurentPolynomial::$method(self, rhs)
            }
        }

        impl<R: Ring> $trait<R> for LaurentPolynomial<R> {
            type Output = LaurentPolynomial<R>;

            fn $method(self, rhs: R) -> Self::Output {
                LaurentPolynomial::$method(&self, &LaurentPolynomial::constant(rhs))
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);

impl<R: Ring> Neg for LaurentPolynomial<R> {
    type Output = LaurentPolynomial<R>;

    fn neg(self) -> Self::Output {
        LaurentPolynomial::neg(&self)
    }
}

impl<R: Ring> Neg for &LaurentPolynomial<R> {
    type Output = LaurentPolynomial<R>;

    fn neg(self) -> Self::Output {
        LaurentPolynomial::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laurel_rings::{Fp, Z};

    fn z(n: i64) -> Z {
        Z::new(n)
    }

    fn poly(terms: &[(i64, i64)]) -> LaurentPolynomial<Z> {
        LaurentPolynomial::new(terms.iter().map(|&(e, c)| (e, z(c))))
    }

    #[test]
    fn test_add_cancels() {
        // (x + 1) + (1 - x) = 2
        let a = poly(&[(1, 1), (0, 1)]);
        let b = poly(&[(0, 1), (1, -1)]);
        assert_eq!(&a + &b, LaurentPolynomial::constant(z(2)));
    }

    #[test]
    fn test_sub_self_is_zero() {
        let a = poly(&[(-3, 2), (0, 5), (4, -1)]);
        assert!((&a - &a).is_zero());
        assert_eq!(a.clone() - LaurentPolynomial::zero(), a);
    }

    #[test]
    fn test_neg() {
        let a = poly(&[(-1, 2), (2, -3)]);
        assert_eq!(-&a, poly(&[(-1, -2), (2, 3)]));
        assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn test_mul() {
        // (x + 1)(1 - x) = 1 - x^2
        let a = poly(&[(1, 1), (0, 1)]);
        let b = poly(&[(0, 1), (1, -1)]);
        assert_eq!(a * b, poly(&[(0, 1), (2, -1)]));

        // (x^-1 + x)(x^-1 - x) = x^-2 - x^2
        let c = poly(&[(-1, 1), (1, 1)]);
        let d = poly(&[(-1, 1), (1, -1)]);
        assert_eq!(&c * &d, poly(&[(-2, 1), (2, -1)]));

        assert!((&c * &LaurentPolynomial::zero()).is_zero());
    }

    #[test]
    fn test_scalar_ops() {
        let a = poly(&[(1, 2), (0, 1)]);
        assert_eq!(a.clone() + z(3), poly(&[(1, 2), (0, 4)]));
        assert_eq!(a.clone() - z(1), poly(&[(1, 2)]));
        assert_eq!(a.clone() * z(-2), poly(&[(1, -4), (0, -2)]));
        assert!((a * z(0)).is_zero());
    }

    #[test]
    fn test_weighted_sum() {
        let one = LaurentPolynomial::constant(z(1));
        let weights = [z(1), z(1), z(1)];
        let total = LaurentPolynomial::weighted_sum(&[&one, &one, &one], Some(&weights[..]));
        assert_eq!(total, LaurentPolynomial::constant(z(3)));

        // short weights default to one
        let a = poly(&[(1, 1)]);
        let b = poly(&[(1, 1), (0, 1)]);
        let total = LaurentPolynomial::weighted_sum(&[&a, &b], Some(&[z(5)][..]));
        assert_eq!(total, poly(&[(1, 6), (0, 1)]));

        // cancelling weights drop the term
        let total = LaurentPolynomial::weighted_sum(&[&a, &b], Some(&[z(-1), z(1)][..]));
        assert_eq!(total, poly(&[(0, 1)]));

        assert!(LaurentPolynomial::<Z>::sum(&[]).is_zero());
    }

    #[test]
    fn test_pow() {
        // (x + 1)^3
        let a = poly(&[(1, 1), (0, 1)]);
        assert_eq!(a.pow(3), poly(&[(3, 1), (2, 3), (1, 3), (0, 1)]));
        assert_eq!(a.pow(0), LaurentPolynomial::one());

        let inv = poly(&[(-1, 2)]);
        assert_eq!(inv.pow(2), poly(&[(-2, 4)]));
    }

    #[test]
    fn test_shift() {
        let a = poly(&[(0, 1), (2, 3)]);
        assert_eq!(a.shift(-3), poly(&[(-3, 1), (-1, 3)]));
    }

    #[test]
    fn test_derivative() {
        // d/dx (3x^2 + 2x^-1 + 7) = 6x - 2x^-2
        let a = poly(&[(2, 3), (-1, 2), (0, 7)]);
        assert_eq!(a.derivative(), poly(&[(1, 6), (-2, -2)]));
        assert!(LaurentPolynomial::constant(z(9)).derivative().is_zero());
    }

    #[test]
    fn test_exponent_range_limits() {
        let top = LaurentPolynomial::monomial(i64::MAX, z(1));
        let x = LaurentPolynomial::x();
        let overflow = |operation| -> Result<LaurentPolynomial<Z>> {
            Err(PolyError::ExponentOverflow { operation })
        };

        assert_eq!(top.checked_mul(&x), overflow(Operation::Mul));
        assert_eq!(top.checked_shift(1), overflow(Operation::Shift));
        let big = LaurentPolynomial::monomial(1 << 40, z(1));
        assert_eq!(big.checked_pow(u32::MAX), overflow(Operation::Mul));

        // the boundary itself is reachable
        let below = LaurentPolynomial::monomial(i64::MAX - 1, z(1));
        assert_eq!(below.checked_mul(&x), Ok(top.clone()));
        assert_eq!(top.checked_shift(i64::MIN), Ok(LaurentPolynomial::monomial(-1, z(1))));

        let bottom = LaurentPolynomial::monomial(i64::MIN, z(1));
        assert_eq!(bottom.checked_derivative(), overflow(Operation::Derivative));
        assert_eq!(
            LaurentPolynomial::monomial(i64::MIN + 1, z(1)).checked_derivative(),
            Ok(LaurentPolynomial::monomial(i64::MIN, z(i64::MIN + 1)))
        );
    }

    #[test]
    #[should_panic(expected = "exponent overflow in mul")]
    fn test_mul_past_range_panics() {
        let top = LaurentPolynomial::monomial(i64::MAX, z(1));
        let _ = &top * &LaurentPolynomial::<Z>::x();
    }

    #[test]
    fn test_derivative_characteristic() {
        // d/dx x^7 = 7x^6 = 0 over F_7
        type F7 = Fp<7>;
        let a = LaurentPolynomial::new([(7, F7::new(1)), (1, F7::new(3))]);
        assert_eq!(a.derivative(), LaurentPolynomial::constant(F7::new(3)));
    }
}
