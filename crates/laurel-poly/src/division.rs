//! Exact division with remainder.
//!
//! Synthetic (expanded) division: the dividend is shifted down by the
//! divisor's degree so that the quotient occupies exponents `0..` of a
//! working buffer and the remainder everything below zero. Each step
//! takes the highest pending coefficient, divides it by the divisor's
//! leading coefficient, and feeds the negated divisor tail forward.
//!
//! Laurent dividends need no special handling: their negative powers
//! start out below the shift point and stay in the remainder.

use std::collections::BTreeMap;

use laurel_rings::ExactDivision;
use tracing::trace;

use crate::error::{Operation, PolyError, Result};
use crate::laurent::LaurentPolynomial;
use crate::terms::TermMap;

impl<R: ExactDivision> LaurentPolynomial<R> {
    /// Divides by `divisor`, returning (quotient, remainder).
    ///
    /// The result satisfies `self = divisor * quotient + remainder` with
    /// `remainder` zero or of lower degree than `divisor`.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::DivisionByZero` if `divisor` is zero, and
    /// `PolyError::InexactDivision` if some step needs a quotient of
    /// coefficients that does not exist in `R` (only possible outside
    /// fields, e.g. over Z with a non-unit leading coefficient).
    /// Returns `PolyError::ExponentOverflow` if a quotient exponent does
    /// not fit in an `i64`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(dividend_degree = ?self.degree(), divisor_degree = ?divisor.degree())
    )]
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let (Some(divisor_degree), Some(lead)) = (divisor.degree(), divisor.leading_coeff()) else {
            return Err(PolyError::DivisionByZero);
        };
        let Some(dividend_degree) = self.degree() else {
            return Ok((Self::zero(), Self::zero()));
        };
        if dividend_degree < divisor_degree {
            return Ok((Self::zero(), self.clone()));
        }

        // Shifted exponents span up to twice the i64 range
        let shift = i128::from(divisor_degree);

        // Negated divisor without its leading term, relative to its degree
        let tail: Vec<(i128, R)> = divisor
            .terms()
            .rev()
            .skip(1)
            .map(|(exp, c)| (i128::from(exp) - shift, -c.clone()))
            .collect();

        let mut buffer: BTreeMap<i128, R> = self
            .terms()
            .map(|(exp, c)| (i128::from(exp) - shift, c.clone()))
            .collect();
        let mut quotient = Vec::new();

        while let Some(entry) = buffer.last_entry() {
            if *entry.key() < 0 {
                break;
            }
            let (i, value) = entry.remove_entry();
            if value.is_zero() {
                continue;
            }

            let exponent = narrow(i)?;
            let dropped = value.exact_div(lead).ok_or_else(|| PolyError::InexactDivision {
                coefficient: value.to_string(),
                divisor: lead.to_string(),
            })?;
            trace!(exponent, coefficient = %dropped, "quotient term");

            for (offset, c) in &tail {
                let slot = buffer.entry(i + offset).or_insert_with(R::zero);
                *slot = slot.clone() + dropped.clone() * c.clone();
            }
            quotient.push((exponent, dropped));
        }

        let remainder = buffer
            .into_iter()
            .map(|(exp, c)| narrow(exp + shift).map(|exp| (exp, c)))
            .collect::<Result<Vec<(i64, R)>>>()?;

        Ok((
            Self::from_term_map(TermMap::from_unique(quotient)),
            Self::from_term_map(TermMap::from_unique(remainder)),
        ))
    }

    /// Returns only the quotient of [`div_rem`](Self::div_rem).
    ///
    /// # Errors
    ///
    /// See [`div_rem`](Self::div_rem).
    pub fn quotient(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Returns only the remainder of [`div_rem`](Self::div_rem).
    ///
    /// # Errors
    ///
    /// See [`div_rem`](Self::div_rem).
    pub fn remainder(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Returns true if `divisor` divides `self` with zero remainder.
    ///
    /// # Errors
    ///
    /// See [`div_rem`](Self::div_rem).
    pub fn is_divisible_by(&self, divisor: &Self) -> Result<bool> {
        self.remainder(divisor).map(|r| r.is_zero())
    }
}

fn narrow(exp: i128) -> Result<i64> {
    i64::try_from(exp).map_err(|_| PolyError::ExponentOverflow {
        operation: Operation::DivRem,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use laurel_rings::{Fp, Q, Z};

    fn z(n: i64) -> Z {
        Z::new(n)
    }

    fn poly(terms: &[(i64, i64)]) -> LaurentPolynomial<Z> {
        LaurentPolynomial::new(terms.iter().map(|&(e, c)| (e, z(c))))
    }

    fn qpoly(terms: &[(i64, i64)]) -> LaurentPolynomial<Q> {
        LaurentPolynomial::new(terms.iter().map(|&(e, c)| (e, Q::from_integer(c))))
    }

    #[test]
    fn test_geometric_series() {
        // (x^10 - 1) / (x - 1) = x^9 + ... + 1
        let p = poly(&[(10, 1), (0, -1)]);
        let d = poly(&[(1, 1), (0, -1)]);
        let (q, r) = p.div_rem(&d).unwrap();

        let expected = LaurentPolynomial::new((0..10).map(|e| (e, z(1))));
        assert_eq!(q, expected);
        assert!(r.is_zero());
    }

    #[test]
    fn test_division_by_zero() {
        let p = poly(&[(2, 1)]);
        assert_eq!(
            p.div_rem(&LaurentPolynomial::zero()),
            Err(PolyError::DivisionByZero)
        );
        assert_eq!(
            LaurentPolynomial::<Z>::zero().quotient(&LaurentPolynomial::zero()),
            Err(PolyError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero_and_small_dividends() {
        let d = poly(&[(2, 1), (0, 1)]);
        let (q, r) = LaurentPolynomial::zero().div_rem(&d).unwrap();
        assert!(q.is_zero() && r.is_zero());

        let small = poly(&[(1, 3), (0, 2)]);
        let (q, r) = small.div_rem(&d).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, small);
    }

    #[test]
    fn test_fixture_table() {
        // (dividend, divisor, quotient, remainder), descending coefficients
        let cases: &[(&[i64], &[i64], &[i64], &[i64])] = &[
            (&[7, 4, -39, 0, 1, -6], &[1, -7, 9, -9], &[7, 53, 269], &[1469, -1943, 2415]),
            (&[1, 0], &[1, 1], &[1], &[-1]),
            (&[1, 0, 0], &[1, 1], &[1, -1], &[1]),
            (&[2, 0, -3, 5], &[1, -2], &[2, 4, 5], &[15]),
        ];

        for &(p, d, q, r) in cases {
            let from = |c: &[i64]| LaurentPolynomial::from_descending(c.iter().map(|&n| z(n)));
            let (quot, rem) = from(p).div_rem(&from(d)).unwrap();
            assert_eq!(quot, from(q));
            assert_eq!(rem, from(r));
        }
    }

    #[test]
    fn test_identity_over_rationals() {
        // (3x^4 + x - 2) / (2x^2 + 1)
        let p = qpoly(&[(4, 3), (1, 1), (0, -2)]);
        let d = qpoly(&[(2, 2), (0, 1)]);
        let (q, r) = p.div_rem(&d).unwrap();

        assert_eq!(q.coeff(2), Q::new(3, 2));
        assert!(r.degree().unwrap() < 2);
        assert_eq!(&(&d * &q) + &r, p);
    }

    #[test]
    fn test_laurent_dividend() {
        // (x^2 + x^-1) / x = x + remainder x^-1
        let p = qpoly(&[(2, 1), (-1, 1)]);
        let d = qpoly(&[(1, 1)]);
        let (q, r) = p.div_rem(&d).unwrap();
        assert_eq!(q, qpoly(&[(1, 1)]));
        assert_eq!(r, qpoly(&[(-1, 1)]));
        assert_eq!(&(&d * &q) + &r, p);
    }

    #[test]
    fn test_inexact_over_integers() {
        // x^2 / (2x + 1) has no integer quotient
        let p = poly(&[(2, 1)]);
        let d = poly(&[(1, 2), (0, 1)]);
        assert_eq!(
            p.div_rem(&d),
            Err(PolyError::InexactDivision {
                coefficient: "1".to_string(),
                divisor: "2".to_string(),
            })
        );
    }

    #[test]
    fn test_prime_field() {
        type F5 = Fp<5>;
        let f = |terms: &[(i64, u64)]| LaurentPolynomial::new(terms.iter().map(|&(e, c)| (e, F5::new(c))));

        // x^2 + 1 = (x + 2)(x + 3) over F_5
        let p = f(&[(2, 1), (0, 1)]);
        let d = f(&[(1, 1), (0, 2)]);
        let (q, r) = p.div_rem(&d).unwrap();
        assert_eq!(q, f(&[(1, 1), (0, 3)]));
        assert!(r.is_zero());
        assert_eq!(p.is_divisible_by(&d), Ok(true));
    }

    #[test]
    fn test_exponent_range_limits() {
        let top = LaurentPolynomial::monomial(i64::MAX, z(1));
        let inverse = LaurentPolynomial::monomial(-1, z(1));
        assert_eq!(
            top.div_rem(&inverse),
            Err(PolyError::ExponentOverflow {
                operation: Operation::DivRem
            })
        );

        // x^MAX / x^MAX and x^MIN / x stay inside the range
        assert_eq!(top.div_rem(&top), Ok((LaurentPolynomial::one(), LaurentPolynomial::zero())));
        let bottom = poly(&[(1, 1), (i64::MIN, 3)]);
        let (q, r) = bottom.div_rem(&LaurentPolynomial::x()).unwrap();
        assert_eq!(q, LaurentPolynomial::one());
        assert_eq!(r, poly(&[(i64::MIN, 3)]));

        // a wide divisor span works in shifted coordinates
        let wide = poly(&[(i64::MAX, 1), (i64::MIN, 1)]);
        let (q, r) = wide.div_rem(&wide).unwrap();
        assert_eq!(q, LaurentPolynomial::one());
        assert!(r.is_zero());
    }

    #[test]
    fn test_sparse_gap_is_not_walked() {
        // one step per quotient term, however far apart the powers are
        let p = poly(&[(1 << 50, 1), (0, -1)]);
        let (q, r) = p.div_rem(&poly(&[(1 << 49, 1)])).unwrap();
        assert_eq!(q, poly(&[(1 << 49, 1)]));
        assert_eq!(r, poly(&[(0, -1)]));
    }

    #[test]
    fn test_shortcuts() {
        let p = poly(&[(2, 1), (0, 1)]);
        let d = poly(&[(1, 1), (0, 1)]);
        assert_eq!(p.quotient(&d), Ok(poly(&[(1, 1), (0, -1)])));
        assert_eq!(p.remainder(&d), Ok(poly(&[(0, 2)])));
    }
}
