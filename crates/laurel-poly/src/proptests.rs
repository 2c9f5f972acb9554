//! Property-based tests for Laurent polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::laurent::LaurentPolynomial;
    use crate::render::{PrintSpec, RenderMode, TermOrder};
    use laurel_rings::{Q, Z};

    // Strategy for generating small sparse integer polynomials, negative powers included
    fn laurent_z() -> impl Strategy<Value = LaurentPolynomial<Z>> {
        proptest::collection::vec((-4i64..=6, -20i64..20), 0..6)
            .prop_map(|terms| LaurentPolynomial::new(terms.into_iter().map(|(e, c)| (e, Z::new(c)))))
    }

    // Standard polynomials: non-negative exponents, signed coefficients
    fn standard_z() -> impl Strategy<Value = LaurentPolynomial<Z>> {
        proptest::collection::vec((0i64..8, -50i64..50), 0..6)
            .prop_map(|terms| LaurentPolynomial::new(terms.into_iter().map(|(e, c)| (e, Z::new(c)))))
    }

    fn laurent_q() -> impl Strategy<Value = LaurentPolynomial<Q>> {
        proptest::collection::vec((-3i64..=5, -20i64..20, 1i64..6), 0..6).prop_map(|terms| {
            LaurentPolynomial::new(terms.into_iter().map(|(e, n, d)| (e, Q::new(n, d))))
        })
    }

    fn nonzero_q() -> impl Strategy<Value = LaurentPolynomial<Q>> {
        laurent_q().prop_filter("divisor must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn add_commutative(a in laurent_z(), b in laurent_z()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in laurent_z(), b in laurent_z(), c in laurent_z()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn add_identity(a in laurent_z()) {
            let zero = LaurentPolynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn sub_self_is_zero(a in laurent_z()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn mul_commutative(a in laurent_z(), b in laurent_z()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn distributive(a in laurent_z(), b in laurent_z(), c in laurent_z()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn sum_matches_pairwise_add(a in laurent_z(), b in laurent_z(), c in laurent_z()) {
            let total = LaurentPolynomial::sum(&[&a, &b, &c]);
            prop_assert_eq!(total, a.add(&b).add(&c));
        }

        #[test]
        fn div_rem_identity(p in laurent_q(), d in nonzero_q()) {
            let (q, r) = p.div_rem(&d).unwrap();
            prop_assert_eq!(d.mul(&q).add(&r), p);
            if let (Some(rd), Some(dd)) = (r.degree(), d.degree()) {
                prop_assert!(rd < dd);
            }
        }

        #[test]
        fn div_rem_exact_product(a in laurent_q(), d in nonzero_q()) {
            let (q, r) = a.mul(&d).div_rem(&d).unwrap();
            prop_assert_eq!(q.mul(&d).add(&r), a.mul(&d));
            prop_assert!(r.degree().map_or(true, |rd| rd < d.degree().unwrap()));
        }

        #[test]
        fn derivative_linear(a in laurent_z(), b in laurent_z()) {
            prop_assert_eq!(a.add(&b).derivative(), a.derivative().add(&b.derivative()));
        }

        #[test]
        fn derivative_of_constant(c in -100i64..100) {
            prop_assert!(LaurentPolynomial::constant(Z::new(c)).derivative().is_zero());
        }

        #[test]
        fn plain_render_parses_back(p in standard_z()) {
            let spec = PrintSpec::default()
                .with_mode(RenderMode::Plain)
                .with_order(TermOrder::Ascending);
            let text = p.render(&spec).unwrap();
            let parsed: LaurentPolynomial<Z> = text.parse().unwrap();
            prop_assert_eq!(parsed, p);
        }
    }
}
