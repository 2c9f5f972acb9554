//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{ExactDivision, Field, Fp, Ring, Scalar, CoefficientType, Q, Z};

    type F101 = Fp<101>;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Q> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            let c = Z::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_exact_div_inverts_mul(a in small_int(), b in non_zero_int()) {
            let product = Z::new(a) * Z::new(b);
            prop_assert_eq!(product.exact_div(&Z::new(b)), Some(Z::new(a)));
        }

        #[test]
        fn integer_exact_div_rejects_remainder(a in small_int(), b in 2i64..50) {
            let value = Z::new(a * b + 1);
            prop_assert_eq!(value.exact_div(&Z::new(b)), None);
        }

        #[test]
        fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn rational_mul_inverse(a in rational()) {
            prop_assume!(!a.is_zero());
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_parse_display(a in rational()) {
            let parsed: Q = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }

        #[test]
        fn prime_field_mul_inverse(a in 1u64..101) {
            let a = F101::new(a);
            prop_assert!((a * a.inv().unwrap()).is_one());
        }

        #[test]
        fn prime_field_neg(a in small_int()) {
            let a = F101::from_i64(a);
            prop_assert!((a + (-a)).is_zero());
        }

        #[test]
        fn mul_by_scalar_matches_repeated_add(a in small_int(), n in 0i64..20) {
            let a = Z::new(a);
            let mut sum = Z::zero();
            for _ in 0..n {
                sum = sum + a.clone();
            }
            prop_assert_eq!(a.mul_by_scalar(n), sum);
        }

        #[test]
        fn scalar_widening_is_lossless(a in small_int()) {
            let widened = Scalar::from(a).convert(CoefficientType::Rational).unwrap();
            let back = widened.convert(CoefficientType::Integer).unwrap();
            prop_assert_eq!(back, Scalar::from(a));
        }
    }
}
