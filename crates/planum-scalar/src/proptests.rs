//! Property-based tests for decimal arithmetic.

use num_traits::{One, Zero};
use proptest::prelude::*;

use crate::Decimal;

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

proptest! {
    #[test]
    fn add_commutative(a in small_int(), b in small_int()) {
        let a = Decimal::from_i64(a);
        let b = Decimal::from_i64(b);
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn add_neg_is_zero(a in small_int()) {
        let a = Decimal::from_i64(a);
        prop_assert!((a.clone() + (-a)).is_zero());
    }

    #[test]
    fn mul_distributes_over_add(a in small_int(), b in small_int(), c in small_int()) {
        let a = Decimal::from_i64(a);
        let b = Decimal::from_i64(b);
        let c = Decimal::from_i64(c);
        prop_assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b + a * c
        );
    }

    #[test]
    fn div_then_mul_roundtrips(a in small_int(), b in non_zero_int()) {
        let a = Decimal::from_i64(a);
        let b = Decimal::from_i64(b);
        let q = a.clone() / b.clone();
        prop_assert!((q * b).is_near(&a));
    }

    #[test]
    fn recip_is_involution(a in non_zero_int()) {
        let a = Decimal::from_i64(a);
        prop_assert!(a.recip().recip().is_near(&a));
    }

    #[test]
    fn sqrt_of_square_is_abs(a in small_int()) {
        let a = Decimal::from_i64(a);
        let square = a.clone() * a.clone();
        prop_assert!(square.sqrt().is_near(&a.abs()));
    }

    #[test]
    fn one_is_multiplicative_identity(a in small_int()) {
        let a = Decimal::from_i64(a);
        prop_assert_eq!(a.clone() * Decimal::one(), a);
    }
}
