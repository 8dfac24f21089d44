//! Property-based tests for vector algebra.

use num_traits::One;
use planum_scalar::{Decimal, NEAR_ZERO};
use proptest::prelude::*;

use crate::vector::Vector;

// Strategy for generating coordinate values
fn coord() -> impl Strategy<Value = i64> {
    -100i64..100i64
}

// Strategy for generating a vector of the given dimension
fn vector(dim: usize) -> impl Strategy<Value = Vector> {
    prop::collection::vec(coord(), dim).prop_map(|coords| {
        Vector::new(coords.into_iter().map(Decimal::from_i64).collect())
            .expect("dimension is nonzero")
    })
}

proptest! {
    #[test]
    fn plus_then_minus_roundtrips(v in vector(4), w in vector(4)) {
        let roundtrip = v.plus(&w).unwrap().minus(&w).unwrap();
        prop_assert!(roundtrip.minus(&v).unwrap().is_zero());
    }

    #[test]
    fn normalized_has_unit_magnitude(v in vector(3)) {
        prop_assume!(!v.is_zero());
        let unit = v.normalized().unwrap();
        prop_assert!(unit.magnitude().is_near(&Decimal::one()));
    }

    #[test]
    fn every_vector_is_parallel_to_itself(v in vector(3)) {
        prop_assert!(v.is_parallel(&v).unwrap());
    }

    #[test]
    fn scalar_multiples_are_parallel(v in vector(3), k in coord()) {
        let scaled = v.times_scalar(&Decimal::from_i64(k));
        prop_assert!(v.is_parallel(&scaled).unwrap());
    }

    #[test]
    fn orthogonality_matches_dot_product(v in vector(3), w in vector(3)) {
        let dot = v.dot_product(&w).unwrap();
        prop_assert_eq!(
            v.is_orthogonal(&w).unwrap(),
            dot.to_f64().abs() < NEAR_ZERO
        );
    }

    #[test]
    fn cross_product_is_orthogonal_to_operands(v in vector(3), w in vector(3)) {
        let cross = v.cross_product(&w).unwrap();
        prop_assert!(cross.is_orthogonal(&v).unwrap());
        prop_assert!(cross.is_orthogonal(&w).unwrap());
    }

    #[test]
    fn projection_decomposes_vector(v in vector(3), basis in vector(3)) {
        prop_assume!(!basis.is_zero());
        let parallel = v.component_projected_to(&basis).unwrap();
        let orthogonal = v.component_orthogonal_to(&basis).unwrap();
        let recomposed = parallel.plus(&orthogonal).unwrap();
        prop_assert!(recomposed.minus(&v).unwrap().is_zero());
        prop_assert!(orthogonal.is_orthogonal(&basis).unwrap());
    }
}
