//! Property-based tests for Gaussian elimination.

use num_traits::Zero;
use planum_geom::{Hyperplane, Vector};
use planum_scalar::Decimal;
use proptest::prelude::*;

use crate::parametrization::Parametrization;
use crate::system::{LinearSystem, SolveError};

// Strategy for generating coefficient values
fn coeff() -> impl Strategy<Value = i64> {
    -5i64..=5i64
}

// Strategy for generating a system of `rows` equations in `dim` variables
fn system(rows: usize, dim: usize) -> impl Strategy<Value = LinearSystem> {
    prop::collection::vec(prop::collection::vec(coeff(), dim + 1), rows).prop_map(|rows| {
        let planes = rows
            .into_iter()
            .map(|mut row| {
                let constant = Decimal::from_i64(row.pop().expect("dim + 1 entries"));
                let normal = Vector::new(row.into_iter().map(Decimal::from_i64).collect())
                    .expect("dim is nonzero");
                Hyperplane::new(normal, constant)
            })
            .collect();
        LinearSystem::new(planes).expect("rows is nonzero")
    })
}

/// True if `point` satisfies every equation of `system` within tolerance.
fn satisfies(system: &LinearSystem, point: &Vector) -> bool {
    (0..system.len()).all(|i| {
        let lhs = system[i]
            .normal_vector()
            .dot_product(point)
            .expect("matching dimensions");
        lhs.is_near(system[i].constant_term())
    })
}

/// True if `direction` is annihilated by every normal of `system`.
fn annihilated_by(system: &LinearSystem, direction: &Vector) -> bool {
    (0..system.len()).all(|i| {
        system[i]
            .normal_vector()
            .dot_product(direction)
            .expect("matching dimensions")
            .is_near_zero()
    })
}

/// Solution-set equality up to basis choice: equal free-variable counts,
/// both base points satisfy the original equations, and every direction
/// vector lies in the original system's null space.
fn equivalent_solutions(
    original: &LinearSystem,
    a: &Parametrization,
    b: &Parametrization,
) -> bool {
    a.direction_vectors().len() == b.direction_vectors().len()
        && satisfies(original, a.base_point())
        && satisfies(original, b.base_point())
        && a.direction_vectors().iter().all(|d| annihilated_by(original, d))
        && b.direction_vectors().iter().all(|d| annihilated_by(original, d))
}

proptest! {
    #[test]
    fn triangular_form_pivots_strictly_increase(s in system(4, 3)) {
        let t = s.compute_triangular_form().unwrap();
        let pivots: Vec<usize> = t
            .indices_of_first_nonzero_terms_in_each_row()
            .into_iter()
            .flatten()
            .collect();
        prop_assert!(pivots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rref_pivots_strictly_increase(s in system(4, 3)) {
        let r = s.compute_rref().unwrap();
        let pivots: Vec<usize> = r
            .indices_of_first_nonzero_terms_in_each_row()
            .into_iter()
            .flatten()
            .collect();
        prop_assert!(pivots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rref_is_idempotent(s in system(3, 3)) {
        let once = s.compute_rref().unwrap();
        let twice = once.compute_rref().unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn rref_pivot_coefficients_are_one(s in system(3, 3)) {
        let r = s.compute_rref().unwrap();
        for (row, pivot) in r
            .indices_of_first_nonzero_terms_in_each_row()
            .into_iter()
            .enumerate()
        {
            if let Some(col) = pivot {
                let lead = r[row].normal_vector()[col].clone();
                prop_assert!(lead.is_near(&num_traits::One::one()));
                // the pivot column is clear everywhere else
                for other in 0..r.len() {
                    if other != row {
                        prop_assert!(r[other].normal_vector()[col].is_near_zero());
                    }
                }
            }
        }
    }

    #[test]
    fn solution_satisfies_the_system(s in system(3, 3)) {
        match s.compute_solution() {
            Ok(solution) => {
                prop_assert!(satisfies(&s, solution.base_point()));
                for direction in solution.direction_vectors() {
                    prop_assert!(annihilated_by(&s, direction));
                }
            }
            Err(SolveError::NoSolution) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn row_operations_preserve_solution_set(s in system(3, 3), k in -3i64..=3i64) {
        prop_assume!(k != 0);

        let mut reshuffled = s.clone();
        reshuffled.swap_rows(0, 2);
        reshuffled.multiply_row(&Decimal::from_i64(k), 1);
        reshuffled
            .add_multiple_of_row_to_row(&Decimal::from_i64(k), 0, 1)
            .unwrap();
        reshuffled
            .add_multiple_of_row_to_row(&Decimal::from_i64(-k), 2, 0)
            .unwrap();

        match (s.compute_solution(), reshuffled.compute_solution()) {
            (Ok(a), Ok(b)) => prop_assert!(equivalent_solutions(&s, &a, &b)),
            (Err(SolveError::NoSolution), Err(SolveError::NoSolution)) => {}
            (a, b) => prop_assert!(false, "outcomes diverged: {a:?} vs {b:?}"),
        }
    }

    #[test]
    fn degenerate_rows_do_not_change_the_solution(s in system(2, 3)) {
        let mut padded_planes: Vec<Hyperplane> = (0..s.len()).map(|i| s[i].clone()).collect();
        padded_planes.push(Hyperplane::new(
            Vector::zeros(3).unwrap(),
            Decimal::zero(),
        ));
        let padded = LinearSystem::new(padded_planes).unwrap();

        match (s.compute_solution(), padded.compute_solution()) {
            (Ok(a), Ok(b)) => prop_assert!(equivalent_solutions(&s, &a, &b)),
            (Err(SolveError::NoSolution), Err(SolveError::NoSolution)) => {}
            (a, b) => prop_assert!(false, "outcomes diverged: {a:?} vs {b:?}"),
        }
    }
}
