//! Ordered systems of hyperplanes and their row reduction.

use std::fmt;
use std::ops::Index;

use planum_geom::{GeomError, Hyperplane, Vector};
use planum_scalar::Decimal;
use thiserror::Error;

use crate::parametrization::Parametrization;

/// Errors raised while constructing or solving a linear system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A system was constructed from an empty list of hyperplanes.
    #[error("a linear system requires at least one hyperplane")]
    EmptySystem,

    /// A hyperplane's dimension differs from the system's.
    #[error("all hyperplanes in the system must live in the same dimension ({expected}), got {found}")]
    MixedDimensions {
        /// The system's dimension.
        expected: usize,
        /// The offending hyperplane's dimension.
        found: usize,
    },

    /// The system is inconsistent: reduction produced a row `0 = k` with
    /// `k` not near zero.
    #[error("no solutions")]
    NoSolution,

    /// A vector or hyperplane operation failed.
    #[error(transparent)]
    Geom(#[from] GeomError),
}

/// An ordered system of same-dimension hyperplanes.
///
/// The row order is significant and part of the solving semantics.
/// Elementary row operations mutate the system in place, but always by
/// replacing a slot with a freshly constructed [`Hyperplane`]; a
/// hyperplane value itself is never edited.
#[derive(Clone, PartialEq)]
pub struct LinearSystem {
    planes: Vec<Hyperplane>,
    dimension: usize,
}

impl LinearSystem {
    /// Creates a system from an ordered list of hyperplanes.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptySystem`] for an empty list and
    /// [`SolveError::MixedDimensions`] when the hyperplanes do not all
    /// share one dimension.
    pub fn new(planes: Vec<Hyperplane>) -> Result<Self, SolveError> {
        let Some(first) = planes.first() else {
            return Err(SolveError::EmptySystem);
        };
        let dimension = first.dimension();
        for plane in &planes {
            if plane.dimension() != dimension {
                return Err(SolveError::MixedDimensions {
                    expected: dimension,
                    found: plane.dimension(),
                });
            }
        }
        Ok(Self { planes, dimension })
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Returns true if the system has no equations. Always false for a
    /// constructed system; provided for slice-like completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Returns the shared dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Replaces row `row` with `plane`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MixedDimensions`] if the dimension differs
    /// from the system's.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn set_row(&mut self, row: usize, plane: Hyperplane) -> Result<(), SolveError> {
        if plane.dimension() != self.dimension {
            return Err(SolveError::MixedDimensions {
                expected: self.dimension,
                found: plane.dimension(),
            });
        }
        self.planes[row] = plane;
        Ok(())
    }

    /// Exchanges two rows.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_rows(&mut self, row_a: usize, row_b: usize) {
        self.planes.swap(row_a, row_b);
    }

    /// Scales row `row`'s normal vector and constant term by
    /// `coefficient`.
    ///
    /// The coefficient must be nonzero for the operation to preserve the
    /// solution set; scaling by zero erases the equation.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds. In debug builds, panics if
    /// `coefficient` is near zero.
    pub fn multiply_row(&mut self, coefficient: &Decimal, row: usize) {
        debug_assert!(
            !coefficient.is_near_zero(),
            "scaling a row by zero erases the equation"
        );
        let normal = self.planes[row].normal_vector().times_scalar(coefficient);
        let constant = self.planes[row].constant_term().clone() * coefficient.clone();
        self.planes[row] = Hyperplane::new(normal, constant);
    }

    /// Adds `coefficient` times row `source` to row `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Geom`] on a dimension mismatch, which the
    /// construction invariant rules out for rows of the same system.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn add_multiple_of_row_to_row(
        &mut self,
        coefficient: &Decimal,
        source: usize,
        target: usize,
    ) -> Result<(), SolveError> {
        let scaled_normal = self.planes[source].normal_vector().times_scalar(coefficient);
        let scaled_constant = self.planes[source].constant_term().clone() * coefficient.clone();

        let normal = self.planes[target].normal_vector().plus(&scaled_normal)?;
        let constant = self.planes[target].constant_term().clone() + scaled_constant;

        self.planes[target] = Hyperplane::new(normal, constant);
        Ok(())
    }

    /// Returns the pivot column of each row: the index of the first
    /// normal coefficient that is not near zero, or `None` for a
    /// degenerate row.
    #[must_use]
    pub fn indices_of_first_nonzero_terms_in_each_row(&self) -> Vec<Option<usize>> {
        self.planes
            .iter()
            .map(|p| Hyperplane::first_nonzero_index(p.normal_vector().coords()))
            .collect()
    }

    /// Computes the triangular form of the system.
    ///
    /// Operates on an owned copy; `self` is untouched. For each row,
    /// columns are scanned left to right: a near-zero coefficient is
    /// repaired by swapping up the first usable row from below, or the
    /// scan advances to the next column without advancing the row. Once a
    /// pivot is in place, its column is eliminated from every row
    /// strictly below. Pivot columns strictly increase down the rows.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Geom`] if a row operation fails; the system
    /// invariant rules this out in practice.
    pub fn compute_triangular_form(&self) -> Result<Self, SolveError> {
        let mut system = self.clone();
        let num_rows = system.len();
        let num_cols = system.dimension;

        for row in 0..num_rows {
            let mut col = 0;
            while col < num_cols {
                let coefficient = system.planes[row].normal_vector()[col].clone();
                if coefficient.is_near_zero() && !system.swap_with_row_below(row, col) {
                    // the whole column below is zero too, move right
                    col += 1;
                    continue;
                }
                system.clear_terms_below(row, col)?;
                break;
            }
        }
        Ok(system)
    }

    /// Computes the reduced row-echelon form of the system.
    ///
    /// Starts from triangular form, then bottom to top scales each pivot
    /// to exactly 1 and eliminates its column from every row strictly
    /// above. Operates on an owned copy; `self` is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Geom`] if a row operation fails; the system
    /// invariant rules this out in practice.
    pub fn compute_rref(&self) -> Result<Self, SolveError> {
        let mut system = self.compute_triangular_form()?;
        let pivots = system.indices_of_first_nonzero_terms_in_each_row();

        for row in (0..system.len()).rev() {
            let Some(col) = pivots[row] else {
                continue;
            };
            let pivot = system.planes[row].normal_vector()[col].clone();
            system.multiply_row(&pivot.recip(), row);
            // triangular form guarantees the rows above keep their pivots
            system.clear_terms_above(row, col)?;
        }
        Ok(system)
    }

    /// Solves the system by Gaussian elimination.
    ///
    /// Returns a [`Parametrization`] of the affine solution set. An empty
    /// direction-vector list represents a unique solution at the base
    /// point; a non-empty list represents infinitely many solutions and
    /// is a successful outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] when reduction exposes a
    /// contradiction `0 = k` with `k` not near zero.
    pub fn compute_solution(&self) -> Result<Parametrization, SolveError> {
        let system = self.compute_rref()?;
        system.ensure_consistent()?;

        let base_point = system.base_point()?;
        let direction_vectors = system.direction_vectors()?;
        Ok(Parametrization::new(base_point, direction_vectors)?)
    }

    /// Scans bottom to top for a contradictory row `0 = k ≠ 0`.
    fn ensure_consistent(&self) -> Result<(), SolveError> {
        let pivots = self.indices_of_first_nonzero_terms_in_each_row();
        for row in (0..self.len()).rev() {
            if pivots[row].is_none() && !self.planes[row].constant_term().is_near_zero() {
                return Err(SolveError::NoSolution);
            }
        }
        Ok(())
    }

    /// Base point of an RREF system: zero everywhere except the pivot
    /// columns, which carry their row's constant term.
    fn base_point(&self) -> Result<Vector, GeomError> {
        let pivots = self.indices_of_first_nonzero_terms_in_each_row();
        let mut coords = Vector::zeros(self.dimension)?;
        for (row, pivot) in pivots.iter().enumerate() {
            if let Some(col) = *pivot {
                coords[col] = self.planes[row].constant_term().clone();
            }
        }
        Ok(coords)
    }

    /// Direction vectors of an RREF system, one per free column in
    /// ascending index order.
    ///
    /// For free column `f`, the vector answers "if free variable `f` is 1
    /// and every other free variable is 0, what must the pivot variables
    /// be": coordinate `f` is 1 and each pivot row contributes the
    /// negated coefficient at column `f` in its pivot position.
    fn direction_vectors(&self) -> Result<Vec<Vector>, GeomError> {
        let pivots = self.indices_of_first_nonzero_terms_in_each_row();
        let pivot_cols: Vec<usize> = pivots.iter().flatten().copied().collect();

        let mut vectors = Vec::new();
        for free_col in 0..self.dimension {
            if pivot_cols.contains(&free_col) {
                continue;
            }
            let mut coords = Vector::zeros(self.dimension)?;
            for (row, pivot) in pivots.iter().enumerate() {
                if let Some(pivot_col) = *pivot {
                    coords[pivot_col] = -self.planes[row].normal_vector()[free_col].clone();
                }
            }
            coords[free_col] = num_traits::One::one();
            vectors.push(coords);
        }
        Ok(vectors)
    }

    /// Swaps row `row` with the first row below it whose coefficient in
    /// `col` is not near zero. Returns false when no such row exists.
    fn swap_with_row_below(&mut self, row: usize, col: usize) -> bool {
        for below in row + 1..self.len() {
            if !self.planes[below].normal_vector()[col].is_near_zero() {
                self.swap_rows(row, below);
                return true;
            }
        }
        false
    }

    /// Eliminates column `col` from every row strictly below `row`.
    fn clear_terms_below(&mut self, row: usize, col: usize) -> Result<(), SolveError> {
        let pivot = self.planes[row].normal_vector()[col].clone();
        for target in row + 1..self.len() {
            let coefficient = self.planes[target].normal_vector()[col].clone();
            if coefficient.is_near_zero() {
                continue;
            }
            let alpha = -(coefficient / pivot.clone());
            self.add_multiple_of_row_to_row(&alpha, row, target)?;
        }
        Ok(())
    }

    /// Eliminates column `col` from every row strictly above `row`.
    ///
    /// Assumes the pivot at (`row`, `col`) has already been scaled to 1.
    fn clear_terms_above(&mut self, row: usize, col: usize) -> Result<(), SolveError> {
        for target in (0..row).rev() {
            let coefficient = self.planes[target].normal_vector()[col].clone();
            if coefficient.is_near_zero() {
                continue;
            }
            let alpha = -coefficient;
            self.add_multiple_of_row_to_row(&alpha, row, target)?;
        }
        Ok(())
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    fn index(&self, row: usize) -> &Self::Output {
        &self.planes[row]
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear system:")?;
        for (i, plane) in self.planes.iter().enumerate() {
            writeln!(f, "equation {}: {plane}", i + 1)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearSystem({} x {})", self.len(), self.dimension)
    }
}
