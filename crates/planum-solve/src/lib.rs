//! # planum-solve
//!
//! Gaussian elimination over ordered systems of hyperplanes.
//!
//! A [`LinearSystem`] is an ordered collection of same-dimension
//! [`planum_geom::Hyperplane`]s. The solver reduces a system to
//! triangular form, then to reduced row-echelon form (RREF), classifies
//! pivot and free variables, and emits a [`Parametrization`] describing
//! the affine solution set, or reports that no solution exists.
//!
//! Reduction passes operate on an owned copy; the caller's system is
//! never touched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parametrization;
pub mod system;

#[cfg(test)]
mod proptests;

pub use parametrization::Parametrization;
pub use system::{LinearSystem, SolveError};
