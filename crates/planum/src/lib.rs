//! # Planum
//!
//! An exact(-ish) Gaussian-elimination engine over arbitrary-dimension
//! vectors with high-precision decimal arithmetic.
//!
//! Planum solves systems of linear equations represented as collections
//! of hyperplanes in standard form `Σ aᵢxᵢ = k`. For an arbitrary system
//! it computes one of:
//!
//! - a unique solution point,
//! - a parametric description of infinitely many solutions (base point
//!   plus direction vectors spanning the solution set), or
//! - a definitive "no solutions" outcome.
//!
//! ## Quick start
//!
//! ```
//! use planum::prelude::*;
//!
//! let p1 = Hyperplane::new(Vector::from_f64s(&[1.0, 1.0, 1.0])?, Decimal::from_i64(1));
//! let p2 = Hyperplane::new(Vector::from_f64s(&[0.0, 1.0, 1.0])?, Decimal::from_i64(2));
//! let system = LinearSystem::new(vec![p1, p2])?;
//!
//! let solution = system.compute_solution()?;
//! assert!(!solution.is_unique());
//! assert_eq!(solution.direction_vectors().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use planum_geom as geom;
pub use planum_scalar as scalar;
pub use planum_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use planum_geom::{AngleUnit, GeomError, Hyperplane, Vector};
    pub use planum_scalar::{Decimal, NEAR_ZERO};
    pub use planum_solve::{LinearSystem, Parametrization, SolveError};
}
