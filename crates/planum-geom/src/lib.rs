//! # planum-geom
//!
//! N-dimensional vectors and hyperplanes over high-precision decimals.
//!
//! This crate provides the two geometric primitives of the planum solver:
//!
//! - [`Vector`]: immutable-valued N-dimensional vector with exact-ish
//!   decimal arithmetic, parallelism/orthogonality predicates, projections
//!   and the 2D/3D cross product
//! - [`Hyperplane`]: a linear equation in standard form `Σ aᵢxᵢ = k`,
//!   with a derived basepoint and geometric equality semantics
//!
//! All zero tests and tolerant comparisons route through the shared
//! [`planum_scalar::NEAR_ZERO`] threshold.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod hyperplane;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use error::GeomError;
pub use hyperplane::Hyperplane;
pub use vector::{AngleUnit, Vector};
