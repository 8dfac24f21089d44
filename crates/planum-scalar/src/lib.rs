//! # planum-scalar
//!
//! High-precision decimal arithmetic for the planum linear solver.
//!
//! This crate wraps `dashu` to provide a fixed 30-significant-digit
//! decimal scalar (`Decimal`) together with the single near-zero
//! tolerance that governs every pivot test, zero test and equality
//! comparison in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decimal;

#[cfg(test)]
mod proptests;

pub use decimal::{Decimal, ParseDecimalError, NEAR_ZERO};
