//! # laurel-rings
//!
//! Coefficient rings for laurel polynomials.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `ExactDivision`, `Field`
//! - Concrete rings: Z, Q (arbitrary precision, backed by `dashu`) and Z_p
//! - Runtime coefficient tags (`CoefficientType`) and tagged values (`Scalar`)
//! - Type-resolution policies deciding the result ring of mixed operations
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── ExactDivision
//!       └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coefficient;
pub mod finite_field;
pub mod integers;
pub mod rationals;
pub mod resolution;
pub mod scalar;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use coefficient::CoefficientType;
pub use finite_field::Fp;
pub use integers::Z;
pub use rationals::Q;
pub use resolution::{ExactMatch, NumericTower, TypeResolver};
pub use scalar::Scalar;
pub use traits::{ExactDivision, Field, Ring};
