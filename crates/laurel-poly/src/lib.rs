//! # laurel-poly
//!
//! Exact single-variable Laurent polynomials.
//!
//! This crate provides:
//! - Sparse term storage that never holds a zero coefficient
//! - A heap-based k-way ordered merge shared by every elementwise operation
//! - Ring arithmetic: add, sub, weighted sums, multiplication, derivatives
//! - Synthetic division with remainder over any ring with exact division
//! - Configurable rendering (plain, LaTeX, unicode, code) with scoped overrides
//! - Plain-text parsing
//! - A runtime-typed layer with pluggable coefficient type resolution
//!
//! ## Example
//!
//! ```
//! use laurel_poly::LaurentPolynomial;
//! use laurel_rings::Z;
//!
//! let p: LaurentPolynomial<Z> = "x^2-1".parse().unwrap();
//! let d: LaurentPolynomial<Z> = "x-1".parse().unwrap();
//! let (q, r) = p.div_rem(&d).unwrap();
//! assert_eq!(q.to_string(), "x+1");
//! assert!(r.is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod division;
pub mod dynamic;
pub mod error;
pub mod laurent;
pub mod merge;
pub mod parse;
pub mod render;
pub mod terms;

#[cfg(test)]
mod proptests;

pub use dynamic::{dispatch, polyify, AnyPolynomial, BinaryOp, Operand, PolynomialSource};
pub use error::{Operation, PolyError, Result};
pub use laurent::LaurentPolynomial;
pub use merge::{filled_merge, merge_by_key, MergeRecord, OrderedMerge};
pub use render::{render, PrintContext, PrintScope, PrintSpec, RenderMode, TermOrder};
pub use terms::TermMap;
