//! # Laurel
//!
//! Exact single-variable Laurent polynomial arithmetic.
//!
//! ## Features
//!
//! - **Pluggable coefficients**: integers, rationals and prime fields behind one `Ring` trait
//! - **Sparse storage**: only non-zero terms are kept, negative exponents included
//! - **Ordered merge**: k-way heap merge driving sums and weighted sums
//! - **Synthetic division**: quotient and remainder over any ring with exact division
//! - **Rendering**: plain, LaTeX, unicode and code output with scoped overrides
//! - **Runtime typing**: mixed-type operands resolved by a swappable policy
//!
//! ## Quick Start
//!
//! ```rust
//! use laurel::prelude::*;
//!
//! let p: LaurentPolynomial<Z> = "x^3 - 1".parse().unwrap();
//! let d: LaurentPolynomial<Z> = "x - 1".parse().unwrap();
//! let (q, r) = p.div_rem(&d).unwrap();
//!
//! let spec = PrintSpec::default().with_mode(RenderMode::Plain);
//! assert_eq!(q.render(&spec).unwrap(), "x^2+x+1");
//! assert!(r.is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use laurel_poly as poly;
pub use laurel_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use laurel_poly::{
        AnyPolynomial, LaurentPolynomial, PolyError, PrintContext, PrintSpec, RenderMode,
        TermOrder,
    };
    pub use laurel_rings::{
        CoefficientType, ExactDivision, ExactMatch, Field, Fp, NumericTower, Ring, Scalar,
        TypeResolver, Q, Z,
    };
}
