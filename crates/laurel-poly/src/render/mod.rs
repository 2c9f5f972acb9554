//! Textual rendering of polynomials.
//!
//! A [`PrintSpec`] says how to write a polynomial (term order, notation,
//! spacing, variable symbols) and [`render`] applies it. Callers that want
//! an ambient "current" spec keep one in a [`PrintContext`] and swap
//! overrides in and out with scoped guards.

mod context;
mod engine;
mod spec;

pub use context::{PrintContext, PrintScope};
pub use engine::render;
pub use spec::{ExponentComparator, PrintSpec, RenderMode, TermOrder, Variables};
