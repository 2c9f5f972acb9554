//! Scoped print-spec overrides.

use std::mem;
use std::ops::{Deref, DerefMut};

use laurel_rings::Ring;

use super::engine::render;
use super::spec::PrintSpec;
use crate::error::Result;
use crate::laurent::LaurentPolynomial;

/// Holds the active [`PrintSpec`].
///
/// Overrides are applied with [`scoped`](Self::scoped), which returns a
/// guard that puts the previous spec back when dropped. Guards borrow
/// the context mutably, so they always unwind in stack order.
#[derive(Clone, Debug, Default)]
pub struct PrintContext {
    active: PrintSpec,
}

impl PrintContext {
    /// Creates a context with `spec` active.
    #[must_use]
    pub fn new(spec: PrintSpec) -> Self {
        Self { active: spec }
    }

    /// Returns the active spec.
    #[must_use]
    pub fn active(&self) -> &PrintSpec {
        &self.active
    }

    /// Replaces the active spec, returning the previous one.
    pub fn set_active(&mut self, spec: PrintSpec) -> PrintSpec {
        mem::replace(&mut self.active, spec)
    }

    /// Renders `poly` under the active spec.
    ///
    /// # Errors
    ///
    /// See [`render`](crate::render::render).
    pub fn render<R: Ring>(&self, poly: &LaurentPolynomial<R>) -> Result<String> {
        render(poly, &self.active)
    }

    /// Activates `spec` until the returned guard is dropped.
    pub fn scoped(&mut self, spec: PrintSpec) -> PrintScope<'_> {
        let saved = self.set_active(spec);
        PrintScope {
            context: self,
            saved: Some(saved),
        }
    }

    /// Activates a modified copy of the current spec until the returned
    /// guard is dropped.
    pub fn scoped_with<F>(&mut self, modify: F) -> PrintScope<'_>
    where
        F: FnOnce(PrintSpec) -> PrintSpec,
    {
        let spec = modify(self.active.clone());
        self.scoped(spec)
    }
}

/// Guard returned by [`PrintContext::scoped`].
///
/// Dereferences to the context, so further overrides can be nested.
pub struct PrintScope<'a> {
    context: &'a mut PrintContext,
    saved: Option<PrintSpec>,
}

impl Deref for PrintScope<'_> {
    type Target = PrintContext;

    fn deref(&self) -> &PrintContext {
        self.context
    }
}

impl DerefMut for PrintScope<'_> {
    fn deref_mut(&mut self) -> &mut PrintContext {
        self.context
    }
}

impl Drop for PrintScope<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.context.active = saved;
        }
    }
}
