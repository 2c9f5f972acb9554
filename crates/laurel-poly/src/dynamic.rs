//! Polynomials over a coefficient ring chosen at runtime.
//!
//! [`LaurentPolynomial`] fixes its ring statically. This module wraps the
//! supported rings in [`AnyPolynomial`] so values of different types can
//! meet in one operation. A [`TypeResolver`] decides what happens then:
//! [`ExactMatch`](laurel_rings::ExactMatch) only lets identical types
//! through, while [`NumericTower`](laurel_rings::NumericTower) widens
//! integers to rationals.
//!
//! Scalars never widen a polynomial. A scalar operand is converted into
//! the polynomial's own ring, or the operation is refused.

use std::fmt;

use laurel_rings::{CoefficientType, Q, Ring, Scalar, TypeResolver, Z};
use tracing::debug;

use crate::error::{Operation, PolyError, Result};
use crate::laurent::LaurentPolynomial;
use crate::render::PrintSpec;

/// A Laurent polynomial whose coefficient ring is known only at runtime.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AnyPolynomial {
    /// Coefficients in Z.
    Integer(LaurentPolynomial<Z>),
    /// Coefficients in Q.
    Rational(LaurentPolynomial<Q>),
}

/// Applies the same generic expression to whichever variant is present.
macro_rules! on_variant {
    ($value:expr, $p:ident => $body:expr) => {
        match $value {
            AnyPolynomial::Integer($p) => $body,
            AnyPolynomial::Rational($p) => $body,
        }
    };
}

impl AnyPolynomial {
    /// Returns the coefficient ring tag.
    #[must_use]
    pub fn coefficient_type(&self) -> CoefficientType {
        match self {
            AnyPolynomial::Integer(_) => CoefficientType::Integer,
            AnyPolynomial::Rational(_) => CoefficientType::Rational,
        }
    }

    /// Creates a constant polynomial in the scalar's ring.
    #[must_use]
    pub fn constant(value: Scalar) -> Self {
        match value {
            Scalar::Integer(z) => AnyPolynomial::Integer(LaurentPolynomial::constant(z)),
            Scalar::Rational(q) => AnyPolynomial::Rational(LaurentPolynomial::constant(q)),
        }
    }

    /// The zero polynomial of the given ring.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::TypeResolution` for rings without a dynamic
    /// representation.
    pub fn zero(ty: CoefficientType) -> Result<Self> {
        match ty {
            CoefficientType::Integer => Ok(AnyPolynomial::Integer(LaurentPolynomial::zero())),
            CoefficientType::Rational => Ok(AnyPolynomial::Rational(LaurentPolynomial::zero())),
            CoefficientType::Modular(_) => Err(PolyError::TypeResolution {
                operation: Operation::Construct,
                types: vec![ty],
            }),
        }
    }

    /// Builds a polynomial from terms whose coefficients carry their own
    /// types.
    ///
    /// Without a `tag` the result ring is whatever `resolver` picks for
    /// the coefficients; with one, every coefficient must coerce into it.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::Construction` for an empty term list without a
    /// tag, and `PolyError::TypeResolution` when the coefficient types do
    /// not resolve.
    pub fn from_scalar_terms(
        terms: Vec<(i64, Scalar)>,
        tag: Option<CoefficientType>,
        resolver: &dyn TypeResolver,
    ) -> Result<Self> {
        let mut types: Vec<CoefficientType> = Vec::new();
        for (_, value) in &terms {
            let ty = value.coefficient_type();
            if !types.contains(&ty) {
                types.push(ty);
            }
        }

        let target = match tag {
            Some(tag) => {
                if types.iter().all(|&ty| resolver.can_coerce(ty, tag)) {
                    tag
                } else {
                    types.insert(0, tag);
                    return Err(resolution_error(Operation::Construct, types));
                }
            }
            None if terms.is_empty() => {
                return Err(PolyError::construction(
                    "an empty term list needs an explicit coefficient type",
                ));
            }
            None => resolver
                .resolve(&types)
                .ok_or_else(|| resolution_error(Operation::Construct, types.clone()))?,
        };

        let mut converted = Vec::with_capacity(terms.len());
        for (exp, value) in terms {
            let value = value
                .convert(target)
                .ok_or_else(|| resolution_error(Operation::Construct, vec![value.coefficient_type(), target]))?;
            converted.push((exp, value));
        }

        match target {
            CoefficientType::Integer => Ok(AnyPolynomial::Integer(LaurentPolynomial::new(
                converted.into_iter().filter_map(|(e, v)| v.as_integer().cloned().map(|z| (e, z))),
            ))),
            CoefficientType::Rational => Ok(AnyPolynomial::Rational(LaurentPolynomial::new(
                converted.into_iter().filter_map(|(e, v)| v.as_rational().cloned().map(|q| (e, q))),
            ))),
            CoefficientType::Modular(_) => Err(resolution_error(Operation::Construct, vec![target])),
        }
    }

    /// Parses `text` into the ring `ty`.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::Construction` for malformed text and
    /// `PolyError::TypeResolution` for rings without a dynamic
    /// representation.
    pub fn parse(text: &str, ty: CoefficientType) -> Result<Self> {
        match ty {
            CoefficientType::Integer => text.parse().map(AnyPolynomial::Integer),
            CoefficientType::Rational => text.parse().map(AnyPolynomial::Rational),
            CoefficientType::Modular(_) => Err(resolution_error(Operation::Construct, vec![ty])),
        }
    }

    /// Converts into `target` if no coefficient changes value.
    ///
    /// Integers always widen to rationals. Rationals narrow to integers
    /// only when every coefficient is integral.
    #[must_use]
    pub fn convert(&self, target: CoefficientType) -> Option<Self> {
        match (self, target) {
            (AnyPolynomial::Integer(_), CoefficientType::Integer)
            | (AnyPolynomial::Rational(_), CoefficientType::Rational) => Some(self.clone()),
            (AnyPolynomial::Integer(p), CoefficientType::Rational) => Some(AnyPolynomial::Rational(
                LaurentPolynomial::new(p.terms().map(|(e, c)| (e, Q::from(c.clone())))),
            )),
            (AnyPolynomial::Rational(p), CoefficientType::Integer) => {
                let terms: Option<Vec<(i64, Z)>> =
                    p.terms().map(|(e, c)| c.to_integer().map(|z| (e, z))).collect();
                terms.map(|t| AnyPolynomial::Integer(LaurentPolynomial::new(t)))
            }
            (_, CoefficientType::Modular(_)) => None,
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        on_variant!(self, p => p.is_zero())
    }

    /// Returns the highest exponent, or `None` for zero.
    #[must_use]
    pub fn degree(&self) -> Option<i64> {
        on_variant!(self, p => p.degree())
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        match self {
            AnyPolynomial::Integer(p) => AnyPolynomial::Integer(p.neg()),
            AnyPolynomial::Rational(p) => AnyPolynomial::Rational(p.neg()),
        }
    }

    /// Formal derivative.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::ExponentOverflow` on a term in x^`i64::MIN`.
    pub fn derivative(&self) -> Result<Self> {
        match self {
            AnyPolynomial::Integer(p) => p.checked_derivative().map(AnyPolynomial::Integer),
            AnyPolynomial::Rational(p) => p.checked_derivative().map(AnyPolynomial::Rational),
        }
    }

    /// Divides with remainder after resolving both operands to one ring.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::TypeResolution` if the types do not resolve,
    /// otherwise the errors of [`LaurentPolynomial::div_rem`].
    pub fn div_rem(&self, divisor: &Self, resolver: &dyn TypeResolver) -> Result<(Self, Self)> {
        match unify(Operation::DivRem, self, divisor, resolver)? {
            (AnyPolynomial::Integer(a), AnyPolynomial::Integer(b)) => {
                let (q, r) = a.div_rem(&b)?;
                Ok((AnyPolynomial::Integer(q), AnyPolynomial::Integer(r)))
            }
            (AnyPolynomial::Rational(a), AnyPolynomial::Rational(b)) => {
                let (q, r) = a.div_rem(&b)?;
                Ok((AnyPolynomial::Rational(q), AnyPolynomial::Rational(r)))
            }
            (a, b) => Err(resolution_error(
                Operation::DivRem,
                vec![a.coefficient_type(), b.coefficient_type()],
            )),
        }
    }

    /// Computes Σ wᵢ·Pᵢ over the ring the resolver picks for all operands.
    ///
    /// Missing weights count as one.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::Construction` when `polys` is empty, and
    /// `PolyError::TypeResolution` when the operand and weight types do not
    /// resolve.
    pub fn weighted_sum(
        polys: &[&AnyPolynomial],
        weights: Option<&[Scalar]>,
        resolver: &dyn TypeResolver,
    ) -> Result<Self> {
        let weights = weights.unwrap_or(&[]);
        let types: Vec<CoefficientType> = polys
            .iter()
            .map(|p| p.coefficient_type())
            .chain(weights.iter().map(Scalar::coefficient_type))
            .collect();
        if polys.is_empty() {
            return Err(PolyError::construction("a weighted sum needs at least one polynomial"));
        }
        let target = resolver
            .resolve(&types)
            .ok_or_else(|| resolution_error(Operation::WeightedSum, types.clone()))?;

        let promoted: Vec<AnyPolynomial> = polys
            .iter()
            .map(|p| p.convert(target))
            .collect::<Option<_>>()
            .ok_or_else(|| resolution_error(Operation::WeightedSum, types.clone()))?;
        let weights: Vec<Scalar> = weights
            .iter()
            .map(|w| w.convert(target))
            .collect::<Option<_>>()
            .ok_or_else(|| resolution_error(Operation::WeightedSum, types.clone()))?;

        match target {
            CoefficientType::Integer => {
                let polys: Vec<&LaurentPolynomial<Z>> = promoted.iter().filter_map(AnyPolynomial::as_integer).collect();
                let weights: Vec<Z> = weights.iter().filter_map(|w| w.as_integer().cloned()).collect();
                Ok(AnyPolynomial::Integer(LaurentPolynomial::weighted_sum(&polys, Some(weights.as_slice()))))
            }
            CoefficientType::Rational => {
                let polys: Vec<&LaurentPolynomial<Q>> = promoted.iter().filter_map(AnyPolynomial::as_rational).collect();
                let weights: Vec<Q> = weights.iter().filter_map(|w| w.as_rational().cloned()).collect();
                Ok(AnyPolynomial::Rational(LaurentPolynomial::weighted_sum(&polys, Some(weights.as_slice()))))
            }
            CoefficientType::Modular(_) => Err(resolution_error(Operation::WeightedSum, types)),
        }
    }

    /// Returns the integer polynomial, if this is one.
    #[must_use]
    pub fn as_integer(&self) -> Option<&LaurentPolynomial<Z>> {
        match self {
            AnyPolynomial::Integer(p) => Some(p),
            AnyPolynomial::Rational(_) => None,
        }
    }

    /// Returns the rational polynomial, if this is one.
    #[must_use]
    pub fn as_rational(&self) -> Option<&LaurentPolynomial<Q>> {
        match self {
            AnyPolynomial::Rational(p) => Some(p),
            AnyPolynomial::Integer(_) => None,
        }
    }

    /// Renders the polynomial under `spec`.
    ///
    /// # Errors
    ///
    /// See [`render`](crate::render::render).
    pub fn render(&self, spec: &PrintSpec) -> Result<String> {
        on_variant!(self, p => p.render(spec))
    }
}

impl From<LaurentPolynomial<Z>> for AnyPolynomial {
    fn from(p: LaurentPolynomial<Z>) -> Self {
        AnyPolynomial::Integer(p)
    }
}

impl From<LaurentPolynomial<Q>> for AnyPolynomial {
    fn from(p: LaurentPolynomial<Q>) -> Self {
        AnyPolynomial::Rational(p)
    }
}

impl fmt::Display for AnyPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        on_variant!(self, p => fmt::Display::fmt(p, f))
    }
}

/// The accepted inputs for [`polyify`].
#[derive(Clone, Debug)]
pub enum PolynomialSource {
    /// Polynomial text, e.g. `"x^2-1"`.
    Text(String),
    /// Dense coefficients from x⁰ upwards.
    Ascending(Vec<Scalar>),
    /// Dense coefficients from the highest power down to x⁰.
    Descending(Vec<Scalar>),
    /// Sparse (exponent, coefficient) pairs.
    Terms(Vec<(i64, Scalar)>),
}

/// Builds a polynomial from any supported input.
///
/// Text is parsed in the ring named by `tag`; without a tag it is read as
/// integer text, falling back to rational text. The other sources go
/// through [`AnyPolynomial::from_scalar_terms`].
///
/// # Errors
///
/// Returns the construction and resolution errors of the chosen path.
#[tracing::instrument(level = "debug", skip_all)]
pub fn polyify(
    source: PolynomialSource,
    tag: Option<CoefficientType>,
    resolver: &dyn TypeResolver,
) -> Result<AnyPolynomial> {
    match source {
        PolynomialSource::Text(text) => match tag {
            Some(ty) => AnyPolynomial::parse(&text, ty),
            None => AnyPolynomial::parse(&text, CoefficientType::Integer)
                .or_else(|_| AnyPolynomial::parse(&text, CoefficientType::Rational)),
        },
        PolynomialSource::Ascending(coeffs) => {
            let terms = (0..).zip(coeffs).collect();
            AnyPolynomial::from_scalar_terms(terms, tag, resolver)
        }
        PolynomialSource::Descending(coeffs) => {
            let terms = (0..).zip(coeffs.into_iter().rev()).collect();
            AnyPolynomial::from_scalar_terms(terms, tag, resolver)
        }
        PolynomialSource::Terms(terms) => AnyPolynomial::from_scalar_terms(terms, tag, resolver),
    }
}

/// An operand of a dynamically typed binary operation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Operand {
    /// A polynomial.
    Polynomial(AnyPolynomial),
    /// A bare coefficient.
    Scalar(Scalar),
}

impl Operand {
    fn describe(&self) -> String {
        match self {
            Operand::Polynomial(p) => format!("polynomial over {}", p.coefficient_type()),
            Operand::Scalar(s) => format!("{} scalar {s}", s.coefficient_type()),
        }
    }
}

impl From<AnyPolynomial> for Operand {
    fn from(p: AnyPolynomial) -> Self {
        Operand::Polynomial(p)
    }
}

impl From<Scalar> for Operand {
    fn from(s: Scalar) -> Self {
        Operand::Scalar(s)
    }
}

/// Binary operations available through [`dispatch`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
}

impl BinaryOp {
    fn apply<R: Ring>(self, a: &LaurentPolynomial<R>, b: &LaurentPolynomial<R>) -> Result<LaurentPolynomial<R>> {
        match self {
            BinaryOp::Add => Ok(a.add(b)),
            BinaryOp::Sub => Ok(a.sub(b)),
            BinaryOp::Mul => a.checked_mul(b),
        }
    }
}

impl From<BinaryOp> for Operation {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Operation::Add,
            BinaryOp::Sub => Operation::Sub,
            BinaryOp::Mul => Operation::Mul,
        }
    }
}

/// Applies `op` to two runtime-typed operands.
///
/// Two polynomials are promoted to the ring `resolver` picks. A scalar
/// next to a polynomial, on either side, becomes a constant polynomial of
/// the polynomial's ring if `resolver` allows the coercion.
///
/// # Errors
///
/// Returns `PolyError::TypeResolution` when two polynomial types do not
/// resolve, `PolyError::UnsupportedOperands` when a scalar cannot be
/// coerced or both operands are scalars, and `PolyError::ExponentOverflow`
/// when a product exponent leaves the `i64` range.
#[tracing::instrument(level = "debug", skip_all, fields(op = ?op))]
pub fn dispatch(op: BinaryOp, lhs: &Operand, rhs: &Operand, resolver: &dyn TypeResolver) -> Result<AnyPolynomial> {
    let operation = Operation::from(op);
    let (a, b) = match (lhs, rhs) {
        (Operand::Polynomial(a), Operand::Polynomial(b)) => unify(operation, a, b, resolver)?,
        (Operand::Polynomial(p), Operand::Scalar(s)) => {
            let c = lift_scalar(s, p.coefficient_type(), resolver)
                .ok_or_else(|| unsupported(operation, lhs, rhs))?;
            (p.clone(), c)
        }
        (Operand::Scalar(s), Operand::Polynomial(p)) => {
            let c = lift_scalar(s, p.coefficient_type(), resolver)
                .ok_or_else(|| unsupported(operation, lhs, rhs))?;
            (c, p.clone())
        }
        (Operand::Scalar(_), Operand::Scalar(_)) => return Err(unsupported(operation, lhs, rhs)),
    };

    match (&a, &b) {
        (AnyPolynomial::Integer(x), AnyPolynomial::Integer(y)) => op.apply(x, y).map(AnyPolynomial::Integer),
        (AnyPolynomial::Rational(x), AnyPolynomial::Rational(y)) => op.apply(x, y).map(AnyPolynomial::Rational),
        _ => Err(resolution_error(operation, vec![a.coefficient_type(), b.coefficient_type()])),
    }
}

/// Converts a scalar into a constant polynomial of `target`, if allowed.
fn lift_scalar(s: &Scalar, target: CoefficientType, resolver: &dyn TypeResolver) -> Option<AnyPolynomial> {
    if !resolver.can_coerce(s.coefficient_type(), target) {
        return None;
    }
    s.convert(target).map(AnyPolynomial::constant)
}

/// Promotes two polynomials to the ring the resolver picks.
fn unify(
    operation: Operation,
    a: &AnyPolynomial,
    b: &AnyPolynomial,
    resolver: &dyn TypeResolver,
) -> Result<(AnyPolynomial, AnyPolynomial)> {
    let types = vec![a.coefficient_type(), b.coefficient_type()];
    let promoted = resolver
        .resolve(&types)
        .and_then(|target| Some((a.convert(target)?, b.convert(target)?)));
    promoted.ok_or_else(|| resolution_error(operation, types))
}

fn resolution_error(operation: Operation, types: Vec<CoefficientType>) -> PolyError {
    debug!(%operation, ?types, "coefficient types did not resolve");
    PolyError::TypeResolution { operation, types }
}

fn unsupported(operation: Operation, lhs: &Operand, rhs: &Operand) -> PolyError {
    let (lhs, rhs) = (lhs.describe(), rhs.describe());
    debug!(%operation, %lhs, %rhs, "unsupported operand combination");
    PolyError::UnsupportedOperands { operation, lhs, rhs }
}
