//! Errors raised by polynomial construction, arithmetic and rendering.

use std::fmt;

use laurel_rings::CoefficientType;
use thiserror::Error;

/// The operation that failed, carried by resolution errors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operation {
    /// Building a polynomial from untyped terms.
    Construct,
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division with remainder.
    DivRem,
    /// Weighted n-ary sum.
    WeightedSum,
    /// Multiplication by a power of the variable.
    Shift,
    /// Formal differentiation.
    Derivative,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Construct => "construct",
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::DivRem => "divmod",
            Operation::WeightedSum => "weighted sum",
            Operation::Shift => "shift",
            Operation::Derivative => "derivative",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in polynomial operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolyError {
    /// Input could not be turned into a polynomial.
    #[error("cannot construct polynomial: {message}")]
    Construction {
        /// What was wrong with the input.
        message: String,
    },

    /// No resolution rule produces a single coefficient type.
    #[error("no coefficient type resolves {operation} over [{}]", join_types(.types))]
    TypeResolution {
        /// The operation being attempted.
        operation: Operation,
        /// The operand types that failed to resolve.
        types: Vec<CoefficientType>,
    },

    /// A scalar operand cannot be coerced into the polynomial's ring.
    #[error("unsupported operands for {operation}: {lhs} and {rhs}")]
    UnsupportedOperands {
        /// The operation being attempted.
        operation: Operation,
        /// Description of the left operand.
        lhs: String,
        /// Description of the right operand.
        rhs: String,
    },

    /// Division by the zero polynomial.
    #[error("polynomial division by zero")]
    DivisionByZero,

    /// A division step has no exact result in the coefficient ring.
    #[error("{coefficient} is not divisible by {divisor} in the coefficient ring")]
    InexactDivision {
        /// The working coefficient.
        coefficient: String,
        /// The divisor's leading coefficient.
        divisor: String,
    },

    /// A result exponent does not fit in an `i64`.
    #[error("exponent overflow in {operation}")]
    ExponentOverflow {
        /// The operation whose result left the exponent range.
        operation: Operation,
    },

    /// Rendering produced an invalid coefficient string.
    #[error("render failed: {message}")]
    Render {
        /// Description of the fault.
        message: String,
    },

    /// A print configuration name was not recognized.
    #[error("invalid print configuration: {message}")]
    Config {
        /// Description of the bad value.
        message: String,
    },
}

impl PolyError {
    pub(crate) fn construction(message: impl Into<String>) -> Self {
        PolyError::Construction {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        PolyError::Config {
            message: message.into(),
        }
    }
}

fn join_types(types: &[CoefficientType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
