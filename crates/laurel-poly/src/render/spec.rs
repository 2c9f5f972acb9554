//! Print configuration.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::PolyError;

/// How a single term is spelled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum RenderMode {
    /// ASCII with caret exponents: `3x^2`, `x^-1`.
    Plain,
    /// LaTeX exponents: `3x^{2}`.
    Latex,
    /// LaTeX with negative powers as fractions: `\frac{3}{x^{2}}`.
    LatexFrac,
    /// Unicode superscripts: `3x²`, `x⁻¹`.
    #[default]
    Unicode,
    /// Expression syntax: `3*x**2`.
    Code,
}

impl RenderMode {
    /// Returns the canonical name of the mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RenderMode::Plain => "plain",
            RenderMode::Latex => "latex",
            RenderMode::LatexFrac => "latexfrac",
            RenderMode::Unicode => "visual",
            RenderMode::Code => "repr",
        }
    }
}

impl FromStr for RenderMode {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(RenderMode::Plain),
            "latex" => Ok(RenderMode::Latex),
            "latexfrac" => Ok(RenderMode::LatexFrac),
            "visual" | "unicode" => Ok(RenderMode::Unicode),
            "repr" | "code" => Ok(RenderMode::Code),
            other => Err(PolyError::config(format!("unknown render mode {other:?}"))),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparator over exponents for a custom term order.
pub type ExponentComparator = Arc<dyn Fn(i64, i64) -> Ordering + Send + Sync>;

/// The order terms are written in.
#[derive(Clone, Default)]
pub enum TermOrder {
    /// Lowest power first.
    Ascending,
    /// Highest power first.
    #[default]
    Descending,
    /// Sorted by a caller-supplied comparator.
    Custom(ExponentComparator),
}

impl TermOrder {
    /// Wraps a comparator as a custom order.
    pub fn custom<F>(cmp: F) -> Self
    where
        F: Fn(i64, i64) -> Ordering + Send + Sync + 'static,
    {
        TermOrder::Custom(Arc::new(cmp))
    }

    /// Sorts `exponents` into this order.
    pub fn sort(&self, exponents: &mut [i64]) {
        match self {
            TermOrder::Ascending => exponents.sort_unstable(),
            TermOrder::Descending => exponents.sort_unstable_by(|a, b| b.cmp(a)),
            TermOrder::Custom(cmp) => exponents.sort_by(|&a, &b| cmp(a, b)),
        }
    }
}

impl fmt::Debug for TermOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermOrder::Ascending => f.write_str("Ascending"),
            TermOrder::Descending => f.write_str("Descending"),
            TermOrder::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl FromStr for TermOrder {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(TermOrder::Ascending),
            "desc" | "descending" => Ok(TermOrder::Descending),
            other => Err(PolyError::config(format!("unknown term order {other:?}"))),
        }
    }
}

/// Variable symbols, chosen by whether a polynomial has negative powers.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Variables {
    /// Symbol for polynomials with a negative exponent.
    pub laurent: String,
    /// Symbol for standard polynomials.
    pub regular: String,
}

impl Default for Variables {
    fn default() -> Self {
        Self {
            laurent: "z".to_string(),
            regular: "x".to_string(),
        }
    }
}

/// Complete rendering configuration.
///
/// The default writes descending unicode terms with no spacing, using
/// `x` for standard polynomials and `z` for Laurent ones.
#[derive(Clone, Debug, Default)]
pub struct PrintSpec {
    /// Term order.
    pub order: TermOrder,
    /// Term spelling.
    pub mode: RenderMode,
    /// Put spaces around the signs between terms.
    pub spaced: bool,
    /// Variable symbols.
    pub variables: Variables,
}

impl PrintSpec {
    /// Creates the default spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the term order.
    #[must_use]
    pub fn with_order(mut self, order: TermOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the render mode.
    #[must_use]
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Turns spacing on or off.
    #[must_use]
    pub fn with_spaced(mut self, spaced: bool) -> Self {
        self.spaced = spaced;
        self
    }

    /// Uses `symbol` for both Laurent and standard polynomials.
    #[must_use]
    pub fn with_variable(mut self, symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        self.variables.laurent.clone_from(&symbol);
        self.variables.regular = symbol;
        self
    }

    /// Sets the symbol used for Laurent polynomials.
    #[must_use]
    pub fn with_laurent_variable(mut self, symbol: impl Into<String>) -> Self {
        self.variables.laurent = symbol.into();
        self
    }

    /// Sets the symbol used for standard polynomials.
    #[must_use]
    pub fn with_regular_variable(mut self, symbol: impl Into<String>) -> Self {
        self.variables.regular = symbol.into();
        self
    }

    /// Sets mode and spacing from a combined name.
    ///
    /// Accepts every [`RenderMode`] name, optionally prefixed by
    /// `spaced` (`"spacedrepr"`, `"spacedplain"`). A bare `"spaced"`
    /// means spaced unicode.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::Config` for an unknown name.
    pub fn with_mode_name(self, name: &str) -> Result<Self, PolyError> {
        let (spaced, rest) = match name.strip_prefix("spaced") {
            Some("") => (true, "visual"),
            Some(rest) => (true, rest),
            None => (false, name),
        };
        let mode = rest.parse()?;
        Ok(self.with_mode(mode).with_spaced(spaced))
    }

    /// Returns the symbol for a polynomial that is (or is not) Laurent.
    #[must_use]
    pub fn variable_for(&self, laurent: bool) -> &str {
        if laurent {
            &self.variables.laurent
        } else {
            &self.variables.regular
        }
    }
}
