//! Plain-text polynomial input.
//!
//! Accepts sums of terms such as `3x^2-x+1`, `1/2x^-1 + 4`, `2*x**3` or
//! `x^{-2}`. Whitespace is ignored. A term is an optional sign, an
//! optional coefficient (digits, or `digits/digits` for rings that parse
//! fractions), an optional `*`, and an optional variable with an optional
//! exponent introduced by `^` or `**`. Repeated powers are summed.

use std::str::FromStr;

use laurel_rings::Ring;
use tracing::debug;

use crate::error::{PolyError, Result};
use crate::laurent::LaurentPolynomial;

impl<R: Ring + FromStr> LaurentPolynomial<R> {
    /// Parses `text` using `variable` as the only allowed symbol.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::Construction` for empty or malformed text, a
    /// different variable name, or a coefficient `R` cannot parse.
    pub fn parse_with_variable(text: &str, variable: &str) -> Result<Self> {
        parse(text, Some(variable))
    }
}

impl<R: Ring + FromStr> FromStr for LaurentPolynomial<R> {
    type Err = PolyError;

    /// Parses a polynomial in any single variable.
    ///
    /// The first symbol seen fixes the variable; every other term must use
    /// the same one.
    fn from_str(s: &str) -> Result<Self> {
        parse(s, None)
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
fn parse<R: Ring + FromStr>(text: &str, variable: Option<&str>) -> Result<LaurentPolynomial<R>> {
    let mut scanner = Scanner {
        chars: text.chars().filter(|c| !c.is_whitespace()).collect(),
        pos: 0,
        variable: variable.map(str::to_string),
    };
    if scanner.chars.is_empty() {
        return Err(PolyError::construction("empty polynomial text"));
    }

    let mut terms = Vec::new();
    while !scanner.at_end() {
        let term = scanner.term(terms.is_empty()).map_err(|err| {
            debug!(position = scanner.pos, %err, "rejected polynomial text");
            err
        })?;
        terms.push(term);
    }
    Ok(LaurentPolynomial::new(terms))
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    variable: Option<String>,
}

impl Scanner {
    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, what: &str) -> PolyError {
        PolyError::construction(format!("{what} at position {}", self.pos))
    }

    fn digits(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn identifier(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Reads one signed term. Terms after the first must start with a sign.
    fn term<R: Ring + FromStr>(&mut self, first: bool) -> Result<(i64, R)> {
        let negative = if self.eat('-') {
            true
        } else if self.eat('+') || first {
            false
        } else {
            return Err(self.error("expected '+' or '-'"));
        };

        let mut coeff_text = self.digits();
        if !coeff_text.is_empty() && self.peek() == Some('/') {
            self.pos += 1;
            let den = self.digits();
            if den.is_empty() {
                return Err(self.error("expected denominator"));
            }
            coeff_text.push('/');
            coeff_text.push_str(&den);
        }
        let explicit_times = !coeff_text.is_empty() && self.eat('*');

        let has_variable = self.peek().is_some_and(|c| c.is_alphabetic() || c == '_');
        if !has_variable && (coeff_text.is_empty() || explicit_times) {
            return Err(self.error("expected a coefficient or variable"));
        }

        let exp = if has_variable {
            self.variable_name()?;
            self.exponent()?
        } else {
            0
        };

        let coeff = if coeff_text.is_empty() {
            R::one()
        } else {
            coeff_text
                .parse::<R>()
                .map_err(|_| PolyError::construction(format!("invalid coefficient {coeff_text:?}")))?
        };
        Ok((exp, if negative { -coeff } else { coeff }))
    }

    fn variable_name(&mut self) -> Result<()> {
        let name = self.identifier();
        match &self.variable {
            Some(expected) if *expected != name => Err(PolyError::construction(format!(
                "expected variable {expected:?}, found {name:?}"
            ))),
            Some(_) => Ok(()),
            None => {
                self.variable = Some(name);
                Ok(())
            }
        }
    }

    fn exponent(&mut self) -> Result<i64> {
        let caret = self.eat('^');
        if !caret {
            if self.peek() == Some('*') && self.chars.get(self.pos + 1) == Some(&'*') {
                self.pos += 2;
            } else {
                return Ok(1);
            }
        }

        let braced = self.eat('{');
        let negative = if self.eat('-') {
            true
        } else {
            self.eat('+');
            false
        };
        let digits = self.digits();
        if digits.is_empty() {
            return Err(self.error("expected exponent"));
        }
        if braced && !self.eat('}') {
            return Err(self.error("expected '}'"));
        }

        let out_of_range = || PolyError::construction(format!("exponent {digits} out of range"));
        let magnitude: i128 = digits.parse().map_err(|_| out_of_range())?;
        i64::try_from(if negative { -magnitude } else { magnitude }).map_err(|_| out_of_range())
    }
}
