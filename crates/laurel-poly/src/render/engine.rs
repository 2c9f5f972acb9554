//! Term-by-term rendering.

use laurel_rings::Ring;

use super::spec::{PrintSpec, RenderMode};
use crate::error::{PolyError, Result};
use crate::laurent::LaurentPolynomial;

/// Renders `poly` as text under `spec`.
///
/// The zero polynomial renders as the ring's zero. Otherwise terms are
/// written in the spec's order; the first term carries no `+`, and a unit
/// coefficient is left out of every term except the constant one.
///
/// # Errors
///
/// Returns `PolyError::Render` if a coefficient prints as an empty string
/// or a bare sign.
pub fn render<R: Ring>(poly: &LaurentPolynomial<R>, spec: &PrintSpec) -> Result<String> {
    if poly.is_zero() {
        return Ok(R::zero().to_string());
    }

    let var = spec.variable_for(poly.is_laurent());
    let one = R::one().to_string();

    let mut exponents: Vec<i64> = poly.terms().map(|(exp, _)| exp).collect();
    spec.order.sort(&mut exponents);

    let mut out = String::new();
    for (index, &exp) in exponents.iter().enumerate() {
        let first = index == 0;
        let (sign, magnitude) = split_sign(&poly.coeff(exp), first, exp == 0, &one)?;

        if !first && spec.spaced {
            out.push(' ');
        }
        out.push_str(sign);
        if !first && spec.spaced {
            out.push(' ');
        }
        out.push_str(&term_body(spec.mode, exp, magnitude.as_deref(), var, &one));
    }
    Ok(out)
}

/// Splits a coefficient into its sign slot and printed magnitude.
///
/// The magnitude is `None` when a unit coefficient is elided.
fn split_sign<R: Ring>(
    coeff: &R,
    first: bool,
    constant: bool,
    one: &str,
) -> Result<(&'static str, Option<String>)> {
    let text = coeff.to_string();
    let (sign, magnitude) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None if first => ("", text),
        None => ("+", text),
    };

    if magnitude.is_empty() {
        return Err(PolyError::Render {
            message: format!("coefficient {coeff:?} has no printable magnitude"),
        });
    }

    if !constant && magnitude == one {
        Ok((sign, None))
    } else {
        Ok((sign, Some(magnitude)))
    }
}

fn term_body(mode: RenderMode, exp: i64, magnitude: Option<&str>, var: &str, one: &str) -> String {
    let m = magnitude.unwrap_or("");
    let times = if magnitude.is_some() { "*" } else { "" };

    match (mode, exp) {
        (_, 0) => m.to_string(),
        (RenderMode::Code, 1) => format!("{m}{times}{var}"),
        (_, 1) => format!("{m}{var}"),
        (RenderMode::LatexFrac, e) if e < 0 => {
            let numerator = magnitude.unwrap_or(one);
            if e == -1 {
                format!("\\frac{{{numerator}}}{{{var}}}")
            } else {
                format!("\\frac{{{numerator}}}{{{var}^{{{}}}}}", e.unsigned_abs())
            }
        }
        (RenderMode::Latex | RenderMode::LatexFrac, e) => format!("{m}{var}^{{{e}}}"),
        (RenderMode::Unicode, e) => format!("{m}{var}{}", superscript(e)),
        (RenderMode::Plain, e) => format!("{m}{var}^{e}"),
        (RenderMode::Code, e) => format!("{m}{times}{var}**{e}"),
    }
}

/// Spells an integer in unicode superscript digits.
fn superscript(n: i64) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            '-' => '⁻',
            other => other,
        })
        .collect()
}
