//! Text-level normalization of formulas.
//!
//! A formula that parses is normalized by printing its AST. This module covers formulas that do
//! not parse: it rewrites the raw text into the same shape (lowercase, no whitespace, `theta`
//! spelled out, `^` for powers, explicit `*`) so the classifier can still recognize the familiar
//! curve literals in it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use super::domain::Domain;

/// A run of letters, as in a variable or function name.
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z_]+").unwrap());

/// A number or closing parenthesis directly followed by a name or opening parenthesis.
static IMPLICIT_MUL: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9.)])([a-z_(])").unwrap());

/// Normalizes the text of a formula without parsing it. In the polar domain, the bare name `t` is
/// rewritten to `theta`.
///
/// Characters that are not part of the formula grammar are kept as they are.
pub fn normalize_text(expression: &str, domain: Domain) -> String {
    let text = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .replace(['θ', 'ϴ'], "theta")
        .replace("**", "^");

    let text = NAME.replace_all(&text, |caps: &Captures| match &caps[0] {
        "t" if domain == Domain::Polar => "theta".to_string(),
        "ln" => "log".to_string(),
        name => name.to_string(),
    });

    IMPLICIT_MUL.replace_all(&text, "$1*$2").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn spacing_and_case() {
        assert_eq!(normalize_text(" R = 2 ( 1 + COS ( θ ) ) ", Domain::Polar), "r=2*(1+cos(theta))");
    }

    #[test]
    fn notation() {
        assert_eq!(normalize_text("3cos(4t)", Domain::Polar), "3*cos(4*theta)");
        assert_eq!(normalize_text("x**2 + ln(x)", Domain::Cartesian), "x^2+log(x)");
        assert_eq!(normalize_text("sqrt(t)", Domain::Cartesian), "sqrt(t)");
        assert_eq!(normalize_text("(x+1)(x-1)", Domain::Cartesian), "(x+1)*(x-1)");
    }

    #[test]
    fn keeps_unknown_characters() {
        assert_eq!(normalize_text("1 + cos(θ) $", Domain::Polar), "1+cos(theta)$");
    }
}
