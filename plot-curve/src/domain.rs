//! Guessing whether a formula is Cartesian or polar, from its text alone.
//!
//! Detection runs before the formula is tokenized, so it also works on input that will later fail
//! to parse. It is a heuristic: a wrong guess is recovered from by
//! [`classify_and_analyze`](crate::classify_and_analyze), which falls back to the Cartesian
//! reading when a polar reading fails.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinate system a formula is plotted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Domain {
    /// `y = f(x)`, or `z = f(x, y)`.
    #[default]
    Cartesian,

    /// `r = f(theta)`.
    Polar,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Domain::Cartesian => write!(f, "Cartesian"),
            Domain::Polar => write!(f, "polar"),
        }
    }
}

/// The domain a caller asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DomainHint {
    /// Plot the formula as Cartesian.
    Cartesian,

    /// Plot the formula as polar.
    Polar,

    /// Guess the domain with [`detect`].
    #[default]
    Auto,
}

impl DomainHint {
    /// Resolves the hint to a domain, detecting it from the formula if needed.
    pub fn resolve(self, expression: &str) -> Domain {
        match self {
            DomainHint::Cartesian => Domain::Cartesian,
            DomainHint::Polar => Domain::Polar,
            DomainHint::Auto => detect(expression),
        }
    }
}

/// Substrings that suggest a polar formula. The input is lowercased and stripped of whitespace
/// before it is searched.
const POLAR_INDICATORS: [&str; 6] = ["r=", "theta", "θ", "ϴ", "cos(", "sin("];

/// Substrings that suggest a Cartesian formula.
const CARTESIAN_INDICATORS: [&str; 4] = ["y=", "f(x)", "x^", "x**"];

/// `x` used as a variable on its own, as in `sin(x)` or `2x`, rather than as part of a name like
/// `exp`.
static BARE_X: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|[^a-z_])x(?:[^a-z_]|$)").unwrap());

/// Guesses the domain of a formula from the substrings it contains.
///
/// A formula is polar if it contains at least one polar indicator (`r=`, `theta` or a theta glyph,
/// `cos(` or `sin(`) and no Cartesian indicator (`y=`, `f(x)`, a power of `x`, or a bare `x`).
/// Everything else, including a formula with indicators of both kinds, is Cartesian.
pub fn detect(expression: &str) -> Domain {
    let text = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let polar = POLAR_INDICATORS.iter().any(|indicator| text.contains(indicator));
    let cartesian = CARTESIAN_INDICATORS.iter().any(|indicator| text.contains(indicator))
        || BARE_X.is_match(&text);

    if polar && !cartesian {
        Domain::Polar
    } else {
        Domain::Cartesian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        assert_eq!(detect("y = x^2"), Domain::Cartesian);
        assert_eq!(detect("r = cos(2*theta)"), Domain::Polar);
        assert_eq!(detect("f(x) = 3x + 1"), Domain::Cartesian);
    }

    #[test]
    fn unprefixed() {
        assert_eq!(detect("sin(theta)"), Domain::Polar);
        assert_eq!(detect("1 - SIN(Θ)"), Domain::Polar);
        assert_eq!(detect("2(1+cos(t))"), Domain::Polar);
        assert_eq!(detect("sin(x)"), Domain::Cartesian);
        assert_eq!(detect("x**3 - x"), Domain::Cartesian);
        assert_eq!(detect("2x + 1"), Domain::Cartesian);
    }

    #[test]
    fn names_containing_x() {
        // the `x` in `exp` is not a variable
        assert_eq!(detect("exp(theta)"), Domain::Polar);
    }

    #[test]
    fn ties_favor_cartesian() {
        assert_eq!(detect("y = cos(theta)"), Domain::Cartesian);
        assert_eq!(detect("r = x^2"), Domain::Cartesian);
    }

    #[test]
    fn no_indicators() {
        assert_eq!(detect("3"), Domain::Cartesian);
        assert_eq!(detect(""), Domain::Cartesian);
    }

    #[test]
    fn hints() {
        assert_eq!(DomainHint::Polar.resolve("y = x"), Domain::Polar);
        assert_eq!(DomainHint::Cartesian.resolve("r = 1"), Domain::Cartesian);
        assert_eq!(DomainHint::Auto.resolve("r = 1"), Domain::Polar);
    }
}
