//! Recognizing the named families of polar curves.
//!
//! Classification works on the shape of the parsed formula, not on its text: `2(1 + cos θ)`,
//! `2 + 2cos(t)` and `(1 + cos(theta)) * 2` are all the same right-facing cardioid. The matchers
//! run in a fixed order, most specific first, and the first match wins. A formula that matches no
//! family but still evaluates to finite radii is [`CurveFamily::Generic`].
//!
//! Formulas that fail to parse get one more chance: if their normalized text contains a
//! recognizable cardioid or rose literal, that family is reported and its own formula is plotted.

use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use plot_error::Error as SpanError;
use plot_eval::{evaluate, VariableBinding};
use plot_parser::parser::{
    ast::{expr::Expr, literal::Literal},
    token::op::{BinOpKind, UnaryOpKind},
    Parser,
};
use regex::Regex;
use super::{
    domain::Domain,
    error::{Error, NoFiniteSamples},
    family::{CurveFamily, Trig},
    normalize::normalize_text,
    options::AnalysisOptions,
    point::GraphPoint,
};

/// A term `coeff·trig(k·θ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TrigTerm {
    coeff: f64,
    trig: Trig,
    k: f64,
}

impl TrigTerm {
    fn scale(self, factor: f64) -> Self {
        Self { coeff: self.coeff * factor, ..self }
    }
}

/// A sum `constant + coeff·trig(k·θ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine {
    constant: f64,
    term: TrigTerm,
}

impl Affine {
    fn scale(self, factor: f64) -> Self {
        Self {
            constant: self.constant * factor,
            term: self.term.scale(factor),
        }
    }
}

/// Returns the value of a numeric literal, possibly negated.
fn constant(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Literal(Literal::Number(num)) => Some(num.value),
        Expr::Unary(unary) => match unary.op.kind {
            UnaryOpKind::Neg => constant(&unary.operand).map(|value| -value),
        },
        _ => None,
    }
}

/// Matches `c * inner` or `inner * c`, returning the constant and the inner match.
fn scaled<T>(lhs: &Expr, rhs: &Expr, inner: impl Fn(&Expr) -> Option<T>) -> Option<(f64, T)> {
    if let (Some(c), Some(matched)) = (constant(lhs), inner(rhs)) {
        return Some((c, matched));
    }
    Some((constant(rhs)?, inner(lhs)?))
}

/// Matches the angle `theta`, `k*theta`, or `theta*k`, returning `k`.
fn angle_multiple(expr: &Expr) -> Option<f64> {
    if expr.as_symbol() == Some("theta") {
        return Some(1.0);
    }

    let Expr::Binary(binary) = expr else {
        return None;
    };
    if binary.op.kind != BinOpKind::Mul {
        return None;
    }
    scaled(&binary.lhs, &binary.rhs, |expr| (expr.as_symbol() == Some("theta")).then_some(()))
        .map(|(k, ())| k)
}

/// Matches a scaled `sin` or `cos` of a multiple of the angle.
fn trig_term(expr: &Expr) -> Option<TrigTerm> {
    match expr {
        Expr::Call(call) => Some(TrigTerm {
            coeff: 1.0,
            trig: Trig::from_name(&call.name.name)?,
            k: angle_multiple(call.single_arg()?)?,
        }),
        Expr::Unary(unary) => match unary.op.kind {
            UnaryOpKind::Neg => trig_term(&unary.operand).map(|term| term.scale(-1.0)),
        },
        Expr::Binary(binary) => match binary.op.kind {
            BinOpKind::Mul => scaled(&binary.lhs, &binary.rhs, trig_term)
                .map(|(c, term)| term.scale(c)),
            BinOpKind::Div => {
                let divisor = constant(&binary.rhs)?;
                trig_term(&binary.lhs).map(|term| term.scale(divisor.recip()))
            },
            _ => None,
        },
        Expr::Literal(_) => None,
    }
}

/// Matches a constant plus or minus a trigonometric term, in either order, possibly scaled as a
/// whole.
fn affine(expr: &Expr) -> Option<Affine> {
    let Expr::Binary(binary) = expr else {
        return None;
    };

    let sign = match binary.op.kind {
        BinOpKind::Add => 1.0,
        BinOpKind::Sub => -1.0,
        BinOpKind::Mul => return scaled(&binary.lhs, &binary.rhs, affine)
            .map(|(c, affine)| affine.scale(c)),
        _ => return None,
    };

    if let (Some(constant), Some(term)) = (constant(&binary.lhs), trig_term(&binary.rhs)) {
        return Some(Affine { constant, term: term.scale(sign) });
    }
    Some(Affine {
        term: trig_term(&binary.lhs)?,
        constant: sign * constant(&binary.rhs)?,
    })
}

/// Compares two coefficients read from the same formula.
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// `r = a`
fn circle(expr: &Expr) -> Option<CurveFamily> {
    let radius = constant(expr)?;
    radius.is_finite().then(|| CurveFamily::Circle { radius: radius.abs() })
}

/// `r = a(1 ± trig θ)`, or its expanded form `a ± a·trig θ`.
fn cardioid(expr: &Expr) -> Option<CurveFamily> {
    let Affine { constant: a, term } = affine(expr)?;
    if term.k != 1.0 || !a.is_finite() || a <= 0.0 || !approx_eq(a, term.coeff.abs()) {
        return None;
    }
    Some(CurveFamily::cardioid(a, term.trig.facing(term.coeff > 0.0)))
}

/// `r = a ± b·trig θ` with `a ≠ |b|`.
fn limacon(expr: &Expr) -> Option<CurveFamily> {
    let Affine { constant: a, term } = affine(expr)?;
    let b = term.coeff;
    if term.k != 1.0 || !a.is_finite() || !b.is_finite() || a <= 0.0 || b == 0.0 || approx_eq(a, b.abs()) {
        return None;
    }

    Some(if b.abs() > a {
        CurveFamily::LimaconInnerLoop { a, b, trig: term.trig }
    } else {
        CurveFamily::LimaconDimpled { a, b, trig: term.trig }
    })
}

/// `r = a·trig(kθ)` with a positive integer `k`.
fn rose(expr: &Expr) -> Option<CurveFamily> {
    let TrigTerm { coeff, trig, k } = trig_term(expr)?;
    if !coeff.is_finite() || k < 1.0 || k.fract() != 0.0 || k > CurveFamily::MAX_ROSE_K as f64 {
        return None;
    }
    Some(CurveFamily::Rose { k: k as u32, amplitude: coeff, trig })
}

/// Matches a formula against one family.
type Matcher = fn(&Expr) -> Option<CurveFamily>;

/// The family matchers, in the order they are tried.
const MATCHERS: [(&str, Matcher); 4] = [
    ("circle", circle),
    ("cardioid", cardioid),
    ("limaçon", limacon),
    ("rose", rose),
];

/// Runs the matchers on the formula, returning the first family that matches.
pub fn match_family(expr: &Expr) -> Option<CurveFamily> {
    MATCHERS.iter().find_map(|(name, matcher)| {
        let family = matcher(expr)?;
        debug!("`{}` matches the {} pattern: {:?}", expr, name, family);
        Some(family)
    })
}

/// A cardioid literal in normalized text, such as `2*(1+cos(theta))`.
static CARDIOID_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^0-9.*])(?:([0-9]+(?:\.[0-9]+)?)\*)?\(?1([+-])(cos|sin)\(theta\)").unwrap()
});

/// A rose literal in normalized text, such as `3*cos(4*theta)`.
static ROSE_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^0-9.*])(?:([0-9]+(?:\.[0-9]+)?)\*)?(cos|sin)\(([0-9]+)\*theta").unwrap()
});

/// Looks for a cardioid or rose literal in normalized text.
pub fn match_text(text: &str) -> Option<CurveFamily> {
    let amplitude = |m: Option<regex::Match>| m.map_or(Some(1.0), |m| m.as_str().parse::<f64>().ok());

    if let Some(caps) = CARDIOID_TEXT.captures(text) {
        let amplitude = amplitude(caps.get(1))?;
        let trig = Trig::from_name(&caps[3])?;
        return Some(CurveFamily::cardioid(amplitude, trig.facing(&caps[2] == "+")));
    }

    let caps = ROSE_TEXT.captures(text)?;
    let k = caps[3].parse::<u32>().ok().filter(|&k| (1..=CurveFamily::MAX_ROSE_K).contains(&k))?;
    Some(CurveFamily::Rose {
        k,
        amplitude: amplitude(caps.get(1))?,
        trig: Trig::from_name(&caps[2])?,
    })
}

/// A classified polar formula, with the radii it was evaluated to.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The family of the curve.
    pub family: CurveFamily,

    /// The normalized formula that was evaluated.
    pub normalized: String,

    /// The angle samples.
    pub theta: Vec<f64>,

    /// The radius at each angle sample. Entries may be NaN or infinite.
    pub radii: Vec<f64>,

    /// True if the formula did not parse, and the family was recognized from its text.
    pub from_text: bool,

    /// True if the formula could not be classified and the default curve is reported instead.
    pub is_default: bool,
}

impl Classification {
    /// Builds a classification by computing a family's radii from its parameters.
    fn from_family(family: CurveFamily, theta: Vec<f64>) -> Self {
        let radii = theta.iter()
            .map(|&t| family.radius_at(t).unwrap_or(f64::NAN))
            .collect();
        Self {
            family,
            normalized: family.formula().unwrap_or_default(),
            theta,
            radii,
            from_text: false,
            is_default: false,
        }
    }

    /// Returns the `(x, y)` points of the curve. Non-finite radii, and radii at least as large as
    /// `cutoff` in magnitude, are dropped.
    pub fn points(&self, cutoff: f64) -> Vec<GraphPoint> {
        self.theta.iter()
            .zip(self.radii.iter())
            .filter(|(_, r)| r.is_finite() && r.abs() < cutoff)
            .map(|(t, r)| GraphPoint(r * t.cos(), r * t.sin()))
            .collect()
    }
}

/// Classifies a polar formula and evaluates it over the angle samples of `options`.
///
/// Fails with the parse error if the formula does not parse and its text contains no
/// recognizable family, with an evaluation error if it refers to something undefined, and with
/// [`NoFiniteSamples`] if it matches no family and is undefined at every sample.
pub fn classify(expression: &str, options: &AnalysisOptions) -> Result<Classification, Error> {
    let theta = options.theta_samples();
    let formula = match Parser::polar(expression).and_then(|mut parser| parser.try_parse_formula()) {
        Ok(formula) => formula,
        Err(err) => {
            let text = normalize_text(expression, Domain::Polar);
            let Some(family) = match_text(&text) else {
                return Err(Error::from_parse(err));
            };
            warn!(
                "`{}` does not parse ({}), but its text `{}` contains a {}; plotting the {} instead",
                expression,
                err,
                text,
                family.name(),
                family,
            );
            return Ok(Classification {
                from_text: true,
                ..Classification::from_family(family, theta)
            });
        },
    };

    let normalized = formula.expr.to_string();
    trace!("classifying `{}`", normalized);

    let binding = VariableBinding::single("theta", theta.clone()).map_err(Error::Eval)?;
    let radii = evaluate(&formula.expr, &binding).map_err(Error::Eval)?;
    let family = match match_family(&formula.expr) {
        Some(family) => family,
        None if radii.iter().any(|r| r.is_finite()) => {
            debug!("`{}` matches no family; classifying it as generic", normalized);
            CurveFamily::Generic
        },
        None => {
            return Err(Error::Classify(SpanError::new(vec![formula.expr.span()], NoFiniteSamples)));
        },
    };

    Ok(Classification {
        family,
        normalized,
        theta,
        radii,
        from_text: false,
        is_default: false,
    })
}

/// Classifies a polar formula, or returns the [default curve](CurveFamily::default_curve) if it
/// cannot be classified.
pub fn classify_or_default(expression: &str, options: &AnalysisOptions) -> Classification {
    classify(expression, options).unwrap_or_else(|err| {
        let family = CurveFamily::default_curve();
        warn!("cannot classify `{}` ({}); using the default curve {}", expression, err, family);
        Classification {
            is_default: true,
            ..Classification::from_family(family, options.theta_samples())
        }
    })
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use plot_eval::error::UndefinedFunction;
    use pretty_assertions::assert_eq;
    use crate::family::{Facing, SymmetryAxis};
    use super::*;

    fn family(expression: &str) -> CurveFamily {
        classify(expression, &AnalysisOptions::default()).unwrap().family
    }

    #[test]
    fn rose_petal_rule() {
        for k in 1..=12u32 {
            let family = family(&format!("cos({}*theta)", k));
            assert_eq!(family, CurveFamily::Rose { k, amplitude: 1.0, trig: Trig::Cos });
            assert_eq!(family.petals(), Some(if k % 2 == 1 { k } else { 2 * k }));
        }
    }

    #[test]
    fn rose_spellings() {
        let expected = CurveFamily::Rose { k: 4, amplitude: 3.0, trig: Trig::Sin };
        for expression in ["r = 3sin(4θ)", "3*sin(4*t)", "sin(theta*4) * 3", "R=3 SIN(4 ϴ)"] {
            assert_eq!(family(expression), expected, "{}", expression);
        }
        assert_eq!(
            family("-2cos(3theta)"),
            CurveFamily::Rose { k: 3, amplitude: -2.0, trig: Trig::Cos },
        );
        assert_eq!(family("cos(4theta)/2"), CurveFamily::Rose { k: 4, amplitude: 0.5, trig: Trig::Cos });
    }

    #[test]
    fn non_integer_frequency_is_generic() {
        assert_eq!(family("cos(2.5*theta)"), CurveFamily::Generic);
        assert_eq!(family("cos(0*theta)"), CurveFamily::Generic);
    }

    #[test]
    fn cardioid_facing() {
        let right = family("1+cos(theta)");
        assert_eq!(right, CurveFamily::CardioidRight { amplitude: 1.0 });
        assert_eq!(right.facing(), Some(Facing::Right));
        assert_eq!(right.symmetry_axis(), Some(SymmetryAxis::XAxis));

        let down = family("1-sin(theta)");
        assert_eq!(down, CurveFamily::CardioidDown { amplitude: 1.0 });
        assert_eq!(down.facing(), Some(Facing::Down));
        assert_eq!(down.symmetry_axis(), Some(SymmetryAxis::YAxis));
    }

    #[test]
    fn cardioid_spellings() {
        let expected = CurveFamily::CardioidRight { amplitude: 2.0 };
        for expression in ["r = 2(1 + cos(θ))", "2*(1+cos(t))", "(1 + cos(theta)) * 2", "2 + 2cos(theta)", "2cos(theta) + 2"] {
            assert_eq!(family(expression), expected, "{}", expression);
        }
        assert_eq!(family("3 - 3sin(theta)"), CurveFamily::CardioidDown { amplitude: 3.0 });
        assert_eq!(family("1 - cos(theta)"), CurveFamily::CardioidLeft { amplitude: 1.0 });
        assert_eq!(family("0.5(1 + sin(theta))"), CurveFamily::CardioidUp { amplitude: 0.5 });
    }

    #[test]
    fn limacons() {
        assert_eq!(
            family("1+2*cos(theta)"),
            CurveFamily::LimaconInnerLoop { a: 1.0, b: 2.0, trig: Trig::Cos },
        );
        assert_eq!(
            family("2+cos(theta)"),
            CurveFamily::LimaconDimpled { a: 2.0, b: 1.0, trig: Trig::Cos },
        );
        assert_eq!(
            family("1 - 2sin(t)"),
            CurveFamily::LimaconInnerLoop { a: 1.0, b: -2.0, trig: Trig::Sin },
        );
        assert_eq!(
            family("3 + 2sin(theta)"),
            CurveFamily::LimaconDimpled { a: 3.0, b: 2.0, trig: Trig::Sin },
        );
    }

    #[test]
    fn circle() {
        assert_eq!(family("r = 3"), CurveFamily::Circle { radius: 3.0 });
        assert_eq!(family("-2"), CurveFamily::Circle { radius: 2.0 });
    }

    #[test]
    fn generic() {
        assert_eq!(family("theta"), CurveFamily::Generic);
        assert_eq!(family("1 + cos(theta)^2"), CurveFamily::Generic);
        assert_eq!(family("exp(sin(theta))"), CurveFamily::Generic);
        assert_eq!(family("-1 + cos(theta)"), CurveFamily::Generic);
    }

    #[test]
    fn huge_frequency_is_generic() {
        assert_eq!(family("cos(3000000000*theta)"), CurveFamily::Generic);
        assert_eq!(match_text("cos(3000000000*theta"), None);

        let k = CurveFamily::MAX_ROSE_K;
        assert_eq!(
            match_text(&format!("cos({}*theta", k)),
            Some(CurveFamily::Rose { k, amplitude: 1.0, trig: Trig::Cos }),
        );
    }

    #[test]
    fn radii_are_evaluated() {
        let classification = classify("2(1+cos(theta))", &AnalysisOptions::default()).unwrap();
        assert_eq!(classification.radii.len(), 1000);
        assert_float_absolute_eq!(classification.radii[0], 4.0);
        assert_eq!(classification.normalized, "2*(1+cos(theta))");
        assert!(!classification.from_text);
    }

    #[test]
    fn malformed_but_recognizable() {
        let classification = classify("r = 2(1+cos(θ)) $", &AnalysisOptions::default()).unwrap();
        assert_eq!(classification.family, CurveFamily::CardioidRight { amplitude: 2.0 });
        assert!(classification.from_text);
        assert_eq!(classification.normalized, "2*(1+cos(theta))");
        assert_float_absolute_eq!(classification.radii[0], 4.0);

        let classification = classify("r = 3cos(4θ", &AnalysisOptions::default()).unwrap();
        assert_eq!(classification.family, CurveFamily::Rose { k: 4, amplitude: 3.0, trig: Trig::Cos });
    }

    #[test]
    fn unrecognizable_errors() {
        let err = classify("r = $", &AnalysisOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Lex(_)));

        let err = classify("r = (theta", &AnalysisOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Syntax(_)));

        let err = classify("r = sine(theta)", &AnalysisOptions::default()).unwrap_err();
        match err {
            Error::Eval(err) => assert!(err.is::<UndefinedFunction>()),
            other => panic!("expected an evaluation error, got {:?}", other),
        }
    }

    #[test]
    fn nothing_finite() {
        let err = classify("log(-1 - theta^2)", &AnalysisOptions::default()).unwrap_err();
        match err {
            Error::Classify(err) => assert!(err.is::<NoFiniteSamples>()),
            other => panic!("expected a classification error, got {:?}", other),
        }
    }

    #[test]
    fn default_curve() {
        let classification = classify_or_default("r = $$", &AnalysisOptions::default());
        assert!(classification.is_default);
        assert_eq!(classification.family, CurveFamily::default_curve());
        assert_eq!(classification.normalized, "1*cos(2*theta)");
        assert_float_absolute_eq!(classification.radii[0], 1.0);
    }

    #[test]
    fn points_drop_artifacts() {
        let options = AnalysisOptions::default().polar_grid(3, 0.0, std::f64::consts::PI);
        let classification = classify("1/sin(theta)", &options).unwrap();
        // sin(0) and sin(π) are (nearly) zero
        let points = classification.points(options.radius_cutoff);
        assert_eq!(points.len(), 1);
        assert_float_absolute_eq!(points[0].0, 0.0);
        assert_float_absolute_eq!(points[0].1, 1.0);
    }
}
