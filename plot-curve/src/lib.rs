//! Analysis of plot formulas: which coordinate system a formula is written in, which named family
//! a polar curve belongs to, and what its samples look like.
//!
//! ```
//! use plot_curve::{classify_and_analyze, family::{CurveFamily, Trig}, DomainHint};
//!
//! let report = classify_and_analyze("r = cos(4θ)", DomainHint::Auto).unwrap();
//! assert_eq!(report.family, Some(CurveFamily::Rose { k: 4, amplitude: 1.0, trig: Trig::Cos }));
//! assert_eq!(report.petals, Some(8));
//! ```
//!
//! The two entry points are [`parse_and_evaluate`], which evaluates a formula against arrays of
//! samples, and [`classify_and_analyze`], which samples the formula itself and reports on it.
//! [`plot_points`] and [`plot_surface`] produce the data a renderer draws.

pub mod analysis;
pub mod classify;
pub mod domain;
pub mod error;
pub mod family;
pub mod normalize;
pub mod options;
pub mod point;

use log::warn;
use plot_eval::{evaluate, surface::{BandOptions, Surface}, VariableBinding, Vocabulary};
use plot_parser::{
    parser::{ast::formula::{Dependent, Formula}, Parser},
    tokenizer::Notation,
};
use std::collections::HashMap;

pub use analysis::AnalysisReport;
pub use classify::{classify, classify_or_default, Classification};
pub use domain::{detect, Domain, DomainHint};
pub use error::Error;
pub use family::CurveFamily;
pub use options::AnalysisOptions;
pub use point::GraphPoint;

/// Parses a formula in the given notation.
fn parse_formula(expression: &str, notation: Notation) -> Result<Formula, Error> {
    Parser::with_notation(expression, notation)
        .and_then(|mut parser| parser.try_parse_formula())
        .map_err(Error::from_parse)
}

/// Returns the variable a Cartesian formula is a function of: the parameter of an `f(t) = ...`
/// header, or `x`.
fn free_variable(formula: &Formula) -> &str {
    match &formula.dependent {
        Some(Dependent::Func { param, .. }) => param.as_str(),
        _ => "x",
    }
}

/// Returns true if the formula is a surface `z = f(x, y)`.
fn is_surface(formula: &Formula) -> bool {
    formula.dependent == Some(Dependent::Z) || formula.expr.references("y")
}

/// Parses a formula and evaluates it at every sample of the given variables.
///
/// The variables may be named in any case, and theta may be spelled with a Greek glyph. When
/// `theta` is bound (and `t` is not), the formula is read in polar notation, where `t` also means
/// `theta`.
///
/// ```
/// use plot_curve::parse_and_evaluate;
/// use std::collections::HashMap;
///
/// let bindings = HashMap::from([("x".to_string(), vec![-1.0, 0.0, 2.0])]);
/// assert_eq!(parse_and_evaluate("y = 2x^2 - 1", bindings).unwrap(), vec![1.0, -1.0, 7.0]);
/// ```
pub fn parse_and_evaluate(
    expression: &str,
    variable_bindings: HashMap<String, Vec<f64>>,
) -> Result<Vec<f64>, Error> {
    let binding = VariableBinding::try_from(variable_bindings).map_err(Error::Eval)?;
    let notation = if binding.contains("theta") && !binding.contains("t") {
        Notation::Polar
    } else {
        Notation::Cartesian
    };

    let formula = parse_formula(expression, notation)?;
    evaluate(&formula.expr, &binding).map_err(Error::Eval)
}

/// Analyzes a Cartesian formula, as a curve `y = f(x)` or a surface `z = f(x, y)`.
fn analyze_cartesian(expression: &str, options: &AnalysisOptions) -> Result<AnalysisReport, Error> {
    let formula = parse_formula(expression, Notation::Cartesian)?;

    if is_surface(&formula) {
        let surface = Surface::cartesian(
            &formula.expr,
            Vocabulary::standard(),
            options.surface_bounds,
            options.surface_samples,
        ).map_err(Error::Eval)?;
        return AnalysisReport::surface(expression, &formula.expr, &surface);
    }

    let xs = options.x_samples();
    let binding = VariableBinding::single(free_variable(&formula), xs.clone()).map_err(Error::Eval)?;
    let ys = evaluate(&formula.expr, &binding).map_err(Error::Eval)?;
    AnalysisReport::cartesian(expression, &formula.expr, &xs, &ys, options)
}

/// Classifies and analyzes a formula with the given options.
///
/// With [`DomainHint::Auto`], a formula that looks polar but cannot be classified as a polar
/// curve is analyzed as Cartesian instead, and the report's
/// [`domain_fallback`](AnalysisReport::domain_fallback) flag is set. If the Cartesian reading
/// fails too, the error from the polar reading is returned.
pub fn analyze(expression: &str, hint: DomainHint, options: &AnalysisOptions) -> Result<AnalysisReport, Error> {
    match hint.resolve(expression) {
        Domain::Cartesian => analyze_cartesian(expression, options),
        Domain::Polar => match classify(expression, options) {
            Ok(classification) => Ok(AnalysisReport::polar(expression, &classification, options)),
            Err(err) if hint == DomainHint::Auto => {
                warn!("`{}` looks polar, but {}; reading it as Cartesian", expression, err);
                let mut report = analyze_cartesian(expression, options).map_err(|_| err)?;
                report.domain_fallback = true;
                Ok(report)
            },
            Err(err) => Err(err),
        },
    }
}

/// Classifies and analyzes a formula with the default [`AnalysisOptions`].
pub fn classify_and_analyze(expression: &str, domain_hint: DomainHint) -> Result<AnalysisReport, Error> {
    analyze(expression, domain_hint, &AnalysisOptions::default())
}

/// Returns the points of the curve a formula describes.
///
/// Polar points are `(r cos θ, r sin θ)`, without the samples where `r` is not finite or is at
/// least [`radius_cutoff`](AnalysisOptions::radius_cutoff) in magnitude. Cartesian points are
/// `(x, y)`, without the samples where `y` is not finite. The domain falls back from polar to
/// Cartesian as in [`analyze`].
pub fn plot_points(expression: &str, hint: DomainHint, options: &AnalysisOptions) -> Result<Vec<GraphPoint>, Error> {
    let cartesian = || -> Result<Vec<GraphPoint>, Error> {
        let formula = parse_formula(expression, Notation::Cartesian)?;
        let xs = options.x_samples();
        let binding = VariableBinding::single(free_variable(&formula), xs.clone()).map_err(Error::Eval)?;
        let ys = evaluate(&formula.expr, &binding).map_err(Error::Eval)?;
        Ok(xs.into_iter()
            .zip(ys)
            .filter(|(_, y)| y.is_finite())
            .map(GraphPoint::from)
            .collect())
    };

    match hint.resolve(expression) {
        Domain::Cartesian => cartesian(),
        Domain::Polar => match classify(expression, options) {
            Ok(classification) => Ok(classification.points(options.radius_cutoff)),
            Err(err) if hint == DomainHint::Auto => cartesian().map_err(|_| err),
            Err(err) => Err(err),
        },
    }
}

/// Samples a formula on a grid for a three-dimensional plot.
///
/// A Cartesian formula is sampled as `z = f(x, y)` over
/// [`surface_bounds`](AnalysisOptions::surface_bounds); a polar curve is extruded into a band
/// along `z`.
pub fn plot_surface(expression: &str, hint: DomainHint, options: &AnalysisOptions) -> Result<Surface, Error> {
    match hint.resolve(expression) {
        Domain::Cartesian => {
            let formula = parse_formula(expression, Notation::Cartesian)?;
            Surface::cartesian(
                &formula.expr,
                Vocabulary::standard(),
                options.surface_bounds,
                options.surface_samples,
            ).map_err(Error::Eval)
        },
        Domain::Polar => {
            let formula = parse_formula(expression, Notation::Polar)?;
            Surface::polar_band(&formula.expr, Vocabulary::standard(), BandOptions::default())
                .map_err(Error::Eval)
        },
    }
}
