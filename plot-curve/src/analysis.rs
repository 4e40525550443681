//! Descriptive analysis of evaluated formulas.

use plot_error::Error as SpanError;
use plot_eval::{surface::Surface, Func, Vocabulary};
use plot_parser::parser::{ast::expr::Expr, token::op::BinOpKind};
use std::fmt;
use super::{
    classify::Classification,
    domain::Domain,
    error::{Error, NoFiniteSamples},
    family::{CurveFamily, Facing, SymmetryAxis},
    options::AnalysisOptions,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coarse classification of a Cartesian formula, read from the functions and operators it
/// uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionType {
    Trigonometric,
    Exponential,
    Logarithmic,
    Power,
    SquareRoot,
    Algebraic,
    Other,
}

impl FunctionType {
    /// Classifies a formula. The checks run in a fixed order, so `sin(x)^2` is trigonometric, not
    /// a power.
    pub fn of(expr: &Expr) -> Self {
        let vocab = Vocabulary::standard();
        let calls = expr.post_order_iter()
            .filter_map(|node| match node {
                Expr::Call(call) => vocab.func(&call.name.name),
                _ => None,
            })
            .collect::<Vec<_>>();
        let calls_any = |funcs: &[Func]| calls.iter().any(|call| funcs.contains(call));
        let powers = expr.post_order_iter()
            .filter_map(|node| match node {
                Expr::Binary(binary) if binary.op.kind == BinOpKind::Exp => Some(&binary.lhs),
                _ => None,
            })
            .collect::<Vec<_>>();

        if calls.iter().any(Func::is_trig) {
            FunctionType::Trigonometric
        } else if calls_any(&[Func::Exp]) || powers.iter().any(|base| base.as_symbol() == Some("e")) {
            FunctionType::Exponential
        } else if calls_any(&[Func::Log]) {
            FunctionType::Logarithmic
        } else if !powers.is_empty() {
            FunctionType::Power
        } else if calls_any(&[Func::Sqrt]) {
            FunctionType::SquareRoot
        } else if matches!(expr, Expr::Binary(_) | Expr::Unary(_)) {
            FunctionType::Algebraic
        } else {
            FunctionType::Other
        }
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FunctionType::Trigonometric => write!(f, "trigonometric function"),
            FunctionType::Exponential => write!(f, "exponential function"),
            FunctionType::Logarithmic => write!(f, "logarithmic function"),
            FunctionType::Power => write!(f, "power function"),
            FunctionType::SquareRoot => write!(f, "square root function"),
            FunctionType::Algebraic => write!(f, "algebraic function"),
            FunctionType::Other => write!(f, "other function"),
        }
    }
}

/// The parity of a Cartesian function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parity {
    /// `f(-x) = f(x)`: symmetric about the y-axis.
    Even,

    /// `f(-x) = -f(x)`: symmetric about the origin.
    Odd,
}

/// Returns true if `a` is close to `b`, relative to `b`.
fn is_close(a: f64, b: f64, rtol: f64) -> bool {
    (a - b).abs() <= 1e-8 + rtol * b.abs()
}

/// Tests the samples of a function for even or odd symmetry, pairing `f(x)` with `f(-x)`.
///
/// The grid must be symmetric about `x = 0`, so that the sample mirrored at index `n - 1 - i` is
/// taken at `-x`; on any other grid there is no parity. Pairs where either value is not finite are
/// skipped; with no finite pair, there is no parity. Even is tested first, so the zero function is
/// even.
pub fn parity(xs: &[f64], ys: &[f64], rtol: f64) -> Option<Parity> {
    let scale = xs.iter().fold(0.0f64, |max, x| max.max(x.abs()));
    let mirrored = xs.len() == ys.len()
        && xs.iter()
            .zip(xs.iter().rev())
            .all(|(&x, &mirror)| (x + mirror).abs() <= 1e-9 * scale.max(1.0));
    if !mirrored {
        return None;
    }

    let pairs = ys.iter()
        .zip(ys.iter().rev())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect::<Vec<_>>();
    if pairs.is_empty() {
        return None;
    }

    if pairs.iter().all(|&(a, b)| is_close(a, b, rtol)) {
        Some(Parity::Even)
    } else if pairs.iter().all(|&(a, b)| is_close(a, -b, rtol)) {
        Some(Parity::Odd)
    } else {
        None
    }
}

/// Tests the finite samples for monotonicity, returning whether they never decrease and whether
/// they never increase. A constant function is both.
pub fn monotonicity(ys: &[f64]) -> (bool, bool) {
    let finite = ys.iter().copied().filter(|y| y.is_finite()).collect::<Vec<_>>();
    if finite.len() < 2 {
        return (false, false);
    }

    let increasing = finite.windows(2).all(|w| w[1] >= w[0]);
    let decreasing = finite.windows(2).all(|w| w[1] <= w[0]);
    (increasing, decreasing)
}

/// Returns the smallest and largest finite values, if there are any.
pub fn finite_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
        })
}

/// Returns the maximum `|r|` and the minimum `r` over the radii that are finite and smaller than
/// `cutoff` in magnitude.
pub fn radius_range(radii: &[f64], cutoff: f64) -> Option<(f64, f64)> {
    let bounded = radii.iter().copied().filter(|r| r.abs() < cutoff).collect::<Vec<_>>();
    let (min, _) = finite_range(bounded.iter().copied())?;
    let (_, max) = finite_range(bounded.iter().map(|r| r.abs()))?;
    Some((max, min))
}

/// A description of the shape of a rose with the given number of petals.
pub fn shape_description(petals: u32) -> String {
    match petals {
        1 => "single petal".to_string(),
        3 => "three-petal propeller".to_string(),
        4 => "four-leaf clover".to_string(),
        5 => "pentagonal flower".to_string(),
        8 => "daisy-like flower".to_string(),
        12 => "chrysanthemum".to_string(),
        n => format!("{}-petal rose", n),
    }
}

/// The sentence explaining how the petal count of a rose follows from `k`.
pub fn petal_rule(k: u32) -> String {
    if k % 2 == 1 {
        format!("k = {} is odd, so the rose has {} petals", k, k)
    } else {
        format!("k = {} is even, so the rose has {} petals", k, 2 * u64::from(k))
    }
}

/// The analysis of a formula, as returned to the caller.
///
/// Fields that do not apply to the formula's domain or family are `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisReport {
    /// The formula as given.
    pub expression: String,

    /// The formula in normalized form: lowercase, without whitespace or a prefix, with `theta`
    /// spelled out and every multiplication explicit.
    pub normalized: String,

    /// The domain the formula was analyzed in.
    pub domain: Domain,

    /// True if the formula looked polar, but could only be analyzed as Cartesian.
    pub domain_fallback: bool,

    /// The family of a polar curve.
    pub family: Option<CurveFamily>,

    /// True if the formula did not parse, and its family was recognized from its text.
    pub recognized_from_text: bool,

    /// The coarse type of a Cartesian formula.
    pub function_type: Option<FunctionType>,

    /// The amplitude of a circle, cardioid, or rose.
    pub amplitude: Option<f64>,

    /// The frequency `k` of a rose.
    pub k: Option<u32>,

    /// The number of petals of a rose.
    pub petals: Option<u32>,

    /// The axis a polar curve is symmetric about.
    pub symmetry_axis: Option<SymmetryAxis>,

    /// The direction a cardioid or limaçon points in.
    pub facing: Option<Facing>,

    /// The largest `|r|` over the plotted samples of a polar curve.
    pub max_radius: Option<f64>,

    /// The smallest `r` over the plotted samples of a polar curve.
    pub min_radius: Option<f64>,

    /// The smallest and largest finite values of a Cartesian formula.
    pub range: Option<(f64, f64)>,

    /// The parity of a Cartesian function.
    pub parity: Option<Parity>,

    /// True if the finite samples of a Cartesian function never decrease.
    pub increasing: bool,

    /// True if the finite samples of a Cartesian function never increase.
    pub decreasing: bool,

    /// A description of the shape of a rose.
    pub shape: Option<String>,

    /// How the petal count of a rose follows from `k`.
    pub petal_rule: Option<String>,

    /// Human-readable properties, in order.
    pub properties: Vec<String>,
}

impl AnalysisReport {
    /// Creates an empty report for the formula.
    fn new(expression: &str, normalized: String, domain: Domain) -> Self {
        Self {
            expression: expression.to_string(),
            normalized,
            domain,
            domain_fallback: false,
            family: None,
            recognized_from_text: false,
            function_type: None,
            amplitude: None,
            k: None,
            petals: None,
            symmetry_axis: None,
            facing: None,
            max_radius: None,
            min_radius: None,
            range: None,
            parity: None,
            increasing: false,
            decreasing: false,
            shape: None,
            petal_rule: None,
            properties: Vec::new(),
        }
    }

    /// Builds the report of a classified polar formula.
    pub fn polar(expression: &str, classification: &Classification, options: &AnalysisOptions) -> Self {
        let family = classification.family;
        let mut report = Self::new(expression, classification.normalized.clone(), Domain::Polar);
        report.family = Some(family);
        report.recognized_from_text = classification.from_text;
        report.amplitude = family.amplitude();
        report.petals = family.petals();
        report.symmetry_axis = family.symmetry_axis();
        report.facing = family.facing();
        if let Some((max, min)) = radius_range(&classification.radii, options.radius_cutoff) {
            report.max_radius = Some(max);
            report.min_radius = Some(min);
        }
        if let CurveFamily::Rose { k, .. } = family {
            report.k = Some(k);
            report.shape = report.petals.map(shape_description);
            report.petal_rule = Some(petal_rule(k));
        }

        report.properties = report.polar_properties(family);
        if classification.from_text {
            report.properties.push(format!(
                "Recognized from the text of the formula, which does not parse; plotted as {}",
                classification.normalized,
            ));
        }
        if classification.is_default {
            report.properties.push("The formula could not be classified; showing the default curve".to_string());
        }
        report
    }

    fn polar_properties(&self, family: CurveFamily) -> Vec<String> {
        let mut properties = Vec::new();
        let axis = self.symmetry_axis.map(|axis| format!("Symmetric about the {}", axis));
        let facing = self.facing.map(|facing| format!("Facing {}", facing));
        let max_radius = self.max_radius.map(|r| format!("Maximum radius: {:.2}", r));
        let min_radius = self.min_radius.map(|r| format!("Minimum radius: {:.2}", r));

        match family {
            CurveFamily::Circle { radius } => {
                properties.push(format!("Circle of radius {} centered at the origin", radius));
                properties.push("Symmetric about both axes".to_string());
            },
            CurveFamily::CardioidRight { amplitude }
            | CurveFamily::CardioidLeft { amplitude }
            | CurveFamily::CardioidUp { amplitude }
            | CurveFamily::CardioidDown { amplitude } => {
                properties.extend(self.facing.map(|facing| format!("Heart-shaped curve facing {}", facing)));
                properties.push(format!("Amplitude parameter: a = {}", amplitude));
                properties.extend(axis);
                properties.extend(max_radius);
                properties.push("Sharp cusp at the origin".to_string());
            },
            CurveFamily::LimaconInnerLoop { .. } | CurveFamily::LimaconDimpled { .. } => {
                properties.push(if matches!(family, CurveFamily::LimaconInnerLoop { .. }) {
                    "Limaçon with an inner loop (|b| > a)".to_string()
                } else {
                    "Limaçon with a smooth dimple and no cusp (a > |b|)".to_string()
                });
                properties.extend(facing);
                properties.extend(axis);
                properties.extend(max_radius);
                properties.extend(min_radius);
            },
            CurveFamily::Rose { k, amplitude, .. } => {
                properties.extend(self.shape.clone());
                properties.push(format!("Amplitude (a) = {}", amplitude));
                properties.push(format!("Petal parameter (k) = {}", k));
                properties.push(if k % 2 == 1 {
                    "Rule: k petals for odd k".to_string()
                } else {
                    "Rule: 2k petals for even k".to_string()
                });
                properties.extend(axis);
                properties.extend(max_radius);
            },
            CurveFamily::Generic => {
                properties.extend(max_radius);
                properties.extend(min_radius);
            },
        }

        properties
    }

    /// Builds the report of a Cartesian formula `y = f(x)` from its samples.
    ///
    /// Fails with [`NoFiniteSamples`] if no sample is finite.
    pub fn cartesian(expression: &str, expr: &Expr, xs: &[f64], ys: &[f64], options: &AnalysisOptions) -> Result<Self, Error> {
        let Some(range) = finite_range(ys.iter().copied()) else {
            return Err(Error::Classify(SpanError::new(vec![expr.span()], NoFiniteSamples)));
        };

        let mut report = Self::new(expression, expr.to_string(), Domain::Cartesian);
        let function_type = FunctionType::of(expr);
        let (increasing, decreasing) = monotonicity(ys);
        report.function_type = Some(function_type);
        report.range = Some(range);
        report.parity = parity(xs, ys, options.symmetry_tolerance);
        report.increasing = increasing;
        report.decreasing = decreasing;

        let properties = &mut report.properties;
        properties.push(capitalize(&function_type.to_string()));
        if let Some((min, max)) = finite_range(xs.iter().copied()) {
            properties.push(format!("Domain: real numbers ({:.1} to {:.1} shown)", min, max));
        }
        properties.push(format!("Range: approximately {:.2} to {:.2}", range.0, range.1));
        match report.parity {
            Some(Parity::Even) => properties.push("Even function (symmetric about the y-axis)".to_string()),
            Some(Parity::Odd) => properties.push("Odd function (symmetric about the origin)".to_string()),
            None => {},
        }
        match (increasing, decreasing) {
            (true, true) => properties.push("Constant function".to_string()),
            (true, false) => properties.push("Monotonically increasing".to_string()),
            (false, true) => properties.push("Monotonically decreasing".to_string()),
            (false, false) => {},
        }

        Ok(report)
    }

    /// Builds the report of a Cartesian surface `z = f(x, y)`.
    ///
    /// Fails with [`NoFiniteSamples`] if no sample is finite.
    pub fn surface(expression: &str, expr: &Expr, surface: &Surface) -> Result<Self, Error> {
        let Some(range) = finite_range(surface.z.iter().flatten().copied()) else {
            return Err(Error::Classify(SpanError::new(vec![expr.span()], NoFiniteSamples)));
        };

        let mut report = Self::new(expression, expr.to_string(), Domain::Cartesian);
        let function_type = FunctionType::of(expr);
        report.function_type = Some(function_type);
        report.range = Some(range);
        report.properties.push(format!("Surface: {} of x and y", function_type));
        if let Some((min, max)) = finite_range(surface.x.iter().flatten().copied()) {
            report.properties.push(format!("Grid: x and y from {:.1} to {:.1}", min, max));
        }
        report.properties.push(format!("Height: approximately {:.2} to {:.2}", range.0, range.1));
        Ok(report)
    }
}

/// Uppercases the first letter.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} formula: {}", self.domain, self.normalized)?;
        if self.domain_fallback {
            write!(f, " (read as Cartesian after the polar reading failed)")?;
        }
        if let Some(family) = &self.family {
            write!(f, "\n  family: {}", family)?;
        }
        for property in &self.properties {
            write!(f, "\n  - {}", property)?;
        }
        Ok(())
    }
}
