//! Surfaces for three-dimensional plots: `z = f(x, y)` over a square grid, and polar curves
//! extruded along `z`.

use log::debug;
use plot_error::Error;
use plot_parser::parser::ast::expr::Expr;
use rayon::prelude::*;
use std::f64::consts::PI;
use super::{binding::VariableBinding, eval::Evaluator, grid::linspace, vocab::Vocabulary};

/// A surface sampled on a grid. Each of the three matrices has one row per grid row, and the
/// point at row `i`, column `j` is `(x[i][j], y[i][j], z[i][j])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

/// Options for extruding a polar curve into a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandOptions {
    /// The number of angle samples along the curve.
    ///
    /// The default value is `100`.
    pub theta_samples: usize,

    /// The range of the angle.
    ///
    /// The default value is `(0.0, 4π)`.
    pub theta_bounds: (f64, f64),

    /// The number of copies of the curve stacked along `z`.
    ///
    /// The default value is `30`.
    pub z_levels: usize,

    /// The range of `z` covered by the copies.
    ///
    /// The default value is `(-2.0, 2.0)`.
    pub z_bounds: (f64, f64),

    /// Radii at least this large in magnitude, and non-finite radii, are drawn as `0`.
    ///
    /// The default value is `10.0`.
    pub radius_clamp: f64,
}

impl Default for BandOptions {
    fn default() -> Self {
        Self {
            theta_samples: 100,
            theta_bounds: (0.0, 4.0 * PI),
            z_levels: 30,
            z_bounds: (-2.0, 2.0),
            radius_clamp: 10.0,
        }
    }
}

impl Surface {
    /// Samples `z = f(x, y)` on an `n` by `n` grid over `bounds` in both axes. Rows (one per `y`
    /// value) are evaluated in parallel.
    ///
    /// A formula in `x` alone is read as a function of `x + y`, so it still produces a surface.
    pub fn cartesian(
        expr: &Expr,
        vocab: &Vocabulary,
        bounds: (f64, f64),
        n: usize,
    ) -> Result<Self, Error> {
        let xs = linspace(bounds.0, bounds.1, n);
        let ys = linspace(bounds.0, bounds.1, n);
        let diagonal = expr.references("x") && !expr.references("y");
        if diagonal {
            debug!("`{}` does not use y; plotting it as a function of x + y", expr);
        }

        // fail fast on structural errors, before spawning any work
        let first_row = row_binding(&xs, 0.0, diagonal)?;
        Evaluator::new(vocab, &first_row).check(expr)?;

        let z = ys.par_iter()
            .map(|&y| {
                let binding = row_binding(&xs, y, diagonal)?;
                Evaluator::new(vocab, &binding).eval(expr)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            x: ys.iter().map(|_| xs.clone()).collect(),
            y: ys.iter().map(|&y| vec![y; xs.len()]).collect(),
            z,
        })
    }

    /// Extrudes the polar curve `r = f(theta)` into a band of stacked copies along `z`.
    pub fn polar_band(expr: &Expr, vocab: &Vocabulary, options: BandOptions) -> Result<Self, Error> {
        let theta = linspace(options.theta_bounds.0, options.theta_bounds.1, options.theta_samples);
        let binding = VariableBinding::single("theta", theta.clone())?;
        let radii = Evaluator::new(vocab, &binding)
            .eval(expr)?
            .into_iter()
            .map(|r| if r.is_finite() && r.abs() < options.radius_clamp { r } else { 0.0 })
            .collect::<Vec<_>>();

        let (xs, ys): (Vec<f64>, Vec<f64>) = radii.iter()
            .zip(theta.iter())
            .map(|(r, t)| (r * t.cos(), r * t.sin()))
            .unzip();
        let levels = linspace(options.z_bounds.0, options.z_bounds.1, options.z_levels);

        Ok(Self {
            x: levels.iter().map(|_| xs.clone()).collect(),
            y: levels.iter().map(|_| ys.clone()).collect(),
            z: levels.iter().map(|&z| vec![z; xs.len()]).collect(),
        })
    }
}

/// Binds one row of the grid: `x` over the whole row and `y` fixed. With `diagonal` set, `x` is
/// bound to `x + y` instead.
fn row_binding(xs: &[f64], y: f64, diagonal: bool) -> Result<VariableBinding, Error> {
    let mut binding = VariableBinding::new();
    if diagonal {
        binding.insert("x", xs.iter().map(|x| x + y).collect())?;
    } else {
        binding.insert("x", xs.to_vec())?;
    }
    binding.insert("y", vec![y; xs.len()])?;
    Ok(binding)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use plot_parser::parser::Parser;
    use crate::error::UndefinedVariable;
    use super::*;

    fn parse(source: &str) -> Expr {
        Parser::new(source).unwrap().try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn paraboloid() {
        let surface = Surface::cartesian(&parse("x^2 + y^2"), Vocabulary::standard(), (-5.0, 5.0), 50).unwrap();
        assert_eq!(surface.z.len(), 50);
        assert!(surface.z.iter().all(|row| row.len() == 50));
        assert_float_absolute_eq!(surface.z[0][0], 50.0);
        assert_float_absolute_eq!(surface.z[49][0], 50.0);
    }

    #[test]
    fn single_variable_uses_diagonal() {
        let surface = Surface::cartesian(&parse("x"), Vocabulary::standard(), (-1.0, 1.0), 3).unwrap();
        // z = x + y
        assert_eq!(surface.z, vec![
            vec![-2.0, -1.0, 0.0],
            vec![-1.0, 0.0, 1.0],
            vec![0.0, 1.0, 2.0],
        ]);
    }

    #[test]
    fn structural_error() {
        let err = Surface::cartesian(&parse("x + w"), Vocabulary::standard(), (-1.0, 1.0), 3).unwrap_err();
        assert!(err.is::<UndefinedVariable>());
    }

    #[test]
    fn band_clamps_radii() {
        let options = BandOptions { theta_samples: 5, z_levels: 3, ..Default::default() };
        let surface = Surface::polar_band(&parse("1/sin(theta)"), Vocabulary::standard(), options).unwrap();
        assert_eq!(surface.x.len(), 3);
        // sin(0) = 0, so the first radius is infinite and clamped to the origin
        assert_eq!(surface.x[0][0], 0.0);
        assert_eq!(surface.y[0][0], 0.0);
        assert_eq!(surface.z[0], vec![-2.0; 5]);
        assert_eq!(surface.z[2], vec![2.0; 5]);
    }
}
