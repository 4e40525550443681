use plot_eval::grid::linspace;
use std::f64::consts::PI;

/// Options that control how formulas are sampled and analyzed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalysisOptions {
    /// The number of `x` samples for a Cartesian formula. An odd count places a sample at
    /// `x = 0` when the bounds are symmetric.
    ///
    /// The default value is `401`.
    pub cartesian_samples: usize,

    /// The range of `x` for a Cartesian formula.
    ///
    /// The default value is `(-10.0, 10.0)`.
    pub x_bounds: (f64, f64),

    /// The number of `theta` samples for a polar formula.
    ///
    /// The default value is `1000`.
    pub polar_samples: usize,

    /// The range of `theta` for a polar formula. Two full turns are needed to trace curves such
    /// as `r = cos(θ/2)`.
    ///
    /// The default value is `(0.0, 4π)`.
    pub theta_bounds: (f64, f64),

    /// Polar samples with `|r|` at least this large are treated as artifacts: they are left out
    /// of the radius statistics and of the plotted points.
    ///
    /// The default value is `100.0`.
    pub radius_cutoff: f64,

    /// The relative tolerance of the even / odd symmetry test.
    ///
    /// The default value is `0.1`.
    pub symmetry_tolerance: f64,

    /// The number of samples along each axis of a `z = f(x, y)` surface.
    ///
    /// The default value is `50`.
    pub surface_samples: usize,

    /// The range of both `x` and `y` for a surface.
    ///
    /// The default value is `(-5.0, 5.0)`.
    pub surface_bounds: (f64, f64),
}

/// The default options for analysis. Returns an [`AnalysisOptions`] with the following values:
///
/// - [`cartesian_samples`](AnalysisOptions::cartesian_samples): `401`
/// - [`x_bounds`](AnalysisOptions::x_bounds): `(-10.0, 10.0)`
/// - [`polar_samples`](AnalysisOptions::polar_samples): `1000`
/// - [`theta_bounds`](AnalysisOptions::theta_bounds): `(0.0, 4π)`
/// - [`radius_cutoff`](AnalysisOptions::radius_cutoff): `100.0`
/// - [`symmetry_tolerance`](AnalysisOptions::symmetry_tolerance): `0.1`
/// - [`surface_samples`](AnalysisOptions::surface_samples): `50`
/// - [`surface_bounds`](AnalysisOptions::surface_bounds): `(-5.0, 5.0)`
impl Default for AnalysisOptions {
    fn default() -> AnalysisOptions {
        AnalysisOptions {
            cartesian_samples: 401,
            x_bounds: (-10.0, 10.0),
            polar_samples: 1000,
            theta_bounds: (0.0, 4.0 * PI),
            radius_cutoff: 100.0,
            symmetry_tolerance: 0.1,
            surface_samples: 50,
            surface_bounds: (-5.0, 5.0),
        }
    }
}

impl AnalysisOptions {
    /// Set the number and range of `x` samples. Returns an updated [`AnalysisOptions`] for
    /// chaining.
    pub fn cartesian_grid(mut self, samples: usize, min: f64, max: f64) -> Self {
        self.cartesian_samples = samples;
        self.x_bounds = (min, max);
        self
    }

    /// Set the number and range of `theta` samples. Returns an updated [`AnalysisOptions`] for
    /// chaining.
    pub fn polar_grid(mut self, samples: usize, min: f64, max: f64) -> Self {
        self.polar_samples = samples;
        self.theta_bounds = (min, max);
        self
    }

    /// Set the radius cutoff. Returns an updated [`AnalysisOptions`] for chaining.
    pub fn radius_cutoff(mut self, radius_cutoff: f64) -> Self {
        self.radius_cutoff = radius_cutoff;
        self
    }

    /// Set the relative tolerance of the symmetry test. Returns an updated [`AnalysisOptions`]
    /// for chaining.
    pub fn symmetry_tolerance(mut self, symmetry_tolerance: f64) -> Self {
        self.symmetry_tolerance = symmetry_tolerance;
        self
    }

    /// Set the number of samples per axis and the range of a surface. Returns an updated
    /// [`AnalysisOptions`] for chaining.
    pub fn surface_grid(mut self, samples: usize, min: f64, max: f64) -> Self {
        self.surface_samples = samples;
        self.surface_bounds = (min, max);
        self
    }

    /// The `x` samples of a Cartesian formula.
    pub fn x_samples(&self) -> Vec<f64> {
        linspace(self.x_bounds.0, self.x_bounds.1, self.cartesian_samples)
    }

    /// The `theta` samples of a polar formula.
    pub fn theta_samples(&self) -> Vec<f64> {
        linspace(self.theta_bounds.0, self.theta_bounds.1, self.polar_samples)
    }
}
