//! The named families of polar curves, and their parameters.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The trigonometric function in a family's formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Trig {
    Sin,
    Cos,
}

impl Trig {
    /// Returns the trigonometric function with the given name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Trig::Sin),
            "cos" => Some(Trig::Cos),
            _ => None,
        }
    }

    /// Applies the function.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Trig::Sin => x.sin(),
            Trig::Cos => x.cos(),
        }
    }

    /// The axis a curve built on this function is symmetric about.
    pub fn symmetry_axis(self) -> SymmetryAxis {
        match self {
            Trig::Cos => SymmetryAxis::XAxis,
            Trig::Sin => SymmetryAxis::YAxis,
        }
    }

    /// The direction a cardioid or limaçon built on this function points, given the sign of the
    /// coefficient of the function.
    pub fn facing(self, positive: bool) -> Facing {
        match (self, positive) {
            (Trig::Cos, true) => Facing::Right,
            (Trig::Cos, false) => Facing::Left,
            (Trig::Sin, true) => Facing::Up,
            (Trig::Sin, false) => Facing::Down,
        }
    }
}

impl fmt::Display for Trig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Trig::Sin => write!(f, "sin"),
            Trig::Cos => write!(f, "cos"),
        }
    }
}

/// An axis of mirror symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymmetryAxis {
    XAxis,
    YAxis,
}

impl fmt::Display for SymmetryAxis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymmetryAxis::XAxis => write!(f, "x-axis"),
            SymmetryAxis::YAxis => write!(f, "y-axis"),
        }
    }
}

/// The direction the bulge of a cardioid or limaçon points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Facing {
    Right,
    Left,
    Up,
    Down,
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Facing::Right => write!(f, "right"),
            Facing::Left => write!(f, "left"),
            Facing::Up => write!(f, "up"),
            Facing::Down => write!(f, "down"),
        }
    }
}

/// A family of polar curves recognized by the classifier, with the parameters read off the
/// formula.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurveFamily {
    /// `r = a`: a circle centered at the origin.
    Circle {
        radius: f64,
    },

    /// `r = a(1 + cos θ)`
    CardioidRight {
        amplitude: f64,
    },

    /// `r = a(1 - cos θ)`
    CardioidLeft {
        amplitude: f64,
    },

    /// `r = a(1 + sin θ)`
    CardioidUp {
        amplitude: f64,
    },

    /// `r = a(1 - sin θ)`
    CardioidDown {
        amplitude: f64,
    },

    /// `r = a + b·trig(θ)` with `|b| > a`: the curve passes through the origin twice, tracing a
    /// smaller loop inside the larger one.
    ///
    /// `b` carries the sign of the trigonometric term.
    LimaconInnerLoop {
        a: f64,
        b: f64,
        trig: Trig,
    },

    /// `r = a + b·trig(θ)` with `a > |b|`: the curve never reaches the origin.
    LimaconDimpled {
        a: f64,
        b: f64,
        trig: Trig,
    },

    /// `r = a·trig(kθ)` for a positive integer `k`.
    Rose {
        k: u32,
        amplitude: f64,
        trig: Trig,
    },

    /// A curve that evaluates, but matches none of the named families.
    Generic,
}

impl CurveFamily {
    /// The largest `k` a rose is recognized with. Any larger and its petal count does not fit in a
    /// `u32`.
    pub const MAX_ROSE_K: u32 = u32::MAX / 2;

    /// The curve used when a formula cannot be classified at all: the four-petal rose
    /// `r = cos(2θ)`.
    pub fn default_curve() -> Self {
        CurveFamily::Rose { k: 2, amplitude: 1.0, trig: Trig::Cos }
    }

    /// Builds the cardioid `a(1 ± trig θ)` with the given facing.
    pub fn cardioid(amplitude: f64, facing: Facing) -> Self {
        match facing {
            Facing::Right => CurveFamily::CardioidRight { amplitude },
            Facing::Left => CurveFamily::CardioidLeft { amplitude },
            Facing::Up => CurveFamily::CardioidUp { amplitude },
            Facing::Down => CurveFamily::CardioidDown { amplitude },
        }
    }

    /// The short name of the family.
    pub fn name(&self) -> &'static str {
        match self {
            CurveFamily::Circle { .. } => "circle",
            CurveFamily::CardioidRight { .. }
            | CurveFamily::CardioidLeft { .. }
            | CurveFamily::CardioidUp { .. }
            | CurveFamily::CardioidDown { .. } => "cardioid",
            CurveFamily::LimaconInnerLoop { .. } => "limaçon with inner loop",
            CurveFamily::LimaconDimpled { .. } => "dimpled limaçon",
            CurveFamily::Rose { .. } => "rose",
            CurveFamily::Generic => "generic polar curve",
        }
    }

    /// Returns true if the family is one of the four cardioids.
    pub fn is_cardioid(&self) -> bool {
        self.facing().is_some() && !self.is_limacon()
    }

    /// Returns true if the family is one of the two limaçons.
    pub fn is_limacon(&self) -> bool {
        matches!(self, CurveFamily::LimaconInnerLoop { .. } | CurveFamily::LimaconDimpled { .. })
    }

    /// The amplitude of the curve: the scale factor of a cardioid or rose, or the radius of a
    /// circle.
    pub fn amplitude(&self) -> Option<f64> {
        match *self {
            CurveFamily::Circle { radius } => Some(radius),
            CurveFamily::CardioidRight { amplitude }
            | CurveFamily::CardioidLeft { amplitude }
            | CurveFamily::CardioidUp { amplitude }
            | CurveFamily::CardioidDown { amplitude }
            | CurveFamily::Rose { amplitude, .. } => Some(amplitude),
            CurveFamily::LimaconInnerLoop { .. }
            | CurveFamily::LimaconDimpled { .. }
            | CurveFamily::Generic => None,
        }
    }

    /// The number of petals of a rose: `k` when `k` is odd, and `2k` when `k` is even.
    pub fn petals(&self) -> Option<u32> {
        match *self {
            CurveFamily::Rose { k, .. } if k % 2 == 1 => Some(k),
            CurveFamily::Rose { k, .. } => k.checked_mul(2),
            _ => None,
        }
    }

    /// The axis the curve is symmetric about. A circle is symmetric about both axes, and reports
    /// neither.
    pub fn symmetry_axis(&self) -> Option<SymmetryAxis> {
        match *self {
            CurveFamily::CardioidRight { .. } | CurveFamily::CardioidLeft { .. } => Some(SymmetryAxis::XAxis),
            CurveFamily::CardioidUp { .. } | CurveFamily::CardioidDown { .. } => Some(SymmetryAxis::YAxis),
            CurveFamily::LimaconInnerLoop { trig, .. }
            | CurveFamily::LimaconDimpled { trig, .. }
            | CurveFamily::Rose { trig, .. } => Some(trig.symmetry_axis()),
            CurveFamily::Circle { .. } | CurveFamily::Generic => None,
        }
    }

    /// The direction a cardioid or limaçon points in.
    pub fn facing(&self) -> Option<Facing> {
        match *self {
            CurveFamily::CardioidRight { .. } => Some(Facing::Right),
            CurveFamily::CardioidLeft { .. } => Some(Facing::Left),
            CurveFamily::CardioidUp { .. } => Some(Facing::Up),
            CurveFamily::CardioidDown { .. } => Some(Facing::Down),
            CurveFamily::LimaconInnerLoop { b, trig, .. }
            | CurveFamily::LimaconDimpled { b, trig, .. } => Some(trig.facing(b > 0.0)),
            CurveFamily::Circle { .. } | CurveFamily::Rose { .. } | CurveFamily::Generic => None,
        }
    }

    /// The radius of the curve at angle `theta`, computed from the family's parameters, or `None`
    /// for [`CurveFamily::Generic`].
    pub fn radius_at(&self, theta: f64) -> Option<f64> {
        Some(match *self {
            CurveFamily::Circle { radius } => radius,
            CurveFamily::CardioidRight { amplitude } => amplitude * (1.0 + theta.cos()),
            CurveFamily::CardioidLeft { amplitude } => amplitude * (1.0 - theta.cos()),
            CurveFamily::CardioidUp { amplitude } => amplitude * (1.0 + theta.sin()),
            CurveFamily::CardioidDown { amplitude } => amplitude * (1.0 - theta.sin()),
            CurveFamily::LimaconInnerLoop { a, b, trig }
            | CurveFamily::LimaconDimpled { a, b, trig } => a + b * trig.apply(theta),
            CurveFamily::Rose { k, amplitude, trig } => amplitude * trig.apply(k as f64 * theta),
            CurveFamily::Generic => return None,
        })
    }

    /// The formula of the family in normalized form, or `None` for [`CurveFamily::Generic`].
    pub fn formula(&self) -> Option<String> {
        let cardioid = |amplitude: f64, op: char, trig: Trig| {
            format!("{}*(1{}{}(theta))", amplitude, op, trig)
        };
        Some(match *self {
            CurveFamily::Circle { radius } => radius.to_string(),
            CurveFamily::CardioidRight { amplitude } => cardioid(amplitude, '+', Trig::Cos),
            CurveFamily::CardioidLeft { amplitude } => cardioid(amplitude, '-', Trig::Cos),
            CurveFamily::CardioidUp { amplitude } => cardioid(amplitude, '+', Trig::Sin),
            CurveFamily::CardioidDown { amplitude } => cardioid(amplitude, '-', Trig::Sin),
            CurveFamily::LimaconInnerLoop { a, b, trig }
            | CurveFamily::LimaconDimpled { a, b, trig } => {
                let op = if b < 0.0 { '-' } else { '+' };
                format!("{}{}{}*{}(theta)", a, op, b.abs(), trig)
            },
            CurveFamily::Rose { k, amplitude, trig } => format!("{}*{}({}*theta)", amplitude, trig, k),
            CurveFamily::Generic => return None,
        })
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CurveFamily::Rose { .. } => match self.petals() {
                Some(petals) => write!(f, "rose ({} petals)", petals),
                None => write!(f, "rose"),
            },
            family if family.is_cardioid() => match family.facing() {
                Some(facing) => write!(f, "cardioid ({}-facing)", facing),
                None => write!(f, "cardioid"),
            },
            family => write!(f, "{}", family.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn petal_rule() {
        let petals = (1..=12)
            .map(|k| CurveFamily::Rose { k, amplitude: 1.0, trig: Trig::Cos }.petals().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(petals, vec![1, 4, 3, 8, 5, 12, 7, 16, 9, 20, 11, 24]);

        let rose = |k| CurveFamily::Rose { k, amplitude: 1.0, trig: Trig::Cos };
        assert_eq!(rose(u32::MAX).petals(), Some(u32::MAX));
        assert_eq!(rose(u32::MAX - 1).petals(), None);
    }

    #[test]
    fn cardioid_orientation() {
        let family = CurveFamily::cardioid(2.0, Facing::Down);
        assert_eq!(family, CurveFamily::CardioidDown { amplitude: 2.0 });
        assert!(family.is_cardioid());
        assert_eq!(family.symmetry_axis(), Some(SymmetryAxis::YAxis));
        assert_eq!(family.to_string(), "cardioid (down-facing)");
    }

    #[test]
    fn limacon_orientation() {
        let family = CurveFamily::LimaconInnerLoop { a: 1.0, b: -2.0, trig: Trig::Sin };
        assert!(!family.is_cardioid());
        assert_eq!(family.facing(), Some(Facing::Down));
        assert_eq!(family.symmetry_axis(), Some(SymmetryAxis::YAxis));
        assert_eq!(family.formula().unwrap(), "1-2*sin(theta)");
    }

    #[test]
    fn default_curve() {
        let family = CurveFamily::default_curve();
        assert_eq!(family.petals(), Some(4));
        assert_eq!(family.amplitude(), Some(1.0));
        assert_eq!(family.formula().unwrap(), "1*cos(2*theta)");
        assert_eq!(family.to_string(), "rose (4 petals)");
    }

    #[test]
    fn radius() {
        let cardioid = CurveFamily::CardioidLeft { amplitude: 2.0 };
        assert_eq!(cardioid.radius_at(0.0), Some(0.0));
        assert_eq!(cardioid.radius_at(std::f64::consts::PI), Some(4.0));

        let rose = CurveFamily::Rose { k: 3, amplitude: 2.0, trig: Trig::Cos };
        assert_eq!(rose.radius_at(0.0), Some(2.0));
        assert_eq!(CurveFamily::Generic.radius_at(0.0), None);
    }

    #[test]
    fn generic_has_no_parameters() {
        let family = CurveFamily::Generic;
        assert_eq!(family.amplitude(), None);
        assert_eq!(family.petals(), None);
        assert_eq!(family.symmetry_axis(), None);
        assert_eq!(family.facing(), None);
        assert_eq!(family.formula(), None);
    }
}
