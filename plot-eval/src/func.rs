use std::fmt;

/// A function in the closed vocabulary. Every function takes one argument and is applied
/// elementwise.
///
/// Domain errors follow IEEE 754: `log` of a negative number and `sqrt` of a negative number are
/// NaN, `log(0)` is negative infinity. They are never reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
    Sqrt,
    Abs,
}

impl Func {
    /// All functions, in the order they are listed to the user.
    pub const ALL: [Func; 7] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Exp,
        Func::Log,
        Func::Sqrt,
        Func::Abs,
    ];

    /// The canonical name of the function.
    pub fn name(&self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Exp => "exp",
            Func::Log => "log",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }

    /// The number of arguments the function takes.
    pub fn arity(&self) -> usize {
        1
    }

    /// Returns true for `sin`, `cos`, and `tan`.
    pub fn is_trig(&self) -> bool {
        matches!(self, Func::Sin | Func::Cos | Func::Tan)
    }

    /// Applies the function to a single value.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Exp => x.exp(),
            Func::Log => x.ln(),
            Func::Sqrt => x.sqrt(),
            Func::Abs => x.abs(),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn values() {
        assert_float_absolute_eq!(Func::Cos.apply(std::f64::consts::PI), -1.0);
        assert_float_absolute_eq!(Func::Log.apply(std::f64::consts::E), 1.0);
        assert_float_absolute_eq!(Func::Abs.apply(-2.5), 2.5);
    }

    #[test]
    fn domain_errors_are_non_finite() {
        assert!(Func::Log.apply(-1.0).is_nan());
        assert_eq!(Func::Log.apply(0.0), f64::NEG_INFINITY);
        assert!(Func::Sqrt.apply(-4.0).is_nan());
    }
}
