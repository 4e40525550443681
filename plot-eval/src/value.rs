/// The result of evaluating part of a formula: a single scalar, standing for the same value at
/// every sample, or one value per sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A value that does not depend on any variable.
    Scalar(f64),

    /// One value per sample.
    Array(Vec<f64>),
}

impl Value {
    /// Applies a function to every value.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Value {
        match self {
            Value::Scalar(x) => Value::Scalar(f(x)),
            Value::Array(mut xs) => {
                xs.iter_mut().for_each(|x| *x = f(*x));
                Value::Array(xs)
            },
        }
    }

    /// Combines two values elementwise, broadcasting scalars against arrays.
    ///
    /// Arrays are expected to have the same length; this holds for every value produced from one
    /// [`VariableBinding`](crate::binding::VariableBinding).
    pub fn zip_with(self, other: Value, f: impl Fn(f64, f64) -> f64) -> Value {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(f(a, b)),
            (Value::Scalar(a), Value::Array(mut bs)) => {
                bs.iter_mut().for_each(|b| *b = f(a, *b));
                Value::Array(bs)
            },
            (Value::Array(mut xs), Value::Scalar(b)) => {
                xs.iter_mut().for_each(|a| *a = f(*a, b));
                Value::Array(xs)
            },
            (Value::Array(mut xs), Value::Array(bs)) => {
                xs.iter_mut().zip(bs).for_each(|(a, b)| *a = f(*a, b));
                Value::Array(xs)
            },
        }
    }

    /// Converts the value into exactly `len` samples, repeating a scalar.
    pub fn into_samples(self, len: usize) -> Vec<f64> {
        match self {
            Value::Scalar(x) => vec![x; len],
            Value::Array(xs) => xs,
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(x)
    }
}

impl From<Vec<f64>> for Value {
    fn from(xs: Vec<f64>) -> Self {
        Value::Array(xs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn broadcast() {
        let sum = Value::from(1.0).zip_with(vec![1.0, 2.0].into(), |a, b| a + b);
        assert_eq!(sum, Value::Array(vec![2.0, 3.0]));

        let quotient = Value::from(vec![1.0, 0.0]).zip_with(0.0.into(), |a, b| a / b);
        let quotient = quotient.into_samples(2);
        assert_eq!(quotient[0], f64::INFINITY);
        assert!(quotient[1].is_nan());
    }

    #[test]
    fn scalar_samples() {
        assert_eq!(Value::from(2.0).map(|x| x * x).into_samples(3), vec![4.0; 3]);
    }
}
