use plot_error::Error;
use std::collections::HashMap;
use super::error::{EmptyBinding, MismatchedSampleLength};

/// Returns the canonical spelling of a variable name: lowercase, with every theta glyph spelled
/// `theta`.
fn canonical_name(name: &str) -> String {
    match name {
        "θ" | "ϴ" | "Θ" => "theta".to_string(),
        _ => name.to_lowercase(),
    }
}

/// A mapping from variable names to sample arrays, all of the same length.
///
/// The shared length `N` is fixed by the first non-empty array inserted, and every evaluation
/// against this binding produces `N` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableBinding {
    /// The number of samples every variable has, once one is bound.
    len: Option<usize>,

    /// The samples of each variable.
    vars: HashMap<String, Vec<f64>>,
}

impl VariableBinding {
    /// Creates an empty binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a binding of a single variable.
    pub fn single(name: &str, samples: Vec<f64>) -> Result<Self, Error> {
        let mut binding = Self::new();
        binding.insert(name, samples)?;
        Ok(binding)
    }

    /// Binds a variable to an array of samples, replacing any previous binding of the same name.
    ///
    /// Fails if the array is empty, or if its length differs from the variables already bound.
    pub fn insert(&mut self, name: &str, samples: Vec<f64>) -> Result<(), Error> {
        let name = canonical_name(name);
        if samples.is_empty() {
            return Err(Error::new(Vec::new(), EmptyBinding));
        }

        match self.len {
            Some(len) if len != samples.len() && !(self.vars.len() == 1 && self.vars.contains_key(&name)) => {
                return Err(Error::new(Vec::new(), MismatchedSampleLength {
                    name,
                    expected: len,
                    given: samples.len(),
                }));
            },
            _ => self.len = Some(samples.len()),
        }

        self.vars.insert(name, samples);
        Ok(())
    }

    /// Returns the samples of a variable.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.vars.get(name).map(Vec::as_slice)
    }

    /// Returns true if the variable is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Returns the names of the bound variables.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// The number of samples of every bound variable, `N`.
    ///
    /// Fails with [`EmptyBinding`] if nothing is bound.
    pub fn sample_len(&self) -> Result<usize, Error> {
        self.len.ok_or_else(|| Error::new(Vec::new(), EmptyBinding))
    }
}

impl TryFrom<HashMap<String, Vec<f64>>> for VariableBinding {
    type Error = Error;

    fn try_from(vars: HashMap<String, Vec<f64>>) -> Result<Self, Error> {
        // sorted so that a length mismatch always blames the same variable
        let mut vars = vars.into_iter().collect::<Vec<_>>();
        vars.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut binding = Self::new();
        for (name, samples) in vars {
            binding.insert(&name, samples)?;
        }
        Ok(binding)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn canonical_names() {
        let binding = VariableBinding::single("θ", vec![0.0, 1.0]).unwrap();
        assert_eq!(binding.get("theta"), Some([0.0, 1.0].as_slice()));

        let binding = VariableBinding::single("X", vec![1.0]).unwrap();
        assert!(binding.contains("x"));
    }

    #[test]
    fn shared_length() {
        let mut binding = VariableBinding::new();
        binding.insert("x", vec![1.0, 2.0, 3.0]).unwrap();
        binding.insert("y", vec![4.0, 5.0, 6.0]).unwrap();
        assert_eq!(binding.sample_len().unwrap(), 3);

        let err = binding.insert("z", vec![1.0]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MismatchedSampleLength>(),
            Some(&MismatchedSampleLength { name: "z".to_string(), expected: 3, given: 1 }),
        );
    }

    #[test]
    fn rebinding_the_only_variable() {
        let mut binding = VariableBinding::single("x", vec![1.0, 2.0]).unwrap();
        binding.insert("x", vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(binding.sample_len().unwrap(), 3);
    }

    #[test]
    fn empty() {
        assert!(VariableBinding::new().sample_len().unwrap_err().is::<EmptyBinding>());
        assert!(VariableBinding::single("x", Vec::new()).unwrap_err().is::<EmptyBinding>());
    }

    #[test]
    fn from_map() {
        let binding = VariableBinding::try_from(HashMap::from([
            ("x".to_string(), vec![1.0, 2.0]),
            ("y".to_string(), vec![1.0]),
        ]));
        let err = binding.unwrap_err();
        assert_eq!(
            err.downcast_ref::<MismatchedSampleLength>(),
            Some(&MismatchedSampleLength { name: "y".to_string(), expected: 2, given: 1 }),
        );
    }
}
