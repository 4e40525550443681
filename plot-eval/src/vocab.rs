use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::{collections::HashMap, f64::consts};
use super::func::Func;

/// The standard vocabulary, built on first use.
static STANDARD: Lazy<Vocabulary> = Lazy::new(|| {
    let mut funcs = Func::ALL
        .iter()
        .map(|func| (func.name(), *func))
        .collect::<HashMap<_, _>>();
    funcs.insert("ln", Func::Log);

    Vocabulary {
        funcs,
        consts: HashMap::from([
            ("e", consts::E),
            ("pi", consts::PI),
        ]),
    }
});

/// The closed table of functions and constants a formula may refer to.
///
/// There is no way to add entries to a vocabulary after it is built, so evaluating a formula can
/// only ever dispatch into this table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Function names, including aliases, mapped to the function they call.
    funcs: HashMap<&'static str, Func>,

    /// Named constants.
    consts: HashMap<&'static str, f64>,
}

impl Vocabulary {
    /// The standard vocabulary: `sin cos tan exp log sqrt abs` (with `ln` as an alias of `log`)
    /// and the constants `pi` and `e`.
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    /// Looks up a function by name.
    pub fn func(&self, name: &str) -> Option<Func> {
        self.funcs.get(name).copied()
    }

    /// Looks up a constant by name.
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.consts.get(name).copied()
    }

    /// Returns the names of all functions with a name similar to the given name, sorted.
    pub fn similar_funcs(&self, name: &str) -> Vec<String> {
        similar(self.funcs.keys().copied(), name)
    }

    /// Returns the names of all constants with a name similar to the given name, sorted.
    pub fn similar_consts(&self, name: &str) -> Vec<String> {
        similar(self.consts.keys().copied(), name)
    }
}

/// Returns the candidates within an edit distance of 2 of `name`, sorted and deduplicated.
pub(crate) fn similar<'a>(candidates: impl IntoIterator<Item = &'a str>, name: &str) -> Vec<String> {
    let mut names = candidates
        .into_iter()
        .filter(|candidate| *candidate != name && levenshtein(candidate, name) <= 2)
        .map(str::to_owned)
        .collect::<Vec<_>>();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn lookup() {
        let vocab = Vocabulary::standard();
        assert_eq!(vocab.func("ln"), Some(Func::Log));
        assert_eq!(vocab.func("cos"), Some(Func::Cos));
        assert_eq!(vocab.func("eval"), None);
        assert_eq!(vocab.func("__import__"), None);
        assert_eq!(vocab.constant("pi"), Some(consts::PI));
        assert_eq!(vocab.constant("tau"), None);
    }

    #[test]
    fn suggestions() {
        let vocab = Vocabulary::standard();
        assert_eq!(vocab.similar_funcs("sine"), vec!["sin".to_string()]);
        assert_eq!(vocab.similar_funcs("cot"), vec!["cos".to_string(), "log".to_string()]);
        assert!(vocab.similar_funcs("__import__").is_empty());
    }
}
