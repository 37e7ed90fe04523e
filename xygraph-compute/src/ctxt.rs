use levenshtein::levenshtein;
use std::collections::HashMap;
use crate::{consts, funcs::{self, Builtin}};

/// The name of the free variable in expressions.
pub const VARIABLE: &str = "x";

/// A context to use when evaluating an expression, containing the variables and functions that
/// can be used within the expression.
///
/// The symbol table is fixed: the constants `pi` and `e`, plus the free variable `x`, which is
/// bound to each sample value in turn during evaluation. Nothing the user types can add to it.
#[derive(Debug, Clone)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,

    /// The functions in the context.
    funcs: &'static HashMap<&'static str, Builtin>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("pi".to_string(), consts::PI),
                ("e".to_string(), consts::E),
            ]),
            funcs: funcs::all(),
        }
    }
}

impl Ctxt {
    /// Creates a context with the fixed symbol table.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context. Used to bind the free variable to the current sample.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Get a function in the context.
    pub fn get_func(&self, name: &str) -> Option<Builtin> {
        self.funcs.get(name).copied()
    }

    /// Returns all functions in the context with a name similar to the given name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&'static str> {
        let mut similar = self.funcs
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .copied()
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_constants() {
        let ctxt = Ctxt::default();
        assert_eq!(ctxt.get_var("pi"), Some(std::f64::consts::PI));
        assert_eq!(ctxt.get_var("e"), Some(std::f64::consts::E));
        assert_eq!(ctxt.get_var("tau"), None);
    }

    #[test]
    fn variable_binding() {
        let mut ctxt = Ctxt::default();
        assert_eq!(ctxt.get_var(VARIABLE), None);
        ctxt.add_var(VARIABLE, 2.5);
        assert_eq!(ctxt.get_var(VARIABLE), Some(2.5));
    }

    #[test]
    fn similar_funcs() {
        let ctxt = Ctxt::default();
        assert_eq!(ctxt.get_similar_funcs("sim"), vec!["sin"]);
        assert!(ctxt.get_similar_funcs("gamma").is_empty());
    }
}
