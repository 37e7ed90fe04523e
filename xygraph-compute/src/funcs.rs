//! The builtin functions available to expressions.
//!
//! Every builtin takes exactly one argument and is a plain `f64 -> f64` mapping; domain errors
//! (such as `sqrt` of a negative number or `log` of a non-positive number) follow IEEE-754
//! semantics and produce NaN rather than failing. `log` is the natural logarithm.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A builtin function available for use in expressions. All builtins take exactly one argument.
pub type Builtin = fn(f64) -> f64;

static FUNCS: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    macro_rules! build {
        ($($name:literal $func:expr),* $(,)?) => {
            [
                $(
                    ($name, $func as Builtin),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "sin" f64::sin,
        "cos" f64::cos,
        "tan" f64::tan,
        "sqrt" f64::sqrt,
        "exp" f64::exp,
        "log" f64::ln,
        "abs" f64::abs,
    }
});

/// Returns the registry of all builtin functions, keyed by name.
pub fn all() -> &'static HashMap<&'static str, Builtin> {
    &FUNCS
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn registry_is_complete() {
        let mut names = all().keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        assert_eq!(names, ["abs", "cos", "exp", "log", "sin", "sqrt", "tan"]);
    }

    #[test]
    fn log_is_natural() {
        let log = all()["log"];
        assert_float_absolute_eq!(log(crate::consts::E), 1.0);
    }

    #[test]
    fn domain_errors_are_nan() {
        assert!(all()["sqrt"](-1.0).is_nan());
        assert!(all()["log"](-1.0).is_nan());
        assert!(all()["log"](0.0).is_infinite());
    }
}
