//! The evaluation pipeline: normalize, parse, validate, sample, evaluate, autorange.
//!
//! [`plot_data`] is the single entry point the command line, the interactive session, and tests
//! all call.

use ariadne::Source;
use crate::{
    ctxt::Ctxt,
    eval::eval_over,
    sample::{autorange, sample, RangeError, DEFAULT_WINDOW},
    validate::validate,
};
use xygraph_parser::{normalizer::normalize, parser::{expr::Expr, Parser}};

/// The data needed to draw one curve: the sample vector, the matching result vector, and the
/// derived display range.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// The canonical expression that was evaluated.
    pub expression: String,

    /// The sample values along the x axis.
    pub xs: Vec<f64>,

    /// The evaluated values, one per sample; entries are finite, NaN, or infinite.
    pub ys: Vec<f64>,

    /// The y display range, padded with a margin. Falls back to the default window when no
    /// value is finite.
    pub range: (f64, f64),
}

impl PlotData {
    /// Returns the number of finite values in the result vector.
    pub fn finite_count(&self) -> usize {
        self.ys.iter().filter(|y| y.is_finite()).count()
    }
}

/// An error that aborted the evaluation pipeline.
#[derive(Debug)]
pub enum Error {
    /// The equation could not be normalized, parsed, or bound to the symbol table.
    Syntax {
        /// The text the error's spans refer to: the raw equation for normalization errors, the
        /// canonical expression otherwise.
        source: String,

        /// The underlying error.
        error: xygraph_error::Error,
    },

    /// The requested sampling range was invalid.
    Range(RangeError),
}

impl Error {
    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's report type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self) {
        match self {
            Error::Syntax { source, error } => {
                let report = error.build_report("input");
                report.eprint(("input", Source::from(source.as_str()))).unwrap();
            },
            Error::Range(error) => eprintln!("error: {}", error),
        }
    }
}

impl From<RangeError> for Error {
    fn from(error: RangeError) -> Self {
        Self::Range(error)
    }
}

/// Runs the whole pipeline for one equation over `[x_min, x_max]` with `points` samples.
pub fn plot_data(equation: &str, x_min: f64, x_max: f64, points: usize) -> Result<PlotData, Error> {
    let expression = normalize(equation)
        .map_err(|error| Error::Syntax { source: equation.to_string(), error: error.into() })?;
    let ast = Parser::new(&expression)
        .try_parse_full::<Expr>()
        .map_err(|error| Error::Syntax { source: expression.clone(), error: error.into() })?;

    let mut ctxt = Ctxt::default();
    validate(&ast, &ctxt)
        .map_err(|error| Error::Syntax { source: expression.clone(), error })?;

    let xs = sample(x_min, x_max, points)?;
    let ys = eval_over(&ast, &mut ctxt, &xs)
        .map_err(|error| Error::Syntax { source: expression.clone(), error })?;
    let range = autorange(&ys).unwrap_or(DEFAULT_WINDOW);

    Ok(PlotData { expression, xs, ys, range })
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn round_trip() {
        let data = plot_data("y = x^2", -2.0, 2.0, 5).unwrap();
        assert_eq!(data.expression, "x**2");
        assert_eq!(data.xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(data.ys, vec![4.0, 1.0, 0.0, 1.0, 4.0]);
        assert_float_absolute_eq!(data.range.0, -0.4);
        assert_float_absolute_eq!(data.range.1, 4.4);
        assert_eq!(data.finite_count(), 5);
    }

    #[test]
    fn double_equals_is_rejected() {
        let err = plot_data("y=sin(x)=1", -1.0, 1.0, 10).unwrap_err();
        match err {
            Error::Syntax { error, .. } => {
                assert!(
                    error.kind.as_any()
                        .downcast_ref::<xygraph_parser::parser::error::kind::MultipleEquals>()
                        .is_some()
                );
            },
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn faults_become_values() {
        let data = plot_data("1/x", -1.0, 1.0, 3).unwrap();
        assert_eq!(data.ys[0], -1.0);
        assert_eq!(data.ys[1], f64::INFINITY);
        assert_eq!(data.ys[2], 1.0);
        // the infinite sample is excluded from the display range
        assert_float_absolute_eq!(data.range.0, -1.2);
        assert_float_absolute_eq!(data.range.1, 1.2);
    }

    #[test]
    fn all_non_finite_falls_back_to_default_window() {
        let data = plot_data("sqrt(x)", -10.0, -1.0, 10).unwrap();
        assert_eq!(data.finite_count(), 0);
        assert_eq!(data.range, DEFAULT_WINDOW);
    }

    #[test]
    fn invalid_range_is_rejected() {
        let err = plot_data("x", 1.0, -1.0, 10).unwrap_err();
        assert!(matches!(err, Error::Range(RangeError::EmptyRange { .. })));
    }

    #[test]
    fn empty_right_hand_side_is_a_syntax_error() {
        let err = plot_data("y=", -1.0, 1.0, 10).unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
    }
}
