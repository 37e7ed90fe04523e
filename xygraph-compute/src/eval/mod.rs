mod binary;
mod call;
mod expr;
mod literal;
mod unary;

use crate::ctxt::{Ctxt, VARIABLE};
use xygraph_error::Error;
use xygraph_parser::parser::expr::Expr;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    ///
    /// Arithmetic follows IEEE-754 `f64` semantics, so a "failed" operation such as division by
    /// zero produces a NaN or infinite *value*, never an error. The only errors this can return
    /// are name and arity errors, which [`validate`](crate::validate::validate) rejects ahead of
    /// time.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;
}

/// Evaluates the expression element-wise over the given sample vector, binding each sample to
/// the free variable in turn.
///
/// The output has the same length as `samples`; entries are finite, NaN, or infinite values.
pub fn eval_over(expr: &Expr, ctxt: &mut Ctxt, samples: &[f64]) -> Result<Vec<f64>, Error> {
    let mut values = Vec::with_capacity(samples.len());
    for &sample in samples {
        ctxt.add_var(VARIABLE, sample);
        values.push(expr.eval(ctxt)?);
    }
    Ok(values)
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use xygraph_parser::parser::Parser;
    use super::*;

    /// Parses and evaluates the given canonical expression at the given value of `x`.
    fn eval_at(source: &str, x: f64) -> f64 {
        let mut parser = Parser::new(source);
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let mut ctxt = Ctxt::default();
        ctxt.add_var(VARIABLE, x);
        expr.eval(&ctxt).unwrap()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval_at("1+2", 0.0), 3.0);
    }

    #[test]
    fn binary_precedence() {
        assert_eq!(eval_at("1+2*3", 0.0), 7.0);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval_at("((1+9)/5)*3", 0.0), 6.0);
    }

    #[test]
    fn power_right_associativity() {
        assert_eq!(eval_at("2**3**2", 0.0), 512.0);
    }

    #[test]
    fn negation_binds_tighter_than_power() {
        assert_eq!(eval_at("-2**2", 0.0), 4.0);
    }

    #[test]
    fn variable_substitution() {
        assert_eq!(eval_at("x**2", 3.0), 9.0);
    }

    #[test]
    fn constants() {
        assert_float_absolute_eq!(eval_at("sin(pi/2)", 0.0), 1.0);
        assert_float_absolute_eq!(eval_at("log(e)", 0.0), 1.0);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(eval_at("1/x", 0.0), f64::INFINITY);
        assert_eq!(eval_at("-1/x", 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn zero_over_zero_is_nan() {
        assert!(eval_at("0/x", 0.0).is_nan());
    }

    #[test]
    fn negative_sqrt_is_nan() {
        assert!(eval_at("sqrt(x)", -4.0).is_nan());
    }

    #[test]
    fn fractional_power_of_negative_is_nan() {
        assert!(eval_at("x**0.5", -2.0).is_nan());
    }

    #[test]
    fn undefined_variable() {
        let mut parser = Parser::new("x+q");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let mut ctxt = Ctxt::default();
        ctxt.add_var(VARIABLE, 1.0);
        let err = expr.eval(&ctxt).unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<crate::error::UndefinedVariable>().is_some());
    }

    #[test]
    fn undefined_function() {
        let mut parser = Parser::new("sim(x)");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let mut ctxt = Ctxt::default();
        ctxt.add_var(VARIABLE, 1.0);
        let err = expr.eval(&ctxt).unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<crate::error::UndefinedFunction>().unwrap();
        assert_eq!(kind.suggestions, vec!["sin".to_string()]);
    }

    #[test]
    fn eval_over_binds_each_sample() {
        let mut parser = Parser::new("x**2");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let mut ctxt = Ctxt::default();
        let values = eval_over(&expr, &mut ctxt, &[-2.0, -1.0, 0.0, 1.0, 2.0]).unwrap();
        assert_eq!(values, vec![4.0, 1.0, 0.0, 1.0, 4.0]);
    }

    #[test]
    fn eval_over_keeps_going_past_faults() {
        let mut parser = Parser::new("1/x");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let mut ctxt = Ctxt::default();
        let values = eval_over(&expr, &mut ctxt, &[-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(values[0], -1.0);
        assert_eq!(values[1], f64::INFINITY);
        assert_eq!(values[2], 1.0);
    }
}
