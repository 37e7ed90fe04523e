//! Pre-evaluation validation of an expression against the fixed symbol table.
//!
//! Unknown names and wrong arity reflect the expression itself, not a particular sample, so
//! they are rejected here once, before any sample is evaluated. After validation succeeds,
//! element-wise evaluation cannot fail: every remaining "fault" is an IEEE-754 value.

use crate::{
    ctxt::{Ctxt, VARIABLE},
    error::{MissingArgument, TooManyArguments, UndefinedFunction, UndefinedVariable},
};
use xygraph_error::Error;
use xygraph_parser::parser::{expr::Expr, literal::Literal};

/// Walks the expression tree and checks every name and function call against the symbol table.
pub fn validate(expr: &Expr, ctxt: &Ctxt) -> Result<(), Error> {
    for node in expr.post_order_iter() {
        match node {
            Expr::Literal(Literal::Symbol(sym)) => {
                if sym.name != VARIABLE && ctxt.get_var(&sym.name).is_none() {
                    return Err(Error::new(vec![sym.span.clone()], UndefinedVariable {
                        name: sym.name.clone(),
                    }));
                }
            },
            Expr::Call(call) => {
                if ctxt.get_func(&call.name.name).is_none() {
                    return Err(Error::new(vec![call.name.span.clone()], UndefinedFunction {
                        name: call.name.name.clone(),
                        suggestions: ctxt.get_similar_funcs(&call.name.name)
                            .into_iter()
                            .map(|s| s.to_string())
                            .collect(),
                    }));
                }
                match call.args.len() {
                    1 => (),
                    0 => return Err(Error::new(call.outer_span().to_vec(), MissingArgument {
                        name: call.name.name.clone(),
                    })),
                    given => return Err(Error::new(call.outer_span().to_vec(), TooManyArguments {
                        name: call.name.name.clone(),
                        given,
                    })),
                }
            },
            _ => (),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use xygraph_parser::parser::Parser;
    use super::*;

    fn validate_source(source: &str) -> Result<(), Error> {
        let mut parser = Parser::new(source);
        let expr = parser.try_parse_full::<Expr>().unwrap();
        validate(&expr, &Ctxt::default())
    }

    #[test]
    fn accepts_fixed_symbols() {
        assert!(validate_source("2*x+pi*e").is_ok());
        assert!(validate_source("sin(cos(x))").is_ok());
    }

    #[test]
    fn rejects_unknown_name() {
        let err = validate_source("x2").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<UndefinedVariable>().unwrap();
        assert_eq!(kind.name, "x2");
    }

    #[test]
    fn rejects_unknown_function() {
        let err = validate_source("tam(x)").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<UndefinedFunction>().unwrap();
        assert_eq!(kind.suggestions, vec!["tan".to_string()]);
    }

    #[test]
    fn rejects_zero_arguments() {
        let err = validate_source("sin()").unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<MissingArgument>().is_some());
    }

    #[test]
    fn rejects_extra_arguments() {
        let err = validate_source("sin(x,1)").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<TooManyArguments>().unwrap();
        assert_eq!(kind.given, 2);
    }

    #[test]
    fn rejects_unknown_name_inside_call() {
        let err = validate_source("sin(y)").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<UndefinedVariable>().unwrap();
        assert_eq!(kind.name, "y");
    }
}
