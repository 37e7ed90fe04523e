use crate::{ctxt::Ctxt, error::UndefinedVariable, eval::Eval};
use xygraph_error::Error;
use xygraph_parser::parser::literal::Literal;

impl Eval for Literal {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Literal::Number(num) => Ok(num.value),
            Literal::Symbol(sym) => ctxt.get_var(&sym.name)
                .ok_or_else(|| Error::new(vec![sym.span.clone()], UndefinedVariable {
                    name: sym.name.clone(),
                })),
        }
    }
}
