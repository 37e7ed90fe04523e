use crate::{ctxt::Ctxt, eval::Eval};
use xygraph_error::Error;
use xygraph_parser::parser::{expr::Expr, paren::Paren};

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
        }
    }
}

impl Eval for Paren {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        self.expr.eval(ctxt)
    }
}
