use crate::{ctxt::Ctxt, eval::Eval};
use xygraph_error::Error;
use xygraph_parser::parser::{token::op::UnaryOpKind, unary::Unary};

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let operand = self.operand.eval(ctxt)?;
        match self.op.kind {
            UnaryOpKind::Neg => Ok(-operand),
        }
    }
}
