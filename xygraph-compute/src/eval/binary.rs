use crate::{ctxt::Ctxt, eval::Eval};
use xygraph_error::Error;
use xygraph_parser::parser::{binary::Binary, token::op::BinOpKind};

/// Evaluates the binary operation given the operator and the two operands.
///
/// All operations follow IEEE-754 semantics: `k/0` is ±infinity, `0/0` is NaN, and a negative
/// base raised to a non-integer exponent is NaN.
pub(crate) fn eval_operands(op: BinOpKind, left: f64, right: f64) -> f64 {
    match op {
        BinOpKind::Exp => left.powf(right),
        BinOpKind::Mul => left * right,
        BinOpKind::Div => left / right,
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
    }
}

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;
        Ok(eval_operands(self.op.kind, left, right))
    }
}
