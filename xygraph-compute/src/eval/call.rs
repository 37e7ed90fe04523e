use crate::{
    ctxt::Ctxt,
    error::{MissingArgument, TooManyArguments, UndefinedFunction},
    eval::Eval,
};
use xygraph_error::Error;
use xygraph_parser::parser::call::Call;

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let func = ctxt.get_func(&self.name.name)
            .ok_or_else(|| Error::new(vec![self.name.span.clone()], UndefinedFunction {
                name: self.name.name.clone(),
                suggestions: ctxt.get_similar_funcs(&self.name.name)
                    .into_iter()
                    .map(|s| s.to_string())
                    .collect(),
            }))?;

        match self.args.as_slice() {
            [arg] => Ok(func(arg.eval(ctxt)?)),
            [] => Err(Error::new(self.outer_span().to_vec(), MissingArgument {
                name: self.name.name.clone(),
            })),
            args => Err(Error::new(self.outer_span().to_vec(), TooManyArguments {
                name: self.name.name.clone(),
                given: args.len(),
            })),
        }
    }
}
