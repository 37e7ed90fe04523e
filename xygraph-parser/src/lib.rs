//! Normalizer, tokenizer, and parser for single-variable equations.
//!
//! Raw input such as `y = x^2` or `2sin(x)` is first rewritten into a canonical expression
//! string by the [`normalizer`] (whitespace stripped, the `y =` prefix removed, `^` rewritten to
//! `**`, implicit multiplication made explicit). The canonical string is then tokenized and
//! parsed into an owned [`Expr`](parser::expr::Expr) tree, ready to be evaluated.
//!
//! Parsing never executes anything: the output is a plain data structure over numbers, the
//! variable `x`, and named symbols. Name resolution against the fixed function and constant set
//! is the evaluator's job.

pub mod normalizer;
pub mod parser;
pub mod tokenizer;
