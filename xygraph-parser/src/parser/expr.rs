use std::ops::Range;
use crate::{
    parser::{
        binary::Binary,
        call::Call,
        error::{kind, Error},
        iter::ExprIter,
        literal::Literal,
        paren::Paren,
        token::CloseParen,
        unary::Unary,
        Parse,
        Parser,
        Precedence,
    },
    try_parse_catch_fatal,
};

/// Represents an arithmetic expression over the variable `x`.
///
/// An expression is an owned tree built once per submission; evaluating it at a sample value
/// reduces the tree to a single `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value, such as `2.5` or `pi`.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `sin(x)`.
    Call(Call),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if input.clone().try_parse::<CloseParen>().is_ok() {
            return Err(input.error_fatal(kind::UnclosedParenthesis { opening: false }));
        }

        let lhs = input.try_parse_with_fn(Unary::parse_or_lower)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

/// Represents a primary expression.
///
/// Primary expressions are the simplest expressions, and are the building blocks of more complex
/// expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `abs(-1)`.
    Call(Call),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
            Primary::Call(call) => call.span(),
        }
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // function calls can overlap with literals, so we need to try parsing a function call
        // first
        let _ = try_parse_catch_fatal!(input.try_parse::<Call>().map(Self::Call));
        let _ = try_parse_catch_fatal!(input.try_parse::<Literal>().map(Self::Literal));

        input.try_parse::<Paren>().map(Self::Paren)
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
            Primary::Call(call) => Self::Call(call),
        }
    }
}
