pub mod binary;
pub mod call;
pub mod error;
pub mod expr;
pub mod iter;
pub mod literal;
pub mod paren;
pub mod token;
pub mod unary;

use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use xygraph_error::ErrorKind;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. The first function that succeeds is used to parse the value.
///
/// This function can also catch fatal errors and immediately short-circuit the parsing
/// process.
///
/// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
/// value is returned. Otherwise, the stream is left unchanged and the error of the last
/// attempted parsing function is returned.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser, or return it
                err => err,
            }
        )+
    }};
}

/// A high-level parser for canonical expressions. This is the type to use to parse an arbitrary
/// expression string into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source if the cursor
    /// is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source if the
    /// cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source if the cursor is at the
    /// end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Moves the cursor to the position of another parser, usually one that was cloned to peek
    /// ahead in the stream.
    pub(crate) fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a certain token.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// values are returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    if values.is_empty() {
                        self.cursor = start;
                        return Err(err);
                    } else {
                        return Ok(values);
                    }
                },
            }

            match self.current_token() {
                Some(token) if token.kind == delimiter => {
                    self.cursor += 1;
                },
                _ => return Ok(values),
            }
        }
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        while self.current_token().is_some_and(|token| token.is_whitespace()) {
            self.cursor += 1;
        }
        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The operation is left-associative: `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The operation is right-associative: `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of exponentiation (`**`).
    Exp,

    /// Precedence of unary negation (`-`). Negation binds tighter than exponentiation, so
    /// `-2**2` is `(-2)**2`.
    Neg,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use binary::Binary;
    use call::Call;
    use expr::Expr;
    use literal::{Literal, LitNum, LitSym};
    use paren::Paren;
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};
    use unary::Unary;

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Number(LitNum {
            value: 16.0,
            span: 0..2,
        })));
    }

    #[test]
    fn literal_float() {
        let mut parser = Parser::new("3.14");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Number(LitNum {
            value: 3.14,
            span: 0..4,
        })));
    }

    #[test]
    fn literal_symbol() {
        let mut parser = Parser::new("pi");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Symbol(LitSym {
            name: "pi".to_string(),
            span: 0..2,
        })));
    }

    #[test]
    fn binary_left_associativity() {
        let mut parser = Parser::new("3*x*5");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 0..1,
                }))),
                op: BinOp {
                    kind: BinOpKind::Mul,
                    span: 1..2,
                },
                rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 2..3,
                }))),
                span: 0..3,
            })),
            op: BinOp {
                kind: BinOpKind::Mul,
                span: 3..4,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 5.0,
                span: 4..5,
            }))),
            span: 0..5,
        }));
    }

    #[test]
    fn binary_mixed_precedence() {
        let mut parser = Parser::new("3+4*x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 3.0,
                span: 0..1,
            }))),
            op: BinOp {
                kind: BinOpKind::Add,
                span: 1..2,
            },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 4.0,
                    span: 2..3,
                }))),
                op: BinOp {
                    kind: BinOpKind::Mul,
                    span: 3..4,
                },
                rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 4..5,
                }))),
                span: 2..5,
            })),
            span: 0..5,
        }));
    }

    #[test]
    fn power_right_associativity() {
        let mut parser = Parser::new("2**3**2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 2.0,
                span: 0..1,
            }))),
            op: BinOp {
                kind: BinOpKind::Exp,
                span: 1..3,
            },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 3..4,
                }))),
                op: BinOp {
                    kind: BinOpKind::Exp,
                    span: 4..6,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 2.0,
                    span: 6..7,
                }))),
                span: 3..7,
            })),
            span: 0..7,
        }));
    }

    #[test]
    fn power_node_from_caret() {
        // the tokenizer accepts the raw `^` spelling as well
        let mut parser = Parser::new("x^2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "x".to_string(),
                span: 0..1,
            }))),
            op: BinOp {
                kind: BinOpKind::Exp,
                span: 1..2,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 2.0,
                span: 2..3,
            }))),
            span: 0..3,
        }));
    }

    #[test]
    fn negation_binds_tighter_than_power() {
        let mut parser = Parser::new("-2**2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Unary(Unary {
                operand: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 2.0,
                    span: 1..2,
                }))),
                op: UnaryOp {
                    kind: UnaryOpKind::Neg,
                    span: 0..1,
                },
                span: 0..2,
            })),
            op: BinOp {
                kind: BinOpKind::Exp,
                span: 2..4,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 2.0,
                span: 4..5,
            }))),
            span: 0..5,
        }));
    }

    #[test]
    fn double_negation() {
        let mut parser = Parser::new("--3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Unary(Unary {
                operand: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 2..3,
                }))),
                op: UnaryOp {
                    kind: UnaryOpKind::Neg,
                    span: 1..2,
                },
                span: 1..3,
            })),
            op: UnaryOp {
                kind: UnaryOpKind::Neg,
                span: 0..1,
            },
            span: 0..3,
        }));
    }

    #[test]
    fn parenthesized() {
        let mut parser = Parser::new("(1+2)*x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Paren(Paren {
                expr: Box::new(Expr::Binary(Binary {
                    lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 1.0,
                        span: 1..2,
                    }))),
                    op: BinOp {
                        kind: BinOpKind::Add,
                        span: 2..3,
                    },
                    rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 2.0,
                        span: 3..4,
                    }))),
                    span: 1..4,
                })),
                span: 0..5,
            })),
            op: BinOp {
                kind: BinOpKind::Mul,
                span: 5..6,
            },
            rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "x".to_string(),
                span: 6..7,
            }))),
            span: 0..7,
        }));
    }

    #[test]
    fn function_call() {
        let mut parser = Parser::new("sin(x)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Call(Call {
            name: LitSym {
                name: "sin".to_string(),
                span: 0..3,
            },
            args: vec![
                Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 4..5,
                })),
            ],
            span: 0..6,
            paren_span: 3..6,
        }));
    }

    #[test]
    fn empty_expression() {
        let mut parser = Parser::new("");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::UnexpectedEof>().is_some());
    }

    #[test]
    fn unclosed_parenthesis() {
        let mut parser = Parser::new("2*(x+1");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::UnclosedParenthesis>().is_some());
    }

    #[test]
    fn stray_close_parenthesis() {
        let mut parser = Parser::new(")x");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::UnclosedParenthesis>().is_some());
    }

    #[test]
    fn trailing_garbage() {
        let mut parser = Parser::new("1+2$");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::ExpectedEof>().is_some());
    }

    #[test]
    fn operator_in_invalid_position() {
        let mut parser = Parser::new("*2");
        assert!(parser.try_parse_full::<Expr>().is_err());
    }
}
