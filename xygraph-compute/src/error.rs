//! Errors produced when binding an expression to the fixed symbol table.

use ariadne::Fmt;
use xygraph_attrs::ErrorKind;
use xygraph_error::{ErrorKind, EXPR};

/// The variable or constant is not part of the symbol table.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this name"],
    help = format!(
        "expressions can use the variable {}, and the constants {} and {}",
        "x".fg(EXPR),
        "pi".fg(EXPR),
        "e".fg(EXPR),
    ),
)]
pub struct UndefinedVariable {
    /// The name that was undefined.
    pub name: String,
}

/// The function is not part of the symbol table.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", self.name),
    labels = ["this function"],
    help = if self.suggestions.is_empty() {
        format!(
            "the available functions are {}",
            ["sin", "cos", "tan", "sqrt", "exp", "log", "abs"]
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// Too many arguments were given to a function call.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("too many arguments were given to the `{}` function", self.name),
    labels = ["this function call", ""],
    help = format!(
        "the `{}` function takes exactly one argument; there are {} argument(s) provided here",
        (&self.name).fg(EXPR),
        self.given
    )
)]
pub struct TooManyArguments {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were given.
    pub given: usize,
}

/// The argument to a function call is missing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument to the `{}` function", self.name),
    labels = ["this function call", ""],
    help = format!("the `{}` function takes exactly one argument", (&self.name).fg(EXPR)),
)]
pub struct MissingArgument {
    /// The name of the function that was called.
    pub name: String,
}
