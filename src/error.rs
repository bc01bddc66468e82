use std::fmt;
use std::num::ParseFloatError;
use thiserror::Error;

/// Which side of a parenthesis pair is left without a partner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parenthesis {
    Open,
    Close,
}

impl fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parenthesis::Open => write!(f, "opening"),
            Parenthesis::Close => write!(f, "closing"),
        }
    }
}

/// Failure raised by a [`VariableSource`](crate::variables::VariableSource) when it cannot
/// produce a number for a requested name.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before a value was supplied")]
    Exhausted,
    #[error("'{input}' is not a valid number")]
    Malformed {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("no value available for '{0}'")]
    Missing(String),
}

/// Everything that can go wrong between receiving the raw text and producing a number.
#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error("Expression cannot be empty")]
    EmptyExpression,

    #[error("Expression contains invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("Expression contains two operands without an operator: '{fragment}'")]
    AdjacentOperandsWithoutOperator { fragment: String },

    #[error("Expression contains invalid operator usage: '{fragment}'")]
    InvalidOperatorPlacement { fragment: String },

    #[error("Expression contains unmatched {0} parenthesis")]
    UnmatchedParenthesis(Parenthesis),

    #[error("Could not obtain a value for variable {name}")]
    VariableInputError {
        name: String,
        #[source]
        source: SourceError,
    },

    #[error("'{literal}' is not a valid number")]
    NumberFormatError {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Missing closing parenthesis")]
    MissingParenthesis,

    #[error("Variable {0} is undefined")]
    UndefinedVariable(String),

    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    #[error("Unexpected end of expression")]
    UnexpectedEndOfExpression,

    #[error("Expression is nested more than {0} levels deep")]
    NestingTooDeep(usize),
}

/// The only error `evaluate` hands back to callers. It always carries the text that was
/// rejected; the specific reason is available as [`InvalidExpression::cause`] or through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("Invalid expression: {expression}")]
pub struct InvalidExpression {
    pub expression: String,
    #[source]
    pub cause: ExpressionError,
}

impl InvalidExpression {
    pub fn new(expression: &str, cause: ExpressionError) -> Self {
        Self {
            expression: expression.to_string(),
            cause,
        }
    }
}
