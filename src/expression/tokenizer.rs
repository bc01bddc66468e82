use super::is_blank;
use crate::error::ExpressionError;

/// Character cursor over an expression with its whitespace stripped.
///
/// Numbers and names are read on demand by the evaluator; there is no separate token stream.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    chars: Vec<char>,
    position: usize,
}

impl Tokenizer {
    pub fn new(expression: &str) -> Self {
        Self {
            chars: expression.chars().filter(|c| !is_blank(*c)).collect(),
            position: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.chars.len()
    }

    /// The character under the cursor, or `None` once the input is exhausted.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    /// Consumes the longest run of digits and `.` and parses it as an `f64`.
    pub fn parse_number(&mut self) -> Result<f64, ExpressionError> {
        let literal = self.take_while(|c| c.is_ascii_digit() || c == '.');
        literal
            .parse::<f64>()
            .map_err(|source| ExpressionError::NumberFormatError { literal, source })
    }

    /// Consumes the longest run of ASCII letters. Digits never belong to a name.
    pub fn parse_name(&mut self) -> String {
        self.take_while(|c| c.is_ascii_alphabetic())
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.peek().is_some_and(&predicate) {
            self.position += 1;
        }
        self.chars[start..self.position].iter().collect()
    }
}
