mod evaluator;
mod tokenizer;
mod validator;

pub use evaluator::{Evaluator, MAX_NESTING_DEPTH};
pub use tokenizer::Tokenizer;
pub use validator::validate;

/// The whitespace accepted around and between tokens. Matches `blank` in `validation.pest`.
pub(crate) fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0B}' | '\u{0C}')
}
