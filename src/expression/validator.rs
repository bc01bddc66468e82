use super::is_blank;
use crate::error::{ExpressionError, Parenthesis};
use log::debug;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./expression/validation.pest"]
struct ValidationGrammar;

/// Rejects structurally broken expressions before any tokenizing or variable lookup happens.
///
/// The checks run against the trimmed text in a fixed order, so an input with several problems
/// reports the first of: emptiness, foreign characters, operands without an operator between
/// them, misplaced operators, unbalanced parentheses.
pub fn validate(expression: &str) -> Result<(), ExpressionError> {
    let trimmed = expression.trim_matches(is_blank);

    if trimmed.is_empty() {
        return Err(ExpressionError::EmptyExpression);
    }

    if let Some(c) = find(Rule::find_invalid_character, trimmed).and_then(|s| s.chars().next()) {
        return Err(ExpressionError::InvalidCharacter(c));
    }

    if let Some(fragment) = find(Rule::find_adjacent_operands, trimmed) {
        return Err(ExpressionError::AdjacentOperandsWithoutOperator {
            fragment: fragment.to_string(),
        });
    }

    if let Some(fragment) = find(Rule::find_misplaced_operator, trimmed) {
        return Err(ExpressionError::InvalidOperatorPlacement {
            fragment: fragment.to_string(),
        });
    }

    check_parentheses(trimmed)?;

    debug!("Expression passed validation: {}", trimmed);
    Ok(())
}

/// Returns the text matched by the first occurrence of the pattern behind `rule`, if any.
fn find(rule: Rule, input: &str) -> Option<&str> {
    ValidationGrammar::parse(rule, input)
        .ok()
        .and_then(|mut pairs| pairs.next())
        .and_then(|search| search.into_inner().next())
        .map(|found| found.as_str())
}

fn check_parentheses(input: &str) -> Result<(), ExpressionError> {
    let mut depth: usize = 0;
    for c in input.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ExpressionError::UnmatchedParenthesis(Parenthesis::Close))?;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ExpressionError::UnmatchedParenthesis(Parenthesis::Open));
    }
    Ok(())
}
