pub mod error;
pub mod expression;
pub mod variables;

pub use error::{ExpressionError, InvalidExpression, SourceError};
pub use expression::Evaluator;
pub use variables::{ConsoleSource, VariableSource, VariableTable};

/// Evaluates `expression` once against a fixed set of variable values.
///
/// Nothing is prompted for: a variable missing from `context` fails the evaluation with
/// [`ExpressionError::VariableInputError`].
pub fn evaluate_expression(
    expression: &str,
    context: &std::collections::HashMap<String, f64>,
) -> Result<f64, InvalidExpression> {
    let mut evaluator = Evaluator::new(context.clone());
    evaluator.evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_evaluate_with_context() {
        let context = HashMap::from([("price".to_string(), 100.0), ("volume".to_string(), 20.0)]);

        assert_eq!(
            evaluate_expression("price + 20 * volume", &context).unwrap(),
            500.0
        );
        assert_eq!(
            evaluate_expression("(price + 10) * (volume - 5)", &context).unwrap(),
            1650.0
        );
    }

    #[test]
    fn test_missing_context_value() {
        let context = HashMap::from([("price".to_string(), 60.0)]);
        let err = evaluate_expression("price * volume", &context).unwrap_err();

        assert_eq!(err.expression, "price * volume");
        assert!(matches!(
            err.cause,
            ExpressionError::VariableInputError { ref name, .. } if name == "volume"
        ));
    }
}
