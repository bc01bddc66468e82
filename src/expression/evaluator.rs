use crate::error::{ExpressionError, InvalidExpression};
use crate::expression::{validate, Tokenizer};
use crate::variables::{
    find_variables, resolve_variables, ConsoleSource, VariableSource, VariableTable,
};
use log::{debug, trace};

/// Deepest nesting of parentheses and unary minus accepted before evaluation gives up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Evaluates arithmetic expressions over `+ - * /`, parentheses, unary minus and named
/// variables.
///
/// Variable values come from the [`VariableSource`] given at construction and are kept for the
/// lifetime of the evaluator, so a name is requested at most once.
pub struct Evaluator {
    variables: VariableTable,
    source: Box<dyn VariableSource>,
}

impl Evaluator {
    /// Creates an evaluator that asks `source` for values of unknown variables.
    pub fn new<S>(source: S) -> Self
    where
        S: VariableSource + 'static,
    {
        Self {
            variables: VariableTable::new(),
            source: Box::new(source),
        }
    }

    /// Creates an evaluator that prompts on stdout and reads values from stdin.
    pub fn console() -> Self {
        Self::new(ConsoleSource::stdio())
    }

    /// Stores a value up front so it is never requested from the source.
    pub fn define(&mut self, name: &str, value: f64) {
        self.variables.insert(name, value);
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Evaluates `expression`.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` with the value. Division by zero yields infinity or NaN rather than an error.
    /// * `Err(InvalidExpression)` carrying the original text and the first problem found during
    ///   validation, variable resolution or evaluation.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, InvalidExpression> {
        debug!("Evaluating expression: {}", expression);
        self.run(expression)
            .map_err(|cause| InvalidExpression::new(expression, cause))
    }

    fn run(&mut self, expression: &str) -> Result<f64, ExpressionError> {
        // Step 1: Reject malformed input
        validate(expression)?;

        // Step 2: Obtain values for variables seen for the first time
        let names = find_variables(expression);
        debug!("Variables referenced: {:?}", names);
        resolve_variables(&names, &mut self.variables, &mut *self.source)?;
        debug!("{} variables cached", self.variables.len());

        // Step 3: Evaluate while parsing
        let mut descent = Descent::new(Tokenizer::new(expression), &self.variables);
        let value = descent.parse_expression()?;
        if let Some(c) = descent.tokenizer.peek() {
            return Err(ExpressionError::UnexpectedCharacter(c));
        }

        debug!("Result: {}", value);
        Ok(value)
    }
}

/// One pass of recursive descent over a single expression:
///
/// ```text
/// expression = term (("+" | "-") term)*
/// term       = factor (("*" | "/") factor)*
/// factor     = number | variable | "(" expression ")" | "-" factor
/// ```
struct Descent<'a> {
    tokenizer: Tokenizer,
    variables: &'a VariableTable,
    depth: usize,
}

impl<'a> Descent<'a> {
    fn new(tokenizer: Tokenizer, variables: &'a VariableTable) -> Self {
        Self {
            tokenizer,
            variables,
            depth: 0,
        }
    }

    /// Runs `parse` one nesting level deeper, failing instead of recursing past the limit.
    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<f64, ExpressionError>,
    ) -> Result<f64, ExpressionError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ExpressionError::NestingTooDeep(MAX_NESTING_DEPTH));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_expression(&mut self) -> Result<f64, ExpressionError> {
        trace!("parse_expression at {:?}", self.tokenizer.peek());
        let mut value = self.parse_term()?;

        while let Some(op @ ('+' | '-')) = self.tokenizer.peek() {
            self.tokenizer.next();
            let right = self.parse_term()?;
            value = if op == '+' { value + right } else { value - right };
        }

        Ok(value)
    }

    fn parse_term(&mut self) -> Result<f64, ExpressionError> {
        trace!("parse_term at {:?}", self.tokenizer.peek());
        let mut value = self.parse_factor()?;

        while let Some(op @ ('*' | '/')) = self.tokenizer.peek() {
            self.tokenizer.next();
            let right = self.parse_factor()?;
            value = if op == '*' { value * right } else { value / right };
        }

        Ok(value)
    }

    fn parse_factor(&mut self) -> Result<f64, ExpressionError> {
        trace!("parse_factor at {:?}", self.tokenizer.peek());
        let next = self
            .tokenizer
            .peek()
            .ok_or(ExpressionError::UnexpectedEndOfExpression)?;

        match next {
            c if c.is_ascii_digit() || c == '.' => self.tokenizer.parse_number(),
            '(' => {
                self.tokenizer.next();
                let value = self.nested(Self::parse_expression)?;
                match self.tokenizer.next() {
                    Some(')') => Ok(value),
                    _ => Err(ExpressionError::MissingParenthesis),
                }
            }
            c if c.is_ascii_alphabetic() => {
                let name = self.tokenizer.parse_name();
                self.variables
                    .get(&name)
                    .ok_or(ExpressionError::UndefinedVariable(name))
            }
            '-' => {
                self.tokenizer.next();
                Ok(-self.nested(Self::parse_factor)?)
            }
            c => Err(ExpressionError::UnexpectedCharacter(c)),
        }
    }
}
