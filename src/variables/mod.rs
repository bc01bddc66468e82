use crate::error::SourceError;
use std::collections::HashMap;

mod console;
mod resolver;

pub use console::ConsoleSource;
pub use resolver::{find_variables, resolve_variables};

/// Supplies values for variables the evaluator has not seen before.
///
/// Implementations may block (a console prompt does); the evaluator waits for each call to
/// return before continuing.
pub trait VariableSource {
    fn value_of(&mut self, name: &str) -> Result<f64, SourceError>;
}

impl<F> VariableSource for F
where
    F: FnMut(&str) -> Result<f64, SourceError>,
{
    fn value_of(&mut self, name: &str) -> Result<f64, SourceError> {
        self(name)
    }
}

impl VariableSource for HashMap<String, f64> {
    fn value_of(&mut self, name: &str) -> Result<f64, SourceError> {
        self.get(name)
            .copied()
            .ok_or_else(|| SourceError::Missing(name.to_string()))
    }
}

/// Values obtained so far, keyed by variable name. Entries are never evicted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    values: HashMap<String, f64>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn insert(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
