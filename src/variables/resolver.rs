use super::{VariableSource, VariableTable};
use crate::error::ExpressionError;
use log::debug;
use std::collections::BTreeSet;

/// Collects every maximal run of ASCII letters in `expression`.
pub fn find_variables(expression: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut current = String::new();

    for c in expression.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c);
        } else if !current.is_empty() {
            names.insert(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        names.insert(current);
    }

    names
}

/// Asks `source` for each name the table does not hold yet and stores the answers.
///
/// Names are requested in sorted order. The first failure aborts resolution; values obtained
/// before it stay in the table.
pub fn resolve_variables(
    names: &BTreeSet<String>,
    table: &mut VariableTable,
    source: &mut dyn VariableSource,
) -> Result<(), ExpressionError> {
    for name in names {
        if table.contains(name) {
            continue;
        }
        let value = source
            .value_of(name)
            .map_err(|source| ExpressionError::VariableInputError {
                name: name.clone(),
                source,
            })?;
        debug!("Obtained value for variable {}: {}", name, value);
        table.insert(name, value);
    }
    Ok(())
}
