use crate::error::{Result, ValidationError};

/// Evaluates rules in order and reports the first one that is violated.
///
/// Each rule is a `(violated, error)` pair. Later rules are not reported
/// once an earlier one fails.
pub(crate) fn ensure<const N: usize>(rules: [(bool, ValidationError); N]) -> Result<()> {
    match rules.into_iter().find(|(violated, _)| *violated) {
        Some((_, error)) => Err(error),
        None => Ok(()),
    }
}
