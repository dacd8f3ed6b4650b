//! Folding of per-item batch failures into a single error.

use std::fmt;

use thiserror::Error;

/// One failed item of a batch, numbered among the failures only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// 1-based position among the failed items.
    pub position: usize,
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

/// Composite error of a batch with at least one failed item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("errors: {}", render(.failures))]
pub struct MergedError {
    failures: Vec<Failure>,
}

impl MergedError {
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

fn render(failures: &[Failure]) -> String {
    failures
        .iter()
        .map(Failure::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Merges the outcomes of independent sub-operations.
///
/// Returns `Ok(())` when every item succeeded; otherwise a [`MergedError`] listing each failure in
/// input order, e.g. `errors: 1: <first>, 2: <second>`.
///
/// There is exactly one space after `errors:`. Older scheduler builds printed two; log parsers
/// matching on the prefix should accept either.
pub fn merge_errors<I, T, E>(results: I) -> Result<(), MergedError>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: fmt::Display,
{
    let failures: Vec<Failure> = results
        .into_iter()
        .filter_map(Result::err)
        .enumerate()
        .map(|(i, e)| Failure {
            position: i + 1,
            message: e.to_string(),
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(MergedError { failures })
    }
}
