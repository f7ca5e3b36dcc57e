//! Fixing many in-memory units in parallel.
//!
//! Units are independent: each gets its own token sequence, and the fixer is
//! only read. Results come back in input order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::fixer::{Fixer, FixerError, PhpVersion};
use crate::tokens::Tokens;

/// One source unit to fix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub source: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Fix a single unit.
///
/// Returns `Ok(None)` when the fixer does not apply or changes nothing,
/// otherwise the rewritten source.
pub fn fix_source<F: Fixer + ?Sized>(
    fixer: &F,
    path: &Path,
    source: &str,
    target: PhpVersion,
) -> Result<Option<String>, FixerError> {
    if !fixer.supports(path) {
        return Ok(None);
    }

    let mut tokens = Tokens::from_source(source);
    if !fixer.is_candidate(&tokens, target) {
        tracing::trace!(file = %path.display(), %target, "not a candidate");
        return Ok(None);
    }

    let outcome = fixer.fix(path, &mut tokens)?;
    Ok(outcome.is_changed().then(|| tokens.to_source()))
}

/// Fix every unit in parallel, keeping input order in the result
pub fn fix_sources<F: Fixer + Sync + ?Sized>(
    fixer: &F,
    units: &[SourceUnit],
    target: PhpVersion,
) -> Vec<Result<Option<String>, FixerError>> {
    let results: Vec<_> = units
        .par_iter()
        .map(|unit| fix_source(fixer, &unit.path, &unit.source, target))
        .collect();

    let changed = results.iter().filter(|r| matches!(r, Ok(Some(_)))).count();
    tracing::debug!(units = units.len(), changed, "batch fixed");
    results
}
