//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod source_fixtures;

use std::path::Path;

use add_missing_imports::{
    AddMissingImportsFixer, FixOutcome, Fixer, FixerConfig, FixerError, Tokens,
};

pub const PREFIX: &str = "Tests\\Unit\\";

pub fn fixer() -> AddMissingImportsFixer {
    fixer_with_prefix(PREFIX)
}

pub fn fixer_with_prefix(prefix: &str) -> AddMissingImportsFixer {
    AddMissingImportsFixer::with_config(
        FixerConfig::default().with_namespace_prefix_to_remove(prefix),
    )
}

/// Run one fix pass and return the rewritten source with its outcome.
pub fn try_fix(
    fixer: &AddMissingImportsFixer,
    source: &str,
) -> Result<(String, FixOutcome), FixerError> {
    let mut tokens = Tokens::from_source(source);
    let outcome = fixer.fix(Path::new("tests/Unit/ExampleTest.php"), &mut tokens)?;
    Ok((tokens.to_source(), outcome))
}

pub fn fix(source: &str) -> (String, FixOutcome) {
    try_fix(&fixer(), source).expect("fix should succeed")
}

pub fn assert_unchanged(source: &str) {
    let (fixed, outcome) = fix(source);
    assert!(
        !outcome.is_changed(),
        "expected no imports, got {:?}",
        outcome.inserted
    );
    assert_eq!(fixed, source);
}

pub fn assert_inserted(source: &str, expected: &[&str]) {
    let (_, outcome) = fix(source);
    let inserted: Vec<&str> = outcome.inserted.iter().map(|s| s.as_str()).collect();
    assert_eq!(inserted, expected, "for source:\n{}", source);
}
