//! Missing import fixer
//!
//! Scans one unit's tokens for class names that are used but neither
//! imported nor declared locally, and inserts `use` statements for them.
//!
//! ```text
//! usage (4 extractors) ─┐
//!                       ├─ used − (imported ∪ declared) ─→ synthesize
//! namespace ────────────┘
//! ```

mod add_missing_imports;
pub mod config;
mod definition;
mod error;
pub mod excluded;
pub mod namespace;
pub mod synthesize;
pub mod usage;
mod version;

use std::path::Path;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::tokens::Tokens;

pub use add_missing_imports::AddMissingImportsFixer;
pub use config::{FixerConfig, OptionSpec, OptionValue};
pub use definition::{CodeSample, FixerDefinition};
pub use error::{ConfigError, FixerError};
pub use version::PhpVersion;

/// What a fix pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixOutcome {
    /// Symbols an import was inserted for, in insertion order
    pub inserted: Vec<SmolStr>,
}

impl FixOutcome {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn is_changed(&self) -> bool {
        !self.inserted.is_empty()
    }
}

/// A rewrite applied to the tokens of one unit
pub trait Fixer {
    /// Stable identifier
    fn name(&self) -> &'static str;

    fn definition(&self) -> FixerDefinition;

    /// Whether the rewrite can change program behavior
    fn is_risky(&self) -> bool;

    fn priority(&self) -> i32;

    fn supports(&self, file: &Path) -> bool;

    /// Cheap pre-check; `fix` is only worth running when this is true
    fn is_candidate(&self, tokens: &Tokens, target: PhpVersion) -> bool;

    fn fix(&self, file: &Path, tokens: &mut Tokens) -> Result<FixOutcome, FixerError>;
}

/// A fixer that accepts options from the host
pub trait ConfigurableFixer: Fixer {
    fn options(&self) -> &'static [OptionSpec];

    fn configure(&mut self, options: &IndexMap<String, OptionValue>) -> Result<(), ConfigError>;
}
