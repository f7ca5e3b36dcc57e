//! # add-missing-imports
//!
//! Token-level fixer that adds missing `use` statements to PHP test files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! batch     → Parallel fixing of many in-memory units
//!   ↓
//! fixer     → Usage extraction, import resolution, import synthesis
//!   ↓
//! tokens    → Logos lexer, SyntaxKind, mutable token sequence
//! ```

// ============================================================================
// MODULES (dependency order: tokens → fixer → batch)
// ============================================================================

/// Tokens: Logos lexer, SyntaxKind, Token, Tokens
pub mod tokens;

/// The missing-imports fixer and its configuration
pub mod fixer;

/// Parallel fixing over independent units
pub mod batch;

// Re-export commonly needed items
pub use batch::{SourceUnit, fix_source, fix_sources};
pub use fixer::{
    AddMissingImportsFixer, ConfigError, ConfigurableFixer, FixOutcome, Fixer, FixerConfig,
    FixerError, PhpVersion,
};
pub use tokens::{SyntaxKind, Token, Tokens};
