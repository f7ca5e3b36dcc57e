//! PHP token layer
//!
//! Lossless lexing of a single source unit and the cursor primitives the
//! fixer scans with:
//! - [`SyntaxKind`] - closed set of token kinds
//! - [`Token`] - a `(kind, text)` pair
//! - [`Tokens`] - mutable sequence with meaningful-token navigation,
//!   kind lookup, block matching and insertion

mod lexer;
mod sequence;
mod syntax_kind;
mod token;

pub use lexer::tokenize;
pub use sequence::{BlockType, Tokens};
pub use syntax_kind::SyntaxKind;
pub use token::Token;
