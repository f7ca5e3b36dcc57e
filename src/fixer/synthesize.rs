//! Import statement synthesis
//!
//! The only step that mutates the token sequence. It runs after all analysis
//! has finished, so no scan ever sees shifted indices.

use smol_str::SmolStr;

use super::namespace::NamespaceDeclaration;
use crate::tokens::{SyntaxKind, Token, Tokens};

pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Namespace segments for the generated imports.
///
/// Every literal occurrence of `prefix` is removed from `namespace` before
/// splitting on `\`.
pub fn import_namespace_segments(prefix: &str, namespace: &str) -> Vec<String> {
    namespace
        .replace(prefix, "")
        .split(NAMESPACE_SEPARATOR)
        .map(str::to_owned)
        .collect()
}

/// Insert one `use` statement per missing symbol.
///
/// Statements go right after the last existing import, or right after the
/// namespace declaration when there is none. Each statement lands after the
/// ones inserted before it. Returns the number of statements inserted.
pub fn add_missing_imports(
    prefix: &str,
    tokens: &mut Tokens,
    missing: &[SmolStr],
    namespace: &NamespaceDeclaration,
    last_import_end: Option<usize>,
) -> usize {
    let segments = import_namespace_segments(prefix, &namespace.name);
    let mut index = last_import_end.unwrap_or(namespace.end) + 1;

    tracing::debug!(
        ?segments,
        insert_at = index,
        count = missing.len(),
        "synthesizing imports"
    );

    for symbol in missing {
        for token in import_statement(&segments, symbol) {
            tokens.insert_at(index, token);
            index += 1;
        }
    }

    missing.len()
}

/// Tokens of `\nuse Seg\Seg\Symbol;`
fn import_statement(segments: &[String], symbol: &str) -> Vec<Token> {
    let mut statement = Vec::with_capacity(segments.len() * 2 + 5);
    statement.push(Token::new(SyntaxKind::Whitespace, "\n"));
    statement.push(Token::new(SyntaxKind::UseKw, "use"));
    statement.push(Token::new(SyntaxKind::Whitespace, " "));
    for segment in segments {
        statement.push(Token::new(SyntaxKind::Identifier, segment.as_str()));
        statement.push(Token::new(SyntaxKind::NsSeparator, NAMESPACE_SEPARATOR));
    }
    statement.push(Token::new(SyntaxKind::Identifier, symbol));
    statement.push(Token::new(SyntaxKind::Semicolon, ";"));
    statement
}
