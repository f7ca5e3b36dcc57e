//! Namespace, import and local declaration resolution
//!
//! All positions are returned as values and are only valid for the token
//! sequence they were computed from.

use smol_str::SmolStr;

use crate::tokens::{BlockType, SyntaxKind, Tokens};

/// The unit's `namespace Foo\Bar;` (or `namespace Foo\Bar {`) declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    /// Concatenated text of the name, e.g. `Tests\Unit\App`
    pub name: String,
    /// Index of the terminating `;` or `{`
    pub end: usize,
}

/// Names brought in by top-level `use` statements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportScan {
    pub names: Vec<SmolStr>,
    /// Index of the last import's `;`, if any import exists
    pub last_end: Option<usize>,
}

/// Find the first namespace declaration.
///
/// `namespace\foo()` (a namespace-relative name) and the global
/// `namespace { }` block are not declarations.
pub fn namespace_declaration(tokens: &Tokens) -> Option<NamespaceDeclaration> {
    for (i, token) in tokens.iter().enumerate() {
        if token.kind() != SyntaxKind::NamespaceKw {
            continue;
        }
        if tokens
            .next_meaningful(i)
            .is_some_and(|n| tokens[n].kind() == SyntaxKind::NsSeparator)
        {
            continue;
        }

        let mut name = String::new();
        let mut j = i;
        while let Some(next) = tokens.next_meaningful(j) {
            match tokens[next].kind() {
                SyntaxKind::Semicolon | SyntaxKind::LBrace => {
                    if name.is_empty() {
                        return None;
                    }
                    return Some(NamespaceDeclaration { name, end: next });
                }
                _ => name.push_str(tokens[next].text()),
            }
            j = next;
        }
        return None;
    }
    None
}

/// Collect the names imported by top-level `use` statements.
///
/// Trait imports inside class bodies and closure `use (...)` clauses are not
/// import statements and are skipped. Aliases, comma lists and group imports
/// contribute every name they bring into scope.
pub fn imported_symbols(tokens: &Tokens) -> ImportScan {
    let mut scan = ImportScan::default();
    // true for a namespace body brace, false for any other brace
    let mut braces: Vec<bool> = Vec::new();
    let mut pending_namespace = false;
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i].kind() {
            SyntaxKind::NamespaceKw => {
                pending_namespace = tokens
                    .next_meaningful(i)
                    .is_some_and(|n| tokens[n].kind() != SyntaxKind::NsSeparator);
            }
            SyntaxKind::Semicolon => pending_namespace = false,
            SyntaxKind::LBrace => {
                braces.push(pending_namespace);
                pending_namespace = false;
            }
            SyntaxKind::RBrace => {
                braces.pop();
            }
            SyntaxKind::UseKw if is_import_statement(tokens, i, &braces) => {
                if let Some(end) = read_import_clauses(tokens, i, &mut scan.names) {
                    scan.last_end = Some(end);
                    i = end;
                }
            }
            _ => {}
        }
        i += 1;
    }

    tracing::trace!(names = ?scan.names, last_end = ?scan.last_end, "imported symbols");
    scan
}

fn is_import_statement(tokens: &Tokens, use_index: usize, braces: &[bool]) -> bool {
    let in_code_block = braces.iter().any(|&namespace_body| !namespace_body);
    if in_code_block {
        return false;
    }
    tokens
        .prev_meaningful(use_index)
        .is_none_or(|p| tokens[p].kind().is_statement_boundary())
}

/// Read the clauses of one `use` statement, returning its `;` index.
fn read_import_clauses(
    tokens: &Tokens,
    use_index: usize,
    names: &mut Vec<SmolStr>,
) -> Option<usize> {
    // the alias after `as` simply replaces the path's last segment
    let mut last: Option<SmolStr> = None;
    let mut j = use_index;

    while let Some(next) = tokens.next_meaningful(j) {
        let token = &tokens[next];
        match token.kind() {
            SyntaxKind::Identifier => last = Some(token.content()),
            // group prefix `A\{`
            SyntaxKind::LBrace => last = None,
            SyntaxKind::Comma | SyntaxKind::RBrace => names.extend(last.take()),
            SyntaxKind::Semicolon => {
                names.extend(last.take());
                return Some(next);
            }
            _ => {}
        }
        j = next;
    }

    tracing::warn!(index = use_index, "unterminated use statement");
    None
}

/// Names of classes, interfaces and traits declared in the unit.
///
/// The body of each declaration is skipped so nested constructs are not
/// mistaken for top-level declarations.
pub fn declared_type_names(tokens: &Tokens) -> Vec<SmolStr> {
    let mut declared = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if !tokens[i].kind().is_type_declaration() {
            i += 1;
            continue;
        }

        let Some(name_index) = tokens
            .next_meaningful(i)
            .filter(|&n| tokens[n].kind() == SyntaxKind::Identifier)
        else {
            i += 1;
            continue;
        };
        declared.push(tokens[name_index].content());

        i = tokens
            .next_token_of_kind(name_index, &[SyntaxKind::LBrace])
            .and_then(|open| tokens.find_block_end(BlockType::CurlyBrace, open))
            .unwrap_or(name_index)
            + 1;
    }

    tracing::trace!(?declared, "declared type names");
    declared
}
