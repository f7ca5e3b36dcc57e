//! Usage extractors
//!
//! Each extractor scans the whole token sequence once and returns the class
//! names it found in one syntactic context. Results may contain duplicates;
//! the caller unions them.
//!
//! Only bare identifiers are candidates. A name directly preceded by `\` is
//! already qualified and never needs an import.

use smol_str::SmolStr;

use super::excluded::is_excluded_symbol;
use crate::tokens::{BlockType, SyntaxKind, Tokens};

/// `new Foo(` / `new Foo;` plus the first static-access rule.
pub fn from_instantiations(tokens: &Tokens) -> Vec<SmolStr> {
    let mut used = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind() {
            SyntaxKind::NewKw => {
                let Some(class_index) = tokens.next_meaningful(i) else {
                    continue;
                };
                let class = &tokens[class_index];
                if class.kind() != SyntaxKind::Identifier || is_excluded_symbol(class.text()) {
                    continue;
                }
                let follows = tokens
                    .next_meaningful(class_index)
                    .and_then(|n| tokens.kind_at(n));
                if matches!(follows, Some(SyntaxKind::LParen | SyntaxKind::Semicolon)) {
                    used.push(class.content());
                }
            }
            SyntaxKind::DoubleColon => {
                if let Some(name) = static_access_rule_a(tokens, i) {
                    used.push(name);
                }
            }
            _ => {}
        }
    }

    tracing::trace!(?used, "instantiation usages");
    used
}

/// Class before `::`, rejecting `static` and excluded names.
fn static_access_rule_a(tokens: &Tokens, double_colon: usize) -> Option<SmolStr> {
    let current = tokens.prev_meaningful(double_colon)?;
    let token = &tokens[current];
    match token.kind() {
        SyntaxKind::StaticKw => None,
        SyntaxKind::Identifier
            if !is_excluded_symbol(token.text()) && !is_qualified(tokens, current) =>
        {
            Some(token.content())
        }
        _ => None,
    }
}

/// Class before `::`, rejecting `static`, variables and excluded names.
pub fn from_static_access(tokens: &Tokens) -> Vec<SmolStr> {
    let mut used = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.kind() != SyntaxKind::DoubleColon {
            continue;
        }
        let Some(current) = tokens.prev_meaningful(i) else {
            continue;
        };
        let candidate = &tokens[current];
        let accepted = match candidate.kind() {
            SyntaxKind::StaticKw | SyntaxKind::Variable => false,
            SyntaxKind::Identifier => {
                !is_excluded_symbol(candidate.text()) && !is_qualified(tokens, current)
            }
            _ => false,
        };
        if accepted {
            used.push(candidate.content());
        }
    }

    tracing::trace!(?used, "static access usages");
    used
}

/// Exception types in `catch (Foo $e)` and `catch (Foo | Bar $e)`.
pub fn from_catch_blocks(tokens: &Tokens) -> Vec<SmolStr> {
    let mut used = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].kind() != SyntaxKind::CatchKw {
            i += 1;
            continue;
        }

        let Some(open) = tokens.next_meaningful(i) else {
            break;
        };
        let Some(close) = tokens.find_block_end(BlockType::Parenthesis, open) else {
            tracing::warn!(index = i, "catch clause without a closed parameter list");
            i += 1;
            continue;
        };

        let mut j = open;
        while let Some(current) = tokens.next_meaningful(j).filter(|&c| c < close) {
            let next_kind = tokens
                .next_meaningful(current)
                .and_then(|n| tokens.kind_at(n));
            let candidate = &tokens[current];
            if candidate.kind() == SyntaxKind::Identifier
                && matches!(next_kind, Some(SyntaxKind::Variable | SyntaxKind::Pipe))
                && !is_excluded_symbol(candidate.text())
                && !is_qualified(tokens, current)
            {
                used.push(candidate.content());
            }
            j = current;
        }

        i = close + 1;
    }

    tracing::trace!(?used, "catch usages");
    used
}

/// Parameter type hints and the return type of every function.
pub fn from_function_signatures(tokens: &Tokens) -> Vec<SmolStr> {
    let mut used = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.kind() != SyntaxKind::FunctionKw {
            continue;
        }
        let Some(open) = parameter_list_open(tokens, i) else {
            continue;
        };
        let Some(close) = tokens.find_block_end(BlockType::Parenthesis, open) else {
            tracing::warn!(index = i, "function without a closed parameter list");
            continue;
        };

        for variable in (open + 1)..close {
            if tokens[variable].kind() != SyntaxKind::Variable {
                continue;
            }
            if let Some(name) = type_hint_before(tokens, variable) {
                used.push(name);
            }
        }

        if let Some(name) = return_type(tokens, close) {
            used.push(name);
        }
    }

    tracing::trace!(?used, "function signature usages");
    used
}

/// `(` of the parameter list after `function`, skipping `&` and the name.
///
/// `use function Foo\bar;` has no parameter list and yields `None`.
fn parameter_list_open(tokens: &Tokens, function: usize) -> Option<usize> {
    let mut index = tokens.next_meaningful(function)?;
    if tokens[index].kind() == SyntaxKind::Ampersand {
        index = tokens.next_meaningful(index)?;
    }
    if tokens[index].kind() == SyntaxKind::Identifier {
        index = tokens.next_meaningful(index)?;
    }
    (tokens[index].kind() == SyntaxKind::LParen).then_some(index)
}

fn type_hint_before(tokens: &Tokens, variable: usize) -> Option<SmolStr> {
    let hint = tokens.prev_meaningful(variable)?;
    let token = &tokens[hint];
    if token.kind() != SyntaxKind::Identifier
        || is_excluded_symbol(token.text())
        || is_qualified(tokens, hint)
    {
        return None;
    }
    Some(token.content())
}

/// `): Foo {` or `): Foo;` after the parameter list closing at `close`.
fn return_type(tokens: &Tokens, close: usize) -> Option<SmolStr> {
    let colon = tokens.next_meaningful(close)?;
    if tokens[colon].kind() != SyntaxKind::Colon {
        return None;
    }

    let boundary = tokens.next_token_of_kind(colon, &[SyntaxKind::LBrace, SyntaxKind::Semicolon])?;
    let current = tokens.prev_meaningful(boundary)?;
    let before = tokens.prev_meaningful(current)?;

    let token = &tokens[current];
    if before == colon
        && token.kind() == SyntaxKind::Identifier
        && !is_excluded_symbol(token.text())
    {
        Some(token.content())
    } else {
        None
    }
}

/// Whether the token at `index` is directly preceded by `\`
fn is_qualified(tokens: &Tokens, index: usize) -> bool {
    tokens
        .prev_meaningful(index)
        .is_some_and(|p| tokens[p].kind() == SyntaxKind::NsSeparator)
}
