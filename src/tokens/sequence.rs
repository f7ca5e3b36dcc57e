//! Mutable token sequence with cursor primitives
//!
//! Positions handed out by [`Tokens`] are plain indices. Any index past an
//! [`Tokens::insert_at`] position is stale after the insertion.

use std::ops::Index;

use rustc_hash::FxHashMap;

use super::lexer::tokenize;
use super::syntax_kind::SyntaxKind;
use super::token::Token;

/// Bracket pairs understood by [`Tokens::find_block_end`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Parenthesis,
    CurlyBrace,
}

impl BlockType {
    pub fn open(self) -> SyntaxKind {
        match self {
            Self::Parenthesis => SyntaxKind::LParen,
            Self::CurlyBrace => SyntaxKind::LBrace,
        }
    }

    pub fn close(self) -> SyntaxKind {
        match self {
            Self::Parenthesis => SyntaxKind::RParen,
            Self::CurlyBrace => SyntaxKind::RBrace,
        }
    }
}

/// An ordered, random-access token sequence for one source unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
    kind_counts: FxHashMap<SyntaxKind, usize>,
}

impl Tokens {
    /// Lex `source` into a token sequence
    pub fn from_source(source: &str) -> Self {
        tokenize(source).into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Kind of the token at `index`, if in bounds
    pub fn kind_at(&self, index: usize) -> Option<SyntaxKind> {
        self.tokens.get(index).map(Token::kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Index of the first meaningful token strictly after `index`
    pub fn next_meaningful(&self, index: usize) -> Option<usize> {
        (index + 1..self.tokens.len()).find(|&i| !self.tokens[i].is_trivia())
    }

    /// Index of the last meaningful token strictly before `index`
    pub fn prev_meaningful(&self, index: usize) -> Option<usize> {
        let end = index.min(self.tokens.len());
        (0..end).rev().find(|&i| !self.tokens[i].is_trivia())
    }

    /// Index of the first token strictly after `index` whose kind is in `kinds`
    pub fn next_token_of_kind(&self, index: usize, kinds: &[SyntaxKind]) -> Option<usize> {
        (index + 1..self.tokens.len()).find(|&i| self.tokens[i].is_any_kind(kinds))
    }

    /// Index of the token closing the block opened at `open`.
    ///
    /// Returns `None` when `open` is not the block's opener or the block is
    /// never closed.
    pub fn find_block_end(&self, block: BlockType, open: usize) -> Option<usize> {
        if self.kind_at(open)? != block.open() {
            return None;
        }

        let mut depth = 0usize;
        for (i, token) in self.tokens.iter().enumerate().skip(open) {
            if token.kind() == block.open() {
                depth += 1;
            } else if token.kind() == block.close() {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    }

    /// Insert `token` so that it ends up at `index`, shifting later tokens right
    pub fn insert_at(&mut self, index: usize, token: Token) {
        let index = index.min(self.tokens.len());
        *self.kind_counts.entry(token.kind()).or_default() += 1;
        self.tokens.insert(index, token);
    }

    /// Whether any token of `kind` is present
    pub fn is_kind_found(&self, kind: SyntaxKind) -> bool {
        self.kind_counts.get(&kind).is_some_and(|&n| n > 0)
    }

    /// Whether a token of at least one of `kinds` is present
    pub fn is_any_kind_found(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.iter().any(|&kind| self.is_kind_found(kind))
    }

    /// Serialize the sequence back to source text
    pub fn to_source(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let tokens: Vec<Token> = iter.into_iter().collect();
        let mut kind_counts = FxHashMap::default();
        for token in &tokens {
            *kind_counts.entry(token.kind()).or_default() += 1;
        }
        Self {
            tokens,
            kind_counts,
        }
    }
}

impl Index<usize> for Tokens {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
