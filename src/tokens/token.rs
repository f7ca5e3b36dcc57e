use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;

/// A single lexeme: its kind and the exact source text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: SyntaxKind,
    text: SmolStr,
}

impl Token {
    pub fn new(kind: SyntaxKind, text: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text as an owned, cheaply clonable string
    pub fn content(&self) -> SmolStr {
        self.text.clone()
    }

    pub fn is_any_kind(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}
