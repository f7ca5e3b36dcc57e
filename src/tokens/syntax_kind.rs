//! Token kinds for PHP source

/// All token kinds produced by the PHP lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // === Trivia ===
    Whitespace = 0,
    LineComment,
    BlockComment,
    DocComment,

    // === Tags ===
    OpenTag,
    OpenTagWithEcho,
    CloseTag,
    /// Text outside `<?php ... ?>`
    InlineHtml,

    // === Literals and names ===
    Variable,
    Identifier,
    LNumber,
    DNumber,
    ConstantString,

    // === Punctuation ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    DoubleColon,
    NsSeparator,
    Comma,
    Question,
    Pipe,
    Ampersand,
    Ellipsis,
    ObjectOperator,
    NullsafeObjectOperator,
    DoubleArrow,
    Eq,
    Dollar,
    /// Any other operator (`+`, `===`, `??=`, ...)
    Operator,

    // === Keywords ===
    AbstractKw,
    ArrayKw,
    AsKw,
    BreakKw,
    CallableKw,
    CaseKw,
    CatchKw,
    ClassKw,
    CloneKw,
    ConstKw,
    ContinueKw,
    DeclareKw,
    DefaultKw,
    DoKw,
    EchoKw,
    ElseKw,
    ElseifKw,
    ExtendsKw,
    FinalKw,
    FinallyKw,
    FnKw,
    ForKw,
    ForeachKw,
    FunctionKw,
    GlobalKw,
    IfKw,
    ImplementsKw,
    InstanceofKw,
    InsteadofKw,
    InterfaceKw,
    NamespaceKw,
    NewKw,
    PrivateKw,
    ProtectedKw,
    PublicKw,
    ReturnKw,
    StaticKw,
    SwitchKw,
    ThrowKw,
    TraitKw,
    TryKw,
    UseKw,
    VarKw,
    WhileKw,
    YieldKw,

    // === Special ===
    Error,
}

impl SyntaxKind {
    /// Whitespace and comments
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment | Self::DocComment
        )
    }

    pub fn is_meaningful(self) -> bool {
        !self.is_trivia()
    }

    pub fn is_keyword(self) -> bool {
        use SyntaxKind::*;
        match self {
            AbstractKw | ArrayKw | AsKw | BreakKw | CallableKw | CaseKw | CatchKw | ClassKw
            | CloneKw | ConstKw | ContinueKw | DeclareKw | DefaultKw | DoKw | EchoKw | ElseKw
            | ElseifKw | ExtendsKw | FinalKw | FinallyKw | FnKw | ForKw | ForeachKw
            | FunctionKw | GlobalKw | IfKw | ImplementsKw | InstanceofKw | InsteadofKw
            | InterfaceKw | NamespaceKw | NewKw | PrivateKw | ProtectedKw | PublicKw
            | ReturnKw | StaticKw | SwitchKw | ThrowKw | TraitKw | TryKw | UseKw | VarKw
            | WhileKw | YieldKw => true,
            Whitespace | LineComment | BlockComment | DocComment | OpenTag | OpenTagWithEcho
            | CloseTag | InlineHtml | Variable | Identifier | LNumber | DNumber | ConstantString | LParen
            | RParen | LBrace | RBrace | LBracket | RBracket | Semicolon | Colon
            | DoubleColon | NsSeparator | Comma | Question | Pipe | Ampersand | Ellipsis
            | ObjectOperator | NullsafeObjectOperator | DoubleArrow | Eq | Dollar | Operator
            | Error => false,
        }
    }

    /// Keywords that open a type declaration body
    pub fn is_type_declaration(self) -> bool {
        matches!(self, Self::ClassKw | Self::InterfaceKw | Self::TraitKw)
    }

    /// Tokens after which a new statement may begin
    pub fn is_statement_boundary(self) -> bool {
        matches!(
            self,
            Self::Semicolon | Self::LBrace | Self::RBrace | Self::OpenTag | Self::CloseTag
        )
    }
}
