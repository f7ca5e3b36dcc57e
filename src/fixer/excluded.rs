//! Names that can never be a missing import
//!
//! Primitive and pseudo types, literal values, and the self-referential
//! tokens. Membership is case-insensitive.

/// A name that is never reported as a used class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExcludedSymbol {
    // types
    Int,
    Float,
    String,
    Bool,
    Array,
    Object,
    Callable,
    Iterable,
    Void,
    Mixed,
    Never,
    // values
    True,
    False,
    Null,
    // self-references
    SelfRef,
    Static,
    Parent,
    This,
}

impl ExcludedSymbol {
    pub const ALL: [ExcludedSymbol; 18] = [
        Self::Int,
        Self::Float,
        Self::String,
        Self::Bool,
        Self::Array,
        Self::Object,
        Self::Callable,
        Self::Iterable,
        Self::Void,
        Self::Mixed,
        Self::Never,
        Self::True,
        Self::False,
        Self::Null,
        Self::SelfRef,
        Self::Static,
        Self::Parent,
        Self::This,
    ];

    /// Canonical lowercase spelling
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Object => "object",
            Self::Callable => "callable",
            Self::Iterable => "iterable",
            Self::Void => "void",
            Self::Mixed => "mixed",
            Self::Never => "never",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::SelfRef => "self",
            Self::Static => "static",
            Self::Parent => "parent",
            Self::This => "$this",
        }
    }

    /// Look up `name` ignoring ASCII case
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.as_str().eq_ignore_ascii_case(name))
    }
}

/// Whether `name` can never be a missing import
pub fn is_excluded_symbol(name: &str) -> bool {
    ExcludedSymbol::lookup(name).is_some()
}
