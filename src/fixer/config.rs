//! Fixer options
//!
//! One option is defined: `namespace_prefix_to_remove`, a literal substring
//! stripped from the unit's namespace to get the namespace of the classes
//! being imported (`Tests\Unit\` turns `Tests\Unit\App` into `App`).

use indexmap::IndexMap;

use super::error::ConfigError;

pub const NAMESPACE_PREFIX_TO_REMOVE: &str = "namespace_prefix_to_remove";

/// Description of one configurable option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub allowed_type: &'static str,
}

/// All options understood by the fixer
pub const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: NAMESPACE_PREFIX_TO_REMOVE,
    description: "Prefix removed from the file's namespace to derive the namespace of imported classes.",
    allowed_type: "string",
}];

/// A raw option value as supplied by the host
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<OptionValue>),
}

impl OptionValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "array",
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Resolved fixer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FixerConfig {
    pub namespace_prefix_to_remove: Option<String>,
}

impl FixerConfig {
    pub fn with_namespace_prefix_to_remove(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix_to_remove = Some(prefix.into());
        self
    }

    /// Resolve raw options, rejecting unknown names and wrong value types.
    ///
    /// An absent option stays unset; whether it is required is checked when
    /// the fixer runs.
    pub fn resolve(options: &IndexMap<String, OptionValue>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (name, value) in options {
            match name.as_str() {
                NAMESPACE_PREFIX_TO_REMOVE => match value {
                    OptionValue::String(prefix) => {
                        config.namespace_prefix_to_remove = Some(prefix.clone());
                    }
                    other => {
                        return Err(ConfigError::InvalidType {
                            name: NAMESPACE_PREFIX_TO_REMOVE,
                            expected: "string",
                            found: other.type_name(),
                        });
                    }
                },
                unknown => return Err(ConfigError::unknown(unknown)),
            }
        }

        Ok(config)
    }

    /// The prefix to remove, failing if it is unset or blank
    pub fn namespace_prefix_to_remove(&self) -> Result<&str, ConfigError> {
        match self.namespace_prefix_to_remove.as_deref() {
            Some(prefix) if !prefix.trim().is_empty() => Ok(prefix),
            _ => Err(ConfigError::missing(NAMESPACE_PREFIX_TO_REMOVE)),
        }
    }
}
