//! Self-description consumed by host tooling for listings and docs

use indexmap::IndexMap;

use super::config::OptionValue;

/// A code snippet illustrating the fixer, with the options it runs under
#[derive(Debug, Clone, PartialEq)]
pub struct CodeSample {
    pub code: &'static str,
    pub configuration: IndexMap<String, OptionValue>,
}

impl CodeSample {
    pub fn new(code: &'static str) -> Self {
        Self {
            code,
            configuration: IndexMap::new(),
        }
    }

    pub fn with_option(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.configuration.insert(name.to_string(), value.into());
        self
    }
}

/// Summary and samples of a fixer
#[derive(Debug, Clone, PartialEq)]
pub struct FixerDefinition {
    pub summary: &'static str,
    pub samples: Vec<CodeSample>,
}
