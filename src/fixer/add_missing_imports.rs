use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::config::{FixerConfig, NAMESPACE_PREFIX_TO_REMOVE, OPTIONS, OptionSpec, OptionValue};
use super::definition::{CodeSample, FixerDefinition};
use super::error::{ConfigError, FixerError};
use super::namespace::{ImportScan, declared_type_names, imported_symbols, namespace_declaration};
use super::synthesize::add_missing_imports;
use super::usage::{
    from_catch_blocks, from_function_signatures, from_instantiations, from_static_access,
};
use super::version::PhpVersion;
use super::{ConfigurableFixer, FixOutcome, Fixer};
use crate::tokens::{SyntaxKind, Tokens};

const SAMPLE_MISSING: &str = r#"<?php

namespace Tests\Unit\App;

class ExampleTest extends TestCase
{
    public function testExample()
    {
        $mock = $this->createMock(SomeService::class);
        $result = new \App\Entity\User();
    }
}
"#;

const SAMPLE_FIXED: &str = r#"<?php

namespace Tests\Unit\App;

use App\SomeService;

class ExampleTest extends TestCase
{
    public function testExample()
    {
        $mock = $this->createMock(SomeService::class);
        $result = new \App\Entity\User();
    }
}
"#;

/// Tokens whose presence makes a usage extractor worth running
const USAGE_KINDS: &[SyntaxKind] = &[
    SyntaxKind::NewKw,
    SyntaxKind::DoubleColon,
    SyntaxKind::CatchKw,
    SyntaxKind::FunctionKw,
];

/// Adds `use` statements for classes referenced by a unit but not imported.
///
/// The imported namespace is the unit's own namespace with the configured
/// prefix removed, which suits test suites mirroring the source tree
/// (`Tests\Unit\App` tests classes in `App`).
#[derive(Debug, Clone, Default)]
pub struct AddMissingImportsFixer {
    config: FixerConfig,
}

impl AddMissingImportsFixer {
    pub const NAME: &'static str = "tranxton/add_missing_imports";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FixerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FixerConfig {
        &self.config
    }

    /// Used class names in first-seen order
    pub fn used_symbols(tokens: &Tokens) -> IndexSet<SmolStr> {
        let mut used = IndexSet::new();
        used.extend(from_instantiations(tokens));
        used.extend(from_static_access(tokens));
        used.extend(from_catch_blocks(tokens));
        used.extend(from_function_signatures(tokens));
        used
    }

    /// Names covered by `imports` or declared in the unit
    pub fn resolved_symbols(tokens: &Tokens, imports: &ImportScan) -> FxHashSet<SmolStr> {
        let mut resolved: FxHashSet<SmolStr> = imports.names.iter().cloned().collect();
        resolved.extend(declared_type_names(tokens));
        resolved
    }
}

impl Fixer for AddMissingImportsFixer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn definition(&self) -> FixerDefinition {
        FixerDefinition {
            summary: "Automatically adds missing use statements for classes in test files.",
            samples: vec![
                CodeSample::new(SAMPLE_MISSING).with_option(NAMESPACE_PREFIX_TO_REMOVE, "Tests\\Unit\\"),
                CodeSample::new(SAMPLE_FIXED).with_option(NAMESPACE_PREFIX_TO_REMOVE, "Tests\\Unit\\"),
            ],
        }
    }

    fn is_risky(&self) -> bool {
        true
    }

    fn priority(&self) -> i32 {
        0
    }

    fn supports(&self, _file: &Path) -> bool {
        true
    }

    fn is_candidate(&self, tokens: &Tokens, target: PhpVersion) -> bool {
        target.is_legacy()
            && tokens.is_kind_found(SyntaxKind::NamespaceKw)
            && tokens.is_any_kind_found(USAGE_KINDS)
    }

    fn fix(&self, file: &Path, tokens: &mut Tokens) -> Result<FixOutcome, FixerError> {
        let prefix = self.config.namespace_prefix_to_remove()?;

        let used = Self::used_symbols(tokens);
        if used.is_empty() {
            tracing::debug!(file = %file.display(), "no class usages");
            return Ok(FixOutcome::unchanged());
        }

        let Some(namespace) = namespace_declaration(tokens) else {
            tracing::debug!(file = %file.display(), "no namespace declaration");
            return Ok(FixOutcome::unchanged());
        };

        let imports = imported_symbols(tokens);
        let resolved = Self::resolved_symbols(tokens, &imports);

        let missing: Vec<SmolStr> = used
            .into_iter()
            .filter(|symbol| !resolved.contains(symbol))
            .collect();
        if missing.is_empty() {
            tracing::debug!(file = %file.display(), "all used classes are resolved");
            return Ok(FixOutcome::unchanged());
        }

        add_missing_imports(prefix, tokens, &missing, &namespace, imports.last_end);
        tracing::debug!(
            file = %file.display(),
            namespace = %namespace.name,
            ?missing,
            "inserted missing imports"
        );

        Ok(FixOutcome { inserted: missing })
    }
}

impl ConfigurableFixer for AddMissingImportsFixer {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn configure(&mut self, options: &IndexMap<String, OptionValue>) -> Result<(), ConfigError> {
        self.config = FixerConfig::resolve(options)?;
        Ok(())
    }
}
