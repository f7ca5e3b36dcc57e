//! Property-based tests for the fix pass.
//!
//! Generates units mixing imported, declared, qualified and missing class
//! usages, then checks that fixing is idempotent, that tokenizing is
//! lossless and that only bare missing names are imported.

#[path = "helpers/mod.rs"]
mod helpers;

use add_missing_imports::Tokens;
use helpers::*;
use proptest::prelude::*;

// ============================================================================
// PROPTEST STRATEGIES
// ============================================================================

/// Class names that never collide with keywords or excluded symbols.
fn arb_class() -> impl Strategy<Value = String> {
    "Zz[A-Z][a-zA-Z0-9]{0,8}"
}

#[derive(Debug, Clone)]
enum Usage {
    New(String),
    Static(String),
    Catch(String),
    Param(String),
    Return(String),
    Qualified(String),
}

impl Usage {
    fn render(&self, index: usize) -> String {
        match self {
            Usage::New(c) => format!("        $v{index} = new {c}();\n"),
            Usage::Static(c) => format!("        {c}::make();\n"),
            Usage::Catch(c) => format!("        try {{ }} catch ({c} $e{index}) {{ }}\n"),
            Usage::Param(c) => format!("        $f{index} = function ({c} $p) {{ }};\n"),
            Usage::Return(c) => format!("        $f{index} = function (): {c} {{ }};\n"),
            Usage::Qualified(c) => format!("        $v{index} = new \\Lib\\{c}();\n"),
        }
    }

    /// Extraction pass that reports this usage, or `None` if qualified.
    ///
    /// Passes run in order: instantiation and static access, then catch
    /// clauses, then function signatures.
    fn pass(&self) -> Option<usize> {
        match self {
            Usage::New(_) | Usage::Static(_) => Some(0),
            Usage::Catch(_) => Some(1),
            Usage::Param(_) | Usage::Return(_) => Some(2),
            Usage::Qualified(_) => None,
        }
    }

    fn name(&self) -> &str {
        match self {
            Usage::New(c)
            | Usage::Static(c)
            | Usage::Catch(c)
            | Usage::Param(c)
            | Usage::Return(c)
            | Usage::Qualified(c) => c,
        }
    }
}

fn arb_usage() -> impl Strategy<Value = Usage> {
    prop_oneof![
        arb_class().prop_map(Usage::New),
        arb_class().prop_map(Usage::Static),
        arb_class().prop_map(Usage::Catch),
        arb_class().prop_map(Usage::Param),
        arb_class().prop_map(Usage::Return),
        arb_class().prop_map(Usage::Qualified),
    ]
}

fn arb_unit() -> impl Strategy<Value = (Vec<String>, Vec<Usage>)> {
    (
        proptest::collection::vec(arb_class(), 0..4),
        proptest::collection::vec(arb_usage(), 0..8),
    )
}

fn render_unit(imports: &[String], usages: &[Usage]) -> String {
    let mut source = String::from("<?php\nnamespace Tests\\Unit\\App;\n");
    for import in imports {
        source.push_str(&format!("use Vendor\\{import};\n"));
    }
    source.push_str("\nclass Subject\n{\n    public function run()\n    {\n");
    for (index, usage) in usages.iter().enumerate() {
        source.push_str(&usage.render(index));
    }
    source.push_str("    }\n}\n");
    source
}

proptest! {
    #[test]
    fn prop_tokenize_is_lossless((imports, usages) in arb_unit()) {
        let source = render_unit(&imports, &usages);
        prop_assert_eq!(Tokens::from_source(&source).to_source(), source);
    }

    #[test]
    fn prop_fix_is_idempotent((imports, usages) in arb_unit()) {
        let source = render_unit(&imports, &usages);
        let (once, _) = fix(&source);
        let (twice, outcome) = fix(&once);
        prop_assert!(!outcome.is_changed());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_only_bare_missing_names_are_imported((imports, usages) in arb_unit()) {
        let source = render_unit(&imports, &usages);
        let (fixed, outcome) = fix(&source);

        let mut expected: Vec<&str> = Vec::new();
        for pass in 0..3 {
            for usage in usages.iter().filter(|u| u.pass() == Some(pass)) {
                let name = usage.name();
                if !imports.iter().any(|i| i == name) && !expected.contains(&name) {
                    expected.push(name);
                }
            }
        }
        prop_assert_eq!(&outcome.inserted, &expected);

        for name in &expected {
            let import = format!("use App\\{};", name);
            prop_assert!(fixed.contains(&import), "missing {}", import);
        }
    }
}
