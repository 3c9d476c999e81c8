//! Import extraction and dependency classification.
//!
//! [`extract_specifiers`] is the narrow interface the rest of the installer
//! depends on: source text in, ordered module specifiers out. It is
//! regex-based today; replacing it with a syntax-tree parser would touch
//! nothing outside this function.
//!
//! Classification is ordered and first-match-wins. One inherited quirk is
//! kept on purpose: a `./x` specifier is always a nested-component install,
//! even when the file does not live under a components path. Tests pin it.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::templates::Category;

/// One classified reference found in a template's source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyRef {
    /// An npm package to install via the host package manager.
    External(String),
    /// A template from our own tree to install alongside.
    Internal { category: Category, name: String },
}

/// Extract the module specifier of every import statement, in order.
pub fn extract_specifiers(source: &str) -> Vec<String> {
    static IMPORT: OnceLock<Regex> = OnceLock::new();
    let import = IMPORT.get_or_init(|| {
        Regex::new(r#"import\s+[\s\S]*?from\s+['"]([^'"]+)['"]"#).unwrap()
    });

    import
        .captures_iter(source)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Classify one import specifier.
///
/// Returns `None` when no action is needed (an external package the
/// consumer already declares). Branch order is load-bearing; see the
/// module docs and the vector test below.
pub fn classify(specifier: &str, installed: &HashSet<String>) -> Option<DependencyRef> {
    if !specifier.starts_with('.') {
        if installed.contains(specifier) {
            return None;
        }
        return Some(DependencyRef::External(specifier.to_string()));
    }

    let internal_prefixes = [
        ("../utils/", Category::Utils),
        ("../hooks/", Category::Hooks),
        ("../providers/", Category::Providers),
        ("../layouts/", Category::Layouts),
    ];
    for (prefix, category) in internal_prefixes {
        if let Some(name) = specifier.strip_prefix(prefix) {
            return Some(DependencyRef::Internal {
                category,
                name: name.to_string(),
            });
        }
    }

    if specifier.starts_with("./") || !specifier.starts_with("../components") {
        // Relative import: a co-located component file. The name is the
        // specifier minus its two-character prefix, exactly as shipped.
        return Some(DependencyRef::Internal {
            category: Category::Components,
            name: specifier.get(2..).unwrap_or_default().to_string(),
        });
    }

    specifier
        .strip_prefix("../components/")
        .map(|name| DependencyRef::Internal {
            category: Category::Components,
            name: name.to_string(),
        })
}

/// Scan source text into actionable references.
pub fn scan(source: &str, installed: &HashSet<String>) -> Vec<DependencyRef> {
    extract_specifiers(source)
        .iter()
        .filter_map(|specifier| classify(specifier, installed))
        .collect()
}
