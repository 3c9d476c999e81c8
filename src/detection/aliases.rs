//! Path-alias resolution from tsconfig/jsconfig.
//!
//! Best-effort by contract: the mapping config is JSON-with-comments, may
//! be missing, and may be malformed. Every failure collapses to "no mapping
//! found" and the directory heuristics take over; this step runs only at
//! init time and must never be fatal.

use regex::Regex;
use serde_json::Value;
use std::fs;
use std::sync::OnceLock;

use crate::context::ProjectContext;
use crate::detection::framework::Framework;
use crate::manifest::CategoryPaths;

/// Outcome of alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAliases {
    /// Base source directory, trailing slash included (e.g. `./src/`).
    pub base_path: String,
    /// Import-alias prefix mapped to the base (e.g. `@/`), or the base
    /// itself when no mapping exists.
    pub alias_prefix: String,
    /// Derived per-category target paths.
    pub aliases: CategoryPaths,
}

/// Resolve the base path and per-category aliases for a project.
pub fn resolve_aliases(ctx: &ProjectContext, framework: Framework) -> ResolvedAliases {
    let (base_path, alias_prefix) = resolve_base_path(ctx, framework);
    let aliases = CategoryPaths::from_base(&base_path);

    ResolvedAliases {
        base_path,
        alias_prefix,
        aliases,
    }
}

fn resolve_base_path(ctx: &ProjectContext, framework: Framework) -> (String, String) {
    if let Some(mapping) = wildcard_path_mapping(ctx) {
        return mapping;
    }

    // Heuristics when no usable path mapping exists.
    if ctx.root().join("src").is_dir() {
        return ("./src/".to_string(), "./src/".to_string());
    }
    if framework == Framework::Next {
        // Next.js app without a src/ directory roots everything at the repo.
        return ("./".to_string(), "./".to_string());
    }
    ("./src/".to_string(), "./src/".to_string())
}

/// Extract the first wildcard alias from tsconfig.json or jsconfig.json.
///
/// Returns `(base_path, alias_prefix)`, both with the `/*` wildcard
/// replaced by a trailing slash.
fn wildcard_path_mapping(ctx: &ProjectContext) -> Option<(String, String)> {
    let config = ["tsconfig.json", "jsconfig.json"]
        .iter()
        .map(|c| ctx.root().join(c))
        .find(|p| p.exists())?;

    let content = fs::read_to_string(&config).ok()?;
    let parsed: Value = serde_json::from_str(&strip_jsonc(&content)).ok()?;

    let paths = parsed
        .get("compilerOptions")?
        .get("paths")?
        .as_object()?;

    let (key, targets) = paths.iter().find(|(k, _)| k.ends_with("/*"))?;
    let target = targets.as_array()?.first()?.as_str()?;

    let base = target.replace("/*", "/");
    let prefix = key.replace("/*", "/");
    Some((base, prefix))
}

/// Strip `//` and `/* */` comments plus trailing commas so the
/// JSON-with-comments dialect tsconfig uses parses as plain JSON.
fn strip_jsonc(content: &str) -> String {
    static LINE_COMMENT: OnceLock<Regex> = OnceLock::new();
    static BLOCK_COMMENT: OnceLock<Regex> = OnceLock::new();
    static TRAILING_COMMA: OnceLock<Regex> = OnceLock::new();

    let line = LINE_COMMENT.get_or_init(|| Regex::new(r"(?m)//[^\n]*$").unwrap());
    let block = BLOCK_COMMENT.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
    let comma = TRAILING_COMMA.get_or_init(|| Regex::new(r",(\s*[}\]])").unwrap());

    let without_block = block.replace_all(content, "");
    let without_line = line.replace_all(&without_block, "");
    comma.replace_all(&without_line, "$1").into_owned()
}
