//! Framework family and Tailwind version detection.

use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::context::ProjectContext;

/// Detected framework family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Next,
    Vite,
    React,
    Unknown,
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Next => "Next.js",
            Self::Vite => "Vite",
            Self::React => "React",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Detected Tailwind CSS major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailwindVersion {
    V3,
    V4,
}

/// Read `dependencies ∪ devDependencies` names and versions.
fn all_dependencies(ctx: &ProjectContext) -> Option<serde_json::Map<String, Value>> {
    let content = fs::read_to_string(ctx.root().join("package.json")).ok()?;
    let manifest: Value = serde_json::from_str(&content).ok()?;

    let mut all = serde_json::Map::new();
    for key in ["dependencies", "devDependencies"] {
        if let Some(deps) = manifest.get(key).and_then(Value::as_object) {
            all.extend(deps.clone());
        }
    }
    Some(all)
}

/// Classify the framework family from package.json dependencies.
pub fn detect_framework(ctx: &ProjectContext) -> Framework {
    let Some(deps) = all_dependencies(ctx) else {
        return Framework::Unknown;
    };

    if deps.contains_key("next") {
        Framework::Next
    } else if deps.contains_key("vite") {
        Framework::Vite
    } else if deps.contains_key("react") {
        Framework::React
    } else {
        Framework::Unknown
    }
}

/// Classify the Tailwind CSS major version, if installed.
///
/// A `^3` / `~3` / `3.x` range is v3; anything else installed is treated
/// as v4-or-newer.
pub fn detect_tailwind_version(ctx: &ProjectContext) -> Option<TailwindVersion> {
    let deps = all_dependencies(ctx)?;
    let range = deps.get("tailwindcss")?.as_str()?;

    let majors = range.trim_start_matches(['^', '~', '=', 'v']);
    if majors.starts_with('3') {
        Some(TailwindVersion::V3)
    } else {
        Some(TailwindVersion::V4)
    }
}

/// First existing candidate path relative to the project root.
fn first_existing(ctx: &ProjectContext, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|c| ctx.root().join(c))
        .find(|p| p.exists())
}

/// Find the global stylesheet, per framework conventions.
pub fn find_global_css(ctx: &ProjectContext, framework: Framework) -> Option<PathBuf> {
    let candidates: &[&str] = if framework == Framework::Next {
        &[
            "app/globals.css",
            "src/app/globals.css",
            "styles/globals.css",
            "src/styles/globals.css",
        ]
    } else {
        &[
            "src/index.css",
            "src/globals.css",
            "src/App.css",
            "index.css",
            "styles/globals.css",
        ]
    };
    first_existing(ctx, candidates)
}

/// Find the Tailwind config file.
pub fn find_tailwind_config(ctx: &ProjectContext) -> Option<PathBuf> {
    first_existing(
        ctx,
        &[
            "tailwind.config.ts",
            "tailwind.config.js",
            "tailwind.config.mjs",
            "tailwind.config.cjs",
        ],
    )
}

/// Find the document head target: a Next layout file or a plain HTML page.
pub fn find_head_layout(ctx: &ProjectContext, framework: Framework) -> Option<PathBuf> {
    if framework == Framework::Next {
        let layout = first_existing(
            ctx,
            &[
                "app/layout.tsx",
                "app/layout.jsx",
                "app/layout.js",
                "src/app/layout.tsx",
                "src/app/layout.jsx",
                "src/app/layout.js",
            ],
        );
        if layout.is_some() {
            return layout;
        }
    }

    first_existing(ctx, &["index.html", "public/index.html"])
}
