//! Tailwind v3 config file injection.
//!
//! v4 projects configure everything through stylesheet directives (see
//! `stylesheet.rs`); their config file, if any, is left alone. For v3 the
//! config either gets created whole or patched at known anchors.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::sync::OnceLock;

use crate::context::ProjectContext;
use crate::detection::{find_tailwind_config, TailwindVersion};
use crate::error::Result;
use crate::installer::PackageInstaller;
use crate::ui::UserInterface;

use super::{approve_mutation, backup, InjectOutcome};

/// npm packages the Glint theme needs in the consumer project.
pub const PLUGIN_PACKAGES: [&str; 5] = [
    "glint-color-system",
    "glint-typography",
    "glint-shade-mode",
    "tailwindcss-animate",
    "tailwind-scrollbar-hide",
];

/// Idempotency marker: the plugin declaration every configured file has.
const MARKER: &str = "glint-color-system";

const REQUIRE_LINE: &str =
    "const { plugin, mappingVars } = require('glint-color-system')";

/// Plugin entries inserted into the `plugins` array, keyed by the
/// substring that proves they are already present.
const PLUGIN_DECLS: [(&str, &str); 5] = [
    ("glint-color-system", "plugin"),
    ("tailwindcss-animate", "require('tailwindcss-animate')"),
    ("tailwind-scrollbar-hide", "require('tailwind-scrollbar-hide')"),
    ("glint-typography", "require('glint-typography')"),
    ("glint-shade-mode", "require('glint-shade-mode')"),
];

/// Install the Glint plugin packages if the consumer lacks them.
pub fn ensure_plugin_packages(packages: &mut PackageInstaller<'_>, ui: &mut dyn UserInterface) {
    let required: BTreeSet<String> = PLUGIN_PACKAGES.iter().map(|p| p.to_string()).collect();
    packages.ensure_installed(&required, ui);
}

/// Create or patch the Tailwind config for a v3 project.
pub fn configure_tailwind(
    ctx: &ProjectContext,
    version: TailwindVersion,
    base_path: &str,
    defaults: bool,
    ui: &mut dyn UserInterface,
) -> Result<InjectOutcome> {
    if version == TailwindVersion::V4 {
        // Nothing to do here; the stylesheet carries the configuration.
        return Ok(InjectOutcome::NoTarget);
    }

    let content_paths = build_content_paths(base_path);

    let Some(existing) = find_tailwind_config(ctx) else {
        let path = ctx.root().join("tailwind.config.ts");
        fs::write(&path, config_template(&content_paths))?;
        ui.success("Created tailwind.config.ts");
        return Ok(InjectOutcome::Created(path));
    };

    let content = fs::read_to_string(&existing)?;
    if content.contains(MARKER) {
        ui.success(&format!(
            "{} already has Glint plugins",
            existing.display()
        ));
        return Ok(InjectOutcome::AlreadyConfigured(existing));
    }

    let question = format!(
        "{} already exists. Add Glint plugins to it?",
        existing.display()
    );
    if !approve_mutation(ui, defaults, "tailwind_config", &question)? {
        ui.message(&format!("Skipped modifying {}", existing.display()));
        return Ok(InjectOutcome::Skipped(existing));
    }

    backup(&existing, ui)?;

    match inject_into_config(&content, &content_paths) {
        Some(patched) => {
            fs::write(&existing, patched)?;
            ui.success(&format!("Updated {} with Glint plugins", existing.display()));
            Ok(InjectOutcome::Updated(existing))
        }
        None => {
            ui.warning(&format!(
                "Could not find an injection point in {}. Add the Glint plugins manually:",
                existing.display()
            ));
            ui.message(&format!("  {REQUIRE_LINE}"));
            ui.message("  plugins: [plugin, require('tailwindcss-animate'), ...]");
            Ok(InjectOutcome::Skipped(existing))
        }
    }
}

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).unwrap())
}

/// Patch an existing config at its anchors.
///
/// Returns `None` when the file offers nothing to anchor on (no `plugins`
/// array and no closing brace to append one before).
fn inject_into_config(content: &str, content_paths: &[String]) -> Option<String> {
    static COLORS: OnceLock<Regex> = OnceLock::new();
    static EXTEND: OnceLock<Regex> = OnceLock::new();
    static THEME: OnceLock<Regex> = OnceLock::new();
    static PLUGINS: OnceLock<Regex> = OnceLock::new();
    static CONTENT: OnceLock<Regex> = OnceLock::new();

    let mut result = content.to_string();

    if !content.contains(MARKER) {
        result = format!("{REQUIRE_LINE}\n{result}");
    }

    // Theme variables: spread mappingVars into the innermost anchor we
    // can find, outermost otherwise.
    if !content.contains("...mappingVars") {
        let colors = regex(&COLORS, r"(colors:\s*\{)");
        let extend = regex(&EXTEND, r"(extend:\s*\{)");
        let theme = regex(&THEME, r"(theme:\s*\{)");

        if colors.is_match(&result) {
            result = colors
                .replace(&result, "$1\n        ...mappingVars,")
                .into_owned();
        } else if extend.is_match(&result) {
            result = extend
                .replace(
                    &result,
                    "$1\n      colors: {\n        ...mappingVars,\n      },",
                )
                .into_owned();
        } else if theme.is_match(&result) {
            result = theme
                .replace(
                    &result,
                    "$1\n    extend: {\n      colors: {\n        ...mappingVars,\n      },\n    },",
                )
                .into_owned();
        }
    }

    // Plugins: insert the missing ones into an existing array, or append
    // a whole plugins section before the final closing brace.
    let plugins = regex(&PLUGINS, r"(plugins:\s*\[)");
    if plugins.is_match(&result) {
        for (marker, declaration) in PLUGIN_DECLS {
            if !content.contains(marker) {
                result = plugins
                    .replace(&result, format!("$1\n    {declaration},"))
                    .into_owned();
            }
        }
    } else {
        let section = PLUGIN_DECLS
            .map(|(_, declaration)| format!("    {declaration},"))
            .join("\n");
        let closing = result.rfind('}')?;
        result.insert_str(closing, &format!("  plugins: [\n{section}\n  ],\n"));
    }

    // Content globs: make sure the install base path is scanned.
    let content_anchor = regex(&CONTENT, r"(content:\s*\[)");
    for glob in content_paths {
        if !result.contains(glob.as_str()) && content_anchor.is_match(&result) {
            result = content_anchor
                .replace(&result, format!("$1\n    \"{glob}\","))
                .into_owned();
        }
    }

    Some(result)
}

/// Tailwind content globs for the install base path.
fn build_content_paths(base_path: &str) -> Vec<String> {
    let normalized = base_path
        .trim_start_matches("./")
        .trim_end_matches('/');

    let mut paths = vec![format!("./{normalized}/**/*.{{js,ts,jsx,tsx}}")];
    if !normalized.contains("app") {
        paths.push("./app/**/*.{js,ts,jsx,tsx}".to_string());
    }
    paths
}

/// Full config written when the project has none.
fn config_template(content_paths: &[String]) -> String {
    let content = content_paths
        .iter()
        .map(|p| format!("    \"{p}\","))
        .collect::<Vec<_>>()
        .join("\n");
    let plugins = PLUGIN_DECLS
        .map(|(_, declaration)| format!("    {declaration},"))
        .join("\n");

    format!(
        "{REQUIRE_LINE}\n\
         import type {{ Config }} from \"tailwindcss\";\n\
         \n\
         export default {{\n\
         \x20 content: [\n{content}\n  ],\n\
         \x20 theme: {{\n\
         \x20   extend: {{\n\
         \x20     colors: {{\n\
         \x20       ...mappingVars,\n\
         \x20     }},\n\
         \x20   }},\n\
         \x20 }},\n\
         \x20 plugins: [\n{plugins}\n  ],\n\
         }} satisfies Config;\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn ctx(temp: &TempDir) -> ProjectContext {
        ProjectContext::new(temp.path())
    }

    #[test]
    fn absent_config_is_created_whole() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let outcome =
            configure_tailwind(&ctx(&temp), TailwindVersion::V3, "./src/", true, &mut ui).unwrap();

        assert!(matches!(outcome, InjectOutcome::Created(_)));
        let written = fs::read_to_string(temp.path().join("tailwind.config.ts")).unwrap();
        assert!(written.contains("glint-color-system"));
        assert!(written.contains("...mappingVars"));
        assert!(written.contains("./src/**/*.{js,ts,jsx,tsx}"));
    }

    #[test]
    fn v4_project_leaves_config_alone() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tailwind.config.ts"), "export default {}").unwrap();
        let mut ui = MockUI::new();

        let outcome =
            configure_tailwind(&ctx(&temp), TailwindVersion::V4, "./src/", true, &mut ui).unwrap();

        assert_eq!(outcome, InjectOutcome::NoTarget);
        assert_eq!(
            fs::read_to_string(temp.path().join("tailwind.config.ts")).unwrap(),
            "export default {}"
        );
    }

    #[test]
    fn configured_file_stays_byte_identical() {
        let temp = TempDir::new().unwrap();
        let original = "const { plugin, mappingVars } = require('glint-color-system')\nexport default { plugins: [plugin] }\n";
        fs::write(temp.path().join("tailwind.config.js"), original).unwrap();
        let mut ui = MockUI::new();

        let outcome =
            configure_tailwind(&ctx(&temp), TailwindVersion::V3, "./src/", true, &mut ui).unwrap();

        assert!(matches!(outcome, InjectOutcome::AlreadyConfigured(_)));
        assert_eq!(
            fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap(),
            original
        );
        assert!(!temp.path().join("tailwind.config.js.bak").exists());
    }

    #[test]
    fn unconfigured_file_gets_backup_and_plugins() {
        let temp = TempDir::new().unwrap();
        let original = r##"import type { Config } from "tailwindcss";
export default {
  content: [
    "./index.html",
  ],
  theme: {
    extend: {
      colors: {
        brand: "#123456",
      },
    },
  },
  plugins: [
    require('tailwindcss-animate'),
  ],
} satisfies Config;
"##;
        fs::write(temp.path().join("tailwind.config.ts"), original).unwrap();
        let mut ui = MockUI::new();

        let outcome =
            configure_tailwind(&ctx(&temp), TailwindVersion::V3, "./src/", true, &mut ui).unwrap();

        assert!(matches!(outcome, InjectOutcome::Updated(_)));
        assert_eq!(
            fs::read_to_string(temp.path().join("tailwind.config.ts.bak")).unwrap(),
            original
        );

        let patched = fs::read_to_string(temp.path().join("tailwind.config.ts")).unwrap();
        assert!(patched.starts_with(REQUIRE_LINE));
        assert!(patched.contains("...mappingVars"));
        assert!(patched.contains("require('glint-typography')"));
        assert!(patched.contains("./src/**/*.{js,ts,jsx,tsx}"));
        // The plugin already present is not inserted a second time.
        assert_eq!(patched.matches("tailwindcss-animate").count(), 1);
    }

    #[test]
    fn config_without_plugins_array_gets_appended_section() {
        let temp = TempDir::new().unwrap();
        let original = "export default {\n  theme: {},\n};\n";
        fs::write(temp.path().join("tailwind.config.js"), original).unwrap();
        let mut ui = MockUI::new();

        configure_tailwind(&ctx(&temp), TailwindVersion::V3, "./src/", true, &mut ui).unwrap();

        let patched = fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap();
        assert!(patched.contains("plugins: ["));
        assert!(patched.contains("require('glint-shade-mode')"));
    }

    #[test]
    fn declined_prompt_skips_mutation() {
        let temp = TempDir::new().unwrap();
        let original = "export default { plugins: [] };\n";
        fs::write(temp.path().join("tailwind.config.js"), original).unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response("tailwind_config", "false");

        let outcome =
            configure_tailwind(&ctx(&temp), TailwindVersion::V3, "./src/", false, &mut ui)
                .unwrap();

        assert!(matches!(outcome, InjectOutcome::Skipped(_)));
        assert_eq!(
            fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap(),
            original
        );
    }

    #[test]
    fn no_anchor_at_all_prints_manual_instructions() {
        let temp = TempDir::new().unwrap();
        // No braces: nothing to anchor on, nothing to append before.
        fs::write(temp.path().join("tailwind.config.js"), "// empty\n").unwrap();
        let mut ui = MockUI::new();

        let outcome =
            configure_tailwind(&ctx(&temp), TailwindVersion::V3, "./src/", true, &mut ui).unwrap();

        assert!(matches!(outcome, InjectOutcome::Skipped(_)));
        assert!(ui.warnings().iter().any(|w| w.contains("manually")));
    }

    #[test]
    fn running_twice_changes_nothing_after_first_pass() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("tailwind.config.js"),
            "export default { plugins: [] };\n",
        )
        .unwrap();
        let mut ui = MockUI::new();

        configure_tailwind(&ctx(&temp), TailwindVersion::V3, "./src/", true, &mut ui).unwrap();
        let after_first = fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap();
        // Remove the backup so a second backup write would be visible.
        fs::remove_file(temp.path().join("tailwind.config.js.bak")).unwrap();

        let outcome =
            configure_tailwind(&ctx(&temp), TailwindVersion::V3, "./src/", true, &mut ui).unwrap();

        assert!(matches!(outcome, InjectOutcome::AlreadyConfigured(_)));
        assert_eq!(
            fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap(),
            after_first
        );
        assert!(!temp.path().join("tailwind.config.js.bak").exists());
    }
}
