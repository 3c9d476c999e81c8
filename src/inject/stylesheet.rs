//! Global stylesheet injection.
//!
//! Tailwind v4 consumers get `@plugin` directives; v3 consumers get the
//! classic `@tailwind` layer directives. The v4 marker is the
//! `glint-shade-mode` plugin directive, the v3 marker is `@tailwind base`.

use std::fs;
use std::path::PathBuf;

use crate::context::ProjectContext;
use crate::detection::{find_global_css, Framework, TailwindVersion};
use crate::error::Result;
use crate::ui::UserInterface;

use super::{approve_mutation, backup, InjectOutcome};

const V4_DIRECTIVES: [&str; 7] = [
    "@import \"tailwindcss\";",
    "@plugin \"glint-shade-mode\";",
    "@plugin \"tailwind-scrollbar-hide\";",
    "@plugin \"tailwindcss-animate\";",
    "@plugin \"glint-typography\";",
    "@plugin \"glint-color-system\";",
    "@import \"glint-color-system/theme.css\";",
];

const V4_MARKER: &str = "glint-shade-mode";

const V3_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

const V3_MARKER: &str = "@tailwind base";

/// Conventional stylesheet location when none exists yet.
fn default_css_path(ctx: &ProjectContext, framework: Framework) -> PathBuf {
    if framework == Framework::Next {
        ctx.root().join("app/globals.css")
    } else {
        ctx.root().join("src/index.css")
    }
}

/// Create or patch the global stylesheet.
pub fn configure_stylesheet(
    ctx: &ProjectContext,
    framework: Framework,
    version: TailwindVersion,
    defaults: bool,
    ui: &mut dyn UserInterface,
) -> Result<InjectOutcome> {
    let existing = find_global_css(ctx, framework);

    let Some(existing) = existing else {
        let path = default_css_path(ctx, framework);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = match version {
            TailwindVersion::V4 => format!("{}\n", V4_DIRECTIVES.join("\n")),
            TailwindVersion::V3 => format!("{V3_DIRECTIVES}\n"),
        };
        fs::write(&path, content)?;
        ui.success(&format!("Created {}", path.display()));
        return Ok(InjectOutcome::Created(path));
    };

    let content = fs::read_to_string(&existing)?;
    let marker = match version {
        TailwindVersion::V4 => V4_MARKER,
        TailwindVersion::V3 => V3_MARKER,
    };
    if content.contains(marker) {
        ui.success(&format!(
            "{} already has Glint directives",
            existing.display()
        ));
        return Ok(InjectOutcome::AlreadyConfigured(existing));
    }

    let question = format!(
        "{} exists. Add Glint stylesheet directives?",
        existing.display()
    );
    if !approve_mutation(ui, defaults, "stylesheet", &question)? {
        ui.message(&format!("Skipped modifying {}", existing.display()));
        return Ok(InjectOutcome::Skipped(existing));
    }

    backup(&existing, ui)?;

    let patched = match version {
        TailwindVersion::V4 => inject_v4(&content),
        TailwindVersion::V3 => format!("{V3_DIRECTIVES}\n{content}"),
    };
    fs::write(&existing, patched)?;
    ui.success(&format!("Updated {}", existing.display()));
    Ok(InjectOutcome::Updated(existing))
}

/// Insert the missing v4 directives after the tailwind import when the
/// file has one, otherwise prepend the whole block.
fn inject_v4(content: &str) -> String {
    let missing: Vec<&str> = V4_DIRECTIVES
        .iter()
        .filter(|line| !content.contains(line.trim_end_matches(';')))
        .copied()
        .collect();

    if missing.is_empty() {
        return content.to_string();
    }

    for import in ["@import \"tailwindcss\";", "@import 'tailwindcss';"] {
        if let Some(position) = content.find(import) {
            let insert_at = position + import.len();
            let block: Vec<&str> = missing
                .iter()
                .filter(|l| !l.starts_with("@import \"tailwindcss\""))
                .copied()
                .collect();
            let mut result = content.to_string();
            result.insert_str(insert_at, &format!("\n{}", block.join("\n")));
            return result;
        }
    }

    format!("{}\n\n{content}", missing.join("\n"))
}
