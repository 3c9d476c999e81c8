//! Font link injection into the document head.
//!
//! Glint ships icon glyphs via RemixIcon and text in Inter; both arrive as
//! `<link>` tags. The target is either a plain HTML page (Vite/React) or a
//! JSX layout file (Next). The idempotency marker is the RemixIcon link.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::context::ProjectContext;
use crate::detection::{find_head_layout, Framework};
use crate::error::Result;
use crate::ui::UserInterface;

use super::{approve_mutation, backup, InjectOutcome};

const FONT_LINKS: [&str; 3] = [
    r#"<link href="https://cdn.jsdelivr.net/npm/remixicon@4.5.0/fonts/remixicon.css" rel="stylesheet" />"#,
    r#"<link rel="preconnect" href="https://rsms.me/" />"#,
    r#"<link rel="stylesheet" href="https://rsms.me/inter/inter.css" />"#,
];

const MARKER_ICONS: &str = "remixicon";
const MARKER_FONT: &str = "rsms.me/inter";

/// Add the Glint font links to the project's head/layout file.
pub fn configure_fonts(
    ctx: &ProjectContext,
    framework: Framework,
    defaults: bool,
    ui: &mut dyn UserInterface,
) -> Result<InjectOutcome> {
    let Some(target) = find_head_layout(ctx, framework) else {
        ui.warning("Could not find a layout or HTML file. Add the font links manually:");
        print_manual_instructions(ui);
        return Ok(InjectOutcome::NoTarget);
    };

    let content = fs::read_to_string(&target)?;
    if content.contains(MARKER_ICONS) && content.contains(MARKER_FONT) {
        ui.success(&format!("{} already has Glint font links", target.display()));
        return Ok(InjectOutcome::AlreadyConfigured(target));
    }

    let question = format!(
        "Add Glint font links (RemixIcon + Inter) to {}?",
        target.display()
    );
    if !approve_mutation(ui, defaults, "fonts", &question)? {
        ui.message("Skipped adding font links. Add them manually:");
        print_manual_instructions(ui);
        return Ok(InjectOutcome::Skipped(target));
    }

    backup(&target, ui)?;

    let patched = if target.extension().is_some_and(|e| e == "html") {
        Some(inject_into_html(&content))
    } else {
        inject_into_jsx(&content)
    };

    match patched {
        Some(patched) => {
            fs::write(&target, patched)?;
            ui.success(&format!("Added font links to {}", target.display()));
            Ok(InjectOutcome::Updated(target))
        }
        None => {
            ui.warning(&format!(
                "Could not determine an injection point in {}. Add the font links manually:",
                target.display()
            ));
            print_manual_instructions(ui);
            Ok(InjectOutcome::Skipped(target))
        }
    }
}

fn links_block(indent: &str) -> String {
    FONT_LINKS
        .map(|link| format!("{indent}{link}"))
        .join("\n")
}

/// HTML pages always have somewhere to put the links: before `</head>` if
/// present, otherwise a synthesized head block on top.
fn inject_into_html(content: &str) -> String {
    let block = links_block("    ");

    if let Some(position) = content.find("</head>") {
        let mut result = content.to_string();
        result.insert_str(position, &format!("{block}\n  "));
        result
    } else {
        format!("<head>\n{block}\n</head>\n{content}")
    }
}

/// JSX layouts: after an opening `<head>` tag, before a closing one, or a
/// synthesized head right after `<html>`. Anything else is unguessable.
fn inject_into_jsx(content: &str) -> Option<String> {
    static HEAD_OPEN: OnceLock<Regex> = OnceLock::new();
    static HTML_OPEN: OnceLock<Regex> = OnceLock::new();

    let block = links_block("        ");

    // `<head>` or `<head lang=...>`, but not `<header>`.
    let head_open = HEAD_OPEN.get_or_init(|| Regex::new(r"<head(\s[^>]*)?>").unwrap());
    if let Some(found) = head_open.find(content) {
        let mut result = content.to_string();
        result.insert_str(found.end(), &format!("\n{block}"));
        return Some(result);
    }

    if let Some(position) = content.find("</head>") {
        let mut result = content.to_string();
        result.insert_str(position, &format!("{block}\n        "));
        return Some(result);
    }

    let html_open = HTML_OPEN.get_or_init(|| Regex::new(r"<html[^>]*>").unwrap());
    if let Some(found) = html_open.find(content) {
        let mut result = content.to_string();
        result.insert_str(
            found.end(),
            &format!("\n      <head>\n{block}\n      </head>"),
        );
        return Some(result);
    }

    None
}

fn print_manual_instructions(ui: &mut dyn UserInterface) {
    ui.message("Add these to your <head>:");
    for link in FONT_LINKS {
        ui.message(&format!("  {link}"));
    }
}

/// Check a file for the font markers (used by tests and status output).
pub fn has_font_links(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|content| content.contains(MARKER_ICONS) && content.contains(MARKER_FONT))
        .unwrap_or(false)
}
