//! Integration tests driving the glint binary against scaffolded
//! consumer projects.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// package.json declaring everything the bundled templates import, so no
/// test ever spawns a real package manager.
const FULL_DEPS: &str = r#"{
  "name": "consumer",
  "dependencies": {
    "react": "^18.2.0",
    "lucide-react": "^0.469.0",
    "clsx": "^2.1.0",
    "tailwind-merge": "^2.2.0",
    "class-variance-authority": "^0.7.0",
    "glint-color-system": "^1.0.0",
    "glint-typography": "^1.0.0",
    "glint-shade-mode": "^1.0.0",
    "tailwindcss-animate": "^1.0.7",
    "tailwind-scrollbar-hide": "^1.1.7"
  }
}"#;

fn setup_project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), FULL_DEPS).unwrap();
    fs::write(temp.path().join("glint.json"), manifest).unwrap();
    temp
}

fn glint(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("glint"));
    cmd.current_dir(temp.path());
    // Force the non-interactive UI so prompts take defaults.
    cmd.env("CI", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("glint"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Installer CLI for the Glint UI design-system templates",
        ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("glint"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn add_without_manifest_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), FULL_DEPS).unwrap();

    let mut cmd = Command::new(cargo_bin("glint"));
    cmd.current_dir(temp.path());
    cmd.env("CI", "1");
    cmd.args(["add", "Button"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("glint.json not found"));
    Ok(())
}

#[test]
fn add_installs_component_and_transitive_util() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    glint(&temp).args(["add", "Button"]).assert().success();

    assert!(temp.path().join("src/components/Button.tsx").exists());
    assert!(temp.path().join("src/utils/cn.ts").exists());
    Ok(())
}

#[test]
fn add_unknown_component_reports_but_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    glint(&temp)
        .args(["add", "Nonexistent"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown component template"));
    Ok(())
}

#[test]
fn add_twice_skips_second_install() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    glint(&temp).args(["hook", "useDebounce"]).assert().success();
    let target = temp.path().join("src/hooks/useDebounce.ts");
    let first = fs::read_to_string(&target)?;

    glint(&temp)
        .args(["hook", "useDebounce"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&target)?, first);
    Ok(())
}

#[test]
fn add_replace_overwrites_local_changes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    glint(&temp).args(["hook", "useDebounce"]).assert().success();
    let target = temp.path().join("src/hooks/useDebounce.ts");
    let pristine = fs::read_to_string(&target)?;
    fs::write(&target, "// diverged\n")?;

    glint(&temp)
        .args(["hook", "useDebounce", "--replace"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&target)?, pristine);
    Ok(())
}

#[test]
fn legacy_manifest_places_artifacts_by_derived_aliases(
) -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./lib/" }"#);

    glint(&temp).args(["util", "cn"]).assert().success();

    assert!(temp.path().join("lib/utils/cn.ts").exists());
    Ok(())
}

#[test]
fn alias_manifest_overrides_category_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"{
            "path": "./src/",
            "aliases": {
                "components": "./src/ui",
                "hooks": "./src/hooks",
                "utils": "./src/lib",
                "providers": "./src/providers",
                "layouts": "./src/layouts"
            }
        }"#,
    );

    glint(&temp).args(["add", "Badge"]).assert().success();

    assert!(temp.path().join("src/ui/Badge.tsx").exists());
    assert!(temp.path().join("src/lib/cn.ts").exists());
    Ok(())
}

#[test]
fn layout_command_installs_referenced_component() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    glint(&temp)
        .args(["layout", "DefaultLayout"])
        .assert()
        .success();

    assert!(temp.path().join("src/layouts/DefaultLayout.tsx").exists());
    assert!(temp.path().join("src/components/NavRail.tsx").exists());
    Ok(())
}

#[test]
fn provider_command_installs_provider() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    glint(&temp)
        .args(["provider", "ThemeProvider"])
        .assert()
        .success();

    assert!(temp.path().join("src/providers/ThemeProvider.tsx").exists());
    assert!(temp.path().join("src/hooks/useMediaQuery.ts").exists());
    Ok(())
}

#[test]
fn directory_template_installs_without_dev_variant() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    glint(&temp).args(["add", "DataTable"]).assert().success();

    let dir = temp.path().join("src/components/DataTable");
    assert!(dir.join("DataTable.tsx").exists());
    assert!(dir.join("DataTableRow.tsx").exists());
    assert!(!dir.join("DataTable.dev.tsx").exists());
    Ok(())
}

#[test]
fn update_without_confirmation_is_cancelled() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    // Non-interactive confirm takes the default (no).
    glint(&temp)
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Update cancelled"));
    Ok(())
}

#[test]
fn update_resyncs_diverged_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    glint(&temp).args(["add", "Badge"]).assert().success();
    let badge = temp.path().join("src/components/Badge.tsx");
    let pristine = fs::read_to_string(&badge)?;
    fs::write(&badge, "// stale copy\n")?;

    glint(&temp).args(["update", "--yes"]).assert().success();

    assert_eq!(fs::read_to_string(&badge)?, pristine);
    Ok(())
}

#[test]
fn update_with_nothing_installed_reports_each_category(
) -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "path": "./src/" }"#);

    glint(&temp)
        .args(["update", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components to update"))
        .stdout(predicate::str::contains("No layouts to update"));
    Ok(())
}

#[test]
fn init_defaults_writes_manifest_and_stylesheet() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), FULL_DEPS).unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();

    glint(&temp).args(["init", "--defaults"]).assert().success();

    let manifest = fs::read_to_string(temp.path().join("glint.json"))?;
    assert!(manifest.contains("\"aliases\""));
    assert!(manifest.contains("./src/components"));

    // No tailwindcss dependency declared: treated as v4, so the stylesheet
    // carries the configuration and no config file is created.
    let css = fs::read_to_string(temp.path().join("src/index.css"))?;
    assert!(css.contains("@plugin \"glint-shade-mode\";"));
    assert!(!temp.path().join("tailwind.config.ts").exists());

    // Base utilities landed.
    assert!(temp.path().join("src/utils/cn.ts").exists());
    assert!(temp.path().join("src/utils/types.ts").exists());
    Ok(())
}

#[test]
fn init_on_v3_project_creates_tailwind_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let deps = FULL_DEPS.replace(
        r#""react": "^18.2.0","#,
        r#""react": "^18.2.0", "tailwindcss": "^3.4.1","#,
    );
    fs::write(temp.path().join("package.json"), deps).unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();

    glint(&temp).args(["init", "--defaults"]).assert().success();

    let config = fs::read_to_string(temp.path().join("tailwind.config.ts"))?;
    assert!(config.contains("glint-color-system"));
    assert!(config.contains("...mappingVars"));
    Ok(())
}

#[test]
fn init_without_package_json_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();

    glint(&temp)
        .args(["init", "--defaults"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No package.json"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("glint"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("glint"));
    Ok(())
}
