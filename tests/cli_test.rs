//! Integration tests for the envlint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, content) in files {
        let path = temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    temp
}

fn envlint(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("envlint"));
    cmd.current_dir(temp.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envlint"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lint"))
        .stdout(predicate::str::contains("fix"))
        .stdout(predicate::str::contains("scan"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envlint"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_without_subcommand_prints_hint() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);
    envlint(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("envlint --help"));
    Ok(())
}

#[test]
fn lint_clean_project() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(".env", "PORT=8080\nHOST=localhost\n")]);
    envlint(&temp)
        .args(["lint", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
    Ok(())
}

#[test]
fn lint_reports_issues_and_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(
        ".env",
        "PORT=8080\n\nPORT=3000\nMALFORMED LINE WITHOUT EQUALS\nEMPTY_VAR=\n",
    )]);
    envlint(&temp)
        .args(["lint", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Line 1-3: duplicate variable 'PORT'"))
        .stdout(predicate::str::contains("Line 4: malformed line"))
        .stdout(predicate::str::contains("Line 5: empty value 'EMPTY_VAR'"))
        .stdout(predicate::str::contains("Found 3 issue(s) across 1 file(s)"));
    Ok(())
}

#[test]
fn lint_quiet_clean_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(".env", "PORT=8080\n")]);
    envlint(&temp)
        .args(["lint", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn lint_without_env_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);
    envlint(&temp)
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("No .env files found to lint"));
    Ok(())
}

#[test]
fn lint_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(".env.local", "API_KEY=\n")]);
    let output = envlint(&temp)
        .args(["lint", "--format", "json", ".env.local"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value["count"], 1);
    assert_eq!(value["issues"][0]["kind"], "empty-value");
    assert_eq!(value["issues"][0]["key"], "API_KEY");
    assert_eq!(value["files"][0], ".env.local");
    Ok(())
}

#[test]
fn lint_github_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(".env", "A_KEY=1\nA_KEY=2\n")]);
    envlint(&temp)
        .args(["lint", "-f", "github"])
        .assert()
        .code(1)
        .stdout(predicate::eq(
            "::error file=.env,line=1::duplicate variable 'A_KEY'\n",
        ));
    Ok(())
}

#[test]
fn lint_uses_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[
        (
            ".envlint.yaml",
            "required_vars: [DATABASE_URL]\nrules:\n  security: true\n",
        ),
        (".env", "STRIPE_KEY=sk_live_51H1234567890abcdefghij\n"),
    ]);
    envlint(&temp)
        .args(["lint", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "missing required variable 'DATABASE_URL'",
        ))
        .stdout(predicate::str::contains("potential secret in plaintext 'STRIPE_KEY'"));
    Ok(())
}

#[test]
fn lint_broken_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(".envlint.yaml", "rules: [unclosed"), (".env", "A=1\n")]);
    envlint(&temp)
        .arg("lint")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn lint_directory_requires_recursive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("services/api/.env", "TOKEN=\n")]);
    envlint(&temp)
        .args(["lint", "services"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--recursive"));

    envlint(&temp)
        .args(["lint", "--no-color", "-r", "services"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("services/api/.env"));
    Ok(())
}

#[test]
fn lint_auto_discover() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[
        ("src/app.js", "const url = process.env.DATABASE_URL;\n"),
        (".env", "PORT=8080\n"),
    ]);
    envlint(&temp)
        .args(["lint", "--no-color", "--auto-discover"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Auto-discovered 1 required variables"))
        .stdout(predicate::str::contains(
            "missing required variable 'DATABASE_URL'",
        ));
    Ok(())
}

#[test]
fn check_reports_each_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(".env", "PORT=1\n"), (".env.bad", "NO EQUALS\n")]);
    envlint(&temp)
        .args(["check", ".env", ".env.bad", ".env.missing"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(".env: syntax OK"))
        .stdout(predicate::str::contains(".env.bad: 1 syntax error(s)"))
        .stdout(predicate::str::contains(".env.missing: file not found"));
    Ok(())
}

#[test]
fn check_requires_a_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);
    envlint(&temp).arg("check").assert().failure();
    Ok(())
}

#[test]
fn fix_dry_run_then_apply() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(".env", "PORT=1\nGREETING= hello world\nPORT=2\n")]);

    envlint(&temp)
        .args(["fix", "--dry-run", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 fix(es) would be applied"));
    assert_eq!(
        fs::read_to_string(temp.path().join(".env"))?,
        "PORT=1\nGREETING= hello world\nPORT=2\n"
    );

    envlint(&temp)
        .args(["fix", "--backup", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed 2 issue(s) across 1 file(s)"));
    assert_eq!(
        fs::read_to_string(temp.path().join(".env"))?,
        "GREETING=\"hello world\"\nPORT=2\n"
    );
    assert!(temp.path().join(".env.backup").exists());

    envlint(&temp)
        .args(["lint", "--no-color"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn lint_github_output_escapes_messages() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(".env", "100% BROKEN\n")]);
    envlint(&temp)
        .args(["lint", "-f", "github"])
        .assert()
        .code(1)
        .stdout(predicate::eq(
            "::error file=.env,line=1::malformed line '100%25 BROKEN'\n",
        ));
    Ok(())
}

#[test]
fn scan_lists_required_variables() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[
        ("app/main.go", "port := os.Getenv(\"PORT\")\n"),
        ("node_modules/dep/index.js", "process.env.VENDORED_VAR\n"),
    ]);
    envlint(&temp)
        .args(["scan", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PORT"))
        .stdout(predicate::str::contains("VENDORED_VAR").not());
    Ok(())
}

#[test]
fn init_creates_then_refuses() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);
    envlint(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .envlint.yaml"));
    assert!(temp.path().join(".envlint.yaml").exists());

    envlint(&temp)
        .arg("init")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("already exists"));

    envlint(&temp).args(["init", "--force"]).assert().success();
    Ok(())
}
