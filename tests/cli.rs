//! End-to-end runs of the `mktree` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mktree(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mktree").expect("binary should build");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn creates_layout_in_empty_directory() {
    let dir = TempDir::new().unwrap();

    mktree(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "📁 Running structure check in current repository...\n\n",
        ))
        .stdout(predicate::str::contains("Created directory: ./app\n"))
        .stdout(predicate::str::contains(
            "Created file: ./app/companies/[id]/page.tsx\n",
        ))
        .stdout(predicate::str::contains("Created file: ./README.md\n"))
        .stdout(predicate::str::ends_with("\n✅ Structure creation complete.\n"))
        .stdout(predicate::str::contains("Skipped").not());

    let root = dir.path();
    assert_eq!(
        fs::read_to_string(root.join(".env.local.example")).unwrap(),
        "AI_API_KEY=\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# VC Intelligence Interface + Live Enrichment\n"
    );
    assert!(root.join("components/SignalBadge.tsx").is_file());
    assert!(root.join("app/api/enrich/route.ts").is_file());
}

#[test]
fn action_lines_follow_layout_order() {
    let dir = TempDir::new().unwrap();

    let output = mktree(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("Created"))
        .collect();

    assert_eq!(lines.len(), 28);
    assert_eq!(
        &lines[..4],
        &[
            "Created directory: ./app",
            "Created file: ./app/layout.tsx",
            "Created file: ./app/page.tsx",
            "Created directory: ./app/companies",
        ]
    );
    assert_eq!(lines[27], "Created file: ./README.md");
}

#[test]
fn second_run_skips_everything() {
    let dir = TempDir::new().unwrap();
    mktree(dir.path()).assert().success();

    mktree(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped existing directory: ./app\n"))
        .stdout(predicate::str::contains("Skipped existing file: ./lib/enrich.ts\n"))
        .stdout(predicate::str::contains("Created").not());
}

#[test]
fn keeps_existing_file_contents() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "my own readme").unwrap();

    mktree(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped existing file: ./README.md\n"));

    assert_eq!(
        fs::read_to_string(dir.path().join("README.md")).unwrap(),
        "my own readme"
    );
}

#[test]
fn fails_when_a_file_blocks_a_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lib"), "").unwrap();

    mktree(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created directory: ./data\n"))
        .stdout(predicate::str::contains("Skipped existing directory: ./lib\n"))
        .stdout(predicate::str::contains("Structure creation complete").not())
        .stderr(predicate::str::contains("writing ./lib/enrich.ts"));

    assert!(dir.path().join("data/companies.json").is_file());
    assert!(!dir.path().join("components").exists());
}

#[test]
fn rejects_unknown_arguments() {
    let dir = TempDir::new().unwrap();

    mktree(dir.path()).arg("--force").assert().failure();
    assert!(!dir.path().join("app").exists());
}
