use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn roster_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("roster"))
}

fn write_agent(root: &Path, name: &str, model: &str) {
    let body = format!("---\nname: {name}\nmodel: {model}\n---\n\n# {name}\n");
    fs::write(root.join(format!("{name}.md")), body).expect("write agent file");
}

fn write_readme(root: &Path, content: &str) {
    fs::write(root.join("README.md"), content).expect("write README");
}

fn readme_bytes(root: &Path) -> Vec<u8> {
    fs::read(root.join("README.md")).expect("read README")
}

const DIVERGENT_README: &str = "\
# Agents

| Agent | Model | Purpose |
| --- | --- | --- |
| [Alpha](alpha.md) | stale-model | triage |
";

#[test]
fn sync_rewrites_divergent_readme() {
    let repo = TempDir::new().expect("repo");
    write_agent(repo.path(), "alpha", "fresh-model");
    write_readme(repo.path(), DIVERGENT_README);

    roster_cmd()
        .args(["sync", "--root"])
        .arg(repo.path())
        .assert()
        .success()
        .stdout(contains("1 model cell(s) updated"));

    let readme = String::from_utf8(readme_bytes(repo.path())).expect("utf8");
    assert!(readme.contains("| [Alpha](alpha.md) | fresh-model | triage |"));
    assert!(!readme.contains("stale-model"));
}

#[test]
fn sync_is_idempotent_across_invocations() {
    let repo = TempDir::new().expect("repo");
    write_agent(repo.path(), "alpha", "fresh-model");
    write_readme(repo.path(), DIVERGENT_README);

    roster_cmd()
        .args(["sync", "--root"])
        .arg(repo.path())
        .assert()
        .success();
    let after_first = readme_bytes(repo.path());

    roster_cmd()
        .args(["sync", "--root"])
        .arg(repo.path())
        .assert()
        .success()
        .stdout(contains("already matches"));
    assert_eq!(readme_bytes(repo.path()), after_first);
}

#[test]
fn dry_run_reports_changes_and_writes_nothing() {
    let repo = TempDir::new().expect("repo");
    write_agent(repo.path(), "alpha", "fresh-model");
    write_readme(repo.path(), DIVERGENT_README);
    let before = readme_bytes(repo.path());

    roster_cmd()
        .args(["sync", "--dry-run", "--root"])
        .arg(repo.path())
        .assert()
        .success()
        .stdout(contains("[dry-run]"))
        .stdout(contains("1 model cell(s) would change"));

    assert_eq!(readme_bytes(repo.path()), before, "dry-run must not write");
}

#[test]
fn missing_agent_rows_warn_but_succeed() {
    let repo = TempDir::new().expect("repo");
    write_agent(repo.path(), "alpha", "fresh-model");
    write_readme(
        repo.path(),
        "\
| [Alpha](alpha.md) | stale-model | triage |
| [Ghost](ghost.md) | whatever | haunting |
",
    );

    roster_cmd()
        .args(["sync", "--root"])
        .arg(repo.path())
        .assert()
        .success()
        .stderr(contains("missing_agent: 1"));

    let readme = String::from_utf8(readme_bytes(repo.path())).expect("utf8");
    assert!(readme.contains("| [Alpha](alpha.md) | fresh-model | triage |"));
    assert!(readme.contains("| [Ghost](ghost.md) | whatever | haunting |"));
}

#[test]
fn empty_mapping_is_fatal() {
    let repo = TempDir::new().expect("repo");
    write_readme(repo.path(), DIVERGENT_README);

    roster_cmd()
        .args(["sync", "--root"])
        .arg(repo.path())
        .assert()
        .failure()
        .stderr(contains("no agent model declarations"));
}

#[test]
fn structural_error_aborts_without_writing() {
    let repo = TempDir::new().expect("repo");
    write_agent(repo.path(), "alpha", "fresh-model");
    write_readme(
        repo.path(),
        "\
| [Alpha](alpha.md) | stale-model | would be rewritten |
| [Broken] (broken.md) | m | d |
",
    );
    let before = readme_bytes(repo.path());

    roster_cmd()
        .args(["sync", "--root"])
        .arg(repo.path())
        .assert()
        .failure()
        .stderr(contains("unrecognized agent cell format"));

    assert_eq!(
        readme_bytes(repo.path()),
        before,
        "structural error must leave the README byte-identical"
    );
}

#[test]
fn wrong_extension_link_aborts_without_writing() {
    let repo = TempDir::new().expect("repo");
    write_agent(repo.path(), "alpha", "fresh-model");
    write_readme(
        repo.path(),
        "| [Gamma](gamma.txt) | model-z | desc |\n",
    );
    let before = readme_bytes(repo.path());

    roster_cmd()
        .args(["sync", "--root"])
        .arg(repo.path())
        .assert()
        .failure()
        .stderr(contains("does not reference a markdown file"));

    assert_eq!(readme_bytes(repo.path()), before);
}

#[test]
fn crlf_line_endings_survive_a_sync() {
    let repo = TempDir::new().expect("repo");
    write_agent(repo.path(), "alpha", "fresh-model");
    write_readme(
        repo.path(),
        "# Agents\r\n\r\n| [Alpha](alpha.md) | stale-model | triage |\r\n",
    );

    roster_cmd()
        .args(["sync", "--root"])
        .arg(repo.path())
        .assert()
        .success();

    let readme = String::from_utf8(readme_bytes(repo.path())).expect("utf8");
    assert_eq!(
        readme,
        "# Agents\r\n\r\n| [Alpha](alpha.md) | fresh-model | triage |\r\n"
    );
}
