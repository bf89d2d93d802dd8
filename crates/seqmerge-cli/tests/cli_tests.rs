//! Integration tests for the seqmerge CLI binary.
//!
//! These tests exercise the compiled binary using assert_cmd against
//! repositories built with the git CLI.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use seqmerge_test_utils::GitFixture;

/// Get a Command for the seqmerge binary, pointed at `repo`
fn seqmerge_cmd(repo: &GitFixture) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("seqmerge"));
    cmd.current_dir(repo.root()).env_remove("SEQMERGE_REPO");
    cmd
}

fn clean_chain() -> GitFixture {
    let repo = GitFixture::new();
    repo.checkout_new_branch("branch1");
    repo.create_and_commit("a.txt", "aaa");
    repo.checkout_new_branch("branch2");
    repo.create_and_commit("b.txt", "content");
    repo.checkout_new_branch("branch3");
    repo
}

fn conflicting_chain() -> GitFixture {
    let repo = GitFixture::new();
    repo.checkout_new_branch("branch1");
    repo.create_and_commit("a.txt", "aaa");
    repo.checkout_new_branch("branch2");
    repo.create_and_commit("b.txt", "content");
    repo.create_and_commit("a.txt", "bbb");
    repo.checkout("branch1");
    repo.create_and_commit("a.txt", "cccc");
    repo.checkout_new_branch("branch3");
    repo
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_output() {
    let repo = GitFixture::new();
    seqmerge_cmd(&repo)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_no_command_shows_help_hint() {
    let repo = GitFixture::new();
    seqmerge_cmd(&repo)
        .assert()
        .success()
        .stdout(predicate::str::contains("seqmerge --help"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_reports_missing_branches() {
    let repo = clean_chain();
    seqmerge_cmd(&repo)
        .args(["check", "branch1", "branch2", "branch3", "branch4", "branch5"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("branch4"))
        .stdout(predicate::str::contains("branch5"))
        .stdout(predicate::str::contains("branch1").not());
}

#[test]
fn test_check_all_present() {
    let repo = clean_chain();
    seqmerge_cmd(&repo)
        .args(["check", "branch1", "branch2", "branch3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 3 branches exist"));
}

#[test]
fn test_check_json() {
    let repo = clean_chain();
    let output = seqmerge_cmd(&repo)
        .args(["check", "--json", "branch5", "branch1", "branch4"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let missing: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(missing, vec!["branch5", "branch4"]);
}

#[test]
fn test_check_outside_repository() {
    let temp = tempfile::TempDir::new().unwrap();
    let repo = GitFixture::new();
    seqmerge_cmd(&repo)
        .arg("-C")
        .arg(temp.path())
        .args(["check", "branch1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot access repository"));
}

#[test]
fn test_check_from_subdirectory() {
    let repo = clean_chain();
    fs::create_dir_all(repo.root().join("nested/dir")).unwrap();

    let mut cmd = seqmerge_cmd(&repo);
    cmd.current_dir(repo.root().join("nested/dir"))
        .args(["check", "branch1", "branch2"])
        .assert()
        .success();
}

// ============================================================================
// merge
// ============================================================================

#[test]
fn test_merge_clean_chain() {
    let repo = clean_chain();
    seqmerge_cmd(&repo)
        .args(["merge", "branch1", "branch2", "branch3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 2 branch pair(s)"));

    assert_eq!(repo.current_branch(), "branch3");
}

#[test]
fn test_merge_conflict_reports_files() {
    let repo = conflicting_chain();
    seqmerge_cmd(&repo)
        .args(["merge", "branch1", "branch2", "branch3"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("branch1"))
        .stdout(predicate::str::contains("branch2"));

    assert_eq!(repo.current_branch(), "branch2");
}

#[test]
fn test_merge_conflict_json() {
    let repo = conflicting_chain();
    let output = seqmerge_cmd(&repo)
        .args(["merge", "--json", "branch1", "branch2", "branch3"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        outcome,
        serde_json::json!({ "base": "branch1", "head": "branch2", "conflicts": ["a.txt"] })
    );
}

#[test]
fn test_merge_clean_json_is_null() {
    let repo = clean_chain();
    seqmerge_cmd(&repo)
        .args(["merge", "--json", "branch1", "branch2", "branch3"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn test_merge_checks_branches_first() {
    let repo = clean_chain();
    let head = repo.rev_parse("HEAD");

    seqmerge_cmd(&repo)
        .args(["merge", "branch1", "branch2", "branch3", "branch4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing branches: branch4"));

    // Nothing was checked out or merged
    assert_eq!(repo.current_branch(), "branch3");
    assert_eq!(repo.rev_parse("HEAD"), head);
}

#[test]
fn test_merge_no_check_fails_on_missing_branch() {
    let repo = clean_chain();
    seqmerge_cmd(&repo)
        .args(["merge", "--no-check", "branch1", "branch2", "branch3", "branch4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("branch4").and(predicate::str::contains("not found")));
}

#[test]
fn test_merge_requires_branches() {
    let repo = clean_chain();
    seqmerge_cmd(&repo)
        .arg("merge")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No branches given"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_merge_named_chain() {
    let repo = conflicting_chain();
    repo.write_file(
        ".seqmerge.toml",
        "[chains]\nrelease = [\"branch1\", \"branch2\", \"branch3\"]\n",
    );

    seqmerge_cmd(&repo)
        .args(["merge", "--chain", "release"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("a.txt"));
}

#[test]
fn test_merge_unknown_chain() {
    let repo = clean_chain();
    seqmerge_cmd(&repo)
        .args(["merge", "--chain", "release"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Chain 'release' is not defined"));
}

#[test]
fn test_chains_lists_configured_chains() {
    let repo = clean_chain();
    repo.write_file(
        ".seqmerge.toml",
        "[chains]\nrelease = [\"branch1\", \"branch2\"]\n",
    );

    seqmerge_cmd(&repo)
        .arg("chains")
        .assert()
        .success()
        .stdout(predicate::str::contains("release"))
        .stdout(predicate::str::contains("branch1 -> branch2"));
}

#[test]
fn test_explicit_config_file() {
    let repo = clean_chain();
    repo.write_file("ci/chains.toml", "[chains]\nci = [\"branch1\", \"branch2\"]\n");

    seqmerge_cmd(&repo)
        .args(["--config", "ci/chains.toml", "check", "--chain", "ci"])
        .assert()
        .success();
}

#[test]
fn test_invalid_config_is_an_error() {
    let repo = clean_chain();
    repo.write_file(".seqmerge.toml", "[chains\n");

    seqmerge_cmd(&repo)
        .args(["check", "branch1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains(".seqmerge.toml"));
}

#[test]
fn test_local_config_restores_branch_check() {
    let repo = clean_chain();
    repo.write_file(".seqmerge.toml", "[merge]\ncheck_branches = false\n");
    repo.write_file(".seqmerge.local.toml", "[merge]\ncheck_branches = true\n");

    seqmerge_cmd(&repo)
        .args(["merge", "branch1", "branch2", "branch3", "branch4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing branches: branch4"));

    assert_eq!(repo.current_branch(), "branch3");
}
