//! Git repository fixture driven through the `git` CLI.
//!
//! The fixture builds history with real `git` commands so that the code under
//! test (which uses libgit2) reads repositories written by another
//! implementation.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository with helpers for building branch history.
///
/// The repository starts with no commits. The first
/// [`checkout_new_branch`](Self::checkout_new_branch) names the unborn branch,
/// so the initial default branch never appears in branch listings.
///
/// # Example
///
/// ```rust,no_run
/// use seqmerge_test_utils::GitFixture;
///
/// let repo = GitFixture::new();
/// repo.checkout_new_branch("branch1");
/// repo.create_and_commit("a.txt", "aaa");
/// assert_eq!(repo.branches(), vec!["branch1".to_string()]);
/// ```
pub struct GitFixture {
    temp_dir: TempDir,
}

impl Default for GitFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl GitFixture {
    /// Run `git init` in a fresh temporary directory and configure an
    /// identity for commits.
    ///
    /// # Panics
    /// Panics if the directory cannot be created or any git command fails.
    pub fn new() -> Self {
        let temp_dir = TempDir::new()
            .unwrap_or_else(|e| panic!("GitFixture::new: failed to create temp dir: {e}"));
        let fixture = Self { temp_dir };

        fixture.git(&["init"]);
        fixture.git(&["config", "user.email", "test@test.com"]);
        fixture.git(&["config", "user.name", "Test User"]);
        fixture.git(&["config", "commit.gpgsign", "false"]);

        fixture
    }

    /// Return the working directory of the repository.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run a git command in the repository and return its trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command cannot be spawned or exits unsuccessfully.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.root())
            .output()
            .unwrap_or_else(|e| panic!("GitFixture: failed to run `git {args:?}`: {e}"));
        if !output.status.success() {
            panic!(
                "GitFixture: `git {args:?}` failed:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Create a branch from the current HEAD and switch to it.
    pub fn checkout_new_branch(&self, name: &str) {
        self.git(&["checkout", "-b", name]);
    }

    /// Switch to an existing branch.
    pub fn checkout(&self, name: &str) {
        self.git(&["checkout", name]);
    }

    /// Write `content` to `path` (relative to the root), stage it and commit.
    pub fn create_and_commit(&self, path: &str, content: &str) {
        self.write_file(path, content);
        self.git(&["add", path]);
        self.git(&["commit", "-m", &format!("create {path}")]);
    }

    /// Write `content` to `path` (relative to the root) without staging.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("GitFixture: failed to create {}: {e}", parent.display()));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("GitFixture: failed to write {}: {e}", full_path.display()));
    }

    /// Read a file (relative to the root) from the working tree.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("GitFixture: failed to read {}: {e}", full_path.display()))
    }

    /// Name of the checked-out branch.
    pub fn current_branch(&self) -> String {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// Names of all local branches, sorted.
    pub fn branches(&self) -> Vec<String> {
        self.git(&["for-each-ref", "--format=%(refname:short)", "refs/heads/"])
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Commit id a revision resolves to.
    pub fn rev_parse(&self, rev: &str) -> String {
        self.git(&["rev-parse", rev])
    }

    /// Whether the repository is in the middle of a merge.
    pub fn is_merging(&self) -> bool {
        self.root().join(".git/MERGE_HEAD").exists()
    }
}
