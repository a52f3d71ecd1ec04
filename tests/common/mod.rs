//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then `use common::prelude::*;`.

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::lists;
    pub use super::TestFixture;
}

/// List file snippets shared by the tests.
#[allow(dead_code)]
pub mod lists {
    /// Authoritative file: one banned entry that must be filtered out.
    pub const AUTHORITATIVE: &str = "#[TCG]\r\n!TCG\r\n14558127 1 --Ash Blossom\r\n55144522 3 --Pot of Greed\r\n";

    /// Fallback file overriding nothing the authoritative file has.
    pub const FALLBACK_OCG: &str = "!OCG\n14558127 2\n!TCG\n99999999 0\n";

    /// Fallback file with an entry using the unlimited sentinel.
    pub const FALLBACK_GOAT: &str = "!GOAT\n12345678 -1\n87654321 0\n";

    /// Configuration selecting the three lists above plus one nobody defines.
    pub const CONFIG: &str = "header: '# merged'\npriority: [TCG, OCG, GOAT, Missing]\n";

    /// Expected merge of the lists above under `CONFIG`.
    pub const EXPECTED: &str = "# merged\n#[TCG][OCG][GOAT][Missing]\n!TCG\n14558127 1 --Ash Blossom\n!OCG\n14558127 2\n!GOAT\n87654321 0\n";
}

/// A temporary directory to lay out list files and repositories in.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn join(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lflist-sync");
        cmd.current_dir(self.path())
            .env_remove("LFLIST_SYNC_CONFIG")
            .env_remove("LFLIST_SYNC_WORKDIR")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }

    /// Turn `dir` into a git repository on branch `main` with one commit
    /// holding `files`.
    pub fn git_repo(&self, dir: &str, files: &[(&str, &str)]) -> PathBuf {
        let repo = self.join(dir);
        std::fs::create_dir_all(&repo).expect("Failed to create repo dir");
        git(&repo, &["init", "--quiet"]);
        git(&repo, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        for (path, content) in files {
            let full = repo.join(path);
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create dir");
            }
            std::fs::write(full, content).expect("Failed to write file");
        }
        git(&repo, &["add", "--all"]);
        git(&repo, &["commit", "--quiet", "--allow-empty", "-m", "seed"]);
        repo
    }

    /// Bare copy of a repository, usable as a push target.
    pub fn bare_clone(&self, source: &Path, dir: &str) -> PathBuf {
        let bare = self.join(dir);
        git(
            self.path(),
            &[
                "clone",
                "--quiet",
                "--bare",
                source.to_str().unwrap(),
                bare.to_str().unwrap(),
            ],
        );
        bare
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Run git with a fixed identity, panicking on failure.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(args)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
