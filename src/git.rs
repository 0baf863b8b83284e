//! Git lookups for prior-commit snapshot content

use crate::infra::{CommandExecutor, RealCommandExecutor};
use thiserror::Error;

/// Environment variable that overrides the baseline commit for comparisons.
pub const COMPARE_SHA_ENV: &str = "COMPARE_GIT_SHA";

/// Git operation errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command failed with an error message
    #[error("Git command failed: {0}")]
    CommandFailed(String),

    /// Git output contained invalid UTF-8
    #[error("Invalid UTF-8 in git output")]
    InvalidUtf8,

    /// IO error occurred while executing git command
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Git repository interface with dependency injection for testability
pub struct GitRepository<CE: CommandExecutor = RealCommandExecutor> {
    cmd_executor: CE,
}

impl GitRepository<RealCommandExecutor> {
    /// Create a new GitRepository with real command execution
    pub fn new() -> Self {
        Self {
            cmd_executor: RealCommandExecutor,
        }
    }
}

impl Default for GitRepository<RealCommandExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<CE: CommandExecutor> GitRepository<CE> {
    /// Create a GitRepository with a custom command executor (for testing)
    pub fn with_executor(cmd_executor: CE) -> Self {
        Self { cmd_executor }
    }

    /// Get the full hash of the currently checked-out commit.
    pub fn head_commit(&self) -> Result<String, GitError> {
        let output = self
            .cmd_executor
            .execute(|cmd| cmd.args(["rev-parse", "HEAD"]), "git")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed(stderr.to_string()));
        }

        let hash = String::from_utf8(output.stdout)
            .map_err(|_| GitError::InvalidUtf8)?
            .trim()
            .to_string();

        Ok(hash)
    }

    /// Get the content of `path` as it existed at `commit`.
    ///
    /// Returns `Ok(None)` when the file did not exist at that commit (a
    /// normal state for newly added snapshots). Only a failure to run git at
    /// all is surfaced as an error.
    pub fn show_file(&self, commit: &str, path: &str) -> Result<Option<String>, GitError> {
        let spec = format!("{}:{}", commit, path);
        let output = self
            .cmd_executor
            .execute(|cmd| cmd.args(["show", &spec]), "git")?;

        if !output.status.success() {
            return Ok(None);
        }

        let contents = String::from_utf8(output.stdout).map_err(|_| GitError::InvalidUtf8)?;
        Ok(Some(contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{mock_exit_status, CommandExecutor};
    use std::process::{Command, Output};

    // Mock CommandExecutor for testing
    struct MockCommandExecutor {
        stdout: Vec<u8>,
        stderr: Vec<u8>,
        exit_code: i32,
    }

    impl CommandExecutor for MockCommandExecutor {
        fn output(&self, _cmd: &mut Command) -> std::io::Result<Output> {
            Ok(Output {
                status: mock_exit_status(self.exit_code),
                stdout: self.stdout.clone(),
                stderr: self.stderr.clone(),
            })
        }
    }

    #[test]
    fn test_head_commit_trims_trailing_newline() {
        let mock = MockCommandExecutor {
            stdout: b"0123456789abcdef0123456789abcdef01234567\n".to_vec(),
            stderr: vec![],
            exit_code: 0,
        };
        let repo = GitRepository::with_executor(mock);

        let hash = repo.head_commit().unwrap();
        assert_eq!(hash, "0123456789abcdef0123456789abcdef01234567");
    }

    #[test]
    fn test_head_commit_failure_surfaces_stderr() {
        let mock = MockCommandExecutor {
            stdout: vec![],
            stderr: b"fatal: not a git repository".to_vec(),
            exit_code: 128,
        };
        let repo = GitRepository::with_executor(mock);

        let err = repo.head_commit().unwrap_err();
        assert!(matches!(err, GitError::CommandFailed(_)));
        assert!(err.to_string().contains("not a git repository"));
    }

    #[test]
    fn test_show_file_returns_contents() {
        let mock = MockCommandExecutor {
            stdout: b"123456\n".to_vec(),
            stderr: vec![],
            exit_code: 0,
        };
        let repo = GitRepository::with_executor(mock);

        let contents = repo.show_file("HEAD", ".forge-snapshots/a.snap").unwrap();
        assert_eq!(contents.as_deref(), Some("123456\n"));
    }

    #[test]
    fn test_show_file_missing_path_is_none_not_error() {
        let mock = MockCommandExecutor {
            stdout: vec![],
            stderr: b"fatal: path '.forge-snapshots/new.snap' does not exist in 'HEAD'".to_vec(),
            exit_code: 128,
        };
        let repo = GitRepository::with_executor(mock);

        let contents = repo.show_file("HEAD", ".forge-snapshots/new.snap").unwrap();
        assert!(contents.is_none());
    }

    // Integration tests with real git
    #[test]
    fn test_head_commit_against_real_git() {
        let repo = GitRepository::new();
        if let Ok(hash) = repo.head_commit() {
            assert!(!hash.is_empty(), "Commit hash should not be empty");
            assert!(
                hash.chars().all(|c| c.is_ascii_hexdigit()),
                "Hash should be hex"
            );
        }
    }
}
