//! Snapshot file reading
//!
//! Gas snapshots are flat files holding a single base-10 integer, one per
//! measurement, named `<name>_<pair>.snap`. Absence is a normal state (new
//! snapshots have no prior file), so reads yield `Option` rather than
//! erroring.

use crate::infra::{FileSystem, RealFileSystem};
use std::io;
use std::path::{Path, PathBuf};

/// Default directory the test harness writes snapshots into
pub const SNAPSHOT_DIR: &str = ".forge-snapshots";

/// Reads gas snapshots from a flat directory
pub struct SnapshotStore<FS: FileSystem = RealFileSystem> {
    dir: PathBuf,
    fs: FS,
}

impl SnapshotStore<RealFileSystem> {
    /// Create a store over `dir` using the real filesystem
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(dir, RealFileSystem)
    }
}

impl<FS: FileSystem> SnapshotStore<FS> {
    /// Create a store with a custom filesystem implementation
    pub fn with_fs(dir: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            dir: dir.into(),
            fs,
        }
    }

    /// The directory this store reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the snapshot for a (name, pair) identifier.
    ///
    /// Resolves to `<dir>/<name>_<pair>.snap`. Returns `None` when the file
    /// does not exist or its content is not a base-10 integer.
    pub fn read(&self, name: &str, pair: &str) -> Option<u64> {
        self.read_path(&self.dir.join(format!("{}_{}.snap", name, pair)))
    }

    /// Read the snapshot at an explicit path.
    pub fn read_path(&self, path: &Path) -> Option<u64> {
        match self.fs.read_to_string(path) {
            Ok(contents) => parse_snapshot(&contents, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read snapshot {}: {}", path.display(), e);
                None
            }
        }
    }

    /// List all snapshot files in the store's directory, sorted by name.
    pub fn snapshot_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in self.fs.read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Parse trimmed snapshot content as a base-10 integer.
///
/// Malformed content is surfaced as a warning and treated as absent rather
/// than propagating NaN into downstream arithmetic.
pub fn parse_snapshot(contents: &str, path: &Path) -> Option<u64> {
    match contents.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!(
                "Malformed snapshot {}: expected a base-10 integer",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_parses_trimmed_integer() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("settler_uniswapV3_USDC-WETH.snap"),
            "123876\n",
        )
        .unwrap();

        let store = SnapshotStore::new(temp_dir.path());
        assert_eq!(store.read("settler_uniswapV3", "USDC-WETH"), Some(123876));
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());
        assert_eq!(store.read("settler_uniswapV3", "USDC-WETH"), None);
    }

    #[test]
    fn test_read_malformed_content_is_none() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("bad_USDC-WETH.snap"), "not a number").unwrap();

        let store = SnapshotStore::new(temp_dir.path());
        assert_eq!(store.read("bad", "USDC-WETH"), None);
    }

    #[test]
    fn test_snapshot_files_sorted_and_files_only() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.snap"), "2").unwrap();
        std::fs::write(temp_dir.path().join("a.snap"), "1").unwrap();
        std::fs::create_dir(temp_dir.path().join("subdir")).unwrap();

        let store = SnapshotStore::new(temp_dir.path());
        let files = store.snapshot_files().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.snap", "b.snap"]);
    }

    #[test]
    fn test_parse_snapshot_rejects_negative() {
        let path = Path::new("x.snap");
        assert_eq!(parse_snapshot("-5", path), None);
        assert_eq!(parse_snapshot("100", path), Some(100));
        assert_eq!(parse_snapshot("  100  \n", path), Some(100));
    }
}
