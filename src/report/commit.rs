//! Commit-relative comparison pipeline
//!
//! Every snapshot file in a directory is diffed against its own content at a
//! baseline commit. Reads and git lookups are independent per file, so they
//! fan out in parallel and the joined results are re-sorted by delta for
//! display.

use crate::fmt::format_percent;
use crate::git::GitRepository;
use crate::infra::{CommandExecutor, FileSystem, RealCommandExecutor, RealFileSystem};
use crate::report::delta::{delta_extremes, delta_percent, DeltaExtremes};
use crate::report::severity::classify;
use crate::snapshot::{parse_snapshot, SnapshotStore};
use crate::table::{Cell, MarkdownRenderer, Table, TableRenderer};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::Path;

/// One snapshot compared against its value at the baseline commit
#[derive(Debug, Clone)]
pub struct CommitComparison {
    /// Snapshot identifier (file stem)
    pub name: String,
    /// Current value
    pub current: u64,
    /// Value at the baseline commit
    pub previous: u64,
    /// Percentage delta of current relative to previous
    pub delta: f64,
}

/// Collects commit-relative comparisons for a snapshot directory
pub struct CommitComparer<FS: FileSystem = RealFileSystem, CE: CommandExecutor = RealCommandExecutor>
{
    store: SnapshotStore<FS>,
    git: GitRepository<CE>,
    commit: String,
}

impl CommitComparer<RealFileSystem, RealCommandExecutor> {
    /// Create a comparer over `dir` against `commit`, using the real
    /// filesystem and git.
    ///
    /// `dir` must be given relative to the repository root so the same path
    /// resolves both on disk and inside `git show`.
    pub fn new(dir: impl Into<std::path::PathBuf>, commit: String) -> Self {
        Self::with_parts(SnapshotStore::new(dir), GitRepository::new(), commit)
    }
}

impl<FS: FileSystem, CE: CommandExecutor> CommitComparer<FS, CE> {
    /// Create a comparer from explicit parts (for testing)
    pub fn with_parts(store: SnapshotStore<FS>, git: GitRepository<CE>, commit: String) -> Self {
        Self { store, git, commit }
    }

    /// The commit current values are compared against
    pub fn commit(&self) -> &str {
        &self.commit
    }
}

impl<FS, CE> CommitComparer<FS, CE>
where
    FS: FileSystem + Sync,
    CE: CommandExecutor + Sync,
{
    /// Read every snapshot in the directory and diff it against the baseline
    /// commit, one independent task per file.
    ///
    /// Rows whose current content is unreadable, or whose baseline is zero,
    /// are skipped. A snapshot missing at the baseline commit compares
    /// against its own current value, yielding a zero delta.
    pub fn collect(&self) -> Result<Vec<CommitComparison>> {
        let files = self.store.snapshot_files().with_context(|| {
            format!(
                "Failed to list snapshot directory {}",
                self.store.dir().display()
            )
        })?;

        let rows: Vec<CommitComparison> = files
            .par_iter()
            .filter_map(|path| self.compare_file(path))
            .collect();
        Ok(rows)
    }

    fn compare_file(&self, path: &Path) -> Option<CommitComparison> {
        let current = self.store.read_path(path)?;
        let previous = self.previous_value(path).unwrap_or(current);
        let delta = delta_percent(current, previous)?;
        let name = path.file_stem()?.to_string_lossy().into_owned();
        Some(CommitComparison {
            name,
            current,
            previous,
            delta,
        })
    }

    /// Snapshot value at the baseline commit, or `None` when the file did
    /// not exist there (new snapshots) or git itself is unavailable.
    fn previous_value(&self, path: &Path) -> Option<u64> {
        match self.git.show_file(&self.commit, &path.to_string_lossy()) {
            Ok(Some(contents)) => parse_snapshot(&contents, path),
            Ok(None) => None,
            Err(e) => {
                log::warn!("Baseline lookup failed for {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Extreme deltas across all rows, zero-delta rows included.
pub fn extremes(rows: &[CommitComparison]) -> Option<DeltaExtremes> {
    delta_extremes(rows.iter().map(|r| r.delta))
}

/// Render the comparison table: rows sorted ascending by delta, zero-delta
/// rows omitted, the diff column painted by severity.
pub fn render_table(rows: &[CommitComparison]) -> String {
    let mut sorted: Vec<&CommitComparison> = rows.iter().collect();
    sorted.sort_by(|a, b| a.delta.total_cmp(&b.delta));

    let mut table = Table::new(["Snapshot", "Current", "Previous", "Diff"]);
    for row in sorted {
        if row.delta == 0.0 {
            continue;
        }
        let diff = classify(row.delta).paint(&format!(" {}", format_percent(row.delta)));
        table.push_row([
            Cell::Text(row.name.clone()),
            Cell::Value(row.current),
            Cell::Value(row.previous),
            Cell::Styled(diff),
        ]);
    }
    MarkdownRenderer.render(&table)
}
