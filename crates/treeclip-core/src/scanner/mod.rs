/// Scanner module: builds a fresh [`FileTree`] from the filesystem.
///
/// Scanning is synchronous and atomic per request. A rescan discards the
/// previous tree and builds a new one from scratch; nothing is diffed and
/// no selection state carries over.
pub mod walk;

use crate::model::FileTree;
use crate::platform::{self, HiddenPredicate};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Options for one scan.
#[derive(Clone, Copy)]
pub struct ScanOptions {
    /// Keep entries the predicate reports as hidden.
    pub include_hidden: bool,
    /// Consulted only when `include_hidden` is `false`.
    pub is_hidden: HiddenPredicate,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_hidden: false,
            is_hidden: platform::is_hidden,
        }
    }
}

impl ScanOptions {
    pub fn with_hidden(include_hidden: bool) -> Self {
        Self {
            include_hidden,
            ..Self::default()
        }
    }
}

impl std::fmt::Debug for ScanOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanOptions")
            .field("include_hidden", &self.include_hidden)
            .finish_non_exhaustive()
    }
}

/// A directory that could not be listed. Not fatal: the directory stays in
/// the tree with no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIssue {
    pub path: PathBuf,
    pub message: String,
}

/// Everything a scan produces.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// The new tree. Its root is expanded; everything else is collapsed and
    /// every node is checked.
    pub tree: FileTree,
    pub issues: Vec<ScanIssue>,
    pub dirs: u64,
    pub files: u64,
    pub duration: Duration,
}

/// Scan `root` and return a freshly built tree.
pub fn scan(root: &Path, options: &ScanOptions) -> ScanReport {
    let start = Instant::now();
    info!(
        "Scanning {} (include_hidden={})",
        root.display(),
        options.include_hidden
    );

    let mut issues = Vec::new();
    let (mut tree, counts) = walk::walk_tree(root, options, &mut issues);

    // Only the top level starts open.
    let root_idx = tree.root();
    tree.set_expanded(root_idx, true);

    let duration = start.elapsed();
    info!(
        "Scan complete: {} nodes, {} unreadable directories in {:?}",
        tree.len(),
        issues.len(),
        duration
    );

    ScanReport {
        tree,
        issues,
        dirs: counts.dirs,
        files: counts.files,
        duration,
    }
}
