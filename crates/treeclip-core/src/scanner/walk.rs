/// Directory walker built on `jwalk`, run serially on the calling thread.
///
/// Ordering and hidden-file filtering are applied in jwalk's per-directory
/// `process_read_dir` hook, before the walker decides what to descend into.
/// A filtered directory is therefore never read at all, and every
/// directory's entries arrive already in display order: directories first,
/// then files, each group case-insensitively sorted.
///
/// Entries stream out depth-first, so a directory is always seen before its
/// contents. `dir_map` maps each directory path to its arena index so a child
/// can find its parent in O(1).
use super::{ScanIssue, ScanOptions};
use crate::model::{FileNode, FileTree, NodeIndex};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Counters gathered while walking, reported back to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkCounts {
    pub dirs: u64,
    pub files: u64,
}

/// Walk `root_path` and build the full tree.
///
/// Directories that cannot be listed stay in the tree as childless leaves;
/// the failure is pushed onto `issues`.
pub fn walk_tree(
    root_path: &Path,
    options: &ScanOptions,
    issues: &mut Vec<ScanIssue>,
) -> (FileTree, WalkCounts) {
    let mut counts = WalkCounts::default();

    let root_node = if root_path.is_dir() {
        counts.dirs += 1;
        FileNode::new_dir(root_path.to_path_buf(), None)
    } else {
        counts.files += 1;
        FileNode::new_file(root_path.to_path_buf(), None)
    };
    let root_is_dir = root_node.is_dir();
    let mut tree = FileTree::new(root_node);
    if !root_is_dir {
        return (tree, counts);
    }

    let mut dir_map: HashMap<PathBuf, NodeIndex> = HashMap::new();
    dir_map.insert(root_path.to_path_buf(), tree.root());

    let include_hidden = options.include_hidden;
    let is_hidden = options.is_hidden;

    let walker = jwalk::WalkDir::new(root_path)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(move |depth, _dir_path, _state, children| {
            // `None` is the synthetic listing holding the root itself, which is
            // never filtered even when its own name looks hidden.
            if depth.is_none() {
                return;
            }
            if !include_hidden {
                children.retain(|entry| match entry {
                    Ok(e) => !is_hidden(&e.path()),
                    Err(_) => true,
                });
            }
            children.sort_by(|a, b| match (a, b) {
                (Ok(a), Ok(b)) => compare_entries(
                    a.file_type.is_dir(),
                    &a.file_name,
                    b.file_type.is_dir(),
                    &b.file_name,
                ),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => Ordering::Equal,
            });
        });

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // jwalk reports a directory it could not list as an error item.
                // The directory node is already in the tree and simply stays empty.
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                warn!("Cannot read {}: {err}", path.display());
                issues.push(ScanIssue {
                    path,
                    message: err.to_string(),
                });
                continue;
            }
        };

        // The root itself was created above.
        if entry.depth == 0 {
            continue;
        }

        let path = entry.path();
        let parent_idx = match path.parent().and_then(|p| dir_map.get(p)) {
            Some(&idx) => idx,
            None => {
                debug_assert!(false, "walker yielded {} before its parent", path.display());
                continue;
            }
        };

        if entry.file_type.is_dir() {
            let idx = tree.add_child(parent_idx, FileNode::new_dir(path.clone(), None));
            dir_map.insert(path, idx);
            counts.dirs += 1;
        } else {
            // Symlinks, sockets, devices and broken links all display as files.
            tree.add_child(parent_idx, FileNode::new_file(path, None));
            counts.files += 1;
        }
    }

    debug!(
        "Walked {}: {} dirs, {} files, {} unreadable",
        root_path.display(),
        counts.dirs,
        counts.files,
        issues.len()
    );

    (tree, counts)
}

/// Directories before files; within a group, case-insensitive by name with
/// the raw name as tie-breaker so the order is total.
pub(crate) fn compare_entries(a_dir: bool, a_name: &OsStr, b_dir: bool, b_name: &OsStr) -> Ordering {
    b_dir.cmp(&a_dir).then_with(|| {
        let a_lower = a_name.to_string_lossy().to_lowercase();
        let b_lower = b_name.to_string_lossy().to_lowercase();
        a_lower.cmp(&b_lower).then_with(|| a_name.cmp(b_name))
    })
}
