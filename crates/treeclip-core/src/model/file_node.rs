/// A single node in the arena-allocated outline tree.
///
/// Nodes are stored in a flat `Vec<FileNode>` owned by [`FileTree`]. Children
/// are referenced by index from their directory, and `parent` is a plain
/// index back-link, so the arena is the only owner and no reference cycle
/// can form.
///
/// [`FileTree`]: super::FileTree
use compact_str::CompactString;
use std::path::PathBuf;

/// Lightweight index into the arena `Vec<FileNode>`.
///
/// Uses `u32` to keep nodes small. A single local directory subtree never
/// comes close to four billion entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`, panicking in debug builds if it
    /// exceeds `u32::MAX`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What a node is, with the state that only makes sense for that kind.
///
/// A file has no expansion state at all, so "a file that is expanded" cannot
/// be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Directory {
        /// Directories first, then files; each group case-insensitively sorted.
        children: Vec<NodeIndex>,
        /// Whether the children are shown in the outline.
        expanded: bool,
    },
    File,
}

/// A single file or directory in the tree.
#[derive(Debug, Clone)]
pub struct FileNode {
    /// Absolute path. Identity key within one scan.
    pub path: PathBuf,

    /// Display name. Directories carry a trailing path separator.
    pub name: CompactString,

    /// Selected for export. Every node starts checked.
    pub checked: bool,

    /// Index of the containing directory. `None` for the scan root.
    pub parent: Option<NodeIndex>,

    pub kind: NodeKind,
}

impl FileNode {
    /// Create a file node.
    pub fn new_file(path: PathBuf, parent: Option<NodeIndex>) -> Self {
        let name = display_name(&path, false);
        Self {
            path,
            name,
            checked: true,
            parent,
            kind: NodeKind::File,
        }
    }

    /// Create a collapsed, childless directory node.
    pub fn new_dir(path: PathBuf, parent: Option<NodeIndex>) -> Self {
        let name = display_name(&path, true);
        Self {
            path,
            name,
            checked: true,
            parent,
            kind: NodeKind::Directory {
                children: Vec::new(),
                expanded: false,
            },
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// `Some(expanded)` for directories, `None` for files.
    #[inline]
    pub fn expanded(&self) -> Option<bool> {
        match self.kind {
            NodeKind::Directory { expanded, .. } => Some(expanded),
            NodeKind::File => None,
        }
    }

    /// Direct children in display order. Empty for files.
    #[inline]
    pub fn children(&self) -> &[NodeIndex] {
        match &self.kind {
            NodeKind::Directory { children, .. } => children,
            NodeKind::File => &[],
        }
    }
}

/// Final path component, or the whole path when there is none (e.g. `/`).
/// Directories get a trailing separator unless they already end in one.
fn display_name(path: &std::path::Path, is_dir: bool) -> CompactString {
    let mut name = match path.file_name() {
        Some(n) => CompactString::new(n.to_string_lossy()),
        None => CompactString::new(path.to_string_lossy()),
    };
    if is_dir && !name.ends_with(std::path::MAIN_SEPARATOR) {
        name.push(std::path::MAIN_SEPARATOR);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR;

    #[test]
    fn directory_name_gets_trailing_separator() {
        let node = FileNode::new_dir(PathBuf::from("project").join("src"), None);
        assert_eq!(node.name, format!("src{MAIN_SEPARATOR}"));
        assert_eq!(node.expanded(), Some(false));
        assert!(node.checked);
    }

    #[test]
    fn file_has_no_expansion_state() {
        let node = FileNode::new_file(PathBuf::from("readme.md"), None);
        assert_eq!(node.name, "readme.md");
        assert_eq!(node.expanded(), None);
        assert!(node.children().is_empty());
    }

    #[test]
    fn filesystem_root_keeps_single_separator() {
        let root = PathBuf::from(MAIN_SEPARATOR.to_string());
        let node = FileNode::new_dir(root, None);
        assert_eq!(node.name, MAIN_SEPARATOR.to_string());
    }
}
