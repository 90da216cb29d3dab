/// Arena-backed outline tree with checkbox propagation.
///
/// All nodes live in a single `Vec<FileNode>`. Relationships between nodes
/// use `NodeIndex` (a thin `u32` wrapper) rather than heap pointers, so the
/// upward `parent` link never owns anything.
///
/// # Selection policy
///
/// Checking is asymmetric:
/// - toggling a directory overwrites its whole subtree with the new value;
/// - any node that becomes checked re-checks its unchecked ancestors;
/// - un-checking never touches ancestors, since they may still have other
///   checked descendants.
///
/// Together these keep one invariant: a checked node's parent is checked.
use super::file_node::{FileNode, NodeIndex, NodeKind};
use std::path::Path;

/// The complete outline produced by one scan.
#[derive(Debug, Clone)]
pub struct FileTree {
    /// Arena: every node in a flat vector. Index 0 is the root.
    pub nodes: Vec<FileNode>,
}

impl FileTree {
    /// Create a tree holding only `root`.
    pub fn new(root: FileNode) -> Self {
        debug_assert!(root.parent.is_none(), "root must not have a parent");
        Self { nodes: vec![root] }
    }

    /// Allocate `node` in the arena and append it to `parent`'s children.
    ///
    /// Callers append children in display order; the tree does not re-sort.
    pub fn add_child(&mut self, parent: NodeIndex, mut node: FileNode) -> NodeIndex {
        let idx = NodeIndex::new(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        match &mut self.nodes[parent.idx()].kind {
            NodeKind::Directory { children, .. } => children.push(idx),
            NodeKind::File => panic!("cannot attach a child to a file node"),
        }
        idx
    }

    /// The scan root.
    #[inline]
    pub fn root(&self) -> NodeIndex {
        NodeIndex(0)
    }

    /// Get the node at the given index.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> &FileNode {
        &self.nodes[index.idx()]
    }

    /// Direct children in display order. Empty for files.
    #[inline]
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.nodes[index.idx()].children()
    }

    #[inline]
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index.idx()].parent
    }

    /// Total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for a built tree; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if `index` is the final entry of its parent's children.
    /// The root counts as last.
    pub fn is_last_child(&self, index: NodeIndex) -> bool {
        match self.parent(index) {
            Some(p) => self.children(p).last() == Some(&index),
            None => true,
        }
    }

    /// Number of nodes strictly below `index`.
    pub fn descendant_count(&self, index: NodeIndex) -> usize {
        let mut count = 0;
        let mut stack: Vec<NodeIndex> = self.children(index).to_vec();
        while let Some(idx) = stack.pop() {
            count += 1;
            stack.extend_from_slice(self.children(idx));
        }
        count
    }

    /// Locate the node whose absolute path equals `path`.
    pub fn find_by_path(&self, path: &Path) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .position(|n| n.path == path)
            .map(NodeIndex::new)
    }

    /// Number of checked nodes.
    pub fn checked_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.checked).count()
    }

    /// Set every node's `checked` flag to `value`.
    pub fn set_all_checked(&mut self, value: bool) {
        self.set_checked_cascade_down(self.root(), value);
    }

    // ── Selection propagation ───────────────────────────────────────

    /// Set `index` and every descendant to `value`, overwriting prior state.
    pub fn set_checked_cascade_down(&mut self, index: NodeIndex, value: bool) {
        let mut stack = vec![index];
        while let Some(idx) = stack.pop() {
            let node = &mut self.nodes[idx.idx()];
            node.checked = value;
            stack.extend_from_slice(node.children());
        }
    }

    /// Re-check unchecked ancestors of `index`, stopping at the first
    /// ancestor that is already checked.
    pub fn set_checked_cascade_up(&mut self, index: NodeIndex) {
        let mut current = self.parent(index);
        while let Some(idx) = current {
            let node = &mut self.nodes[idx.idx()];
            if node.checked {
                break;
            }
            node.checked = true;
            current = node.parent;
        }
    }

    /// Flip the checkbox of `index` and propagate.
    ///
    /// Returns the new value.
    pub fn toggle_checked(&mut self, index: NodeIndex) -> bool {
        let new_value = !self.nodes[index.idx()].checked;
        if self.nodes[index.idx()].is_dir() {
            self.set_checked_cascade_down(index, new_value);
        } else {
            self.nodes[index.idx()].checked = new_value;
        }
        if new_value {
            self.set_checked_cascade_up(index);
        }
        new_value
    }

    /// Flip a directory's expansion. Files are left untouched.
    ///
    /// Returns the new expansion state, or `None` for a file.
    pub fn toggle_expanded(&mut self, index: NodeIndex) -> Option<bool> {
        match &mut self.nodes[index.idx()].kind {
            NodeKind::Directory { expanded, .. } => {
                *expanded = !*expanded;
                Some(*expanded)
            }
            NodeKind::File => None,
        }
    }

    /// Set a directory's expansion explicitly. No-op for files.
    pub fn set_expanded(&mut self, index: NodeIndex, value: bool) {
        if let NodeKind::Directory { expanded, .. } = &mut self.nodes[index.idx()].kind {
            *expanded = value;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Build:
    ///
    /// ```text
    /// /project/
    ///   src/
    ///     a.py
    ///     B.py
    ///   readme.md
    /// ```
    ///
    /// Root expanded, `src` collapsed, everything checked.
    pub(crate) fn sample_tree() -> FileTree {
        let root_path = PathBuf::from("/project");
        let mut root = FileNode::new_dir(root_path.clone(), None);
        if let NodeKind::Directory { expanded, .. } = &mut root.kind {
            *expanded = true;
        }
        let mut tree = FileTree::new(root);
        let src = tree.add_child(tree.root(), FileNode::new_dir(root_path.join("src"), None));
        tree.add_child(src, FileNode::new_file(root_path.join("src").join("a.py"), None));
        tree.add_child(src, FileNode::new_file(root_path.join("src").join("B.py"), None));
        tree.add_child(tree.root(), FileNode::new_file(root_path.join("readme.md"), None));
        tree
    }

    fn by_name(tree: &FileTree, path: &str) -> NodeIndex {
        tree.find_by_path(Path::new(path)).expect("node must exist")
    }

    /// Every checked node's parent is checked.
    fn assert_ancestors_checked(tree: &FileTree) {
        for node in &tree.nodes {
            if node.checked {
                if let Some(p) = node.parent {
                    assert!(tree.node(p).checked, "{:?} checked under unchecked parent", node.path);
                }
            }
        }
    }

    #[test]
    fn cascade_down_overwrites_whole_subtree() {
        for value in [false, true] {
            let mut tree = sample_tree();
            let src = by_name(&tree, "/project/src");
            // Two more levels under src: src/deep/deeper/x.rs.
            let deep_path = PathBuf::from("/project/src/deep");
            let deep = tree.add_child(src, FileNode::new_dir(deep_path.clone(), None));
            let deeper = tree.add_child(deep, FileNode::new_dir(deep_path.join("deeper"), None));
            let x = tree.add_child(
                deeper,
                FileNode::new_file(deep_path.join("deeper").join("x.rs"), None),
            );
            // Make the subtree mixed first so the overwrite is observable.
            let a = by_name(&tree, "/project/src/a.py");
            tree.nodes[a.idx()].checked = !value;
            tree.nodes[x.idx()].checked = !value;

            tree.set_checked_cascade_down(src, value);

            assert_eq!(tree.node(src).checked, value);
            assert_eq!(tree.descendant_count(src), 5);
            let mut stack = tree.children(src).to_vec();
            while let Some(idx) = stack.pop() {
                assert_eq!(tree.node(idx).checked, value, "{:?}", tree.node(idx).path);
                stack.extend_from_slice(tree.children(idx));
            }
            assert!(tree.node(tree.root()).checked, "root untouched");
            assert!(tree.node(by_name(&tree, "/project/readme.md")).checked, "sibling untouched");
        }
    }

    #[test]
    fn uncheck_never_changes_ancestors() {
        let mut tree = sample_tree();
        let a = by_name(&tree, "/project/src/a.py");
        let src = by_name(&tree, "/project/src");

        assert!(!tree.toggle_checked(a));

        assert!(!tree.node(a).checked);
        assert!(tree.node(src).checked);
        assert!(tree.node(tree.root()).checked);
    }

    #[test]
    fn uncheck_then_recheck_file_restores_state() {
        let mut tree = sample_tree();
        let a = by_name(&tree, "/project/src/a.py");
        let src = by_name(&tree, "/project/src");

        tree.toggle_checked(a);
        assert!(tree.node(src).checked);
        tree.toggle_checked(a);

        assert!(tree.node(a).checked);
        assert!(tree.node(src).checked);
        assert!(tree.node(tree.root()).checked);
    }

    #[test]
    fn checking_leaf_rechecks_ancestor_chain() {
        let mut tree = sample_tree();
        tree.set_all_checked(false);
        let a = by_name(&tree, "/project/src/a.py");

        assert!(tree.toggle_checked(a));

        assert!(tree.node(by_name(&tree, "/project/src")).checked);
        assert!(tree.node(tree.root()).checked);
        assert!(!tree.node(by_name(&tree, "/project/src/B.py")).checked);
        assert!(!tree.node(by_name(&tree, "/project/readme.md")).checked);
        assert_ancestors_checked(&tree);
    }

    #[test]
    fn cascade_up_stops_at_first_checked_ancestor() {
        let mut tree = sample_tree();
        tree.set_all_checked(false);
        // Contrived state: root checked, src not.
        let root = tree.root();
        tree.nodes[root.idx()].checked = true;
        let b = by_name(&tree, "/project/src/B.py");

        tree.toggle_checked(b);

        assert!(tree.node(by_name(&tree, "/project/src")).checked);
        assert!(tree.node(root).checked);
    }

    #[test]
    fn toggling_directory_cascades_both_ways() {
        let mut tree = sample_tree();
        let src = by_name(&tree, "/project/src");

        assert!(!tree.toggle_checked(src));
        assert_eq!(tree.checked_count(), 2); // root + readme
        assert!(tree.node(tree.root()).checked);

        tree.set_all_checked(false);
        assert!(tree.toggle_checked(src));
        assert_eq!(tree.checked_count(), 4); // root + src + a + B
        assert_ancestors_checked(&tree);
    }

    #[test]
    fn invariant_holds_after_arbitrary_toggles() {
        let mut tree = sample_tree();
        let order = [3usize, 1, 2, 0, 4, 1, 3, 2, 2, 0, 4];
        for i in order {
            tree.toggle_checked(NodeIndex::new(i));
            assert_ancestors_checked(&tree);
        }
    }

    #[test]
    fn toggle_expanded_is_directory_only() {
        let mut tree = sample_tree();
        let src = by_name(&tree, "/project/src");
        let readme = by_name(&tree, "/project/readme.md");

        assert_eq!(tree.toggle_expanded(src), Some(true));
        assert_eq!(tree.toggle_expanded(src), Some(false));
        assert_eq!(tree.toggle_expanded(readme), None);
        assert_eq!(tree.node(readme).expanded(), None);
    }

    #[test]
    fn structural_queries() {
        let tree = sample_tree();
        let src = by_name(&tree, "/project/src");
        let readme = by_name(&tree, "/project/readme.md");

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.descendant_count(tree.root()), 4);
        assert_eq!(tree.descendant_count(src), 2);
        assert!(!tree.is_last_child(src));
        assert!(tree.is_last_child(readme));
        assert!(tree.is_last_child(tree.root()));
        assert_eq!(tree.parent(src), Some(tree.root()));
    }
}
