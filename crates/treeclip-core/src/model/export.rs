/// Plain-text export of the checked subset of the outline.
///
/// The output is the classic `├──` / `└──` drawing, but "last sibling" is
/// decided among *checked* siblings only, so an unchecked trailing entry does
/// not leave a dangling `├──` behind. This differs from the on-screen layout,
/// which draws connectors from the full sibling order.
use super::file_node::NodeIndex;
use super::file_tree::FileTree;
use std::path::MAIN_SEPARATOR;

pub const CONNECTOR_LAST: &str = "└──";
pub const CONNECTOR_MID: &str = "├──";
pub const PREFIX_BLANK: &str = "    ";
pub const PREFIX_BAR: &str = "│   ";

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Lines joined with `\n`, trimmed.
    Text(String),
    /// Nothing is checked; the caller should say so instead of copying "".
    NothingToExport,
}

impl FileTree {
    /// Pre-order listing of checked nodes, one line per node.
    ///
    /// The root line is its absolute path (plus a trailing separator for a
    /// directory). Unchecked nodes prune their whole subtree. Empty if the
    /// root itself is unchecked.
    pub fn checked_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let root = self.root();
        if !self.node(root).checked {
            return lines;
        }

        let root_node = self.node(root);
        let mut root_line = root_node.path.to_string_lossy().into_owned();
        if root_node.is_dir() && !root_line.ends_with(MAIN_SEPARATOR) {
            root_line.push(MAIN_SEPARATOR);
        }
        lines.push(root_line);

        self.push_checked_children(root, "", true, &mut lines);
        lines
    }

    /// Export the checked subset as clipboard text.
    pub fn export_text(&self) -> ExportOutcome {
        let text = self.checked_lines().join("\n");
        let text = text.trim();
        if text.is_empty() {
            ExportOutcome::NothingToExport
        } else {
            ExportOutcome::Text(text.to_owned())
        }
    }

    fn push_checked_children(
        &self,
        parent: NodeIndex,
        prefix: &str,
        parent_is_last: bool,
        lines: &mut Vec<String>,
    ) {
        let checked: Vec<NodeIndex> = self
            .children(parent)
            .iter()
            .copied()
            .filter(|&c| self.node(c).checked)
            .collect();
        let child_prefix = format!(
            "{prefix}{}",
            if parent_is_last { PREFIX_BLANK } else { PREFIX_BAR }
        );

        for (i, &child) in checked.iter().enumerate() {
            let is_last = i + 1 == checked.len();
            let connector = if is_last { CONNECTOR_LAST } else { CONNECTOR_MID };
            lines.push(format!(
                "{child_prefix}{connector} {}",
                self.node(child).name
            ));
            self.push_checked_children(child, &child_prefix, is_last, lines);
        }
    }
}
