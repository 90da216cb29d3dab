/// Layout engine: turns the tree plus its per-node state into positioned rows.
///
/// Every pass is computed from scratch. Any checkbox or expand toggle can
/// change which rows are visible and how wide they are, so nothing is cached
/// between calls.
///
/// Each row is split into contiguous regions laid out left to right:
///
/// ```text
/// [•] ▼ └── src/
/// ^^^^                checkbox
///     ^^              expand arrow (directories only)
///       ^^^^^^^^      label: branch prefix + connector + name
/// ```
///
/// A region's trailing space belongs to it, so `next.x0 == prev.x1`.
/// Connectors here follow the full sibling order. The text export decides
/// "last" among checked siblings instead; the two must not be mixed up.
mod measure;

pub use measure::{MonospaceMeasure, TextMeasure};

use crate::model::export::{CONNECTOR_LAST, CONNECTOR_MID, PREFIX_BAR, PREFIX_BLANK};
use crate::model::{FileTree, NodeIndex};
use tracing::debug;

pub const CHECKBOX_ON: &str = "[•] ";
pub const CHECKBOX_OFF: &str = "[ ] ";
pub const ARROW_EXPANDED: &str = "▼ ";
pub const ARROW_COLLAPSED: &str = "► ";

/// Fixed geometry of the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Height of each row.
    pub row_height: f32,
    /// `x0` of every row's first region.
    pub left_margin: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            row_height: 18.0,
            left_margin: 10.0,
        }
    }
}

/// The clickable part of a row a region represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Checkbox,
    ExpandArrow,
    Label,
}

/// One clickable span of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub kind: RegionKind,
    pub node: NodeIndex,
    pub text: String,
    pub x0: f32,
    pub x1: f32,
    /// Top of the row.
    pub y: f32,
}

impl Region {
    /// Euclidean distance from `(x, y)` to this region's box, zero inside it.
    pub fn distance_to(&self, x: f32, y: f32, row_height: f32) -> f32 {
        let dx = (self.x0 - x).max(0.0).max(x - self.x1);
        let dy = (self.y - y).max(0.0).max(y - (self.y + row_height));
        (dx * dx + dy * dy).sqrt()
    }
}

/// One visible line of the outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub node: NodeIndex,
    /// Nesting depth (0 = root).
    pub depth: u16,
    /// For each level from the root's children down to this node: whether
    /// the node on the path at that level is the last of its siblings.
    /// Drives the `│` / blank choice of the branch prefix.
    pub last_at_level: Vec<bool>,
    pub checked: bool,
    pub is_dir: bool,
    /// `None` for files.
    pub expanded: Option<bool>,
    /// Top of the row.
    pub y: f32,
    pub regions: Vec<Region>,
}

impl Row {
    pub fn region(&self, kind: RegionKind) -> Option<&Region> {
        self.regions.iter().find(|r| r.kind == kind)
    }

    /// The row as plain text, regions concatenated.
    pub fn text(&self) -> String {
        self.regions.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub rows: Vec<Row>,
    /// Maximum `x1` over all regions.
    pub content_width: f32,
    /// Row count times row height.
    pub content_height: f32,
    pub metrics: LayoutMetrics,
}

impl Layout {
    /// Index of the row showing `node`, if visible.
    pub fn row_of(&self, node: NodeIndex) -> Option<usize> {
        self.rows.iter().position(|r| r.node == node)
    }

    /// Rows whose vertical span intersects `[top, bottom)`.
    pub fn rows_in(&self, top: f32, bottom: f32) -> &[Row] {
        let h = self.metrics.row_height;
        let first = ((top / h).floor().max(0.0) as usize).min(self.rows.len());
        let last = ((bottom / h).ceil().max(0.0) as usize).clamp(first, self.rows.len());
        &self.rows[first..last]
    }
}

/// Lay out every visible node of `tree`.
///
/// Pre-order from the root; a collapsed directory contributes its own row
/// and nothing below it.
pub fn layout(tree: &FileTree, metrics: LayoutMetrics, measure: &dyn TextMeasure) -> Layout {
    let mut pass = LayoutPass {
        tree,
        metrics,
        measure,
        rows: Vec::new(),
        content_width: 0.0,
    };
    let mut levels = Vec::new();
    pass.visit(tree.root(), "", true, 0, &mut levels);

    let content_height = pass.rows.len() as f32 * metrics.row_height;
    debug!(
        "Layout: {} rows, {:.0}x{:.0}",
        pass.rows.len(),
        pass.content_width,
        content_height
    );

    Layout {
        rows: pass.rows,
        content_width: pass.content_width,
        content_height,
        metrics,
    }
}

struct LayoutPass<'a> {
    tree: &'a FileTree,
    metrics: LayoutMetrics,
    measure: &'a dyn TextMeasure,
    rows: Vec<Row>,
    content_width: f32,
}

impl LayoutPass<'_> {
    fn visit(
        &mut self,
        index: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: u16,
        levels: &mut Vec<bool>,
    ) {
        let tree = self.tree;
        let measure = self.measure;
        let node = tree.node(index);
        let y = self.rows.len() as f32 * self.metrics.row_height;
        let mut x = self.metrics.left_margin;
        let mut regions = Vec::with_capacity(3);

        let mut push = |kind: RegionKind, text: String, x: &mut f32| {
            let x0 = *x;
            let x1 = x0 + measure.width(&text);
            *x = x1;
            regions.push(Region {
                kind,
                node: index,
                text,
                x0,
                x1,
                y,
            });
        };

        let checkbox = if node.checked { CHECKBOX_ON } else { CHECKBOX_OFF };
        push(RegionKind::Checkbox, checkbox.to_owned(), &mut x);

        if let Some(expanded) = node.expanded() {
            let arrow = if expanded { ARROW_EXPANDED } else { ARROW_COLLAPSED };
            push(RegionKind::ExpandArrow, arrow.to_owned(), &mut x);
        }

        let connector = if is_last { CONNECTOR_LAST } else { CONNECTOR_MID };
        push(
            RegionKind::Label,
            format!("{prefix}{connector} {}", node.name),
            &mut x,
        );

        self.content_width = self.content_width.max(x);
        self.rows.push(Row {
            node: index,
            depth,
            last_at_level: levels.clone(),
            checked: node.checked,
            is_dir: node.is_dir(),
            expanded: node.expanded(),
            y,
            regions,
        });

        if node.expanded() != Some(true) {
            return;
        }

        let child_prefix = format!(
            "{prefix}{}",
            if is_last { PREFIX_BLANK } else { PREFIX_BAR }
        );
        let children = tree.children(index);
        for (i, &child) in children.iter().enumerate() {
            let child_is_last = i + 1 == children.len();
            levels.push(child_is_last);
            self.visit(child, &child_prefix, child_is_last, depth + 1, levels);
            levels.pop();
        }
    }
}
