/// Interaction controller: resolves clicks to tree mutations.
///
/// Owns the tree and its current layout. Every mutation is followed by a full
/// relayout, so the layout handed to the renderer always matches the tree.
///
/// Hit resolution is tolerant. A click resolves to the *nearest* region, not
/// only one that strictly contains the point, because the checkbox and arrow
/// glyphs are small targets.
use crate::layout::{self, Layout, LayoutMetrics, RegionKind, TextMeasure};
use crate::model::{ExportOutcome, FileTree, NodeIndex};
use tracing::debug;

/// A resolved pointer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub node: NodeIndex,
    pub kind: RegionKind,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Checkbox toggled; carries the node's new value.
    ToggledCheck(bool),
    /// Directory expanded (`true`) or collapsed (`false`).
    ToggledExpand(bool),
    /// Nothing to do, e.g. a file's label or empty space.
    Ignored,
}

impl ClickAction {
    pub fn changed(self) -> bool {
        self != ClickAction::Ignored
    }
}

pub struct InteractionController {
    tree: FileTree,
    layout: Layout,
}

impl InteractionController {
    /// Take ownership of `tree` and lay it out.
    pub fn new(tree: FileTree, metrics: LayoutMetrics, measure: &dyn TextMeasure) -> Self {
        let layout = layout::layout(&tree, metrics, measure);
        Self { tree, layout }
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Swap in a freshly scanned tree. The previous tree and layout are dropped.
    pub fn replace_tree(&mut self, tree: FileTree, measure: &dyn TextMeasure) {
        self.tree = tree;
        self.relayout(measure);
    }

    /// Recompute the layout from scratch, e.g. after the font changed.
    pub fn relayout(&mut self, measure: &dyn TextMeasure) {
        self.layout = layout::layout(&self.tree, self.layout.metrics, measure);
    }

    /// The region closest to `(x, y)` in content coordinates. Ties go to the
    /// earliest region in layout order. `None` only when there are no rows.
    ///
    /// Every row is a candidate: a long label several rows away can be closer
    /// than the short ones beside the pointer. A row whose vertical gap alone
    /// exceeds the best distance so far is skipped without measuring.
    pub fn nearest_region(&self, x: f32, y: f32) -> Option<Hit> {
        let row_height = self.layout.metrics.row_height;
        let mut best: Option<(f32, Hit)> = None;

        for row in &self.layout.rows {
            let gap = (row.y - y).max(0.0).max(y - (row.y + row_height));
            if best.is_some_and(|(bd, _)| gap > bd) {
                continue;
            }
            for region in &row.regions {
                let d = region.distance_to(x, y, row_height);
                if best.map_or(true, |(bd, _)| d < bd) {
                    best = Some((
                        d,
                        Hit {
                            node: region.node,
                            kind: region.kind,
                        },
                    ));
                }
            }
        }
        best.map(|(_, hit)| hit)
    }

    /// Apply a click on `hit` and relayout if anything changed.
    pub fn handle_click(&mut self, hit: Hit, measure: &dyn TextMeasure) -> ClickAction {
        let is_dir = self.tree.node(hit.node).is_dir();
        let action = match hit.kind {
            RegionKind::Checkbox => ClickAction::ToggledCheck(self.tree.toggle_checked(hit.node)),
            RegionKind::ExpandArrow | RegionKind::Label if is_dir => self
                .tree
                .toggle_expanded(hit.node)
                .map_or(ClickAction::Ignored, ClickAction::ToggledExpand),
            RegionKind::ExpandArrow | RegionKind::Label => ClickAction::Ignored,
        };

        if action.changed() {
            debug!("{:?} on {} -> {:?}", hit.kind, self.tree.node(hit.node).path.display(), action);
            self.relayout(measure);
        }
        action
    }

    /// Resolve `(x, y)` to the nearest region and click it.
    pub fn click_at(&mut self, x: f32, y: f32, measure: &dyn TextMeasure) -> ClickAction {
        match self.nearest_region(x, y) {
            Some(hit) => self.handle_click(hit, measure),
            None => ClickAction::Ignored,
        }
    }

    /// Export the current selection.
    pub fn export(&self) -> ExportOutcome {
        self.tree.export_text()
    }
}
