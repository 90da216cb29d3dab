/// Virtualised outline canvas: the core UI component.
///
/// Only rows intersecting the viewport are painted, so drawing cost stays
/// flat regardless of how much of the tree is expanded. The canvas is sized
/// to the layout's content box and scrolls in both axes.
///
/// Clicks are not hit-tested per widget. The pointer position is converted
/// to content coordinates and handed to the controller, which picks the
/// nearest region.
use crate::state::AppState;
use crate::theme::{tree_font, TreeClipTheme};
use egui::{Align2, FontId, Sense, Ui, Vec2};
use tracing::debug;
use treeclip_core::layout::{RegionKind, Row, TextMeasure};

/// Measures text with the egui font the canvas is painted in.
pub struct EguiMeasure {
    ctx: egui::Context,
    font: FontId,
}

impl EguiMeasure {
    pub fn new(ctx: egui::Context, font: FontId) -> Self {
        Self { ctx, font }
    }
}

impl TextMeasure for EguiMeasure {
    fn width(&self, text: &str) -> f32 {
        self.ctx
            .fonts(|fonts| text.chars().map(|c| fonts.glyph_width(&self.font, c)).sum())
    }
}

/// Draw the outline and dispatch any click on it.
pub fn tree_view(ui: &mut Ui, state: &mut AppState) {
    ensure_font_measure(ui.ctx(), state);

    let theme = TreeClipTheme::default();
    let font = tree_font();

    // ── Render and collect the deferred click ───────────────────
    let clicked_at = {
        let layout = state.controller.layout();
        let tree = state.controller.tree();
        let row_height = layout.metrics.row_height;
        let mut clicked_at: Option<Vec2> = None;

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show_viewport(ui, |ui, viewport| {
                let size = Vec2::new(
                    layout.content_width.max(viewport.width()),
                    layout.content_height.max(viewport.height()),
                );
                let (response, painter) = ui.allocate_painter(size, Sense::click());
                let origin = response.rect.min;

                for row in layout.rows_in(viewport.top(), viewport.bottom()) {
                    let text_y = row.y + row_height / 2.0;
                    for region in &row.regions {
                        painter.text(
                            origin + Vec2::new(region.x0, text_y),
                            Align2::LEFT_CENTER,
                            &region.text,
                            font.clone(),
                            region_color(&theme, row, region.kind),
                        );
                    }
                }

                if response.clicked() {
                    clicked_at = response.interact_pointer_pos().map(|pos| pos - origin);
                }

                // Full path of the row under the pointer.
                let hovered = response
                    .hover_pos()
                    .map(|pos| ((pos.y - origin.y) / row_height).floor())
                    .filter(|i| *i >= 0.0)
                    .and_then(|i| layout.rows.get(i as usize));
                if let Some(row) = hovered {
                    response.on_hover_text_at_pointer(tree.node(row.node).path.display().to_string());
                }
            });

        clicked_at
    };
    // layout / tree borrows end here; safe to mutate state.

    if let Some(pos) = clicked_at {
        if state.click_at(pos.x, pos.y).changed() {
            ui.ctx().request_repaint();
        }
    }
}

fn region_color(theme: &TreeClipTheme, row: &Row, kind: RegionKind) -> egui::Color32 {
    match kind {
        RegionKind::Checkbox if row.checked => theme.checkbox_on,
        RegionKind::Checkbox => theme.checkbox_off,
        RegionKind::ExpandArrow => theme.arrow,
        RegionKind::Label if row.is_dir => theme.directory,
        RegionKind::Label => theme.file,
    }
}

/// Relayout with egui's font metrics whenever the outline font changes,
/// including the first frame.
fn ensure_font_measure(ctx: &egui::Context, state: &mut AppState) {
    let font = tree_font();
    let key = ctx.fonts(|fonts| fonts.glyph_width(&font, 'M'));
    if state.measure_key() != Some(key) {
        debug!("Outline font cell width now {key}; relaying out");
        state.set_measure(key, Box::new(EguiMeasure::new(ctx.clone(), font)));
    }
}
