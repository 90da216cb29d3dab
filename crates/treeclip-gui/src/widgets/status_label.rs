/// Right-aligned toolbar status: the transient copy message, plus a warning
/// badge when the last scan could not read some directories.
use crate::state::AppState;
use crate::theme::TreeClipTheme;
use egui::Ui;
use std::time::Instant;

/// Most paths listed in the unreadable-directories tooltip.
const MAX_TOOLTIP_PATHS: usize = 20;

pub fn status_label(ui: &mut Ui, state: &AppState, now: Instant) {
    let theme = TreeClipTheme::default();

    if !state.scan_issues.is_empty() {
        let badge = ui.label(
            egui::RichText::new(format!("⚠ {} unreadable", state.scan_issues.len()))
                .size(12.0)
                .color(theme.warning),
        );
        badge.on_hover_ui(|ui| {
            for issue in state.scan_issues.iter().take(MAX_TOOLTIP_PATHS) {
                ui.label(format!("{}: {}", issue.path.display(), issue.message));
            }
            let hidden = state.scan_issues.len().saturating_sub(MAX_TOOLTIP_PATHS);
            if hidden > 0 {
                ui.label(format!("... and {hidden} more"));
            }
        });
    }

    if let Some(text) = state.status_text(now) {
        ui.label(egui::RichText::new(text).size(12.0).color(theme.status));
    }
}
