/// Top action bar -- hidden-file toggle, re-run, copy, and the status label.
use crate::state::AppState;
use crate::widgets::status_label;
use egui::Ui;
use std::time::Instant;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let mut include_hidden = state.include_hidden;
        if ui
            .checkbox(&mut include_hidden, "Include hidden files")
            .changed()
        {
            state.set_include_hidden(include_hidden);
        }

        if ui
            .button("⟳ Re-run")
            .on_hover_text("Scan the folder again")
            .clicked()
        {
            state.rescan();
        }

        if ui
            .button("📋 Copy")
            .on_hover_text("Copy the checked entries as a text tree")
            .clicked()
        {
            if let Some(text) = state.copy_selection(Instant::now()) {
                ui.ctx().copy_text(text);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            status_label::status_label(ui, state, Instant::now());
        });
    });
}
