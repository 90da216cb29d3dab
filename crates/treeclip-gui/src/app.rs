/// Main `eframe::App` implementation for TreeClip.
///
/// Top-level layout: toolbar across the top, outline canvas filling the rest.
use crate::state::AppState;
use crate::theme::TreeClipTheme;
use crate::widgets;
use std::time::Instant;
use treeclip_core::config::AppConfig;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so the initial
/// scan has finished by the time the window opens and the first frame
/// already shows the tree.
pub struct TreeClipState {
    pub(crate) inner: AppState,
}

impl TreeClipState {
    /// Scan the configured root. Call this before `eframe::run_native`.
    pub fn build(config: &AppConfig) -> Self {
        Self {
            inner: AppState::from_config(config),
        }
    }

    pub fn window_title(&self) -> String {
        self.inner.window_title()
    }
}

/// The TreeClip application.
pub struct TreeClipApp {
    state: AppState,
    theme: TreeClipTheme,
}

impl TreeClipApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: TreeClipState) -> Self {
        let theme = TreeClipTheme::default();
        theme.apply(&cc.egui_ctx);
        Self {
            state: state.inner,
            theme,
        }
    }
}

impl eframe::App for TreeClipApp {
    /// Match the GPU clear colour to the canvas so resizing never flashes.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::from(self.theme.background).to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(32.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Central panel (outline) ───────────────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(self.theme.background))
            .show(ctx, |ui| {
                widgets::tree_view::tree_view(ui, &mut self.state);
            });

        // Wake up once more so an expired status message disappears.
        if let Some(remaining) = self.state.status_remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}
