/// Colour scheme for TreeClip.
///
/// The outline is drawn light-on-black like a terminal. All colour constants
/// are defined here so the rest of the UI code references semantically-named
/// values rather than raw hex codes.
use egui::{Color32, FontId, Stroke, Visuals};

/// Point size of the outline font.
pub const TREE_FONT_SIZE: f32 = 12.0;

pub fn tree_font() -> FontId {
    FontId::monospace(TREE_FONT_SIZE)
}

/// Semantic colour palette.
pub struct TreeClipTheme {
    pub background: Color32,
    pub surface: Color32,
    pub checkbox_on: Color32,
    pub checkbox_off: Color32,
    pub arrow: Color32,
    pub directory: Color32,
    pub file: Color32,
    pub status: Color32,
    pub warning: Color32,
    pub separator: Color32,
}

impl TreeClipTheme {
    pub fn dark() -> Self {
        Self {
            background: Color32::BLACK,
            surface: Color32::from_rgb(0x1e, 0x1e, 0x24),
            checkbox_on: Color32::from_rgb(0x8c, 0xc8, 0xff),
            checkbox_off: Color32::from_rgb(0x70, 0x70, 0x78),
            arrow: Color32::from_rgb(0xd0, 0xd0, 0xd0),
            directory: Color32::from_rgb(0xff, 0xe0, 0x66),
            file: Color32::WHITE,
            status: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x44),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.window_stroke = Stroke::new(1.0, self.separator);
        ctx.set_visuals(visuals);
    }
}

impl Default for TreeClipTheme {
    fn default() -> Self {
        Self::dark()
    }
}
