use unicode_width::UnicodeWidthStr;

/// Measures rendered text width. The host supplies the implementation that
/// matches its font; the layout engine only adds widths up.
pub trait TextMeasure {
    fn width(&self, text: &str) -> f32;
}

/// Fixed-pitch measurement: terminal columns times a cell width.
///
/// Used headless and as a fallback when no font metrics are available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub cell_width: f32,
}

impl MonospaceMeasure {
    pub fn new(cell_width: f32) -> Self {
        Self { cell_width }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn width(&self, text: &str) -> f32 {
        text.width() as f32 * self.cell_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_one_cell_wide() {
        let m = MonospaceMeasure::new(7.0);
        assert_eq!(m.width("[•] "), 28.0);
        assert_eq!(m.width("▼ "), 14.0);
        assert_eq!(m.width("│   └── a"), 63.0);
        assert_eq!(m.width(""), 0.0);
    }
}
