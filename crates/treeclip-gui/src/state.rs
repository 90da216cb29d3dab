/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Everything
/// here is plain data plus the core [`InteractionController`], so the whole
/// click/rescan/copy cycle can be driven without a window.
use std::path::PathBuf;
use std::time::{Duration, Instant};
use treeclip_core::config::{self, AppConfig};
use treeclip_core::interaction::{ClickAction, InteractionController};
use treeclip_core::layout::{LayoutMetrics, MonospaceMeasure, TextMeasure};
use treeclip_core::model::ExportOutcome;
use treeclip_core::scanner::{self, ScanIssue, ScanOptions};
use tracing::info;

/// How long a toolbar status message stays visible.
pub const STATUS_DURATION: Duration = Duration::from_secs(5);

pub const STATUS_COPIED: &str = "Copied!";
pub const STATUS_NOTHING: &str = "Nothing to copy";

/// Cell width used until the renderer supplies real font metrics.
const FALLBACK_CELL_WIDTH: f32 = 7.0;

/// A transient message shown in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: &'static str,
    pub shown_at: Instant,
}

/// All application state.
pub struct AppState {
    // ── Scan ───────────────────────────────────────────
    pub root: PathBuf,
    pub include_hidden: bool,
    pub scan_issues: Vec<ScanIssue>,
    pub scan_dirs: u64,
    pub scan_files: u64,
    pub scan_duration: Duration,

    // ── Outline ────────────────────────────────────────
    pub controller: InteractionController,
    measure: Box<dyn TextMeasure>,
    /// Identifies the font `measure` was built from; `None` until the
    /// renderer has installed one.
    measure_key: Option<f32>,

    // ── UI state ───────────────────────────────────────
    status: Option<StatusMessage>,
}

impl AppState {
    /// Scan `root` and lay out the result.
    pub fn new(root: PathBuf, include_hidden: bool) -> Self {
        let measure: Box<dyn TextMeasure> = Box::new(MonospaceMeasure::new(FALLBACK_CELL_WIDTH));
        let report = scanner::scan(&root, &ScanOptions::with_hidden(include_hidden));
        let controller =
            InteractionController::new(report.tree, LayoutMetrics::default(), measure.as_ref());

        Self {
            root,
            include_hidden,
            scan_issues: report.issues,
            scan_dirs: report.dirs,
            scan_files: report.files,
            scan_duration: report.duration,
            controller,
            measure,
            measure_key: None,
            status: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.root.clone(), config.include_hidden)
    }

    /// Discard the current tree and build a fresh one from disk. Selection
    /// and expansion state reset to their defaults and any status message is
    /// cleared.
    pub fn rescan(&mut self) {
        info!("Re-scanning {}", self.root.display());
        self.status = None;
        let report = scanner::scan(&self.root, &ScanOptions::with_hidden(self.include_hidden));
        self.scan_issues = report.issues;
        self.scan_dirs = report.dirs;
        self.scan_files = report.files;
        self.scan_duration = report.duration;
        self.controller.replace_tree(report.tree, self.measure.as_ref());
    }

    /// Change the hidden-file setting, rescanning when it actually changed.
    pub fn set_include_hidden(&mut self, include_hidden: bool) {
        if self.include_hidden != include_hidden {
            self.include_hidden = include_hidden;
            self.rescan();
        }
    }

    /// Dispatch a click at content coordinates `(x, y)`.
    pub fn click_at(&mut self, x: f32, y: f32) -> ClickAction {
        self.controller.click_at(x, y, self.measure.as_ref())
    }

    pub fn measure_key(&self) -> Option<f32> {
        self.measure_key
    }

    /// Install a new text measure and relayout with it.
    pub fn set_measure(&mut self, key: f32, measure: Box<dyn TextMeasure>) {
        self.measure = measure;
        self.measure_key = Some(key);
        self.controller.relayout(self.measure.as_ref());
    }

    /// Export the checked subset. Returns the text to put on the clipboard,
    /// or `None` when nothing is checked. Either way a status message is set.
    pub fn copy_selection(&mut self, now: Instant) -> Option<String> {
        match self.controller.export() {
            ExportOutcome::Text(text) => {
                self.show_status(STATUS_COPIED, now);
                Some(text)
            }
            ExportOutcome::NothingToExport => {
                self.show_status(STATUS_NOTHING, now);
                None
            }
        }
    }

    pub fn show_status(&mut self, text: &'static str, now: Instant) {
        self.status = Some(StatusMessage {
            text,
            shown_at: now,
        });
    }

    /// The status message, if it has not expired by `now`.
    pub fn status_text(&self, now: Instant) -> Option<&'static str> {
        self.status_remaining(now).and(self.status.map(|s| s.text))
    }

    /// Time until the current status message expires.
    pub fn status_remaining(&self, now: Instant) -> Option<Duration> {
        let status = self.status?;
        STATUS_DURATION
            .checked_sub(now.saturating_duration_since(status.shown_at))
            .filter(|d| !d.is_zero())
    }

    /// Window title: `Tree: <folder>`.
    pub fn window_title(&self) -> String {
        format!("Tree: {}", config::root_label(&self.root))
    }
}
