/// End-to-end tests for `AppState`, the GUI application state.
///
/// These tests exercise the real scan/click/copy paths of `AppState` without
/// spinning up an egui window, keeping them fast and deterministic. The real
/// scanner runs against temporary directories, so no mocking is needed.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use treeclip_core::config::AppConfig;
use treeclip_core::interaction::ClickAction;
use treeclip_core::layout::{MonospaceMeasure, RegionKind};
use treeclip_gui::state::{AppState, STATUS_COPIED, STATUS_DURATION, STATUS_NOTHING};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build `root/{sub/c.rs, a.txt}` and return the guard plus the
/// canonical root.
fn make_temp_tree() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("c.rs"), "fn main() {}").unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    let root = fs::canonicalize(root).unwrap();
    (tmp, root)
}

/// Centre of the `kind` region on the row showing `path`.
fn region_centre(state: &AppState, path: &Path, kind: RegionKind) -> (f32, f32) {
    let node = state.controller.tree().find_by_path(path).unwrap();
    let layout = state.controller.layout();
    let row = &layout.rows[layout.row_of(node).unwrap()];
    let region = row.region(kind).unwrap();
    (
        (region.x0 + region.x1) / 2.0,
        region.y + layout.metrics.row_height / 2.0,
    )
}

fn row_names(state: &AppState) -> Vec<String> {
    let tree = state.controller.tree();
    state
        .controller
        .layout()
        .rows
        .iter()
        .map(|r| tree.node(r.node).name.to_string())
        .collect()
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// The initial scan shows the root plus its direct children, all checked.
#[test]
fn new_state_shows_expanded_root() {
    let (_tmp, root) = make_temp_tree();
    let state = AppState::new(root.clone(), false);

    let layout = state.controller.layout();
    assert_eq!(layout.rows.len(), 3, "root, sub/, a.txt");
    assert!(layout.rows.iter().all(|r| r.checked));
    assert_eq!(layout.rows[0].expanded, Some(true));
    assert!(state.scan_issues.is_empty());
    assert_eq!(state.status_text(Instant::now()), None);
}

#[test]
fn from_config_uses_resolved_root() {
    let (_tmp, root) = make_temp_tree();
    let config = AppConfig::resolve(Some(&root), false, false).unwrap();
    let state = AppState::from_config(&config);
    assert_eq!(state.root, root);
    assert_eq!(state.window_title(), "Tree: root");
}

// ── Clicks ────────────────────────────────────────────────────────────────────

#[test]
fn clicking_a_directory_label_expands_it() {
    let (_tmp, root) = make_temp_tree();
    let mut state = AppState::new(root.clone(), false);

    let (x, y) = region_centre(&state, &root.join("sub"), RegionKind::Label);
    assert_eq!(state.click_at(x, y), ClickAction::ToggledExpand(true));
    assert!(row_names(&state).contains(&"c.rs".to_string()));
}

#[test]
fn clicking_a_file_label_does_nothing() {
    let (_tmp, root) = make_temp_tree();
    let mut state = AppState::new(root.clone(), false);

    let (x, y) = region_centre(&state, &root.join("a.txt"), RegionKind::Label);
    assert_eq!(state.click_at(x, y), ClickAction::Ignored);
}

// ── Copy ──────────────────────────────────────────────────────────────────────

#[test]
fn copy_returns_text_and_sets_copied_status() {
    let (_tmp, root) = make_temp_tree();
    let mut state = AppState::new(root.clone(), false);
    let now = Instant::now();

    let text = state.copy_selection(now).expect("everything is checked");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4, "root, sub/, c.rs, a.txt");
    assert!(lines[0].starts_with(&root.display().to_string()));
    assert_eq!(lines[3], "    └── a.txt");
    assert_eq!(state.status_text(now), Some(STATUS_COPIED));
}

#[test]
fn copy_with_nothing_checked_reports_nothing_to_copy() {
    let (_tmp, root) = make_temp_tree();
    let mut state = AppState::new(root.clone(), false);

    let (x, y) = region_centre(&state, &root, RegionKind::Checkbox);
    assert_eq!(state.click_at(x, y), ClickAction::ToggledCheck(false));

    let now = Instant::now();
    assert_eq!(state.copy_selection(now), None);
    assert_eq!(state.status_text(now), Some(STATUS_NOTHING));
}

/// The status message disappears after `STATUS_DURATION`.
#[test]
fn status_message_expires() {
    let (_tmp, root) = make_temp_tree();
    let mut state = AppState::new(root, false);
    let now = Instant::now();
    state.copy_selection(now);

    assert!(state.status_remaining(now + Duration::from_secs(1)).is_some());
    assert_eq!(state.status_text(now + STATUS_DURATION), None);
    assert_eq!(state.status_remaining(now + Duration::from_secs(6)), None);
}

// ── Rescan ────────────────────────────────────────────────────────────────────

#[test]
fn rescan_resets_selection_and_expansion() {
    let (_tmp, root) = make_temp_tree();
    let mut state = AppState::new(root.clone(), false);

    let (x, y) = region_centre(&state, &root.join("sub"), RegionKind::ExpandArrow);
    state.click_at(x, y);
    let (x, y) = region_centre(&state, &root.join("a.txt"), RegionKind::Checkbox);
    state.click_at(x, y);
    assert_eq!(state.controller.layout().rows.len(), 4);

    state.rescan();

    let layout = state.controller.layout();
    assert_eq!(layout.rows.len(), 3);
    assert!(layout.rows.iter().all(|r| r.checked));
}

#[test]
fn rescan_clears_status_message() {
    let (_tmp, root) = make_temp_tree();
    let mut state = AppState::new(root, false);
    let now = Instant::now();
    state.copy_selection(now);
    assert_eq!(state.status_text(now), Some(STATUS_COPIED));

    state.rescan();
    assert_eq!(state.status_text(now), None);
    assert_eq!(state.status_remaining(now), None);
}

#[test]
fn rescan_picks_up_new_files() {
    let (_tmp, root) = make_temp_tree();
    let mut state = AppState::new(root.clone(), false);
    fs::write(root.join("b.txt"), "b").unwrap();

    state.rescan();
    let sub = format!("sub{}", std::path::MAIN_SEPARATOR);
    assert_eq!(row_names(&state)[1..], [sub, "a.txt".to_string(), "b.txt".to_string()]);
}

#[cfg(unix)]
#[test]
fn toggling_hidden_files_rescans() {
    let (_tmp, root) = make_temp_tree();
    fs::write(root.join(".hidden"), "h").unwrap();
    let mut state = AppState::new(root.clone(), false);
    assert!(!row_names(&state).contains(&".hidden".to_string()));

    state.set_include_hidden(true);
    assert!(state.include_hidden);
    assert!(row_names(&state).contains(&".hidden".to_string()));

    state.set_include_hidden(false);
    assert!(!row_names(&state).contains(&".hidden".to_string()));
}

// ── Measurement ───────────────────────────────────────────────────────────────

/// Installing a wider font measure relays out immediately.
#[test]
fn set_measure_relays_out() {
    let (_tmp, root) = make_temp_tree();
    let mut state = AppState::new(root, false);
    assert_eq!(state.measure_key(), None);
    let before = state.controller.layout().content_width;

    state.set_measure(20.0, Box::new(MonospaceMeasure::new(20.0)));

    assert_eq!(state.measure_key(), Some(20.0));
    assert!(state.controller.layout().content_width > before);
}
