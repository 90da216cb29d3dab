//! TreeClip: pick files from a folder outline and copy them as a text tree.
//!
//! Thin binary entry point. All logic lives in the `treeclip-core`
//! and `treeclip-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use std::path::PathBuf;
use treeclip_core::config::AppConfig;
use treeclip_core::TreeClipError;

#[derive(Parser, Debug)]
#[command(name = "TreeClip", version, about = "Show a folder as a checkbox outline and copy the checked part as text")]
struct Cli {
    /// Folder to show (defaults to the current directory).
    path: Option<PathBuf>,

    /// Start with hidden files included.
    #[arg(long)]
    hidden: bool,

    /// Verbose logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A bad start path is reported before any window exists.
    let config = match AppConfig::resolve(cli.path.as_deref(), cli.hidden, cli.debug) {
        Ok(config) => config,
        Err(e) => {
            report_startup_error(&startup_error_text(&e));
            std::process::exit(1);
        }
    };

    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("TreeClip starting in {}", config.root.display());

    // Scan *before* opening the window so the first frame already has rows.
    let state = treeclip_gui::TreeClipState::build(&config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(state.window_title())
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TreeClip",
        options,
        Box::new(|cc| Ok(Box::new(treeclip_gui::TreeClipApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

fn startup_error_text(err: &TreeClipError) -> String {
    format!("Error: {err}")
}

/// Print to stderr and, on Windows where release builds have no console,
/// also show a message box.
fn report_startup_error(text: &str) {
    eprintln!("{text}");

    #[cfg(windows)]
    {
        use windows::core::HSTRING;
        use windows::Win32::Foundation::HWND;
        use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

        unsafe {
            MessageBoxW(
                HWND::default(),
                &HSTRING::from(text),
                &HSTRING::from("TreeClip"),
                MB_OK | MB_ICONERROR,
            );
        }
    }
}
