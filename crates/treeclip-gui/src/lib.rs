/// TreeClip GUI: egui-based desktop frontend.
///
/// This crate contains all UI code. Business logic lives in `treeclip-core`.
pub mod app;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{TreeClipApp, TreeClipState};
