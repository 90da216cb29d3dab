/// TreeClip Core: tree model, scanning, layout, and interaction.
///
/// This crate contains all business logic with zero UI dependencies, so the
/// whole outline can be built, clicked, and exported headlessly.
///
/// # Modules
///
/// - [`model`]: Arena-allocated outline tree, checkbox propagation, text export.
/// - [`scanner`]: Synchronous filesystem scan into a fresh tree.
/// - [`platform`]: Hidden-file predicate.
/// - [`layout`]: Tree state to positioned rows and clickable regions.
/// - [`interaction`]: Pointer hits to tree mutations, with relayout.
/// - [`config`]: Startup configuration and start-path resolution.
pub mod config;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod platform;
pub mod scanner;

pub use error::TreeClipError;
