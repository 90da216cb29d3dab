/// Data model for the TreeClip outline.
///
/// Re-exports the arena-allocated tree, its node types, and the text export.
pub mod export;
pub mod file_node;
pub mod file_tree;

pub use export::ExportOutcome;
pub use file_node::{FileNode, NodeIndex, NodeKind};
pub use file_tree::FileTree;
