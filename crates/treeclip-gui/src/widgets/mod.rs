/// UI widgets for TreeClip.

pub mod status_label;
pub mod toolbar;
pub mod tree_view;
