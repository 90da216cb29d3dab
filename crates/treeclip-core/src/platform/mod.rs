/// Platform-specific functionality: the hidden-file predicate.
pub mod hidden;

pub use hidden::{is_dot_hidden, is_hidden, HiddenPredicate};
