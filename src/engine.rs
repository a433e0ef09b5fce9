//! File checking and tree traversal

pub mod file_checker;
pub mod tree_walker;

pub use file_checker::{CommentRules, FileChecker, FileOutcome};
pub use tree_walker::{SkipReason, SkippedEntry, TreeWalker, WalkEvent, WalkOptions, WalkReport};
