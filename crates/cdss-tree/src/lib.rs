//! # cdss-tree
//!
//! Parsing of decision tree text dumps into labeled hierarchies for
//! display as a decision path tree.

pub mod node;
pub mod parse;

pub use node::{TreeNode, NO_DATA_LABEL, ROOT_LABEL};
pub use parse::{parse_line, parse_tree, TreeLine, BRANCH_MARKER, INDENT_MARKER};
