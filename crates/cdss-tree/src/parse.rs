//! Decision path text parsing.
//!
//! Parses the text dump of a fitted decision tree into a [`TreeNode`]
//! hierarchy. Each line is prefixed by one `|   ` marker per depth level,
//! then a `|--- ` branch marker and the node text:
//!
//! ```text
//! |--- tumor_size <= 2.45
//! |   |--- class: 0
//! |--- tumor_size >  2.45
//! |   |--- class: 1
//! ```
//!
//! Lines whose text matches `class: <label>` are leaves; all others are
//! split conditions that own the deeper lines following them.

use lazy_static::lazy_static;
use regex::Regex;

use crate::node::{TreeNode, ROOT_LABEL};

/// One indentation level.
pub const INDENT_MARKER: &str = "|   ";

/// Branch marker preceding the node text.
pub const BRANCH_MARKER: &str = "|--- ";

lazy_static! {
    static ref LEAF_PATTERN: Regex = Regex::new(r"class:\s*(.*)").unwrap();
}

/// A line split into depth and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub label: String,
    pub is_leaf: bool,
}

/// Split a dump line into its depth, label and kind.
pub fn parse_line(line: &str) -> TreeLine {
    let mut rest = line;
    let mut depth = 0;
    while let Some(stripped) = rest.strip_prefix(INDENT_MARKER) {
        rest = stripped;
        depth += 1;
    }
    let content = rest.strip_prefix(BRANCH_MARKER).unwrap_or(rest).trim_end();

    match LEAF_PATTERN.captures(content) {
        Some(caps) => TreeLine {
            depth,
            label: format!("class: {}", caps.get(1).map_or("", |m| m.as_str())),
            is_leaf: true,
        },
        None => TreeLine {
            depth,
            label: content.to_string(),
            is_leaf: false,
        },
    }
}

/// Parse a decision path dump into a tree.
///
/// Blank lines are ignored. Empty or whitespace-only input yields the
/// "No tree data" placeholder. When the dump has exactly one top-level node
/// it becomes the root; otherwise the top-level nodes hang under a
/// synthetic "Root" node.
pub fn parse_tree(text: &str) -> TreeNode {
    let lines: Vec<TreeLine> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(parse_line)
        .collect();
    if lines.is_empty() {
        return TreeNode::no_data();
    }

    // Open internal nodes with their depth; the synthetic root sits below depth 0
    let mut stack: Vec<(TreeNode, Option<usize>)> = vec![(TreeNode::internal(ROOT_LABEL), None)];

    for line in lines {
        while stack.len() > 1 && matches!(stack.last(), Some((_, Some(d))) if line.depth <= *d) {
            close_top(&mut stack);
        }

        if line.is_leaf {
            if let Some((parent, _)) = stack.last_mut() {
                parent.push_child(TreeNode::leaf(line.label));
            }
        } else {
            stack.push((TreeNode::internal(line.label), Some(line.depth)));
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }

    let mut root = match stack.pop() {
        Some((root, _)) => root,
        None => return TreeNode::no_data(),
    };
    match root.children.as_mut() {
        Some(children) if children.len() == 1 => children.remove(0),
        _ => root,
    }
}

/// Pop the innermost open node and attach it to its parent.
fn close_top(stack: &mut Vec<(TreeNode, Option<usize>)>) {
    if let Some((node, _)) = stack.pop() {
        if let Some((parent, _)) = stack.last_mut() {
            parent.push_child(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_depth() {
        let line = parse_line("|   |   |--- age <= 50.50");
        assert_eq!(line.depth, 2);
        assert_eq!(line.label, "age <= 50.50");
        assert!(!line.is_leaf);
    }

    #[test]
    fn test_parse_line_leaf() {
        let line = parse_line("|   |--- class:   Progression");
        assert_eq!(line.depth, 1);
        assert_eq!(line.label, "class: Progression");
        assert!(line.is_leaf);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_tree("").is_placeholder());
        assert!(parse_tree("  \n\t\n").is_placeholder());
    }

    #[test]
    fn test_single_top_level_becomes_root() {
        let tree = parse_tree("|--- x <= 1.00\n|   |--- class: 0\n|   |--- class: 1\n");
        assert_eq!(tree.name, "x <= 1.00");
        assert_eq!(tree.children().len(), 2);
        assert!(tree.children().iter().all(TreeNode::is_leaf));
    }

    #[test]
    fn test_multiple_top_level_keep_synthetic_root() {
        let tree = parse_tree("|--- x <= 1.00\n|   |--- class: 0\n|--- x >  1.00\n|   |--- class: 1\n");
        assert_eq!(tree.name, ROOT_LABEL);
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.children()[1].name, "x >  1.00");
        assert_eq!(tree.children()[1].children()[0].name, "class: 1");
    }

    #[test]
    fn test_single_leaf_line() {
        let tree = parse_tree("|--- class: 1");
        assert!(tree.is_leaf());
        assert_eq!(tree.name, "class: 1");
    }
}
