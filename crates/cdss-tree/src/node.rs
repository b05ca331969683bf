//! Decision tree nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label of the synthetic root wrapping several top-level nodes.
pub const ROOT_LABEL: &str = "Root";

/// Label of the placeholder returned for empty input.
pub const NO_DATA_LABEL: &str = "No tree data";

/// A labeled node of a decision path tree.
///
/// Leaves (class assignments) have no children list at all; internal nodes
/// always carry one, possibly empty. Serializes to the `{ "name", "children" }`
/// shape hierarchy viewers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// A node that can receive children.
    pub fn internal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Some(Vec::new()),
        }
    }

    /// A childless node.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: None,
        }
    }

    /// The placeholder shown when there is nothing to parse.
    pub fn no_data() -> Self {
        Self::leaf(NO_DATA_LABEL)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Whether this is the empty-input placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.is_leaf() && self.name == NO_DATA_LABEL
    }

    /// Direct children (empty for leaves).
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Append a child. A leaf becomes internal.
    pub fn push_child(&mut self, child: TreeNode) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Number of levels below and including this node.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    /// Number of leaves in the subtree.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children().iter().map(TreeNode::leaf_count).sum()
        }
    }

    /// Hierarchy JSON for tree viewers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn format_subtree(&self, prefix: &str, is_last: bool, is_root: bool, output: &mut String) {
        let connector = if is_root {
            ""
        } else if is_last {
            "└── "
        } else {
            "├── "
        };
        output.push_str(&format!("{}{}{}\n", prefix, connector, self.name));

        let child_prefix = if is_root {
            String::new()
        } else if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        let children = self.children();
        for (i, child) in children.iter().enumerate() {
            child.format_subtree(&child_prefix, i == children.len() - 1, false, output);
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        self.format_subtree("", true, true, &mut output);
        f.write_str(&output)
    }
}
