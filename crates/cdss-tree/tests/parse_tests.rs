//! Decision path parsing tests against realistic tree dumps

use cdss_tree::{parse_tree, TreeNode, ROOT_LABEL};
use rstest::rstest;

const DEPTH_THREE: &str = "\
|--- tumor_size <= 2.45
|   |--- age <= 50.50
|   |   |--- class: 0
|   |--- age >  50.50
|   |   |--- nodes <= 3.00
|   |   |   |--- class: 0
|   |   |--- nodes >  3.00
|   |   |   |--- class: 1
|--- tumor_size >  2.45
|   |--- class: 1
";

#[test]
fn test_depth_three_dump() {
    let tree = parse_tree(DEPTH_THREE);

    assert_eq!(tree.name, ROOT_LABEL);
    assert_eq!(tree.children().len(), 2);

    let left = &tree.children()[0];
    assert_eq!(left.name, "tumor_size <= 2.45");
    assert_eq!(left.children().len(), 2);
    assert_eq!(left.children()[0].name, "age <= 50.50");
    assert_eq!(left.children()[0].children()[0].name, "class: 0");

    let deep = &left.children()[1];
    assert_eq!(deep.name, "age >  50.50");
    assert_eq!(deep.children()[1].name, "nodes >  3.00");
    assert_eq!(deep.children()[1].children()[0].name, "class: 1");

    let right = &tree.children()[1];
    assert_eq!(right.name, "tumor_size >  2.45");
    assert_eq!(right.children()[0].name, "class: 1");

    assert_eq!(tree.leaf_count(), 4);
    assert_eq!(tree.depth(), 5);
}

#[test]
fn test_sibling_leaves_under_one_root() {
    let tree = parse_tree("|--- class: 0\n|--- class: 1\n");
    assert_eq!(tree.name, ROOT_LABEL);
    let names: Vec<&str> = tree.children().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["class: 0", "class: 1"]);
}

#[test]
fn test_blank_lines_ignored() {
    let with_blanks = DEPTH_THREE.replace('\n', "\n\n");
    assert_eq!(parse_tree(&with_blanks), parse_tree(DEPTH_THREE));
}

#[test]
fn test_windows_line_endings() {
    let crlf = DEPTH_THREE.replace('\n', "\r\n");
    assert_eq!(parse_tree(&crlf), parse_tree(DEPTH_THREE));
}

#[rstest]
#[case("")]
#[case("\n\n")]
#[case("   \t  ")]
fn test_no_tree_data(#[case] input: &str) {
    let tree = parse_tree(input);
    assert!(tree.is_placeholder());
    assert_eq!(tree, TreeNode::no_data());
}

#[rstest]
#[case("|--- class: 1", "class: 1")]
#[case("|--- class:Progression", "class: Progression")]
#[case("|--- class:    yes", "class: yes")]
fn test_leaf_labels_normalized(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(parse_tree(line).name, expected);
}

#[test]
fn test_condition_without_children_stays_internal() {
    let tree = parse_tree("|--- x <= 1.00\n");
    assert_eq!(tree.name, "x <= 1.00");
    assert!(!tree.is_leaf());
    assert!(tree.children().is_empty());
}

#[test]
fn test_json_output_shape() {
    let tree = parse_tree("|--- x <= 1.00\n|   |--- class: 0\n");
    let json: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "x <= 1.00",
            "children": [{ "name": "class: 0" }]
        })
    );
}
