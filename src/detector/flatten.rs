//! Flattens a design tree into the lowercase text blob used for keyword search.

use crate::core::{DesignNode, Error, MalformedTreeReason, Result, Screen};

/// Screen name followed by every node name in depth-first pre-order,
/// space-joined and lowercased.
///
/// Depth is unbounded unless `max_depth` is given; a cycle is always an error.
pub fn flatten_screen(screen: &Screen, max_depth: Option<usize>) -> Result<String> {
    let mut names = vec![screen.name.as_str()];
    collect_names(&screen.children, max_depth, &mut names)
        .map_err(|reason| Error::malformed_tree(screen_label(screen), reason))?;
    Ok(names.join(" ").to_lowercase())
}

/// Same as [`flatten_screen`] for a bare node tree
pub fn flatten_nodes(
    nodes: &[DesignNode],
    max_depth: Option<usize>,
) -> std::result::Result<String, MalformedTreeReason> {
    let mut names = Vec::new();
    collect_names(nodes, max_depth, &mut names)?;
    Ok(names.join(" ").to_lowercase())
}

/// Iterative pre-order walk. `ancestors` holds the ids on the path to the
/// node being visited so a repeated id can be reported as a cycle.
fn collect_names<'a>(
    roots: &'a [DesignNode],
    max_depth: Option<usize>,
    names: &mut Vec<&'a str>,
) -> std::result::Result<(), MalformedTreeReason> {
    let mut stack: Vec<(&DesignNode, usize)> = roots.iter().rev().map(|node| (node, 1)).collect();
    let mut ancestors: Vec<&str> = Vec::new();

    while let Some((node, depth)) = stack.pop() {
        if let Some(max_depth) = max_depth.filter(|max| depth > *max) {
            return Err(MalformedTreeReason::TooDeep { max_depth });
        }

        ancestors.truncate(depth - 1);
        if !node.id.is_empty() && ancestors.contains(&node.id.as_str()) {
            return Err(MalformedTreeReason::Cycle {
                node_id: node.id.clone(),
            });
        }

        names.push(node.name.as_str());
        ancestors.push(node.id.as_str());
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    Ok(())
}

fn screen_label(screen: &Screen) -> &str {
    if screen.name.is_empty() {
        &screen.id
    } else {
        &screen.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(id: &str, name: &str, children: Vec<DesignNode>) -> DesignNode {
        DesignNode::new(id, name).with_children(children)
    }

    #[test]
    fn test_flatten_is_preorder_and_lowercase() {
        let screen = Screen::new("1", "Login Form").with_children(vec![
            node(
                "2",
                "Header",
                vec![node("3", "Logo", vec![]), node("4", "Title", vec![])],
            ),
            node("5", "Submit Button", vec![]),
        ]);

        let text = flatten_screen(&screen, None).unwrap();
        assert_eq!(text, "login form header logo title submit button");
    }

    #[test]
    fn test_flatten_screen_without_children() {
        let screen = Screen::new("1", "Empty Inbox");
        assert_eq!(
            flatten_screen(&screen, None).unwrap(),
            "empty inbox"
        );
    }

    #[test]
    fn test_flatten_nodes_without_screen() {
        let nodes = vec![node("1", "Search", vec![node("2", "Results", vec![])])];
        assert_eq!(
            flatten_nodes(&nodes, None).unwrap(),
            "search results"
        );
    }

    #[test]
    fn test_repeated_ancestor_id_is_cycle() {
        let screen = Screen::new("1", "Broken").with_children(vec![node(
            "7:1",
            "Card",
            vec![node("7:2", "Body", vec![node("7:1", "Card", vec![])])],
        )]);

        let err = flatten_screen(&screen, None).unwrap_err();
        match err {
            Error::MalformedTree { screen, reason } => {
                assert_eq!(screen, "Broken");
                assert_eq!(
                    reason,
                    MalformedTreeReason::Cycle {
                        node_id: "7:1".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_same_id_in_sibling_branches_is_not_cycle() {
        let nodes = vec![
            node("a", "Row", vec![node("x", "Cell", vec![])]),
            node("b", "Row", vec![node("x", "Cell", vec![])]),
        ];
        assert_eq!(
            flatten_nodes(&nodes, None).unwrap(),
            "row cell row cell"
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut tree = node("leaf", "Leaf", vec![]);
        for i in 0..5 {
            tree = node(&format!("n{i}"), "Frame", vec![tree]);
        }

        assert!(flatten_nodes(std::slice::from_ref(&tree), Some(6)).is_ok());
        assert_eq!(
            flatten_nodes(std::slice::from_ref(&tree), Some(5)).unwrap_err(),
            MalformedTreeReason::TooDeep { max_depth: 5 }
        );
    }

    #[test]
    fn test_deep_acyclic_tree_is_unbounded_by_default() {
        let mut tree = node("leaf", "Empty Row", vec![]);
        for i in 0..300 {
            tree = node(&format!("f{i}"), "Frame", vec![tree]);
        }
        let screen = Screen::new("9:1", "Orders Table").with_children(vec![tree]);

        let text = flatten_screen(&screen, None).unwrap();
        assert!(text.starts_with("orders table frame frame"));
        assert!(text.ends_with("frame empty row"));
        assert_eq!(text.matches("frame").count(), 300);
    }
}
