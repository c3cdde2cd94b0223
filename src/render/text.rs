//! Plain-text rendering of a display tree, used by the `order-lookup` CLI.

use std::fmt::Write;

use super::Node;

pub fn to_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, 0);
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Section { title, children } => {
            let _ = writeln!(out, "{indent}== {title} ==");
            for child in children {
                write_node(out, child, depth + 1);
            }
        }
        Node::Card { children } => {
            let _ = writeln!(out, "{indent}-");
            for child in children {
                write_node(out, child, depth + 1);
            }
        }
        Node::Field { label, value } => {
            let _ = writeln!(out, "{indent}{label}: {value}");
        }
        Node::Activate { child, .. } => write_node(out, child, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_layout() {
        let tree = vec![Node::section(
            "Items",
            vec![Node::Card {
                children: vec![
                    Node::field("Name", "Widget".into()),
                    Node::field("Discount", "10%".into()),
                ],
            }],
        )];
        assert_eq!(
            to_text(&tree),
            "== Items ==\n  -\n    Name: Widget\n    Discount: 10%\n"
        );
    }
}
