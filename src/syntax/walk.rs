//! Tree traversal.

use super::node::Node;

/// Visit `node` and all of its descendants in pre-order (document order).
pub fn walk<'a>(node: &'a Node, visit: &mut impl FnMut(&'a Node)) {
    visit(node);
    for child in &node.children {
        walk(child, visit);
    }
}

/// Collect `node` and all of its descendants in pre-order.
pub fn preorder(node: &Node) -> Vec<&Node> {
    let mut nodes = Vec::new();
    walk(node, &mut |n| nodes.push(n));
    nodes
}
