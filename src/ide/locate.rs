//! Position locator: The chain of CST nodes enclosing a position.
//!
//! Containment is decided on lines only: a node encloses every line between its
//! start and end line, whatever the column. When several siblings enclose the
//! line, one winner is picked by a left-to-right pairwise reduction (see
//! [`closer`]), so ties resolve the same way on every run.

use std::cmp::Ordering;

use crate::syntax::Node;

/// Return the nodes enclosing `(line, character)`, outermost first.
///
/// `line` and `character` are 1-based, matching the engine's spans.
pub fn locate(nodes: &[Node], line: u32, character: u32) -> Vec<&Node> {
    let mut chain = Vec::new();
    let mut level = nodes;
    while let Some(winner) = closest(level, line, character) {
        chain.push(winner);
        level = &winner.children;
    }
    tracing::trace!(line, character, depth = chain.len(), "located node chain");
    chain
}

/// Pick the single best candidate at one level of the forest.
fn closest(nodes: &[Node], line: u32, character: u32) -> Option<&Node> {
    nodes
        .iter()
        .filter(|n| !n.is_structural())
        .filter(|n| n.span.contains_line(line))
        .reduce(|acc, val| closer(acc, val, line, character))
}

/// Decide between the running winner `acc` and the next candidate `val`.
///
/// 1. The candidate starting on the later line wins.
/// 2. Both start on the query line: the smallest non-negative distance from
///    `start_column` to `character` wins; otherwise the greater `start_column`.
/// 3. Both start on the same earlier line: the greater `start_column` wins.
///
/// Full ties keep `acc`.
fn closer<'a>(acc: &'a Node, val: &'a Node, line: u32, character: u32) -> &'a Node {
    // Both start at or before `line`, guaranteed by the containment filter.
    let acc_line_dist = line - acc.span.start_line;
    let val_line_dist = line - val.span.start_line;
    match val_line_dist.cmp(&acc_line_dist) {
        Ordering::Less => val,
        Ordering::Greater => acc,
        Ordering::Equal if acc.span.start_line == line => {
            let acc_dist = column_distance(acc, character);
            let val_dist = column_distance(val, character);
            match (acc_dist, val_dist) {
                (Some(a), Some(v)) if v < a => val,
                (Some(a), Some(v)) if a < v => acc,
                (Some(_), None) => acc,
                (None, Some(_)) => val,
                _ => greater_start_column(acc, val),
            }
        }
        Ordering::Equal => greater_start_column(acc, val),
    }
}

/// Distance from a node's start to `character`, if the node starts at or before it.
fn column_distance(node: &Node, character: u32) -> Option<u32> {
    character.checked_sub(node.span.start_column)
}

fn greater_start_column<'a>(acc: &'a Node, val: &'a Node) -> &'a Node {
    if val.span.start_column > acc.span.start_column {
        val
    } else {
        acc
    }
}
