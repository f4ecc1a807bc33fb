//! Id-addressed operations over a forest of [`Node`]s.
//!
//! Every mutating function borrows the current tree and returns a rebuilt
//! one. The input is never modified, so a failed operation leaves the
//! caller's tree exactly as it was.

use crate::error::{Result, TreeError};
use crate::node::{Node, NodeId, NodePatch};

/// Depth-first search in document order.
pub fn find_by_id<'a>(tree: &'a [Node], id: &NodeId) -> Option<&'a Node> {
    for node in tree {
        if &node.id == id {
            return Some(node);
        }
        if let Some(found) = find_by_id(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// The node whose `children` hold `id`. `None` for root nodes and unknown ids.
pub fn find_parent<'a>(tree: &'a [Node], id: &NodeId) -> Option<&'a Node> {
    for node in tree {
        if node.children.iter().any(|c| &c.id == id) {
            return Some(node);
        }
        if let Some(found) = find_parent(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Whether `id` is `ancestor` itself or lies anywhere beneath it.
pub fn contains(tree: &[Node], ancestor: &NodeId, id: &NodeId) -> bool {
    find_by_id(tree, ancestor).is_some_and(|a| &a.id == id || find_by_id(&a.children, id).is_some())
}

/// Append `node` to the children of `target`, or to the root when `target`
/// is `None`. The inserted node's `parent_id` is rewritten accordingly.
pub fn insert(tree: &[Node], mut node: Node, target: Option<&NodeId>) -> Result<Vec<Node>> {
    if let Some(dup) = first_shared_id(tree, &node) {
        return Err(TreeError::DuplicateId(dup));
    }

    let Some(target) = target else {
        node.parent_id = None;
        let mut out = tree.to_vec();
        out.push(node);
        return Ok(out);
    };

    match find_by_id(tree, target) {
        None => Err(TreeError::ContainerNotFound(target.clone())),
        Some(t) if !t.is_container() => Err(TreeError::NotAContainer {
            id: t.id.clone(),
            kind: t.kind,
        }),
        Some(_) => {
            node.parent_id = Some(target.clone());
            let mut node = Some(node);
            Ok(rebuild(tree, target, &mut |container: &mut Node| {
                if let Some(n) = node.take() {
                    container.children.push(n);
                }
            }))
        }
    }
}

/// Drop the node with `id` (and its subtree) wherever it sits.
pub fn remove(tree: &[Node], id: &NodeId) -> Vec<Node> {
    tree.iter()
        .filter(|n| &n.id != id)
        .map(|n| with_children(n, remove(&n.children, id)))
        .collect()
}

/// Like [`remove`], but also hands back the detached node.
pub fn take(tree: &[Node], id: &NodeId) -> Option<(Vec<Node>, Node)> {
    let node = find_by_id(tree, id)?.clone();
    Some((remove(tree, id), node))
}

/// Merge `patch` into the node with `id`.
pub fn update(tree: &[Node], id: &NodeId, patch: &NodePatch) -> Result<Vec<Node>> {
    if find_by_id(tree, id).is_none() {
        return Err(TreeError::NodeNotFound(id.clone()));
    }
    Ok(rebuild(tree, id, &mut |node: &mut Node| node.apply(patch)))
}

/// Relocate `id` under `target` (or to the root), keeping its id, kind,
/// props and style.
///
/// Moving a node into itself or one of its descendants is not checked here;
/// the target disappears with the removed subtree and the move fails with
/// [`TreeError::ContainerNotFound`].
pub fn move_node(tree: &[Node], id: &NodeId, target: Option<&NodeId>) -> Result<Vec<Node>> {
    let (rest, node) = take(tree, id).ok_or_else(|| TreeError::NodeNotFound(id.clone()))?;
    insert(&rest, node, target)
}

/// Total number of nodes.
pub fn count(tree: &[Node]) -> usize {
    tree.iter().map(|n| 1 + count(&n.children)).sum()
}

/// All nodes with their depth (roots at 0), in document order.
pub fn iter(tree: &[Node]) -> Vec<(usize, &Node)> {
    fn walk<'a>(nodes: &'a [Node], depth: usize, out: &mut Vec<(usize, &'a Node)>) {
        for n in nodes {
            out.push((depth, n));
            walk(&n.children, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(tree, 0, &mut out);
    out
}

/// Copy the tree, running `edit` on the first node with `id`.
fn rebuild(tree: &[Node], id: &NodeId, edit: &mut dyn FnMut(&mut Node)) -> Vec<Node> {
    tree.iter()
        .map(|n| {
            if &n.id == id {
                let mut n = n.clone();
                edit(&mut n);
                n
            } else {
                with_children(n, rebuild(&n.children, id, edit))
            }
        })
        .collect()
}

/// `n` without its subtree, holding `children` instead.
fn with_children(n: &Node, children: Vec<Node>) -> Node {
    Node {
        id: n.id.clone(),
        kind: n.kind,
        props: n.props.clone(),
        style: n.style.clone(),
        children,
        parent_id: n.parent_id.clone(),
    }
}

fn first_shared_id(tree: &[Node], node: &Node) -> Option<NodeId> {
    if find_by_id(tree, &node.id).is_some() {
        return Some(node.id.clone());
    }
    node.children
        .iter()
        .find_map(|child| first_shared_id(tree, child))
}
