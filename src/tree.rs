use crate::node::{Node, Side};
use std::cmp;
use std::collections::VecDeque;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

pub fn node_at<'a, T>(tree: &'a Tree<T>, path: &[Side]) -> Option<&'a Node<T>> {
    let mut curr = tree.as_ref()?;
    for side in path {
        curr = curr.child(*side).as_ref()?;
    }
    Some(curr)
}

// Returns the slot at the end of `path`. The slot itself may be empty, but every step before it
// must pass through a node.
pub fn slot_mut<'a, T>(tree: &'a mut Tree<T>, path: &[Side]) -> Option<&'a mut Tree<T>> {
    let mut curr = tree;
    for side in path {
        curr = match { curr } {
            Some(node) => node.child_mut(*side),
            None => return None,
        };
    }
    Some(curr)
}

pub fn node_at_mut<'a, T>(tree: &'a mut Tree<T>, path: &[Side]) -> Option<&'a mut Node<T>> {
    slot_mut(tree, path).and_then(|slot| slot.as_mut()).map(|node| &mut **node)
}

/// Visits the slots of every strict ancestor of the slot at `path`, deepest first, each exactly
/// once. `visit` receives the slot and its depth and returns `false` to skip the remaining
/// ancestors. A visited slot may be rotated.
///
/// The ancestors are detached from the root down and reattached on the way back up, so the walk
/// costs one descent however long the path is.
pub fn walk_ancestors<T, F>(tree: &mut Tree<T>, path: &[Side], mut visit: F)
where
    F: FnMut(&mut Tree<T>, usize) -> bool,
{
    let mut spine = Vec::with_capacity(path.len());
    let mut curr = tree.take();
    for side in path {
        match curr.take() {
            Some(mut node) => {
                curr = node.child_mut(*side).take();
                spine.push((node, *side));
            },
            None => break,
        }
    }

    let mut visiting = true;
    while let Some((mut node, side)) = spine.pop() {
        *node.child_mut(side) = curr;
        curr = Some(node);
        if visiting {
            visiting = visit(&mut curr, spine.len());
        }
    }
    *tree = curr;
}

// Refreshes the cached heights of every strict ancestor of the slot at `path`, deepest first.
pub fn refresh_ancestors<T>(tree: &mut Tree<T>, path: &[Side]) {
    walk_ancestors(tree, path, |slot, _| {
        if let Some(ref mut node) = *slot {
            node.update();
        }
        true
    });
}

/// Drops every node of `tree` without recursing once per level.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

// Breadth-first search for the first node matching `pred`. Each visited node records the index of
// its parent so that the path can be unwound without storing a path per queued node.
pub fn locate<T, F>(tree: &Tree<T>, mut pred: F) -> Option<Vec<Side>>
where
    F: FnMut(&Node<T>) -> bool,
{
    let root = tree.as_ref()?;
    let mut trail: Vec<Option<(usize, Side)>> = vec![None];
    let mut queue = VecDeque::new();
    queue.push_back((&**root, 0));

    while let Some((node, index)) = queue.pop_front() {
        if pred(node) {
            let mut path = Vec::new();
            let mut curr = index;
            while let Some((parent, side)) = trail[curr] {
                path.push(side);
                curr = parent;
            }
            path.reverse();
            return Some(path);
        }
        for side in &[Side::Left, Side::Right] {
            if let Some(ref child) = node.child(*side) {
                trail.push(Some((index, *side)));
                queue.push_back((&**child, trail.len() - 1));
            }
        }
    }
    None
}

// Path to the in-order predecessor of a node with a left child, relative to that node.
fn predecessor_path<T>(node: &Node<T>) -> Vec<Side> {
    let mut path = vec![Side::Left];
    let mut curr = node.left();
    while let Some(next) = curr.and_then(Node::right) {
        path.push(Side::Right);
        curr = Some(next);
    }
    path
}

/// Removes the node at `path` and returns its value together with the path of the node that was
/// physically unlinked. Returns `None` if `path` does not name a node.
///
/// A leaf is detached. A node with a single child absorbs that child's value and subtrees in place.
/// A node with two children swaps values with its in-order predecessor, which is then spliced out
/// in turn; the predecessor has no right child, so the second splice is one of the first two cases.
///
/// Strict ancestors of the returned path are the only nodes whose subtree heights changed. Their
/// cached heights are not refreshed here.
pub fn splice<T>(tree: &mut Tree<T>, mut path: Vec<Side>) -> Option<(T, Vec<Side>)> {
    let slot = slot_mut(tree, &path)?;
    let shape = match *slot {
        Some(ref node) => (node.left.is_some(), node.right.is_some()),
        None => return None,
    };

    match shape {
        (false, false) => slot.take().map(|node| (node.into_value(), path)),
        (true, false) | (false, true) => {
            let side = if shape.0 { Side::Left } else { Side::Right };
            let node = slot.as_mut()?;
            let child = node.child_mut(side).take()?;
            let removed = mem::replace(&mut **node, *child);
            path.push(side);
            Some((removed.into_value(), path))
        },
        (true, true) => {
            let node = slot.as_mut()?;
            let relative = predecessor_path(node);
            {
                let Node { ref mut value, ref mut left, .. } = **node;
                let predecessor = node_at_mut(left, &relative[1..])?;
                mem::swap(value, &mut predecessor.value);
            }
            path.extend(relative);
            splice(tree, path)
        },
    }
}

pub fn rotate_left<T>(slot: &mut Tree<T>) {
    let mut node = match slot.take() {
        Some(node) => node,
        None => return,
    };
    let mut pivot = match node.right.take() {
        Some(pivot) => pivot,
        None => {
            *slot = Some(node);
            return;
        },
    };
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    *slot = Some(pivot);
}

pub fn rotate_right<T>(slot: &mut Tree<T>) {
    let mut node = match slot.take() {
        Some(node) => node,
        None => return,
    };
    let mut pivot = match node.left.take() {
        Some(pivot) => pivot,
        None => {
            *slot = Some(node);
            return;
        },
    };
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    *slot = Some(pivot);
}

/// Heights and balance factors recomputed from the node graph, ignoring cached heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measure {
    pub height: usize,
    pub cached_height: usize,
    pub balance: isize,
}

// Measures every node, returned in breadth-first order so that the root comes first. Children are
// always enqueued after their parent, so a reverse sweep sees both children before the parent.
pub fn measure<T>(tree: &Tree<T>) -> Vec<Measure> {
    let mut order: Vec<(&Node<T>, Option<usize>, Option<usize>)> = Vec::new();
    if let Some(ref root) = tree {
        order.push((&**root, None, None));
    }
    let mut index = 0;
    while index < order.len() {
        let node = order[index].0;
        if let Some(left) = node.left() {
            order.push((left, None, None));
            order[index].1 = Some(order.len() - 1);
        }
        if let Some(right) = node.right() {
            order.push((right, None, None));
            order[index].2 = Some(order.len() - 1);
        }
        index += 1;
    }

    let mut measures = vec![
        Measure {
            height: 0,
            cached_height: 0,
            balance: 0,
        };
        order.len()
    ];
    for index in (0..order.len()).rev() {
        let (node, left, right) = order[index];
        let left_height = left.map_or(0, |child| measures[child].height);
        let right_height = right.map_or(0, |child| measures[child].height);
        measures[index] = Measure {
            height: cmp::max(left_height, right_height) + 1,
            cached_height: node.height,
            balance: right_height as isize - left_height as isize,
        };
    }
    measures
}
