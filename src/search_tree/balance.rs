use crate::node::Side;
use crate::tree::{self, Tree};

/// A strategy that restores a shape invariant after an ordered tree is mutated.
///
/// Nodes carry no parent links, so the tree hands the strategy the path recorded while descending.
/// Every node named by a strict prefix of that path is an ancestor of the mutation and has a stale
/// cached height. An implementation must refresh those heights with `Node::update`, and may rotate
/// at any ancestor with `rotate_left` and `rotate_right`.
pub trait Balance {
    /// Called after a new leaf was attached at `path`.
    fn after_insert<T>(&self, tree: &mut Tree<T>, path: &[Side]);

    /// Called after the node at `path` was unlinked.
    fn after_remove<T>(&self, tree: &mut Tree<T>, path: &[Side]);

    /// Returns `false` if the strategy's invariant is visibly broken.
    fn check<T>(&self, _tree: &Tree<T>) -> bool {
        true
    }
}

/// Keeps the shape produced by plain binary search tree insertion and removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    fn after_insert<T>(&self, tree: &mut Tree<T>, path: &[Side]) {
        tree::refresh_ancestors(tree, path);
    }

    fn after_remove<T>(&self, tree: &mut Tree<T>, path: &[Side]) {
        tree::refresh_ancestors(tree, path);
    }
}

/// Rotates so that the heights of the two child subtrees of any node differ by at most one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Avl;

impl Balance for Avl {
    fn after_insert<T>(&self, tree: &mut Tree<T>, path: &[Side]) {
        // A rotation changes the depth of the subtree it is applied to, so every recorded
        // ancestor is visited even after a fix.
        tree::walk_ancestors(tree, path, |slot, depth| {
            restore(slot, depth);
            true
        });
    }

    fn after_remove<T>(&self, tree: &mut Tree<T>, path: &[Side]) {
        // the shorter side lost a level and this subtree kept its height
        tree::walk_ancestors(tree, path, |slot, depth| restore(slot, depth).abs() != 1);
    }

    /// Only the balance factor of the root is checked, measured from the node graph.
    fn check<T>(&self, tree: &Tree<T>) -> bool {
        tree::measure(tree).first().map_or(true, |root| root.balance.abs() < 2)
    }
}

// Refreshes the height of the node in `slot` and rotates it if it is out of balance. Returns the
// balance factor seen before rotating.
fn restore<T>(slot: &mut Tree<T>, depth: usize) -> isize {
    let balance = match slot.as_mut() {
        Some(node) => {
            node.update();
            node.balance()
        },
        None => return 0,
    };
    if balance.abs() > 1 {
        trace!("rebalancing node at depth {} with balance {}", depth, balance);
        rebalance(slot, balance);
    }
    balance
}

fn rebalance<T>(slot: &mut Tree<T>, balance: isize) {
    let heavy = if balance > 1 {
        Side::Right
    } else if balance < -1 {
        Side::Left
    } else {
        return;
    };
    if let Some(ref mut node) = *slot {
        let child = node.child_mut(heavy);
        // a heavy child leaning the other way needs a double rotation
        if child.as_ref().map_or(0, |pivot| pivot.balance()) * balance < 0 {
            lift(child, heavy.opposite());
        }
    }
    lift(slot, heavy);
}

// Rotates the child on `side` up into `slot`.
fn lift<T>(slot: &mut Tree<T>, side: Side) {
    match side {
        Side::Left => tree::rotate_right(slot),
        Side::Right => tree::rotate_left(slot),
    }
}
