extern crate rand;
extern crate tree_collections;

use self::rand::{thread_rng, Rng};
use std::vec::Vec;
use tree_collections::{BinaryTree, NodePath, Traverse};

#[test]
fn int_test_binary_tree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = BinaryTree::new();
    let mut expected = Vec::new();
    for _ in 0..1_000 {
        let value = rng.gen_range(0, 300);
        tree.insert(value);
        expected.push(value);
    }

    // breadth-first insertion keeps the tree complete
    assert_eq!(tree.len(), 1_000);
    assert_eq!(tree.depth(), 9);
    assert_eq!(
        tree.iter_breadth_first().map(|node| *node.value()).collect::<Vec<u32>>(),
        expected,
    );

    thread_rng().shuffle(&mut expected);

    let mut expected_len = expected.len();
    for value in &expected {
        let count = tree.count_of(value);
        assert!(tree.remove(value));
        expected_len -= 1;
        assert_eq!(tree.len(), expected_len);
        assert_eq!(tree.count_of(value), count - 1);
    }
    assert!(tree.is_empty());
}

#[test]
fn int_test_binary_tree_remove_at() {
    let mut tree: BinaryTree<u32> = (0..100).collect();
    let mut remaining = 100;
    loop {
        let path = match tree.leaves().next().and_then(|leaf| tree.find_path(leaf.value())) {
            Some(path) => path,
            None => break,
        };
        let value = *tree.node_at(&path).map(|node| node.value()).unwrap_or(&0);
        assert_eq!(tree.remove_at(&path), Ok(value));
        remaining -= 1;
        assert_eq!(tree.len(), remaining);
    }
    assert_eq!(remaining, 0);
    assert!(tree.remove_at(&NodePath::root()).is_err());
}

#[test]
fn int_test_traversals_agree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([3, 1, 4, 1]);
    let tree: BinaryTree<u32> = (0..500).map(|_| rng.next_u32()).collect();

    let mut breadth_first = tree.iter_breadth_first().map(|node| *node.value()).collect::<Vec<u32>>();
    let mut depth_first = tree.iter_depth_first().map(|node| *node.value()).collect::<Vec<u32>>();
    let mut in_order = tree.values().cloned().collect::<Vec<u32>>();
    let mut owned = tree.into_iter().collect::<Vec<u32>>();

    assert_eq!(in_order, owned);

    breadth_first.sort();
    depth_first.sort();
    in_order.sort();
    owned.sort();
    assert_eq!(breadth_first, depth_first);
    assert_eq!(depth_first, in_order);
    assert_eq!(in_order, owned);
}
