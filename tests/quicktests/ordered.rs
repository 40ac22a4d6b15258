use ordered_tree::{Order, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and to a sorted `Vec` of the same
/// keys. Every query checks the tree's answers against the `Vec`.
fn do_ops<K>(ops: &[Op<K>], tree: &mut OrderedTree<K>, model: &mut Vec<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                let at = model.partition_point(|x| x <= k);
                model.insert(at, k.clone());
            }
            Op::Query(k) => {
                let present = model.binary_search(k).is_ok();
                let after = model.iter().find(|x| *x > k);
                let before = model.iter().rev().find(|x| *x < k);

                if tree.contains(k) != present {
                    return false;
                }
                // Only unique keys have an unambiguous neighbour.
                if present && model.iter().filter(|x| *x == k).count() == 1 {
                    if tree.successor(k) != after || tree.predecessor(k) != before {
                        return false;
                    }
                }
                if !present && (tree.successor(k).is_some() || tree.predecessor(k).is_some()) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model) && tree.iter().eq(model.iter())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    tree.traverse(Order::InOrder).copied().eq(sorted)
}

#[quickcheck]
fn every_order_visits_every_key(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    [Order::PreOrder, Order::PostOrder].iter().all(|&order| {
        let mut keys: Vec<_> = tree.traverse(order).copied().collect();
        keys.sort();
        keys == sorted
    })
}

#[quickcheck]
fn pre_order_starts_and_post_order_ends_at_root(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let root = tree.root().map(|root| root.key());

    tree.pre_order().next() == root && tree.post_order().last() == root
}

#[quickcheck]
fn structural_counts_cover_every_node(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    tree.count_leaves() + tree.count_single_child_nodes() + tree.count_two_child_nodes()
        == xs.len()
}

#[quickcheck]
fn leaves_match_count(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    tree.leaves().count() == tree.count_leaves() && tree.leaf_path_sum() == tree.count_leaves()
}

#[quickcheck]
fn level_one_is_the_root(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    let root: Vec<_> = tree.root().map(|root| root.key()).into_iter().collect();

    tree.level_nodes(1).collect::<Vec<_>>() == root
}

#[quickcheck]
fn extremes_are_min_and_max(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    tree.leftmost().ok() == xs.iter().min() && tree.rightmost().ok() == xs.iter().max()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find_node(x).map(|node| node.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find_node(x).is_none())
}

#[quickcheck]
fn traversal_is_repeatable(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();

    tree.pre_order().eq(tree.pre_order()) && tree.post_order().eq(tree.post_order())
}
