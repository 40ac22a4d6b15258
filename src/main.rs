use std::error::Error;

use ordered_tree::{Order, OrderedTree};

/// Keys used when none are given on the command line.
const DEFAULT_KEYS: [i64; 6] = [5, 4, 7, 3, 6, 8];

/// Builds a tree from the integer keys given as arguments (or a small default
/// set) and prints what the tree can tell about itself. Pass `--empty` to run
/// the report on a tree without keys, which fails once an extreme is asked for.
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let tree: OrderedTree<i64> = if args.iter().any(|arg| arg == "--empty") {
        OrderedTree::new()
    } else if args.is_empty() {
        DEFAULT_KEYS.into_iter().collect()
    } else {
        args.iter()
            .map(|arg| arg.parse::<i64>())
            .collect::<Result<_, _>>()?
    };

    for (label, order) in [
        ("in-order", Order::InOrder),
        ("pre-order", Order::PreOrder),
        ("post-order", Order::PostOrder),
    ] {
        println!("{:>12}: {:?}", label, tree.traverse(order).collect::<Vec<_>>());
    }

    println!("{:>12}: {:?}", "leaves", tree.leaves().collect::<Vec<_>>());
    println!("{:>12}: {}", "one child", tree.count_single_child_nodes());
    println!("{:>12}: {}", "two children", tree.count_two_child_nodes());
    println!("{:>12}: {}", "height", tree.height());

    for (i, level) in tree.levels().enumerate() {
        println!("{:>12}: {:?}", format!("level {}", i + 1), level);
    }

    println!("{:>12}: {}", "leftmost", tree.leftmost()?);
    println!("{:>12}: {}", "rightmost", tree.rightmost()?);

    Ok(())
}
