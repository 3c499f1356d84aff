//! Prints the verdict for the tree from the exercise statement.

use exercises::tree::{Node, Tree};

fn main() {
    // The sample tree:
    //
    //       1
    //      / \
    //     1   1
    //    /
    //   0
    //
    // Values on the right must be strictly greater than the root, so the
    // right 1 makes this tree unsorted.
    let tree = Tree::from(
        Node::new(1)
            .with_left(Node::new(1).with_left(Node::new(0)))
            .with_right(Node::new(1)),
    );

    if tree.is_sorted() {
        println!("Tree is sorted");
    } else {
        println!("Tree is not sorted");
    }
}
