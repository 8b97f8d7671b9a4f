//! Tests for the traversal framework

use rstest::rstest;

use rsclass::arena::{BinaryTree, Index};
use rsclass::datum::Datum;
use rsclass::errors::TreeError;
use rsclass::tree_queue::BreadthFirstTraversal;
use rsclass::tree_stack::{DepthFirstOrder, DepthFirstTraversal};

// root "warm-blooded?", left "has fur?", right "has feathers?"
fn sample_tree() -> BinaryTree {
    let mut tree = BinaryTree::new();
    let root = tree
        .set_root(Some(Datum::with_number("warm-blooded?", 1)))
        .unwrap();
    tree.add_left(root, Datum::with_number("has fur?", 0)).unwrap();
    tree.add_right(root, Datum::with_number("has feathers?", 2))
        .unwrap();
    tree
}

fn prompts(tree: &BinaryTree, visits: &[Index]) -> Vec<String> {
    visits
        .iter()
        .map(|&idx| tree.element(idx).unwrap().prompt().to_string())
        .collect()
}

#[rstest]
#[case::pre_order(
    DepthFirstOrder::PreOrder,
    &["warm-blooded?", "has fur?", "has feathers?"]
)]
#[case::in_order(
    DepthFirstOrder::InOrder,
    &["has fur?", "warm-blooded?", "has feathers?"]
)]
#[case::post_order(
    DepthFirstOrder::PostOrder,
    &["has fur?", "has feathers?", "warm-blooded?"]
)]
fn given_sample_tree_when_traversed_depth_first_then_order_matches(
    #[case] order: DepthFirstOrder,
    #[case] expected: &[&str],
) {
    let tree = sample_tree();

    let visits = DepthFirstTraversal::new(&tree, order).traverse();

    assert_eq!(prompts(&tree, &visits), expected);
}

#[test]
fn given_sample_tree_when_traversed_breadth_first_then_level_order() {
    let tree = sample_tree();

    let visits = BreadthFirstTraversal::new(&tree).traverse();

    assert_eq!(
        prompts(&tree, &visits),
        ["warm-blooded?", "has fur?", "has feathers?"]
    );
}

#[test]
fn given_deep_tree_when_traversed_breadth_first_then_depths_never_decrease() {
    let mut tree = BinaryTree::new();
    let root = tree.set_root(Some(Datum::with_number("a", 8))).unwrap();
    let l = tree.add_left(root, Datum::with_number("b", 4)).unwrap();
    let r = tree.add_right(root, Datum::with_number("c", 12)).unwrap();
    tree.add_left(l, Datum::with_number("d", 2)).unwrap();
    tree.add_right(l, Datum::with_number("e", 6)).unwrap();
    let rl = tree.add_left(r, Datum::with_number("f", 10)).unwrap();
    tree.add_left(rl, Datum::with_number("g", 9)).unwrap();

    let depths: Vec<usize> = BreadthFirstTraversal::new(&tree)
        .traverse()
        .iter()
        .map(|&idx| tree.depth(idx).unwrap())
        .collect();

    assert_eq!(depths.len(), tree.size());
    assert!(depths.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn given_empty_tree_when_traversed_then_empty_sequence_without_error() {
    let tree = BinaryTree::new();

    assert!(BreadthFirstTraversal::new(&tree).traverse().is_empty());
    assert!(DepthFirstTraversal::pre_order(&tree).traverse().is_empty());
    assert!(DepthFirstTraversal::in_order(&tree).traverse().is_empty());
    assert!(DepthFirstTraversal::post_order(&tree).traverse().is_empty());
}

#[test]
fn given_start_node_when_traversing_from_then_only_subtree_visited() {
    let mut tree = BinaryTree::new();
    let root = tree.set_root(Some(Datum::with_number("a", 8))).unwrap();
    let l = tree.add_left(root, Datum::with_number("b", 4)).unwrap();
    tree.add_right(root, Datum::with_number("c", 12)).unwrap();
    tree.add_left(l, Datum::with_number("d", 2)).unwrap();
    tree.add_right(l, Datum::with_number("e", 6)).unwrap();

    let breadth = BreadthFirstTraversal::new(&tree).traverse_from(l).unwrap();
    let depth = DepthFirstTraversal::in_order(&tree).traverse_from(l).unwrap();

    assert_eq!(prompts(&tree, &breadth), ["b", "d", "e"]);
    assert_eq!(prompts(&tree, &depth), ["d", "b", "e"]);
}

#[test]
fn given_stale_start_node_when_traversing_from_then_invalid_start_error() {
    let mut tree = sample_tree();
    let root = tree.root().unwrap();
    let left = tree.left(root).unwrap().unwrap();
    tree.remove(&Datum::with_number("", 0), root).unwrap();

    let breadth = BreadthFirstTraversal::new(&tree).traverse_from(left);
    let depth = DepthFirstTraversal::post_order(&tree).traverse_from(left);

    assert!(matches!(breadth, Err(TreeError::InvalidStart)));
    assert!(matches!(depth, Err(TreeError::InvalidStart)));
}
