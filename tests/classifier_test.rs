//! Tests for interactive identification sessions, scripted over in-memory
//! streams.

use std::io::Cursor;

use rsclass::classifier::{identify, prompt_yes_no};
use rsclass::store;
use rsclass::BinaryTree;

fn transcript(output: Vec<u8>) -> String {
    String::from_utf8(output).unwrap()
}

#[test]
fn given_yes_answers_when_identifying_then_animal_found() {
    let mut tree = store::from_str(store::DEFAULT_DATASET).unwrap();
    let mut input = Cursor::new("Y\nY\n");
    let mut output = Vec::new();

    identify(&mut tree, &mut input, &mut output).unwrap();

    let transcript = transcript(output);
    assert!(transcript.contains("Is this animal warm-blooded? (Y/N) > "));
    assert!(transcript.contains("Is this animal a mammal? (Y/N) > "));
    assert!(transcript.contains("Found your animal!"));
    assert_eq!(tree.size(), 3, "a successful session must not mutate the tree");
}

#[test]
fn given_no_at_leaf_when_identifying_then_tree_extended_in_place() {
    // Arrange
    let mut tree = store::from_str(store::DEFAULT_DATASET).unwrap();
    let mut input = Cursor::new("N\nN\ncat\nit meows\n");
    let mut output = Vec::new();

    // Act: descend right to the "a bird" leaf, deny it, teach the cat
    identify(&mut tree, &mut input, &mut output).unwrap();

    // Assert: the leaf became the new question, the old answer moved to the
    // no-branch, the new animal took the yes-branch
    let transcript = transcript(output);
    assert!(transcript
        .contains("I don't know about an animal with these characteristics that isn't a bird."));
    assert!(transcript.contains("What characteristic does a cat have that a bird does not? > "));

    assert_eq!(tree.size(), 5);
    let root = tree.root().unwrap();
    let question = tree.right(root).unwrap().unwrap();
    assert_eq!(tree.element(question).unwrap().prompt(), "it meows");
    let yes = tree.left(question).unwrap().unwrap();
    let no = tree.right(question).unwrap().unwrap();
    assert_eq!(tree.element(yes).unwrap().prompt(), "a cat");
    assert_eq!(tree.element(no).unwrap().prompt(), "a bird");
}

#[test]
fn given_extended_tree_when_identifying_again_then_new_animal_found() {
    let mut tree = store::from_str(store::DEFAULT_DATASET).unwrap();
    let mut input = Cursor::new("N\nN\ncat\nit meows\n");
    let mut output = Vec::new();
    identify(&mut tree, &mut input, &mut output).unwrap();

    let mut input = Cursor::new("N\nY\nY\n");
    let mut output = Vec::new();
    identify(&mut tree, &mut input, &mut output).unwrap();

    let transcript = transcript(output);
    assert!(transcript.contains("Is this animal it meows? (Y/N) > "));
    assert!(transcript.contains("Is this animal a cat? (Y/N) > "));
    assert!(transcript.contains("Found your animal!"));
}

#[test]
fn given_garbage_answer_when_identifying_then_reprompted() {
    let mut tree = store::from_str(store::DEFAULT_DATASET).unwrap();
    let mut input = Cursor::new("maybe\nY\nY\n");
    let mut output = Vec::new();

    identify(&mut tree, &mut input, &mut output).unwrap();

    let transcript = transcript(output);
    assert!(transcript.contains("Please answer Y or N."));
    assert!(transcript.contains("Found your animal!"));
}

#[test]
fn given_lowercase_answers_when_identifying_then_accepted() {
    let mut tree = store::from_str(store::DEFAULT_DATASET).unwrap();
    let mut input = Cursor::new("y\ny\n");
    let mut output = Vec::new();

    identify(&mut tree, &mut input, &mut output).unwrap();

    assert!(transcript(output).contains("Found your animal!"));
}

#[test]
fn given_empty_tree_when_identifying_then_error() {
    let mut tree = BinaryTree::new();
    let mut input = Cursor::new("Y\n");
    let mut output = Vec::new();

    let result = identify(&mut tree, &mut input, &mut output);

    assert!(result.is_err());
}

#[test]
fn given_exhausted_input_when_identifying_then_error() {
    let mut tree = store::from_str(store::DEFAULT_DATASET).unwrap();
    let mut input = Cursor::new("");
    let mut output = Vec::new();

    let result = identify(&mut tree, &mut input, &mut output);

    assert!(result.is_err());
}

#[test]
fn given_yes_no_prompt_then_answer_mapped_to_bool() {
    let mut input = Cursor::new("N\n");
    let mut output = Vec::new();

    let answer = prompt_yes_no(&mut input, &mut output, "Continue? (Y/N) > ").unwrap();

    assert!(!answer);
}
