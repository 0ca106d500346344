use bc_components::DigestProvider;

use super::test_data::*;
use crate::Envelope;

#[test]
fn leaf_digest_is_stable() {
    let a = Envelope::new(42);
    let b = Envelope::new(42);
    assert_eq!(a.digest(), b.digest());

    let c = Envelope::new(43);
    assert_ne!(a.digest(), c.digest());
}

#[test]
fn wrapping_changes_digest_but_preserves_content() {
    let envelope = hello_envelope();
    let wrapped = envelope.wrap();
    assert_ne!(envelope.digest(), wrapped.digest());
    assert!(wrapped.is_wrapped());
    assert_eq!(wrapped.unwrap_envelope().unwrap().digest(), envelope.digest());
}

#[test]
fn double_wrapping_round_trips() {
    let envelope = hello_envelope();
    let double_wrapped = envelope.wrap().wrap();
    let unwrapped_once = double_wrapped.unwrap_envelope().unwrap();
    assert!(unwrapped_once.is_wrapped());
    let unwrapped_twice = unwrapped_once.unwrap_envelope().unwrap();
    assert_eq!(unwrapped_twice.digest(), envelope.digest());
}

#[test]
fn unwrapping_a_non_wrapped_envelope_fails() {
    let envelope = hello_envelope();
    assert!(envelope.unwrap_envelope().is_err());
}

#[test]
fn assertion_adds_a_node() {
    let envelope = alice_knows_bob_envelope();
    assert!(envelope.is_node());
    assert_eq!(envelope.subject(), Envelope::new("Alice"));
    assert_eq!(envelope.assertions().len(), 1);
}

#[test]
fn assertions_are_sorted_by_digest_not_insertion_order() {
    let forward = Envelope::new("Alice").add_assertion("knows", "Bob").add_assertion("knows", "Carol");
    let backward = Envelope::new("Alice").add_assertion("knows", "Carol").add_assertion("knows", "Bob");
    assert_eq!(forward.digest(), backward.digest());
}

#[test]
fn duplicate_assertion_is_idempotent() {
    let once = alice_knows_bob_envelope();
    let twice = once.add_assertion("knows", "Bob");
    assert_eq!(once.assertions().len(), twice.assertions().len());
    assert_eq!(once.digest(), twice.digest());
}

#[test]
fn removing_the_only_assertion_returns_bare_subject() {
    let envelope = alice_knows_bob_envelope();
    let knows_bob = knows_bob_assertion();
    let bare = envelope.remove_assertion(knows_bob);
    assert!(!bare.is_node());
    assert_eq!(bare, Envelope::new("Alice"));
}

#[test]
fn object_for_predicate_finds_the_right_assertion() {
    let envelope = alice_knows_bob_and_carol_envelope();
    let objects = envelope.objects_for_predicate("knows");
    assert_eq!(objects.len(), 2);
    assert!(objects.contains(&Envelope::new("Bob")));
    assert!(objects.contains(&Envelope::new("Carol")));
}

#[test]
fn ambiguous_predicate_is_an_error() {
    let envelope = alice_knows_bob_and_carol_envelope();
    assert!(envelope.object_for_predicate("knows").is_err());
}

#[test]
fn nonexistent_predicate_is_an_error() {
    let envelope = alice_knows_bob_envelope();
    assert!(envelope.object_for_predicate("likes").is_err());
}

#[test]
fn extract_subject_round_trips_primitive_types() {
    let envelope = Envelope::new(42i32);
    assert_eq!(envelope.extract_subject::<i32>().unwrap(), 42);

    let envelope = hello_envelope();
    assert_eq!(envelope.extract_subject::<String>().unwrap(), PLAINTEXT_HELLO);
}

#[test]
fn elements_count_covers_the_whole_tree() {
    // node itself + subject + assertion + predicate + object = 5.
    assert_eq!(alice_knows_bob_envelope().elements_count(), 5);
    // bare leaf has just itself.
    assert_eq!(hello_envelope().elements_count(), 1);
}
