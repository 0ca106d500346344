use std::collections::HashSet;

use bc_components::DigestProvider;

use super::test_data::*;
use crate::Envelope;

#[test]
fn elide_replaces_content_with_its_digest() {
    let envelope = hello_envelope();
    let elided = envelope.elide();
    assert!(elided.is_elided());
    assert_eq!(elided.digest(), envelope.digest());
}

#[test]
fn eliding_an_elided_envelope_is_a_no_op() {
    let elided = hello_envelope().elide();
    assert_eq!(elided.elide(), elided);
}

#[test]
fn elide_revealing_target_reveals_only_the_named_digest() {
    let envelope = alice_knows_bob_and_carol_envelope();

    // Revealing only the root's own digest elides the subject and every
    // assertion beneath it, while preserving the node's digest and shape.
    let revealed = envelope.elide_revealing_target(&envelope);
    assert_eq!(revealed.digest(), envelope.digest());
    assert!(revealed.subject().is_elided());
    assert!(revealed.assertions().into_iter().all(|a| a.is_elided()));
}

#[test]
fn elide_removing_target_hides_just_that_target() {
    let envelope = alice_knows_bob_and_carol_envelope();
    let knows_bob = Envelope::new_assertion("knows", "Bob");

    let removed = envelope.elide_removing_target(&knows_bob);
    assert_eq!(removed.digest(), envelope.digest());
    let elided_count = removed.assertions().into_iter().filter(|a| a.is_elided()).count();
    assert_eq!(elided_count, 1);
}

#[test]
fn unelide_restores_content_matching_the_original_digest() {
    let envelope = hello_envelope();
    let elided = envelope.elide();
    let restored = elided.unelide(envelope.clone()).unwrap();
    assert_eq!(restored, envelope);
}

#[test]
fn unelide_rejects_content_with_a_different_digest() {
    let envelope = hello_envelope();
    let elided = envelope.elide();
    let wrong = Envelope::new("Goodbye.");
    assert!(elided.unelide(wrong).is_err());
}

#[test]
fn elide_revealing_set_with_an_empty_target_elides_the_whole_envelope() {
    let envelope = alice_knows_bob_envelope();
    let all_hidden = envelope.elide_revealing_set(&HashSet::new());
    assert_eq!(all_hidden.digest(), envelope.digest());
    assert!(all_hidden.is_elided());
}
