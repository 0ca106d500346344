use bc_components::DigestProvider;

use super::test_data::*;
use crate::Envelope;

#[test]
fn add_salt_changes_the_digest() {
    let envelope = alice_knows_bob_envelope();
    let salted = envelope.add_salt();
    assert_ne!(salted.digest(), envelope.digest());
}

#[test]
fn two_salted_copies_of_the_same_envelope_do_not_correlate() {
    let a = hello_envelope().add_salt();
    let b = hello_envelope().add_salt();
    // Same plaintext, independently salted: digests differ.
    assert_ne!(a.digest(), b.digest());
}

#[test]
fn salt_does_not_change_the_subject_it_is_attached_to() {
    let envelope = alice_knows_bob_envelope();
    let salted = envelope.add_salt();
    assert_eq!(salted.subject(), envelope.subject());
    assert_eq!(salted.assertions().len(), envelope.assertions().len() + 1);
}

#[test]
fn add_salt_with_len_attaches_a_salt_assertion() {
    use crate::known_values;

    let envelope = hello_envelope().add_salt_with_len(16).unwrap();
    assert!(envelope.object_for_predicate(known_values::SALT).is_ok());
    assert_ne!(envelope.digest(), hello_envelope().digest());
}

#[test]
fn add_salt_with_len_rejects_too_short_a_request() {
    assert!(hello_envelope().add_salt_with_len(1).is_err());
}

#[test]
fn add_salt_in_range_attaches_a_salt_assertion() {
    use crate::known_values;

    let envelope = hello_envelope().add_salt_in_range(8..=16).unwrap();
    assert!(envelope.object_for_predicate(known_values::SALT).is_ok());
    assert_ne!(envelope.digest(), hello_envelope().digest());
}

#[test]
fn elided_salted_envelopes_do_not_correlate() {
    let a = alice_knows_bob_envelope().add_assertion_salted("knows", "Bob", true);
    let b = alice_knows_bob_envelope().add_assertion_salted("knows", "Bob", true);
    assert_ne!(a.digest(), b.digest());
}
