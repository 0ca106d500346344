use bc_components::{DigestProvider, SymmetricKey};

use super::test_data::*;
use crate::Envelope;

#[test]
fn encrypt_then_decrypt_subject_round_trips() {
    let key = SymmetricKey::new();
    let envelope = hello_envelope().encrypt_subject(&key).unwrap();
    assert!(envelope.is_encrypted());
    assert_eq!(envelope.digest(), hello_envelope().digest());

    let decrypted = envelope.decrypt_subject(&key).unwrap();
    assert_eq!(decrypted, hello_envelope());
}

#[test]
fn wrong_key_fails_to_decrypt() {
    let key = SymmetricKey::new();
    let wrong_key = SymmetricKey::new();
    let envelope = hello_envelope().encrypt_subject(&key).unwrap();
    assert!(envelope.decrypt_subject(&wrong_key).is_err());
}

#[test]
fn decrypting_a_non_encrypted_envelope_fails() {
    let key = SymmetricKey::new();
    assert!(hello_envelope().decrypt_subject(&key).is_err());
}

#[test]
fn encrypting_assertions_requires_wrapping_first() {
    let key = SymmetricKey::new();
    let envelope = alice_knows_bob_envelope();

    // Encrypting the subject alone leaves the assertion visible.
    let subject_only = envelope.encrypt_subject(&key).unwrap();
    assert_eq!(subject_only.assertions().len(), 1);

    // Wrapping first folds the assertions into the encrypted payload.
    let wrapped = envelope.wrap().encrypt_subject(&key).unwrap();
    assert!(wrapped.is_encrypted());
    let decrypted = wrapped.decrypt_subject(&key).unwrap().unwrap_envelope().unwrap();
    assert_eq!(decrypted, envelope);
}

#[test]
fn elide_set_with_action_can_encrypt_instead_of_elide() {
    use std::collections::HashSet;

    use crate::ObscureAction;

    let key = SymmetricKey::new();
    let envelope = alice_knows_bob_envelope();
    let bob = Envelope::new("Bob");
    let target: HashSet<_> = [bob.digest()].into_iter().collect();

    let obscured = envelope.elide_removing_set_with_action(&target, &ObscureAction::Encrypt(key.clone()));
    assert_eq!(obscured.digest(), envelope.digest());
    let encrypted_object = obscured.object_for_predicate("knows").unwrap();
    assert!(encrypted_object.is_encrypted());
}
