use bc_components::{DigestProvider, PrivateKeyBase, SymmetricKey};

use super::test_data::*;
use crate::Envelope;

#[test]
fn single_recipient_round_trips() {
    let bob_keys = PrivateKeyBase::new();

    let envelope = hello_envelope().encrypt_subject_to_recipient(&bob_keys.public_keys()).unwrap();
    assert!(envelope.is_encrypted());
    assert_eq!(envelope.recipients().unwrap().len(), 1);

    let decrypted = envelope.decrypt_subject_to_recipient(&bob_keys).unwrap();
    assert_eq!(decrypted, hello_envelope());
}

#[test]
fn multi_recipient_each_can_decrypt_independently() {
    let bob_keys = PrivateKeyBase::new();
    let carol_keys = PrivateKeyBase::new();

    let envelope = hello_envelope()
        .encrypt_subject_to_recipients(&[&bob_keys.public_keys(), &carol_keys.public_keys()])
        .unwrap();
    assert_eq!(envelope.recipients().unwrap().len(), 2);

    assert_eq!(envelope.decrypt_subject_to_recipient(&bob_keys).unwrap(), hello_envelope());
    assert_eq!(envelope.decrypt_subject_to_recipient(&carol_keys).unwrap(), hello_envelope());
}

#[test]
fn non_recipient_cannot_decrypt() {
    let bob_keys = PrivateKeyBase::new();
    let alice_keys = PrivateKeyBase::new();

    let envelope = hello_envelope().encrypt_subject_to_recipient(&bob_keys.public_keys()).unwrap();
    assert!(envelope.decrypt_subject_to_recipient(&alice_keys).is_err());
}

#[test]
fn encrypt_to_recipient_folds_assertions_into_the_payload() {
    let bob_keys = PrivateKeyBase::new();
    let envelope = alice_knows_bob_envelope();

    let encrypted = envelope.encrypt_to_recipient(&bob_keys.public_keys());
    assert!(encrypted.is_encrypted());

    let decrypted = encrypted.decrypt_to_recipient(&bob_keys).unwrap();
    assert_eq!(decrypted, envelope);
}

#[test]
fn add_recipient_with_a_pre_generated_content_key() {
    let bob_keys = PrivateKeyBase::new();
    let content_key = SymmetricKey::new();

    let envelope = hello_envelope()
        .encrypt_subject(&content_key)
        .unwrap()
        .add_recipient(&bob_keys.public_keys(), &content_key);

    assert_eq!(envelope.decrypt_subject_to_recipient(&bob_keys).unwrap(), hello_envelope());
}
