use bc_components::DigestProvider;

use super::test_data::*;
use crate::Envelope;

#[test]
fn compress_then_uncompress_round_trips() {
    let envelope = alice_knows_bob_and_carol_envelope();
    let compressed = envelope.compress().unwrap();
    assert!(compressed.is_compressed());
    assert_eq!(compressed.digest(), envelope.digest());

    let uncompressed = compressed.uncompress().unwrap();
    assert_eq!(uncompressed.digest(), envelope.digest());
    assert_eq!(uncompressed, envelope);
}

#[test]
fn compressing_an_already_compressed_envelope_is_a_no_op() {
    let envelope = hello_envelope();
    let once = envelope.compress().unwrap();
    let twice = once.compress().unwrap();
    assert_eq!(once.digest(), twice.digest());
}

#[test]
fn uncompressing_a_non_compressed_envelope_fails() {
    let envelope = hello_envelope();
    assert!(envelope.uncompress().is_err());
}

#[test]
fn compressing_an_elided_envelope_fails() {
    let envelope = hello_envelope().elide();
    assert!(envelope.compress().is_err());
}

#[test]
fn compress_subject_leaves_assertions_untouched() {
    let envelope = alice_knows_bob_envelope();
    let compressed = envelope.compress_subject().unwrap();
    assert!(compressed.subject().is_compressed());
    assert_eq!(compressed.assertions().len(), 1);
    assert_eq!(compressed.digest(), envelope.digest());

    let restored = compressed.uncompress_subject().unwrap();
    assert_eq!(restored, envelope);
}
