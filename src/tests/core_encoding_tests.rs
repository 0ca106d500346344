use bc_components::DigestProvider;
use dcbor::{CBORDecodable, CBOREncodable, CBORTaggedDecodable, CBORTaggedEncodable, CBOR};

use super::test_data::*;
use crate::Envelope;

#[test]
fn leaf_round_trips_through_cbor() {
    let envelope = hello_envelope();
    let restored = envelope.check_encoding().unwrap();
    assert_eq!(restored.digest(), envelope.digest());
}

#[test]
fn node_round_trips_through_cbor() {
    let envelope = alice_knows_bob_and_carol_envelope();
    let restored = envelope.check_encoding().unwrap();
    assert_eq!(restored.digest(), envelope.digest());
    assert_eq!(restored.assertions().len(), 2);
}

#[test]
fn wrapped_round_trips_through_cbor() {
    let envelope = hello_envelope().wrap();
    let restored = envelope.check_encoding().unwrap();
    assert_eq!(restored.digest(), envelope.digest());
    assert!(restored.is_wrapped());
}

#[test]
fn leaf_is_tagged_with_the_dedicated_leaf_tag() {
    let envelope = hello_envelope();
    let cbor = envelope.untagged_cbor();
    match cbor {
        CBOR::Tagged(tag, _) => assert_eq!(tag, bc_components::tags::LEAF),
        _ => panic!("expected a tagged leaf"),
    }
}

#[test]
fn decoder_accepts_legacy_tag_24_for_leaves() {
    let envelope = hello_envelope();
    let CBOR::Tagged(_, inner) = envelope.untagged_cbor() else {
        panic!("expected a tagged leaf");
    };
    let legacy = CBOR::Tagged(dcbor::Tag::with_value(24), inner);
    let decoded = *Envelope::from_untagged_cbor(&legacy).unwrap();
    assert!(decoded.is_leaf());
    assert_eq!(decoded.digest(), envelope.digest());
}

#[test]
fn assertion_is_encoded_as_a_single_entry_map() {
    let assertion = knows_bob_assertion();
    let CBOR::Tagged(_, assertion_body) = assertion.untagged_cbor() else {
        panic!("expected a tagged assertion");
    };
    match *assertion_body {
        CBOR::Map(ref map) => assert_eq!(map.len(), 1),
        _ => panic!("expected the assertion's untagged form to be a single-entry map"),
    }
}

#[test]
fn elided_envelope_round_trips_as_a_bare_digest() {
    let envelope = hello_envelope();
    let elided = envelope.elide();
    let restored = elided.check_encoding().unwrap();
    assert_eq!(restored.digest(), envelope.digest());
    assert!(restored.is_elided());
}

#[test]
fn malformed_cbor_fails_to_decode() {
    let cbor = CBOR::Tagged(bc_components::tags::ENVELOPE, Box::new(42i32.cbor()));
    assert!(Envelope::from_cbor(&cbor).is_err());
}
