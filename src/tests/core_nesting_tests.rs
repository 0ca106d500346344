use bc_components::DigestProvider;

use super::test_data::*;
use crate::Envelope;

#[test]
fn nested_assertion_object_is_reachable() {
    let bob = Envelope::new("Bob").add_assertion("age", 30);
    let envelope = Envelope::new("Alice").add_assertion("knows", bob.clone());
    let object = envelope.object_for_predicate("knows").unwrap();
    assert_eq!(object, bob);
    assert_eq!(object.object_for_predicate("age").unwrap(), Envelope::new(30));
}

#[test]
fn wrapping_preserves_assertions() {
    let envelope = alice_knows_bob_envelope();
    let wrapped = envelope.wrap();
    let unwrapped = wrapped.unwrap_envelope().unwrap();
    assert_eq!(unwrapped.assertions().len(), 1);
    assert_eq!(unwrapped, envelope);
}

#[test]
fn replace_subject_keeps_assertions() {
    let envelope = alice_knows_bob_envelope();
    let replaced = envelope.replace_subject(Envelope::new("Alicia"));
    assert_eq!(replaced.subject(), Envelope::new("Alicia"));
    assert_eq!(replaced.assertions().len(), 1);
}

#[test]
fn replace_assertion_swaps_one_assertion_for_another() {
    let envelope = alice_knows_bob_envelope();
    let knows_bob = knows_bob_assertion();
    let knows_carol = Envelope::new_assertion("knows", "Carol");
    let replaced = envelope.replace_assertion(knows_bob, knows_carol).unwrap();
    assert_eq!(replaced.objects_for_predicate("knows"), vec![Envelope::new("Carol")]);
}

#[test]
fn deeply_nested_envelope_preserves_digest_through_round_trip() {
    let inner = Envelope::new("inner").add_assertion("a", 1).add_assertion("b", 2);
    let middle = inner.wrap().add_assertion("wraps", "inner");
    let outer = Envelope::new("outer").add_assertion("contains", middle.clone());

    let restored = outer.check_encoding().unwrap();
    assert_eq!(restored.digest(), outer.digest());

    let restored_middle = restored.object_for_predicate("contains").unwrap();
    assert_eq!(restored_middle.digest(), middle.digest());
    let restored_inner = restored_middle.extract_subject::<Envelope>().unwrap();
    assert_eq!(restored_inner.digest(), inner.digest());
}

#[test]
fn add_assertion_envelopes_applies_several_at_once() {
    let assertions =
        vec![Envelope::new_assertion("knows", "Bob"), Envelope::new_assertion("knows", "Carol")];
    let envelope = Envelope::new("Alice").add_assertion_envelopes(&assertions).unwrap();
    assert_eq!(envelope.assertions().len(), 2);
}
