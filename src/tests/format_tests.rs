use super::test_data::*;
use crate::Envelope;

#[test]
fn notation_for_a_leaf_is_just_its_value() {
    assert_eq!(hello_envelope().format(), "\"Hello.\"");
}

#[test]
fn notation_for_a_node_shows_subject_and_assertions() {
    let notation = alice_knows_bob_envelope().format();
    assert!(notation.contains("\"Alice\""));
    assert!(notation.contains("\"knows\""));
    assert!(notation.contains("\"Bob\""));
}

#[test]
fn notation_for_an_elided_envelope_shows_elided() {
    assert_eq!(hello_envelope().elide().format(), "ELIDED");
}

#[test]
fn tree_format_shows_node_and_leaf_markers() {
    let tree = alice_knows_bob_envelope().tree_format();
    assert!(tree.contains("NODE"));
    assert!(tree.contains("\"Alice\""));
}

#[test]
fn tree_format_can_hide_node_lines() {
    use crate::TreeFormatOpts;

    let tree = alice_knows_bob_envelope().tree_format_opt(&TreeFormatOpts::default().hide_nodes(true));
    assert!(!tree.contains("NODE"));
}

#[test]
fn mermaid_format_emits_a_graph_header() {
    let mermaid = alice_knows_bob_envelope().mermaid_format();
    assert!(mermaid.starts_with("%%{"));
    assert!(mermaid.contains("graph LR"));
}

#[test]
fn diagnostic_notation_round_trips_through_dcbor_parsing() {
    let envelope = hello_envelope();
    let diagnostic = envelope.diagnostic();
    assert!(!diagnostic.is_empty());
}

#[test]
fn hex_dump_matches_the_tagged_cbor_length() {
    use dcbor::{CBOREncodable, CBORTaggedEncodable};

    let envelope = hello_envelope();
    let hex = envelope.hex();
    assert_eq!(hex.len(), envelope.tagged_cbor().cbor_data().len() * 2);
}

#[test]
fn short_id_is_stable_across_calls() {
    use crate::DigestDisplayFormat;

    let envelope = hello_envelope();
    assert_eq!(envelope.short_id(DigestDisplayFormat::Short), envelope.short_id(DigestDisplayFormat::Short));
    assert_ne!(envelope.short_id(DigestDisplayFormat::Short), Envelope::new("Goodbye.").short_id(DigestDisplayFormat::Short));
}
