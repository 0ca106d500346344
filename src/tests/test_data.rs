//! Shared fixtures for the unit test suite.

use crate::Envelope;

pub const PLAINTEXT_HELLO: &str = "Hello.";

pub fn hello_envelope() -> Envelope { Envelope::new(PLAINTEXT_HELLO) }

pub fn knows_bob_assertion() -> Envelope { Envelope::new_assertion("knows", "Bob") }

pub fn alice_knows_bob_envelope() -> Envelope {
    Envelope::new("Alice").add_assertion("knows", "Bob")
}

pub fn alice_knows_bob_and_carol_envelope() -> Envelope {
    Envelope::new("Alice").add_assertion("knows", "Bob").add_assertion("knows", "Carol")
}
