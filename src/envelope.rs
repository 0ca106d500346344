use std::rc::Rc;

use bc_components::{Compressed, Digest, DigestProvider, EncryptedMessage};
use dcbor::{CBOREncodable, CBOR};

use crate::{Assertion, Error, KnownValue};

/// A flexible container for structured data.
///
/// An envelope is one of eight cases. Envelopes are immutable: every
/// "modifying" operation returns a new envelope. Because the recursive
/// fields are held behind `Rc`, cloning an envelope is always cheap —
/// it never deep-copies the tree.
#[derive(Clone, Debug)]
pub enum Envelope {
    /// A subject with one or more assertions about it.
    Node { subject: Rc<Envelope>, assertions: Rc<Vec<Envelope>>, digest: Digest },

    /// A leaf holding the canonical dCBOR encoding of some value.
    Leaf { cbor: CBOR, digest: Digest },

    /// An envelope wrapping another envelope.
    Wrapped { envelope: Rc<Envelope>, digest: Digest },

    /// A predicate drawn from the known-value namespace.
    KnownValue { value: KnownValue, digest: Digest },

    /// A predicate/object assertion about some other envelope's subject.
    Assertion(Assertion),

    /// An envelope whose content has been encrypted, digest preserved.
    Encrypted(EncryptedMessage),

    /// An envelope whose content has been compressed, digest preserved.
    Compressed(Compressed),

    /// A digest standing in for an envelope that has been elided.
    Elided(Digest),
}

impl Envelope {
    /// Wraps any `EnvelopeEncodable` value as an envelope.
    ///
    /// Values that are already envelopes pass through unchanged; primitive
    /// values (booleans, integers, strings, byte strings, CBOR) are promoted
    /// to a `leaf` by canonicalizing them to dCBOR first.
    pub fn new<T>(value: T) -> Self
    where
        T: crate::into_envelope::EnvelopeEncodable,
    {
        value.into_envelope()
    }

    /// Constructs a `leaf` envelope directly from a CBOR value.
    pub fn new_leaf(cbor: CBOR) -> Self {
        let digest = Digest::from_image(&cbor.cbor_data());
        Envelope::Leaf { cbor, digest }
    }

    /// Constructs a `wrapped` envelope around `self`.
    pub fn new_wrapped(envelope: Envelope) -> Self {
        let digest = Digest::from_digests(&[envelope.digest()]);
        Envelope::Wrapped { envelope: Rc::new(envelope), digest }
    }

    /// Constructs a `known-value` envelope.
    pub fn new_with_known_value(value: KnownValue) -> Self {
        let digest = value.digest();
        Envelope::KnownValue { value, digest }
    }

    /// Constructs an `assertion` envelope from an already-built `Assertion`.
    pub fn new_with_assertion(assertion: Assertion) -> Self {
        Envelope::Assertion(assertion)
    }

    /// Constructs an `assertion` envelope from a predicate/object pair.
    pub fn new_assertion<P, O>(predicate: P, object: O) -> Self
    where
        P: crate::into_envelope::EnvelopeEncodable,
        O: crate::into_envelope::EnvelopeEncodable,
    {
        Envelope::Assertion(Assertion::new(predicate, object))
    }

    /// Constructs an `elided` envelope carrying the given digest.
    pub fn new_elided(digest: Digest) -> Self {
        Envelope::Elided(digest)
    }

    /// Constructs an `encrypted` envelope.
    ///
    /// Fails with [`Error::MissingDigest`] if `message` was not built with a
    /// preserved digest.
    pub fn new_with_encrypted(message: EncryptedMessage) -> Result<Self, Error> {
        if message.digest_ref_opt().is_none() {
            return Err(Error::MissingDigest);
        }
        Ok(Envelope::Encrypted(message))
    }

    /// Constructs a `compressed` envelope.
    ///
    /// Fails with [`Error::MissingDigest`] if `compressed` was not built with
    /// a preserved digest.
    pub fn new_with_compressed(compressed: Compressed) -> Result<Self, Error> {
        if compressed.digest_ref_opt().is_none() {
            return Err(Error::MissingDigest);
        }
        Ok(Envelope::Compressed(compressed))
    }

    /// The only path that produces a `node`: sorts the assertions by
    /// ascending digest and computes the composite digest. Panics if
    /// `assertions` is empty — callers above this layer must never call it
    /// with an empty set (see [`Envelope::remove_assertion`], which instead
    /// returns the bare subject).
    pub(crate) fn node_with_sorted_assertions(subject: Envelope, assertions: Vec<Envelope>) -> Self {
        assert!(!assertions.is_empty(), "a node must have at least one assertion");
        let mut sorted = assertions;
        sorted.sort_by(|a, b| a.digest().data().cmp(b.digest().data()));
        let mut digests: Vec<Digest> = vec![subject.digest()];
        digests.extend(sorted.iter().map(|a| a.digest()));
        let digest = Digest::from_digests(&digests);
        Envelope::Node { subject: Rc::new(subject), assertions: Rc::new(sorted), digest }
    }

    /// Builds a `node`, validating that every assertion envelope is either a
    /// true assertion or an obscured case (invariant 4, §3.5).
    pub(crate) fn node_with_assertions(subject: Envelope, assertions: Vec<Envelope>) -> Result<Self, Error> {
        if !assertions.iter().all(|a| a.is_subject_assertion() || a.is_subject_obscured()) {
            return Err(Error::InvalidFormat);
        }
        Ok(Self::node_with_sorted_assertions(subject, assertions))
    }
}
