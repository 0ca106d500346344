use bc_components::{tags, Compressed, Digest, EncryptedMessage};
use bc_ur::{URCodable, URDecodable, UREncodable};
use dcbor::{
    CBORCodable, CBORDecodable, CBOREncodable, CBORError, CBORTagged, CBORTaggedCodable,
    CBORTaggedDecodable, CBORTaggedEncodable, Tag, CBOR,
};

use crate::{Assertion, Envelope};

/// IANA CBOR tag 24, "Encoded CBOR data item" (RFC 8949 §3.4.5.1). Earlier
/// Gordian Envelope encoders used this tag for the leaf case; we still
/// decode it for compatibility even though we no longer emit it.
const ENCODED_CBOR_TAG_VALUE: u64 = 24;

/// CBOR encoding and decoding for [`Envelope`].
///
/// Every envelope is tagged with the `envelope` tag. Within that tag, each of
/// the eight cases carries a distinct inner CBOR signature:
///
/// * `node` is an array of the subject followed by one or more assertions,
///   each individually re-tagged as an envelope.
/// * `leaf` is tagged with the dedicated leaf tag; decoding also accepts the
///   IANA tag #6.24 ("encoded CBOR data item") for backward compatibility
///   with encoders that predate the dedicated tag.
/// * `wrapped` is tagged with the `wrapped-envelope` tag, wrapping an
///   untagged envelope.
/// * `knownValue`, `assertion`, `encrypted`, `compressed` each delegate to
///   their own tagged representation.
/// * `elided` is a bare digest.
impl CBORTagged for Envelope {
    const CBOR_TAG: Tag = tags::ENVELOPE;
}

impl CBOREncodable for Envelope {
    fn cbor(&self) -> CBOR {
        self.tagged_cbor()
    }
}

impl CBORDecodable for Envelope {
    fn from_cbor(cbor: &CBOR) -> Result<Box<Self>, CBORError> {
        Self::from_tagged_cbor(cbor)
    }
}

impl CBORCodable for Envelope {}

impl CBORTaggedEncodable for Envelope {
    fn untagged_cbor(&self) -> CBOR {
        match self {
            Envelope::Node { subject, assertions, .. } => {
                let mut result = vec![subject.tagged_cbor()];
                result.extend(assertions.iter().map(|a| a.tagged_cbor()));
                CBOR::Array(result)
            }
            Envelope::Leaf { cbor, .. } => CBOR::Tagged(tags::LEAF, Box::new(cbor.clone())),
            Envelope::Wrapped { envelope, .. } => {
                CBOR::Tagged(tags::WRAPPED_ENVELOPE, Box::new(envelope.untagged_cbor()))
            }
            Envelope::KnownValue { value, .. } => value.tagged_cbor(),
            Envelope::Assertion(assertion) => assertion.tagged_cbor(),
            Envelope::Encrypted(message) => message.tagged_cbor(),
            Envelope::Compressed(compressed) => compressed.tagged_cbor(),
            Envelope::Elided(digest) => digest.tagged_cbor(),
        }
    }
}

impl CBORTaggedDecodable for Envelope {
    fn from_untagged_cbor(cbor: &CBOR) -> Result<Box<Self>, CBORError> {
        match cbor {
            CBOR::Tagged(tag, item) => {
                if *tag == tags::LEAF || *tag == Tag::with_value(ENCODED_CBOR_TAG_VALUE) {
                    return Ok(Box::new(Envelope::new_leaf((**item).clone())));
                }
                if *tag == tags::KNOWN_VALUE {
                    let value = *crate::known_values::KnownValue::from_untagged_cbor(item)?;
                    return Ok(Box::new(Envelope::new_with_known_value(value)));
                }
                if *tag == tags::WRAPPED_ENVELOPE {
                    let inner = *Envelope::from_untagged_cbor(item)?;
                    return Ok(Box::new(Envelope::new_wrapped(inner)));
                }
                if *tag == tags::ASSERTION {
                    let assertion = *Assertion::from_untagged_cbor(item)?;
                    return Ok(Box::new(Envelope::new_with_assertion(assertion)));
                }
                if *tag == <EncryptedMessage as CBORTagged>::CBOR_TAG {
                    let message = *EncryptedMessage::from_untagged_cbor(item)?;
                    return Envelope::new_with_encrypted(message)
                        .map(Box::new)
                        .map_err(|_| CBORError::InvalidFormat);
                }
                if *tag == <Compressed as CBORTagged>::CBOR_TAG {
                    let compressed = *Compressed::from_untagged_cbor(item)?;
                    return Envelope::new_with_compressed(compressed)
                        .map(Box::new)
                        .map_err(|_| CBORError::InvalidFormat);
                }
                if *tag == <Digest as CBORTagged>::CBOR_TAG {
                    let digest = *Digest::from_untagged_cbor(item)?;
                    return Ok(Box::new(Envelope::new_elided(digest)));
                }
                Err(CBORError::InvalidFormat)
            }
            CBOR::Array(elements) => {
                if elements.len() < 2 {
                    return Err(CBORError::InvalidFormat);
                }
                let subject = *Envelope::from_tagged_cbor(&elements[0])?;
                let mut assertions = Vec::with_capacity(elements.len() - 1);
                for element in &elements[1..] {
                    assertions.push(*Envelope::from_tagged_cbor(element)?);
                }
                Envelope::node_with_assertions(subject, assertions)
                    .map(Box::new)
                    .map_err(|_| CBORError::InvalidFormat)
            }
            _ => Err(CBORError::InvalidFormat),
        }
    }
}

impl CBORTaggedCodable for Envelope {}

impl UREncodable for Envelope {}

impl URDecodable for Envelope {}

impl URCodable for Envelope {}

impl Envelope {
    /// Round-trips `self` through tagged CBOR and confirms the result has
    /// the same digest. Used by the test suite; not needed in production
    /// code.
    #[doc(hidden)]
    pub fn check_encoding(&self) -> Result<Envelope, crate::Error> {
        use bc_components::DigestProvider;
        let cbor = self.tagged_cbor();
        let restored = *Envelope::from_tagged_cbor(&cbor).map_err(crate::Error::from)?;
        if self.digest() != restored.digest() {
            return Err(crate::Error::InvalidFormat);
        }
        Ok(restored)
    }
}
