use bc_components::{Compressed, Digest, EncryptedMessage, Salt, SealedMessage};
use dcbor::{CBOREncodable, Date, CBOR};

use crate::{known_values::KnownValue, Assertion, Envelope};

/// A value that can be turned into an [`Envelope`].
///
/// Values that are already envelopes pass through unchanged (identity, not
/// wrapping). Everything else is promoted to a `leaf` envelope by encoding
/// itself as dCBOR first, except for the handful of cases (`KnownValue`,
/// `Assertion`, `EncryptedMessage`, `Compressed`) that already correspond to
/// one of the other seven envelope cases.
pub trait EnvelopeEncodable {
    fn into_envelope(self) -> Envelope;
}

impl EnvelopeEncodable for Envelope {
    fn into_envelope(self) -> Envelope {
        self
    }
}

impl EnvelopeEncodable for &Envelope {
    fn into_envelope(self) -> Envelope {
        self.clone()
    }
}

impl EnvelopeEncodable for KnownValue {
    fn into_envelope(self) -> Envelope {
        Envelope::new_with_known_value(self)
    }
}

impl EnvelopeEncodable for Assertion {
    fn into_envelope(self) -> Envelope {
        Envelope::new_with_assertion(self)
    }
}

impl EnvelopeEncodable for EncryptedMessage {
    fn into_envelope(self) -> Envelope {
        Envelope::new_with_encrypted(self).expect("encrypted message must carry a digest")
    }
}

impl EnvelopeEncodable for Compressed {
    fn into_envelope(self) -> Envelope {
        Envelope::new_with_compressed(self).expect("compressed message must carry a digest")
    }
}

impl EnvelopeEncodable for CBOR {
    fn into_envelope(self) -> Envelope {
        Envelope::new_leaf(self)
    }
}

impl EnvelopeEncodable for &str {
    fn into_envelope(self) -> Envelope {
        self.cbor().into_envelope()
    }
}

impl EnvelopeEncodable for String {
    fn into_envelope(self) -> Envelope {
        self.cbor().into_envelope()
    }
}

/// Implements [`EnvelopeEncodable`] for a type and its reference by routing
/// through its `CBOREncodable` implementation.
macro_rules! impl_envelope_encodable {
    ($type:ty) => {
        impl EnvelopeEncodable for $type {
            fn into_envelope(self) -> Envelope {
                CBOREncodable::cbor(&self).into_envelope()
            }
        }

        impl<'a> EnvelopeEncodable for &'a $type {
            fn into_envelope(self) -> Envelope {
                CBOREncodable::cbor(self).into_envelope()
            }
        }
    };
}

impl_envelope_encodable!(u8);
impl_envelope_encodable!(u16);
impl_envelope_encodable!(u32);
impl_envelope_encodable!(u64);
impl_envelope_encodable!(usize);
impl_envelope_encodable!(i8);
impl_envelope_encodable!(i16);
impl_envelope_encodable!(i32);
impl_envelope_encodable!(i64);
impl_envelope_encodable!(bool);

impl_envelope_encodable!(SealedMessage);
impl_envelope_encodable!(Digest);
impl_envelope_encodable!(Date);
impl_envelope_encodable!(Salt);
