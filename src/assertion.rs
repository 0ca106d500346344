use std::rc::Rc;

use bc_components::{tags, Digest, DigestProvider};
use dcbor::{
    CBOR, CBORCodable, CBORDecodable, CBOREncodable, CBORError, CBORTagged,
    CBORTaggedCodable, CBORTaggedDecodable, CBORTaggedEncodable, Map, Tag,
};

use crate::{envelope::Envelope, into_envelope::EnvelopeEncodable};

/// An ordered `predicate`/`object` pair, each of which is itself an
/// [`Envelope`].
///
/// Assertions are immutable and publicly opaque: construct them with
/// [`Assertion::new`] and manipulate the envelope that carries them through
/// the assertion algebra on `Envelope` instead.
#[derive(Clone, Debug)]
pub struct Assertion {
    predicate: Rc<Envelope>,
    object: Rc<Envelope>,
    digest: Digest,
}

impl Assertion {
    /// Creates an assertion and computes its digest from the predicate's and
    /// object's digests.
    pub fn new<P, O>(predicate: P, object: O) -> Self
    where
        P: EnvelopeEncodable,
        O: EnvelopeEncodable,
    {
        let predicate = predicate.into_envelope();
        let object = object.into_envelope();
        let digest = Digest::from_digests(&[predicate.digest(), object.digest()]);
        Self { predicate: Rc::new(predicate), object: Rc::new(object), digest }
    }

    /// The predicate of the assertion.
    pub fn predicate(&self) -> &Envelope {
        &self.predicate
    }

    /// The object of the assertion.
    pub fn object(&self) -> &Envelope {
        &self.object
    }
}

impl PartialEq for Assertion {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
    }
}

impl DigestProvider for Assertion {
    fn digest(&self) -> Digest {
        self.digest.clone()
    }
}

impl CBORTagged for Assertion {
    const CBOR_TAG: Tag = tags::ASSERTION;
}

impl CBOREncodable for Assertion {
    fn cbor(&self) -> CBOR {
        self.tagged_cbor()
    }
}

impl CBORDecodable for Assertion {
    fn from_cbor(cbor: &CBOR) -> Result<Box<Self>, CBORError> {
        Self::from_tagged_cbor(cbor)
    }
}

impl CBORCodable for Assertion {}

impl CBORTaggedEncodable for Assertion {
    fn untagged_cbor(&self) -> CBOR {
        let mut map = Map::new();
        map.insert(self.predicate.cbor(), self.object.cbor());
        map.cbor()
    }
}

impl CBORTaggedDecodable for Assertion {
    fn from_untagged_cbor(cbor: &CBOR) -> Result<Box<Self>, CBORError> {
        match cbor {
            CBOR::Map(map) => {
                if map.len() != 1 {
                    return Err(CBORError::InvalidFormat);
                }
                let (predicate, object) = map.iter().next().unwrap();
                let predicate = *Envelope::from_cbor(predicate)?;
                let object = *Envelope::from_cbor(object)?;
                Ok(Box::new(Self::new(predicate, object)))
            }
            _ => Err(CBORError::InvalidFormat),
        }
    }
}

impl CBORTaggedCodable for Assertion {}
