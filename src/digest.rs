use std::cell::RefCell;

use bc_components::{Digest, DigestProvider};

use crate::{Envelope, EdgeType};

/// Support for calculating the digests associated with an [`Envelope`].
///
/// An envelope's digest can be used to compare two envelopes for semantic
/// equivalence: two envelopes with the same digest contain the same
/// information in their unencrypted, unelided, uncompressed forms, even if
/// their concrete representations differ.
impl DigestProvider for Envelope {
    fn digest(&self) -> Digest {
        match self {
            Envelope::Node { digest, .. } => digest.clone(),
            Envelope::Leaf { digest, .. } => digest.clone(),
            Envelope::Wrapped { digest, .. } => digest.clone(),
            Envelope::KnownValue { digest, .. } => digest.clone(),
            Envelope::Assertion(assertion) => assertion.digest(),
            Envelope::Encrypted(message) => message.digest(),
            Envelope::Compressed(compressed) => compressed.digest(),
            Envelope::Elided(digest) => digest.clone(),
        }
    }
}

impl Envelope {
    /// A digest over this envelope's full structure, including elision,
    /// encryption, and compression markers — not just its semantic content.
    ///
    /// Two envelopes with the same [`Envelope::digest`] but different
    /// obscuring (one elided, the other not) have different structural
    /// digests.
    pub fn structural_digest(&self) -> Digest {
        let image: RefCell<Vec<u8>> = RefCell::new(Vec::new());
        let visitor = |envelope: &Envelope, _: usize, _: EdgeType, _: ()| -> ((), bool) {
            match envelope {
                Envelope::Elided(_) => image.borrow_mut().push(1),
                Envelope::Encrypted(_) => image.borrow_mut().push(0),
                Envelope::Compressed(_) => image.borrow_mut().push(2),
                _ => {}
            }
            image.borrow_mut().extend_from_slice(envelope.digest().data());
            ((), false)
        };
        self.walk(false, (), &visitor);
        Digest::from_image(&image.into_inner())
    }

    /// `true` if `self` and `other` contain the same information in their
    /// unobscured form, even if their structure differs (e.g. one is
    /// partially elided and the other is not).
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.digest() == other.digest()
    }

    /// `true` if `self` and `other` are both semantically equivalent and
    /// structurally identical (same elision/encryption/compression pattern).
    pub fn is_identical_to(&self, other: &Self) -> bool {
        self.is_equivalent_to(other) && self.structural_digest() == other.structural_digest()
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        self.is_identical_to(other)
    }
}

impl Eq for Envelope {}
