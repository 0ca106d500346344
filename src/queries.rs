use std::any::{Any, TypeId};

use bc_components::{Compressed, Digest, DigestProvider, EncryptedMessage};
use dcbor::{CBORDecodable, CBOR};

use crate::{into_envelope::EnvelopeEncodable, Assertion, Envelope, Error, KnownValue};

impl Envelope {
    /// The envelope's subject.
    ///
    /// For a `node`, this is the subject without its assertions. For any
    /// other case, the envelope is itself the subject.
    pub fn subject(&self) -> Envelope {
        match self {
            Self::Node { subject, .. } => (**subject).clone(),
            _ => self.clone(),
        }
    }

    /// The envelope's assertions, empty if the envelope is not a `node`.
    pub fn assertions(&self) -> Vec<Envelope> {
        match self {
            Self::Node { assertions, .. } => (**assertions).clone(),
            _ => vec![],
        }
    }

    /// `true` if the envelope has at least one assertion.
    pub fn has_assertions(&self) -> bool {
        match self {
            Self::Node { assertions, .. } => !assertions.is_empty(),
            _ => false,
        }
    }

    /// `self`, if it is itself an `assertion` envelope.
    pub fn assertion(&self) -> Option<Envelope> {
        match self {
            Self::Assertion(_) => Some(self.clone()),
            _ => None,
        }
    }

    /// The envelope's predicate, or `None` if it is not an `assertion`.
    pub fn predicate(&self) -> Option<Envelope> {
        match self {
            Self::Assertion(assertion) => Some(assertion.predicate().clone()),
            _ => None,
        }
    }

    /// The envelope's object, or `None` if it is not an `assertion`.
    pub fn object(&self) -> Option<Envelope> {
        match self {
            Self::Assertion(assertion) => Some(assertion.object().clone()),
            _ => None,
        }
    }

    /// The envelope's leaf CBOR value, or `None` if it is not a `leaf`.
    pub fn leaf(&self) -> Option<&CBOR> {
        match self {
            Self::Leaf { cbor, .. } => Some(cbor),
            _ => None,
        }
    }

    /// The envelope's known value, or `None` if it is not a `knownValue`.
    pub fn known_value(&self) -> Option<&KnownValue> {
        match self {
            Self::KnownValue { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl Envelope {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node { .. })
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped { .. })
    }

    pub fn is_known_value(&self) -> bool {
        matches!(self, Self::KnownValue { .. })
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Encrypted(_))
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::Compressed(_))
    }

    pub fn is_elided(&self) -> bool {
        matches!(self, Self::Elided(_))
    }
}

impl Envelope {
    /// `true` if the envelope's subject, possibly nested through other
    /// `node`s, is itself an `assertion`.
    pub fn is_subject_assertion(&self) -> bool {
        match self {
            Self::Assertion(_) => true,
            Self::Node { subject, .. } => subject.is_subject_assertion(),
            _ => false,
        }
    }

    pub fn is_subject_encrypted(&self) -> bool {
        match self {
            Self::Encrypted(_) => true,
            Self::Node { subject, .. } => subject.is_subject_encrypted(),
            _ => false,
        }
    }

    pub fn is_subject_compressed(&self) -> bool {
        match self {
            Self::Compressed(_) => true,
            Self::Node { subject, .. } => subject.is_subject_compressed(),
            _ => false,
        }
    }

    pub fn is_subject_elided(&self) -> bool {
        match self {
            Self::Elided(_) => true,
            Self::Node { subject, .. } => subject.is_subject_elided(),
            _ => false,
        }
    }

    /// `true` if the envelope's subject is encrypted, compressed, or elided.
    ///
    /// Obscured assertion envelopes may still appear among an envelope's
    /// assertions — only the subject's obscurity is tested here.
    pub fn is_subject_obscured(&self) -> bool {
        self.is_subject_encrypted() || self.is_subject_compressed() || self.is_subject_elided()
    }
}

impl Envelope {
    /// `true` if the envelope has child elements (`node`, `wrapped`,
    /// `assertion`); `false` if it is a leaf of the structural tree.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Node { .. } | Self::Wrapped { .. } | Self::Assertion(_))
    }

    /// `true` if the envelope itself is encrypted, compressed, or elided.
    pub fn is_obscured(&self) -> bool {
        matches!(self, Self::Encrypted(_) | Self::Compressed(_) | Self::Elided(_))
    }
}

impl Envelope {
    /// Decodes the envelope's subject as the given type.
    ///
    /// Fails with [`Error::InvalidFormat`] if the subject's runtime type
    /// doesn't match `T`, or if its CBOR can't be parsed as `T`.
    pub fn extract_subject<T>(&self) -> Result<T, Error>
    where
        T: Any + CBORDecodable + Clone,
    {
        fn downcast_to<T, U>(value: &U) -> Result<T, Error>
        where
            T: Any,
            U: Any + Clone,
        {
            if TypeId::of::<T>() == TypeId::of::<U>() {
                let boxed: Box<dyn Any> = Box::new(value.clone());
                Ok(*boxed.downcast::<T>().unwrap())
            } else {
                Err(Error::InvalidFormat)
            }
        }

        match self {
            Self::Wrapped { envelope, .. } => downcast_to::<T, Self>(envelope),
            Self::Node { subject, .. } => subject.extract_subject::<T>(),
            Self::Leaf { cbor, .. } => Ok(*T::from_cbor(cbor)?),
            Self::KnownValue { value, .. } => downcast_to::<T, KnownValue>(value),
            Self::Assertion(assertion) => downcast_to::<T, Assertion>(assertion),
            Self::Encrypted(message) => downcast_to::<T, EncryptedMessage>(message),
            Self::Compressed(compressed) => downcast_to::<T, Compressed>(compressed),
            Self::Elided(digest) => downcast_to::<T, Digest>(digest),
        }
    }
}

impl Envelope {
    /// All assertions whose predicate's digest matches `predicate`'s.
    pub fn assertions_with_predicate<P>(&self, predicate: P) -> Vec<Envelope>
    where
        P: EnvelopeEncodable,
    {
        let predicate = Envelope::new(predicate);
        self.assertions()
            .into_iter()
            .filter(|assertion| {
                assertion.predicate().map(|p| p.digest() == predicate.digest()).unwrap_or(false)
            })
            .collect()
    }

    /// The single assertion matching `predicate`.
    ///
    /// Fails with [`Error::NonexistentPredicate`] if none match, or
    /// [`Error::AmbiguousPredicate`] if more than one does.
    pub fn assertion_with_predicate<P>(&self, predicate: P) -> Result<Envelope, Error>
    where
        P: EnvelopeEncodable,
    {
        let matches = self.assertions_with_predicate(predicate);
        match matches.len() {
            0 => Err(Error::NonexistentPredicate),
            1 => Ok(matches.into_iter().next().unwrap()),
            _ => Err(Error::AmbiguousPredicate),
        }
    }

    /// The object of the single assertion matching `predicate`.
    pub fn object_for_predicate<P>(&self, predicate: P) -> Result<Envelope, Error>
    where
        P: EnvelopeEncodable,
    {
        Ok(self.assertion_with_predicate(predicate)?.object().unwrap())
    }

    /// The object of the single assertion matching `predicate`, decoded as `T`.
    pub fn extract_object_for_predicate<T, P>(&self, predicate: P) -> Result<T, Error>
    where
        T: Any + CBORDecodable + Clone,
        P: EnvelopeEncodable,
    {
        self.assertion_with_predicate(predicate)?.object().unwrap().extract_subject()
    }

    /// The objects of every assertion matching `predicate`.
    pub fn objects_for_predicate<P>(&self, predicate: P) -> Vec<Envelope>
    where
        P: EnvelopeEncodable,
    {
        self.assertions_with_predicate(predicate)
            .into_iter()
            .map(|a| a.object().unwrap())
            .collect()
    }

    /// The objects of every assertion matching `predicate`, decoded as `T`.
    pub fn extract_objects_for_predicate<T, P>(&self, predicate: P) -> Result<Vec<T>, Error>
    where
        T: Any + CBORDecodable + Clone,
        P: EnvelopeEncodable,
    {
        self.assertions_with_predicate(predicate)
            .into_iter()
            .map(|a| a.object().unwrap().extract_subject())
            .collect()
    }
}

impl Envelope {
    /// The number of structural elements in the envelope, including itself.
    pub fn elements_count(&self) -> usize {
        let mut result = 0;

        fn count(envelope: &Envelope, result: &mut usize) {
            *result += 1;
            match envelope {
                Envelope::Node { subject, assertions, .. } => {
                    count(subject, result);
                    for assertion in assertions.iter() {
                        count(assertion, result);
                    }
                }
                Envelope::Assertion(assertion) => {
                    count(assertion.predicate(), result);
                    count(assertion.object(), result);
                }
                Envelope::Wrapped { envelope, .. } => {
                    count(envelope, result);
                }
                _ => {}
            }
        }

        count(self, &mut result);
        result
    }
}
