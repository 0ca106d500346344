use std::fmt::{Display, Formatter};

use bc_components::{tags, Digest, DigestProvider};
use dcbor::{
    CBORCodable, CBORDecodable, CBOREncodable, CBORError, CBORTagged, CBORTaggedCodable,
    CBORTaggedDecodable, CBORTaggedEncodable, Tag, CBOR,
};

#[derive(Debug, Clone)]
enum KnownValueName {
    Static(&'static str),
    Dynamic(String),
}

/// A value in a namespace of unsigned integers, used as compact predicates or
/// other well-known envelope subjects.
///
/// Known values let common predicates be represented as a single small
/// integer instead of a string, at the cost of needing a shared registry to
/// translate them back to a human-readable name.
#[derive(Clone, Debug)]
pub struct KnownValue {
    value: u64,
    assigned_name: Option<KnownValueName>,
}

impl KnownValue {
    /// Creates a known value with no assigned name.
    pub fn new(value: u64) -> Self {
        Self { value, assigned_name: None }
    }

    /// Creates a known value with a name computed at runtime.
    pub fn new_with_name<T: Into<u64>>(value: T, assigned_name: String) -> Self {
        Self { value: value.into(), assigned_name: Some(KnownValueName::Dynamic(assigned_name)) }
    }

    /// Creates a known value with a `'static` name, for use in constant declarations.
    pub const fn new_with_static_name(value: u64, name: &'static str) -> Self {
        Self { value, assigned_name: Some(KnownValueName::Static(name)) }
    }

    /// The raw integer value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The assigned name, if any. Falls back to `None` — callers that want a
    /// name no matter what should use [`KnownValue::name`].
    pub fn assigned_name(&self) -> Option<&str> {
        match &self.assigned_name {
            Some(KnownValueName::Static(name)) => Some(name),
            Some(KnownValueName::Dynamic(name)) => Some(name),
            None => None,
        }
    }

    /// The assigned name, or the decimal value if none was assigned.
    pub fn name(&self) -> String {
        self.assigned_name().map(str::to_string).unwrap_or_else(|| self.value.to_string())
    }
}

impl PartialEq for KnownValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for KnownValue {}

impl std::hash::Hash for KnownValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Display for KnownValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl CBORTagged for KnownValue {
    const CBOR_TAG: Tag = tags::KNOWN_VALUE;
}

impl CBOREncodable for KnownValue {
    fn cbor(&self) -> CBOR {
        self.tagged_cbor()
    }
}

impl CBORDecodable for KnownValue {
    fn from_cbor(cbor: &CBOR) -> Result<Box<Self>, CBORError> {
        Self::from_tagged_cbor(cbor)
    }
}

impl CBORCodable for KnownValue {}

impl CBORTaggedEncodable for KnownValue {
    fn untagged_cbor(&self) -> CBOR {
        self.value.cbor()
    }
}

impl CBORTaggedDecodable for KnownValue {
    fn from_untagged_cbor(cbor: &CBOR) -> Result<Box<Self>, CBORError> {
        let value = *u64::from_cbor(cbor)?;
        Ok(Box::new(Self::new(value)))
    }
}

impl CBORTaggedCodable for KnownValue {}

impl DigestProvider for KnownValue {
    fn digest(&self) -> Digest {
        Digest::from_image(&self.tagged_cbor().cbor_data())
    }
}

impl From<u64> for KnownValue {
    fn from(value: u64) -> Self {
        KnownValue::new(value)
    }
}

impl From<i32> for KnownValue {
    fn from(value: i32) -> Self {
        KnownValue::new(value as u64)
    }
}

impl From<usize> for KnownValue {
    fn from(value: usize) -> Self {
        KnownValue::new(value as u64)
    }
}
