use thiserror::Error;

/// Errors that can occur while constructing, decoding, or transforming envelopes.
#[derive(Debug, Error)]
pub enum Error {
    /// General decoding error: ill-formed CBOR, bad assertion ordering, or a
    /// structural invariant violation.
    #[error("invalid envelope format")]
    InvalidFormat,

    /// The envelope's subject is not a `wrapped` case.
    #[error("envelope is not wrapped")]
    NotWrapped,

    /// The envelope is not an `assertion` case.
    #[error("envelope is not an assertion")]
    NotAssertion,

    /// The envelope is not a `leaf` case.
    #[error("envelope is not a leaf")]
    NotLeaf,

    /// No assertion matches the requested predicate.
    #[error("no assertion exists with the given predicate")]
    NonexistentPredicate,

    /// More than one assertion matches the requested predicate.
    #[error("multiple assertions exist with the given predicate")]
    AmbiguousPredicate,

    /// The envelope's subject is already encrypted.
    #[error("subject is already encrypted")]
    AlreadyEncrypted,

    /// The envelope's subject is not encrypted.
    #[error("subject is not encrypted")]
    NotEncrypted,

    /// The whole envelope (rather than just its subject) is already encrypted.
    #[error("envelope is already encrypted")]
    SubjectAlreadyEncrypted,

    /// An elided envelope carries no data to encrypt.
    #[error("cannot encrypt an elided envelope")]
    CannotEncryptElided,

    /// The envelope is already compressed.
    #[error("envelope is already compressed")]
    AlreadyCompressed,

    /// The envelope is not compressed.
    #[error("envelope is not compressed")]
    NotCompressed,

    /// An elided envelope carries no data to compress.
    #[error("cannot compress an elided envelope")]
    AlreadyElided,

    /// An `encrypted`/`compressed` envelope was constructed without its
    /// required preserved digest.
    #[error("missing preserved digest")]
    MissingDigest,

    /// The digest recovered after decryption does not match the expected digest.
    #[error("invalid digest after decryption")]
    InvalidDigestAfterDecryption,

    /// The digest recovered after decompression does not match the expected digest.
    #[error("invalid digest after decompression")]
    InvalidDigestAfterDecompression,

    /// A digest comparison failed outside of a specific decrypt/decompress path.
    #[error("invalid digest")]
    InvalidDigest,

    /// None of the holder's keys opened any `hasRecipient` sealed message.
    #[error("not a valid recipient of this envelope")]
    NotAValidRecipient,

    /// Requested salt length is below the 8-byte minimum.
    #[error("salt must be at least 8 bytes")]
    SaltTooShort,

    /// Requested salt range has a minimum below the 8-byte floor, or is empty.
    #[error("invalid salt length range")]
    SaltRangeInvalid,

    /// The DEFLATE collaborator failed to compress the payload.
    #[error("compression failed")]
    CompressionFailure,

    /// The DEFLATE collaborator failed to decompress the payload.
    #[error("decompression failed")]
    DecompressionFailure,

    /// A proof could not be constructed because a requested target is absent
    /// from the envelope's digest tree.
    #[error("no proof possible for the requested target set")]
    NoProofPossible,

    /// Error surfaced by the CBOR collaborator.
    #[error("CBOR error: {0}")]
    Cbor(#[from] dcbor::Error),

    /// Error surfaced by the cryptography collaborator.
    #[error("crypto error: {0}")]
    Crypto(#[from] bc_crypto::Error),
}
