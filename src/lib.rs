#![doc(html_root_url = "https://docs.rs/gordian-envelope/0.1.0")]
#![warn(rust_2018_idioms)]

//! Gordian Envelope: a self-describing, privacy-preserving container for
//! structured data.
//!
//! An envelope pairs a *subject* with zero or more *assertions* about that
//! subject, recursively — assertions are themselves envelopes, and an
//! envelope's digest is computed from the Merkle-like tree of its parts.
//! Four digest-preserving transforms (elision, symmetric encryption,
//! public-key sealing to recipients, and compression) let a holder
//! selectively redact or protect parts of an envelope without invalidating
//! a verifier's trust in the parts that remain.
//!
//! See the [`prelude`] module for the typical set of imports.

mod envelope;
pub use envelope::Envelope;

mod assertion;
pub use assertion::Assertion;

mod assertions;
mod cbor;
mod digest;
mod queries;
mod wrap;

mod into_envelope;
pub use into_envelope::EnvelopeEncodable;

mod error;
pub use error::Error;

pub mod known_values;
pub use known_values::{KnownValue, KnownValuesStore};

mod elide;
pub use elide::ObscureAction;

#[cfg(feature = "encrypt")]
mod encrypt;

#[cfg(feature = "compress")]
mod compress;

#[cfg(feature = "salt")]
mod salt;

#[cfg(feature = "recipient")]
mod recipient;

#[cfg(feature = "proof")]
mod proof;

mod walk;
pub use walk::{EdgeType, Visitor};

pub mod format;
pub use format::{
    DigestDisplayFormat, EnvelopeSummary, FormatContext, FormatContextOpt, GLOBAL_FORMAT_CONTEXT,
    MermaidFormatOpts, MermaidOrientation, MermaidTheme, TreeFormatOpts,
};

pub mod prelude;

#[cfg(test)]
mod tests {
    mod test_data;

    mod core_tests;
    mod core_encoding_tests;
    mod core_nesting_tests;

    #[cfg(feature = "compress")]
    mod compression_tests;

    #[cfg(feature = "encrypt")]
    mod encrypted_tests;

    #[cfg(all(feature = "recipient", feature = "secp256k1"))]
    mod crypto_tests;

    mod obscuring_tests;

    #[cfg(feature = "salt")]
    mod non_correlation_tests;

    mod format_tests;
}
