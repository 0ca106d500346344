use std::collections::HashSet;

use anyhow::{bail, Result};
use bc_components::{Digest, DigestProvider};
#[cfg(feature = "encrypt")]
use bc_components::{Nonce, SymmetricKey};
#[cfg(feature = "encrypt")]
use dcbor::{CBOREncodable, CBORTaggedEncodable};

use crate::{Assertion, Envelope, Error, into_envelope::EnvelopeEncodable};

/// An action to take on an envelope element targeted by one of the
/// `elide_*`/`obscure` methods below.
pub enum ObscureAction {
    /// Replace the target with just its digest.
    Elide,

    /// Replace the target with its AEAD encryption under `key`, digest preserved.
    #[cfg(feature = "encrypt")]
    Encrypt(SymmetricKey),

    /// Replace the target with its DEFLATE compression, digest preserved.
    #[cfg(feature = "compress")]
    Compress,
}

/// Support for eliding, encrypting, and compressing envelope elements while
/// preserving the envelope's digest tree.
impl Envelope {
    /// The elided form of this envelope: just its digest. A no-op if already elided.
    pub fn elide(&self) -> Self {
        match self {
            Envelope::Elided(_) => self.clone(),
            _ => Self::new_elided(self.digest()),
        }
    }

    /// Obscures every element whose digest is in `target`.
    pub fn elide_removing_set_with_action(&self, target: &HashSet<Digest>, action: &ObscureAction) -> Self {
        self.elide_set_with_action(target, false, action)
    }

    /// Elides every element whose digest is in `target`.
    pub fn elide_removing_set(&self, target: &HashSet<Digest>) -> Self {
        self.elide_set(target, false)
    }

    /// Obscures the single element matching `target`'s digest.
    pub fn elide_removing_target_with_action(&self, target: &dyn DigestProvider, action: &ObscureAction) -> Self {
        self.elide_target_with_action(target, false, action)
    }

    /// Elides the single element matching `target`'s digest.
    pub fn elide_removing_target(&self, target: &dyn DigestProvider) -> Self {
        self.elide_target(target, false)
    }

    /// Obscures every element *not* in `target`, revealing only `target`.
    pub fn elide_revealing_set_with_action(&self, target: &HashSet<Digest>, action: &ObscureAction) -> Self {
        self.elide_set_with_action(target, true, action)
    }

    /// Elides every element *not* in `target`, revealing only `target`.
    pub fn elide_revealing_set(&self, target: &HashSet<Digest>) -> Self {
        self.elide_set(target, true)
    }

    /// Obscures every element except the single element matching `target`.
    pub fn elide_revealing_target_with_action(&self, target: &dyn DigestProvider, action: &ObscureAction) -> Self {
        self.elide_target_with_action(target, true, action)
    }

    /// Elides every element except the single element matching `target`.
    pub fn elide_revealing_target(&self, target: &dyn DigestProvider) -> Self {
        self.elide_target(target, true)
    }

    // target-matches  is_revealing  obscure?
    // --------------------------------------
    //     false          false      false
    //     false          true       true
    //     true           false      true
    //     true           true       false
    //
    // i.e. obscure exactly when `target.contains(digest) != is_revealing`.

    /// The general elision/obscuring walk: recurses into every structural
    /// element, obscuring it with `action` whenever its presence in `target`
    /// disagrees with `is_revealing` (see truth table above).
    pub fn elide_set_with_action(&self, target: &HashSet<Digest>, is_revealing: bool, action: &ObscureAction) -> Self {
        let self_digest = self.digest();
        if target.contains(&self_digest) != is_revealing {
            match action {
                ObscureAction::Elide => self.elide(),
                #[cfg(feature = "encrypt")]
                ObscureAction::Encrypt(key) => {
                    let message = key.encrypt_with_digest(
                        self.tagged_cbor().cbor_data(),
                        self_digest,
                        None::<Nonce>,
                    );
                    Self::new_with_encrypted(message).unwrap()
                }
                #[cfg(feature = "compress")]
                ObscureAction::Compress => self.compress().unwrap(),
            }
        } else if let Envelope::Assertion(assertion) = self {
            let predicate = assertion.predicate().elide_set_with_action(target, is_revealing, action);
            let object = assertion.object().elide_set_with_action(target, is_revealing, action);
            let elided_assertion = Assertion::new(predicate, object);
            debug_assert!(elided_assertion == *assertion);
            Self::new_with_assertion(elided_assertion)
        } else if let Envelope::Node { subject, assertions, .. } = self {
            let elided_subject = subject.elide_set_with_action(target, is_revealing, action);
            debug_assert_eq!(elided_subject.digest(), subject.digest());
            let elided_assertions: Vec<Envelope> = assertions
                .iter()
                .map(|assertion| {
                    let elided = assertion.elide_set_with_action(target, is_revealing, action);
                    debug_assert_eq!(elided.digest(), assertion.digest());
                    elided
                })
                .collect();
            Self::node_with_sorted_assertions(elided_subject, elided_assertions)
        } else if let Envelope::Wrapped { envelope, .. } = self {
            let elided_envelope = envelope.elide_set_with_action(target, is_revealing, action);
            debug_assert_eq!(elided_envelope.digest(), envelope.digest());
            Self::new_wrapped(elided_envelope)
        } else {
            self.clone()
        }
    }

    /// Plain elision variant of [`Envelope::elide_set_with_action`].
    pub fn elide_set(&self, target: &HashSet<Digest>, is_revealing: bool) -> Self {
        self.elide_set_with_action(target, is_revealing, &ObscureAction::Elide)
    }

    /// Array-of-providers variant of [`Envelope::elide_set_with_action`].
    pub fn elide_array_with_action(
        &self,
        target: &[&dyn DigestProvider],
        is_revealing: bool,
        action: &ObscureAction,
    ) -> Self {
        self.elide_set_with_action(
            &target.iter().map(|provider| provider.digest()).collect(),
            is_revealing,
            action,
        )
    }

    /// Single-target variant of [`Envelope::elide_set_with_action`].
    pub fn elide_target_with_action(
        &self,
        target: &dyn DigestProvider,
        is_revealing: bool,
        action: &ObscureAction,
    ) -> Self {
        self.elide_array_with_action(&[target], is_revealing, action)
    }

    /// Single-target variant of [`Envelope::elide_set`].
    pub fn elide_target(&self, target: &dyn DigestProvider, is_revealing: bool) -> Self {
        self.elide_target_with_action(target, is_revealing, &ObscureAction::Elide)
    }

    /// Restores an elided envelope, given the original, full-content envelope.
    ///
    /// Fails with [`Error::InvalidDigest`] if `envelope`'s digest doesn't
    /// match `self`'s — the holder can only unelide with the actual content
    /// that was originally hidden, not an arbitrary replacement.
    pub fn unelide(&self, envelope: impl EnvelopeEncodable) -> Result<Self> {
        let envelope = envelope.into_envelope();
        if self.digest() == envelope.digest() {
            Ok(envelope)
        } else {
            bail!(Error::InvalidDigest)
        }
    }
}
