use anyhow::{bail, Result};
#[cfg(feature = "encrypt")]
use bc_components::Decrypter;
use bc_components::{Encrypter, Nonce, SealedMessage, SymmetricKey};
use dcbor::{CBOREncodable, CBORTaggedDecodable};

use crate::{known_values, Envelope, Error};

/// Support for sealing an envelope's content key to one or more recipients'
/// public keys, so each recipient can independently decrypt it with their
/// own private key.
///
/// The envelope's subject is encrypted once under a random symmetric
/// "content key"; that key is then sealed to each recipient's public key in
/// its own `hasRecipient` assertion.
impl Envelope {
    /// Adds a `hasRecipient` assertion sealing `content_key` to `recipient`.
    pub fn add_recipient(&self, recipient: &dyn Encrypter, content_key: &SymmetricKey) -> Self {
        self.add_recipient_using(recipient, content_key, None::<&Nonce>)
    }

    #[doc(hidden)]
    pub fn add_recipient_using(
        &self,
        recipient: &dyn Encrypter,
        content_key: &SymmetricKey,
        test_nonce: Option<&Nonce>,
    ) -> Self {
        let assertion = Self::make_has_recipient(recipient, content_key, test_nonce);
        self.add_assertion_envelope(assertion).unwrap()
    }

    /// All `SealedMessage`s attached via `hasRecipient` assertions.
    pub fn recipients(&self) -> Result<Vec<SealedMessage>> {
        self.assertions_with_predicate(known_values::HAS_RECIPIENT)
            .into_iter()
            .filter(|assertion| !assertion.object().unwrap().is_obscured())
            .map(|assertion| assertion.object().unwrap().extract_subject::<SealedMessage>())
            .collect()
    }

    /// Generates a random content key, encrypts the subject with it, and
    /// seals that key to every recipient in `recipients`.
    #[cfg(feature = "encrypt")]
    pub fn encrypt_subject_to_recipients(&self, recipients: &[&dyn Encrypter]) -> Result<Self> {
        self.encrypt_subject_to_recipients_using(recipients, None::<&Nonce>)
    }

    #[cfg(feature = "encrypt")]
    #[doc(hidden)]
    pub fn encrypt_subject_to_recipients_using(
        &self,
        recipients: &[&dyn Encrypter],
        test_nonce: Option<&Nonce>,
    ) -> Result<Self> {
        let content_key = SymmetricKey::new();
        let mut e = self.encrypt_subject(&content_key)?;
        for recipient in recipients {
            e = e.add_recipient_using(*recipient, &content_key, test_nonce);
        }
        Ok(e)
    }

    /// Single-recipient convenience wrapper around
    /// [`Envelope::encrypt_subject_to_recipients`].
    #[cfg(feature = "encrypt")]
    pub fn encrypt_subject_to_recipient(&self, recipient: &dyn Encrypter) -> Result<Self> {
        self.encrypt_subject_to_recipient_using(recipient, None::<&Nonce>)
    }

    #[cfg(feature = "encrypt")]
    #[doc(hidden)]
    pub fn encrypt_subject_to_recipient_using(
        &self,
        recipient: &dyn Encrypter,
        test_nonce: Option<&Nonce>,
    ) -> Result<Self> {
        self.encrypt_subject_to_recipients_using(&[recipient], test_nonce)
    }

    #[cfg(feature = "encrypt")]
    fn first_plaintext_in_sealed_messages(
        sealed_messages: &[SealedMessage],
        private_key: &dyn Decrypter,
    ) -> Result<Vec<u8>> {
        for sealed_message in sealed_messages {
            if let Ok(plaintext) = sealed_message.decrypt(private_key) {
                return Ok(plaintext);
            }
        }
        bail!(Error::NotAValidRecipient)
    }

    /// Finds the `hasRecipient` sealed message `recipient` can open, recovers
    /// the content key from it, and decrypts the subject.
    #[cfg(feature = "encrypt")]
    pub fn decrypt_subject_to_recipient(&self, recipient: &dyn Decrypter) -> Result<Self> {
        let sealed_messages = self.recipients()?;
        let content_key_data = Self::first_plaintext_in_sealed_messages(&sealed_messages, recipient)?;
        let content_key = SymmetricKey::from_tagged_cbor_data(content_key_data)?;
        self.decrypt_subject(&content_key)
    }

    fn make_has_recipient(
        recipient: &dyn Encrypter,
        content_key: &SymmetricKey,
        test_nonce: Option<&Nonce>,
    ) -> Self {
        let sealed_message =
            SealedMessage::new_opt(content_key.cbor_data(), recipient, None::<Vec<u8>>, test_nonce);
        Self::new_assertion(known_values::HAS_RECIPIENT, sealed_message)
    }
}

/// Convenience wrap/encrypt and decrypt/unwrap shortcuts.
#[cfg(feature = "recipient")]
impl Envelope {
    /// Wraps `self` and encrypts the wrapped envelope to `recipient` — this
    /// way the assertions, not just the subject, end up encrypted.
    pub fn encrypt_to_recipient(&self, recipient: &dyn Encrypter) -> Envelope {
        self.wrap().encrypt_subject_to_recipient(recipient).unwrap()
    }

    /// Reverses [`Envelope::encrypt_to_recipient`].
    pub fn decrypt_to_recipient(&self, recipient: &dyn Decrypter) -> Result<Envelope> {
        Ok(self.decrypt_subject_to_recipient(recipient)?.unwrap_envelope()?)
    }
}
