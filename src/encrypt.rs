use anyhow::{bail, Result};
use bc_components::{DigestProvider, Nonce, SymmetricKey};
use dcbor::{CBOREncodable, CBORTaggedDecodable, CBORTaggedEncodable, CBOR};

use crate::{Envelope, Error};

/// Support for encrypting and decrypting an envelope's subject.
///
/// Assertions are never encrypted by these methods; wrap the envelope first
/// (see [`Envelope::wrap`]) to encrypt assertions along with the subject.
impl Envelope {
    /// Encrypts the envelope's subject under `key`, leaving its assertions
    /// (if any) untouched.
    pub fn encrypt_subject(&self, key: &SymmetricKey) -> Result<Self, Error> {
        self.encrypt_subject_using(key, None)
    }

    #[doc(hidden)]
    pub fn encrypt_subject_using(&self, key: &SymmetricKey, test_nonce: Option<Nonce>) -> Result<Self, Error> {
        let subject = self.subject();
        if subject.is_encrypted() {
            return Err(Error::AlreadyEncrypted);
        }
        if subject.is_elided() {
            return Err(Error::CannotEncryptElided);
        }

        let digest = subject.digest();
        let encoded_cbor = subject.tagged_cbor().cbor_data();
        let message = key.encrypt_with_digest(encoded_cbor, digest.clone(), test_nonce);
        let encrypted_subject = Envelope::new_with_encrypted(message)?;

        let result = match self {
            Envelope::Node { assertions, .. } => {
                Envelope::node_with_sorted_assertions(encrypted_subject, (**assertions).clone())
            }
            _ => encrypted_subject,
        };
        debug_assert_eq!(result.digest(), self.digest());
        Ok(result)
    }

    /// Decrypts the envelope's subject using `key`.
    pub fn decrypt_subject(&self, key: &SymmetricKey) -> Result<Self> {
        let subject = self.subject();
        let message = match &subject {
            Envelope::Encrypted(message) => message,
            _ => bail!(Error::NotEncrypted),
        };

        let encoded_cbor = key.decrypt(message)?;
        let subject_digest = message.digest_ref_opt().cloned().ok_or(Error::MissingDigest)?;
        let cbor = CBOR::from_data(&encoded_cbor)?;
        let result_subject = *Envelope::from_tagged_cbor(&cbor)?;
        if result_subject.digest() != subject_digest {
            bail!(Error::InvalidDigestAfterDecryption);
        }

        match self {
            Envelope::Node { assertions, digest, .. } => {
                let result = Envelope::node_with_sorted_assertions(result_subject, (**assertions).clone());
                if result.digest() != *digest {
                    bail!(Error::InvalidDigestAfterDecryption);
                }
                Ok(result)
            }
            _ => Ok(result_subject),
        }
    }

    /// Wraps `self` and encrypts the wrapped envelope under `key`, so its
    /// assertions end up encrypted along with its subject.
    pub fn encrypt(&self, key: &SymmetricKey) -> Result<Self, Error> {
        self.wrap().encrypt_subject(key)
    }

    /// Reverses [`Envelope::encrypt`].
    pub fn decrypt(&self, key: &SymmetricKey) -> Result<Self> {
        Ok(self.decrypt_subject(key)?.unwrap_envelope()?)
    }
}
