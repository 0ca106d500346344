use anyhow::{bail, Result};
use bc_components::{Compressed, DigestProvider};
use dcbor::{CBOREncodable, CBORTaggedDecodable, CBORTaggedEncodable};

use crate::{Envelope, Error};

/// Support for compressing and uncompressing whole envelopes and envelope subjects.
///
/// Compression uses DEFLATE and preserves the envelope's digest, so a
/// compressed envelope can sit anywhere in a larger envelope's tree without
/// disturbing digests above it.
impl Envelope {
    /// Compresses this envelope as a single unit.
    pub fn compress(&self) -> Result<Self> {
        match self {
            Envelope::Compressed(_) => Ok(self.clone()),
            Envelope::Encrypted(_) => bail!(Error::AlreadyEncrypted),
            Envelope::Elided(_) => bail!(Error::AlreadyElided),
            _ => {
                let compressed = Compressed::from_uncompressed_data(
                    self.tagged_cbor().cbor_data(),
                    Some(self.digest()),
                );
                Ok(Envelope::new_with_compressed(compressed)?)
            }
        }
    }

    /// Reverses [`Envelope::compress`].
    pub fn uncompress(&self) -> Result<Self> {
        let Envelope::Compressed(compressed) = self else {
            bail!(Error::NotCompressed);
        };
        let Some(digest) = compressed.digest_ref_opt() else {
            bail!(Error::MissingDigest);
        };
        if *digest != self.digest() {
            bail!(Error::InvalidDigest);
        }
        let uncompressed_data = compressed.uncompress()?;
        let cbor = dcbor::CBOR::from_data(&uncompressed_data)?;
        let envelope = *Envelope::from_tagged_cbor(&cbor)?;
        if envelope.digest() != *digest {
            bail!(Error::InvalidDigestAfterDecompression);
        }
        Ok(envelope)
    }

    /// Compresses only the envelope's subject, leaving assertions untouched.
    pub fn compress_subject(&self) -> Result<Self> {
        if self.subject().is_compressed() {
            Ok(self.clone())
        } else {
            let subject = self.subject().compress()?;
            Ok(self.replace_subject(subject))
        }
    }

    /// Reverses [`Envelope::compress_subject`].
    pub fn uncompress_subject(&self) -> Result<Self> {
        if self.subject().is_compressed() {
            let subject = self.subject().uncompress()?;
            Ok(self.replace_subject(subject))
        } else {
            Ok(self.clone())
        }
    }
}
