use std::ops::RangeInclusive;

use anyhow::Result;
use bc_components::Salt;
use bc_rand::{RandomNumberGenerator, SecureRandomNumberGenerator};
use dcbor::{CBOREncodable, CBORTaggedEncodable};

use crate::{known_values, Envelope};

/// Support for decorrelating envelopes by adding random salt.
///
/// Salt is added as an assertion with the known-value `salt` predicate.
/// Because it changes the envelope's digest without changing its meaning, an
/// elided copy of a salted envelope can't be correlated against another
/// elided copy of the same unsalted content.
impl Envelope {
    /// Adds a salt assertion sized proportionally to this envelope's
    /// serialized length.
    pub fn add_salt(&self) -> Self {
        let mut rng = SecureRandomNumberGenerator;
        self.add_salt_using(&mut rng)
    }

    /// Adds a pre-built [`Salt`] as an assertion.
    pub fn add_salt_instance(&self, salt: Salt) -> Self {
        self.add_assertion(known_values::SALT, salt)
    }

    /// Adds exactly `count` bytes of salt.
    ///
    /// Fails if `count` is below the 8-byte minimum (see [`crate::Error::SaltTooShort`]).
    pub fn add_salt_with_len(&self, count: usize) -> Result<Self> {
        let mut rng = SecureRandomNumberGenerator;
        self.add_salt_with_len_using(count, &mut rng)
    }

    #[doc(hidden)]
    pub fn add_salt_with_len_using(&self, count: usize, rng: &mut impl RandomNumberGenerator) -> Result<Self> {
        let salt = Salt::new_with_len_using(count, rng)?;
        Ok(self.add_salt_instance(salt))
    }

    /// Adds a random number of salt bytes chosen from `range`.
    ///
    /// Fails if `range`'s minimum is below the 8-byte floor.
    pub fn add_salt_in_range(&self, range: RangeInclusive<usize>) -> Result<Self> {
        let mut rng = SecureRandomNumberGenerator;
        self.add_salt_in_range_using(&range, &mut rng)
    }

    #[doc(hidden)]
    pub fn add_salt_in_range_using(
        &self,
        range: &RangeInclusive<usize>,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<Self> {
        Ok(self.add_salt_instance(Salt::new_in_range_using(range, rng)?))
    }

    #[doc(hidden)]
    pub fn add_salt_using(&self, rng: &mut impl RandomNumberGenerator) -> Self {
        let salt = Salt::new_for_size_using(self.tagged_cbor().cbor_data().len(), rng);
        self.add_salt_instance(salt)
    }
}
