use crate::{Envelope, Error};

/// Support for wrapping and unwrapping envelopes.
impl Envelope {
    /// Wraps `self` in a new `wrapped` envelope.
    pub fn wrap(&self) -> Self {
        Envelope::new_wrapped(self.clone())
    }

    /// Unwraps `self`, returning the envelope it contains.
    ///
    /// Fails with [`Error::NotWrapped`] if `self` is not a `wrapped` envelope.
    pub fn unwrap_envelope(&self) -> Result<Self, Error> {
        match self {
            Envelope::Wrapped { envelope, .. } => Ok((**envelope).clone()),
            _ => Err(Error::NotWrapped),
        }
    }
}
