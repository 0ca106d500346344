use anyhow::{bail, Result};
use bc_components::DigestProvider;

use crate::{into_envelope::EnvelopeEncodable, Envelope, Error};

/// Support for adding assertions.
impl Envelope {
    /// Returns a new envelope with an assertion built from `predicate` and
    /// `object` added.
    pub fn add_assertion(
        &self,
        predicate: impl EnvelopeEncodable,
        object: impl EnvelopeEncodable,
    ) -> Self {
        let assertion = Self::new_assertion(predicate, object);
        self.add_optional_assertion_envelope(Some(assertion)).unwrap()
    }

    /// Returns a new envelope with `assertion_envelope` added as-is.
    ///
    /// `assertion_envelope` must be a valid assertion, or an obscured variant
    /// of one.
    pub fn add_assertion_envelope(&self, assertion_envelope: impl EnvelopeEncodable) -> Result<Self> {
        self.add_optional_assertion_envelope(Some(assertion_envelope.into_envelope()))
    }

    /// Adds every envelope in `assertions` in turn.
    pub fn add_assertion_envelopes(&self, assertions: &[Self]) -> Result<Self> {
        let mut e = self.clone();
        for assertion in assertions {
            e = e.add_assertion_envelope(assertion.clone())?;
        }
        Ok(e)
    }

    /// Adds `assertion` if present, and is a no-op otherwise.
    ///
    /// Adding an assertion whose digest already exists among the envelope's
    /// assertions is also a no-op (idempotent by digest).
    pub fn add_optional_assertion_envelope(&self, assertion: Option<Self>) -> Result<Self> {
        match assertion {
            Some(assertion) => {
                if !assertion.is_subject_assertion() && !assertion.is_subject_obscured() {
                    bail!(Error::InvalidFormat);
                }

                match self {
                    Envelope::Node { subject, assertions, .. } => {
                        if !assertions.iter().any(|a| a.digest() == assertion.digest()) {
                            let mut assertions = (**assertions).clone();
                            assertions.push(assertion);
                            Ok(Self::node_with_sorted_assertions((**subject).clone(), assertions))
                        } else {
                            Ok(self.clone())
                        }
                    }
                    _ => Ok(Self::node_with_sorted_assertions(self.subject(), vec![assertion])),
                }
            }
            None => Ok(self.clone()),
        }
    }

    /// Adds an assertion only if `object` is `Some`.
    pub fn add_optional_assertion(
        &self,
        predicate: impl EnvelopeEncodable,
        object: Option<impl EnvelopeEncodable>,
    ) -> Self {
        if let Some(object) = object {
            self.add_assertion_envelope(Self::new_assertion(predicate, object)).unwrap()
        } else {
            self.clone()
        }
    }

    /// Adds an assertion with the given string object, but only if it's non-empty.
    pub fn add_nonempty_string_assertion(
        &self,
        predicate: impl EnvelopeEncodable,
        str: impl AsRef<str>,
    ) -> Self {
        let str = str.as_ref();
        if str.is_empty() {
            self.clone()
        } else {
            self.add_assertion(predicate, str)
        }
    }

    /// Adds every envelope in `envelopes`, ignoring errors for envelopes that
    /// turn out not to be valid assertions.
    pub fn add_assertions(&self, envelopes: &[Self]) -> Self {
        let mut e = self.clone();
        for envelope in envelopes {
            if let Ok(next) = e.add_assertion_envelope(envelope.clone()) {
                e = next;
            }
        }
        e
    }
}

/// Support for conditionally adding assertions.
impl Envelope {
    /// Adds an assertion only if `condition` is true.
    pub fn add_assertion_if(
        &self,
        condition: bool,
        predicate: impl EnvelopeEncodable,
        object: impl EnvelopeEncodable,
    ) -> Self {
        if condition { self.add_assertion(predicate, object) } else { self.clone() }
    }

    /// Adds `assertion_envelope` only if `condition` is true.
    pub fn add_assertion_envelope_if(&self, condition: bool, assertion_envelope: Self) -> Result<Self> {
        if condition { self.add_assertion_envelope(assertion_envelope) } else { Ok(self.clone()) }
    }
}

#[cfg(feature = "salt")]
/// Support for adding assertions with an optional decorrelating salt.
impl Envelope {
    /// Adds an assertion built from `predicate`/`object`, salting it first if
    /// `salted` is true.
    pub fn add_assertion_salted<P, O>(&self, predicate: P, object: O, salted: bool) -> Self
    where
        P: EnvelopeEncodable,
        O: EnvelopeEncodable,
    {
        let assertion = Self::new_assertion(predicate, object);
        self.add_optional_assertion_envelope_salted(Some(assertion), salted).unwrap()
    }

    /// Adds `assertion_envelope`, salting it first if `salted` is true.
    pub fn add_assertion_envelope_salted(&self, assertion_envelope: Self, salted: bool) -> Result<Self> {
        self.add_optional_assertion_envelope_salted(Some(assertion_envelope), salted)
    }

    /// Adds `assertion` if present, salting it first if `salted` is true.
    pub fn add_optional_assertion_envelope_salted(
        &self,
        assertion: Option<Self>,
        salted: bool,
    ) -> Result<Self> {
        match assertion {
            Some(assertion) => {
                if !assertion.is_subject_assertion() && !assertion.is_subject_obscured() {
                    bail!(Error::InvalidFormat);
                }
                let assertion = if salted { assertion.add_salt() } else { assertion };

                match self {
                    Envelope::Node { subject, assertions, .. } => {
                        if !assertions.iter().any(|a| a.digest() == assertion.digest()) {
                            let mut assertions = (**assertions).clone();
                            assertions.push(assertion);
                            Ok(Self::node_with_sorted_assertions((**subject).clone(), assertions))
                        } else {
                            Ok(self.clone())
                        }
                    }
                    _ => Ok(Self::node_with_sorted_assertions(self.subject(), vec![assertion])),
                }
            }
            None => Ok(self.clone()),
        }
    }

    /// Adds every assertion in `assertions`, salting each first if `salted` is true.
    pub fn add_assertions_salted(&self, assertions: &[Self], salted: bool) -> Self {
        let mut e = self.clone();
        for assertion in assertions {
            e = e.add_assertion_envelope_salted(assertion.clone(), salted).unwrap();
        }
        e
    }
}

/// Support for removing or replacing assertions.
impl Envelope {
    /// Returns a new envelope with the assertion matching `target`'s digest
    /// removed.
    ///
    /// If removing it would leave no assertions, returns the bare subject
    /// instead of a `node` with an empty assertion set — a `node` always has
    /// at least one assertion (see invariant 2).
    pub fn remove_assertion(&self, target: Self) -> Self {
        let mut assertions = self.assertions();
        let target = target.digest();
        if let Some(index) = assertions.iter().position(|a| a.digest() == target) {
            assertions.remove(index);
            if assertions.is_empty() {
                self.subject()
            } else {
                Self::node_with_sorted_assertions(self.subject(), assertions)
            }
        } else {
            self.clone()
        }
    }

    /// Removes `assertion`, then adds `new_assertion`.
    pub fn replace_assertion(&self, assertion: Self, new_assertion: Self) -> Result<Self> {
        self.remove_assertion(assertion).add_assertion_envelope(new_assertion)
    }

    /// Returns a new envelope with `subject` in place of the current subject,
    /// carrying over all of the current envelope's assertions.
    pub fn replace_subject(&self, subject: Self) -> Self {
        self.assertions().into_iter().fold(subject, |e, a| e.add_assertion_envelope(a).unwrap())
    }
}
