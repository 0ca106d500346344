use std::{collections::HashSet, iter};

use bc_components::{Digest, DigestProvider};

use crate::Envelope;

/// Support for holder-controlled inclusion proofs.
///
/// An inclusion proof is an elided copy of an envelope that still carries the
/// same root digest, but reveals only the digests along the path to a chosen
/// set of target elements. A verifier holding just the trusted root digest
/// can confirm the target elements exist without seeing anything else.
impl Envelope {
    /// Builds a proof that this envelope contains every element of `target`.
    ///
    /// Returns `None` if `target` contains a digest this envelope doesn't
    /// actually contain.
    pub fn proof_contains_set(&self, target: &HashSet<Digest>) -> Option<Envelope> {
        let reveal_set = self.reveal_set_of_set(target);
        if !target.is_subset(&reveal_set) {
            return None;
        }
        Some(self.elide_revealing_set(&reveal_set).elide_removing_set(target))
    }

    /// Single-element convenience wrapper around [`Envelope::proof_contains_set`].
    pub fn proof_contains_target(&self, target: &dyn DigestProvider) -> Option<Envelope> {
        let set = HashSet::from_iter(iter::once(target.digest()));
        self.proof_contains_set(&set)
    }

    /// Verifies `proof` demonstrates that this envelope contains every
    /// element of `target`.
    pub fn confirm_contains_set(&self, target: &HashSet<Digest>, proof: &Envelope) -> bool {
        self.digest() == proof.digest() && proof.contains_all(target)
    }

    /// Single-element convenience wrapper around [`Envelope::confirm_contains_set`].
    pub fn confirm_contains_target(&self, target: &dyn DigestProvider, proof: &Envelope) -> bool {
        let set = HashSet::from_iter(iter::once(target.digest()));
        self.confirm_contains_set(&set, proof)
    }
}

impl Envelope {
    /// All digests on the path from the root to every element of `target`.
    fn reveal_set_of_set(&self, target: &HashSet<Digest>) -> HashSet<Digest> {
        let mut result = HashSet::new();
        self.reveal_sets(target, &HashSet::new(), &mut result);
        result
    }

    fn contains_all(&self, target: &HashSet<Digest>) -> bool {
        let mut target = target.clone();
        self.remove_all_found(&mut target);
        target.is_empty()
    }

    fn reveal_sets(&self, target: &HashSet<Digest>, current: &HashSet<Digest>, result: &mut HashSet<Digest>) {
        let mut current = current.clone();
        current.insert(self.digest());

        if target.contains(&self.digest()) {
            result.extend(current.iter().cloned());
        }

        match self {
            Envelope::Node { subject, assertions, .. } => {
                subject.reveal_sets(target, &current, result);
                for assertion in assertions.iter() {
                    assertion.reveal_sets(target, &current, result);
                }
            }
            Envelope::Wrapped { envelope, .. } => {
                envelope.reveal_sets(target, &current, result);
            }
            Envelope::Assertion(assertion) => {
                assertion.predicate().reveal_sets(target, &current, result);
                assertion.object().reveal_sets(target, &current, result);
            }
            _ => {}
        }
    }

    fn remove_all_found(&self, target: &mut HashSet<Digest>) {
        target.remove(&self.digest());
        if target.is_empty() {
            return;
        }

        match self {
            Envelope::Node { subject, assertions, .. } => {
                subject.remove_all_found(target);
                for assertion in assertions.iter() {
                    assertion.remove_all_found(target);
                }
            }
            Envelope::Wrapped { envelope, .. } => {
                envelope.remove_all_found(target);
            }
            Envelope::Assertion(assertion) => {
                assertion.predicate().remove_all_found(target);
                assertion.object().remove_all_found(target);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::Assertion;

    #[test]
    fn proves_single_target() {
        let alice_friends = Envelope::new("Alice")
            .add_assertion("knows", "Bob")
            .add_assertion("knows", "Carol")
            .add_assertion("knows", "Dan");

        let root = alice_friends.elide_revealing_set(&HashSet::new());
        let knows_bob = Envelope::new_assertion("knows", "Bob");

        let proof = alice_friends.proof_contains_target(&knows_bob).unwrap();
        assert!(root.confirm_contains_target(&knows_bob, &proof));
    }

    #[test]
    fn proves_multiple_targets() {
        let document = Envelope::new("Document")
            .add_assertion("title", "Important Report")
            .add_assertion("author", "Alice")
            .add_assertion("confidential", true);

        let title_assertion = Envelope::new_assertion("title", "Important Report");
        let author_assertion = Envelope::new_assertion("author", "Alice");

        let mut target_set = HashSet::new();
        target_set.insert(title_assertion.digest());
        target_set.insert(author_assertion.digest());

        let proof = document.proof_contains_set(&target_set).unwrap();
        let root = document.elide_revealing_set(&HashSet::new());
        assert!(root.confirm_contains_set(&target_set, &proof));
    }

    #[test]
    fn refuses_absent_target() {
        let document = Envelope::new("Document").add_assertion("title", "Report");
        let absent = Assertion::new("author", "Nobody");
        let absent_envelope = Envelope::new_with_assertion(absent);
        assert!(document.proof_contains_target(&absent_envelope).is_none());
    }
}
