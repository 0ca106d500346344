//! Traversal of the envelope hierarchy.
//!
//! Traversal runs in one of two modes:
//! - Structure-based (`hide_nodes = false`): visits every element, including
//!   node containers.
//! - Tree-based (`hide_nodes = true`): skips node containers and visits only
//!   the semantic content.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//!
//! use gordian_envelope::prelude::*;
//!
//! let envelope = Envelope::new("Alice").add_assertion("knows", "Bob");
//!
//! let count = RefCell::new(0);
//! let visitor = |_env: &Envelope, _level: usize, _edge: EdgeType, state: ()| -> ((), bool) {
//!     *count.borrow_mut() += 1;
//!     (state, false)
//! };
//!
//! envelope.walk(false, (), &visitor);
//! assert!(*count.borrow() > 0);
//! ```

use crate::Envelope;

/// How an envelope element is connected to its parent during traversal.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum EdgeType {
    /// Root or no connection.
    None,
    /// Element is the subject of a node.
    Subject,
    /// Element is an assertion on a node.
    Assertion,
    /// Element is the predicate of an assertion.
    Predicate,
    /// Element is the object of an assertion.
    Object,
    /// Element is the content wrapped by another envelope.
    Content,
}

impl EdgeType {
    /// A short label for tree formatting, or `None` if no label applies.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            EdgeType::Subject => Some("subj"),
            EdgeType::Content => Some("cont"),
            EdgeType::Predicate => Some("pred"),
            EdgeType::Object => Some("obj"),
            _ => None,
        }
    }
}

/// A visitor called for each element. Returns the state to pass to children
/// along with a flag that, if true, stops the traversal from descending
/// below this element.
pub type Visitor<'a, State> = dyn Fn(&Envelope, usize, EdgeType, State) -> (State, bool) + 'a;

impl Envelope {
    /// Walks the envelope, calling `visit` for each element.
    ///
    /// With `hide_nodes` set, node containers are skipped and only semantic
    /// content is visited.
    pub fn walk<State: Clone>(&self, hide_nodes: bool, state: State, visit: &Visitor<'_, State>) {
        if hide_nodes {
            self.walk_tree(state, visit)
        } else {
            self.walk_structure(state, visit)
        }
    }

    fn walk_structure<State: Clone>(&self, state: State, visit: &Visitor<'_, State>) {
        self.walk_structure_inner(0, EdgeType::None, state, visit)
    }

    fn walk_structure_inner<State: Clone>(
        &self,
        level: usize,
        incoming_edge: EdgeType,
        state: State,
        visit: &Visitor<'_, State>,
    ) {
        let (state, stop) = visit(self, level, incoming_edge, state);
        if stop {
            return;
        }
        let next_level = level + 1;
        match self {
            Envelope::Node { subject, assertions, .. } => {
                subject.walk_structure_inner(next_level, EdgeType::Subject, state.clone(), visit);
                for assertion in assertions.iter() {
                    assertion.walk_structure_inner(next_level, EdgeType::Assertion, state.clone(), visit);
                }
            }
            Envelope::Wrapped { envelope, .. } => {
                envelope.walk_structure_inner(next_level, EdgeType::Content, state, visit);
            }
            Envelope::Assertion(assertion) => {
                assertion.predicate().walk_structure_inner(next_level, EdgeType::Predicate, state.clone(), visit);
                assertion.object().walk_structure_inner(next_level, EdgeType::Object, state, visit);
            }
            _ => {}
        }
    }

    fn walk_tree<State: Clone>(&self, state: State, visit: &Visitor<'_, State>) {
        let _ = self.walk_tree_inner(0, EdgeType::None, state, visit);
    }

    fn walk_tree_inner<State: Clone>(
        &self,
        level: usize,
        incoming_edge: EdgeType,
        state: State,
        visit: &Visitor<'_, State>,
    ) -> State {
        let mut state = state;
        let mut subject_level = level;
        if !self.is_node() {
            let stop;
            (state, stop) = visit(self, level, incoming_edge, state);
            if stop {
                return state;
            }
            subject_level = level + 1;
        }
        match self {
            Envelope::Node { subject, assertions, .. } => {
                let assertion_state = subject.walk_tree_inner(subject_level, EdgeType::Subject, state.clone(), visit);
                let assertion_level = subject_level + 1;
                for assertion in assertions.iter() {
                    assertion.walk_tree_inner(assertion_level, EdgeType::Assertion, assertion_state.clone(), visit);
                }
            }
            Envelope::Wrapped { envelope, .. } => {
                envelope.walk_tree_inner(subject_level, EdgeType::Content, state.clone(), visit);
            }
            Envelope::Assertion(assertion) => {
                assertion.predicate().walk_tree_inner(subject_level, EdgeType::Predicate, state.clone(), visit);
                assertion.object().walk_tree_inner(subject_level, EdgeType::Object, state.clone(), visit);
            }
            _ => {}
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn counts_every_structural_element() {
        let envelope = Envelope::new("Alice").add_assertion("knows", "Bob");
        let count = RefCell::new(0usize);
        let visitor = |_env: &Envelope, _level: usize, _edge: EdgeType, state: ()| -> ((), bool) {
            *count.borrow_mut() += 1;
            (state, false)
        };
        envelope.walk(false, (), &visitor);
        assert!(*count.borrow() > 0);
    }

    #[test]
    fn tree_mode_skips_node_containers() {
        let envelope = Envelope::new("Alice").add_assertion("knows", "Bob");
        let node_count = RefCell::new(0usize);
        let visitor = |env: &Envelope, _level: usize, _edge: EdgeType, state: ()| -> ((), bool) {
            if env.is_node() {
                *node_count.borrow_mut() += 1;
            }
            (state, false)
        };
        envelope.walk(true, (), &visitor);
        assert_eq!(*node_count.borrow(), 0);
    }
}
