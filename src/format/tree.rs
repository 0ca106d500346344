//! A textual tree representation of an envelope, for debugging.
//!
//! Each line shows an element's short digest prefix, the edge connecting it
//! to its parent, and a one-line summary of its content.
//!
//! # Example
//!
//! ```
//! use gordian_envelope::prelude::*;
//!
//! let envelope =
//!     Envelope::new("Alice").add_assertion("knows", Envelope::new("Bob").add_assertion("email", "bob@example.com"));
//!
//! let tree = envelope.tree_format();
//! assert!(tree.contains("NODE"));
//! ```

use std::{cell::RefCell, collections::HashSet};

use bc_components::{Digest, DigestProvider};
use bc_ur::UREncodable;

use super::{FormatContext, FormatContextOpt};
use crate::{EdgeType, Envelope, with_format_context};

#[derive(Clone, Copy, Default)]
pub enum DigestDisplayFormat {
    /// The first 8 hex characters of the digest.
    #[default]
    Short,
    /// The full digest, hex-encoded.
    Full,
    /// A `ur:digest/...` UR.
    UR,
}

#[derive(Clone, Default)]
pub struct TreeFormatOpts<'a> {
    hide_nodes: bool,
    highlighting_target: HashSet<Digest>,
    context: FormatContextOpt<'a>,
    digest_display: DigestDisplayFormat,
}

impl<'a> TreeFormatOpts<'a> {
    /// Hides `NODE` container lines, showing only semantic content.
    pub fn hide_nodes(mut self, hide: bool) -> Self {
        self.hide_nodes = hide;
        self
    }

    /// Marks the given digests for highlighting with a leading `*`.
    pub fn highlighting_target(mut self, target: HashSet<Digest>) -> Self {
        self.highlighting_target = target;
        self
    }

    pub fn context(mut self, context: FormatContextOpt<'a>) -> Self {
        self.context = context;
        self
    }

    pub fn digest_display(mut self, opt: DigestDisplayFormat) -> Self {
        self.digest_display = opt;
        self
    }
}

impl Envelope {
    /// A tree-formatted string representation of the envelope, with default
    /// options.
    pub fn tree_format(&self) -> String { self.tree_format_opt(&TreeFormatOpts::default()) }

    /// A tree-formatted string representation of the envelope.
    pub fn tree_format_opt(&self, opts: &TreeFormatOpts<'_>) -> String {
        let elements: RefCell<Vec<TreeElement>> = RefCell::new(Vec::new());
        let visitor = |envelope: &Envelope, level: usize, incoming_edge: EdgeType, _: ()| -> ((), bool) {
            let elem = TreeElement::new(
                level,
                envelope.clone(),
                incoming_edge,
                !opts.hide_nodes,
                opts.highlighting_target.contains(&envelope.digest()),
            );
            elements.borrow_mut().push(elem);
            ((), false)
        };
        self.walk(opts.hide_nodes, (), &visitor);

        let elements = elements.borrow();
        let format_elements = |elements: &[TreeElement], context: &FormatContext| -> String {
            elements.iter().map(|e| e.string(context, opts.digest_display)).collect::<Vec<_>>().join("\n")
        };

        match &opts.context {
            FormatContextOpt::None => format_elements(&elements, &FormatContext::default()),
            FormatContextOpt::Global => with_format_context!(|context| format_elements(&elements, context)),
            FormatContextOpt::Custom(ctx) => format_elements(&elements, ctx),
        }
    }

    /// A short textual representation of this envelope's digest.
    pub fn short_id(&self, opt: DigestDisplayFormat) -> String {
        let digest = self.digest();
        match opt {
            DigestDisplayFormat::Short => digest.short_description(),
            DigestDisplayFormat::Full => hex::encode(digest.data()),
            DigestDisplayFormat::UR => digest.ur_string(),
        }
    }
}

struct TreeElement {
    level: usize,
    envelope: Envelope,
    incoming_edge: EdgeType,
    show_id: bool,
    is_highlighted: bool,
}

impl TreeElement {
    fn new(level: usize, envelope: Envelope, incoming_edge: EdgeType, show_id: bool, is_highlighted: bool) -> Self {
        Self { level, envelope, incoming_edge, show_id, is_highlighted }
    }

    fn string(&self, context: &FormatContext, digest_display: DigestDisplayFormat) -> String {
        let line = [
            self.is_highlighted.then(|| "*".to_string()),
            self.show_id.then(|| self.envelope.short_id(digest_display)),
            self.incoming_edge.label().map(|s| s.to_string()),
            Some(self.envelope.summary(40, context)),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
        format!("{}{}", " ".repeat(self.level * 4), line)
    }
}
