//! The typical set of imports for working with envelopes.
//!
//! ```
//! use gordian_envelope::prelude::*;
//! ```

pub use bc_components::{Digest, DigestProvider};
pub use bc_ur::prelude::*;

pub use crate::{
    Assertion, DigestDisplayFormat, EdgeType, Envelope, EnvelopeEncodable, EnvelopeSummary,
    Error, FormatContext, FormatContextOpt, KnownValue, KnownValuesStore, MermaidFormatOpts,
    MermaidOrientation, MermaidTheme, ObscureAction, TreeFormatOpts, Visitor, known_values,
    with_format_context,
};
