//! Human-readable renderings of an envelope: tree, Mermaid graph, compact
//! notation, CBOR diagnostic, and hex dump. These are lossless summaries for
//! debugging and documentation, never alternative serializations.

mod format_context;
pub use format_context::{FormatContext, FormatContextOpt, GLOBAL_FORMAT_CONTEXT};

mod tree;
pub use tree::{DigestDisplayFormat, TreeFormatOpts};

mod mermaid;
pub use mermaid::{MermaidFormatOpts, MermaidOrientation, MermaidTheme};

mod envelope_summary;
pub use envelope_summary::EnvelopeSummary;

mod hex;
mod diagnostic;
mod notation;
