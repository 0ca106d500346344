use dcbor::{CBOR, DiagFormatOpts, TagsStoreOpt};

use super::{FormatContext, FormatContextOpt};
use crate::{Envelope, with_format_context};

/// A short, human-readable rendering of a leaf value's CBOR payload.
pub trait EnvelopeSummary {
    fn envelope_summary(&self, max_length: usize, context: &FormatContextOpt<'_>) -> String;
}

impl EnvelopeSummary for CBOR {
    fn envelope_summary(&self, max_length: usize, context: &FormatContextOpt<'_>) -> String {
        match self {
            CBOR::Unsigned(n) => n.to_string(),
            CBOR::Negative(n) => (-1 - (*n as i128)).to_string(),
            CBOR::ByteString(data) => format!("Bytes({})", data.len()),
            CBOR::Text(string) => {
                let truncated = if string.chars().count() > max_length {
                    format!("{}…", string.chars().take(max_length).collect::<String>())
                } else {
                    string.clone()
                };
                format!("\"{}\"", truncated.replace('\n', "\\n"))
            }
            CBOR::Simple(v) => v.to_string(),
            CBOR::Array(_) | CBOR::Map(_) | CBOR::Tagged(_, _) => {
                let opts = |tags: TagsStoreOpt<'_>| DiagFormatOpts::default().summarize(true).tags(tags);
                match context {
                    FormatContextOpt::None => self.diagnostic_opt(&opts(TagsStoreOpt::None)),
                    FormatContextOpt::Global => with_format_context!(|ctx: &FormatContext| {
                        self.diagnostic_opt(&opts(TagsStoreOpt::Custom(ctx.tags())))
                    }),
                    FormatContextOpt::Custom(ctx) => self.diagnostic_opt(&opts(TagsStoreOpt::Custom(ctx.tags()))),
                }
            }
        }
    }
}

impl Envelope {
    /// A one-line summary of this envelope's content, used by the tree and
    /// Mermaid renderers.
    pub fn summary(&self, max_length: usize, context: &FormatContext) -> String {
        match self {
            Envelope::Node { .. } => "NODE".to_string(),
            Envelope::Leaf { cbor, .. } => cbor.envelope_summary(max_length, &FormatContextOpt::Custom(context)),
            Envelope::Wrapped { .. } => "WRAPPED".to_string(),
            Envelope::Assertion(_) => "ASSERTION".to_string(),
            Envelope::Elided(_) => "ELIDED".to_string(),
            Envelope::KnownValue { value, .. } => format!("'{}'", context.known_values().name(value)),
            Envelope::Encrypted(_) => "ENCRYPTED".to_string(),
            Envelope::Compressed(_) => "COMPRESSED".to_string(),
        }
    }
}
