use dcbor::{CBORTaggedEncodable, DiagFormatOpts, TagsStoreOpt};

use super::FormatContext;
use crate::{Envelope, with_format_context};

/// Support for rendering an envelope as CBOR diagnostic notation (RFC 8949
/// §8), for debugging.
impl Envelope {
    /// CBOR diagnostic notation, with tag and known-value names resolved
    /// from the global format context.
    pub fn diagnostic_annotated(&self) -> String {
        with_format_context!(|context: &FormatContext| {
            self.tagged_cbor()
                .diagnostic_opt(&DiagFormatOpts::default().annotate(true).tags(TagsStoreOpt::Custom(context.tags())))
        })
    }

    /// Plain CBOR diagnostic notation, using the global format context.
    pub fn diagnostic(&self) -> String {
        with_format_context!(|context: &FormatContext| {
            self.tagged_cbor().diagnostic_opt(&DiagFormatOpts::default().tags(TagsStoreOpt::Custom(context.tags())))
        })
    }
}
