use dcbor::{CBOREncodable, CBORTaggedEncodable, HexFormatOpts, TagsStoreOpt};

use super::FormatContext;
use crate::{Envelope, with_format_context};

/// Support for rendering an envelope as an annotated CBOR hex dump.
impl Envelope {
    /// A hex dump of the envelope's tagged CBOR encoding, annotated with tag
    /// and known-value names from the global format context.
    pub fn hex_annotated(&self) -> String {
        with_format_context!(|context: &FormatContext| {
            self.tagged_cbor()
                .hex_opt(&HexFormatOpts::default().annotate(true).tags(TagsStoreOpt::Custom(context.tags())))
        })
    }

    /// A plain hex dump of the envelope's tagged CBOR encoding.
    pub fn hex(&self) -> String { hex::encode(self.tagged_cbor().cbor_data()) }
}
