use dcbor::CBOR;

use super::{EnvelopeSummary, FormatContext, FormatContextOpt};
use crate::{Assertion, Envelope, known_values};

/// Support for rendering an envelope as a compact, human-readable notation,
/// e.g. `"Alice" [ "knows": "Bob" ]`.
impl Envelope {
    /// The envelope notation for this envelope, using an explicit context.
    pub fn format_opt(&self, context: Option<&FormatContext>) -> String {
        let default = FormatContext::default();
        self.format_item(context.unwrap_or(&default)).format().trim().to_string()
    }

    /// The envelope notation for this envelope, using the default context.
    pub fn format(&self) -> String { self.format_opt(None) }
}

/// A piece of envelope notation output, assembled into a single string by
/// [`FormatItem::format`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormatItem {
    Begin(String),
    End(String),
    Item(String),
    Separator,
    List(Vec<FormatItem>),
}

impl FormatItem {
    fn flatten(&self) -> Vec<FormatItem> {
        match self {
            FormatItem::List(items) => items.iter().flat_map(|i| i.flatten()).collect(),
            _ => vec![self.clone()],
        }
    }

    /// Merges an `End` immediately followed by a `Begin` onto one line, e.g.
    /// `} [` instead of `}\n[`.
    fn nicen(items: &[FormatItem]) -> Vec<FormatItem> {
        let mut input = items.to_vec();
        let mut result: Vec<FormatItem> = vec![];

        while !input.is_empty() {
            let current = input.remove(0);
            if input.is_empty() {
                result.push(current);
                break;
            }
            if let (FormatItem::End(end_string), FormatItem::Begin(begin_string)) = (&current, &input[0]) {
                result.push(FormatItem::End(format!("{} {}", end_string, begin_string)));
                result.push(FormatItem::Begin(String::new()));
                input.remove(0);
            } else {
                result.push(current);
            }
        }
        result
    }

    fn indent(level: usize) -> String { " ".repeat(level * 4) }

    fn add_space_at_end_if_needed(s: &str) -> String {
        if s.is_empty() {
            " ".to_string()
        } else if s.ends_with(' ') {
            s.to_string()
        } else {
            format!("{} ", s)
        }
    }

    fn format(&self) -> String {
        let mut lines: Vec<String> = vec![];
        let mut level = 0usize;
        let mut current_line = String::new();
        let items = Self::nicen(&self.flatten());
        for item in items {
            match item {
                FormatItem::Begin(string) => {
                    if !string.is_empty() {
                        let c = if current_line.is_empty() {
                            string
                        } else {
                            Self::add_space_at_end_if_needed(&current_line) + &string
                        };
                        lines.push(Self::indent(level) + &c + "\n");
                    }
                    level += 1;
                    current_line = String::new();
                }
                FormatItem::End(string) => {
                    if !current_line.is_empty() {
                        lines.push(Self::indent(level) + &current_line + "\n");
                        current_line = String::new();
                    }
                    level -= 1;
                    lines.push(Self::indent(level) + &string + "\n");
                }
                FormatItem::Item(string) => current_line += &string,
                FormatItem::Separator => {
                    if !current_line.is_empty() {
                        lines.push(Self::indent(level) + &current_line + "\n");
                        current_line = String::new();
                    }
                }
                FormatItem::List(_) => lines.push("<list>".to_string()),
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
        lines.join("")
    }
}

trait FormatAsItem {
    fn format_item(&self, context: &FormatContext) -> FormatItem;
}

impl FormatAsItem for CBOR {
    fn format_item(&self, context: &FormatContext) -> FormatItem {
        if let CBOR::Tagged(tag, cbor) = self {
            if *tag == <Envelope as dcbor::CBORTagged>::CBOR_TAG {
                if let Ok(envelope) = <Envelope as dcbor::CBORTaggedDecodable>::from_untagged_cbor(cbor) {
                    return envelope.format_item(context);
                }
                return FormatItem::Item("<error>".to_string());
            }
        }
        FormatItem::Item(self.envelope_summary(usize::MAX, &FormatContextOpt::Custom(context)))
    }
}

impl FormatAsItem for Envelope {
    fn format_item(&self, context: &FormatContext) -> FormatItem {
        match self {
            Envelope::Leaf { cbor, .. } => cbor.format_item(context),
            Envelope::KnownValue { value, .. } => {
                FormatItem::Item(format!("'{}'", context.known_values().name(value)))
            }
            Envelope::Wrapped { envelope, .. } => FormatItem::List(vec![
                FormatItem::Begin("{".to_string()),
                envelope.format_item(context),
                FormatItem::End("}".to_string()),
            ]),
            Envelope::Assertion(assertion) => assertion.format_item(context),
            Envelope::Encrypted(_) => FormatItem::Item("ENCRYPTED".to_string()),
            Envelope::Compressed(_) => FormatItem::Item("COMPRESSED".to_string()),
            Envelope::Elided(_) => FormatItem::Item("ELIDED".to_string()),
            Envelope::Node { subject, assertions, .. } => {
                let mut items: Vec<FormatItem> = Vec::new();

                let subject_item = subject.format_item(context);
                let mut elided_count = 0;
                let mut encrypted_count = 0;
                let mut compressed_count = 0;
                let mut type_assertion_items: Vec<Vec<FormatItem>> = Vec::new();
                let mut assertion_items: Vec<Vec<FormatItem>> = Vec::new();

                for assertion in assertions.iter() {
                    match assertion {
                        Envelope::Elided(_) => elided_count += 1,
                        Envelope::Encrypted(_) => encrypted_count += 1,
                        Envelope::Compressed(_) => compressed_count += 1,
                        _ => {
                            let is_type_assertion = matches!(
                                assertion,
                                Envelope::Assertion(a)
                                    if a.predicate().known_value() == Some(&known_values::IS_A)
                            );
                            let item = vec![assertion.format_item(context)];
                            if is_type_assertion {
                                type_assertion_items.push(item);
                            } else {
                                assertion_items.push(item);
                            }
                        }
                    }
                }
                let as_strings = |items: &[FormatItem]| -> String {
                    items.iter().map(|i| format!("{:?}", i)).collect::<Vec<_>>().join("")
                };
                type_assertion_items.sort_by_key(|i| as_strings(i));
                assertion_items.sort_by_key(|i| as_strings(i));
                assertion_items.splice(0..0, type_assertion_items);
                if compressed_count > 1 {
                    assertion_items.push(vec![FormatItem::Item(format!("COMPRESSED ({})", compressed_count))]);
                } else if compressed_count > 0 {
                    assertion_items.push(vec![FormatItem::Item("COMPRESSED".to_string())]);
                }
                if elided_count > 1 {
                    assertion_items.push(vec![FormatItem::Item(format!("ELIDED ({})", elided_count))]);
                } else if elided_count > 0 {
                    assertion_items.push(vec![FormatItem::Item("ELIDED".to_string())]);
                }
                if encrypted_count > 1 {
                    assertion_items.push(vec![FormatItem::Item(format!("ENCRYPTED ({})", encrypted_count))]);
                } else if encrypted_count > 0 {
                    assertion_items.push(vec![FormatItem::Item("ENCRYPTED".to_string())]);
                }
                let joined_assertions: Vec<FormatItem> = itertools::intersperse_with(assertion_items, || {
                    vec![FormatItem::Separator]
                })
                .flatten()
                .collect();

                let needs_braces = subject.is_subject_assertion();
                if needs_braces {
                    items.push(FormatItem::Begin("{".to_string()));
                }
                items.push(subject_item);
                if needs_braces {
                    items.push(FormatItem::End("}".to_string()));
                }
                items.push(FormatItem::Begin("[".to_string()));
                items.extend(joined_assertions);
                items.push(FormatItem::End("]".to_string()));
                FormatItem::List(items)
            }
        }
    }
}

impl FormatAsItem for Assertion {
    fn format_item(&self, context: &FormatContext) -> FormatItem {
        FormatItem::List(vec![
            self.predicate().format_item(context),
            FormatItem::Item(": ".to_string()),
            self.object().format_item(context),
        ])
    }
}
