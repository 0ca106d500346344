//! A Mermaid flowchart rendering of an envelope, for visualization in
//! documentation and debugging tools that understand Mermaid diagrams.

use std::{cell::RefCell, collections::HashSet, rc::Rc};

use bc_components::{Digest, DigestProvider};

use super::FormatContextOpt;
use crate::{EdgeType, Envelope, with_format_context};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Default)]
pub enum MermaidOrientation {
    #[default]
    LeftToRight,
    TopToBottom,
    RightToLeft,
    BottomToTop,
}

impl std::fmt::Display for MermaidOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MermaidOrientation::LeftToRight => "LR",
            MermaidOrientation::TopToBottom => "TB",
            MermaidOrientation::RightToLeft => "RL",
            MermaidOrientation::BottomToTop => "BT",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Default)]
pub enum MermaidTheme {
    #[default]
    Default,
    Neutral,
    Dark,
    Forest,
    Base,
}

impl std::fmt::Display for MermaidTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MermaidTheme::Default => "default",
            MermaidTheme::Neutral => "neutral",
            MermaidTheme::Dark => "dark",
            MermaidTheme::Forest => "forest",
            MermaidTheme::Base => "base",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone)]
pub struct MermaidFormatOpts<'a> {
    hide_nodes: bool,
    monochrome: bool,
    theme: MermaidTheme,
    orientation: MermaidOrientation,
    highlighting_target: HashSet<Digest>,
    context: FormatContextOpt<'a>,
}

impl Default for MermaidFormatOpts<'_> {
    fn default() -> Self {
        Self {
            hide_nodes: false,
            monochrome: false,
            theme: MermaidTheme::default(),
            orientation: MermaidOrientation::default(),
            highlighting_target: HashSet::new(),
            context: FormatContextOpt::Global,
        }
    }
}

impl<'a> MermaidFormatOpts<'a> {
    pub fn hide_nodes(mut self, hide: bool) -> Self {
        self.hide_nodes = hide;
        self
    }

    pub fn monochrome(mut self, monochrome: bool) -> Self {
        self.monochrome = monochrome;
        self
    }

    pub fn theme(mut self, theme: MermaidTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn orientation(mut self, orientation: MermaidOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn highlighting_target(mut self, target: HashSet<Digest>) -> Self {
        self.highlighting_target = target;
        self
    }

    pub fn context(mut self, context: FormatContextOpt<'a>) -> Self {
        self.context = context;
        self
    }
}

impl Envelope {
    /// A Mermaid flowchart of the envelope, with default options.
    pub fn mermaid_format(&self) -> String { self.mermaid_format_opt(&MermaidFormatOpts::default()) }

    /// A Mermaid flowchart of the envelope.
    pub fn mermaid_format_opt(&self, opts: &MermaidFormatOpts<'_>) -> String {
        let elements: RefCell<Vec<Rc<MermaidElement>>> = RefCell::new(Vec::new());
        let next_id = RefCell::new(0usize);
        let visitor = |envelope: &Envelope,
                       level: usize,
                       incoming_edge: EdgeType,
                       parent: Option<Rc<MermaidElement>>|
         -> (Option<Rc<MermaidElement>>, bool) {
            let id = *next_id.borrow();
            *next_id.borrow_mut() += 1;
            let elem = Rc::new(MermaidElement::new(
                id,
                level,
                envelope.clone(),
                incoming_edge,
                !opts.hide_nodes,
                opts.highlighting_target.contains(&envelope.digest()),
                parent,
            ));
            elements.borrow_mut().push(elem.clone());
            (Some(elem), false)
        };
        self.walk(opts.hide_nodes, None, &visitor);

        let elements = elements.borrow();
        let mut element_ids: HashSet<usize> = elements.iter().map(|e| e.id).collect();

        let mut lines = vec![
            format!("%%{{ init: {{ 'theme': '{}', 'flowchart': {{ 'curve': 'basis' }} }} }}%%", opts.theme),
            format!("graph {}", opts.orientation),
        ];

        let mut node_styles: Vec<String> = Vec::new();
        let mut link_styles: Vec<String> = Vec::new();
        let mut link_index = 0;

        for element in elements.iter() {
            let indent = "    ".repeat(element.level);
            let content = if let Some(parent) = element.parent.as_ref() {
                let mut this_link_styles = Vec::new();
                if !opts.monochrome {
                    if let Some(color) = element.incoming_edge.link_stroke_color() {
                        this_link_styles.push(format!("stroke:{}", color));
                    }
                }
                this_link_styles
                    .push(if element.is_highlighted && parent.is_highlighted { "stroke-width:4px" } else { "stroke-width:2px" }.to_string());
                link_styles.push(format!("linkStyle {} {}", link_index, this_link_styles.join(",")));
                link_index += 1;
                element.format_edge(&mut element_ids)
            } else {
                element.format_node(&mut element_ids)
            };
            let mut this_node_styles = Vec::new();
            if !opts.monochrome {
                this_node_styles.push(format!("stroke:{}", element.envelope.node_color()));
            }
            this_node_styles.push(if element.is_highlighted { "stroke-width:6px" } else { "stroke-width:4px" }.to_string());
            node_styles.push(format!("style {} {}", element.id, this_node_styles.join(",")));
            lines.push(format!("{}{}", indent, content));
        }

        lines.extend(node_styles);
        lines.extend(link_styles);
        lines.join("\n")
    }
}

#[derive(Debug)]
struct MermaidElement {
    id: usize,
    level: usize,
    envelope: Envelope,
    incoming_edge: EdgeType,
    show_id: bool,
    is_highlighted: bool,
    parent: Option<Rc<MermaidElement>>,
}

impl MermaidElement {
    fn new(
        id: usize,
        level: usize,
        envelope: Envelope,
        incoming_edge: EdgeType,
        show_id: bool,
        is_highlighted: bool,
        parent: Option<Rc<MermaidElement>>,
    ) -> Self {
        Self { id, level, envelope, incoming_edge, show_id, is_highlighted, parent }
    }

    fn format_node(&self, element_ids: &mut HashSet<usize>) -> String {
        if element_ids.remove(&self.id) {
            let mut lines: Vec<String> = Vec::new();
            let summary = with_format_context!(|ctx| self.envelope.summary(20, ctx).replace('"', "&quot;"));
            lines.push(summary);
            if self.show_id {
                lines.push(self.envelope.digest().short_description());
            }
            let lines = lines.join("<br>");
            let (frame_l, frame_r) = self.envelope.mermaid_frame();
            let id = self.id;
            format!(r#"{id}{frame_l}"{lines}"{frame_r}"#)
        } else {
            format!("{}", self.id)
        }
    }

    fn format_edge(&self, element_ids: &mut HashSet<usize>) -> String {
        let parent = self.parent.as_ref().unwrap();
        let arrow = match self.incoming_edge.label() {
            Some(label) => format!("-- {} -->", label),
            None => "-->".to_string(),
        };
        format!("{} {} {}", parent.format_node(element_ids), arrow, self.format_node(element_ids))
    }
}

impl Envelope {
    fn mermaid_frame(&self) -> (&str, &str) {
        match self {
            Envelope::Node { .. } => ("((", "))"),
            Envelope::Leaf { .. } => ("[", "]"),
            Envelope::Wrapped { .. } => ("[/", "\\]"),
            Envelope::Assertion(..) => ("([", "])"),
            Envelope::Elided(..) => ("{{", "}}"),
            Envelope::KnownValue { .. } => ("[/", "/]"),
            Envelope::Encrypted(..) => (">", "]"),
            Envelope::Compressed(..) => ("[[", "]]"),
        }
    }

    fn node_color(&self) -> &'static str {
        match self {
            Envelope::Node { .. } => "red",
            Envelope::Leaf { .. } => "teal",
            Envelope::Wrapped { .. } => "blue",
            Envelope::Assertion(..) => "green",
            Envelope::Elided(..) => "gray",
            Envelope::KnownValue { .. } => "goldenrod",
            Envelope::Encrypted(..) => "coral",
            Envelope::Compressed(..) => "purple",
        }
    }
}

impl EdgeType {
    pub fn link_stroke_color(&self) -> Option<&'static str> {
        match self {
            EdgeType::Subject => Some("red"),
            EdgeType::Content => Some("blue"),
            EdgeType::Predicate => Some("cyan"),
            EdgeType::Object => Some("magenta"),
            _ => None,
        }
    }
}
