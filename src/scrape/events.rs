//! Markup events in document order.
//!
//! Tokenizing is not done here: `scraper`'s html5ever parser builds the tree,
//! and this adapter flattens the tree's open/close traversal edges into the
//! start-tag / end-tag / text sequence the extractor consumes.

use std::collections::HashMap;

use ego_tree::iter::Edge;
use scraper::{Html, Node};

/// One tokenizer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    /// An opening tag with its attributes.
    Start {
        name: String,
        attrs: HashMap<String, String>,
    },
    /// A closing tag.
    End { name: String },
    /// A run of text data.
    Text(String),
}

impl MarkupEvent {
    pub fn start(name: &str, attrs: &[(&str, &str)]) -> Self {
        MarkupEvent::Start {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn end(name: &str) -> Self {
        MarkupEvent::End {
            name: name.to_string(),
        }
    }

    pub fn text(text: &str) -> Self {
        MarkupEvent::Text(text.to_string())
    }
}

/// Flattens a parsed document into its event sequence. Tag and attribute
/// names arrive already lowercased by the parser.
pub fn events(document: &Html) -> Vec<MarkupEvent> {
    let mut events = Vec::new();

    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) => events.push(MarkupEvent::Start {
                    name: element.name().to_string(),
                    attrs: element
                        .attrs()
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect(),
                }),
                Node::Text(text) => events.push(MarkupEvent::Text(text.text.to_string())),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    events.push(MarkupEvent::End {
                        name: element.name().to_string(),
                    });
                }
            }
        }
    }

    events
}

// -- Tests -------------------------------------------------------------------
