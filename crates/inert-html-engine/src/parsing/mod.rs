//! # Markdown to HTML
//!
//! `split → classify → render → inline → unescape`, one block at a time.
//! Problems never abort a conversion; they are collected as [`Diagnostic`]s.

pub mod blocks;
pub mod error;
pub mod inline;
pub mod source;

#[cfg(test)]
mod tests;

use crate::html::Node;

use blocks::{BlockClassifier, BlockRenderer, split_blocks};
pub use error::{Diagnostic, ParseError};

/// The top-level nodes of a converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    pub nodes: Vec<Node>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedDoc {
    /// Value of the first `h1` that has one, or an empty string.
    ///
    /// An `h1` holding inline markup keeps its text in children, not its
    /// value, and is passed over.
    pub fn title(&self) -> String {
        self.nodes
            .iter()
            .find(|node| node.tag == "h1" && !node.value.is_empty())
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }

    /// Serialized nodes, concatenated with no separator.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }
}

/// A converted document ready to be spliced into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub title: String,
    pub body: String,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn parse_document(md: &str) -> ParsedDoc {
    let classifier = BlockClassifier;
    let renderer = BlockRenderer;
    let mut doc = ParsedDoc::default();

    for (index, block) in split_blocks(md).into_iter().enumerate() {
        let kind = classifier.classify(block);
        log::debug!("block {}: {:?}", index + 1, kind);

        let mut node = renderer.render(kind, block).unwrap_or_else(|error| {
            doc.diagnostics.push(Diagnostic { block: index, error });
            renderer.paragraph(block)
        });

        let mut errors = vec![];
        inline::process_node(&mut node, &mut errors);
        doc.diagnostics
            .extend(errors.into_iter().map(|error| Diagnostic { block: index, error }));

        inline::unescape_node(&mut node);
        doc.nodes.push(node);
    }

    doc
}

/// Converts a markdown document to an HTML fragment and its title.
pub fn markdown_to_html(md: &str) -> Rendered {
    let doc = parse_document(md);
    Rendered {
        title: doc.title(),
        body: doc.to_html(),
        diagnostics: doc.diagnostics,
    }
}
