use crate::html::Node;

use super::kinds::{CodeSpan, Emphasis, Image, Link, Strong};

/// A typed run of inline text.
///
/// Link and image variants always carry their url, so every span maps onto
/// exactly one [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    pub fn is_text(&self) -> bool {
        matches!(self, Span::Text(_))
    }

    pub fn into_node(self) -> Node {
        match self {
            Span::Text(text) => Node::text(text),
            Span::Bold(text) => Node::leaf(Strong::TAG, text),
            Span::Italic(text) => Node::leaf(Emphasis::TAG, text),
            Span::Code(text) => Node::leaf(CodeSpan::TAG, text),
            Span::Link { text, url } => Node::leaf(Link::TAG, text).with_attribute("href", url),
            Span::Image { alt, url } => Node::element(Image::TAG)
                .with_attribute("src", url)
                .with_attribute("alt", alt),
        }
    }
}
