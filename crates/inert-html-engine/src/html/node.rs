use std::collections::BTreeMap;

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Elements whose content is emitted verbatim and never inline-parsed.
const VERBATIM_TAGS: &[&str] = &["code", "pre"];

/// An HTML element or text leaf.
///
/// A node with an empty `tag` is a text leaf: its `value` is written as-is,
/// with no surrounding element. Before inline processing every node carries
/// its raw markdown in `value`; afterwards a node has either a `value` or
/// `children`, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub value: String,
    pub children: Vec<Node>,
    /// Sorted by key, so serialization is deterministic.
    pub attributes: BTreeMap<String, String>,
}

impl Node {
    /// An element with no value and no children.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// An element holding raw text.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// A tagless text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Self::leaf(String::new(), value)
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// True for tagless text leaves.
    pub fn is_text(&self) -> bool {
        self.tag.is_empty()
    }

    /// True for `pre` and `code`, whose content is never inline-parsed or unescaped.
    pub fn is_verbatim(&self) -> bool {
        VERBATIM_TAGS.contains(&self.tag.as_str())
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }

    /// Serializes the node and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Appends the serialized node to `out`.
    pub fn write_html(&self, out: &mut String) {
        if self.is_text() {
            out.push_str(&self.value);
            return;
        }

        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        out.push_str(&self.value);
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}
