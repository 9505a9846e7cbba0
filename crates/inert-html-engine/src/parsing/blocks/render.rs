use crate::html::Node;
use crate::parsing::error::ParseError;

use super::{
    kinds::{
        Alignment, BlockQuote, CodeFence, Heading, OrderedList, Paragraph, Table, UnorderedList,
    },
    types::BlockKind,
};

/// Builds the [`Node`] for a classified block.
///
/// Node values hold raw markdown; inline parsing happens afterwards. Only a
/// table can fail, and only if it was classified without passing the shape
/// check, in which case the caller falls back to [`BlockRenderer::paragraph`].
pub struct BlockRenderer;

impl BlockRenderer {
    pub fn render(&self, kind: BlockKind, block: &str) -> Result<Node, ParseError> {
        let node = match kind {
            BlockKind::Heading => self.heading(block),
            BlockKind::Code => self.code(block),
            BlockKind::Quote => self.quote(block),
            BlockKind::UnorderedList => self.unordered_list(block),
            BlockKind::OrderedList => self.ordered_list(block),
            BlockKind::HorizontalRule => Node::element("hr"),
            BlockKind::Table => self.table(block)?,
            BlockKind::Paragraph => self.paragraph(block),
        };
        Ok(node)
    }

    pub fn paragraph(&self, block: &str) -> Node {
        Node::leaf(Paragraph::TAG, block)
    }

    fn heading(&self, block: &str) -> Node {
        let Some(level) = Heading::level(block) else {
            return self.paragraph(block);
        };
        let text = Heading::text(block, level);
        Node::leaf(format!("h{level}"), text).with_attribute("id", Heading::slug(text))
    }

    fn code(&self, block: &str) -> Node {
        let Some((opening, body)) = CodeFence::parts(block) else {
            return self.paragraph(block);
        };
        let info = CodeFence::info(opening);

        let mut node = Node::leaf("pre", escape_code(body.trim()));
        if let Some(language) = info.language {
            node = node.with_attribute("class", format!("language-{language}"));
        }
        if let Some(title) = info.title {
            node = node.with_attribute("title", title);
        }
        node
    }

    fn quote(&self, block: &str) -> Node {
        let text = block
            .lines()
            .map(BlockQuote::strip_line)
            .collect::<Vec<_>>()
            .join("\n");
        Node::leaf("blockquote", text)
    }

    fn unordered_list(&self, block: &str) -> Node {
        let items = block
            .lines()
            .map(|line| Node::leaf("li", UnorderedList::item(line).unwrap_or(line)))
            .collect();
        Node::element("ul").with_children(items)
    }

    fn ordered_list(&self, block: &str) -> Node {
        let items = block
            .lines()
            .map(|line| {
                let text = OrderedList::item(line).map_or(line, |(_, text)| text);
                Node::leaf("li", text)
            })
            .collect();

        let mut node = Node::element("ol").with_children(items);
        if let Some(start) = OrderedList::start(block) {
            node = node.with_attribute("start", start);
        }
        node
    }

    fn table(&self, block: &str) -> Result<Node, ParseError> {
        let alignments = Table::alignments(block).unwrap_or_else(|| {
            let header = block.lines().next().unwrap_or_default();
            vec![Alignment::Left; Table::cells(header).count()]
        });
        let mut head = Node::element("thead");
        let mut body = Node::element("tbody");

        // Row 1 is the divider and only supplies the alignments.
        for (index, row) in block.lines().enumerate().filter(|(i, _)| *i != 1) {
            let cell_tag = if index == 0 { "th" } else { "td" };
            let cells: Vec<&str> = Table::cells(row).collect();
            if cells.len() != alignments.len() {
                return Err(ParseError::MalformedTable {
                    row: index + 1,
                    expected: alignments.len(),
                    found: cells.len(),
                });
            }

            let tr = Node::element("tr").with_children(
                cells
                    .into_iter()
                    .zip(&alignments)
                    .map(|(cell, alignment)| self.cell(cell_tag, cell, *alignment))
                    .collect(),
            );
            if index == 0 {
                head.push_child(tr);
            } else {
                body.push_child(tr);
            }
        }

        let table = Node::element("table").with_children(vec![head, body]);
        Ok(Node::element("div")
            .with_attribute("style", "overflow-x:auto;")
            .with_children(vec![table]))
    }

    fn cell(&self, tag: &str, text: &str, alignment: Alignment) -> Node {
        Node::leaf(tag, text).with_attribute("style", format!("text-align:{}", alignment.as_str()))
    }
}

/// HTML-escapes a code body, quotes included.
fn escape_code(body: &str) -> String {
    html_escape::encode_text(body)
        .replace('"', "&#34;")
        .replace('\'', "&#39;")
}
