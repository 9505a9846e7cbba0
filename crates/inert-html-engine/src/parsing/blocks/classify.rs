use super::{
    kinds::{BlockQuote, CodeFence, Heading, HorizontalRule, OrderedList, Table, UnorderedList},
    types::BlockKind,
};

/// Assigns a [`BlockKind`] to a block string.
///
/// Rules are tried in a fixed priority order and the first match wins; a
/// block matching none of them is a paragraph. Classification is total: it
/// never fails, and the empty string is a paragraph.
pub struct BlockClassifier;

impl BlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        if block.is_empty() {
            return BlockKind::Paragraph;
        }

        if Heading::level(block).is_some() {
            BlockKind::Heading
        } else if BlockQuote::matches(block) {
            BlockKind::Quote
        } else if UnorderedList::matches(block) {
            BlockKind::UnorderedList
        } else if Table::alignments(block).is_some() {
            BlockKind::Table
        } else if HorizontalRule::matches(block) {
            BlockKind::HorizontalRule
        } else if OrderedList::matches(block) {
            BlockKind::OrderedList
        } else if CodeFence::is_block(block) {
            BlockKind::Code
        } else {
            BlockKind::Paragraph
        }
    }
}
