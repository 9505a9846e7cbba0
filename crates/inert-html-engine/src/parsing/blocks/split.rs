use crate::parsing::source::{ByteSpan, LineRef, lines_with_spans};

use super::kinds::CodeFence;

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph { start: usize, last_line_end: usize },
    Fence {
        open_line: usize,
        start: usize,
        /// Paragraph running into the opening line, held until the fence closes.
        before: Option<ByteSpan>,
    },
}

/// Segments a document into trimmed, non-empty block strings.
///
/// Blank lines end blocks, except inside a fenced region, which is always
/// emitted whole (opening line through closing line). A fence that is never
/// closed is rescanned as ordinary text, continuing any paragraph that ran
/// into it.
pub struct BlockSplitter<'a> {
    src: &'a str,
    leaf: LeafState,
    out: Vec<&'a str>,
}

impl<'a> BlockSplitter<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn split(mut self) -> Vec<&'a str> {
        let lines: Vec<LineRef<'a>> = lines_with_spans(self.src).collect();
        // Lines at or past this index never open a fence.
        let mut fences_disabled_from = lines.len();
        let mut i = 0;

        while i < lines.len() {
            self.push(&lines[i], i < fences_disabled_from, i);
            i += 1;

            if i == lines.len()
                && let LeafState::Fence {
                    open_line, before, ..
                } = self.leaf
            {
                // Unterminated fence: no closing line exists past the opener,
                // so reread the whole region as ordinary text.
                log::debug!("unterminated code fence at line {}", open_line + 1);
                self.leaf = match before {
                    Some(span) => LeafState::Paragraph {
                        start: span.start,
                        last_line_end: span.end,
                    },
                    None => LeafState::None,
                };
                fences_disabled_from = open_line;
                i = open_line;
            }
        }

        // EOF flush
        self.flush_paragraph();
        self.out
    }

    fn push(&mut self, line: &LineRef<'a>, fences_enabled: bool, index: usize) {
        if let LeafState::Fence { start, before, .. } = self.leaf {
            if CodeFence::closes(line.content()) {
                if let Some(paragraph) = before {
                    self.emit(paragraph);
                }
                self.emit(ByteSpan {
                    start,
                    end: line.span.end,
                });
                self.leaf = LeafState::None;
            }
            return;
        }

        if line.is_blank() {
            self.flush_paragraph();
            return;
        }

        if fences_enabled && CodeFence::opens(line.content()) {
            self.leaf = LeafState::Fence {
                open_line: index,
                start: line.span.start,
                before: self.pending_paragraph(),
            };
            return;
        }

        self.extend_paragraph(line.span);
    }

    fn extend_paragraph(&mut self, line: ByteSpan) {
        self.leaf = match self.leaf {
            LeafState::Paragraph { start, .. } => LeafState::Paragraph {
                start,
                last_line_end: line.end,
            },
            _ => LeafState::Paragraph {
                start: line.start,
                last_line_end: line.end,
            },
        };
    }

    fn pending_paragraph(&self) -> Option<ByteSpan> {
        match self.leaf {
            LeafState::Paragraph {
                start,
                last_line_end,
            } => Some(ByteSpan {
                start,
                end: last_line_end,
            }),
            _ => None,
        }
    }

    fn flush_paragraph(&mut self) {
        if let LeafState::Paragraph {
            start,
            last_line_end,
        } = self.leaf
        {
            self.emit(ByteSpan {
                start,
                end: last_line_end,
            });
            self.leaf = LeafState::None;
        }
    }

    fn emit(&mut self, span: ByteSpan) {
        let block = span.slice(self.src).trim();
        if !block.is_empty() {
            self.out.push(block);
        }
    }
}

/// Convenience wrapper around [`BlockSplitter`].
pub fn split_blocks(src: &str) -> Vec<&str> {
    BlockSplitter::new(src).split()
}
