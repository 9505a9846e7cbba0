use super::span::ByteSpan;

/// A reference to a single line of the source with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line in the source (includes the line ending if present).
    pub span: ByteSpan,
    /// The raw line text, line ending included.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line without its `\n` or `\r\n` ending.
    pub fn content(&self) -> &'a str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// A line is blank when nothing but its line ending is left.
    ///
    /// Whitespace-only lines are *not* blank: only an empty line ends a block.
    pub fn is_blank(&self) -> bool {
        self.content().is_empty()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `split_inclusive` to preserve newline characters, which keeps the
/// spans contiguous: the end of one line is the start of the next.
pub fn lines_with_spans(src: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    src.split_inclusive('\n').map(move |text| {
        let start = offset;
        offset += text.len();
        LineRef {
            span: ByteSpan { start, end: offset },
            text,
        }
    })
}
