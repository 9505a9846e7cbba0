/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or renderer code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether every line of the block starts with the prefix.
    pub fn matches(block: &str) -> bool {
        !block.is_empty() && block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Byte offset where a line's content begins after all quote prefixes.
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`; nesting is
    /// flattened.
    fn content_offset(s: &str) -> usize {
        let b = s.as_bytes();
        let mut i = 0usize;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        i
    }

    /// Line content with all quote prefixes removed.
    pub fn strip_line(line: &str) -> &str {
        &line[Self::content_offset(line)..]
    }
}
