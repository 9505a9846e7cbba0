/// A byte range `[start, end)` into the source document.
///
/// Offsets always fall on `char` boundaries: they are produced from line
/// splits on `'\n'`, never from arbitrary arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteSpan {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl ByteSpan {
    /// Slices `src` with this span.
    pub fn slice(self, src: &str) -> &str {
        &src[self.start..self.end]
    }
}
