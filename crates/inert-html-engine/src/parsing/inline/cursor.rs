/// A cursor for byte-by-byte inline scanning.
///
/// Delimiters are ASCII, so every position the scanner stops at while
/// matching one is a char boundary, even in multi-byte text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Number of consecutive backslashes directly before the current position.
    pub fn backslashes_before(&self) -> usize {
        self.s.as_bytes()[..self.i.min(self.s.len())]
            .iter()
            .rev()
            .take_while(|&&b| b == b'\\')
            .count()
    }

    /// Whether the byte at the current position is backslash-escaped.
    pub fn is_escaped(&self) -> bool {
        self.backslashes_before() % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.i, 0);
        assert!(!cur.eof());
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.i, 1);
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.backslashes_before(), 0);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("**");
        assert!(!cur.starts_with(b"***"));
        cur.bump();
        assert!(!cur.starts_with(b"**"));
        assert!(cur.starts_with(b"*"));
    }

    #[test]
    fn bump_n_past_end() {
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"h"));
    }

    #[rstest]
    #[case::none("*", 0, false)]
    #[case::one("\\*", 1, true)]
    #[case::two("\\\\*", 2, false)]
    #[case::three("\\\\\\*", 3, true)]
    #[case::not_adjacent("\\a*", 0, false)]
    fn escape_parity(#[case] text: &str, #[case] count: usize, #[case] escaped: bool) {
        let mut cur = Cursor::new(text);
        cur.bump_n(text.len() - 1);
        assert_eq!(cur.backslashes_before(), count);
        assert_eq!(cur.is_escaped(), escaped);
    }
}
