/// Characters dropped when deriving an element id from heading text.
const SLUG_REMOVED: &[char] = &[
    '`', '[', ']', '(', ')', ':', ';', '.', '?', '=', '+', '%', '^', '$', '#', '@', '!', '*', '~',
    '{', '}', '<', '>',
];

/// ATX heading (`#` through `######`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Level of the heading, if the block starts with 1-6 markers and a space.
    pub fn level(block: &str) -> Option<usize> {
        let level = block.bytes().take_while(|&b| b == Self::MARKER).count();
        let followed_by_space = block.as_bytes().get(level) == Some(&b' ');
        ((1..=Self::MAX_LEVEL).contains(&level) && followed_by_space).then_some(level)
    }

    /// Heading text after the markers and their separating space.
    pub fn text(block: &str, level: usize) -> &str {
        &block[level + 1..]
    }

    /// Element id for a heading: lowercased, punctuation removed, spaces
    /// hyphenated, HTML-escaped.
    pub fn slug(text: &str) -> String {
        let stripped: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !SLUG_REMOVED.contains(c))
            .map(|c| if c == ' ' { '-' } else { c })
            .collect();
        html_escape::encode_quoted_attribute(&stripped).into_owned()
    }
}
