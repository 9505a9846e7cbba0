/// Bullet list: every line starts with `* ` or `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// Item text with its marker removed.
    pub fn item(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }

    pub fn matches(block: &str) -> bool {
        !block.is_empty() && block.lines().all(|line| Self::item(line).is_some())
    }
}

/// Numbered list: every line is digits followed by `. `.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Splits a line into its number and item text.
    ///
    /// Digits are ASCII, so the split offsets are always `char` boundaries.
    pub fn item(line: &str) -> Option<(&str, &str)> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let text = line[digits..].strip_prefix(Self::SEPARATOR)?;
        Some((&line[..digits], text))
    }

    pub fn matches(block: &str) -> bool {
        !block.is_empty() && block.lines().all(|line| Self::item(line).is_some())
    }

    /// The first line's number, used as the list's `start`.
    pub fn start(block: &str) -> Option<&str> {
        block
            .lines()
            .next()
            .and_then(Self::item)
            .map(|(number, _)| number)
    }
}
