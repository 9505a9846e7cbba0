/// Metadata parsed from the remainder of an opening fence line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FenceInfo<'a> {
    pub language: Option<&'a str>,
    pub title: Option<&'a str>,
}

/// Fenced code block with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// A line beginning with the marker opens a fence.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Only a bare marker (trailing whitespace allowed) closes a fence.
    pub fn closes(line: &str) -> bool {
        line.trim_end() == Self::MARKER
    }

    /// Whether a whole (trimmed) block is a complete fenced region.
    pub fn is_block(block: &str) -> bool {
        block.starts_with(Self::MARKER) && block.ends_with("\n```")
    }

    /// Splits a fenced block into its opening line and its body.
    ///
    /// The body excludes the closing marker but is not trimmed.
    pub fn parts(block: &str) -> Option<(&str, &str)> {
        let (opening, rest) = block.split_once('\n')?;
        let body = rest.strip_suffix(Self::MARKER)?;
        Some((opening, body))
    }

    /// Parses `lang title` after the marker. Either part may be missing.
    pub fn info(opening: &str) -> FenceInfo<'_> {
        let remainder = opening
            .strip_prefix(Self::MARKER)
            .unwrap_or(opening)
            .trim_end();
        let (language, title) = match remainder.split_once(' ') {
            Some((language, title)) => (language, title.trim()),
            None => (remainder, ""),
        };
        FenceInfo {
            language: (!language.is_empty()).then_some(language),
            title: (!title.is_empty()).then_some(title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_opening_fence() {
        assert!(CodeFence::opens("```rust"));
        assert!(CodeFence::opens("```"));
        assert!(!CodeFence::opens(" ```"));
        assert!(!CodeFence::opens("hello"));
    }

    #[test]
    fn only_bare_marker_closes() {
        assert!(CodeFence::closes("```"));
        assert!(CodeFence::closes("```  "));
        assert!(!CodeFence::closes("```rust"));
        assert!(!CodeFence::closes("``"));
    }

    #[test]
    fn whole_block_detection() {
        assert!(CodeFence::is_block("```\ncode\n```"));
        assert!(!CodeFence::is_block("```\ncode\n``"));
        assert!(!CodeFence::is_block("```"));
    }

    #[test]
    fn parts_split_opening_and_body() {
        assert_eq!(
            CodeFence::parts("```go\nfmt.Println(1)\n```"),
            Some(("```go", "fmt.Println(1)\n"))
        );
    }

    #[test]
    fn info_with_language_and_title() {
        assert_eq!(
            CodeFence::info("```go main.go"),
            FenceInfo {
                language: Some("go"),
                title: Some("main.go"),
            }
        );
    }

    #[test]
    fn info_with_language_only() {
        assert_eq!(
            CodeFence::info("```rust\r"),
            FenceInfo {
                language: Some("rust"),
                title: None,
            }
        );
    }

    #[test]
    fn info_with_title_only() {
        assert_eq!(
            CodeFence::info("``` notes.txt"),
            FenceInfo {
                language: None,
                title: Some("notes.txt"),
            }
        );
    }

    #[test]
    fn info_bare_fence() {
        assert_eq!(CodeFence::info("```"), FenceInfo::default());
    }
}
