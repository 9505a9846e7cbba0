use std::sync::OnceLock;

use regex::Regex;

/// A located `![alt](url)` or `[text](url)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    /// Byte range of the whole construct.
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    pub url: &'a str,
}

/// Image syntax `![alt](url)`.
pub struct Image;

impl Image {
    pub const TAG: &'static str = "img";

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
    }

    /// All images in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<LinkMatch<'_>> {
        captures(Self::regex(), text).collect()
    }
}

/// Link syntax `[text](url)`.
pub struct Link;

impl Link {
    pub const TAG: &'static str = "a";
    /// A `[` directly after this character belongs to an image, not a link.
    pub const IMAGE_BANG: char = '!';

    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }

    /// All links in `text` that are not preceded by `!`, left to right.
    pub fn find_all(text: &str) -> Vec<LinkMatch<'_>> {
        captures(Self::regex(), text)
            .filter(|m| !text[..m.start].ends_with(Self::IMAGE_BANG))
            .collect()
    }
}

fn captures<'t>(re: &'static Regex, text: &'t str) -> impl Iterator<Item = LinkMatch<'t>> {
    re.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(LinkMatch {
            start: whole.start(),
            end: whole.end(),
            text: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    })
}
