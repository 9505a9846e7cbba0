/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback kind when no other
/// rule matches, and the block text becomes the `<p>` value verbatim.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
