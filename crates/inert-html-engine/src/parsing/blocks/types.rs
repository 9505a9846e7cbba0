/// The structural kind of a block.
///
/// Kinds are recomputed from the block text whenever needed; blocks never
/// carry them around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Default when no other rule matches.
    Paragraph,
    /// `#` through `######` followed by a space.
    Heading,
    /// A complete fenced region.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line is `<digits>. `.
    OrderedList,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Exactly `***`, `---` or `___`.
    HorizontalRule,
    /// Pipe table with a divider row.
    Table,
}
