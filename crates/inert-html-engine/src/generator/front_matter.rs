const OPEN: &str = "---\n";
const CLOSE: &str = "\n---";

/// Removes a leading `---` front matter block.
///
/// The document must start with `---\n` and contain a later line starting
/// with `---`; everything through that marker and the newlines after it is
/// dropped. The front matter itself is ignored. Any other text is returned
/// unchanged.
pub fn strip_front_matter(text: &str) -> &str {
    if !text.starts_with(OPEN) {
        return text;
    }

    // Keep the opening newline so an empty block closes immediately.
    let searched = &text[OPEN.len() - 1..];
    match searched.find(CLOSE) {
        Some(end) => searched[end + CLOSE.len()..].trim_start_matches(['\r', '\n']),
        None => text,
    }
}
