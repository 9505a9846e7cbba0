use crate::html::Node;

/// Characters a backslash can escape.
const ESCAPABLE: [char; 4] = ['*', '_', '`', '\\'];

/// Removes one level of backslash-escaping in a single left-to-right pass.
///
/// Only `\*`, `\_`, `` \` `` and `\\` are rewritten; any other backslash is
/// kept.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && ESCAPABLE.contains(&next)
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

/// Unescapes every text value in the subtree, children first.
///
/// Only literal text is rewritten. `pre` and `code` subtrees hold source code,
/// not text spans, and keep their backslashes exactly as written.
pub fn unescape_node(node: &mut Node) {
    if node.is_verbatim() {
        return;
    }
    for child in &mut node.children {
        unescape_node(child);
    }
    if node.value.contains('\\') {
        node.value = unescape(&node.value);
    }
}
