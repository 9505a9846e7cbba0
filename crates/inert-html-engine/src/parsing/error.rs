/// Recoverable problems found while converting a document.
///
/// None of these abort a conversion: the affected fragment or block is
/// rendered as literal text and the error is reported as a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unmatched delimiter `{delimiter}` in \"{fragment}\"")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        fragment: String,
    },
    #[error("table row {row} has {found} cells, expected {expected}")]
    MalformedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A [`ParseError`] tagged with the index of the block it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub block: usize,
    pub error: ParseError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "block {}: {}", self.block + 1, self.error)
    }
}
