pub mod generator;
pub mod html;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use generator::{
    GenerateError, GenerateOptions, GenerateSummary, Generator, OverwritePolicy, OverwritePrompt,
    PageOutcome, Target, Template, resolve_target,
};
pub use html::Node;
pub use io::IoError;
pub use parsing::{Diagnostic, ParseError, ParsedDoc, Rendered, markdown_to_html, parse_document};
