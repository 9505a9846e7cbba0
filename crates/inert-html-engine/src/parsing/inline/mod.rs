//! # Inline Parsing
//!
//! Turns the raw markdown left in node values by the block renderer into
//! typed child nodes.
//!
//! ## Rule Order
//!
//! Each rule only sees text that earlier rules left open:
//! 1. images `![alt](url)`
//! 2. links `[text](url)`
//! 3. code spans `` `code` `` (raw zone: nothing splits their content)
//! 4. bold `**`, then `__`
//! 5. italic `*`, then `_`
//!
//! A delimiter preceded by an odd number of backslashes is escaped. A
//! fragment with an unmatched delimiter stays literal and no later rule
//! touches it.
//!
//! Nested emphasis resolves by recursion: [`process_node`] re-parses the
//! value of every `strong`, `em` and `a` child it creates.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Text, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte scanning with escape detection
//! - **`parser`**: `parse_spans()` and `process_node()`
//! - **`unescape`**: backslash removal, run after all splitting

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;
pub mod unescape;

pub use parser::{SpanParse, parse_spans, process_node};
pub use types::Span;
pub use unescape::{unescape, unescape_node};
