//! # Block Kinds
//!
//! Block-specific types that own their syntax markers. The classifier and the
//! renderer call into these; neither hardcodes `#`, `>`, `|` or a fence.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceInfo};
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use paragraph::Paragraph;
pub use rule::HorizontalRule;
pub use table::{Alignment, Table};
