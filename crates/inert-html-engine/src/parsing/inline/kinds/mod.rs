//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = "\`"` - raw zone that suppresses other parsing
//! - **`Strong`**: `**` and `__`
//! - **`Emphasis`**: `*` and `_`
//! - **`Image`** / **`Link`**: `![alt](url)` and `[text](url)` patterns
//!
//! The parser calls these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::{Image, Link, LinkMatch};
