//! # Block Parsing
//!
//! Three passes turn a document into top-level [`Node`](crate::html::Node)s.
//!
//! ## Phases
//!
//! 1. **Splitting** (`split`): `BlockSplitter` cuts the document into trimmed
//!    block strings at blank lines, keeping fenced code regions whole
//! 2. **Classification** (`classify`): `BlockClassifier` assigns each block a
//!    `BlockKind` from prefix and shape rules
//! 3. **Rendering** (`render`): `BlockRenderer` builds the node for a block,
//!    leaving raw markdown in node values for the inline pass
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence, Table, ...)
//! - **`split`**: `BlockSplitter` line scanner
//! - **`classify`**: `BlockClassifier` priority rules
//! - **`render`**: `BlockRenderer` node construction
//!
//! ## Key Invariants
//!
//! - A block boundary never falls inside a closed fenced region
//! - Every block string is non-empty and trimmed
//! - Classification is total; only table rendering can fail

pub mod classify;
pub mod kinds;
pub mod render;
pub mod split;
pub mod types;

pub use classify::BlockClassifier;
pub use render::BlockRenderer;
pub use split::{BlockSplitter, split_blocks};
pub use types::BlockKind;
