//! # HTML Node Tree
//!
//! The output side of the converter: a plain owned tree of [`Node`]s that
//! serializes itself to an HTML string. Text is written verbatim, so raw
//! HTML embedded in markdown passes through untouched.

pub mod node;

pub use node::Node;
