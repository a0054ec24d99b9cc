#![doc = include_str!("../README.md")]

pub mod canonicalizer;
pub mod decode;
pub mod error;
pub mod fields;
pub mod node;
mod rules;

pub use canonicalizer::{Canonicalizer, CanonicalizerBuilder, Coverage, StringValues};
pub use error::{CanonicalizeError, CanonicalizeResult, ErrorKind};
pub use node::{AttrValue, CanonicalNode};

use phpcanon_ast::Node;

/// Canonicalizes a tree with the default configuration
#[inline]
pub fn canonicalize(node: &Node) -> CanonicalizeResult<CanonicalNode> {
    Canonicalizer::default().canonicalize(node)
}
