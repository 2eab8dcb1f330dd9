//! DOM Module - Markup Tree Abstraction
//!
//! The search engine never owns a tree; it consumes anything exposing:
//! - a node kind distinguishing elements from comments, text, and
//!   processing instructions
//! - a tag name for element nodes
//! - attribute name/value pairs
//! - an ordered child list
//!
//! [`Document`] is the bundled arena-backed implementation for callers
//! (and tests) that need a tree without bringing their own parser.

pub mod document;
pub mod node;
pub mod strings;

pub use document::Document;
pub use node::{DomAttribute, DomNode, NodeId, NodeKind};
pub use strings::StringPool;

/// Trait for tree access - enables matching to work over any parse tree
pub trait DocumentAccess {
    /// Get the kind of a node, or None for an id not in the tree
    fn node_kind_of(&self, id: NodeId) -> Option<NodeKind>;

    /// Get the tag name of an element node
    ///
    /// Returns None for non-element nodes; this is the marker the
    /// engine uses to skip comments and processing instructions.
    fn node_name(&self, id: NodeId) -> Option<&str>;

    /// Get an attribute value by exact name
    fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str>;

    /// Number of attributes on a node
    fn attribute_count(&self, id: NodeId) -> usize;

    /// All attribute names and values, in document order
    fn attribute_values(&self, id: NodeId) -> Vec<(&str, &str)>;

    /// Iterate over children - returns collected Vec for trait object compatibility
    fn children_vec(&self, id: NodeId) -> Vec<NodeId>;
}
