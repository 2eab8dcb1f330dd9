//! Markup Node representation
//!
//! Uses NodeId (u32) for compact, cache-friendly node references.

/// Compact node identifier (index into arena)
pub type NodeId = u32;

/// Type of markup node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Element node
    Element,
    /// Text content
    Text,
    /// Comment
    Comment,
    /// Processing instruction
    ProcessingInstruction,
}

/// A markup node in the arena
#[derive(Debug, Clone)]
pub struct DomNode {
    /// Type of this node
    pub kind: NodeKind,
    /// Parent node (None for document root)
    pub parent: Option<NodeId>,
    /// First child node
    pub first_child: Option<NodeId>,
    /// Last child node
    pub last_child: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Index into string pool for tag name (elements, PI targets)
    /// or text content (text and comment nodes)
    pub name_id: u32,
    /// Start of attributes in attribute arena (for elements)
    pub attr_start: u32,
    /// Number of attributes
    pub attr_count: u16,
    /// Depth in document tree
    pub depth: u16,
}

impl DomNode {
    fn bare(kind: NodeKind, name_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        DomNode {
            kind,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
            name_id,
            attr_start: 0,
            attr_count: 0,
            depth,
        }
    }

    /// Create a new document root node
    pub fn document() -> Self {
        Self::bare(NodeKind::Document, 0, None, 0)
    }

    /// Create a new element node
    pub fn element(name_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        Self::bare(NodeKind::Element, name_id, parent, depth)
    }

    /// Create a new text node
    pub fn text(name_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        Self::bare(NodeKind::Text, name_id, parent, depth)
    }

    /// Create a new comment node
    pub fn comment(name_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        Self::bare(NodeKind::Comment, name_id, parent, depth)
    }

    /// Create a processing instruction node
    pub fn processing_instruction(name_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        Self::bare(NodeKind::ProcessingInstruction, name_id, parent, depth)
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if this node has children
    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    /// Check if this node has attributes
    #[inline]
    pub fn has_attributes(&self) -> bool {
        self.attr_count > 0
    }
}

/// Stored attribute: interned name and value
#[derive(Debug, Clone, Copy)]
pub struct DomAttribute {
    /// Index into string pool for attribute name
    pub name_id: u32,
    /// Index into string pool for attribute value
    pub value_id: u32,
}

impl DomAttribute {
    pub fn new(name_id: u32, value_id: u32) -> Self {
        DomAttribute { name_id, value_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_node() {
        let doc = DomNode::document();
        assert_eq!(doc.kind, NodeKind::Document);
        assert!(doc.parent.is_none());
        assert_eq!(doc.depth, 0);
    }

    #[test]
    fn test_element_node() {
        let elem = DomNode::element(1, Some(0), 1);
        assert_eq!(elem.kind, NodeKind::Element);
        assert_eq!(elem.parent, Some(0));
        assert_eq!(elem.name_id, 1);
        assert!(elem.is_element());
        assert!(!elem.has_children());
        assert!(!elem.has_attributes());
    }

    #[test]
    fn test_comment_node_is_not_element() {
        let comment = DomNode::comment(2, Some(0), 1);
        assert_eq!(comment.kind, NodeKind::Comment);
        assert!(!comment.is_element());
    }
}
