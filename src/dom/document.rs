//! Arena-based markup document
//!
//! A concrete tree implementing [`DocumentAccess`], built node by node.
//! Parsing markup text is out of scope for this crate; callers either
//! build a `Document` programmatically or implement `DocumentAccess`
//! over their own parse tree.

use super::node::{DomAttribute, DomNode, NodeId, NodeKind};
use super::strings::StringPool;
use super::DocumentAccess;

/// An arena-backed markup tree
///
/// Nodes live in a single `Vec` and reference each other through
/// `NodeId` indices; attributes live contiguously per element in a
/// shared attribute arena; all names and values are interned.
///
/// Node 0 is always the synthetic document root. Builder methods take a
/// parent `NodeId` previously returned by this document and panic on a
/// foreign id.
#[derive(Debug)]
pub struct Document {
    /// Node arena; index 0 is the document root
    nodes: Vec<DomNode>,
    /// Attribute arena; elements hold (attr_start, attr_count) ranges
    attrs: Vec<DomAttribute>,
    /// Interned names, values, and text content
    strings: StringPool,
}

impl Document {
    /// The synthetic document root node
    pub const DOCUMENT_ROOT: NodeId = 0;

    /// Create an empty document containing only the document root
    pub fn new() -> Self {
        Document {
            nodes: vec![DomNode::document()],
            attrs: Vec::new(),
            strings: StringPool::new(),
        }
    }

    /// Link `child` as the last child of `parent`
    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last = self.nodes[parent as usize].last_child;
        match prev_last {
            Some(last) => self.nodes[last as usize].next_sibling = Some(child),
            None => self.nodes[parent as usize].first_child = Some(child),
        }
        self.nodes[parent as usize].last_child = Some(child);
    }

    fn child_depth(&self, parent: NodeId) -> u16 {
        self.nodes[parent as usize].depth.saturating_add(1)
    }

    /// Add an element with the given tag and attributes under `parent`
    ///
    /// The tag and attributes are stored verbatim; case normalization is
    /// a matcher concern, not a tree concern.
    pub fn add_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        let name_id = self.strings.intern(tag);
        let depth = self.child_depth(parent);

        let attr_start = self.attrs.len() as u32;
        for &(name, value) in attributes {
            let name_id = self.strings.intern(name);
            let value_id = self.strings.intern(value);
            self.attrs.push(DomAttribute::new(name_id, value_id));
        }

        let id = self.nodes.len() as NodeId;
        let mut node = DomNode::element(name_id, Some(parent), depth);
        node.attr_start = attr_start;
        node.attr_count = attributes.len() as u16;
        self.nodes.push(node);
        self.append_child(parent, id);
        id
    }

    /// Add a text node under `parent`
    pub fn add_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let name_id = self.strings.intern(text);
        let depth = self.child_depth(parent);
        let id = self.nodes.len() as NodeId;
        self.nodes.push(DomNode::text(name_id, Some(parent), depth));
        self.append_child(parent, id);
        id
    }

    /// Add a comment node under `parent`
    pub fn add_comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        let name_id = self.strings.intern(text);
        let depth = self.child_depth(parent);
        let id = self.nodes.len() as NodeId;
        self.nodes.push(DomNode::comment(name_id, Some(parent), depth));
        self.append_child(parent, id);
        id
    }

    /// Add a processing instruction node under `parent`
    pub fn add_processing_instruction(&mut self, parent: NodeId, target: &str) -> NodeId {
        let name_id = self.strings.intern(target);
        let depth = self.child_depth(parent);
        let id = self.nodes.len() as NodeId;
        self.nodes
            .push(DomNode::processing_instruction(name_id, Some(parent), depth));
        self.append_child(parent, id);
        id
    }

    /// Get the first element child of the document root, if any
    pub fn root_element_id(&self) -> Option<NodeId> {
        self.children_vec(Self::DOCUMENT_ROOT)
            .into_iter()
            .find(|&id| self.nodes[id as usize].is_element())
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&DomNode> {
        self.nodes.get(id as usize)
    }

    /// Text content of a text or comment node
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        let node = self.nodes.get(id as usize)?;
        match node.kind {
            NodeKind::Text | NodeKind::Comment => self.strings.get(node.name_id),
            _ => None,
        }
    }

    /// Total node count, including the document root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the document holds nothing beyond the document root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn attr_range(&self, node: &DomNode) -> &[DomAttribute] {
        let start = node.attr_start as usize;
        let end = start + node.attr_count as usize;
        &self.attrs[start..end]
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAccess for Document {
    fn node_kind_of(&self, id: NodeId) -> Option<NodeKind> {
        self.nodes.get(id as usize).map(|n| n.kind)
    }

    fn node_name(&self, id: NodeId) -> Option<&str> {
        let node = self.nodes.get(id as usize)?;
        if node.is_element() {
            self.strings.get(node.name_id)
        } else {
            None
        }
    }

    fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let node = self.nodes.get(id as usize)?;
        self.attr_range(node)
            .iter()
            .find(|attr| self.strings.get(attr.name_id) == Some(name))
            .and_then(|attr| self.strings.get(attr.value_id))
    }

    fn attribute_count(&self, id: NodeId) -> usize {
        self.nodes
            .get(id as usize)
            .map_or(0, |n| n.attr_count as usize)
    }

    fn attribute_values(&self, id: NodeId) -> Vec<(&str, &str)> {
        let Some(node) = self.nodes.get(id as usize) else {
            return Vec::new();
        };
        self.attr_range(node)
            .iter()
            .filter_map(|attr| {
                let name = self.strings.get(attr.name_id)?;
                let value = self.strings.get(attr.value_id)?;
                Some((name, value))
            })
            .collect()
    }

    fn children_vec(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let Some(node) = self.nodes.get(id as usize) else {
            return result;
        };
        let mut child = node.first_child;
        while let Some(child_id) = child {
            result.push(child_id);
            child = self.nodes[child_id as usize].next_sibling;
        }
        result
    }
}
