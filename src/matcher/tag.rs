//! Tag-set matchers

use std::collections::BTreeSet;

use super::{ElementMatcher, IntoNameSet};
use crate::dom::{DocumentAccess, NodeId};
use crate::error::Error;

/// Matches elements whose tag is in a fixed, case-insensitive set
///
/// The tag set is lowercased at construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    tags: BTreeSet<String>,
}

impl TagMatcher {
    /// Create a matcher for the given tag collection
    ///
    /// Fails with [`Error::InvalidArgument`] when given a bare string
    /// instead of a collection, or when the collection is empty.
    pub fn new(tags: impl IntoNameSet) -> Result<Self, Error> {
        let tags = tags.into_name_set()?;
        if tags.is_empty() {
            return Err(Error::InvalidArgument(
                "the tag set must not be empty".to_string(),
            ));
        }
        Ok(TagMatcher { tags })
    }

    /// The normalized (lowercase) tag set
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Tag-only test, shared with the refining matchers
    pub fn matches_tag<D: DocumentAccess>(&self, doc: &D, element: NodeId) -> bool {
        match doc.node_name(element) {
            Some(tag) => self.tags.contains(&tag.to_lowercase()),
            None => false,
        }
    }
}

impl<D: DocumentAccess> ElementMatcher<D> for TagMatcher {
    fn matches(&self, doc: &D, element: NodeId) -> bool {
        self.matches_tag(doc, element)
    }

    fn scoped_tags(&self) -> Option<&BTreeSet<String>> {
        Some(&self.tags)
    }
}

/// Refines [`TagMatcher`]: the tag must match and the element must
/// carry no attributes at all
#[derive(Debug, Clone)]
pub struct NoAttributesTagMatcher {
    tags: TagMatcher,
}

impl NoAttributesTagMatcher {
    /// Create a matcher for the given tag collection
    ///
    /// Same construction rules as [`TagMatcher::new`].
    pub fn new(tags: impl IntoNameSet) -> Result<Self, Error> {
        Ok(NoAttributesTagMatcher {
            tags: TagMatcher::new(tags)?,
        })
    }
}

impl<D: DocumentAccess> ElementMatcher<D> for NoAttributesTagMatcher {
    fn matches(&self, doc: &D, element: NodeId) -> bool {
        doc.attribute_count(element) == 0 && self.tags.matches_tag(doc, element)
    }

    fn scoped_tags(&self) -> Option<&BTreeSet<String>> {
        Some(self.tags.tags())
    }
}
