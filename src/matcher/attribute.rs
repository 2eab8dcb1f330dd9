//! Attribute-substring matcher

use std::collections::BTreeSet;

use memchr::memmem;

use super::{ElementMatcher, IntoNameSet, TagMatcher};
use crate::dom::{DocumentAccess, NodeId};
use crate::error::Error;

/// Refines [`TagMatcher`] with substring constraints over attribute
/// values
///
/// The matcher holds a set of attribute names and three substring sets.
/// It matches when the tag matches and at least one configured attribute
/// is present whose lowercased value:
/// - contains every substring in the "all" set,
/// - contains none of the "disallowed" set,
/// - and, if the "any" set is non-empty, contains at least one of it.
///
/// Each attribute is evaluated independently; a single attribute
/// satisfying all three conditions is sufficient. An empty "any" set
/// means no any-constraint, not an unsatisfiable one.
///
/// All names and substrings are lowercased when supplied and frozen
/// afterwards.
#[derive(Debug, Clone)]
pub struct AttributeSubstringTagMatcher {
    tags: TagMatcher,
    attributes: BTreeSet<String>,
    all_substrings: BTreeSet<String>,
    any_substrings: BTreeSet<String>,
    disallowed_substrings: BTreeSet<String>,
}

fn contains(haystack: &str, needle: &str) -> bool {
    memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

fn collect_substrings<I, S>(substrings: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    substrings
        .into_iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect()
}

impl AttributeSubstringTagMatcher {
    /// Create a matcher over the given tags and attribute names, with
    /// no substring constraints yet
    ///
    /// Both arguments follow the [`TagMatcher::new`] rules for bare
    /// strings; the attribute set may be empty (such a matcher simply
    /// never matches).
    pub fn new(tags: impl IntoNameSet, attributes: impl IntoNameSet) -> Result<Self, Error> {
        Ok(AttributeSubstringTagMatcher {
            tags: TagMatcher::new(tags)?,
            attributes: attributes.into_name_set()?,
            all_substrings: BTreeSet::new(),
            any_substrings: BTreeSet::new(),
            disallowed_substrings: BTreeSet::new(),
        })
    }

    /// Require every one of these substrings in the attribute value
    pub fn with_all_substrings<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.all_substrings = collect_substrings(substrings);
        self
    }

    /// Require at least one of these substrings in the attribute value
    pub fn with_any_substrings<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.any_substrings = collect_substrings(substrings);
        self
    }

    /// Forbid every one of these substrings in the attribute value
    pub fn with_disallowed_substrings<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disallowed_substrings = collect_substrings(substrings);
        self
    }

    fn value_satisfies(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.all_substrings.iter().all(|ss| contains(&value, ss))
            && !self
                .disallowed_substrings
                .iter()
                .any(|ss| contains(&value, ss))
            && (self.any_substrings.is_empty()
                || self.any_substrings.iter().any(|ss| contains(&value, ss)))
    }
}

impl<D: DocumentAccess> ElementMatcher<D> for AttributeSubstringTagMatcher {
    fn matches(&self, doc: &D, element: NodeId) -> bool {
        if !self.tags.matches_tag(doc, element) {
            return false;
        }
        self.attributes.iter().any(|attr| {
            doc.get_attribute(element, attr)
                .is_some_and(|value| self.value_satisfies(value))
        })
    }

    fn scoped_tags(&self) -> Option<&BTreeSet<String>> {
        Some(self.tags.tags())
    }
}
