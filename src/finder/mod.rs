//! Finder Module - Single-Pass Tree Search
//!
//! [`ElementFinder`] runs every registered matcher over a tree in one
//! pre-order traversal:
//! - matchers reporting a fixed tag set are indexed by tag, so only the
//!   bucket for the current element's tag is consulted
//! - ignore-matchers prune whole subtrees before any matching happens
//! - traversal uses an explicit stack, so document depth is bounded by
//!   memory rather than by the call stack
//!
//! The tag index is rebuilt on every search call; matchers may be
//! registered between calls.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::dom::{DocumentAccess, NodeId};
use crate::matcher::ElementMatcher;

/// Handle for a registered match-matcher; keys its search results
pub type MatcherId = u32;

/// Per-matcher search results for one `find_elements` call
///
/// Every registered match-matcher has an entry, in registration order,
/// even when it matched nothing. Within an entry, elements appear in
/// document pre-order.
#[derive(Debug, Default)]
pub struct FindResults {
    per_matcher: Vec<Vec<NodeId>>,
}

impl FindResults {
    /// Elements matched by the given matcher, in document pre-order
    pub fn matches(&self, matcher: MatcherId) -> &[NodeId] {
        self.per_matcher
            .get(matcher as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// Iterate over all (matcher, matches) entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = (MatcherId, &[NodeId])> {
        self.per_matcher
            .iter()
            .enumerate()
            .map(|(index, matches)| (index as MatcherId, matches.as_slice()))
    }

    /// Number of registered match-matchers this result covers
    pub fn matcher_count(&self) -> usize {
        self.per_matcher.len()
    }

    /// Total number of matches across all matchers
    pub fn total_matches(&self) -> usize {
        self.per_matcher.iter().map(Vec::len).sum()
    }
}

/// Tag-indexed view over one matcher list, rebuilt per search
///
/// Holds indices into the matcher list: a bucket per declared tag plus
/// an unscoped fallback for matchers that must see every element.
struct MatcherIndex<'a> {
    by_tag: HashMap<&'a str, Vec<usize>>,
    unscoped: Vec<usize>,
}

impl<'a> MatcherIndex<'a> {
    fn build<D: DocumentAccess>(matchers: &'a [Box<dyn ElementMatcher<D>>]) -> Self {
        let mut by_tag: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut unscoped = Vec::new();
        for (index, matcher) in matchers.iter().enumerate() {
            match matcher.scoped_tags() {
                Some(tags) => {
                    for tag in tags {
                        by_tag.entry(tag.as_str()).or_default().push(index);
                    }
                }
                None => unscoped.push(index),
            }
        }
        MatcherIndex { by_tag, unscoped }
    }

    /// Matcher indices applicable to an element with this lowercased
    /// tag: unscoped matchers first, then the tag bucket, each in
    /// registration order
    fn applicable<'s>(&'s self, tag: &str) -> impl Iterator<Item = usize> + 's {
        self.unscoped
            .iter()
            .chain(self.by_tag.get(tag).into_iter().flatten())
            .copied()
    }
}

/// Single-pass element search engine
///
/// Holds two matcher lists: ignore-matchers, whose first hit on an
/// element excludes the element and its entire subtree, and
/// match-matchers, whose hits accumulate into [`FindResults`]. A search
/// never mutates the finder, so one configured finder can serve many
/// trees.
pub struct ElementFinder<D: DocumentAccess> {
    ignore_matchers: Vec<Box<dyn ElementMatcher<D>>>,
    matchers: Vec<Box<dyn ElementMatcher<D>>>,
}

impl<D: DocumentAccess> ElementFinder<D> {
    /// Create a finder with no matchers registered
    pub fn new() -> Self {
        ElementFinder {
            ignore_matchers: Vec::new(),
            matchers: Vec::new(),
        }
    }

    /// Register an ignore-matcher
    ///
    /// An element it matches is excluded from all results along with
    /// every descendant, even descendants a match-matcher would accept.
    pub fn add_ignore_matcher(&mut self, matcher: impl ElementMatcher<D> + 'static) {
        self.ignore_matchers.push(Box::new(matcher));
    }

    /// Register a match-matcher, returning the id that keys its results
    pub fn add_matcher(&mut self, matcher: impl ElementMatcher<D> + 'static) -> MatcherId {
        self.matchers.push(Box::new(matcher));
        (self.matchers.len() - 1) as MatcherId
    }

    /// Number of registered match-matchers
    pub fn matcher_count(&self) -> usize {
        self.matchers.len()
    }

    /// Number of registered ignore-matchers
    pub fn ignore_matcher_count(&self) -> usize {
        self.ignore_matchers.len()
    }

    /// Find all elements under `root` matching each registered
    /// match-matcher
    ///
    /// One pre-order pass over the tree. An element may be matched by
    /// several matchers and lands in each of their result lists; result
    /// lists are not mutually exclusive. The root itself is a candidate
    /// for both ignoring and matching.
    #[must_use = "search results should be used"]
    pub fn find_elements(&self, doc: &D, root: NodeId) -> FindResults {
        let ignore_index = MatcherIndex::build(&self.ignore_matchers);
        let match_index = MatcherIndex::build(&self.matchers);
        let mut results: Vec<Vec<NodeId>> = vec![Vec::new(); self.matchers.len()];

        debug!(
            matchers = self.matchers.len(),
            ignore_matchers = self.ignore_matchers.len(),
            "starting element search"
        );

        let mut stack = vec![root];
        while let Some(element) = stack.pop() {
            // Comments, text, and processing instructions carry no tag;
            // skip them and everything below them.
            let Some(tag) = doc.node_name(element) else {
                continue;
            };
            let tag = tag.to_lowercase();

            if ignore_index
                .applicable(&tag)
                .any(|index| self.ignore_matchers[index].matches(doc, element))
            {
                trace!(element, tag = %tag, "subtree ignored");
                continue;
            }

            // Children pushed in reverse so they pop in source order
            let mut children = doc.children_vec(element);
            children.reverse();
            stack.extend(children);

            for index in match_index.applicable(&tag) {
                if self.matchers[index].matches(doc, element) {
                    results[index].push(element);
                }
            }
        }

        let results = FindResults {
            per_matcher: results,
        };
        debug!(total_matches = results.total_matches(), "element search finished");
        results
    }
}

impl<D: DocumentAccess> Default for ElementFinder<D> {
    fn default() -> Self {
        Self::new()
    }
}
