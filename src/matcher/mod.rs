//! Matcher Module - Element Predicates
//!
//! A matcher is a stateless boolean test applied to a single element.
//! The bundled matchers:
//! - [`TagMatcher`]: tag-set membership
//! - [`NoAttributesTagMatcher`]: tag-set membership plus zero attributes
//! - [`AttributeSubstringTagMatcher`]: tag-set membership plus substring
//!   constraints over attribute values
//!
//! Custom matchers implement [`ElementMatcher`] directly; ones that can
//! only ever match a fixed set of tags should also report that set from
//! `scoped_tags` so the finder can dispatch them by tag instead of
//! running them on every element.

pub mod attribute;
pub mod tag;

use std::collections::{BTreeSet, HashSet};

use crate::dom::{DocumentAccess, NodeId};
use crate::error::Error;

pub use attribute::AttributeSubstringTagMatcher;
pub use tag::{NoAttributesTagMatcher, TagMatcher};

/// An element predicate, generic over the tree it inspects
///
/// Implementations must be pure: no side effects, no tree mutation, and
/// the same answer for the same element every call.
pub trait ElementMatcher<D: DocumentAccess> {
    /// Test a single element
    fn matches(&self, doc: &D, element: NodeId) -> bool;

    /// The fixed set of lowercase tags this matcher can ever match
    ///
    /// `None` means the matcher must be evaluated against every element.
    /// Returning `Some` lets the finder index the matcher by tag.
    fn scoped_tags(&self) -> Option<&BTreeSet<String>> {
        None
    }
}

/// Conversion of a matcher argument into a normalized name set
///
/// Implemented for string collections, which lowercase and deduplicate
/// their items. Also implemented for bare `&str` / `String` - those
/// conversions always fail with [`Error::InvalidArgument`], so a call
/// site that passes `"h1"` where `["h1"]` was meant fails fast instead
/// of silently misbehaving.
pub trait IntoNameSet {
    /// Produce the lowercase name set
    fn into_name_set(self) -> Result<BTreeSet<String>, Error>;
}

fn collect_names<I, S>(names: I) -> Result<BTreeSet<String>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(names
        .into_iter()
        .map(|name| name.as_ref().to_lowercase())
        .collect())
}

fn bare_string_error() -> Error {
    Error::InvalidArgument(
        "expected a collection of names, not a single string".to_string(),
    )
}

impl IntoNameSet for &str {
    fn into_name_set(self) -> Result<BTreeSet<String>, Error> {
        Err(bare_string_error())
    }
}

impl IntoNameSet for String {
    fn into_name_set(self) -> Result<BTreeSet<String>, Error> {
        Err(bare_string_error())
    }
}

impl IntoNameSet for &String {
    fn into_name_set(self) -> Result<BTreeSet<String>, Error> {
        Err(bare_string_error())
    }
}

impl<S: AsRef<str>> IntoNameSet for Vec<S> {
    fn into_name_set(self) -> Result<BTreeSet<String>, Error> {
        collect_names(self)
    }
}

impl<S: AsRef<str>> IntoNameSet for &[S] {
    fn into_name_set(self) -> Result<BTreeSet<String>, Error> {
        collect_names(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoNameSet for [S; N] {
    fn into_name_set(self) -> Result<BTreeSet<String>, Error> {
        collect_names(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoNameSet for &[S; N] {
    fn into_name_set(self) -> Result<BTreeSet<String>, Error> {
        collect_names(self)
    }
}

impl<S: AsRef<str>> IntoNameSet for BTreeSet<S> {
    fn into_name_set(self) -> Result<BTreeSet<String>, Error> {
        collect_names(self)
    }
}

impl<S: AsRef<str>> IntoNameSet for HashSet<S> {
    fn into_name_set(self) -> Result<BTreeSet<String>, Error> {
        collect_names(self)
    }
}
