//! siftml - Predicate search over parsed markup trees
//!
//! Given a parsed document tree, find every element satisfying any
//! number of independently registered matchers in a single pre-order
//! traversal, with ignore-matchers pruning whole subtrees from
//! consideration.
//!
//! Pieces:
//! - `dom`: the tree boundary ([`DocumentAccess`]) and a bundled
//!   arena-backed [`Document`]
//! - `matcher`: the [`ElementMatcher`] trait and the bundled tag and
//!   attribute-substring matchers
//! - `finder`: the [`ElementFinder`] engine and its results
//!
//! This crate does not parse markup text; it consumes trees that are
//! already parsed, either through the bundled [`Document`] builder or
//! through a [`DocumentAccess`] implementation over an existing tree.
//!
//! ```
//! use siftml::{Document, ElementFinder, TagMatcher};
//!
//! let mut doc = Document::new();
//! let html = doc.add_element(Document::DOCUMENT_ROOT, "html", &[]);
//! let body = doc.add_element(html, "body", &[]);
//! let h1 = doc.add_element(body, "h1", &[]);
//! doc.add_element(body, "p", &[]);
//!
//! let mut finder = ElementFinder::new();
//! let headings = finder.add_matcher(TagMatcher::new(["h1", "h2"]).unwrap());
//! let results = finder.find_elements(&doc, html);
//! assert_eq!(results.matches(headings), &[h1]);
//! ```

pub mod dom;
pub mod error;
pub mod finder;
pub mod matcher;

pub use dom::{Document, DocumentAccess, NodeId, NodeKind};
pub use error::Error;
pub use finder::{ElementFinder, FindResults, MatcherId};
pub use matcher::{
    AttributeSubstringTagMatcher, ElementMatcher, IntoNameSet, NoAttributesTagMatcher, TagMatcher,
};
