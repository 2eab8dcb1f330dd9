//! End-to-end search scenarios through the public API

use pretty_assertions::assert_eq;
use siftml::{
    AttributeSubstringTagMatcher, Document, DocumentAccess, ElementFinder, ElementMatcher, Error,
    NoAttributesTagMatcher, NodeId, TagMatcher,
};

/// html > body > (h1, h2, h3) with text under each heading
fn headings_doc() -> (Document, NodeId, [NodeId; 3]) {
    let mut doc = Document::new();
    let html = doc.add_element(Document::DOCUMENT_ROOT, "html", &[]);
    let body = doc.add_element(html, "body", &[]);
    let h1 = doc.add_element(body, "h1", &[]);
    doc.add_text(h1, "str1");
    let h2 = doc.add_element(body, "h2", &[]);
    doc.add_text(h2, "str2");
    let h3 = doc.add_element(body, "h3", &[]);
    doc.add_text(h3, "str3");
    (doc, html, [h1, h2, h3])
}

#[test]
fn finds_heading_elements_in_document_order() {
    let (doc, html, [h1, _, h3]) = headings_doc();

    let mut finder = ElementFinder::new();
    let headings = finder.add_matcher(TagMatcher::new(["h1", "h3"]).unwrap());
    let results = finder.find_elements(&doc, html);

    assert_eq!(results.matches(headings), &[h1, h3]);
    assert_eq!(doc.node_name(results.matches(headings)[0]), Some("h1"));
    assert_eq!(doc.node_name(results.matches(headings)[1]), Some("h3"));
}

#[test]
fn ignore_matcher_excludes_whole_subtree() {
    // html > body > div > h1: the div ignore swallows the h1
    let mut doc = Document::new();
    let html = doc.add_element(Document::DOCUMENT_ROOT, "html", &[]);
    let body = doc.add_element(html, "body", &[]);
    let div = doc.add_element(body, "div", &[]);
    doc.add_element(div, "h1", &[]);

    let mut finder = ElementFinder::new();
    let headings = finder.add_matcher(TagMatcher::new(["h1"]).unwrap());
    finder.add_ignore_matcher(TagMatcher::new(["div"]).unwrap());
    let results = finder.find_elements(&doc, html);

    assert_eq!(results.matches(headings), &[] as &[NodeId]);
}

#[test]
fn commented_out_markup_is_not_searched() {
    let mut doc = Document::new();
    let html = doc.add_element(Document::DOCUMENT_ROOT, "html", &[]);
    let body = doc.add_element(html, "body", &[]);
    doc.add_comment(body, "<h1>str1</h1>");

    let mut finder = ElementFinder::new();
    let headings = finder.add_matcher(TagMatcher::new(["h1"]).unwrap());
    let results = finder.find_elements(&doc, html);

    assert_eq!(results.matches(headings).len(), 0);
}

#[test]
fn attribute_substring_scenario() {
    let matcher = AttributeSubstringTagMatcher::new(["a"], ["href"])
        .unwrap()
        .with_all_substrings(["all1", "all2"])
        .with_any_substrings(["any1", "any2"])
        .with_disallowed_substrings(["bad1", "bad2"]);

    let mut doc = Document::new();
    let html = doc.add_element(Document::DOCUMENT_ROOT, "html", &[]);
    let good = doc.add_element(html, "a", &[("href", "all1 all2 any1")]);
    doc.add_element(html, "a", &[("href", "all1 any1")]);
    doc.add_element(html, "a", &[("href", "all1 all2 any1 bad1")]);

    let mut finder = ElementFinder::new();
    let links = finder.add_matcher(matcher);
    let results = finder.find_elements(&doc, html);

    assert_eq!(results.matches(links), &[good]);
}

#[test]
fn mixed_matchers_share_one_traversal() {
    let mut doc = Document::new();
    let html = doc.add_element(Document::DOCUMENT_ROOT, "html", &[]);
    let body = doc.add_element(html, "body", &[]);
    let bare = doc.add_element(body, "span", &[]);
    let styled = doc.add_element(body, "span", &[("class", "note")]);
    let link = doc.add_element(body, "a", &[("href", "str1 str2")]);

    let mut finder = ElementFinder::new();
    let spans = finder.add_matcher(TagMatcher::new(["span"]).unwrap());
    let bare_spans = finder.add_matcher(NoAttributesTagMatcher::new(["span"]).unwrap());
    let links = finder.add_matcher(
        AttributeSubstringTagMatcher::new(["a"], ["href"])
            .unwrap()
            .with_all_substrings(["str1"]),
    );
    let results = finder.find_elements(&doc, html);

    assert_eq!(results.matches(spans), &[bare, styled]);
    assert_eq!(results.matches(bare_spans), &[bare]);
    assert_eq!(results.matches(links), &[link]);
    assert_eq!(results.total_matches(), 4);
}

#[test]
fn case_insensitive_search() {
    let mut doc = Document::new();
    let html = doc.add_element(Document::DOCUMENT_ROOT, "HTML", &[]);
    let h1 = doc.add_element(html, "h1", &[]);
    let link = doc.add_element(html, "A", &[("href", "str1 str2")]);

    let mut finder = ElementFinder::new();
    let headings = finder.add_matcher(TagMatcher::new(["H1"]).unwrap());
    let links = finder.add_matcher(
        AttributeSubstringTagMatcher::new(["a"], ["href"])
            .unwrap()
            .with_all_substrings(["Str1"]),
    );
    let results = finder.find_elements(&doc, html);

    assert_eq!(results.matches(headings), &[h1]);
    assert_eq!(results.matches(links), &[link]);
}

#[test]
fn bare_string_construction_fails_fast() {
    let err = TagMatcher::new("h1 h2 h3").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("collection"));
}

#[test]
fn every_registered_matcher_appears_in_results() {
    let (doc, html, _) = headings_doc();

    let mut finder = ElementFinder::new();
    let ids: Vec<_> = ["h1", "h2", "table", "td"]
        .iter()
        .map(|tag| finder.add_matcher(TagMatcher::new([*tag]).unwrap()))
        .collect();
    let results = finder.find_elements(&doc, html);

    assert_eq!(results.matcher_count(), 4);
    let lens: Vec<usize> = ids.iter().map(|&id| results.matches(id).len()).collect();
    assert_eq!(lens, vec![1, 1, 0, 0]);
}

#[test]
fn finder_is_reusable_across_documents() {
    let mut finder = ElementFinder::new();
    let headings = finder.add_matcher(TagMatcher::new(["h1"]).unwrap());

    let (doc_a, root_a, [h1_a, _, _]) = headings_doc();
    let results_a = finder.find_elements(&doc_a, root_a);
    assert_eq!(results_a.matches(headings), &[h1_a]);

    let mut doc_b = Document::new();
    let root_b = doc_b.add_element(Document::DOCUMENT_ROOT, "html", &[]);
    let results_b = finder.find_elements(&doc_b, root_b);
    assert_eq!(results_b.matches(headings), &[] as &[NodeId]);
}

/// Matcher over a caller-defined tree, proving the engine only needs
/// the `DocumentAccess` surface
struct SliceTree {
    // (tag or None for a comment, children indices)
    nodes: Vec<(Option<&'static str>, Vec<NodeId>)>,
}

impl DocumentAccess for SliceTree {
    fn node_kind_of(&self, id: NodeId) -> Option<siftml::NodeKind> {
        self.nodes.get(id as usize).map(|(tag, _)| match tag {
            Some(_) => siftml::NodeKind::Element,
            None => siftml::NodeKind::Comment,
        })
    }

    fn node_name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id as usize).and_then(|(tag, _)| *tag)
    }

    fn get_attribute(&self, _id: NodeId, _name: &str) -> Option<&str> {
        None
    }

    fn attribute_count(&self, _id: NodeId) -> usize {
        0
    }

    fn attribute_values(&self, _id: NodeId) -> Vec<(&str, &str)> {
        Vec::new()
    }

    fn children_vec(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(id as usize)
            .map(|(_, children)| children.clone())
            .unwrap_or_default()
    }
}

#[test]
fn engine_works_over_a_foreign_tree() {
    // 0:root > (1:comment, 2:item > 3:item)
    let tree = SliceTree {
        nodes: vec![
            (Some("root"), vec![1, 2]),
            (None, vec![]),
            (Some("item"), vec![3]),
            (Some("item"), vec![]),
        ],
    };

    let mut finder = ElementFinder::new();
    let items = finder.add_matcher(TagMatcher::new(["item"]).unwrap());
    let results = finder.find_elements(&tree, 0);

    assert_eq!(results.matches(items), &[2, 3]);
}

#[test]
fn custom_matchers_compose_with_bundled_ones() {
    struct HasChildren;

    impl ElementMatcher<Document> for HasChildren {
        fn matches(&self, doc: &Document, element: NodeId) -> bool {
            !doc.children_vec(element).is_empty()
        }
    }

    let (doc, html, [h1, h2, h3]) = headings_doc();
    let body = doc.children_vec(html)[0];

    let mut finder = ElementFinder::new();
    let parents = finder.add_matcher(HasChildren);
    let headings = finder.add_matcher(TagMatcher::new(["h2"]).unwrap());
    let results = finder.find_elements(&doc, html);

    // html and body have element children, each heading has a text child
    assert_eq!(results.matches(parents), &[html, body, h1, h2, h3]);
    assert_eq!(results.matches(headings), &[h2]);
}
