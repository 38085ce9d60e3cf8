use pinpoint_core::{DocumentQuery, QueryError, UniquenessResolver};
use pinpoint_dom::{Document, ElementData, NodeId};

fn doc(markup: &str) -> Document {
    Document::parse(markup).unwrap()
}

#[test]
fn test_single_match_is_unchanged() {
    let d = doc(r#"<input id="test" />"#);
    let input = d.get_element_by_id("test").unwrap();
    assert_eq!(
        UniquenessResolver::resolve(&d, input, "input[id='test']").as_deref(),
        Some("input[id='test']")
    );
}

#[test]
fn test_multiple_matches_get_nth_of_type() {
    let d = doc("<p>One</p><p>Two</p>");
    let ps = d.query_selector_all("p").unwrap();
    assert_eq!(
        UniquenessResolver::resolve(&d, ps[0], "p").as_deref(),
        Some("p:nth-of-type(1)")
    );
    assert_eq!(
        UniquenessResolver::resolve(&d, ps[1], "p").as_deref(),
        Some("p:nth-of-type(2)")
    );
}

#[test]
fn test_position_counts_siblings_not_matches() {
    // The target is the second `button` under its parent but the first match.
    let d = doc(r#"<form><button>Cancel</button><button name="go">Go</button></form><button name="go">Go</button>"#);
    let target = d.query_selector("form > button[name='go']").unwrap().unwrap();
    assert_eq!(
        UniquenessResolver::resolve(&d, target, "button[name='go']").as_deref(),
        Some("button[name='go']:nth-of-type(2)")
    );
}

#[test]
fn test_qualifier_that_stays_ambiguous_is_rejected() {
    // Both spans are the first of their type under their own parents.
    let d = doc(r#"<div><span class="x"></span></div><div><span class="x"></span></div>"#);
    let spans = d.query_selector_all("span").unwrap();
    assert_eq!(UniquenessResolver::resolve(&d, spans[0], "span[class='x']"), None);
}

#[test]
fn test_zero_matches_is_not_applicable() {
    let d = doc("<p>One</p>");
    let p = d.query_selector("p").unwrap().unwrap();
    assert_eq!(UniquenessResolver::resolve(&d, p, "p[id='missing']"), None);
}

#[test]
fn test_candidate_missing_target_is_not_applicable() {
    let d = doc(r#"<p id="a">One</p><p id="b">Two</p>"#);
    let b = d.get_element_by_id("b").unwrap();
    assert_eq!(UniquenessResolver::resolve(&d, b, "p[id='a']"), None);
}

#[test]
fn test_invalid_candidate_is_not_applicable() {
    let d = doc("<p>One</p>");
    let p = d.query_selector("p").unwrap().unwrap();
    assert_eq!(UniquenessResolver::resolve(&d, p, "p[id="), None);
}

#[test]
fn test_detached_node_is_never_unique() {
    let mut d = doc("<p>One</p>");
    let orphan = d.create_detached_element(ElementData::new("p"));
    assert_eq!(UniquenessResolver::resolve(&d, orphan, "p"), None);
    assert!(!UniquenessResolver::is_unique(&d, orphan, "p"));
}

#[test]
fn test_nth_of_type_position_skips_other_tags() {
    let d = doc("<div><span></span><p></p><span></span><p></p></div>");
    let ps = d.query_selector_all("p").unwrap();
    assert_eq!(UniquenessResolver::nth_of_type_position(&d, ps[0]), 1);
    assert_eq!(UniquenessResolver::nth_of_type_position(&d, ps[1]), 2);
}

#[test]
fn test_has_same_type_siblings() {
    let d = doc("<div><span></span><p></p></div><ul><li></li><li></li></ul>");
    let p = d.query_selector("p").unwrap().unwrap();
    let li = d.query_selector("li").unwrap().unwrap();
    assert!(!UniquenessResolver::has_same_type_siblings(&d, p));
    assert!(UniquenessResolver::has_same_type_siblings(&d, li));
}

/// A document whose backend cannot answer queries.
struct Unreachable;

impl DocumentQuery for Unreachable {
    type Node = u32;

    fn query_selector_all(&self, _selector: &str) -> Result<Vec<u32>, QueryError> {
        Err(QueryError::Backend("connection closed".into()))
    }

    fn tag_name(&self, _node: u32) -> String {
        "div".into()
    }

    fn attribute(&self, _node: u32, _name: &str) -> Option<String> {
        None
    }

    fn parent_element(&self, _node: u32) -> Option<u32> {
        None
    }

    fn previous_element_sibling(&self, _node: u32) -> Option<u32> {
        None
    }

    fn next_element_sibling(&self, _node: u32) -> Option<u32> {
        None
    }

    fn is_connected(&self, _node: u32) -> bool {
        true
    }
}

#[test]
fn test_backend_failure_is_not_applicable() {
    assert_eq!(UniquenessResolver::resolve(&Unreachable, 7, "div"), None);
    assert!(!UniquenessResolver::is_unique(&Unreachable, 7, "div"));
}

#[test]
fn test_node_ids_compare_by_identity() {
    let d = doc("<p></p><p></p>");
    let ps: Vec<NodeId> = d.query_selector_all("p").unwrap();
    assert_ne!(ps[0], ps[1]);
}
