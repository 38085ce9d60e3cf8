use pinpoint_core::{
    EngineConfig, SelectorEngine, StrategyKind, UniquenessResolver, get_css_selector,
};
use pinpoint_dom::{Document, ElementData, NodeId};

fn doc(markup: &str) -> Document {
    Document::parse(markup).unwrap()
}

fn first(doc: &Document, selector: &str) -> NodeId {
    doc.query_selector(selector).unwrap().unwrap()
}

const SIGNUP_FORM: &str = r#"
<html>
  <body>
    <header id="top">
      <a href="https://shop.example.com/index.html"><img src="/static/logo.png" alt="Shop"/></a>
      <nav>
        <a href="/products/list.html?page=1">Products</a>
        <a href="contact.html">Contact</a>
        <a href="contact.html">Contact us</a>
      </nav>
    </header>
    <main>
      <form name="signup">
        <label>Forename <input name="forename"/></label>
        <label>Surname <input name="surname"/></label>
        <input type="checkbox" aria-label="Accept terms"/>
        <input type="checkbox" aria-label="Accept terms"/>
        <button>Cancel</button>
        <button>Submit</button>
      </form>
      <ul>
        <li>One</li>
        <li>Two</li>
      </ul>
      <img title="Banner"/>
      <img src="data:image/gif;base64,R0lGOD"/>
    </main>
    <footer>
      <p>Legal</p>
      <div id="social"><span>a</span><span>b</span></div>
    </footer>
  </body>
</html>
"#;

#[test]
fn test_preferred_selector() {
    let d = doc(r#"<a id="contact-link">Contact</a>"#);
    assert_eq!(get_css_selector(&d, first(&d, "a")), "a[id='contact-link']");
}

#[test]
fn test_relative_selector() {
    let d = doc(r#"<div id="parent"><p>Paragraph</p></div>"#);
    assert_eq!(get_css_selector(&d, first(&d, "p")), "div[id='parent'] > p");
}

#[test]
fn test_fallback_selector() {
    let d = doc("<div><p>Paragraph</p></div>");
    let synthesis = SelectorEngine::default().synthesize(&d, first(&d, "p"));
    assert_eq!(synthesis.selector, "P");
    assert_eq!(synthesis.strategy, StrategyKind::TagName);
    assert!(synthesis.unique);
}

#[test]
fn test_ambiguous_fallback_is_flagged() {
    let d = doc("<div><p>a</p></div><div><p>b</p></div>");
    let synthesis = SelectorEngine::default().synthesize(&d, first(&d, "p"));
    assert_eq!(synthesis.selector, "P");
    assert!(!synthesis.unique);
}

#[test]
fn test_relative_scenario() {
    let d = doc(r#"<div id="parent"><p>A</p><p class="x">B</p></div>"#);
    let ps = d.query_selector_all("p").unwrap();
    assert_eq!(get_css_selector(&d, ps[0]), "div[id='parent'] > p:nth-of-type(1)");
    assert_eq!(get_css_selector(&d, ps[1]), "div[id='parent'] > p:nth-of-type(2)");
}

#[test]
fn test_nested_ancestor_scenario() {
    let d = doc(r#"<div id="ancestor"><div><span/></div><div><p/></div></div>"#);
    assert_eq!(
        get_css_selector(&d, first(&d, "p")),
        "div[id='ancestor'] > div:nth-of-type(2) > p"
    );
}

#[test]
fn test_priority_order() {
    let d = doc(r#"<input id="a" name="b" aria-label="c"/><input name="b2" aria-label="c2"/>"#);
    let inputs = d.query_selector_all("input").unwrap();
    let engine = SelectorEngine::default();

    let s = engine.synthesize(&d, inputs[0]);
    assert_eq!((s.selector.as_str(), s.strategy), ("input[id='a']", StrategyKind::Id));

    let s = engine.synthesize(&d, inputs[1]);
    assert_eq!(
        (s.selector.as_str(), s.strategy),
        ("input[name='b2']", StrategyKind::Name)
    );
}

#[test]
fn test_unique_id_has_no_qualifier() {
    let d = doc(SIGNUP_FORM);
    for id in ["top", "social"] {
        let node = d.get_element_by_id(id).unwrap();
        let tag = d.element(node).unwrap().tag_name.clone();
        assert_eq!(get_css_selector(&d, node), format!("{}[id='{}']", tag, id));
    }
}

#[test]
fn test_shared_attribute_differs_only_by_qualifier() {
    let d = doc(SIGNUP_FORM);
    let boxes = d.query_selector_all("input[type='checkbox']").unwrap();
    let selectors: Vec<String> = boxes.iter().map(|b| get_css_selector(&d, *b)).collect();

    for (node, selector) in boxes.iter().zip(&selectors) {
        let k = UniquenessResolver::nth_of_type_position(&d, *node);
        assert_eq!(
            *selector,
            format!("input[aria-label='Accept terms']:nth-of-type({})", k)
        );
    }
    assert_ne!(selectors[0], selectors[1]);
}

#[test]
fn test_form_scenarios() {
    let d = doc(SIGNUP_FORM);
    assert_eq!(
        get_css_selector(&d, first(&d, "input[name='forename']")),
        "input[name='forename']"
    );
    assert_eq!(get_css_selector(&d, first(&d, "form")), "form[name='signup']");
    assert_eq!(
        get_css_selector(&d, first(&d, "nav > a")),
        "a[href*='products/list.html']"
    );
    assert_eq!(
        get_css_selector(&d, first(&d, "header img")),
        "img[alt='Shop']"
    );
    assert_eq!(get_css_selector(&d, first(&d, "main > img")), "img[title='Banner']");
    assert_eq!(
        get_css_selector(&d, first(&d, "#social > span:last-child")),
        "div[id='social'] > span:nth-of-type(2)"
    );
    assert_eq!(get_css_selector(&d, first(&d, "header > a")), "a[href*='index.html']");
}

#[test]
fn test_round_trip_over_every_element() {
    for markup in [
        SIGNUP_FORM,
        r#"<div id="parent"><p>A</p><p class="x">B</p></div>"#,
        r#"<div id="ancestor"><div><span/></div><div><p/></div></div>"#,
        r#"<input id="dup"/><input id="dup"/><input id="dup"/>"#,
        r#"<ul id="l"><li><a href="x.html">1</a></li><li><a href="x.html">2</a></li></ul>"#,
    ] {
        let d = doc(markup);
        let engine = SelectorEngine::default();
        for node in d.elements() {
            let synthesis = engine.synthesize(&d, node);
            let matches = d.query_selector_all(&synthesis.selector).unwrap();
            if synthesis.unique {
                assert_eq!(matches, vec![node], "{} in {}", synthesis.selector, markup);
            } else {
                assert_eq!(synthesis.strategy, StrategyKind::TagName);
                assert!(matches.len() > 1 && matches.contains(&node));
            }
        }
    }
}

#[test]
fn test_round_trip_with_anchored_documents() {
    // Everything sits under an id, so the fallback is never needed.
    let d = doc(
        r#"<div id="app"><section><h1>T</h1><p>a</p><p>b</p></section><section><p>c</p><p><em>d</em><em>e</em></p></section></div>"#,
    );
    let engine = SelectorEngine::default();
    for node in d.elements() {
        let synthesis = engine.synthesize(&d, node);
        assert!(synthesis.unique, "{}", synthesis.selector);
        assert_eq!(d.query_selector_all(&synthesis.selector).unwrap(), vec![node]);
    }
}

#[test]
fn test_detached_element_falls_back() {
    let mut d = doc(r#"<p id="x">a</p>"#);
    let orphan = d.create_detached_element(ElementData::with_attributes("p", [("id", "x")]));
    let synthesis = SelectorEngine::default().synthesize(&d, orphan);
    assert_eq!(synthesis.strategy, StrategyKind::TagName);
    assert_eq!(synthesis.selector, "P");
    assert!(!synthesis.unique);
}

#[test]
fn test_disabled_strategies_are_skipped() {
    let d = doc(r#"<div id="parent"><input id="a" name="b"/></div>"#);
    let input = first(&d, "input");

    let mut config = EngineConfig::default();
    config.strategies.disabled = vec![StrategyKind::Id, StrategyKind::TagName];
    let engine = SelectorEngine::new(&config);
    assert_eq!(engine.get_selector(&d, input), "input[name='b']");

    config.strategies.disabled = vec![StrategyKind::Id, StrategyKind::Name];
    let engine = SelectorEngine::new(&config);
    assert_eq!(engine.get_selector(&d, input), "div[id='parent'] > input");
}

#[test]
fn test_lowercase_fallback() {
    let d = doc("<div><p>x</p></div>");
    let mut config = EngineConfig::default();
    config.fallback.uppercase = false;
    assert_eq!(SelectorEngine::new(&config).get_selector(&d, first(&d, "p")), "p");
}

#[test]
fn test_explain_reports_every_strategy() {
    let d = doc(r#"<div id="parent"><img alt="Logo" name="logo"/></div>"#);
    let img = first(&d, "img");

    let mut config = EngineConfig::default();
    config.strategies.disabled = vec![StrategyKind::AriaLabel];
    let reports = SelectorEngine::new(&config).explain(&d, img);

    let kinds: Vec<StrategyKind> = reports.iter().map(|r| r.strategy).collect();
    assert_eq!(kinds, StrategyKind::priority_order().to_vec());

    assert!(!reports[0].applied());
    assert_eq!(reports[1].selector.as_deref(), Some("img[name='logo']"));
    assert!(reports[2].skipped);
    assert!(!reports[3].applied());
    assert_eq!(reports[4].selector.as_deref(), Some("img[alt='Logo']"));
    assert_eq!(reports[5].selector.as_deref(), Some("div[id='parent'] > img"));
    assert_eq!(reports[6].selector.as_deref(), Some("IMG"));
}

#[test]
fn test_prefixed_tag_names_are_escaped() {
    let d = doc(
        r#"<svg><svg:rect id="r"/></svg><div><svg:circle/></div><div id="p"><svg:g></svg:g><svg:g><x:y/></svg:g></div>"#,
    );
    let engine = SelectorEngine::default();

    let rect = first(&d, r"svg\:rect");
    let s = engine.synthesize(&d, rect);
    assert_eq!(s.selector, r"svg\:rect[id='r']");
    assert_eq!(s.strategy, StrategyKind::Id);
    assert_eq!(d.query_selector_all(&s.selector).unwrap(), vec![rect]);

    let circle = first(&d, r"svg\:circle");
    let s = engine.synthesize(&d, circle);
    assert_eq!(s.selector, r"SVG\:CIRCLE");
    assert!(s.unique);
    assert_eq!(d.query_selector_all(&s.selector).unwrap(), vec![circle]);

    let leaf = first(&d, r"x\:y");
    let s = engine.synthesize(&d, leaf);
    assert_eq!(s.selector, r"div[id='p'] > svg\:g:nth-of-type(2) > x\:y");
    assert_eq!(d.query_selector_all(&s.selector).unwrap(), vec![leaf]);
}
