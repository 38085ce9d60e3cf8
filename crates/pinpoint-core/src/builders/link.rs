use super::SelectorStrategy;
use crate::css;
use pinpoint_common::{DocumentQuery, StrategyKind};
use regex::Regex;
use std::sync::LazyLock;

static ORIGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9+.\-]*:)?//[^/?#]*").unwrap());

/// `a[href*='path/to/page.html']`, tolerant of absolute vs relative hrefs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkHrefStrategy;

impl<D: DocumentQuery> SelectorStrategy<D> for LinkHrefStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LinkHref
    }

    fn candidates(&self, doc: &D, node: D::Node) -> Vec<String> {
        if doc.tag_name(node) != "a" {
            return Vec::new();
        }
        doc.non_empty_attribute(node, "href")
            .and_then(|href| path_suffix(&href).map(|s| css::attribute_contains("a", "href", s)))
            .into_iter()
            .collect()
    }
}

/// Reduce a URL to the part that survives a change of origin: scheme and
/// host are dropped, as are the query string, the fragment and any leading
/// `./` or `/`.
///
/// The result is always a substring of `url`. Returns `None` when nothing is
/// left, and for `data:` and `javascript:` URIs.
pub fn path_suffix(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("data:") || lower.starts_with("javascript:") {
        return None;
    }

    let mut rest = match ORIGIN_RE.find(trimmed) {
        Some(origin) => &trimmed[origin.end()..],
        None => trimmed,
    };
    if let Some(cut) = rest.find(['?', '#']) {
        rest = &rest[..cut];
    }
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            break;
        }
    }

    if rest.is_empty() { None } else { Some(rest) }
}
