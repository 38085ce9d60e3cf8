use super::SelectorStrategy;
use super::link::path_suffix;
use crate::css;
use pinpoint_common::{DocumentQuery, StrategyKind};

/// Images are identified by `alt`, then `title`, then the tail of `src`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageStrategy;

impl<D: DocumentQuery> SelectorStrategy<D> for ImageStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Image
    }

    fn candidates(&self, doc: &D, node: D::Node) -> Vec<String> {
        if doc.tag_name(node) != "img" {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        for attribute in ["alt", "title"] {
            if let Some(value) = doc.non_empty_attribute(node, attribute) {
                candidates.push(css::attribute_equals("img", attribute, &value));
            }
        }
        if let Some(src) = doc.non_empty_attribute(node, "src")
            && let Some(suffix) = path_suffix(&src)
        {
            candidates.push(css::attribute_contains("img", "src", suffix));
        }
        candidates
    }
}
