use super::SelectorStrategy;
use crate::css;
use pinpoint_common::{DocumentQuery, StrategyKind};

/// Last resort: the bare tag name.
#[derive(Debug, Clone, Copy)]
pub struct TagNameStrategy {
    uppercase: bool,
}

impl Default for TagNameStrategy {
    fn default() -> Self {
        Self { uppercase: true }
    }
}

impl TagNameStrategy {
    pub fn new(uppercase: bool) -> Self {
        Self { uppercase }
    }

    /// Nodes without a tag name fall back to `*`.
    pub fn render<D: DocumentQuery>(&self, doc: &D, node: D::Node) -> String {
        let tag = doc.tag_name(node);
        if tag.is_empty() {
            "*".to_string()
        } else if self.uppercase {
            css::escape_ident(&tag.to_uppercase())
        } else {
            css::escape_ident(&tag)
        }
    }
}

impl<D: DocumentQuery> SelectorStrategy<D> for TagNameStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TagName
    }

    fn candidates(&self, doc: &D, node: D::Node) -> Vec<String> {
        vec![self.render(doc, node)]
    }

    /// Always applicable; never resolved for uniqueness.
    fn try_build(&self, doc: &D, node: D::Node) -> Option<String> {
        Some(self.render(doc, node))
    }
}
