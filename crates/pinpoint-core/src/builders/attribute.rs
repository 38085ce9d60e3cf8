use super::SelectorStrategy;
use crate::css;
use pinpoint_common::{DocumentQuery, StrategyKind};

/// `tag[attr='value']` for a single identifying attribute.
#[derive(Debug, Clone, Copy)]
pub struct AttributeStrategy {
    kind: StrategyKind,
    attribute: &'static str,
}

impl AttributeStrategy {
    pub fn id() -> Self {
        Self {
            kind: StrategyKind::Id,
            attribute: "id",
        }
    }

    pub fn name() -> Self {
        Self {
            kind: StrategyKind::Name,
            attribute: "name",
        }
    }

    pub fn aria_label() -> Self {
        Self {
            kind: StrategyKind::AriaLabel,
            attribute: "aria-label",
        }
    }
}

impl<D: DocumentQuery> SelectorStrategy<D> for AttributeStrategy {
    fn kind(&self) -> StrategyKind {
        self.kind
    }

    fn candidates(&self, doc: &D, node: D::Node) -> Vec<String> {
        doc.non_empty_attribute(node, self.attribute)
            .map(|value| css::attribute_equals(&doc.tag_name(node), self.attribute, &value))
            .into_iter()
            .collect()
    }
}
