use super::SelectorStrategy;
use crate::relative::RelativeSelectorBuilder;
use pinpoint_common::{DocumentQuery, StrategyKind};

#[derive(Debug, Clone, Default)]
pub struct RelativeStrategy {
    builder: RelativeSelectorBuilder,
}

impl RelativeStrategy {
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            builder: RelativeSelectorBuilder::with_max_depth(max_depth),
        }
    }
}

impl<D: DocumentQuery> SelectorStrategy<D> for RelativeStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Relative
    }

    fn candidates(&self, doc: &D, node: D::Node) -> Vec<String> {
        self.builder.build(doc, Some(node)).into_iter().collect()
    }
}
