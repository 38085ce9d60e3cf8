//! Selector orchestration.
//!
//! The engine runs the strategy chain in fixed priority order and returns the
//! first selector that resolves to exactly the target element. When nothing
//! applies it falls back to the bare tag name, which carries no uniqueness
//! guarantee.

use crate::builders::{SelectorStrategy, TagNameStrategy, create_strategy};
use crate::config::{EngineConfig, StrategiesConfig};
use crate::uniqueness::UniquenessResolver;
use pinpoint_common::{DocumentQuery, StrategyKind, StrategyReport, Synthesis};

pub struct SelectorEngine<D: DocumentQuery> {
    strategies: Vec<Box<dyn SelectorStrategy<D>>>,
    enabled: StrategiesConfig,
    fallback: TagNameStrategy,
}

impl<D: DocumentQuery> Default for SelectorEngine<D> {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl<D: DocumentQuery> SelectorEngine<D> {
    pub fn new(config: &EngineConfig) -> Self {
        let strategies = StrategyKind::priority_order()
            .into_iter()
            .filter(|kind| !kind.is_fallback())
            .map(|kind| create_strategy(kind, config))
            .collect();

        Self {
            strategies,
            enabled: config.strategies.clone(),
            fallback: TagNameStrategy::new(config.fallback.uppercase),
        }
    }

    /// Selector for `node`. Never fails; see [`SelectorEngine::synthesize`]
    /// for whether the result is guaranteed unique.
    pub fn get_selector(&self, doc: &D, node: D::Node) -> String {
        self.synthesize(doc, node).selector
    }

    pub fn synthesize(&self, doc: &D, node: D::Node) -> Synthesis {
        for strategy in self.active_strategies() {
            match strategy.try_build(doc, node) {
                Some(selector) => {
                    tracing::debug!("{} strategy selected '{}'", strategy.kind(), selector);
                    return Synthesis {
                        selector,
                        strategy: strategy.kind(),
                        unique: true,
                    };
                }
                None => tracing::debug!("{} strategy not applicable", strategy.kind()),
            }
        }

        let selector = self.fallback.render(doc, node);
        let unique = UniquenessResolver::is_unique(doc, node, &selector);
        if unique {
            tracing::debug!("Falling back to tag name '{}'", selector);
        } else {
            tracing::warn!("Falling back to ambiguous tag name '{}' for {:?}", selector, node);
        }

        Synthesis {
            selector,
            strategy: StrategyKind::TagName,
            unique,
        }
    }

    /// Outcome of every strategy in priority order, without early exit.
    pub fn explain(&self, doc: &D, node: D::Node) -> Vec<StrategyReport> {
        let mut reports: Vec<StrategyReport> = self
            .strategies
            .iter()
            .map(|strategy| {
                let kind = strategy.kind();
                if self.enabled.is_enabled(kind) {
                    StrategyReport {
                        strategy: kind,
                        selector: strategy.try_build(doc, node),
                        skipped: false,
                    }
                } else {
                    StrategyReport {
                        strategy: kind,
                        selector: None,
                        skipped: true,
                    }
                }
            })
            .collect();

        reports.push(StrategyReport {
            strategy: StrategyKind::TagName,
            selector: Some(self.fallback.render(doc, node)),
            skipped: false,
        });
        reports
    }

    fn active_strategies(&self) -> impl Iterator<Item = &dyn SelectorStrategy<D>> {
        self.strategies
            .iter()
            .map(|strategy| strategy.as_ref())
            .filter(|strategy| self.enabled.is_enabled(strategy.kind()))
    }
}

/// [`SelectorEngine::get_selector`] with the default configuration.
pub fn get_css_selector<D: DocumentQuery>(doc: &D, node: D::Node) -> String {
    SelectorEngine::default().get_selector(doc, node)
}
