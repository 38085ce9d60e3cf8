//! Selector strategies.
//!
//! Each strategy maps an element to zero or more raw candidate selectors.
//! Candidates are run through [`UniquenessResolver`] before they are handed
//! back, so a strategy either yields a selector that matches exactly its
//! target or reports that it does not apply.

mod attribute;
mod image;
mod link;
mod relative;
mod tag;

pub use attribute::AttributeStrategy;
pub use image::ImageStrategy;
pub use link::{LinkHrefStrategy, path_suffix};
pub use relative::RelativeStrategy;
pub use tag::TagNameStrategy;

use crate::config::EngineConfig;
use crate::uniqueness::UniquenessResolver;
use pinpoint_common::{DocumentQuery, StrategyKind};

pub trait SelectorStrategy<D: DocumentQuery> {
    fn kind(&self) -> StrategyKind;

    /// Raw candidates in preference order, before uniqueness resolution.
    fn candidates(&self, doc: &D, node: D::Node) -> Vec<String>;

    /// First candidate that resolves to exactly `node`.
    fn try_build(&self, doc: &D, node: D::Node) -> Option<String> {
        self.candidates(doc, node)
            .into_iter()
            .find_map(|candidate| UniquenessResolver::resolve(doc, node, &candidate))
    }
}

/// Create the strategy for `kind`, configured from `config`.
pub fn create_strategy<D: DocumentQuery>(
    kind: StrategyKind,
    config: &EngineConfig,
) -> Box<dyn SelectorStrategy<D>> {
    match kind {
        StrategyKind::Id => Box::new(AttributeStrategy::id()),
        StrategyKind::Name => Box::new(AttributeStrategy::name()),
        StrategyKind::AriaLabel => Box::new(AttributeStrategy::aria_label()),
        StrategyKind::LinkHref => Box::new(LinkHrefStrategy),
        StrategyKind::Image => Box::new(ImageStrategy),
        StrategyKind::Relative => Box::new(RelativeStrategy::with_max_depth(
            config.relative.max_depth,
        )),
        StrategyKind::TagName => Box::new(TagNameStrategy::new(config.fallback.uppercase)),
    }
}

pub fn id_selector<D: DocumentQuery>(doc: &D, node: D::Node) -> Option<String> {
    AttributeStrategy::id().try_build(doc, node)
}

pub fn name_selector<D: DocumentQuery>(doc: &D, node: D::Node) -> Option<String> {
    AttributeStrategy::name().try_build(doc, node)
}

pub fn aria_label_selector<D: DocumentQuery>(doc: &D, node: D::Node) -> Option<String> {
    AttributeStrategy::aria_label().try_build(doc, node)
}

pub fn link_href_selector<D: DocumentQuery>(doc: &D, node: D::Node) -> Option<String> {
    LinkHrefStrategy.try_build(doc, node)
}

pub fn image_selector<D: DocumentQuery>(doc: &D, node: D::Node) -> Option<String> {
    ImageStrategy.try_build(doc, node)
}

/// Accepts an absent node, which is never applicable.
pub fn relative_selector<D: DocumentQuery>(doc: &D, node: Option<D::Node>) -> Option<String> {
    node.and_then(|node| RelativeStrategy::default().try_build(doc, node))
}

/// Upper-case tag name, with no uniqueness guarantee.
pub fn tag_selector<D: DocumentQuery>(doc: &D, node: D::Node) -> String {
    TagNameStrategy::default().render(doc, node)
}
