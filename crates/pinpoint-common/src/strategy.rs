use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector synthesis strategies.
///
/// Strategies are always tried in [`StrategyKind::priority_order`]; the first
/// one that produces a selector wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// `tag[id='value']`
    Id,
    /// `tag[name='value']`
    Name,
    /// `tag[aria-label='value']`
    AriaLabel,
    /// `a[href*='path/suffix']`
    LinkHref,
    /// `img[alt=..]`, `img[title=..]` or `img[src*=..]`
    Image,
    /// Child path anchored on the nearest ancestor with an id
    Relative,
    /// Bare upper-case tag name, no uniqueness guarantee
    TagName,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Id => "id",
            StrategyKind::Name => "name",
            StrategyKind::AriaLabel => "aria-label",
            StrategyKind::LinkHref => "link-href",
            StrategyKind::Image => "image",
            StrategyKind::Relative => "relative",
            StrategyKind::TagName => "tag-name",
        }
    }

    /// The fixed strategy chain, highest priority first.
    pub fn priority_order() -> [StrategyKind; 7] {
        [
            StrategyKind::Id,
            StrategyKind::Name,
            StrategyKind::AriaLabel,
            StrategyKind::LinkHref,
            StrategyKind::Image,
            StrategyKind::Relative,
            StrategyKind::TagName,
        ]
    }

    /// Only the tag-name fallback comes without a uniqueness check.
    pub fn is_fallback(&self) -> bool {
        matches!(self, StrategyKind::TagName)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
