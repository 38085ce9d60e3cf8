use crate::strategy::StrategyKind;
use serde::{Deserialize, Serialize};

/// Outcome of one synthesis run for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synthesis {
    /// The selector handed to downstream code generators.
    pub selector: String,

    /// Strategy that produced the selector.
    pub strategy: StrategyKind,

    /// Whether the selector re-queries to exactly the target element.
    /// Only the tag-name fallback can be `false`.
    pub unique: bool,
}

/// One strategy's result, as reported by `SelectorEngine::explain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyReport {
    pub strategy: StrategyKind,

    /// `None` when the strategy does not apply to the element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Disabled strategies are reported but never run.
    #[serde(default)]
    pub skipped: bool,
}

impl StrategyReport {
    pub fn applied(&self) -> bool {
        self.selector.is_some()
    }
}
