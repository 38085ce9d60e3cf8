use pinpoint_common::StrategyKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub strategies: StrategiesConfig,
    #[serde(default)]
    pub relative: RelativeConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategiesConfig {
    /// Strategies to skip. The chain order itself is fixed.
    #[serde(default)]
    pub disabled: Vec<StrategyKind>,
}

impl StrategiesConfig {
    /// The tag-name fallback is always enabled.
    pub fn is_enabled(&self, kind: StrategyKind) -> bool {
        kind.is_fallback() || !self.disabled.contains(&kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeConfig {
    /// Maximum number of ancestors to climb looking for an id anchor.
    /// `None` walks all the way to the document root.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    #[serde(default = "default_uppercase")]
    pub uppercase: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            uppercase: default_uppercase(),
        }
    }
}

fn default_uppercase() -> bool {
    true
}
