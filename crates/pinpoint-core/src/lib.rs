pub mod builders;
pub mod config;
pub mod css;
pub mod engine;
pub mod relative;
pub mod uniqueness;

pub use builders::{
    SelectorStrategy, aria_label_selector, id_selector, image_selector, link_href_selector,
    name_selector, relative_selector, tag_selector,
};
pub use config::{ConfigError, ConfigLoader, EngineConfig};
pub use engine::{SelectorEngine, get_css_selector};
pub use pinpoint_common::{DocumentQuery, QueryError, StrategyKind, StrategyReport, Synthesis};
pub use relative::RelativeSelectorBuilder;
pub use uniqueness::UniquenessResolver;
