pub mod query;
pub mod strategy;
pub mod synthesis;

pub use query::{DocumentQuery, QueryError};
pub use strategy::StrategyKind;
pub use synthesis::{StrategyReport, Synthesis};
