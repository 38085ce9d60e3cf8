use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Malformed markup at byte {position}: {source}")]
    Markup {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },
}
