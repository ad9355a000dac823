//! Error types

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A configured selector could not be parsed.
    #[error("invalid selector {selector:?}: {source}")]
    InvalidSelector {
        selector: String,
        #[source]
        source: clickdom::SelectorError,
    },

    /// A structural lookup found nothing in the document.
    #[error("no element matches {selector}")]
    MissingElement { selector: String },

    /// The two open markers disagree.
    #[error("open markers diverged (panel shown: {panel}, display open: {display})")]
    MarkersDiverged { panel: bool, display: bool },

    /// Binding was attempted before the document finished loading.
    #[error("document is not ready; call Page::mark_ready first")]
    NotReady,

    #[error("invalid dropdown config: {0}")]
    Config(#[from] toml::de::Error),
}
