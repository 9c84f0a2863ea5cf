use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayonError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unknown menu item: {0}")]
    UnknownMenuItem(String),

    #[error("click carried no {0} url")]
    MissingUrl(&'static str),

    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
