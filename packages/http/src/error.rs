/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be assembled. Nothing was sent.
    Construction,
    /// The transport failed while sending the request.
    Transport,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP method is not set")]
    MissingMethod,

    #[error("URL is not set")]
    MissingUrl,

    #[error("Invalid HTTP method: {method}")]
    InvalidMethod { method: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme { scheme: String },

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("HTTP transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) => ErrorKind::Transport,
            Error::MissingMethod
            | Error::MissingUrl
            | Error::InvalidMethod { .. }
            | Error::UrlParse(_)
            | Error::UnsupportedScheme { .. }
            | Error::InvalidHeaderName(_)
            | Error::InvalidHeaderValue(_) => ErrorKind::Construction,
        }
    }

    pub fn is_construction(&self) -> bool {
        self.kind() == ErrorKind::Construction
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Wrap any transport-level failure.
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Transport(source.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Transport(Box::new(error))
    }
}
