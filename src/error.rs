#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    #[error("No literal found: {0}")]
    NoLiteralFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

/// Kind tag of an [`Error`], for callers that only need to tell failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorKind {
    MalformedQuery,
    NoLiteralFound,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedQuery(_) => ErrorKind::MalformedQuery,
            Error::NoLiteralFound(_) => ErrorKind::NoLiteralFound,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Error::MalformedQuery(msg) | Error::NoLiteralFound(msg) => msg.clone(),
            Error::Io(err) => err.to_string(),
        }
    }
}
