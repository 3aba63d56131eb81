use std::{error, fmt};

/// Ways an inventory query can fail.  None of them reach the caller of
/// `fetch_devices`; they go to the diagnostics sink instead.
#[derive(Debug)]
pub enum Error {
    MalformedResponse(String),
    ServerError { status: u16, body: String },
    NetworkError(String),
    UnknownError(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    MalformedResponse,
    ServerError,
    NetworkError,
    UnknownError,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::ServerError { .. } => ErrorKind::ServerError,
            Self::NetworkError(_) => ErrorKind::NetworkError,
            Self::UnknownError(_) => ErrorKind::UnknownError,
        }
    }

    /// HTTP status of a server-originated failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedResponse(detail) => write!(f, "Malformed inventory response: {detail}"),
            Self::ServerError { status, body } => {
                write!(f, "Server error: {status} {body}")
            }
            Self::NetworkError(detail) => write!(f, "Network error: {detail}"),
            Self::UnknownError(detail) => write!(f, "Error: {detail}"),
        }
    }
}
