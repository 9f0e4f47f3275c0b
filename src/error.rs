//! Error types returned by the watchdog client.
//!
//! Construction problems surface as [`ClientBuildError`]; everything that
//! can go wrong while sending a request surfaces as [`ClientError`].

use std::io;

use thiserror::Error;

/// Errors that may occur while loading options or building a client.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Invalid user supplied configuration.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
    /// The platform TLS backend could not be initialised.
    #[error("failed to initialise TLS: {0}")]
    Tls(#[from] native_tls::Error),
    /// Underlying I/O error whilst reading a configuration file.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Arguments rejected before any request is sent.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("invalid process id: {0}")]
    InvalidProcessId(i64),
    #[error("invalid severity: {0:?}")]
    InvalidSeverity(String),
}

/// Errors produced by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A caller supplied argument was out of range.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    /// The current executable path could not be resolved for a process watch.
    #[error("failed to resolve executable path: {0}")]
    Executable(#[source] io::Error),
    /// The request payload could not be encoded as JSON.
    #[error("failed to serialise payload: {0}")]
    Serialise(#[from] serde_json::Error),
    /// Network-level failure reported by the HTTP transport.
    #[error(transparent)]
    Transport(Box<ureq::Transport>),
    /// The service answered with a status other than 200.
    #[error("{message} [Status: {status}]")]
    Server { status: u16, message: String },
    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Io(#[from] io::Error),
}

impl From<ureq::Transport> for ClientError {
    fn from(err: ureq::Transport) -> Self {
        Self::Transport(Box::new(err))
    }
}

impl ClientError {
    /// HTTP status code carried by a [`ClientError::Server`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` when the request was abandoned because it exceeded the
    /// client timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(transport) => {
                let mut source = std::error::Error::source(transport.as_ref());
                while let Some(err) = source {
                    if err.downcast_ref::<io::Error>().is_some_and(is_timeout_io) {
                        return true;
                    }
                    source = err.source();
                }
                false
            }
            Self::Io(err) => is_timeout_io(err),
            _ => false,
        }
    }
}

// Socket deadlines surface as `WouldBlock` on some platforms.
fn is_timeout_io(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    )
}
