//! Blocking HTTP dispatch shared by every client operation.
//!
//! Each call issues exactly one POST through a `ureq::Agent` configured
//! with the client timeout. Nothing is retried: transport failures and
//! non-200 responses are handed straight back to the caller.

use std::fmt;
use std::io::{self, Read};
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use ureq::{Agent, AgentBuilder};

use crate::config::ClientOptions;
use crate::error::{ClientBuildError, ClientError};

/// Message reported when a failed response carries no body.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unsuccessful response from node.";

/// What to do with the body of a successful response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ResponseMode {
    /// Drop the body unread.
    Discard,
    /// Read and return the full body.
    #[cfg_attr(not(test), allow(dead_code))]
    Read,
}

/// Sends JSON bodies to paths below the service base URL.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    base_url: String,
    api_key: String,
    timeout: Duration,
    agent: Agent,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Build a dispatcher from validated options.
    pub(crate) fn new(options: &ClientOptions) -> Result<Self, ClientBuildError> {
        let timeout = options.timeout();
        let mut builder = AgentBuilder::new().timeout(timeout);
        if options.use_ssl {
            let connector = native_tls::TlsConnector::new()?;
            builder = builder.tls_connector(Arc::new(connector));
        }
        Ok(Self {
            base_url: options.base_url(),
            api_key: options.api_key.clone(),
            timeout,
            agent: builder.build(),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST `body` to `{base_url}/{path}`.
    ///
    /// Returns the response body when `mode` is [`ResponseMode::Read`] and an
    /// empty vector otherwise.
    pub(crate) fn post(
        &self,
        path: &str,
        body: &str,
        mode: ResponseMode,
    ) -> Result<Vec<u8>, ClientError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("ServerWatchdogClient POST {url} ({} bytes)", body.len());

        let response = match self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .set("X-Api-Key", &self.api_key)
            .send_string(body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => return Err(transport.into()),
        };

        if response.status() != 200 {
            return Err(server_error(response));
        }
        match mode {
            ResponseMode::Discard => Ok(Vec::new()),
            ResponseMode::Read => Ok(read_body(response)?),
        }
    }
}

fn read_body(response: ureq::Response) -> io::Result<Vec<u8>> {
    let mut body = Vec::new();
    response.into_reader().read_to_end(&mut body)?;
    Ok(body)
}

fn server_error(response: ureq::Response) -> ClientError {
    let status = response.status();
    match read_body(response) {
        Ok(body) => ClientError::Server {
            status,
            message: status_message(&body),
        },
        Err(err) => err.into(),
    }
}

/// Error text for a failed response: the body, or the fallback when empty.
pub(crate) fn status_message(body: &[u8]) -> String {
    if body.is_empty() {
        FALLBACK_ERROR_MESSAGE.to_owned()
    } else {
        String::from_utf8_lossy(body).into_owned()
    }
}
