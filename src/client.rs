//! The public watchdog client.

use std::time::Duration;

use log::debug;
use serde::Serialize;

use crate::config::ClientOptions;
use crate::error::{ClientBuildError, ClientError};
use crate::payload::{
    NotifyPayload, ProcessUnwatchPayload, ProcessWatchPayload, resolve_channel, resolve_name,
    resolve_pid,
};
use crate::severity::Severity;
use crate::transport::{Dispatcher, ResponseMode};

const NOTIFY_PATH: &str = "notify";
const PROCESS_WATCH_PATH: &str = "process/watch";
const PROCESS_UNWATCH_PATH: &str = "process/unwatch";

/// Client pushing notifications and process watch requests to a Server
/// Watchdog service.
///
/// The client is immutable once created and can be cloned or shared
/// between threads. Every operation blocks until the service answers, the
/// configured timeout elapses or the transport fails.
#[derive(Clone, Debug)]
pub struct ServerWatchdogClient {
    dispatcher: Dispatcher,
    default_channel: String,
}

impl ServerWatchdogClient {
    /// Validate `options` and build a client. No network I/O takes place.
    pub fn create(options: ClientOptions) -> Result<Self, ClientBuildError> {
        options.validate()?;
        let dispatcher = Dispatcher::new(&options)?;
        Ok(Self {
            dispatcher,
            default_channel: options.default_channel,
        })
    }

    /// Channel used when an operation is given an empty channel.
    pub fn default_channel(&self) -> &str {
        &self.default_channel
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.dispatcher.base_url()
    }

    /// Effective per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.dispatcher.timeout()
    }

    /// Send an error message.
    pub fn error(&self, message: &str, channel: &str) -> Result<(), ClientError> {
        self.notify(Severity::Error, message, channel)
    }

    /// Send a warning message.
    pub fn warn(&self, message: &str, channel: &str) -> Result<(), ClientError> {
        self.notify(Severity::Warn, message, channel)
    }

    /// Send an information message.
    pub fn info(&self, message: &str, channel: &str) -> Result<(), ClientError> {
        self.notify(Severity::Info, message, channel)
    }

    /// Send a message with the given severity.
    ///
    /// An empty `message` is accepted and ignored without contacting the
    /// service.
    pub fn notify(
        &self,
        severity: Severity,
        message: &str,
        channel: &str,
    ) -> Result<(), ClientError> {
        if message.is_empty() {
            debug!("ServerWatchdogClient skipped empty {severity} notification");
            return Ok(());
        }
        let payload = NotifyPayload {
            message,
            channel: resolve_channel(channel, &self.default_channel),
            severity,
        };
        self.send(NOTIFY_PATH, &payload)
    }

    /// Ask the service to monitor a process.
    ///
    /// A `pid` of `0` watches the current process and an empty `name` uses
    /// the current executable path. An empty `severity` means `"error"`.
    ///
    /// # Errors
    ///
    /// * [`ClientError::InvalidArgument`] - negative `pid` or unknown
    ///   `severity`; nothing is sent.
    /// * [`ClientError::Executable`] - the executable path could not be
    ///   resolved.
    /// * Transport and server errors as for every request.
    pub fn process_watch(
        &self,
        pid: i64,
        name: &str,
        severity: &str,
        channel: &str,
    ) -> Result<(), ClientError> {
        let pid = resolve_pid(pid)?;
        let name = resolve_name(name).map_err(ClientError::Executable)?;
        let severity = Severity::resolve(severity)?;
        let payload = ProcessWatchPayload {
            pid,
            name,
            channel: resolve_channel(channel, &self.default_channel),
            severity,
        };
        self.send(PROCESS_WATCH_PATH, &payload)
    }

    /// Ask the service to stop monitoring a process.
    ///
    /// A `pid` of `0` refers to the current process; negative ids are
    /// rejected before anything is sent.
    pub fn process_unwatch(&self, pid: i64, channel: &str) -> Result<(), ClientError> {
        let payload = ProcessUnwatchPayload {
            pid: resolve_pid(pid)?,
            channel: resolve_channel(channel, &self.default_channel),
        };
        self.send(PROCESS_UNWATCH_PATH, &payload)
    }

    fn send<T: Serialize>(&self, path: &str, payload: &T) -> Result<(), ClientError> {
        let body = serde_json::to_string(payload)?;
        self.dispatcher
            .post(path, &body, ResponseMode::Discard)
            .map(drop)
    }
}
