//! Client for the Server Watchdog monitoring service.
//!
//! [`ServerWatchdogClient`] pushes error, warning and information messages
//! to the service and asks it to start or stop watching processes. Each
//! operation is a single blocking JSON POST bounded by the configured
//! timeout; failures are returned to the caller and never retried.
//!
//! ```no_run
//! use server_watchdog::{ClientOptions, ServerWatchdogClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ServerWatchdogClient::create(ClientOptions::new(
//!     "127.0.0.1",
//!     3004,
//!     "set-some-key",
//!     "default",
//! ))?;
//! client.error("disk almost full", "")?;
//! client.process_watch(0, "", "", "")?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod payload;
mod severity;
mod transport;

pub use client::ServerWatchdogClient;
pub use config::{ClientOptions, DEFAULT_TIMEOUT_MS};
pub use error::{ArgumentError, ClientBuildError, ClientError};
pub use severity::Severity;
pub use transport::FALLBACK_ERROR_MESSAGE;
