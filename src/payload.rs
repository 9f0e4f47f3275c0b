//! Request bodies sent to the watchdog service and the resolution step
//! that fills in caller defaults before they are built.
//!
//! Payloads borrow from the caller's arguments so a request allocates only
//! for its JSON body.

use std::borrow::Cow;
use std::{env, io, process};

use serde::Serialize;

use crate::error::ArgumentError;
use crate::severity::Severity;

/// Body of a `notify` request.
#[derive(Debug, Serialize)]
pub(crate) struct NotifyPayload<'a> {
    pub(crate) message: &'a str,
    pub(crate) channel: &'a str,
    pub(crate) severity: Severity,
}

/// Body of a `process/watch` request.
#[derive(Debug, Serialize)]
pub(crate) struct ProcessWatchPayload<'a> {
    pub(crate) pid: i64,
    pub(crate) name: Cow<'a, str>,
    pub(crate) channel: &'a str,
    pub(crate) severity: Severity,
}

/// Body of a `process/unwatch` request.
#[derive(Debug, Serialize)]
pub(crate) struct ProcessUnwatchPayload<'a> {
    pub(crate) pid: i64,
    pub(crate) channel: &'a str,
}

/// Pick the caller's channel, falling back to `default` when it is empty.
pub(crate) fn resolve_channel<'a>(channel: &'a str, default: &'a str) -> &'a str {
    if channel.is_empty() { default } else { channel }
}

/// Map `0` to the current process id and reject negative ids.
pub(crate) fn resolve_pid(pid: i64) -> Result<i64, ArgumentError> {
    match pid {
        0 => Ok(i64::from(process::id())),
        p if p < 0 => Err(ArgumentError::InvalidProcessId(p)),
        p => Ok(p),
    }
}

/// Use the current executable path when `name` is empty.
pub(crate) fn resolve_name(name: &str) -> io::Result<Cow<'_, str>> {
    if !name.is_empty() {
        return Ok(Cow::Borrowed(name));
    }
    let exe = env::current_exe()?;
    Ok(Cow::Owned(exe.to_string_lossy().into_owned()))
}
