//! Fatal condition policy
//!
//! A fatal logging condition normally takes the process down. Tests need to
//! assert on those paths without dying, so the policy is injectable rather
//! than a process-global switch: [`FatalHandler::abort`] terminates,
//! [`FatalHandler::for_test`] raises a catchable [`FatalError`] instead.
//! Handlers carry no shared state, so concurrent tests each get their own.

use std::fmt;

use thiserror::Error;

use crate::logger;

/// Error raised in place of process termination when a handler is in test
/// mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{file}:{line}: {message}")]
pub struct FatalError {
    pub file: String,
    pub line: u32,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Abort,
    Raise,
}

/// Injectable fatal-condition policy.
#[derive(Debug, Clone)]
pub struct FatalHandler {
    behavior: Behavior,
    label: Option<String>,
}

impl FatalHandler {
    /// Operating policy: log the condition at error level, then terminate
    /// the process.
    pub fn abort() -> Self {
        FatalHandler {
            behavior: Behavior::Abort,
            label: None,
        }
    }

    /// Test policy: raise a catchable [`FatalError`] instead of aborting.
    ///
    /// `label` is prefixed to raised messages so interleaved test output
    /// stays attributable. Also installs the console logger, like
    /// [`logger::init`]. Constructing this twice with the same label yields
    /// identical behavior.
    pub fn for_test(label: impl Into<String>) -> Self {
        logger::init();
        FatalHandler {
            behavior: Behavior::Raise,
            label: Some(label.into()),
        }
    }

    /// Report a fatal condition at `file:line`.
    ///
    /// Under the abort policy this never returns.
    pub fn fatal(&self, file: &str, line: u32, message: impl fmt::Display) -> Result<(), FatalError> {
        let message = match &self.label {
            Some(label) => format!("{label} {message}"),
            None => message.to_string(),
        };
        match self.behavior {
            Behavior::Abort => {
                log::error!("fatal at {file}:{line}: {message}");
                std::process::abort();
            }
            Behavior::Raise => Err(FatalError {
                file: file.to_string(),
                line,
                message,
            }),
        }
    }
}

impl Default for FatalHandler {
    fn default() -> Self {
        FatalHandler::abort()
    }
}
