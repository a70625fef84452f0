//! Client error type.
//!
//! Nothing is recovered locally: transport and backend faults surface
//! verbatim to the caller of the failing wrapper, and marshalling
//! faults name the offending command. The one exception — isolating
//! `before`-hook failures from the subscription lifecycle — lives in
//! the change-notification bridge, not here.

use crate::commands::Command;

/// Errors surfaced by client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote-invocation channel reported failure: backend
    /// unreachable, backend-side error, or arguments the backend
    /// rejected. Carried verbatim; wrappers never retry or translate.
    #[error("backend: {0}")]
    Backend(String),

    /// Request arguments failed to serialize.
    #[error("encode {} args: {source}", .command.name())]
    Encode {
        command: Command,
        #[source]
        source: serde_json::Error,
    },

    /// A response payload did not match the command's declared shape.
    #[error("decode {} response: {source}", .command.name())]
    Decode {
        command: Command,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
