//! Remote-invocation seam between the client and the host runtime.
//!
//! The host shell owns the actual transport to the privileged backend;
//! this crate assumes a reliable request/response channel and
//! at-least-once event delivery behind this trait. Production code
//! injects the runtime's bridge; tests inject in-process fakes.

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use serde_json::Value;

use crate::error::Result;

/// Stream of event payloads for one subscriber.
///
/// Dropping the stream unsubscribes. The change-notification bridge
/// ignores the payload and re-reads the clipboard instead of trusting
/// event contents.
pub type EventStream = BoxStream<'static, Value>;

/// Host-runtime capability to reach the backend.
pub trait Gateway: Send + Sync + 'static {
    /// Send one named command with optional arguments and await the
    /// backend's response value, or a transport/backend fault as
    /// [`Error::Backend`](crate::Error::Backend).
    fn invoke(&self, command: &'static str, args: Option<Value>) -> BoxFuture<'_, Result<Value>>;

    /// Register an independent subscriber for a named backend event.
    /// Multiple subscribers may coexist; each gets its own stream.
    fn listen(&self, event: &'static str) -> BoxFuture<'_, Result<EventStream>>;
}
