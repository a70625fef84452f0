//! Typed client for the clipboard-next plugin backend.
//!
//! The privileged backend owns all real clipboard access: monitoring,
//! format negotiation, image decoding, file-list serialization. This
//! crate is the guest-side client. It builds fully-qualified command
//! identifiers ([`Command`]), marshals typed arguments and responses
//! through an injected [`Gateway`], aggregates per-format checks and
//! reads into a [`ClipboardSnapshot`], and bridges the backend's change
//! event into fresh snapshots via [`Client::on_clipboard_change`].
//!
//! The host runtime provides the actual transport; this crate assumes a
//! reliable request/response channel and at-least-once event delivery,
//! nothing more.

mod client;
mod commands;
mod error;
mod gateway;
mod models;
mod snapshot;
#[cfg(test)]
mod testing;
mod watch;

pub use client::Client;
pub use commands::{Command, events};
pub use error::{Error, Result};
pub use gateway::{EventStream, Gateway};
pub use models::{FileEntry, FilesContent, ImageContent};
pub use snapshot::{ClipboardContent, ClipboardFormat, ClipboardSnapshot, ReadOptions};
pub use watch::{ChangeOptions, HookError, Subscription};
