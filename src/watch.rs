//! Change-notification bridge: backend change events become fresh
//! snapshots delivered to caller logic.
//!
//! The backend only signals "something changed"; the bridge never
//! trusts event contents and always re-reads the clipboard. Backend
//! monitoring itself is a separate concern — see
//! [`Client::start_watch`] and [`Client::stop_watch`].

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::client::Client;
use crate::commands::events::CLIPBOARD_CHANGE;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::snapshot::{ClipboardSnapshot, ReadOptions};

/// Error a `before` hook may raise to skip one notification cycle.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

type BeforeHook = Arc<dyn Fn() -> std::result::Result<(), HookError> + Send + Sync>;

/// Options for [`Client::on_clipboard_change`].
pub struct ChangeOptions {
    /// Materialize the image on each re-read; see
    /// [`ReadOptions::image_auto_save`]. Off by default.
    pub image_auto_save: bool,
    /// Destination hint forwarded to the backend for image
    /// materialization.
    pub file_path: Option<PathBuf>,
    before: Option<BeforeHook>,
}

impl ChangeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_auto_save(mut self, on: bool) -> Self {
        self.image_auto_save = on;
        self
    }

    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Hook run at the start of each notification cycle, before any
    /// remote call. Returning `Err` skips that cycle; the subscription
    /// itself stays alive.
    pub fn before<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> std::result::Result<(), HookError> + Send + Sync + 'static,
    {
        self.before = Some(Arc::new(hook));
        self
    }
}

impl Default for ChangeOptions {
    fn default() -> Self {
        Self {
            image_auto_save: false,
            file_path: None,
            before: None,
        }
    }
}

impl fmt::Debug for ChangeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeOptions")
            .field("image_auto_save", &self.image_auto_save)
            .field("file_path", &self.file_path)
            .field("before", &self.before.is_some())
            .finish()
    }
}

/// Handle for one active change subscription.
///
/// [`cancel`](Subscription::cancel) stops delivery. Dropping the handle
/// without cancelling detaches it and delivery continues — tearing the
/// subscription down is the caller's explicit responsibility, and it
/// does not stop backend-side monitoring either (that is
/// [`Client::stop_watch`]'s job). One cycle already in flight when
/// `cancel` runs may still deliver its snapshot; callers must tolerate
/// that straggler.
#[derive(Debug)]
pub struct Subscription {
    dispatcher: JoinHandle<()>,
}

impl Subscription {
    /// Stop receiving notifications. In-flight cycles are not
    /// interrupted.
    pub fn cancel(self) {
        self.dispatcher.abort();
    }

    /// Whether the dispatcher is still consuming events.
    pub fn is_active(&self) -> bool {
        !self.dispatcher.is_finished()
    }
}

impl<G: Gateway> Client<G> {
    /// Subscribe to clipboard changes.
    ///
    /// Each backend event starts its own independent cycle: run the
    /// configured `before` hook, re-read the clipboard with the
    /// configured options, and hand the snapshot to `callback`. The
    /// event payload is ignored. Cycles are not serialized — when
    /// events arrive faster than aggregation completes, callbacks can
    /// land out of event order.
    ///
    /// A failing `before` hook or a failed re-read skips only that
    /// cycle (the failure is logged); later events are unaffected. A
    /// panicking hook likewise poisons only its own cycle.
    ///
    /// Events fire only while backend monitoring runs; see
    /// [`Client::start_watch`].
    pub async fn on_clipboard_change<F>(
        &self,
        callback: F,
        options: ChangeOptions,
    ) -> Result<Subscription>
    where
        F: Fn(ClipboardSnapshot) + Send + Sync + 'static,
    {
        let mut events = self.gateway.listen(CLIPBOARD_CHANGE).await?;

        let ChangeOptions {
            image_auto_save,
            file_path,
            before,
        } = options;
        let read_options = ReadOptions {
            image_auto_save,
            file_path,
        };
        let client = self.clone();
        let callback = Arc::new(callback);

        let dispatcher = tokio::spawn(async move {
            while let Some(_payload) = events.next().await {
                let client = client.clone();
                let callback = Arc::clone(&callback);
                let before = before.clone();
                let read_options = read_options.clone();
                // One task per notification: a slow or failing cycle
                // never blocks the next event.
                tokio::spawn(async move {
                    if let Some(hook) = &before {
                        if let Err(error) = hook() {
                            tracing::warn!(error = %error, "before hook failed, skipping cycle");
                            return;
                        }
                    }
                    match client.read_clipboard(&read_options).await {
                        Ok(snapshot) => callback(snapshot),
                        Err(error) => {
                            tracing::warn!(error = %error, "clipboard re-read failed");
                        }
                    }
                });
            }
            tracing::debug!("clipboard change stream ended");
        });

        Ok(Subscription { dispatcher })
    }
}
