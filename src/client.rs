//! Typed operation wrappers and the snapshot aggregator.
//!
//! One async method per backend command, each binding a registry entry
//! to declared argument and response shapes, plus
//! [`Client::read_clipboard`], which folds the per-format checks and
//! reads into a single [`ClipboardSnapshot`].

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::commands::Command;
use crate::error::{Error, Result};
use crate::gateway::Gateway;
use crate::models::{
    FilesContent, ImageContent, ReadImageArgs, WriteContentArgs, WriteFilesArgs, WriteImageArgs,
};
use crate::snapshot::{ClipboardContent, ClipboardFormat, ClipboardSnapshot, ReadOptions};

/// Typed clipboard client over an injected [`Gateway`].
///
/// Cheap to clone; clones share the gateway. The client holds no locks
/// and caches nothing across calls — the clipboard and the monitoring
/// flag live entirely in the backend.
pub struct Client<G: Gateway> {
    pub(crate) gateway: Arc<G>,
}

impl<G: Gateway> Clone for Client<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: Gateway> Client<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    async fn invoke<T: DeserializeOwned>(
        &self,
        command: Command,
        args: Option<Value>,
    ) -> Result<T> {
        let value = self.gateway.invoke(command.name(), args).await?;
        serde_json::from_value(value).map_err(|source| Error::Decode { command, source })
    }

    fn encode<A: Serialize>(command: Command, args: &A) -> Result<Value> {
        serde_json::to_value(args).map_err(|source| Error::Encode { command, source })
    }

    // -- Watch lifecycle --

    /// Start backend-side clipboard monitoring.
    ///
    /// Idempotence across repeated starts is the backend's contract;
    /// the client adds no state of its own and callers must not treat
    /// a duplicate start as an error.
    pub async fn start_watch(&self) -> Result<()> {
        self.invoke(Command::StartWatch, None).await
    }

    /// Stop backend-side clipboard monitoring. Safe to call without a
    /// prior start, per the backend contract.
    pub async fn stop_watch(&self) -> Result<()> {
        self.invoke(Command::StopWatch, None).await
    }

    // -- Existence checks --

    /// Whether the clipboard holds plain text.
    pub async fn has_text(&self) -> Result<bool> {
        self.invoke(Command::HasText, None).await
    }

    /// Whether the clipboard holds rich text.
    pub async fn has_rtf(&self) -> Result<bool> {
        self.invoke(Command::HasRtf, None).await
    }

    /// Whether the clipboard holds HTML.
    pub async fn has_html(&self) -> Result<bool> {
        self.invoke(Command::HasHtml, None).await
    }

    /// Whether the clipboard holds an image.
    pub async fn has_image(&self) -> Result<bool> {
        self.invoke(Command::HasImage, None).await
    }

    /// Whether the clipboard holds a file list.
    pub async fn has_files(&self) -> Result<bool> {
        self.invoke(Command::HasFiles, None).await
    }

    // -- Reads --

    /// Read plain text from the clipboard.
    ///
    /// What comes back when no text is present (an error or an empty
    /// string) is the backend's call; the client forwards it as-is.
    pub async fn read_text(&self) -> Result<String> {
        self.invoke(Command::ReadText, None).await
    }

    /// Read rich text from the clipboard.
    pub async fn read_rtf(&self) -> Result<String> {
        self.invoke(Command::ReadRtf, None).await
    }

    /// Read HTML from the clipboard.
    pub async fn read_html(&self) -> Result<String> {
        self.invoke(Command::ReadHtml, None).await
    }

    /// Read the clipboard image.
    ///
    /// The backend decodes the image and may persist it at `save_path`
    /// (its default directory when `None`); the returned metadata is
    /// whatever the backend reports, with no local disk assumptions.
    pub async fn read_image(&self, save_path: Option<PathBuf>) -> Result<ImageContent> {
        let args = Self::encode(Command::ReadImage, &ReadImageArgs { save_path })?;
        self.invoke(Command::ReadImage, Some(args)).await
    }

    /// Read the clipboard file list, in backend-reported order.
    pub async fn read_files(&self) -> Result<FilesContent> {
        self.invoke(Command::ReadFiles, None).await
    }

    // -- Writes --

    /// Write plain text to the clipboard. Observable by the next read.
    pub async fn write_text(&self, content: impl Into<String>) -> Result<()> {
        let args = Self::encode(
            Command::WriteText,
            &WriteContentArgs {
                content: content.into(),
            },
        )?;
        self.invoke(Command::WriteText, Some(args)).await
    }

    /// Write rich text to the clipboard.
    pub async fn write_rtf(&self, content: impl Into<String>) -> Result<()> {
        let args = Self::encode(
            Command::WriteRtf,
            &WriteContentArgs {
                content: content.into(),
            },
        )?;
        self.invoke(Command::WriteRtf, Some(args)).await
    }

    /// Write HTML to the clipboard.
    pub async fn write_html(&self, content: impl Into<String>) -> Result<()> {
        let args = Self::encode(
            Command::WriteHtml,
            &WriteContentArgs {
                content: content.into(),
            },
        )?;
        self.invoke(Command::WriteHtml, Some(args)).await
    }

    /// Write an image to the clipboard from a file path.
    ///
    /// The path is forwarded unvalidated; the backend fails the call if
    /// the file is unreadable.
    pub async fn write_image(&self, image_path: impl Into<PathBuf>) -> Result<()> {
        let args = Self::encode(
            Command::WriteImage,
            &WriteImageArgs {
                image_path: image_path.into(),
            },
        )?;
        self.invoke(Command::WriteImage, Some(args)).await
    }

    /// Write a file list to the clipboard. Paths are forwarded
    /// unvalidated, like [`write_image`](Client::write_image).
    pub async fn write_files(&self, files_path: Vec<PathBuf>) -> Result<()> {
        let args = Self::encode(Command::WriteFiles, &WriteFilesArgs { files_path })?;
        self.invoke(Command::WriteFiles, Some(args)).await
    }

    /// Remove all clipboard content.
    pub async fn clear(&self) -> Result<()> {
        self.invoke(Command::Clear, None).await
    }

    /// The backend's default persistence directory, for callers that
    /// omit `save_path`/`file_path` elsewhere.
    pub async fn get_file_path(&self) -> Result<PathBuf> {
        self.invoke(Command::GetFilePath, None).await
    }

    // -- Aggregation --

    /// Read every present format into one [`ClipboardSnapshot`].
    ///
    /// Checks run sequentially in [`ClipboardFormat::ALL`] order, each
    /// check followed by its read when the format is present. Every
    /// check/read pair is an independent round trip, so the result is
    /// best-effort consistent, not atomic: the clipboard can change
    /// mid-sequence, and that is a documented limitation rather than a
    /// bug.
    ///
    /// The image check always runs, but the image read (and the disk
    /// persistence it implies backend-side) happens only with
    /// [`ReadOptions::image_auto_save`] set; without it the image key
    /// is omitted even when the check reports true.
    ///
    /// Any failing check or read aborts the whole call with that error;
    /// no partial snapshot is returned.
    pub async fn read_clipboard(&self, options: &ReadOptions) -> Result<ClipboardSnapshot> {
        let mut snapshot = ClipboardSnapshot::default();

        for format in ClipboardFormat::ALL {
            match format {
                ClipboardFormat::Text => {
                    if self.has_text().await? {
                        snapshot.insert(ClipboardContent::Text(self.read_text().await?));
                    }
                }
                ClipboardFormat::Rtf => {
                    if self.has_rtf().await? {
                        snapshot.insert(ClipboardContent::Rtf(self.read_rtf().await?));
                    }
                }
                ClipboardFormat::Html => {
                    if self.has_html().await? {
                        snapshot.insert(ClipboardContent::Html(self.read_html().await?));
                    }
                }
                ClipboardFormat::Image => {
                    // Presence is cheap to check; materializing the
                    // image is not. Reading stays opt-in.
                    if self.has_image().await? && options.image_auto_save {
                        let image = self.read_image(options.file_path.clone()).await?;
                        snapshot.insert(ClipboardContent::Image(image));
                    }
                }
                ClipboardFormat::Files => {
                    if self.has_files().await? {
                        snapshot.insert(ClipboardContent::Files(self.read_files().await?));
                    }
                }
            }
        }

        Ok(snapshot)
    }
}
