//! Clipboard formats, tagged content, and the aggregated snapshot.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{FilesContent, ImageContent};

/// Closed set of clipboard formats the backend can report.
///
/// Doubles as the key type of [`ClipboardSnapshot`]. Exhaustive matches
/// over it keep the registry, the wrappers, and the aggregator loop in
/// sync when a format is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardFormat {
    Text,
    Rtf,
    Html,
    Image,
    Files,
}

impl ClipboardFormat {
    /// Aggregation order. [`Client::read_clipboard`] checks formats in
    /// exactly this sequence, and snapshot iteration follows it too.
    ///
    /// [`Client::read_clipboard`]: crate::Client::read_clipboard
    pub const ALL: [ClipboardFormat; 5] = [
        ClipboardFormat::Text,
        ClipboardFormat::Rtf,
        ClipboardFormat::Html,
        ClipboardFormat::Image,
        ClipboardFormat::Files,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ClipboardFormat::Text => "text",
            ClipboardFormat::Rtf => "rtf",
            ClipboardFormat::Html => "html",
            ClipboardFormat::Image => "image",
            ClipboardFormat::Files => "files",
        }
    }
}

impl fmt::Display for ClipboardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clipboard content tagged by format.
///
/// The variant is the format; the two can never disagree. Serializes as
/// `{"format": ..., "value": ...}` for callers persisting snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "value", rename_all = "lowercase")]
pub enum ClipboardContent {
    Text(String),
    Rtf(String),
    Html(String),
    Image(ImageContent),
    Files(FilesContent),
}

impl ClipboardContent {
    pub const fn format(&self) -> ClipboardFormat {
        match self {
            ClipboardContent::Text(_) => ClipboardFormat::Text,
            ClipboardContent::Rtf(_) => ClipboardFormat::Rtf,
            ClipboardContent::Html(_) => ClipboardFormat::Html,
            ClipboardContent::Image(_) => ClipboardFormat::Image,
            ClipboardContent::Files(_) => ClipboardFormat::Files,
        }
    }
}

/// Point-in-time, best-effort view of every format present on the
/// clipboard.
///
/// Built fresh on every aggregation and never mutated after being
/// handed out. A missing key means the format was not present (or, for
/// image, was present but not materialized — see
/// [`ReadOptions::image_auto_save`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClipboardSnapshot {
    entries: BTreeMap<ClipboardFormat, ClipboardContent>,
}

impl ClipboardSnapshot {
    /// Insert content under its own format key. The key derives from
    /// the tag, so a slot can never hold a mismatched payload.
    pub(crate) fn insert(&mut self, content: ClipboardContent) {
        self.entries.insert(content.format(), content);
    }

    pub fn get(&self, format: ClipboardFormat) -> Option<&ClipboardContent> {
        self.entries.get(&format)
    }

    pub fn contains(&self, format: ClipboardFormat) -> bool {
        self.entries.contains_key(&format)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Formats present, in [`ClipboardFormat::ALL`] order.
    pub fn formats(&self) -> impl Iterator<Item = ClipboardFormat> + '_ {
        self.entries.keys().copied()
    }

    pub fn text(&self) -> Option<&str> {
        match self.entries.get(&ClipboardFormat::Text) {
            Some(ClipboardContent::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn rtf(&self) -> Option<&str> {
        match self.entries.get(&ClipboardFormat::Rtf) {
            Some(ClipboardContent::Rtf(rtf)) => Some(rtf),
            _ => None,
        }
    }

    pub fn html(&self) -> Option<&str> {
        match self.entries.get(&ClipboardFormat::Html) {
            Some(ClipboardContent::Html(html)) => Some(html),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&ImageContent> {
        match self.entries.get(&ClipboardFormat::Image) {
            Some(ClipboardContent::Image(image)) => Some(image),
            _ => None,
        }
    }

    pub fn files(&self) -> Option<&FilesContent> {
        match self.entries.get(&ClipboardFormat::Files) {
            Some(ClipboardContent::Files(files)) => Some(files),
            _ => None,
        }
    }
}

/// Options governing one aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Read (and let the backend persist) the image when one is
    /// present. Off by default: image existence is cheap to check but
    /// expensive to materialize.
    pub image_auto_save: bool,
    /// Destination hint forwarded to the backend for image
    /// materialization. Backend default when `None`; see
    /// [`Client::get_file_path`](crate::Client::get_file_path).
    pub file_path: Option<PathBuf>,
}
