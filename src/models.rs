//! Wire payload and argument types.
//!
//! Field names are camelCase on the wire to match the backend's
//! marshalling; these structs are the single source of truth for those
//! shapes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Image metadata reported by a `read_image` call.
///
/// `path` is where the backend persisted the decoded image. The client
/// makes no assumption about disk state beyond what is reported here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Size in bytes.
    pub size: u64,
}

/// One entry of a copied file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub path: String,
    /// Size in bytes.
    pub size: u64,
}

/// File list reported by `read_files`.
///
/// Entry order is whatever the backend provides; no sort order is
/// guaranteed. `size` is the total across all entries, in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesContent {
    pub files: Vec<FileEntry>,
    pub size: u64,
}

// -- Request arguments --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReadImageArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WriteContentArgs {
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WriteImageArgs {
    pub image_path: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WriteFilesArgs {
    pub files_path: Vec<PathBuf>,
}
