//! Command registry — logical operations mapped to wire identifiers.
//!
//! Every backend operation the typed wrappers call is an entry of the
//! closed [`Command`] enum; the identifier table is an exhaustive
//! `const fn` match. Adding a wrapper without a registry entry is a
//! compile error, not a runtime lookup miss.

use std::fmt;

/// A backend-exposed clipboard operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    StartWatch,
    StopWatch,
    HasText,
    HasRtf,
    HasHtml,
    HasImage,
    HasFiles,
    ReadText,
    ReadRtf,
    ReadHtml,
    ReadImage,
    ReadFiles,
    WriteText,
    WriteRtf,
    WriteHtml,
    WriteImage,
    WriteFiles,
    Clear,
    GetFilePath,
}

impl Command {
    /// Every registered command, for table-level assertions.
    pub const ALL: [Command; 19] = [
        Command::StartWatch,
        Command::StopWatch,
        Command::HasText,
        Command::HasRtf,
        Command::HasHtml,
        Command::HasImage,
        Command::HasFiles,
        Command::ReadText,
        Command::ReadRtf,
        Command::ReadHtml,
        Command::ReadImage,
        Command::ReadFiles,
        Command::WriteText,
        Command::WriteRtf,
        Command::WriteHtml,
        Command::WriteImage,
        Command::WriteFiles,
        Command::Clear,
        Command::GetFilePath,
    ];

    /// Fully-qualified wire identifier for this command.
    pub const fn name(self) -> &'static str {
        match self {
            Command::StartWatch => "plugin:clipboard-next|start_watch",
            Command::StopWatch => "plugin:clipboard-next|stop_watch",
            Command::HasText => "plugin:clipboard-next|has_text",
            Command::HasRtf => "plugin:clipboard-next|has_rtf",
            Command::HasHtml => "plugin:clipboard-next|has_html",
            Command::HasImage => "plugin:clipboard-next|has_image",
            Command::HasFiles => "plugin:clipboard-next|has_files",
            Command::ReadText => "plugin:clipboard-next|read_text",
            Command::ReadRtf => "plugin:clipboard-next|read_rtf",
            Command::ReadHtml => "plugin:clipboard-next|read_html",
            Command::ReadImage => "plugin:clipboard-next|read_image",
            Command::ReadFiles => "plugin:clipboard-next|read_files",
            Command::WriteText => "plugin:clipboard-next|write_text",
            Command::WriteRtf => "plugin:clipboard-next|write_rtf",
            Command::WriteHtml => "plugin:clipboard-next|write_html",
            Command::WriteImage => "plugin:clipboard-next|write_image",
            Command::WriteFiles => "plugin:clipboard-next|write_files",
            Command::Clear => "plugin:clipboard-next|clear",
            Command::GetFilePath => "plugin:clipboard-next|get_file_path",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend-emitted event names.
pub mod events {
    /// Fired by the backend whenever clipboard contents change.
    ///
    /// The client never relies on the event payload; see
    /// [`Client::on_clipboard_change`](crate::Client::on_clipboard_change).
    pub const CLIPBOARD_CHANGE: &str = "plugin:clipboard-next://clipboard_change";
}
