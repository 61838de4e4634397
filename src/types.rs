use serde::{Serialize, Serializer};
use std::fmt;
use std::io;

/// Why a file's content could not be captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadFailure {
    /// Opening or reading the file failed (permission denied, I/O error, ...).
    Io { kind: io::ErrorKind, message: String },
    /// The bytes were read but are not valid UTF-8.
    Decode { message: String },
}

impl ReadFailure {
    /// The I/O error kind, or `None` when the bytes were not valid UTF-8.
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            ReadFailure::Io { kind, .. } => Some(*kind),
            ReadFailure::Decode { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ReadFailure::Io { message, .. } | ReadFailure::Decode { message } => message,
        }
    }
}

impl From<io::Error> for ReadFailure {
    fn from(err: io::Error) -> Self {
        ReadFailure::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for ReadFailure {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ReadFailure::Decode {
            message: err.utf8_error().to_string(),
        }
    }
}

/// Renders the placeholder stored in the snapshot in place of the content.
impl fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<error reading file: {}>", self.message())
    }
}

/// The content captured for a single file.
///
/// Serializes as a plain string: the text itself, or the failure placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Unreadable(ReadFailure),
}

impl FileContent {
    pub fn text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text.as_str()),
            FileContent::Unreadable(_) => None,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileContent::Unreadable(_))
    }
}

impl From<Result<String, ReadFailure>> for FileContent {
    fn from(result: Result<String, ReadFailure>) -> Self {
        match result {
            Ok(text) => FileContent::Text(text),
            Err(failure) => FileContent::Unreadable(failure),
        }
    }
}

impl Serialize for FileContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FileContent::Text(text) => serializer.serialize_str(text),
            FileContent::Unreadable(failure) => serializer.collect_str(failure),
        }
    }
}
