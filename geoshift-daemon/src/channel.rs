//! Single-slot file mailbox between the external controller and the loop.
//!
//! The controller writes one full command record into the file; the loop
//! reads it on the next wake and removes it so the same command is never
//! applied twice. The read side makes no atomicity assumption beyond
//! "the controller writes the whole record in one operation".

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{io_err, DaemonError};

#[derive(Debug, Clone)]
pub struct CommandChannel {
    path: PathBuf,
}

impl CommandChannel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Non-blocking: the full channel contents if a command is pending,
    /// `None` if the mailbox is empty (file missing).
    pub fn peek(&self) -> Result<Option<String>, DaemonError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_err(&self.path, err)),
        }
    }

    /// Clear the mailbox after a command has been read. A missing file is
    /// fine (already consumed).
    pub fn consume(&self) -> Result<(), DaemonError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_err(&self.path, err)),
        }
    }
}
