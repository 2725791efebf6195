use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Failed to load notes from {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    #[error("Failed to save notes to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Note with id {0} not found")]
    NotFound(u64),

    #[error("Invalid note id: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NoteError {
    pub(crate) fn load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        NoteError::Load {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;
