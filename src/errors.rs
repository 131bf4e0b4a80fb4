//! Error type shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::mystery::cards::Room;

#[derive(Debug, Error)]
pub enum CluedoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("art for {room} not found at {path}")]
    MissingArt { room: Room, path: PathBuf },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CluedoError>;
