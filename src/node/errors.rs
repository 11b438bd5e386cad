use thiserror::Error;
use crate::content::structs::content_id::ContentId;
use crate::pieces::errors::AssemblyError;
use crate::protocol::errors::ProtocolError;
use crate::storage::errors::StorageError;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid tracker address: {0}")]
    InvalidAddress(String),

    #[error("Could not connect to tracker: {0}")]
    Connect(std::io::Error),

    #[error("Connection error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("No response to {command}")]
    NoResponse { command: String },

    #[error("Rejected by tracker: {0}")]
    Rejected(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Download incomplete, missing pieces: {missing:?}")]
    Incomplete { missing: Vec<u64> },

    #[error("Content mismatch: expected {expected}, got {actual}")]
    ContentMismatch { expected: ContentId, actual: ContentId },

    #[error("No peers hold the file")]
    NoPeers,
}
