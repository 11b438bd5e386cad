use thiserror::Error;
use crate::content::structs::content_id::ContentId;
use crate::pieces::errors::AssemblyError;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Piece not found: {content_id}/{ordinal}")]
    NotFound { content_id: ContentId, ordinal: u64 },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),
}
