use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Chunk size must be at least one byte")]
    InvalidChunkSize,

    #[error("Missing piece: {0}")]
    MissingPiece(u64),

    #[error("Duplicate piece: {0}")]
    DuplicatePiece(u64),

    #[error("Unexpected piece {ordinal} for a file of {total} pieces")]
    UnexpectedPiece { ordinal: u64, total: u64 },
}
