use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid message: {0}")]
    Decode(String),

    #[error("Missing command")]
    MissingCommand,

    #[error("Unknown command")]
    UnknownCommand(String),

    #[error("Invalid {command} request: {reason}")]
    InvalidRequest { command: String, reason: String },

    #[error("Invalid piece data: {0}")]
    InvalidPieceData(String),

    #[error("Could not encode message: {0}")]
    Encode(String),
}
