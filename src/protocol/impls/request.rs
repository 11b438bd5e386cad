use log::debug;
use serde_json::Value;
use crate::protocol::enums::request::Request;
use crate::protocol::errors::ProtocolError;

const KNOWN_COMMANDS: [&str; 5] = ["register", "upload", "upload_piece", "download", "download_pieces"];

impl Request {
    /// Decodes one request payload.
    ///
    /// The payload is parsed into a JSON value first so a missing or unknown
    /// `command` is told apart from a known command with bad fields.
    pub fn decode(payload: &[u8]) -> Result<Request, ProtocolError>
    {
        let value: Value = serde_json::from_slice(payload).map_err(|e| ProtocolError::Decode(e.to_string()))?;
        let object = match value.as_object() {
            None => return Err(ProtocolError::Decode(String::from("expected a JSON object"))),
            Some(object) => object
        };
        let command = match object.get("command") {
            None => return Err(ProtocolError::MissingCommand),
            Some(Value::String(command)) => command.clone(),
            Some(_) => return Err(ProtocolError::UnknownCommand(value["command"].to_string()))
        };
        if !KNOWN_COMMANDS.contains(&command.as_str()) {
            return Err(ProtocolError::UnknownCommand(command));
        }
        let request: Request = serde_json::from_value(value).map_err(|e| ProtocolError::InvalidRequest {
            command: command.clone(),
            reason: e.to_string(),
        })?;
        debug!("[PROTOCOL] Decoded {} request", command);
        Ok(request)
    }

    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError>
    {
        serde_json::to_vec(self).map_err(|e| ProtocolError::Encode(e.to_string()))
    }

    pub fn command(&self) -> &'static str
    {
        match self {
            Request::Register(_) => "register",
            Request::Upload(_) => "upload",
            Request::UploadPiece(_) => "upload_piece",
            Request::Download(_) => "download",
            Request::DownloadPieces(_) => "download_pieces",
        }
    }
}
