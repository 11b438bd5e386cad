use std::net::SocketAddr;
use std::time::Duration;
use log::debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use crate::node::errors::{SessionError, TransportError};
use crate::node::structs::tracker_client::TrackerClient;
use crate::protocol::enums::request::Request;
use crate::protocol::structs::response::Response;

impl TrackerClient {
    pub fn new(tracker_address: SocketAddr, request_timeout: Duration) -> TrackerClient
    {
        TrackerClient {
            tracker_address,
            request_timeout,
        }
    }

    pub fn tracker_address(&self) -> SocketAddr
    {
        self.tracker_address
    }

    /// Sends `request` and waits for the single response.
    #[tracing::instrument(level = "debug", skip(self, request), fields(command = request.command()))]
    pub async fn send(&self, request: &Request) -> Result<Response, SessionError>
    {
        let command = request.command();
        let payload = request.encode().map_err(TransportError::from)?;
        let reply = self.exchange(command, &payload).await?;
        if reply.is_empty() {
            return Err(SessionError::NoResponse { command: command.to_string() });
        }
        let response = Response::decode(&reply).map_err(TransportError::from)?;
        debug!("[NODE] {command} answered: {:?}", response.message.as_deref().or(response.error.as_deref()));
        Ok(response)
    }

    /// Sends `request` without expecting a reply and waits until the tracker
    /// closes the connection, which happens after the request is handled.
    /// A reply, when one arrives anyway, is a failure report.
    #[tracing::instrument(level = "debug", skip(self, request), fields(command = request.command()))]
    pub async fn send_oneway(&self, request: &Request) -> Result<(), SessionError>
    {
        let command = request.command();
        let payload = request.encode().map_err(TransportError::from)?;
        let reply = self.exchange(command, &payload).await?;
        if reply.is_empty() {
            return Ok(());
        }
        let response = Response::decode(&reply).map_err(TransportError::from)?;
        match response.failure_message() {
            Some(message) => Err(SessionError::Rejected(message.to_string())),
            None => Ok(()),
        }
    }

    async fn exchange(&self, command: &str, payload: &[u8]) -> Result<Vec<u8>, SessionError>
    {
        let exchange = async {
            let mut stream = TcpStream::connect(self.tracker_address).await.map_err(TransportError::Connect)?;
            stream.write_all(payload).await.map_err(TransportError::from)?;
            stream.shutdown().await.map_err(TransportError::from)?;
            let mut reply = Vec::new();
            stream.read_to_end(&mut reply).await.map_err(TransportError::from)?;
            Ok::<Vec<u8>, TransportError>(reply)
        };
        match tokio::time::timeout(self.request_timeout, exchange).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(SessionError::NoResponse { command: command.to_string() }),
        }
    }
}
