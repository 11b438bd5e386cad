#[cfg(test)]
mod server_tests {
    mod tcp_server_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::{TcpListener, TcpStream};
        use crate::config::structs::configuration::Configuration;
        use crate::server::server::tracker_service;
        use crate::server::structs::tcp_server::TcpServer;
        use crate::storage::structs::piece_store::PieceStore;
        use crate::tracker::structs::swarm_tracker::SwarmTracker;

        async fn exchange(addr: std::net::SocketAddr, payload: &[u8]) -> Vec<u8> {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream.write_all(payload).await.unwrap();
            stream.shutdown().await.unwrap();
            let mut response = Vec::new();
            stream.read_to_end(&mut response).await.unwrap();
            response
        }

        #[tokio::test]
        async fn test_read_request_enforces_limit() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let client = tokio::spawn(async move {
                let mut stream = TcpStream::connect(addr).await.unwrap();
                stream.write_all(&[b'x'; 32]).await.unwrap();
                stream.shutdown().await.unwrap();
            });
            let (mut stream, _) = listener.accept().await.unwrap();
            assert!(TcpServer::read_request(&mut stream, 16).await.is_err());
            client.await.unwrap();
        }

        #[tokio::test]
        async fn test_unknown_command_and_keeps_serving() {
            let mut config = Configuration::init();
            config.tracker.bind_address = String::from("127.0.0.1:0");
            let tracker = Arc::new(SwarmTracker::new(Arc::new(config), PieceStore::memory()));
            let (tx, rx) = tokio::sync::watch::channel(false);
            let (addr, handle) = tracker_service("127.0.0.1:0".parse().unwrap(), tracker.clone(), rx).await.unwrap();

            let response = exchange(addr, br#"{"command": "explode"}"#).await;
            assert_eq!(response, br#"{"error":"Unknown command"}"#.to_vec());

            let response = exchange(addr, br#"{"command": "download", "file_name": "none"}"#).await;
            let value: serde_json::Value = serde_json::from_slice(&response).unwrap();
            assert_eq!(value["status"], "error");
            assert_eq!(value["message"], "File not found");

            assert!(exchange(addr, b"").await.is_empty());
            assert_eq!(tracker.get_stats().connections_handled, 3);

            tx.send(true).unwrap();
            tokio::time::timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
        }
    }
}
