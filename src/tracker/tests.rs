#[cfg(test)]
mod tracker_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::storage::structs::piece_store::PieceStore;
    use crate::tracker::structs::swarm_tracker::SwarmTracker;

    fn create_test_tracker() -> SwarmTracker {
        SwarmTracker::new(Arc::new(Configuration::init()), PieceStore::memory())
    }

    mod node_id_tests {
        use std::collections::HashSet;
        use crate::tracker::impls::node_id::NODE_ID_PREFIX;
        use crate::tracker::structs::node_id::NodeId;
        use super::create_test_tracker;

        #[test]
        fn test_node_id_format() {
            let node_id = NodeId::random();
            assert!(node_id.as_str().starts_with(NODE_ID_PREFIX));
            let suffix = &node_id.as_str()[NODE_ID_PREFIX.len()..];
            assert_eq!(suffix.len(), 8);
            assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        }

        #[test]
        fn test_generated_ids_are_unique() {
            let tracker = create_test_tracker();
            let ids: HashSet<NodeId> = (0..2000).map(|_| tracker.generate_node_id()).collect();
            assert_eq!(ids.len(), 2000);
            assert_eq!(tracker.nodes_count(), 2000);
        }

        #[test]
        fn test_recorded_node_is_known() {
            let tracker = create_test_tracker();
            let node_id = NodeId::from("node_deadbeef");
            assert!(tracker.record_node(&node_id));
            assert!(!tracker.record_node(&node_id));
            assert!(tracker.is_known_node(&node_id));
        }
    }

    mod swarm_tests {
        use std::collections::BTreeSet;
        use crate::content::content::hash_bytes;
        use crate::tracker::structs::node_id::NodeId;
        use crate::tracker::structs::swarm_peer::SwarmPeer;
        use super::create_test_tracker;

        fn peer(name: &str, pieces: &[u64]) -> SwarmPeer {
            SwarmPeer::new(NodeId::from(name), pieces.iter().copied().collect(), String::new(), None)
        }

        #[test]
        fn test_peers_holding_intersections() {
            let tracker = create_test_tracker();
            let content_id = hash_bytes(b"holding");
            tracker.register_or_update(content_id, peer("node_x", &[0, 2, 5]), None);
            tracker.register_or_update(content_id, peer("node_y", &[1, 2]), None);

            let holders = tracker.peers_holding(content_id, &BTreeSet::from([0, 1, 2, 9]));
            assert_eq!(holders.len(), 2);
            let x = holders.iter().find(|p| p.node_id.as_str() == "node_x").unwrap();
            let y = holders.iter().find(|p| p.node_id.as_str() == "node_y").unwrap();
            assert_eq!(x.pieces, BTreeSet::from([0, 2]));
            assert_eq!(y.pieces, BTreeSet::from([1, 2]));
            assert!(holders.iter().all(|p| !p.pieces.contains(&9)));
        }

        #[test]
        fn test_peers_holding_omits_empty_overlap() {
            let tracker = create_test_tracker();
            let content_id = hash_bytes(b"overlap");
            tracker.register_or_update(content_id, peer("node_x", &[0]), None);
            tracker.register_or_update(content_id, peer("node_y", &[3]), None);

            let holders = tracker.peers_holding(content_id, &BTreeSet::from([3]));
            assert_eq!(holders.len(), 1);
            assert_eq!(holders[0].node_id.as_str(), "node_y");
            assert!(tracker.peers_holding(content_id, &BTreeSet::from([7])).is_empty());
            assert!(tracker.peers_holding(hash_bytes(b"unknown"), &BTreeSet::from([0])).is_empty());
        }

        #[test]
        fn test_swarms_are_isolated() {
            let tracker = create_test_tracker();
            let first = hash_bytes(b"first");
            let second = hash_bytes(b"second");
            tracker.register_or_update(first, peer("node_a", &[0, 1]), Some(2));

            assert!(tracker.get_swarm(second).is_none());
            assert!(tracker.peers_excluding(second, None).is_empty());
            assert_eq!(tracker.total_pieces(first), Some(2));
            assert_eq!(tracker.total_pieces(second), None);
        }

        #[test]
        fn test_upsert_is_idempotent() {
            let tracker = create_test_tracker();
            let content_id = hash_bytes(b"idempotent");
            assert!(tracker.register_or_update(content_id, peer("node_a", &[0, 1]), None).is_none());
            assert!(tracker.register_or_update(content_id, peer("node_a", &[0, 1]), None).is_some());

            let swarm = tracker.get_swarm(content_id).unwrap();
            assert_eq!(swarm.peers.len(), 1);
            assert_eq!(tracker.get_stats().peers, 1);
            assert_eq!(tracker.swarms_count(), 1);
        }

        #[test]
        fn test_upsert_replaces_piece_set() {
            let tracker = create_test_tracker();
            let content_id = hash_bytes(b"replace");
            tracker.register_or_update(content_id, peer("node_a", &[0, 1, 2]), Some(3));
            tracker.register_or_update(content_id, peer("node_a", &[2]), None);

            let swarm = tracker.get_swarm(content_id).unwrap();
            assert_eq!(swarm.peers[&NodeId::from("node_a")].pieces, BTreeSet::from([2]));
            assert_eq!(swarm.total_pieces, Some(3));
        }

        #[test]
        fn test_peers_excluding() {
            let tracker = create_test_tracker();
            let content_id = hash_bytes(b"exclude");
            tracker.register_or_update(content_id, peer("node_a", &[0]), None);
            tracker.register_or_update(content_id, peer("node_b", &[1]), None);

            let others = tracker.peers_excluding(content_id, Some(&NodeId::from("node_a")));
            assert_eq!(others.len(), 1);
            assert_eq!(others[0].node_id.as_str(), "node_b");
            assert_eq!(tracker.peers_excluding(content_id, None).len(), 2);
        }
    }

    mod file_registry_tests {
        use crate::content::content::hash_bytes;
        use super::create_test_tracker;

        #[test]
        fn test_bind_name_last_writer_wins() {
            let tracker = create_test_tracker();
            let old = hash_bytes(b"old");
            let new = hash_bytes(b"new");

            assert_eq!(tracker.bind_name("report.pdf", old), None);
            assert_eq!(tracker.bind_name("report.pdf", new), Some(old));
            assert_eq!(tracker.resolve_name("report.pdf"), Some(new));
            assert_eq!(tracker.resolve_name("other.pdf"), None);
            assert_eq!(tracker.files_count(), 1);
        }
    }

    mod handler_tests {
        use std::collections::BTreeSet;
        use crate::content::content::{hash_bytes, magnet_link};
        use crate::protocol::enums::request::Request;
        use crate::protocol::structs::download_pieces_request::DownloadPiecesRequest;
        use crate::protocol::structs::download_request::DownloadRequest;
        use crate::protocol::structs::register_request::RegisterRequest;
        use crate::protocol::structs::upload_piece_request::UploadPieceRequest;
        use crate::protocol::structs::upload_request::UploadRequest;
        use crate::tracker::impls::swarm_tracker_handlers::{MESSAGE_FILE_NOT_FOUND, MESSAGE_NO_PEERS, MESSAGE_REGISTERED};
        use crate::tracker::structs::node_id::NodeId;
        use super::create_test_tracker;

        #[tokio::test]
        async fn test_register_issues_node_id() {
            let tracker = create_test_tracker();
            let content_id = hash_bytes(b"register");
            let response = tracker.handle_request(Request::Register(RegisterRequest {
                file_name: String::from("a.bin"),
                file_hash: content_id,
                file_pieces: vec![0, 1],
                magnet_link: String::new(),
                total_pieces: Some(2),
            }), None).await.unwrap();

            assert!(response.is_success());
            assert_eq!(response.message.as_deref(), Some(MESSAGE_REGISTERED));
            let node_id = response.node_id.unwrap();
            assert!(tracker.is_known_node(&node_id));
            assert_eq!(tracker.resolve_name("a.bin"), Some(content_id));
            let swarm = tracker.get_swarm(content_id).unwrap();
            assert_eq!(swarm.peers[&node_id].magnet_link, magnet_link(&content_id));
        }

        #[tokio::test]
        async fn test_register_rejects_empty_name() {
            let tracker = create_test_tracker();
            let response = tracker.handle_request(Request::Register(RegisterRequest {
                file_name: String::new(),
                file_hash: hash_bytes(b"x"),
                file_pieces: vec![],
                magnet_link: String::new(),
                total_pieces: None,
            }), None).await.unwrap();
            assert!(!response.is_success());
            assert_eq!(tracker.swarms_count(), 0);
        }

        #[tokio::test]
        async fn test_upload_lists_other_peers() {
            let tracker = create_test_tracker();
            let content_id = hash_bytes(b"upload");
            for (node, pieces) in [("node_aaaaaaaa", vec![0]), ("node_bbbbbbbb", vec![0, 1])] {
                let response = tracker.handle_request(Request::Upload(UploadRequest {
                    node_id: NodeId::from(node),
                    file_name: String::from("u.bin"),
                    file_hash: content_id,
                    file_pieces: pieces,
                    magnet_link: magnet_link(&content_id),
                    total_pieces: Some(2),
                }), None).await.unwrap();
                assert!(response.is_success());
                if node == "node_bbbbbbbb" {
                    let peers = response.peers.unwrap();
                    assert_eq!(peers.len(), 1);
                    assert_eq!(peers[0].node_id.as_str(), "node_aaaaaaaa");
                }
            }
            assert!(tracker.is_known_node(&NodeId::from("node_aaaaaaaa")));
        }

        #[tokio::test]
        async fn test_download_unknown_file() {
            let tracker = create_test_tracker();
            let response = tracker.handle_request(Request::Download(DownloadRequest {
                file_name: String::from("missing.bin"),
                missing_pieces: None,
            }), None).await.unwrap();
            assert!(!response.is_success());
            assert_eq!(response.message.as_deref(), Some(MESSAGE_FILE_NOT_FOUND));
            assert_eq!(tracker.get_stats().not_found, 1);
        }

        #[tokio::test]
        async fn test_download_known_file_without_holders() {
            let tracker = create_test_tracker();
            let content_id = hash_bytes(b"lonely");
            tracker.bind_name("lonely.bin", content_id);
            let response = tracker.handle_request(Request::Download(DownloadRequest {
                file_name: String::from("lonely.bin"),
                missing_pieces: Some(vec![0]),
            }), None).await.unwrap();
            assert!(response.is_success());
            assert_eq!(response.file_hash, Some(content_id));
            assert_eq!(response.peers, Some(vec![]));
        }

        #[tokio::test]
        async fn test_upload_piece_then_download_pieces() {
            let tracker = create_test_tracker();
            let content_id = hash_bytes(b"pieces");
            tracker.bind_name("p.bin", content_id);
            tracker.register_or_update(
                content_id,
                crate::tracker::structs::swarm_peer::SwarmPeer::new(NodeId::from("node_a"), BTreeSet::from([0, 1]), String::new(), None),
                Some(2),
            );

            for (ordinal, data) in [(0u64, b"zero".as_slice()), (1, b"one".as_slice())] {
                let response = tracker.handle_request(Request::UploadPiece(UploadPieceRequest::new(content_id, ordinal, data)), None).await;
                assert!(response.is_none());
            }
            assert_eq!(tracker.get_stats().pieces_stored, 2);

            let response = tracker.handle_request(Request::DownloadPieces(DownloadPiecesRequest {
                file_name: String::from("p.bin"),
                missing_pieces: vec![1, 0],
            }), None).await.unwrap();
            assert!(response.is_success());
            let pieces = response.pieces.unwrap();
            assert_eq!(pieces.len(), 2);
            assert_eq!(pieces[0].piece_index, 0);
            assert_eq!(pieces[1].decode_data().unwrap(), b"one".to_vec());
            assert_eq!(response.total_pieces, Some(2));
        }

        #[tokio::test]
        async fn test_download_pieces_without_holders() {
            let tracker = create_test_tracker();
            tracker.bind_name("p.bin", hash_bytes(b"nobody"));
            let response = tracker.handle_request(Request::DownloadPieces(DownloadPiecesRequest {
                file_name: String::from("p.bin"),
                missing_pieces: vec![0],
            }), None).await.unwrap();
            assert_eq!(response.message.as_deref(), Some(MESSAGE_NO_PEERS));
        }

        #[tokio::test]
        async fn test_handle_payload_bad_input() {
            let tracker = create_test_tracker();
            assert!(tracker.handle_payload(b"", None).await.is_none());

            let response = tracker.handle_payload(br#"{"command": "explode"}"#, None).await.unwrap();
            assert_eq!(response.error.as_deref(), Some("Unknown command"));

            let response = tracker.handle_payload(b"\xff\xfe", None).await.unwrap();
            assert!(response.error.is_some());

            let response = tracker.handle_payload(br#"{"command": "upload_piece", "file_hash": "00", "piece_index": 0}"#, None).await.unwrap();
            assert!(!response.is_success());
            assert!(response.error.is_none());
            assert_eq!(tracker.get_stats().protocol_errors, 3);
        }
    }
}
