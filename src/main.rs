use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use swarm_tracker::common::common::{setup_logging, shutdown_waiting};
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::node::structs::node_session::NodeSession;
use swarm_tracker::server::server::tracker_service;
use swarm_tracker::storage::structs::piece_store::PieceStore;
use swarm_tracker::structs::{Cli, Command};
use swarm_tracker::tracker::structs::swarm_tracker::SwarmTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .thread_name("core")
        .enable_all()
        .build()?
        .block_on(async move {
            match args.command {
                Command::Serve => serve(config).await,
                Command::Upload { path, name } => {
                    let mut session = match NodeSession::open(&config.node).await {
                        Ok(session) => session,
                        Err(e) => {
                            error!("[NODE] {e}");
                            exit(1);
                        }
                    };
                    match session.upload(&path, name.as_deref()).await {
                        Ok(report) => {
                            info!("[NODE] Uploaded {} as {} ({} pieces) from {}", report.file_name, report.content_id, report.pieces, report.node_id);
                            for peer in report.peers {
                                info!("[NODE] Also shared by {} ({} pieces)", peer.node_id, peer.file_pieces.len());
                            }
                            Ok(())
                        }
                        Err(e) => {
                            error!("[NODE] Upload failed: {e}");
                            exit(1);
                        }
                    }
                }
                Command::Download { name, output } => {
                    let mut session = match NodeSession::open(&config.node).await {
                        Ok(session) => session,
                        Err(e) => {
                            error!("[NODE] {e}");
                            exit(1);
                        }
                    };
                    match session.download(&name, &output).await {
                        Ok(report) => {
                            info!("[NODE] Downloaded {} ({} bytes, {} of {} pieces fetched)", report.file_name, report.bytes, report.fetched, report.total_pieces);
                            Ok(())
                        }
                        Err(e) => {
                            error!("[NODE] Download failed: {e}");
                            exit(1);
                        }
                    }
                }
            }
        })
}

async fn serve(config: Arc<Configuration>) -> std::io::Result<()>
{
    let storage = match PieceStore::new(&config.storage).await {
        Ok(storage) => storage,
        Err(e) => {
            error!("[BOOT] Could not open piece storage: {e}");
            exit(1);
        }
    };
    let tracker = Arc::new(SwarmTracker::new(config.clone(), storage));

    let bind_address: SocketAddr = match config.tracker.bind_address.parse() {
        Ok(address) => address,
        Err(_) => {
            error!("[BOOT] Invalid bind address: {}", config.tracker.bind_address);
            exit(1);
        }
    };
    let (tx, rx) = tokio::sync::watch::channel(false);

    let mut deadlocks_rx = rx.clone();
    let deadlocks_handle = tokio::spawn(async move {
        info!("[BOOT] Starting thread for deadlocks...");
        let mut interval = tokio::time::interval(Duration::from_secs(30));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let deadlocks = deadlock::check_deadlock();
                    if !deadlocks.is_empty() {
                        info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                        for (i, threads) in deadlocks.iter().enumerate() {
                            info!("[DEADLOCK] #{i}");
                            for t in threads {
                                info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                info!("[DEADLOCK] {:#?}", t.backtrace());
                            }
                        }
                    }
                }
                _ = deadlocks_rx.changed() => {
                    info!("[BOOT] Shutting down thread for deadlocks...");
                    return;
                }
            }
        }
    });

    let (_, server_handle) = match tracker_service(bind_address, tracker.clone(), rx.clone()).await {
        Ok(service) => service,
        Err(e) => {
            error!("[BOOT] Could not listen on {bind_address}: {e}");
            exit(1);
        }
    };

    let console_interval = config.log_console_interval;
    info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
    let tracker_spawn_stats = tracker.clone();
    let stats_rx = rx.clone();
    let stats_handle = tokio::spawn(async move {
        loop {
            if shutdown_waiting(Duration::from_secs(console_interval), stats_rx.clone()).await {
                info!("[BOOT] Shutting down thread for console updates...");
                return;
            }
            let stats = tracker_spawn_stats.get_stats();
            info!(
                "[STATS] Swarms: {} - Peers: {} - Nodes: {} - Files: {} - Pieces: {}",
                stats.swarms, stats.peers, stats.nodes, stats.files, stats.pieces_stored
            );
            info!(
                "[STATS] Connections: {} - Register: {} - Upload: {} - Upload piece: {} - Download: {} - Download pieces: {}",
                stats.connections_handled, stats.registers_handled, stats.uploads_handled,
                stats.upload_pieces_handled, stats.downloads_handled, stats.download_pieces_handled
            );
            info!(
                "[STATS] Protocol errors: {} - Not found: {} - Storage errors: {}",
                stats.protocol_errors, stats.not_found, stats.storage_errors
            );
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("Shutdown request received, shutting down...");
    let _ = tx.send(true);
    let _ = server_handle.await;
    let _ = stats_handle.await;
    let _ = deadlocks_handle.await;
    info!("Server shutting down completed");
    Ok(())
}
