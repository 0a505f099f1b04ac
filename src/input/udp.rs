//! UDP Control Listener
//!
//! One ASCII command per datagram: case-insensitive, whitespace-trimmed,
//! run through the shared normalizer. Malformed or empty payloads are
//! ignored; this channel is one-way control-signal ingestion and is
//! never acknowledged.

use std::net::SocketAddr;

use tokio::net::UdpSocket;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::game::command::Source;
use crate::input::channel::InputSender;
use crate::input::ListenError;

/// Largest accepted datagram; longer payloads are truncated.
const MAX_DATAGRAM: usize = 64;

/// Bind the control socket and serve it until shutdown.
///
/// A bind failure is returned so the caller can log it and degrade;
/// receive errors are transient and skipped.
pub async fn run_udp_listener(
    bind_addr: SocketAddr,
    sender: InputSender,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), ListenError> {
    let socket = UdpSocket::bind(bind_addr).await.map_err(ListenError::Bind)?;
    info!("UDP control listener on {}", bind_addr);
    listen(socket, sender, shutdown).await;
    Ok(())
}

/// Serve an already-bound socket. Split out so tests can bind an
/// ephemeral port themselves.
async fn listen(socket: UdpSocket, sender: InputSender, mut shutdown: broadcast::Receiver<()>) {
    let mut buf = [0u8; MAX_DATAGRAM];

    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                break;
            }
            result = socket.recv_from(&mut buf) => {
                match result {
                    Ok((len, peer)) => {
                        let payload = String::from_utf8_lossy(&buf[..len]);
                        debug!(%peer, %payload, "datagram");
                        sender.push_raw(Source::Udp, &payload);
                    }
                    Err(e) => {
                        // Transient receive errors never take the game down
                        warn!("UDP receive error: {}", e);
                    }
                }
            }
        }
    }

    // Socket handle released on drop
    info!("UDP control listener stopped");
}
