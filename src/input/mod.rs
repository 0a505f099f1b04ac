//! Concurrent Input Producers
//!
//! Every command source runs as an independent task that normalizes its
//! raw bytes and pushes `(Source, Command)` pairs into the shared input
//! channel. Producers never read or mutate simulation state; the
//! scheduler loop is the channel's only consumer.
//!
//! ## Module Structure
//!
//! - `channel`: the MPSC input channel and its producer handle
//! - `udp`: one-command-per-datagram UDP listener
//! - `serial`: newline-delimited serial listener (feature `serial`)
//! - `keyboard`: local line-based reader over stdin

pub mod channel;
pub mod keyboard;
pub mod serial;
pub mod udp;

pub use channel::{InputChannel, InputSender};

/// Listener startup/IO errors.
///
/// A failed listener is logged and simply stops contributing; the rest
/// of the system keeps running.
#[derive(Debug, thiserror::Error)]
pub enum ListenError {
    /// Could not bind the UDP control socket.
    #[error("failed to bind UDP socket: {0}")]
    Bind(#[source] std::io::Error),

    /// Could not open the serial device.
    #[error("failed to open serial device {device}: {message}")]
    SerialOpen {
        /// Device path from the configuration
        device: String,
        /// Underlying driver error text
        message: String,
    },

    /// A blocking listener task panicked or was cancelled.
    #[error("listener task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
