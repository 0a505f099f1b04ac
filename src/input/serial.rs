//! Serial Control Listener (optional)
//!
//! Newline-delimited commands from an embedded controller, read on a
//! blocking worker thread and pushed through the shared normalizer.
//! Compiled in behind the `serial` feature; without it the listener is
//! a stub that reports the device as unavailable.

use tokio::sync::broadcast;

use crate::game::command::Source;
use crate::input::channel::InputSender;
use crate::input::ListenError;

/// Open the device and read lines until shutdown.
///
/// The port read blocks, so the loop runs inside `spawn_blocking` with
/// a short read timeout; each timeout tick the shutdown channel is
/// polled so the worker exits promptly.
#[cfg(feature = "serial")]
pub async fn run_serial_listener(
    device: String,
    baud: u32,
    sender: InputSender,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), ListenError> {
    use std::io::{BufRead, BufReader, ErrorKind};
    use std::time::Duration;
    use tracing::{debug, info, warn};

    let port = serialport::new(&device, baud)
        .timeout(Duration::from_secs(1))
        .open()
        .map_err(|e| ListenError::SerialOpen {
            device: device.clone(),
            message: e.to_string(),
        })?;
    info!("serial control listener on {} at {} baud", device, baud);

    let mut shutdown = shutdown;
    tokio::task::spawn_blocking(move || {
        let mut reader = BufReader::new(port);
        let mut line = String::new();

        loop {
            if shutdown.try_recv().is_ok() {
                break;
            }

            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => {
                    warn!("serial device {} disconnected", device);
                    break;
                }
                Ok(_) => {
                    debug!(raw = line.trim(), "serial line");
                    sender.push_raw(Source::Serial, &line);
                }
                // Timeout is the shutdown polling cadence, not a fault
                Err(e) if e.kind() == ErrorKind::TimedOut => {}
                Err(e) => {
                    warn!("serial read error on {}: {}", device, e);
                    break;
                }
            }
        }

        info!("serial control listener stopped");
    })
    .await?;

    Ok(())
}

/// Stub used when the crate is built without serial support.
#[cfg(not(feature = "serial"))]
pub async fn run_serial_listener(
    device: String,
    _baud: u32,
    _sender: InputSender,
    _shutdown: broadcast::Receiver<()>,
) -> Result<(), ListenError> {
    Err(ListenError::SerialOpen {
        device,
        message: "serial support not compiled in (enable the `serial` feature)".into(),
    })
}

#[cfg(all(test, not(feature = "serial")))]
mod tests {
    use super::*;
    use crate::input::channel::InputChannel;

    #[tokio::test]
    async fn test_stub_reports_unavailable() {
        let (_channel, sender) = InputChannel::new();
        let (_tx, rx) = broadcast::channel(1);
        let result = run_serial_listener("/dev/ttyUSB0".into(), 115_200, sender, rx).await;
        assert!(matches!(result, Err(ListenError::SerialOpen { .. })));
    }
}
