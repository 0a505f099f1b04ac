//! Local Keyboard Reader
//!
//! Line-based reader over stdin for headless operation. Each line is one
//! command token run through the shared normalizer, the same contract as
//! the network sources. An embedding renderer that captures real key
//! events instead clones the `InputSender` and pushes directly.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::game::command::Source;
use crate::input::channel::InputSender;

/// Read command lines from stdin until EOF or shutdown.
pub async fn run_keyboard_listener(sender: InputSender, mut shutdown: broadcast::Receiver<()>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!("keyboard listener on stdin");

    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                break;
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(raw)) => {
                        debug!(raw = raw.trim(), "stdin line");
                        sender.push_raw(Source::Local, &raw);
                    }
                    // EOF or a broken stdin both end local input
                    Ok(None) | Err(_) => break,
                }
            }
        }
    }

    info!("keyboard listener stopped");
}
