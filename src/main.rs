//! Snake Waves
//!
//! Headless arcade simulation runner: wires the input listeners, the
//! scheduler loop, and score persistence together and runs until the
//! player exits or the process is interrupted.

use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use snake_waves::{
    config::Config,
    core::rng::DeterministicRng,
    game::state::GameState,
    input::{keyboard, serial, udp, InputChannel},
    persist::BestScoreStore,
    runtime::{HudSink, Scheduler},
    VERSION,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config_path: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    info!("Snake Waves v{}", VERSION);
    info!("UDP control: {}", config.udp_bind);
    match &config.serial_device {
        Some(device) => info!("Serial control: {} at {} baud", device, config.serial_baud),
        None => info!("Serial control: disabled"),
    }

    let store = BestScoreStore::new(&config.best_score_path);
    let best_score = store.load();
    let rng = match config.rng_seed {
        Some(seed) => DeterministicRng::new(seed),
        None => DeterministicRng::from_entropy(),
    };

    let state = GameState::new(config.hunger_limit, best_score, rng);
    let (inputs, sender) = InputChannel::new();
    let scheduler = Scheduler::new(state, inputs, store, config.frame_rate);

    // Listener tasks; a failed listener is logged and the rest keep going
    {
        let sender = sender.clone();
        let shutdown = scheduler.shutdown_handle();
        let bind = config.udp_bind;
        tokio::spawn(async move {
            if let Err(e) = udp::run_udp_listener(bind, sender, shutdown).await {
                warn!("{}", e);
            }
        });
    }

    if let Some(device) = config.serial_device.clone() {
        let sender = sender.clone();
        let shutdown = scheduler.shutdown_handle();
        let baud = config.serial_baud;
        tokio::spawn(async move {
            if let Err(e) = serial::run_serial_listener(device, baud, sender, shutdown).await {
                warn!("{}", e);
            }
        });
    }

    tokio::spawn(keyboard::run_keyboard_listener(
        sender,
        scheduler.shutdown_handle(),
    ));

    // Ctrl-C drains into the same shutdown broadcast as the exit selection
    {
        let trigger = scheduler.shutdown_trigger();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received");
                let _ = trigger.send(());
            }
        });
    }

    let mut sink = HudSink::default();
    let final_state = scheduler.run(&mut sink).await?;
    info!(
        score = final_state.score,
        best = final_state.best_score,
        "goodbye"
    );
    Ok(())
}
