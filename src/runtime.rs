//! Scheduler Loop
//!
//! The single writer. Each frame it drains the input channel, routes
//! every command in arrival order, advances the simulation by measured
//! wall-clock delta time, and presents a snapshot. No other task ever
//! touches `GameState`.

use std::time::{Duration, Instant};

use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::game::routing::{apply_command, RouteEffect};
use crate::game::state::{GameState, Mode, Snapshot};
use crate::game::tick::{advance, GameEvent};
use crate::input::channel::InputChannel;
use crate::persist::BestScoreStore;

// ============================================================
// Render sinks
// ============================================================

/// Per-frame snapshot consumer.
///
/// The scheduler is renderer-agnostic: a terminal HUD, a test recorder,
/// and a graphical front end all plug in here.
pub trait RenderSink {
    /// Receive the frame's snapshot. Called once per scheduler frame.
    fn present(&mut self, snapshot: &Snapshot);
}

/// Sink that discards every frame.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _snapshot: &Snapshot) {}
}

/// Logging sink for headless runs: one line per observable change
/// rather than one per frame.
#[derive(Debug, Default)]
pub struct HudSink {
    last_mode: Option<Mode>,
    last_score: u32,
    last_wave: u32,
}

impl RenderSink for HudSink {
    fn present(&mut self, snapshot: &Snapshot) {
        let mode_changed = self.last_mode != Some(snapshot.mode);
        if mode_changed {
            info!(mode = ?snapshot.mode, "mode");
        }
        if mode_changed || snapshot.score != self.last_score || snapshot.wave_number != self.last_wave
        {
            info!(
                score = snapshot.score,
                best = snapshot.best_score,
                wave = snapshot.wave_number,
                time_remaining = format!("{:.1}", snapshot.time_remaining),
                "hud"
            );
        }
        self.last_mode = Some(snapshot.mode);
        self.last_score = snapshot.score;
        self.last_wave = snapshot.wave_number;
    }
}

// ============================================================
// Scheduler
// ============================================================

/// Owns the game state and drives it at a fixed frame rate.
pub struct Scheduler {
    state: GameState,
    inputs: InputChannel,
    store: BestScoreStore,
    shutdown: broadcast::Sender<()>,
    frame_rate: u32,
}

impl Scheduler {
    /// Build a scheduler around pre-assembled state and channel halves.
    pub fn new(
        state: GameState,
        inputs: InputChannel,
        store: BestScoreStore,
        frame_rate: u32,
    ) -> Self {
        let (shutdown, _) = broadcast::channel(1);
        Self {
            state,
            inputs,
            store,
            shutdown,
            frame_rate: frame_rate.max(1),
        }
    }

    /// Subscribe a listener task to the shutdown signal.
    pub fn shutdown_handle(&self) -> broadcast::Receiver<()> {
        self.shutdown.subscribe()
    }

    /// Clone the shutdown trigger, for signal handlers.
    pub fn shutdown_trigger(&self) -> broadcast::Sender<()> {
        self.shutdown.clone()
    }

    /// Run until the player exits or shutdown is signalled. Returns the
    /// final state for inspection.
    pub async fn run(mut self, sink: &mut dyn RenderSink) -> anyhow::Result<GameState> {
        let frame = Duration::from_secs_f64(1.0 / f64::from(self.frame_rate));
        let mut interval = tokio::time::interval(frame);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut shutdown = self.shutdown.subscribe();
        let mut last_frame = Instant::now();

        info!(frame_rate = self.frame_rate, "scheduler running");

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    info!("shutdown signalled");
                    break;
                }
                _ = interval.tick() => {}
            }

            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;

            // Drain to empty; arrival order is application order
            let mut quit = false;
            while let Some((source, cmd)) = self.inputs.try_recv() {
                debug!(?source, ?cmd, "command");
                if apply_command(&mut self.state, cmd) == RouteEffect::Quit {
                    quit = true;
                }
            }
            if quit {
                break;
            }

            let result = advance(&mut self.state, dt);
            for event in &result.events {
                if let GameEvent::GameOver {
                    new_best: Some(best),
                    ..
                } = event
                {
                    self.store.save(*best);
                }
            }

            sink.present(&self.state.snapshot());
        }

        // Wake every producer so their tasks exit
        let _ = self.shutdown.send(());
        info!(
            score = self.state.score,
            best = self.state.best_score,
            "scheduler stopped"
        );
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::DeterministicRng;
    use crate::game::command::{Command, Source};
    use crate::input::channel::InputSender;
    use std::path::PathBuf;

    struct RecordingSink {
        frames: Vec<Snapshot>,
    }

    impl RenderSink for RecordingSink {
        fn present(&mut self, snapshot: &Snapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    fn temp_store(name: &str) -> (BestScoreStore, PathBuf) {
        let path = std::env::temp_dir().join(format!(
            "snake-waves-sched-{}-{}",
            std::process::id(),
            name
        ));
        (BestScoreStore::new(&path), path)
    }

    fn scheduler(hunger_limit: f64, name: &str) -> (Scheduler, InputSender, PathBuf) {
        let state = GameState::new(hunger_limit, 0, DeterministicRng::new(11));
        let (inputs, sender) = InputChannel::new();
        let (store, path) = temp_store(name);
        (Scheduler::new(state, inputs, store, 120), sender, path)
    }

    #[tokio::test]
    async fn test_shutdown_signal_stops_the_loop() {
        let (scheduler, sender, _path) = scheduler(20.0, "quit");
        let mut sink = NullSink;
        drop(sender);
        let trigger = scheduler.shutdown_trigger();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = trigger.send(());
        });

        let state = tokio::time::timeout(Duration::from_secs(2), scheduler.run(&mut sink))
            .await
            .expect("scheduler should stop on shutdown")
            .unwrap();
        assert_eq!(state.mode, Mode::Menu);
    }

    #[tokio::test]
    async fn test_starvation_reaches_game_over() {
        let (scheduler, sender, _path) = scheduler(0.001, "starve");
        sender.push(Source::Local, Command::Enter);

        let mut sink = RecordingSink { frames: Vec::new() };
        let trigger = scheduler.shutdown_trigger();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = trigger.send(());
        });

        let state = tokio::time::timeout(Duration::from_secs(2), scheduler.run(&mut sink))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(state.mode, Mode::GameOver);
        assert!(sink
            .frames
            .iter()
            .any(|frame| frame.mode == Mode::GameOver));
    }

    #[tokio::test]
    async fn test_exit_selection_returns_final_state() {
        let (mut scheduler, sender, _path) = scheduler(20.0, "exit");
        scheduler.state.mode = Mode::GameOver;
        scheduler.state.score = 9;

        // Move cursor to "exit" and confirm
        sender.push(Source::Local, Command::Down);
        sender.push(Source::Local, Command::Enter);

        let mut sink = NullSink;
        let state = tokio::time::timeout(Duration::from_secs(2), scheduler.run(&mut sink))
            .await
            .expect("quit selection should end the run")
            .unwrap();
        assert_eq!(state.score, 9);
        assert_eq!(state.mode, Mode::GameOver);
    }

    #[tokio::test]
    async fn test_commands_apply_in_arrival_order() {
        let (scheduler, sender, _path) = scheduler(20.0, "order");
        sender.push(Source::Local, Command::Enter);
        sender.push_raw(Source::Udp, "u");
        sender.push_raw(Source::Serial, "LEFT");
        sender.push_raw(Source::Udp, "right");

        let mut sink = NullSink;
        let trigger = scheduler.shutdown_trigger();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            let _ = trigger.send(());
        });

        let state = tokio::time::timeout(Duration::from_secs(2), scheduler.run(&mut sink))
            .await
            .unwrap()
            .unwrap();
        // "LEFT" reverses the committed direction and is dropped; the
        // later "right" is the last valid request and wins.
        assert_ne!(
            state.direction,
            crate::core::grid::Direction::Left
        );
    }

    #[tokio::test]
    async fn test_hud_sink_tracks_changes() {
        let mut sink = HudSink::default();
        let state = GameState::new(20.0, 3, DeterministicRng::new(5));
        // Must not panic, and repeated frames are fine
        sink.present(&state.snapshot());
        sink.present(&state.snapshot());
        assert_eq!(sink.last_score, 0);
        assert_eq!(sink.last_mode, Some(Mode::Menu));
    }
}
