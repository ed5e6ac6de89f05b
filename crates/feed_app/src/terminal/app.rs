use std::sync::mpsc;
use std::time::Duration;

use feed_core::{update, AppState, Msg};
use feed_engine::{ApiClient, ApiConfig, ConfigError, EngineHandle, FetchError};
use feed_logging::{feed_info, feed_warn};
use log::LevelFilter;
use thiserror::Error;

use super::effects::{map_event, EffectRunner, Incoming};
use super::input::{parse_command, spawn_stdin_reader, Command, HELP};
use super::logging::{self, LogDestination};
use super::render::render;

const APP_NAME: &str = "Rick and Morty Feed";
const TICK: Duration = Duration::from_millis(75);

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client: {0}")]
    Client(#[from] FetchError),
    #[error("engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

pub fn run_app() -> Result<(), AppError> {
    logging::initialize(
        LogDestination::from_env(),
        feed_logging::level_from_env(LevelFilter::Info),
    );

    let version =
        std::env::var("APP_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
    let config = ApiConfig::from_env()?;
    feed_info!(
        "{} {} base_url={} timeout_ms={} cache_revalidate_s={}",
        APP_NAME,
        version,
        config.base_url,
        config.timeout.as_millis(),
        config.cache_revalidate.as_secs()
    );

    let engine = EngineHandle::new(ApiClient::new(config)?)?;
    let mut driver = Driver::new(EffectRunner::new(engine));
    println!("{APP_NAME} {version}");
    println!("{HELP}");

    driver.effects.check_health();
    driver.dispatch(Msg::Mounted);
    driver.run(spawn_stdin_reader());
    Ok(())
}

struct Driver {
    state: AppState,
    effects: EffectRunner,
}

impl Driver {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
        }
    }

    /// Single-threaded loop: all state changes happen here, in arrival order.
    fn run(&mut self, input_rx: mpsc::Receiver<String>) {
        let mut input_open = true;
        loop {
            self.drain_engine_events();

            if input_open {
                match input_rx.recv_timeout(TICK) {
                    Ok(line) => match parse_command(&line) {
                        Some(Command::Click(id)) => self.dispatch(Msg::EpisodeClicked(id)),
                        Some(Command::Reload) => self.dispatch(Msg::ReloadClicked),
                        Some(Command::Help) => println!("{HELP}"),
                        Some(Command::Quit) => break,
                        None => {}
                    },
                    Err(mpsc::RecvTimeoutError::Timeout) => self.dispatch(Msg::Tick),
                    Err(mpsc::RecvTimeoutError::Disconnected) => input_open = false,
                }
            } else {
                // End of input: wait for outstanding loads, then exit.
                let selection = self.state.selection();
                if !selection.episodes_loading && !selection.characters_loading {
                    break;
                }
                std::thread::sleep(TICK);
                self.dispatch(Msg::Tick);
            }
        }
        feed_info!("Driver loop finished");
    }

    fn drain_engine_events(&mut self) {
        while let Some(event) = self.effects.try_recv() {
            match map_event(event) {
                Incoming::Msg(msg) => self.dispatch(msg),
                Incoming::Health { reachable } => {
                    if !reachable {
                        feed_warn!("API health check failed");
                        println!("! API is not reachable right now");
                    }
                }
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.enqueue(effects);

        if was_dirty {
            for line in render(&self.state.view()) {
                println!("{line}");
            }
        }
    }
}
