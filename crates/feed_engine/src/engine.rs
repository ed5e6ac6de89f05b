use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use feed_logging::{feed_debug, feed_info};

use crate::{ApiClient, EngineEvent, RequestToken};

enum EngineCommand {
    LoadEpisodes {
        token: RequestToken,
    },
    LoadCharacterPage {
        token: RequestToken,
        page: u32,
    },
    ResolveCharacters {
        token: RequestToken,
        refs: Vec<String>,
    },
    CheckHealth,
}

/// Runs API calls on a background tokio runtime and reports completions
/// over a channel, so the caller's thread never blocks on the network.
///
/// Commands are executed concurrently; completion order follows network
/// latency, not submission order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(client: ApiClient) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(client);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("feed-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                feed_info!("Engine command channel closed, shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn load_episodes(&self, token: RequestToken) {
        self.send(EngineCommand::LoadEpisodes { token });
    }

    pub fn load_character_page(&self, token: RequestToken, page: u32) {
        self.send(EngineCommand::LoadCharacterPage { token, page });
    }

    pub fn resolve_characters(&self, token: RequestToken, refs: Vec<String>) {
        self.send(EngineCommand::ResolveCharacters { token, refs });
    }

    pub fn check_health(&self) {
        self.send(EngineCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(
    client: &ApiClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::LoadEpisodes { token } => {
            feed_debug!("LoadEpisodes token={}", token);
            let catalog = client.load_all_episodes().await;
            EngineEvent::EpisodesLoaded { token, catalog }
        }
        EngineCommand::LoadCharacterPage { token, page } => {
            feed_debug!("LoadCharacterPage token={} page={}", token, page);
            let result = client.load_character_page(page).await;
            EngineEvent::CharactersLoaded { token, result }
        }
        EngineCommand::ResolveCharacters { token, refs } => {
            feed_debug!("ResolveCharacters token={} refs={}", token, refs.len());
            let result = client.resolve_characters_by_reference(&refs).await;
            EngineEvent::CharactersLoaded { token, result }
        }
        EngineCommand::CheckHealth => EngineEvent::HealthChecked {
            reachable: client.check_api_health().await,
        },
    };
    let _ = event_tx.send(event);
}
