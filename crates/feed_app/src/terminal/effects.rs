use feed_core::{Character, CharacterStatus, Effect, Episode, ErrorKind, Msg};
use feed_engine::{EngineEvent, EngineHandle, FailureKind};
use feed_logging::{feed_info, feed_warn};

/// Hands coordinator effects to the engine and turns engine completions
/// back into coordinator messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadEpisodes { token } => {
                    feed_info!("LoadEpisodes token={}", token);
                    self.engine.load_episodes(token);
                }
                Effect::LoadCharacterPage { token, page } => {
                    feed_info!("LoadCharacterPage token={} page={}", token, page);
                    self.engine.load_character_page(token, page);
                }
                Effect::ResolveEpisodeCharacters {
                    token,
                    episode_id,
                    refs,
                } => {
                    feed_info!(
                        "ResolveEpisodeCharacters token={} episode={} refs={}",
                        token,
                        episode_id,
                        refs.len()
                    );
                    self.engine.resolve_characters(token, refs);
                }
            }
        }
    }

    pub fn check_health(&self) {
        self.engine.check_health();
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.engine.try_recv()
    }
}

/// Engine event as seen by the driver loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Incoming {
    Msg(Msg),
    Health { reachable: bool },
}

pub fn map_event(event: EngineEvent) -> Incoming {
    match event {
        EngineEvent::EpisodesLoaded { token, catalog } => {
            if !catalog.is_complete() {
                feed_warn!(
                    "Episode catalog incomplete after {} pages: {:?}",
                    catalog.pages_fetched,
                    catalog.stop
                );
            }
            let complete = catalog.is_complete();
            Incoming::Msg(Msg::EpisodesLoaded {
                token,
                episodes: catalog.episodes.into_iter().map(map_episode).collect(),
                complete,
            })
        }
        EngineEvent::CharactersLoaded { token, result } => {
            let result = match result {
                Ok(characters) => Ok(characters.into_iter().map(map_character).collect()),
                Err(err) => {
                    feed_warn!("Character request {} failed: {}", token, err);
                    Err(map_failure(&err.kind))
                }
            };
            Incoming::Msg(Msg::CharactersLoaded { token, result })
        }
        EngineEvent::HealthChecked { reachable } => Incoming::Health { reachable },
    }
}

fn map_episode(episode: feed_engine::Episode) -> Episode {
    Episode {
        id: episode.id,
        code: episode.code,
        name: episode.name,
        air_date: episode.air_date,
        character_refs: episode.characters,
    }
}

fn map_character(character: feed_engine::Character) -> Character {
    Character {
        id: character.id,
        name: character.name,
        status: map_status(character.status),
        species: character.species,
        origin: character.origin.name,
        image: character.image,
    }
}

fn map_status(status: feed_engine::CharacterStatus) -> CharacterStatus {
    match status {
        feed_engine::CharacterStatus::Alive => CharacterStatus::Alive,
        feed_engine::CharacterStatus::Dead => CharacterStatus::Dead,
        feed_engine::CharacterStatus::Unknown => CharacterStatus::Unknown,
    }
}

fn map_failure(kind: &FailureKind) -> ErrorKind {
    match kind {
        FailureKind::Timeout => ErrorKind::Timeout,
        FailureKind::MalformedResponse => ErrorKind::MalformedResponse,
        FailureKind::InvalidRequest
        | FailureKind::HttpStatus(_)
        | FailureKind::TooLarge { .. }
        | FailureKind::UnsupportedContentType { .. }
        | FailureKind::Network => ErrorKind::Network,
    }
}
