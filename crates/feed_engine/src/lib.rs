//! Feed engine: remote API access, pagination and bulk lookups.
mod cache;
mod characters;
mod client;
mod config;
mod engine;
mod episodes;
mod fetch;
mod types;

pub use cache::ResponseCache;
pub use characters::character_ids_from_refs;
pub use client::ApiClient;
pub use config::{
    ApiConfig, ConfigError, BASE_URL_VAR, CACHE_REVALIDATE_VAR, DEFAULT_BASE_URL,
    DEFAULT_CACHE_REVALIDATE_SECS, DEFAULT_TIMEOUT_MS, TIMEOUT_VAR,
};
pub use engine::EngineHandle;
pub use episodes::MAX_EPISODE_PAGES;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{
    CatalogStop, Character, CharacterId, CharacterStatus, EngineEvent, Episode, EpisodeCatalog,
    EpisodeId, FailureKind, FetchError, FetchMetadata, FetchOutput, LocationRef, PageEnvelope,
    PageInfo, RequestToken,
};
