use std::fmt;

use serde::Deserialize;

pub type RequestToken = u64;
pub type EpisodeId = u32;
pub type CharacterId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Episode {
    pub id: EpisodeId,
    pub name: String,
    pub air_date: String,
    /// Season/episode label such as `S01E01`.
    #[serde(rename = "episode")]
    pub code: String,
    /// Character resource URLs, in the order the API lists them.
    #[serde(default)]
    pub characters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub origin: LocationRef,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl From<String> for CharacterStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Alive" => CharacterStatus::Alive,
            "Dead" => CharacterStatus::Dead,
            _ => CharacterStatus::Unknown,
        }
    }
}

/// One page of a collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageEnvelope<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub info: PageInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    pub count: Option<u32>,
    pub pages: Option<u32>,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl PageInfo {
    /// Next page link, treating an empty string the same as a missing one.
    pub fn next_link(&self) -> Option<&str> {
        self.next.as_deref().filter(|link| !link.is_empty())
    }
}

/// Result of walking the whole episode collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeCatalog {
    pub episodes: Vec<Episode>,
    pub pages_fetched: usize,
    pub stop: CatalogStop,
}

impl EpisodeCatalog {
    pub fn is_complete(&self) -> bool {
        self.stop == CatalogStop::Exhausted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStop {
    /// The last page had no `next` link.
    Exhausted,
    /// The page ceiling was hit while `next` links were still being served.
    PageLimit,
    /// Page number `page` (1-based) failed; earlier pages are kept.
    PageFailed { page: usize, kind: FailureKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    EpisodesLoaded {
        token: RequestToken,
        catalog: EpisodeCatalog,
    },
    CharactersLoaded {
        token: RequestToken,
        result: Result<Vec<Character>, FetchError>,
    },
    HealthChecked {
        reachable: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidRequest,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    MalformedResponse,
    Network,
}

impl FailureKind {
    /// True for failures that can only be raised after a 2xx status arrived.
    pub fn implies_success_status(&self) -> bool {
        matches!(
            self,
            FailureKind::TooLarge { .. }
                | FailureKind::UnsupportedContentType { .. }
                | FailureKind::MalformedResponse
        )
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
