use std::fmt;

pub type RequestToken = u64;
pub type EpisodeId = u32;
pub type CharacterId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub id: EpisodeId,
    /// Season/episode label such as `S01E01`.
    pub code: String,
    pub name: String,
    pub air_date: String,
    pub character_refs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub origin: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[default]
    Unknown,
}

impl CharacterStatus {
    pub fn label(self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-2xx status.
    Network,
    Timeout,
    /// The response did not have the expected shape.
    MalformedResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Timeout => write!(f, "request timed out"),
            ErrorKind::MalformedResponse => write!(f, "unexpected response from server"),
        }
    }
}
