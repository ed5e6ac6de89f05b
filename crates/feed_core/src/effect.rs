use crate::{EpisodeId, RequestToken};

/// Page of the general character collection shown when nothing is selected.
pub const INITIAL_CHARACTER_PAGE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadEpisodes {
        token: RequestToken,
    },
    LoadCharacterPage {
        token: RequestToken,
        page: u32,
    },
    ResolveEpisodeCharacters {
        token: RequestToken,
        episode_id: EpisodeId,
        refs: Vec<String>,
    },
}
