use feed_logging::feed_debug;

use crate::effect::INITIAL_CHARACTER_PAGE;
use crate::{Character, Effect, Episode, EpisodeId, ErrorKind, RequestToken};

/// What the user currently sees.
///
/// `visible_characters` holds either page one of the general collection (no
/// selection) or the characters of `selected_episode_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected_episode_id: Option<EpisodeId>,
    pub visible_characters: Vec<Character>,
    pub episodes_loading: bool,
    pub characters_loading: bool,
    pub error: Option<ErrorKind>,
}

/// Which character set a request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterIntent {
    AllCharacters,
    Episode(EpisodeId),
}

impl CharacterIntent {
    pub fn episode_id(self) -> Option<EpisodeId> {
        match self {
            CharacterIntent::AllCharacters => None,
            CharacterIntent::Episode(id) => Some(id),
        }
    }
}

/// Coarse state-machine view of [`AppState`].
///
/// Episode and character loads run side by side, so while both are pending
/// the character load is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingEpisodes,
    LoadingInitialCharacters,
    LoadingEpisodeCharacters(EpisodeId),
    Ready(Option<EpisodeId>),
    Error(ErrorKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCharacters {
    token: RequestToken,
    intent: CharacterIntent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    mounted: bool,
    episodes: Vec<Episode>,
    catalog_complete: bool,
    selection: SelectionState,
    /// Selection backed by the characters currently on screen.
    committed_selection: Option<EpisodeId>,
    last_token: RequestToken,
    episodes_request: Option<RequestToken>,
    characters_request: Option<PendingCharacters>,
    failed_intent: Option<CharacterIntent>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn episode(&self, id: EpisodeId) -> Option<&Episode> {
        self.episodes.iter().find(|episode| episode.id == id)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// False when the episode walk stopped early; the list may be partial.
    pub fn catalog_complete(&self) -> bool {
        self.catalog_complete
    }

    pub fn phase(&self) -> Phase {
        if let Some(kind) = self.selection.error {
            return Phase::Error(kind);
        }
        if !self.mounted {
            return Phase::Idle;
        }
        match self.characters_request {
            Some(PendingCharacters {
                intent: CharacterIntent::Episode(id),
                ..
            }) => return Phase::LoadingEpisodeCharacters(id),
            Some(_) => return Phase::LoadingInitialCharacters,
            None => {}
        }
        if self.selection.episodes_loading {
            return Phase::LoadingEpisodes;
        }
        Phase::Ready(self.selection.selected_episode_id)
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn failed_intent(&self) -> Option<CharacterIntent> {
        self.failed_intent
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn issue_token(&mut self) -> RequestToken {
        self.last_token += 1;
        self.last_token
    }

    /// Starts both initial loads. Tokens keep counting across reloads so
    /// completions from before a reload stay stale.
    pub(crate) fn mount(&mut self) -> Vec<Effect> {
        let last_token = self.last_token;
        *self = Self {
            last_token,
            ..Self::default()
        };
        self.mounted = true;

        let episodes_token = self.issue_token();
        self.episodes_request = Some(episodes_token);
        self.selection.episodes_loading = true;

        let characters_token = self.begin_characters_request(CharacterIntent::AllCharacters);
        self.mark_dirty();

        vec![
            Effect::LoadEpisodes {
                token: episodes_token,
            },
            Effect::LoadCharacterPage {
                token: characters_token,
                page: INITIAL_CHARACTER_PAGE,
            },
        ]
    }

    /// Supersedes any outstanding character request and applies the
    /// optimistic selection for `intent`.
    pub(crate) fn begin_characters_request(&mut self, intent: CharacterIntent) -> RequestToken {
        let token = self.issue_token();
        if let Some(previous) = self.characters_request.replace(PendingCharacters { token, intent }) {
            feed_debug!(
                "Character request {} superseded by {} ({:?})",
                previous.token,
                token,
                intent
            );
        }
        self.selection.selected_episode_id = intent.episode_id();
        self.selection.characters_loading = true;
        self.mark_dirty();
        token
    }

    pub(crate) fn apply_episodes(
        &mut self,
        token: RequestToken,
        episodes: Vec<Episode>,
        complete: bool,
    ) {
        if self.episodes_request != Some(token) {
            feed_debug!("Discarding stale episode catalog (token {})", token);
            return;
        }
        self.episodes_request = None;
        self.episodes = episodes;
        self.catalog_complete = complete;
        self.selection.episodes_loading = false;
        self.mark_dirty();
    }

    pub(crate) fn apply_characters(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Character>, ErrorKind>,
    ) {
        let Some(pending) = self.characters_request.take_if(|p| p.token == token) else {
            feed_debug!("Discarding stale character result (token {})", token);
            return;
        };
        self.selection.characters_loading = false;

        match result {
            Ok(characters) => {
                let selected = pending.intent.episode_id();
                self.selection.visible_characters = characters;
                self.selection.selected_episode_id = selected;
                self.selection.error = None;
                self.committed_selection = selected;
                self.failed_intent = None;
            }
            Err(kind) => {
                // Characters were never replaced; only the selection moved.
                self.selection.selected_episode_id = self.committed_selection;
                self.selection.error = Some(kind);
                self.failed_intent = Some(pending.intent);
            }
        }
        self.mark_dirty();
    }
}
