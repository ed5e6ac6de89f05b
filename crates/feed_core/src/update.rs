use feed_logging::feed_warn;

use crate::effect::INITIAL_CHARACTER_PAGE;
use crate::{AppState, CharacterIntent, Effect, EpisodeId, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.is_mounted() {
                Vec::new()
            } else {
                state.mount()
            }
        }
        Msg::ReloadClicked => state.mount(),
        Msg::EpisodeClicked(episode_id) => episode_clicked(&mut state, episode_id),
        Msg::EpisodesLoaded {
            token,
            episodes,
            complete,
        } => {
            state.apply_episodes(token, episodes, complete);
            Vec::new()
        }
        Msg::CharactersLoaded { token, result } => {
            state.apply_characters(token, result);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn episode_clicked(state: &mut AppState, episode_id: EpisodeId) -> Vec<Effect> {
    // The error screen only offers a reload.
    if !state.is_mounted() || state.selection().error.is_some() {
        return Vec::new();
    }

    if state.selection().selected_episode_id == Some(episode_id) {
        let token = state.begin_characters_request(CharacterIntent::AllCharacters);
        return vec![Effect::LoadCharacterPage {
            token,
            page: INITIAL_CHARACTER_PAGE,
        }];
    }

    let Some(refs) = state
        .episode(episode_id)
        .map(|episode| episode.character_refs.clone())
    else {
        feed_warn!("Ignoring click on unknown episode {}", episode_id);
        return Vec::new();
    };
    let token = state.begin_characters_request(CharacterIntent::Episode(episode_id));
    vec![Effect::ResolveEpisodeCharacters {
        token,
        episode_id,
        refs,
    }]
}
