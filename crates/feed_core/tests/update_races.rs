use std::sync::Once;

use feed_core::{update, AppState, Character, CharacterStatus, Effect, Episode, ErrorKind, Msg, Phase};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(feed_logging::initialize_for_tests);
}

fn episode(id: u32) -> Episode {
    Episode {
        id,
        code: format!("S02E{id:02}"),
        name: format!("Episode {id}"),
        air_date: "July 26, 2015".to_string(),
        character_refs: vec![format!("https://example.com/api/character/{}", id * 10)],
    }
}

fn character(id: u32) -> Character {
    Character {
        id,
        name: format!("Character {id}"),
        status: CharacterStatus::Unknown,
        species: "Alien".to_string(),
        origin: "unknown".to_string(),
        image: String::new(),
    }
}

fn ready_state() -> AppState {
    let (mut state, effects) = update(AppState::new(), Msg::Mounted);
    for effect in effects {
        let msg = match effect {
            Effect::LoadEpisodes { token } => Msg::EpisodesLoaded {
                token,
                episodes: vec![episode(1), episode(2), episode(3)],
                complete: true,
            },
            Effect::LoadCharacterPage { token, .. } => Msg::CharactersLoaded {
                token,
                result: Ok(vec![character(100)]),
            },
            other => panic!("unexpected mount effect {other:?}"),
        };
        state = update(state, msg).0;
    }
    state
}

fn click(state: AppState, episode_id: u32) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::EpisodeClicked(episode_id));
    let token = match effects.as_slice() {
        [Effect::ResolveEpisodeCharacters { token, .. }] | [Effect::LoadCharacterPage { token, .. }] => {
            *token
        }
        other => panic!("expected one character effect, got {other:?}"),
    };
    (state, token)
}

fn complete(state: AppState, token: u64, result: Result<Vec<Character>, ErrorKind>) -> AppState {
    update(state, Msg::CharactersLoaded { token, result }).0
}

#[test]
fn late_result_of_a_superseded_click_is_discarded() {
    init_logging();
    let state = ready_state();
    let (state, token_a) = click(state, 1);
    let (state, token_b) = click(state, 2);
    assert!(token_b > token_a);

    // B answers first, then A straggles in.
    let state = complete(state, token_b, Ok(vec![character(20)]));
    let state = complete(state, token_a, Ok(vec![character(10)]));

    assert_eq!(state.selection().selected_episode_id, Some(2));
    assert_eq!(state.selection().visible_characters, vec![character(20)]);
    assert_eq!(state.phase(), Phase::Ready(Some(2)));
}

#[test]
fn early_result_of_a_superseded_click_does_not_clear_loading() {
    init_logging();
    let state = ready_state();
    let (state, token_a) = click(state, 1);
    let (mut state, token_b) = click(state, 2);
    assert!(state.consume_dirty());

    let mut state = complete(state, token_a, Ok(vec![character(10)]));
    assert!(!state.consume_dirty());
    assert!(state.selection().characters_loading);
    assert_eq!(state.selection().selected_episode_id, Some(2));
    assert_eq!(state.selection().visible_characters, vec![character(100)]);

    let state = complete(state, token_b, Ok(vec![character(20)]));
    assert!(!state.selection().characters_loading);
    assert_eq!(state.selection().visible_characters, vec![character(20)]);
}

#[test]
fn rapid_toggle_keeps_only_the_last_intent() {
    init_logging();
    let state = ready_state();
    let (state, select_token) = click(state, 3);
    let (state, toggle_token) = click(state, 3);
    assert_eq!(state.selection().selected_episode_id, None);

    let state = complete(state, toggle_token, Ok(vec![character(100)]));
    let state = complete(state, select_token, Ok(vec![character(30)]));

    assert_eq!(state.selection().selected_episode_id, None);
    assert_eq!(state.selection().visible_characters, vec![character(100)]);
}

#[test]
fn failed_selection_rolls_back_to_the_last_committed_one() {
    init_logging();
    let state = ready_state();
    let (state, token) = click(state, 1);
    let state = complete(state, token, Ok(vec![character(10)]));

    let (state, token) = click(state, 2);
    assert_eq!(state.selection().selected_episode_id, Some(2));
    let state = complete(state, token, Err(ErrorKind::Timeout));

    let selection = state.selection();
    assert_eq!(selection.selected_episode_id, Some(1));
    assert_eq!(selection.visible_characters, vec![character(10)]);
    assert_eq!(selection.error, Some(ErrorKind::Timeout));
    assert!(!selection.characters_loading);
}

#[test]
fn failed_toggle_off_restores_the_selection() {
    init_logging();
    let state = ready_state();
    let (state, token) = click(state, 1);
    let state = complete(state, token, Ok(vec![character(10)]));

    let (state, token) = click(state, 1);
    assert_eq!(state.selection().selected_episode_id, None);
    let state = complete(state, token, Err(ErrorKind::Network));

    assert_eq!(state.selection().selected_episode_id, Some(1));
    assert_eq!(state.selection().visible_characters, vec![character(10)]);
    assert_eq!(state.phase(), Phase::Error(ErrorKind::Network));
    assert_eq!(
        state.view().error.map(|e| e.message),
        Some("Failed to load characters".to_string())
    );
}

#[test]
fn stale_failure_is_discarded() {
    init_logging();
    let state = ready_state();
    let (state, token_a) = click(state, 1);
    let (state, token_b) = click(state, 2);

    let state = complete(state, token_a, Err(ErrorKind::Network));
    assert_eq!(state.selection().error, None);

    let state = complete(state, token_b, Ok(vec![character(20)]));
    assert_eq!(state.phase(), Phase::Ready(Some(2)));
}

#[test]
fn duplicate_completion_is_applied_once() {
    init_logging();
    let state = ready_state();
    let (state, token) = click(state, 1);
    let mut state = complete(state, token, Ok(vec![character(10)]));
    assert!(state.consume_dirty());

    let mut state = complete(state, token, Ok(vec![character(99)]));
    assert!(!state.consume_dirty());
    assert_eq!(state.selection().visible_characters, vec![character(10)]);
}
