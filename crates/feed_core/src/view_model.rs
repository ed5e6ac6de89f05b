use crate::{AppState, CharacterId, CharacterIntent, CharacterStatus, EpisodeId, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub phase: Phase,
    pub episodes: Vec<EpisodeRowView>,
    pub heading: String,
    /// `Episode: S01E01` line under the heading while an episode is selected.
    pub subheading: Option<String>,
    pub characters: Vec<CharacterCardView>,
    pub show_spinner: bool,
    pub show_empty_notice: bool,
    pub catalog_notice: Option<String>,
    pub error: Option<ErrorView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRowView {
    pub id: EpisodeId,
    pub code: String,
    pub name: String,
    pub air_date: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCardView {
    pub id: CharacterId,
    pub name: String,
    pub status: CharacterStatus,
    /// `Alive - Human`
    pub status_line: String,
    pub origin: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub message: String,
    pub detail: String,
    pub retry_label: String,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let selection = self.selection();
        let selected = selection
            .selected_episode_id
            .map(|id| (id, self.episode(id)));

        let (heading, subheading) = match selected {
            None => ("All Characters".to_string(), None),
            Some((_, Some(episode))) => (
                format!("Characters from {}", episode.name),
                Some(format!("Episode: {}", episode.code)),
            ),
            Some((id, None)) => (format!("Characters from episode {id}"), None),
        };

        let episodes = self
            .episodes()
            .iter()
            .map(|episode| EpisodeRowView {
                id: episode.id,
                code: episode.code.clone(),
                name: episode.name.clone(),
                air_date: episode.air_date.clone(),
                selected: selection.selected_episode_id == Some(episode.id),
            })
            .collect();

        let characters = selection
            .visible_characters
            .iter()
            .map(|character| CharacterCardView {
                id: character.id,
                name: character.name.clone(),
                status: character.status,
                status_line: format!("{} - {}", character.status.label(), character.species),
                origin: character.origin.clone(),
                image: character.image.clone(),
            })
            .collect::<Vec<_>>();

        let error = selection.error.map(|kind| {
            let message = match self.failed_intent() {
                Some(CharacterIntent::Episode(_)) => "Failed to load episode characters",
                _ => "Failed to load characters",
            };
            ErrorView {
                message: message.to_string(),
                detail: kind.to_string(),
                retry_label: "Retry".to_string(),
            }
        });

        let catalog_notice = (self.is_mounted()
            && !selection.episodes_loading
            && !self.catalog_complete())
        .then(|| "Some episodes might be missing".to_string());

        AppViewModel {
            phase: self.phase(),
            episodes,
            heading,
            subheading,
            show_spinner: selection.characters_loading,
            show_empty_notice: self.is_mounted()
                && !selection.characters_loading
                && characters.is_empty(),
            characters,
            catalog_notice,
            error,
            dirty: self.is_dirty(),
        }
    }
}
