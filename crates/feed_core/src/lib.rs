//! Feed core: pure selection state machine and view-model helpers.
mod effect;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, INITIAL_CHARACTER_PAGE};
pub use model::{Character, CharacterId, CharacterStatus, Episode, EpisodeId, ErrorKind, RequestToken};
pub use msg::Msg;
pub use state::{AppState, CharacterIntent, Phase, SelectionState};
pub use update::update;
pub use view_model::{AppViewModel, CharacterCardView, EpisodeRowView, ErrorView};
