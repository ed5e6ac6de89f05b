#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view came up; start the initial loads.
    Mounted,
    /// User clicked an episode in the list.
    EpisodeClicked(crate::EpisodeId),
    /// User asked to start over after an error.
    ReloadClicked,
    /// Engine finished walking the episode collection.
    EpisodesLoaded {
        token: crate::RequestToken,
        episodes: Vec<crate::Episode>,
        /// False when the walk stopped before the last page.
        complete: bool,
    },
    /// Engine finished a character page load or an episode resolution.
    CharactersLoaded {
        token: crate::RequestToken,
        result: Result<Vec<crate::Character>, crate::ErrorKind>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
