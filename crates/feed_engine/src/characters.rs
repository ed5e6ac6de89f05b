use feed_logging::{feed_debug, feed_info};
use serde::Deserialize;

use crate::{ApiClient, Character, CharacterId, FailureKind, FetchError, PageEnvelope};

/// The bulk endpoint answers with a bare object when only one id matched.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Character>),
    One(Box<Character>),
}

impl From<OneOrMany> for Vec<Character> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::Many(characters) => characters,
            OneOrMany::One(character) => vec![*character],
        }
    }
}

/// Extracts the trailing numeric path segment of each reference.
///
/// References without one (or with a zero id) are dropped. Order and
/// duplicates are preserved.
pub fn character_ids_from_refs<S: AsRef<str>>(refs: &[S]) -> Vec<CharacterId> {
    refs.iter().filter_map(|r| trailing_id(r.as_ref())).collect()
}

fn trailing_id(reference: &str) -> Option<CharacterId> {
    let (_, last) = reference.rsplit_once('/')?;
    if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    last.parse::<CharacterId>().ok().filter(|id| *id > 0)
}

impl ApiClient {
    /// One page of the general character collection. No pagination loop.
    pub async fn load_character_page(&self, page: u32) -> Result<Vec<Character>, FetchError> {
        if page == 0 {
            return Err(FetchError::new(
                FailureKind::InvalidRequest,
                "character pages start at 1",
            ));
        }
        let url = self.endpoint(&format!("character?page={page}"));
        let envelope: PageEnvelope<Character> = self.get_json(&url).await?;
        feed_debug!("Character page {} has {} entries", page, envelope.results.len());
        Ok(envelope.results)
    }

    /// Resolves character resource URLs with a single bulk lookup.
    ///
    /// Returns immediately, without a request, when no reference carries an id.
    pub async fn resolve_characters_by_reference<S: AsRef<str>>(
        &self,
        refs: &[S],
    ) -> Result<Vec<Character>, FetchError> {
        let ids = character_ids_from_refs(refs);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let url = self.endpoint(&format!("character/{joined}"));
        let body: OneOrMany = self.get_json(&url).await?;
        let characters = Vec::from(body);
        feed_info!(
            "Resolved {} of {} character references",
            characters.len(),
            refs.len()
        );
        Ok(characters)
    }
}
