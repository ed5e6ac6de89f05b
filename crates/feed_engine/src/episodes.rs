use feed_logging::{feed_error, feed_info, feed_warn};

use crate::{ApiClient, CatalogStop, Episode, EpisodeCatalog, PageEnvelope};

/// Safety bound on the number of episode pages followed.
pub const MAX_EPISODE_PAGES: usize = 100;

impl ApiClient {
    /// Walks `{base}/episode` and its `info.next` links to the end.
    ///
    /// Never fails: a page error or the page ceiling ends the walk early and
    /// the episodes gathered so far are returned with the reason in
    /// [`EpisodeCatalog::stop`].
    pub async fn load_all_episodes(&self) -> EpisodeCatalog {
        let mut episodes: Vec<Episode> = Vec::new();
        let mut next_url = Some(self.endpoint("episode"));
        let mut pages_fetched = 0;

        while let Some(url) = next_url.take() {
            if pages_fetched >= MAX_EPISODE_PAGES {
                feed_warn!(
                    "Reached maximum page limit ({}), some episodes might be missing",
                    MAX_EPISODE_PAGES
                );
                return EpisodeCatalog {
                    episodes,
                    pages_fetched,
                    stop: CatalogStop::PageLimit,
                };
            }

            match self.get_json::<PageEnvelope<Episode>>(&url).await {
                Ok(page) => {
                    next_url = page.info.next_link().map(ToOwned::to_owned);
                    episodes.extend(page.results);
                    pages_fetched += 1;
                }
                Err(err) => {
                    let page = pages_fetched + 1;
                    feed_error!("Error fetching episode page {} ({}): {}", page, url, err);
                    return EpisodeCatalog {
                        episodes,
                        pages_fetched,
                        stop: CatalogStop::PageFailed {
                            page,
                            kind: err.kind,
                        },
                    };
                }
            }
        }

        feed_info!(
            "Loaded {} episodes from {} pages",
            episodes.len(),
            pages_fetched
        );
        EpisodeCatalog {
            episodes,
            pages_fetched,
            stop: CatalogStop::Exhausted,
        }
    }
}
