use std::sync::Arc;

use feed_logging::{feed_debug, feed_info, feed_warn};
use serde::de::DeserializeOwned;

use crate::cache::ResponseCache;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{ApiConfig, FailureKind, FetchError};

/// Entry point for every remote call: owns the configuration, the transport
/// and the response cache.
pub struct ApiClient {
    config: ApiConfig,
    fetcher: Arc<dyn Fetcher>,
    cache: ResponseCache,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let fetcher = ReqwestFetcher::new(FetchSettings::from_config(&config))?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    pub fn with_fetcher(config: ApiConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        let cache = ResponseCache::new(config.cache_revalidate);
        Self {
            config,
            fetcher,
            cache,
        }
    }

    /// The active configuration, for diagnostics.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// GET `url` and decode it as JSON, going through the response cache.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        if let Some(bytes) = self.cache.get(url) {
            feed_debug!("cache hit {}", url);
            return decode(url, &bytes);
        }

        let output = self.fetcher.get(url).await?;
        let decoded = decode(url, &output.bytes)?;
        self.cache.insert(url, output.bytes);
        Ok(decoded)
    }

    /// Bare request to the base URL. Any failure is reported as unreachable.
    pub async fn check_api_health(&self) -> bool {
        let reachable = match self.fetcher.get(&self.config.base_url).await {
            Ok(_) => true,
            Err(err) if err.kind.implies_success_status() => true,
            Err(err) => {
                feed_warn!("Health check against {} failed: {}", self.config.base_url, err);
                false
            }
        };
        feed_info!(
            "Health check base_url={} reachable={}",
            self.config.base_url,
            reachable
        );
        reachable
    }
}

fn decode<T: DeserializeOwned>(url: &str, bytes: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(bytes).map_err(|err| {
        FetchError::new(
            FailureKind::MalformedResponse,
            format!("unexpected response shape from {url}: {err}"),
        )
    })
}
