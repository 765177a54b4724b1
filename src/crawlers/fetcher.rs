use crate::config::HarvestConfig;
use crate::error::{FetchError, HarvestError, Result};
use std::future::Future;

/// Retrieves the body of a page
///
/// The collector only ever needs a GET returning the body text; anything
/// beyond that (redirects, pooling) is left to the implementation.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = std::result::Result<String, FetchError>>;
}

/// [`Fetcher`] backed by a `reqwest` client carrying the configured
/// User-Agent and timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(HarvestError::Client)?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}
