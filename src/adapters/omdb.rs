use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::ports::PosterLookup;
use crate::utils::error::{RankerError, Result};

/// The provider reports a missing poster as this literal string rather than
/// omitting the field.
const NOT_FOUND_SENTINEL: &str = "N/A";

/// Upper bound on a single lookup so an interactive add can never hang on a
/// slow provider. A timeout behaves exactly like "not found".
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Poster lookup against an OMDb-shaped metadata API.
///
/// Every failure mode at this boundary degrades to `Ok(None)`: transport
/// errors, non-success statuses, unparseable bodies, and the provider's own
/// `"N/A"` sentinel all mean the same thing to callers, namely no poster.
pub struct OmdbClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

impl OmdbClient {
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| RankerError::ConfigError {
            message: format!("Invalid API endpoint '{}': {}", endpoint, e),
        })?;
        let client = Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
        })
    }

    fn lookup_url(&self, title: &str, year: Option<u16>) -> Url {
        // query_pairs_mut percent-encodes the title.
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("t", title);
            if let Some(year) = year {
                pairs.append_pair("y", &year.to_string());
            }
            pairs.append_pair("apikey", &self.api_key);
        }
        url
    }
}

#[async_trait]
impl PosterLookup for OmdbClient {
    async fn lookup(&self, title: &str, year: Option<u16>) -> Result<Option<String>> {
        let url = self.lookup_url(title, year);
        tracing::debug!(title = %title, year = ?year, "Looking up poster");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Poster lookup request failed");
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                title = %title,
                status = %response.status(),
                "Poster lookup returned non-success status"
            );
            return Ok(None);
        }

        let body: OmdbResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Poster lookup returned malformed body");
                return Ok(None);
            }
        };

        Ok(body.poster.filter(|p| p != NOT_FOUND_SENTINEL))
    }
}
