use crate::domain::model::{BreedImageResponse, BreedListResponse};
use crate::domain::ports::{BreedSource, ConfigProvider};
use crate::utils::error::{BrowseError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const LIST_ENDPOINT: &str = "breeds/list/all";
const IMAGE_ENDPOINT: &str = "breed/{breed}/images/random";

/// HTTP client for the dog API. One request per call, no retries, no
/// caching; the configured timeout is the only resilience knob.
#[derive(Debug, Clone)]
pub struct BreedApiClient {
    base_url: Url,
    client: Client,
}

impl BreedApiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base_url =
            Url::parse(config.base_url()).map_err(|_| BrowseError::InvalidRequestUrl {
                url: config.base_url().to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Appends path segments to the base URL. Each segment is
    /// percent-encoded by the `Url` machinery, so a breed name containing
    /// spaces or reserved characters can never corrupt the request path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BrowseError::InvalidRequestUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn list_endpoint(&self) -> Result<Url> {
        self.endpoint(&["breeds", "list", "all"])
    }

    fn image_endpoint(&self, breed: &str) -> Result<Url> {
        self.endpoint(&["breed", breed, "images", "random"])
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url, endpoint: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.error_for_status()?.text().await?;
        if body.trim().is_empty() {
            return Err(BrowseError::EmptyResponseBody {
                endpoint: endpoint.to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            // Full diagnostic goes to the log only, never to the user.
            tracing::debug!("Decode failure from {}: {}", endpoint, e);
            BrowseError::DecodeError {
                endpoint: endpoint.to_string(),
            }
        })
    }
}

#[async_trait]
impl BreedSource for BreedApiClient {
    async fn list_breeds(&self) -> Result<Vec<String>> {
        let url = self.list_endpoint()?;
        let response: BreedListResponse = self.fetch_json(url, LIST_ENDPOINT).await?;
        Ok(response.into_breed_names())
    }

    async fn random_image(&self, breed: &str) -> Result<String> {
        let url = self.image_endpoint(breed)?;
        let response: BreedImageResponse = self
            .fetch_json(url, IMAGE_ENDPOINT)
            .await?;
        Ok(response.message)
    }
}
