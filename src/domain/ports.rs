use crate::utils::error::{BrowseError, Result};
use async_trait::async_trait;

/// Source of breed data. The production implementation talks to the dog API
/// over HTTP; tests substitute an in-memory fake.
///
/// Both operations are single-shot: one request, one response, no retries.
/// Dropping the returned future aborts the request in flight.
#[async_trait]
pub trait BreedSource: Send + Sync {
    async fn list_breeds(&self) -> Result<Vec<String>>;
    async fn random_image(&self, breed: &str) -> Result<String>;
}

/// Where results land. The engine calls these on the caller's context;
/// the adapter decides how to render.
pub trait Presenter: Send + Sync {
    fn breeds_loaded(&self, breeds: &[String]);
    fn breeds_failed(&self, error: &BrowseError);
    fn image_loaded(&self, breed: &str, image_url: &str);
    fn image_failed(&self, breed: &str, error: &BrowseError);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn monitoring_enabled(&self) -> bool;
}
