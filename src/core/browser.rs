use crate::domain::ports::{BreedSource, Presenter};
use crate::utils::error::Result;
use crate::utils::monitor::FetchMonitor;

/// Drives the two fetch flows and routes outcomes through the presenter.
///
/// The flows never overlap: an image fetch is only ever started after a
/// list fetch has completed (or from a direct CLI invocation). Each run
/// hands its result to the presenter on the caller's context and also
/// returns it, so the binary can map failures to exit codes.
pub struct BrowseEngine<S: BreedSource, P: Presenter> {
    source: S,
    presenter: P,
    monitor: FetchMonitor,
}

impl<S: BreedSource, P: Presenter> BrowseEngine<S, P> {
    pub fn new(source: S, presenter: P) -> Self {
        Self::new_with_monitoring(source, presenter, false)
    }

    pub fn new_with_monitoring(source: S, presenter: P, monitor_enabled: bool) -> Self {
        Self {
            source,
            presenter,
            monitor: FetchMonitor::new(monitor_enabled),
        }
    }

    pub async fn run_list(&self) -> Result<Vec<String>> {
        tracing::info!("Fetching breed list...");

        let outcome = self.source.list_breeds().await;
        self.monitor.request_done("breed list");

        match outcome {
            Ok(breeds) => {
                tracing::info!("Fetched {} breeds", breeds.len());
                self.presenter.breeds_loaded(&breeds);
                Ok(breeds)
            }
            Err(e) => {
                tracing::error!(
                    "❌ Breed list fetch failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                self.presenter.breeds_failed(&e);
                Err(e)
            }
        }
    }

    pub async fn run_image(&self, breed: &str) -> Result<String> {
        tracing::info!("Fetching random image for '{}'...", breed);

        let outcome = self.source.random_image(breed).await;
        self.monitor.request_done("breed image");

        match outcome {
            Ok(image_url) => {
                tracing::info!("Fetched image for '{}'", breed);
                self.presenter.image_loaded(breed, &image_url);
                Ok(image_url)
            }
            Err(e) => {
                tracing::error!(
                    "❌ Image fetch for '{}' failed: {} (Category: {:?}, Severity: {:?})",
                    breed,
                    e,
                    e.category(),
                    e.severity()
                );
                self.presenter.image_failed(breed, &e);
                Err(e)
            }
        }
    }

    pub fn finish(&self) {
        self.monitor.log_final_stats();
    }
}
