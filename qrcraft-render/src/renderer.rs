//! Async client for the remote rendering service.

use crate::error::{RenderError, RenderResult};
use crate::options::{RenderConfig, RenderOptions};
use crate::url::build_image_url;
use reqwest::Client;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the remote QR rendering service.
///
/// Holds one `reqwest::Client` for its lifetime and enforces a single
/// outstanding download: a second `download` while one is running returns
/// [`RenderError::DownloadInFlight`]. The flag is released whether the
/// fetch succeeds or fails, so a failure leaves the client ready again.
pub struct QrRenderer {
    config: RenderConfig,
    client: Client,
    downloading: AtomicBool,
}

impl QrRenderer {
    /// Creates a new renderer for the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self {
            config,
            client,
            downloading: AtomicBool::new(false),
        }
    }

    /// Returns the rendering URL for a payload against the configured
    /// service.
    #[must_use]
    pub fn image_url(&self, options: &RenderOptions, payload: &str) -> String {
        build_image_url(&self.config.api_base_url, options, payload)
    }

    /// Returns true while a download is in flight.
    #[must_use]
    pub fn is_downloading(&self) -> bool {
        self.downloading.load(Ordering::Acquire)
    }

    /// Fetches the rendered PNG bytes for a payload.
    pub async fn fetch_png(
        &self,
        options: &RenderOptions,
        payload: &str,
    ) -> RenderResult<Vec<u8>> {
        let url = self.image_url(options, payload);
        debug!("fetching QR image: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Api {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("fetched {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Fetches the rendered PNG and writes it to `path`.
    ///
    /// Rejects the call with [`RenderError::DownloadInFlight`] if another
    /// download is still running. A failed fetch is logged and leaves no
    /// file behind.
    pub async fn download(
        &self,
        options: &RenderOptions,
        payload: &str,
        path: &Path,
    ) -> RenderResult<()> {
        if self
            .downloading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(RenderError::DownloadInFlight);
        }

        let result = self.save_png(options, payload, path).await;
        self.downloading.store(false, Ordering::Release);

        if let Err(err) = &result {
            warn!("download failed: {}", err);
        }
        result
    }

    async fn save_png(
        &self,
        options: &RenderOptions,
        payload: &str,
        path: &Path,
    ) -> RenderResult<()> {
        let bytes = self.fetch_png(options, payload).await?;
        tokio::fs::write(path, &bytes).await?;
        info!("saved QR code to {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}
