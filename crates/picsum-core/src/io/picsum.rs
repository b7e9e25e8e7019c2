use std::io::Read;
use std::time::Duration;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::SourceConfig;
use crate::error::{Result, ViewerError};
use crate::io::loader::ImageLoader;
use crate::picture::{Picture, PictureSequence};

/// Downloads a batch of random images over HTTP.
pub struct PicsumFetcher {
    agent: ureq::Agent,
    config: SourceConfig,
}

impl PicsumFetcher {
    pub fn new(config: SourceConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self { agent, config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Fetch `batch_size` images. Any failed item aborts the whole batch.
    pub fn fetch_batch(&self) -> Result<Vec<Vec<u8>>> {
        fetch_batch_with(&self.config, |url| self.fetch_one(url))
    }

    fn fetch_one(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.agent.get(url).call().map_err(|e| ViewerError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes)?;
        debug!(url, bytes = bytes.len(), "fetched image");
        Ok(bytes)
    }
}

/// Run `fetch` once per batch slot in parallel, keeping slot order.
///
/// Returns the first error encountered instead of a partial batch.
pub fn fetch_batch_with<F>(config: &SourceConfig, fetch: F) -> Result<Vec<Vec<u8>>>
where
    F: Fn(&str) -> Result<Vec<u8>> + Sync,
{
    let url = config.url.as_str();
    let batch: Result<Vec<Vec<u8>>> = (0..config.batch_size)
        .into_par_iter()
        .map(|_| fetch(url))
        .collect();

    match &batch {
        Ok(images) => info!(count = images.len(), url, "image batch fetched"),
        Err(e) => warn!(url, "image batch aborted: {e}"),
    }
    batch
}

/// Loader that fetches a fresh batch on every `load`.
pub struct PicsumLoader {
    fetcher: PicsumFetcher,
}

impl PicsumLoader {
    pub fn new(config: SourceConfig) -> Self {
        Self {
            fetcher: PicsumFetcher::new(config),
        }
    }

    /// Fetch a batch and wrap it as a sequence.
    pub fn fetch_sequence(&self) -> Result<PictureSequence> {
        let images = self.fetcher.fetch_batch()?;
        sequence_from_batch(images)
    }
}

impl Default for PicsumLoader {
    fn default() -> Self {
        Self::new(SourceConfig::default())
    }
}

impl ImageLoader for PicsumLoader {
    fn load(&self) -> Result<Picture> {
        Ok(self.fetch_sequence()?.first())
    }
}

/// Build a sequence from fetched bytes, rejecting an empty batch.
pub fn sequence_from_batch(images: Vec<Vec<u8>>) -> Result<PictureSequence> {
    if images.is_empty() {
        return Err(ViewerError::EmptySequence);
    }
    Ok(PictureSequence::new(images))
}
