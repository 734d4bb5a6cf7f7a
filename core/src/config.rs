use std::ops::RangeInclusive;
use std::time::Duration;

use anyhow::{Result, bail};
use reqwest::Url;
use tokio::sync::Semaphore;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:7878/";
pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_COUNT: u64 = 100;
pub const DEFAULT_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    endpoint: String,
    workers: usize,
    count: u64,
    delay: Duration,
}

impl Config {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Keys handed out to the batch, starting at 1.
    pub fn keys(&self) -> RangeInclusive<u64> {
        1..=self.count
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            workers: DEFAULT_WORKERS,
            count: DEFAULT_COUNT,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn with_workers(mut self, n: usize) -> Self {
        self.config.workers = n;
        self
    }

    pub fn with_count(mut self, n: u64) -> Self {
        self.config.count = n;
        self
    }

    pub fn with_delay(mut self, d: Duration) -> Self {
        self.config.delay = d;
        self
    }

    pub fn build(self) -> Result<Config> {
        let config = self.config;

        if config.workers == 0 {
            bail!("worker pool needs at least one slot");
        }
        if config.workers > Semaphore::MAX_PERMITS {
            bail!(
                "worker pool of {} exceeds the limit of {}",
                config.workers,
                Semaphore::MAX_PERMITS
            );
        }

        let url = Url::parse(&config.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("unsupported scheme in endpoint {}", config.endpoint);
        }

        Ok(config)
    }
}
